//! Preset control module
//!
//! Every cycle the operator's controls and the arm telemetry are arbitrated into a single
//! [`Preset`](comms_if::eqpt::arm::Preset) which motion control uses as its setpoint target.
//!
//! Arbitration happens in two stages:
//!
//! 1. The controls are turned into a raw request. The POV hat wins over the high ball and climb
//!    buttons, and with nothing pressed the request drops back to `Manual` only if every manual
//!    gate is clear.
//! 2. The raw request passes through the interlock, which forces a stop at `Mid` whenever the arm
//!    would otherwise move directly between the retracted and extended poses.
//!
//! The only memory carried between cycles is the [`ArbiterMemory`].

// ---------------------------------------------------------------------------
// MODULES
// ---------------------------------------------------------------------------

mod arbiter;
mod gates;
mod interlock;
mod params;
mod state;

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// Internal
pub use arbiter::*;
pub use gates::*;
pub use interlock::*;
pub use params::*;
pub use state::*;

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

/// Possible errors that can occur during PresetCtrl initialisation.
///
/// Cyclic processing itself cannot fail.
#[derive(Debug, thiserror::Error)]
pub enum PresetCtrlError {
    #[error("Could not load the PresetCtrl parameters: {0}")]
    ParamLoadError(#[from] util::params::LoadError),

    #[error("Invalid PresetCtrl parameter: {0}")]
    InvalidParams(String),

    #[error("Could not create the PresetCtrl archive: {0}")]
    ArchiveError(#[from] util::archive::ArchiveError),
}
