//! Cyclic module interface
//!
//! `arm_exec` drives every control module through [`State`]: one `init` with
//! the module's parameter file before the main loop, then one `proc` per
//! control cycle.

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// Internal imports
use crate::session::Session;

// ---------------------------------------------------------------------------
// MODULE STATE
// ---------------------------------------------------------------------------

/// A cyclic control module.
///
/// The implementor owns whatever memory must survive between two cycles (for
/// the preset controller, the last committed preset and the latched request).
/// `proc` sees only the inputs sampled for the current cycle.
pub trait State {
    // ---- INITIALISATION ----

    /// What `init` needs, usually the name of a file under `params/`.
    type InitData;
    type InitError;

    // ---- CYCLIC PROCESSING ----

    /// Inputs held in the data store at the start of the cycle.
    type InputData;
    /// The value commanded for this cycle.
    type OutputData;
    /// Diagnostics for this cycle, also what gets archived.
    type StatusReport;
    /// Modules which cannot fail per cycle use `std::convert::Infallible`.
    type ProcError;

    /// Load parameters and open archives under the session directory.
    ///
    /// Called once before the first `proc`. A module left uninitialised still
    /// runs with its defaults.
    fn init(&mut self, init_data: Self::InitData, session: &Session)
        -> Result<(), Self::InitError>;

    /// Run one control cycle.
    fn proc(&mut self, input_data: &Self::InputData)
        -> Result<(Self::OutputData, Self::StatusReport), Self::ProcError>;
}
