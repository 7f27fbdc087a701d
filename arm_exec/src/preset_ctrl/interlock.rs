//! Safety interlock
//!
//! The arm cannot move directly between the retracted `Low` pose and the extended `High`,
//! `HighBall` and `Climb` poses without risking a collision, so the interlock sends it to `Mid`
//! first. The decision only depends on the raw request, the last committed preset and the
//! current telemetry.

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use serde::Serialize;

// Internal
use super::Params;
use comms_if::eqpt::arm::{ArmTlm, Preset};

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

/// Outcome of passing a raw request through the interlock.
#[derive(Clone, Copy, Serialize, Debug, PartialEq, Eq)]
pub enum Interlock {
    /// Manual control. `Manual` is commanded and the last preset is rebuilt from the arm's pose.
    Manual,

    /// The request is safe, it is commanded and becomes the last preset.
    Commit,

    /// The request must go through `Mid` first, `Mid` is commanded and becomes the last preset.
    Redirect,

    /// `Mid` is commanded for this cycle only, the last preset is left untouched.
    TransientStop,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl Default for Interlock {
    fn default() -> Self {
        Interlock::Manual
    }
}

impl Interlock {
    /// Decide how the raw `request` is handled given the `last` committed preset.
    ///
    /// Arms are checked in order, the first matching arm wins.
    pub fn evaluate(request: Preset, last: Preset, tlm: &ArmTlm, params: &Params) -> Self {
        let extended = tlm.telescope_ticks >= params.telescope_extended_ticks;
        let elevator_low = tlm.elevator_ticks < params.elevator_ball_clearance_ticks;

        match request {
            Preset::Manual => Interlock::Manual,

            // Raising: only from an already high preset, or from a settled Mid
            Preset::High | Preset::HighBall if !extended && !last.is_high() => {
                Interlock::Redirect
            }
            Preset::High | Preset::HighBall
                if !last.is_high() && !(last == Preset::Mid && tlm.arm_at_preset) =>
            {
                Interlock::Redirect
            }
            Preset::High | Preset::HighBall | Preset::Climb => Interlock::Commit,

            // Dropping out of Ball with the elevator still low
            Preset::Low if last == Preset::Ball && elevator_low => Interlock::TransientStop,

            // Low, Mid and Ball share the lowering guard
            _ if extended && last != Preset::Low => Interlock::Redirect,
            _ if last.is_high() || (last == Preset::Mid && !tlm.telescope_at_preset) => {
                Interlock::Redirect
            }
            _ => Interlock::Commit,
        }
    }

    /// Apply this outcome, returning the preset to command and the new last preset.
    pub fn resolve(self, request: Preset, last: Preset, tlm: &ArmTlm, params: &Params) -> (Preset, Preset) {
        match self {
            Interlock::Manual => (Preset::Manual, manual_pose(tlm, params)),
            Interlock::Commit => (request, request),
            Interlock::Redirect => (Preset::Mid, Preset::Mid),
            Interlock::TransientStop => (Preset::Mid, last),
        }
    }
}

// ---------------------------------------------------------------------------
// PUBLIC FUNCTIONS
// ---------------------------------------------------------------------------

/// The preset closest to the pose of a manually driven arm.
///
/// The arm counts as `High` when it is raised past the high angle with the telescope extended,
/// and as `Low` otherwise.
pub fn manual_pose(tlm: &ArmTlm, params: &Params) -> Preset {
    if tlm.arm_angle_deg > params.arm_high_angle_deg
        && tlm.telescope_ticks >= params.telescope_extended_ticks
    {
        Preset::High
    }
    else {
        Preset::Low
    }
}
