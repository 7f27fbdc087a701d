//! Control gates
//!
//! A gate is open when its controls are not being used by the operator. Manual control is only
//! handed back when the arm, elevator and telescope gates are all open.

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use serde::Serialize;

// Internal
use super::Params;
use comms_if::eqpt::hid::ControlSnapshot;
use util::maths::deadband;

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// State of every gate for one cycle.
#[derive(Clone, Copy, Default, Serialize, Debug, PartialEq, Eq)]
pub struct Gates {
    /// The arm axis is inside its deadband.
    pub arm: bool,

    /// The elevator axis is inside its deadband.
    pub elev: bool,

    /// Neither telescope jog button is pressed.
    pub telescope: bool,

    /// Neither wrist trigger is pressed.
    ///
    /// Exposed for other consumers, not part of the manual gate.
    pub wrist: bool,

    /// A valid POV direction, the high ball button or the climb button is pressed.
    ///
    /// Exposed for other consumers, not part of the manual gate.
    pub pov: bool,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl Gates {
    /// Evaluate all gates from a snapshot of the controls.
    pub fn from_controls(controls: &ControlSnapshot, params: &Params) -> Self {
        Self {
            arm: deadband(controls.arm_axis, params.axis_deadband) == 0.0,
            elev: deadband(controls.elevator_axis, params.axis_deadband) == 0.0,
            telescope: !(controls.telescope_block_a || controls.telescope_block_b),
            wrist: !(controls.wrist_block_a || controls.wrist_block_b),
            pov: controls.valid_pov().is_some()
                || controls.high_ball_button
                || controls.climb_button,
        }
    }

    /// True if the arm, elevator and telescope gates are all open.
    pub fn status(&self) -> bool {
        self.arm && self.elev && self.telescope
    }
}
