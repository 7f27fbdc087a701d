//! Parameters structure for PresetCtrl

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use serde::{Deserialize, Serialize};

use super::PresetCtrlError;

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Parameters for Preset control.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Params {
    // ---- CONTROLS ----
    /// Deadband applied to the arm and elevator axes before checking whether the operator is
    /// driving them.
    ///
    /// Units: normalised axis value
    pub axis_deadband: f64,

    // ---- MECHANISM THRESHOLDS ----
    /// Arm angle above which a manually positioned arm counts as raised.
    ///
    /// Units: degrees
    pub arm_high_angle_deg: f64,

    /// Telescope position at or beyond which the telescope counts as extended.
    ///
    /// Units: encoder ticks
    pub telescope_extended_ticks: i64,

    /// Elevator height below which the elevator is too low to drop from the ball preset straight
    /// to the low preset.
    ///
    /// Units: encoder ticks
    pub elevator_ball_clearance_ticks: i64,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl Default for Params {
    fn default() -> Self {
        Self {
            axis_deadband: 0.1,
            arm_high_angle_deg: 45.0,
            telescope_extended_ticks: 7000,
            elevator_ball_clearance_ticks: 3000,
        }
    }
}

impl Params {
    /// Check the parameters describe a usable configuration.
    pub fn validate(&self) -> Result<(), PresetCtrlError> {
        if !self.axis_deadband.is_finite() || !(0.0..1.0).contains(&self.axis_deadband) {
            return Err(PresetCtrlError::InvalidParams(format!(
                "axis_deadband must be in [0, 1), found {}",
                self.axis_deadband
            )));
        }

        if !self.arm_high_angle_deg.is_finite() {
            return Err(PresetCtrlError::InvalidParams(format!(
                "arm_high_angle_deg must be finite, found {}",
                self.arm_high_angle_deg
            )));
        }

        if self.telescope_extended_ticks < 0 {
            return Err(PresetCtrlError::InvalidParams(format!(
                "telescope_extended_ticks must not be negative, found {}",
                self.telescope_extended_ticks
            )));
        }

        if self.elevator_ball_clearance_ticks < 0 {
            return Err(PresetCtrlError::InvalidParams(format!(
                "elevator_ball_clearance_ticks must not be negative, found {}",
                self.elevator_ball_clearance_ticks
            )));
        }

        Ok(())
    }
}
