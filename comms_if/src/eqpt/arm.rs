//! # Arm Mechanism Interface
//!
//! Telemetry read back from the arm, elevator and telescope, and the presets commanded to their
//! motion controllers.

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

use serde::{Deserialize, Serialize};

// ------------------------------------------------------------------------------------------------
// STRUCTS
// ------------------------------------------------------------------------------------------------

/// Telemetry from the arm mechanism, sampled once at the start of each cycle.
#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct ArmTlm {
    /// Angle of the arm.
    ///
    /// Units: degrees
    pub arm_angle_deg: f64,

    /// Telescope extension encoder.
    ///
    /// Units: encoder ticks
    pub telescope_ticks: i64,

    /// Elevator height encoder.
    ///
    /// Units: encoder ticks
    pub elevator_ticks: i64,

    /// True if the arm reports it has reached its last commanded setpoint.
    pub arm_at_preset: bool,

    /// True if the telescope reports it has reached its last commanded setpoint.
    pub telescope_at_preset: bool,
}

// ------------------------------------------------------------------------------------------------
// ENUMS
// ------------------------------------------------------------------------------------------------

/// A named target configuration of the arm, elevator and telescope.
///
/// Motion control treats the commanded preset as its setpoint target, `Manual` meaning the
/// operator's sticks drive the joints directly.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preset {
    Manual,
    Low,
    Mid,
    High,
    HighBall,
    Ball,
    Climb,
}

// ------------------------------------------------------------------------------------------------
// IMPLEMENTATIONS
// ------------------------------------------------------------------------------------------------

impl Default for Preset {
    fn default() -> Self {
        Preset::Manual
    }
}

impl Preset {
    /// True for the fully raised presets (`High` and `HighBall`).
    pub fn is_high(&self) -> bool {
        matches!(self, Preset::High | Preset::HighBall)
    }
}
