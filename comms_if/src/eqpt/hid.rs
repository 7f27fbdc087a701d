//! # Human Interface Device Inputs
//!
//! Raw reads of the operator and driver controllers, sampled once at the start of each cycle.

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

use serde::{Deserialize, Serialize};

// ------------------------------------------------------------------------------------------------
// STRUCTS
// ------------------------------------------------------------------------------------------------

/// Snapshot of the human interface for a single cycle.
///
/// Axes are raw values, the deadband is applied by the consumer.
#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct ControlSnapshot {
    /// Arm joystick axis, in the range [-1, 1].
    pub arm_axis: f64,

    /// Elevator joystick axis, in the range [-1, 1].
    pub elevator_axis: f64,

    /// First telescope jog button.
    pub telescope_block_a: bool,

    /// Second telescope jog button.
    pub telescope_block_b: bool,

    /// First wrist trigger.
    pub wrist_block_a: bool,

    /// Second wrist trigger.
    pub wrist_block_b: bool,

    /// Direction of the operator's POV hat, or `None` if it isn't pressed.
    pub pov: Option<PovDirection>,

    /// Number of buttons reported by the controller owning the POV hat.
    ///
    /// Only the POV gate looks at this: a controller reporting zero buttons never counts as
    /// being moved through its hat. Preset requests use `pov` directly.
    pub pov_button_count: u32,

    /// Button requesting the high ball preset.
    pub high_ball_button: bool,

    /// Button requesting the climb preset.
    pub climb_button: bool,
}

// ------------------------------------------------------------------------------------------------
// ENUMS
// ------------------------------------------------------------------------------------------------

/// The discrete directions of a POV hat.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PovDirection {
    Up,
    Right,
    Down,
    Left,
}

// ------------------------------------------------------------------------------------------------
// IMPLEMENTATIONS
// ------------------------------------------------------------------------------------------------

impl PovDirection {
    /// Convert a raw hat angle in degrees into a direction.
    ///
    /// Diagonals and the "not pressed" sentinel (-1) give `None`.
    pub fn from_angle_deg(angle_deg: i32) -> Option<Self> {
        match angle_deg {
            0 => Some(PovDirection::Up),
            90 => Some(PovDirection::Right),
            180 => Some(PovDirection::Down),
            270 => Some(PovDirection::Left),
            _ => None,
        }
    }

    /// The hat angle of this direction in degrees.
    pub fn angle_deg(&self) -> i32 {
        match self {
            PovDirection::Up => 0,
            PovDirection::Right => 90,
            PovDirection::Down => 180,
            PovDirection::Left => 270,
        }
    }
}

impl ControlSnapshot {
    /// Returns the POV direction if it should count as the operator moving the hat.
    ///
    /// This is the case when the hat reports a direction and its controller reports at least one
    /// button. Used by the POV gate only.
    pub fn valid_pov(&self) -> Option<PovDirection> {
        match self.pov_button_count {
            0 => None,
            _ => self.pov,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_pov_angles() {
        for angle in [0, 90, 180, 270].iter() {
            let dir = PovDirection::from_angle_deg(*angle).unwrap();
            assert_eq!(dir.angle_deg(), *angle);
        }

        assert_eq!(PovDirection::from_angle_deg(-1), None);
        assert_eq!(PovDirection::from_angle_deg(45), None);
        assert_eq!(PovDirection::from_angle_deg(360), None);
    }

    #[test]
    fn test_valid_pov() {
        let mut snapshot = ControlSnapshot {
            pov: Some(PovDirection::Down),
            pov_button_count: 12,
            ..Default::default()
        };
        assert_eq!(snapshot.valid_pov(), Some(PovDirection::Down));

        snapshot.pov_button_count = 0;
        assert_eq!(snapshot.valid_pov(), None);

        snapshot.pov = None;
        snapshot.pov_button_count = 12;
        assert_eq!(snapshot.valid_pov(), None);
    }

    #[test]
    fn test_partial_json() {
        let snapshot: ControlSnapshot =
            serde_json::from_str(r#"{"pov": "Left", "pov_button_count": 10}"#).unwrap();

        assert_eq!(snapshot.pov, Some(PovDirection::Left));
        assert_eq!(snapshot.arm_axis, 0.0);
        assert!(!snapshot.climb_button);
    }
}
