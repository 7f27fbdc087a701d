//! # Arm Executable Parameters
//!
//! This module provide parameters for the arm executable.

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

use serde::{Deserialize, Serialize};

// ------------------------------------------------------------------------------------------------
// STRUCTS
// ------------------------------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ArmExecParams {
    /// Target period of one cycle.
    ///
    /// Units: seconds
    pub cycle_period_s: f64,

    /// Number of consecutive cycle overruns after which the exec gives up.
    pub max_consec_cycle_overruns: u64,
}

impl Default for ArmExecParams {
    fn default() -> Self {
        Self {
            cycle_period_s: 0.02,
            max_consec_cycle_overruns: 500,
        }
    }
}
