//! # Telecommand module
//!
//! Telecommands feed the arm executable with the control and telemetry samples it would otherwise
//! read from hardware, either from a script or from a ground station.

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use serde::{Deserialize, Serialize};
use thiserror::Error;

// Internal
use crate::eqpt::{arm::ArmTlm, hid::ControlSnapshot};

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

/// A telecommand, i.e. an instruction sent to the arm executable.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Tc {
    /// Replace the held operator controls with this snapshot.
    Controls(ControlSnapshot),

    /// Replace the held arm telemetry with this sample.
    Telemetry(ArmTlm),

    /// Reset the preset memory back to its power-on state.
    ResetPresets,
}

/// Possible parsing errors.
#[derive(Debug, Error)]
pub enum TcParseError {
    #[error("TC contains invalid JSON: {0}")]
    InvalidJson(serde_json::Error),
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl Tc {
    /// Parse a new TC from a JSON packet
    pub fn from_json(json_str: &str) -> Result<Self, TcParseError> {
        serde_json::from_str(json_str).map_err(TcParseError::InvalidJson)
    }

    /// Serialise the TC into a JSON packet
    pub fn to_json(&self) -> Result<String, TcParseError> {
        serde_json::to_string(self).map_err(TcParseError::InvalidJson)
    }
}
