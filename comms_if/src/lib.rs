//! # Communications interface crate.
//!
//! Provides all common interface types shared between the arm software and its collaborators:
//! the operator controls, the mechanism telemetry, and the presets handed to motion control.

// ------------------------------------------------------------------------------------------------
// MODULES
// ------------------------------------------------------------------------------------------------

pub mod tc;

/// Input and output definitions for equipment (operator controls, arm mechanism)
pub mod eqpt;
