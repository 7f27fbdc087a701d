//! # Arm library.
//!
//! This library allows other crates in the workspace (and the benchmarks) to access items defined
//! inside the arm executable crate.

// ------------------------------------------------------------------------------------------------
// MODULES
// ------------------------------------------------------------------------------------------------

/// Data store - holds the data passed between modules during a cycle
pub mod data_store;

/// Executable parameters
pub mod params;

/// Preset control module - arbitrates the operator's controls into the preset commanded to the arm
pub mod preset_ctrl;
