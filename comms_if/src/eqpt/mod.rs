//! # Equipment Interface
//!
//! This module defines the interface structures exchanged with the equipment around the arm.

// -----------------------------------------------------------------------------------------------
// MODULES
// -----------------------------------------------------------------------------------------------

pub mod arm;
pub mod hid;
