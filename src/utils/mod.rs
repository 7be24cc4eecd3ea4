//! Utility modules for the Thrifty application.
//!
//! - [`color`] - Mapping of theme colours to terminal colours
//! - [`format`] - Amount formatting and parsing

pub mod color;
pub mod format;
