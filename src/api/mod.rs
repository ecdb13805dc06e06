//! API Module
//!
//! Command surface driven by the CLI and the interactive dashboard.

pub mod commands;

pub use commands::*;
