//! Display Module - Result Visualizer
//!
//! Stateless mapping from the latest assessment result to color-coded
//! dashboard signals.

pub mod colors;
pub mod model;


pub use colors::{score_color, Color};
pub use model::{render, DisplayModel};
