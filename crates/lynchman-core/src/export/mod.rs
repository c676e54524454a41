//! Report output.
//!
//! - `render` - the five report pages as SVG files
//! - `manifest` - plain-text list of processed songs
//! - `json` - machine-readable metrics
//! - `console` - colored terminal summary

mod console;
mod json;
mod manifest;
mod render;

pub use console::*;
pub use json::*;
pub use manifest::*;
pub use render::*;
