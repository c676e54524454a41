//! Derived statistics over note views.
//!
//! - `Summary` - tempo metadata, note counts, leaning and mean note gap
//! - `DensityGrid` - normalised 3x4 occupancy of the note grid
//! - `CutDistribution` - share of each required cut direction
//! - `time_series`, `Histogram` - note times and their binning
//!
//! Every ratio goes through [`ratio`] or an explicit emptiness check, so a
//! zero denominator surfaces as an error instead of NaN or infinity.

mod cut;
mod density;
mod summary;
mod timing;

pub use cut::*;
pub use density::*;
pub use summary::*;
pub use timing::*;

use crate::error::{Error, Result};

/// Divide, failing with `DivisionByZero(what)` when `denominator` is zero
pub fn ratio(numerator: f64, denominator: f64, what: &'static str) -> Result<f64> {
    if denominator == 0.0 {
        return Err(Error::DivisionByZero(what));
    }
    Ok(numerator / denominator)
}
