use serde::Serialize;

use crate::chart::NoteRecord;
use crate::error::{Error, Result};
use crate::stats::ratio;

/// Note times in view order, untouched
pub fn time_series(notes: &[NoteRecord]) -> Vec<f64> {
    notes.iter().map(|note| note.time).collect()
}

/// Equal-width binning of a time series
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Histogram {
    pub start: f64,
    pub bin_width: f64,
    pub counts: Vec<usize>,
}

impl Histogram {
    /// Bin `series` into `bins` buckets spanning `[min, max]`.
    ///
    /// A series whose values are all equal has no span and ends up in a
    /// single bucket of width 1 centred on that value.
    pub fn from_series(series: &[f64], bins: usize) -> Result<Self> {
        if bins == 0 {
            return Err(Error::DivisionByZero("histogram bin count"));
        }
        if series.is_empty() {
            return Err(Error::NoData("no note times"));
        }

        let min = series.iter().copied().fold(f64::INFINITY, f64::min);
        let max = series.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let span = max - min;

        if span == 0.0 {
            return Ok(Self {
                start: min - 0.5,
                bin_width: 1.0,
                counts: vec![series.len()],
            });
        }

        let bin_width = ratio(span, bins as f64, "histogram bin count")?;
        let mut counts = vec![0usize; bins];
        for value in series {
            let i = (((value - min) / bin_width) as usize).min(bins - 1);
            counts[i] += 1;
        }

        Ok(Self {
            start: min,
            bin_width,
            counts,
        })
    }

    pub fn end(&self) -> f64 {
        self.start + self.bin_width * self.counts.len() as f64
    }

    pub fn max_count(&self) -> usize {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    /// `(low, high, count)` for each bucket
    pub fn buckets(&self) -> impl Iterator<Item = (f64, f64, usize)> + '_ {
        self.counts.iter().enumerate().map(|(i, count)| {
            let low = self.start + self.bin_width * i as f64;
            (low, low + self.bin_width, *count)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::{CutDirection, NoteType};

    #[test]
    fn test_time_series_is_raw() {
        let notes: Vec<NoteRecord> = [3.0, 1.0, 2.0, 1.0]
            .into_iter()
            .map(|t| NoteRecord::new(t, 9, 9, NoteType::Other(7), CutDirection::Any))
            .collect();
        assert_eq!(time_series(&notes), vec![3.0, 1.0, 2.0, 1.0]);
        assert!(time_series(&[]).is_empty());
    }

    #[test]
    fn test_histogram_bins() {
        let histogram = Histogram::from_series(&[0.0, 1.0, 2.0, 3.0, 4.0], 2).unwrap();

        assert_eq!(histogram.start, 0.0);
        assert_eq!(histogram.bin_width, 2.0);
        assert_eq!(histogram.counts, vec![2, 3]);
        assert_eq!(histogram.end(), 4.0);
        assert_eq!(histogram.max_count(), 3);
    }

    #[test]
    fn test_histogram_all_same_time() {
        let histogram = Histogram::from_series(&[5.0, 5.0, 5.0], 60).unwrap();
        assert_eq!(histogram.counts, vec![3]);
        assert_eq!(histogram.start, 4.5);
        assert_eq!(histogram.end(), 5.5);
    }

    #[test]
    fn test_histogram_degenerate_inputs() {
        assert!(matches!(
            Histogram::from_series(&[], 10),
            Err(Error::NoData(_))
        ));
        assert!(matches!(
            Histogram::from_series(&[1.0, 2.0], 0),
            Err(Error::DivisionByZero(_))
        ));
    }

    #[test]
    fn test_histogram_counts_every_value() {
        let series: Vec<f64> = (0..100).map(|i| i as f64 * 0.37).collect();
        let histogram = Histogram::from_series(&series, 7).unwrap();
        assert_eq!(histogram.counts.iter().sum::<usize>(), 100);
        assert_eq!(histogram.buckets().count(), 7);
    }
}
