use serde::Serialize;

use crate::chart::{CutDirection, NoteRecord};
use crate::error::{Error, Result};

/// How often each cut direction is required in a note view.
///
/// Notes with an unrecognised direction code are left out of both the
/// buckets and the total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CutDistribution {
    counts: [usize; 9],
    total: usize,
}

impl CutDistribution {
    /// Fails with `NoData` when no note carries a recognised direction
    pub fn from_notes(notes: &[NoteRecord]) -> Result<Self> {
        let counts = notes.iter().fold([0usize; 9], |mut counts, note| {
            if let Some(i) = note.cut_direction.index() {
                counts[i] += 1;
            }
            counts
        });
        let total: usize = counts.iter().sum();
        if total == 0 {
            return Err(Error::NoData("no cut directions"));
        }
        Ok(Self { counts, total })
    }

    pub fn count(&self, direction: CutDirection) -> usize {
        direction.index().map_or(0, |i| self.counts[i])
    }

    /// Share of `direction` in `[0, 1]`
    pub fn fraction(&self, direction: CutDirection) -> f64 {
        // total > 0 is guaranteed by construction
        self.count(direction) as f64 / self.total as f64
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// `(direction, fraction)` for the nine directions, in code order
    pub fn iter(&self) -> impl Iterator<Item = (CutDirection, f64)> + '_ {
        CutDirection::ALL
            .into_iter()
            .map(move |direction| (direction, self.fraction(direction)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::NoteType;

    fn cut(code: i64) -> NoteRecord {
        NoteRecord::new(0.0, 0, 0, NoteType::Left, CutDirection::from(code))
    }

    #[test]
    fn test_empty_view_is_no_data() {
        assert!(matches!(
            CutDistribution::from_notes(&[]),
            Err(Error::NoData(_))
        ));
        assert!(matches!(
            CutDistribution::from_notes(&[cut(42)]),
            Err(Error::NoData(_))
        ));
    }

    #[test]
    fn test_fractions_sum_to_one() {
        let notes: Vec<NoteRecord> = [0, 1, 1, 2, 3, 4, 5, 6, 7, 8, 8, 8, 3]
            .into_iter()
            .map(cut)
            .collect();
        let distribution = CutDistribution::from_notes(&notes).unwrap();

        let sum: f64 = distribution.iter().map(|(_, f)| f).sum();
        assert!((sum - 1.0).abs() < 1e-9);
        assert_eq!(distribution.total(), 13);
        assert_eq!(distribution.count(CutDirection::Any), 3);
        assert_eq!(distribution.fraction(CutDirection::Down), 2.0 / 13.0);
    }

    #[test]
    fn test_unknown_directions_excluded() {
        let notes = vec![cut(0), cut(1), cut(9), cut(-3)];
        let distribution = CutDistribution::from_notes(&notes).unwrap();

        assert_eq!(distribution.total(), 2);
        assert_eq!(distribution.fraction(CutDirection::Up), 0.5);
        assert_eq!(distribution.fraction(CutDirection::Unknown(9)), 0.0);
        assert_eq!(distribution.iter().count(), 9);
    }
}
