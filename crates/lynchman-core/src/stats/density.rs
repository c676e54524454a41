use serde::Serialize;

use crate::chart::{LAYER_COUNT, LINE_COUNT, NoteRecord};

/// Share of a note view landing on each grid cell.
///
/// Rows run from the top layer (`_lineLayer` 2) down to the bottom layer,
/// columns follow `_lineIndex`. Notes outside the grid are not placed but
/// still count toward the total, so the cells sum to at most 1.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DensityGrid {
    cells: [[f64; LINE_COUNT]; LAYER_COUNT],
    total: usize,
    dropped: usize,
}

impl DensityGrid {
    pub fn from_notes(notes: &[NoteRecord]) -> Self {
        let mut counts = [[0usize; LINE_COUNT]; LAYER_COUNT];
        let mut dropped = 0;

        for note in notes {
            match note.grid_position() {
                Some((index, layer)) => counts[LAYER_COUNT - 1 - layer][index] += 1,
                None => dropped += 1,
            }
        }

        let total = notes.len();
        let mut cells = [[0.0; LINE_COUNT]; LAYER_COUNT];
        if total > 0 {
            for (row, count_row) in cells.iter_mut().zip(counts.iter()) {
                for (cell, count) in row.iter_mut().zip(count_row.iter()) {
                    *cell = *count as f64 / total as f64;
                }
            }
        }

        Self {
            cells,
            total,
            dropped,
        }
    }

    /// Density at a grid position, `None` outside the grid
    pub fn get(&self, line_index: usize, line_layer: usize) -> Option<f64> {
        if line_index >= LINE_COUNT || line_layer >= LAYER_COUNT {
            return None;
        }
        Some(self.cells[LAYER_COUNT - 1 - line_layer][line_index])
    }

    /// Rows, top layer first
    pub fn rows(&self) -> &[[f64; LINE_COUNT]; LAYER_COUNT] {
        &self.cells
    }

    /// Number of notes in the view, including dropped ones
    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of notes positioned outside the grid
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    pub fn sum(&self) -> f64 {
        self.cells.iter().flatten().sum()
    }

    pub fn max(&self) -> f64 {
        self.cells.iter().flatten().copied().fold(0.0, f64::max)
    }

    pub fn nonzero_cells(&self) -> usize {
        self.cells.iter().flatten().filter(|v| **v > 0.0).count()
    }
}
