//! Chart-related types and data structures.
//!
//! This module contains types for representing level files and their notes:
//! - `Difficulty` - difficulty tiers (Easy, Normal, Hard, Expert, ExpertPlus)
//! - `NoteRecord`, `NoteType`, `CutDirection` - one timed note and its codes
//! - `NoteCategory`, `NoteFilter`, `classify` - note classification and views

mod category;
mod difficulty;
mod note;

pub use category::*;
pub use difficulty::*;
pub use note::*;
