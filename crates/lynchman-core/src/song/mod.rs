//! Songs and song collections.
//!
//! - `SongEntry` - identity triple (ident, name, difficulty) of a level file
//! - `Song` - one parsed level file with cached note views
//! - `SongCollection` - a fixed list of songs with averaged metadata
//! - `NoteSource` - the read interface shared by songs and collections

mod collection;
mod entry;
mod source;
mod song;

pub use collection::*;
pub use entry::*;
pub use source::*;
pub use song::*;
