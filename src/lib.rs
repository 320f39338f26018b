// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Resolve note names, chord symbols and scale names into pitch data.
//!
//! ```
//! assert_eq!(chordnote::note_number("C4").unwrap(), 60);
//! assert_eq!(chordnote::chord_notes("BM7").unwrap(), vec!["B", "D#", "F#", "A#"]);
//! assert_eq!(
//!     chordnote::scale_from_root("ionian", "D4").unwrap(),
//!     vec![62, 64, 66, 67, 69, 71, 73]
//! );
//! ```

pub mod config;
pub mod error;
pub mod music;

pub use error::{Result, TheoryError};
pub use music::{
    chord_intervals, chord_kinds, chord_notes, chord_notes_with_octave, note_number,
    note_number_with_octave, parse_note, scale_from_root, scale_intervals, scale_kinds, Catalog,
    CustomDefinition, Note, ParsedNote,
};
