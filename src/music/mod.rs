// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Music theory tables and symbol resolution.
//!
//! Note spellings resolve to pitch classes or absolute pitches; chord and
//! scale kinds resolve to interval offsets that expand from a root.

pub mod chord;
pub mod note;
pub mod parser;
pub mod pitch;
pub mod registry;
pub mod scale;

pub use chord::{
    chord_intervals, chord_kinds, chord_notes, chord_notes_with_octave, split_chord, ChordSymbol,
};
pub use note::{lookup_pitch_class, Note, PitchClass, BASE_TONES};
pub use parser::{note_number, note_number_with_octave, parse_note, ParsedNote};
pub use pitch::{absolute_pitch, is_valid_octave, octave_from_number, MidiNote};
pub use registry::{Catalog, CustomDefinition};
pub use scale::{scale_from_root, scale_intervals, scale_kinds};
