// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Chord catalog and chord symbol expansion.
//!
//! A chord symbol such as `C#m7b5` splits into a root spelling (`C#`) and
//! a kind token (`m7b5`). The kind selects an ordered list of semitone
//! offsets; offsets above 11 encode compound intervals (9th = 14,
//! 11th = 17, 13th = 21) and are only folded mod 12 once combined with a
//! root.

use tracing::debug;

use crate::error::{Result, TheoryError};

use super::note::{canonical_name, PitchClass};
use super::parser::parse_note;
use super::pitch::{note_name_with_octave, validate_octave, MAX_OCTAVE};

/// Kind key used when a chord symbol has nothing after its root
pub const BASE_KIND: &str = "base";

/// Number of built-in chord kinds, synonyms included
pub const CHORD_KIND_COUNT: usize = 75;

/// Highest pitch class allowed in octave 9 when voicing with octaves (G9).
const TOP_OCTAVE_CEILING: PitchClass = 7;

// Synonym keys share identical offsets on purpose, e.g. `7b5` / `7(-5)`.
static CHORD_KINDS: [(&str, &[u8]); CHORD_KIND_COUNT] = [
    ("base", &[0, 4, 7]),
    ("-5", &[0, 4, 6]),
    ("-6", &[0, 4, 7, 8]),
    ("6", &[0, 4, 7, 9]),
    ("6(9)", &[0, 4, 7, 9, 14]),
    ("69", &[0, 4, 7, 9, 14]),
    ("M7", &[0, 4, 7, 11]),
    ("M7(9)", &[0, 4, 7, 11, 14]),
    ("M79", &[0, 4, 7, 11, 14]),
    ("M9", &[0, 4, 7, 11, 14]),
    ("M11", &[0, 4, 7, 11, 14, 17]),
    ("M13", &[0, 4, 7, 11, 14, 17, 21]),
    ("7", &[0, 4, 7, 10]),
    ("7(b5)", &[0, 4, 6, 10]),
    ("7b5", &[0, 4, 6, 10]),
    ("7(-5)", &[0, 4, 6, 10]),
    ("7-5", &[0, 4, 6, 10]),
    ("7(#5)", &[0, 4, 7, 8, 10]),
    ("7#5", &[0, 4, 7, 8, 10]),
    ("7(b9)", &[0, 4, 7, 10, 13]),
    ("7b9", &[0, 4, 7, 10, 13]),
    ("7(-9)", &[0, 4, 7, 10, 13]),
    ("7-9", &[0, 4, 7, 10, 13]),
    ("-9", &[0, 4, 7, 10, 13]),
    ("-9(#5)", &[0, 4, 8, 10, 13]),
    ("-9#5", &[0, 4, 8, 10, 13]),
    ("7(b9, 13)", &[0, 4, 7, 10, 13, 21]),
    ("7(-9, 13)", &[0, 4, 7, 10, 13, 21]),
    ("7(9, 13)", &[0, 4, 7, 10, 14, 21]),
    ("7(#9)", &[0, 4, 7, 10, 15]),
    ("7#9", &[0, 4, 7, 10, 15]),
    ("7(#11)", &[0, 4, 7, 10, 15, 18]),
    ("7#11", &[0, 4, 7, 10, 15, 18]),
    ("7(#13)", &[0, 4, 10, 21]),
    ("7#13", &[0, 4, 10, 21]),
    ("9", &[0, 4, 7, 10, 14]),
    ("9(b5)", &[0, 4, 6, 10, 14]),
    ("9b5", &[0, 4, 6, 10, 14]),
    ("9(-5)", &[0, 4, 6, 10, 14]),
    ("9-5", &[0, 4, 6, 10, 14]),
    ("11", &[0, 4, 7, 10, 14, 17]),
    ("13", &[0, 4, 7, 10, 14, 17, 21]),
    ("m", &[0, 3, 7]),
    ("madd4", &[0, 3, 5, 7]),
    ("m6", &[0, 3, 7, 9]),
    ("m6(9)", &[0, 3, 7, 9, 14]),
    ("m69", &[0, 3, 7, 9, 14]),
    ("mM7", &[0, 3, 7, 11]),
    ("m7", &[0, 3, 7, 10]),
    ("m7(b5)", &[0, 3, 6, 10]),
    ("m7b5", &[0, 3, 6, 10]),
    ("m7(-5)", &[0, 3, 6, 10]),
    ("m7-5", &[0, 3, 6, 10]),
    ("m7(#5)", &[0, 3, 8, 10]),
    ("m7#5", &[0, 3, 8, 10]),
    ("m7(9)", &[0, 3, 7, 10, 14]),
    ("m79", &[0, 3, 7, 10, 14]),
    ("m9", &[0, 3, 7, 10, 14]),
    ("m7(9, 11)", &[0, 3, 7, 10, 14, 17]),
    ("m11", &[0, 3, 7, 10, 14, 17]),
    ("m13", &[0, 3, 7, 10, 14, 17, 21]),
    ("dim", &[0, 3, 6]),
    ("dim7", &[0, 3, 6, 9]),
    ("dim6", &[0, 3, 6, 9]),
    ("aug", &[0, 4, 8]),
    ("aug7", &[0, 4, 8, 10]),
    ("augM7", &[0, 4, 8, 11]),
    ("aug9", &[0, 4, 8, 10, 14]),
    ("sus2", &[0, 2, 7]),
    ("sus", &[0, 5, 7]),
    ("sus4", &[0, 5, 7]),
    ("7sus4", &[0, 5, 7, 10]),
    ("add2", &[0, 2, 4, 7]),
    ("add4", &[0, 4, 5, 7]),
    ("add9", &[0, 4, 7, 14]),
];

/// All built-in chord kind keys
pub fn chord_kinds() -> Vec<&'static str> {
    CHORD_KINDS.iter().map(|(kind, _)| *kind).collect()
}

/// Interval offsets for a chord kind: `M7` -> `[0, 4, 7, 11]`.
///
/// Lookup is case-sensitive (`M7` and `m7` differ). An empty kind means
/// the plain major triad.
pub fn chord_intervals(kind: &str) -> Result<&'static [u8]> {
    let key = if kind.is_empty() { BASE_KIND } else { kind };
    CHORD_KINDS
        .iter()
        .find(|(name, _)| *name == key)
        .map(|&(_, intervals)| intervals)
        .ok_or_else(|| TheoryError::NotFoundChordKind(kind.to_string()))
}

/// A chord symbol split into root spelling and kind token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChordSymbol<'a> {
    /// Root spelling, e.g. `C#`
    pub root: &'a str,
    /// Everything after the root, verbatim (may be empty)
    pub kind: &'a str,
}

impl<'a> ChordSymbol<'a> {
    /// Split `C#m7b5` into `C#` and `m7b5`.
    ///
    /// The root must be `A`-`G` with an optional `#` or `b`. `H` is not
    /// accepted here even though the note parser knows it.
    pub fn parse(symbol: &'a str) -> Result<Self> {
        let bytes = symbol.as_bytes();
        if !matches!(bytes.first(), Some(b'A'..=b'G')) {
            return Err(TheoryError::NotFoundChord(symbol.to_string()));
        }

        let root_len = match bytes.get(1) {
            Some(b'#' | b'b') => 2,
            _ => 1,
        };
        let (root, kind) = symbol.split_at(root_len);

        // The kind runs to the end of a single line
        if kind.contains('\n') {
            return Err(TheoryError::NotFoundChord(symbol.to_string()));
        }

        debug!(symbol, root, kind, "split chord symbol");
        Ok(Self { root, kind })
    }

    /// Pitch class of the root
    pub fn root_pitch_class(&self) -> Result<PitchClass> {
        parse_note(self.root).map(|note| note.pitch_class())
    }
}

/// Split a chord symbol into `(root, kind)`.
pub fn split_chord(symbol: &str) -> Result<(&str, &str)> {
    ChordSymbol::parse(symbol).map(|chord| (chord.root, chord.kind))
}

/// Fold each offset onto the root, keeping interval order.
pub fn expand_intervals(root: PitchClass, intervals: &[u8]) -> Vec<PitchClass> {
    intervals
        .iter()
        .map(|&offset| ((offset as u16 + root as u16) % 12) as PitchClass)
        .collect()
}

/// Resolve a chord symbol to pitch classes, looking kinds up with `lookup`.
pub(crate) fn chord_pitch_classes_with<'k, F>(symbol: &str, lookup: F) -> Result<Vec<PitchClass>>
where
    F: FnOnce(&str) -> Result<&'k [u8]>,
{
    let chord = ChordSymbol::parse(symbol)?;
    let root = chord.root_pitch_class()?;
    let intervals = lookup(chord.kind)?;
    Ok(expand_intervals(root, intervals))
}

/// Attach octaves to a pitch-class sequence, starting at `octave`.
///
/// The octave increments whenever a pitch class is lower than the one
/// before it. Members above G9 are rejected; nothing partial is returned.
pub fn voice_with_octave(pitch_classes: &[PitchClass], octave: i8) -> Result<Vec<String>> {
    let mut octave = validate_octave(octave)?;
    let mut notes = Vec::with_capacity(pitch_classes.len());
    let mut last: Option<PitchClass> = None;

    for &pc in pitch_classes {
        if last.is_some_and(|prev| pc < prev) {
            octave += 1;
        }
        let name = note_name_with_octave(pc, octave);
        if octave > MAX_OCTAVE || (octave == MAX_OCTAVE && pc > TOP_OCTAVE_CEILING) {
            return Err(TheoryError::OutOfRange(name));
        }
        notes.push(name);
        last = Some(pc);
    }

    Ok(notes)
}

/// Pitch classes of a chord symbol: `BM7` -> `[11, 3, 6, 10]`.
pub fn chord_pitch_classes(symbol: &str) -> Result<Vec<PitchClass>> {
    chord_pitch_classes_with(symbol, chord_intervals)
}

/// Note names of a chord symbol: `CM7` -> `["C", "E", "G", "B"]`.
pub fn chord_notes(symbol: &str) -> Result<Vec<String>> {
    let notes: Vec<String> = chord_pitch_classes(symbol)?
        .into_iter()
        .map(|pc| canonical_name(pc).to_string())
        .collect();
    debug!(symbol, ?notes, "expanded chord");
    Ok(notes)
}

/// Note names with octaves: `FM7`, 4 -> `["F4", "A4", "C5", "E5"]`.
pub fn chord_notes_with_octave(symbol: &str, octave: i8) -> Result<Vec<String>> {
    let notes = voice_with_octave(&chord_pitch_classes(symbol)?, octave)?;
    debug!(symbol, octave, ?notes, "expanded chord with octave");
    Ok(notes)
}
