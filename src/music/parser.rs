// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Note token parsing.
//!
//! A token is either a bare spelling (`Eb`, `H`) resolving to a pitch
//! class, or a spelling with an octave suffix (`C4`, `Eb-1`, `G9`)
//! resolving to an absolute pitch. Both the octave suffix and the
//! spelling prefix are read longest-match-first.

use std::fmt;

use tracing::trace;

use crate::error::{Result, TheoryError};

use super::note::{lookup_pitch_class, PitchClass};
use super::pitch::{absolute_pitch, validate_octave, MidiNote};

/// Result of parsing a note token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParsedNote {
    /// Bare spelling without octave, e.g. `Db` -> 1
    PitchClass(PitchClass),
    /// Spelling with octave, e.g. `C4` -> 60
    Absolute(MidiNote),
}

impl ParsedNote {
    /// The numeric value regardless of form
    pub fn number(self) -> u8 {
        match self {
            ParsedNote::PitchClass(pc) => pc,
            ParsedNote::Absolute(n) => n,
        }
    }

    /// Pitch class of this note (reduces absolute pitches mod 12)
    pub fn pitch_class(self) -> PitchClass {
        self.number() % 12
    }

    pub fn is_absolute(self) -> bool {
        matches!(self, ParsedNote::Absolute(_))
    }
}

impl fmt::Display for ParsedNote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// Parse a note token into a pitch class or an absolute pitch.
pub fn parse_note(token: &str) -> Result<ParsedNote> {
    if let Some(pc) = lookup_pitch_class(token) {
        trace!(token, pc, "bare note spelling");
        return Ok(ParsedNote::PitchClass(pc));
    }

    // The grammar check is what rejects malformed names; the
    // sub-extractions below only run on tokens that passed it.
    if !matches_note_grammar(token) {
        return Err(TheoryError::NotFoundNote(token.to_string()));
    }

    let octave = octave_from_name(token)?;
    let degree = degree_from_name_with_octave(token)?;
    trace!(token, octave, degree, "note spelling with octave");

    absolute_pitch(octave, degree)
        .map(ParsedNote::Absolute)
        .map_err(|_| TheoryError::OutOfRange(token.to_string()))
}

/// Resolve a note token to its number: `Eb` -> 3, `C4` -> 60.
pub fn note_number(token: &str) -> Result<u8> {
    parse_note(token).map(ParsedNote::number)
}

/// Resolve a bare spelling and an explicit octave: `C`, 4 -> 60.
pub fn note_number_with_octave(spelling: &str, octave: i8) -> Result<MidiNote> {
    let degree = lookup_pitch_class(spelling)
        .ok_or_else(|| TheoryError::NotFoundNote(spelling.to_string()))?;
    validate_octave(octave)?;

    absolute_pitch(octave, degree)
        .map_err(|_| TheoryError::OutOfRange(format!("{}{}", spelling, octave)))
}

/// `[A-H][#b]?(-1|[0-9])?` with nothing trailing.
///
/// `A9` matches even though it is out of range; range is checked later.
fn matches_note_grammar(token: &str) -> bool {
    let bytes = token.as_bytes();
    let Some((&letter, mut rest)) = bytes.split_first() else {
        return false;
    };
    if !(b'A'..=b'H').contains(&letter) {
        return false;
    }
    if let Some((&(b'#' | b'b'), tail)) = rest.split_first() {
        rest = tail;
    }
    match rest {
        [] => true,
        [b'-', b'1'] => true,
        [digit] => digit.is_ascii_digit(),
        _ => false,
    }
}

/// Octave from the suffix of a token: `C1` -> 1, `C-1` -> -1.
fn octave_from_name(token: &str) -> Result<i8> {
    if token.len() > 1 {
        // case "C-1"
        if token.ends_with("-1") {
            return Ok(-1);
        }

        // case "C0" - "C9"; a trailing '#' or 'b' lands here too
        let last = token.as_bytes()[token.len() - 1];
        if last.is_ascii_digit() {
            return validate_octave((last - b'0') as i8)
                .map_err(|_| TheoryError::CouldNotGetOctave(token.to_string()));
        }
    }

    Err(TheoryError::CouldNotGetOctave(token.to_string()))
}

/// Degree from the prefix of an octave-bearing token: `Db2` -> 1, `D2` -> 2.
fn degree_from_name_with_octave(token: &str) -> Result<PitchClass> {
    if let Some(pc) = token.get(0..2).and_then(lookup_pitch_class) {
        return Ok(pc);
    }
    if let Some(pc) = token.get(0..1).and_then(lookup_pitch_class) {
        return Ok(pc);
    }

    Err(TheoryError::CouldNotGetDegree(token.to_string()))
}
