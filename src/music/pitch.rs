// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Absolute pitch resolution.
//!
//! Octave validity and final range validity are separate checks with
//! separate errors.

use crate::error::{Result, TheoryError};

use super::note::{canonical_name, PitchClass};

/// MIDI note number type (0-127)
pub type MidiNote = u8;

pub const MIN_NOTE_NUMBER: i16 = 0;
pub const MAX_NOTE_NUMBER: i16 = 127;

pub const MIN_OCTAVE: i8 = -1;
pub const MAX_OCTAVE: i8 = 9;

/// Octave number should be between -1 and 9.
pub fn is_valid_octave(octave: i8) -> bool {
    (MIN_OCTAVE..=MAX_OCTAVE).contains(&octave)
}

/// Fail with `InvalidOctave` unless the octave is in -1..=9.
pub fn validate_octave(octave: i8) -> Result<i8> {
    if is_valid_octave(octave) {
        Ok(octave)
    } else {
        Err(TheoryError::InvalidOctave(octave.into()))
    }
}

/// Narrow a user-supplied octave, failing with `InvalidOctave` for any
/// value outside -1..=9, including ones too wide for `i8`.
pub fn octave_from_number(value: i64) -> Result<i8> {
    i8::try_from(value)
        .ok()
        .filter(|octave| is_valid_octave(*octave))
        .ok_or(TheoryError::InvalidOctave(value))
}

/// Combine an octave and a pitch class into an absolute pitch.
///
/// Computes `(octave + 1) * 12 + pitch_class`; results outside 0..=127
/// are an error, never clamped. C4 is 60.
pub fn absolute_pitch(octave: i8, pc: PitchClass) -> Result<MidiNote> {
    let number = (octave as i16 + 1) * 12 + pc as i16;
    if (MIN_NOTE_NUMBER..=MAX_NOTE_NUMBER).contains(&number) {
        Ok(number as MidiNote)
    } else {
        Err(TheoryError::OutOfRange(format!(
            "{}{}",
            canonical_name(pc),
            octave
        )))
    }
}

/// Render a pitch class with an octave suffix, e.g. `D#0` or `C-1`
pub fn note_name_with_octave(pc: PitchClass, octave: i8) -> String {
    format!("{}{}", canonical_name(pc), octave)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_octaves() {
        assert!(is_valid_octave(-1));
        assert!(is_valid_octave(4));
        assert!(is_valid_octave(9));
        assert!(!is_valid_octave(-2));
        assert!(!is_valid_octave(10));
    }

    #[test]
    fn test_validate_octave_error() {
        assert_eq!(validate_octave(10), Err(TheoryError::InvalidOctave(10)));
        assert_eq!(validate_octave(0), Ok(0));
    }

    #[test]
    fn test_octave_from_number() {
        assert_eq!(octave_from_number(-1), Ok(-1));
        assert_eq!(octave_from_number(9), Ok(9));
        assert_eq!(octave_from_number(12), Err(TheoryError::InvalidOctave(12)));
        assert_eq!(octave_from_number(200), Err(TheoryError::InvalidOctave(200)));
        assert_eq!(
            octave_from_number(-300),
            Err(TheoryError::InvalidOctave(-300))
        );
    }

    #[test]
    fn test_absolute_pitch() {
        assert_eq!(absolute_pitch(-1, 0), Ok(0));
        assert_eq!(absolute_pitch(4, 0), Ok(60));
        assert_eq!(absolute_pitch(8, 2), Ok(110));
        assert_eq!(absolute_pitch(9, 7), Ok(127));
    }

    #[test]
    fn test_absolute_pitch_out_of_range() {
        assert!(matches!(absolute_pitch(9, 8), Err(TheoryError::OutOfRange(_))));
        assert!(matches!(absolute_pitch(-2, 0), Err(TheoryError::OutOfRange(_))));
    }

    #[test]
    fn test_note_name_with_octave() {
        assert_eq!(note_name_with_octave(3, 0), "D#0");
        assert_eq!(note_name_with_octave(0, -1), "C-1");
    }
}
