// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Pitch-class table.
//!
//! Maps every accepted spelling (including enharmonic duplicates and the
//! historical `H`/`Hb`) to a pitch class, and owns the single canonical
//! name per pitch class used for all output.

use std::fmt;
use std::str::FromStr;

use crate::error::TheoryError;

/// Pitch class within an octave (0 = C, 11 = B)
pub type PitchClass = u8;

/// Semitone offset type
pub type Semitones = i8;

//     1   3       6   8   10
// |  | | | |  |  | | | | | |  |
// |  |_| |_|  |  |_| |_| |_|  |
// |___|___|___|___|___|___|___|
//   0   2   4   5   7   9   11

/// Canonical output names, indexed by pitch class. Sharps are preferred.
pub const BASE_TONES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Every accepted spelling and its pitch class.
const NOTE_SPELLINGS: [(&str, PitchClass); 23] = [
    ("C", 0),
    ("B#", 0),
    ("C#", 1),
    ("Db", 1),
    ("D", 2),
    ("D#", 3),
    ("Eb", 3),
    ("E", 4),
    ("Fb", 4),
    ("F", 5),
    ("E#", 5),
    ("F#", 6),
    ("Gb", 6),
    ("G", 7),
    ("G#", 8),
    ("Ab", 8),
    ("A", 9),
    ("A#", 10),
    ("Bb", 10),
    ("B", 11),
    ("Cb", 11),
    ("Hb", 10),
    ("H", 11),
];

/// Look up the pitch class of a bare spelling (no octave suffix).
///
/// Matching is exact and case-sensitive: `Db` is a note, `DB` is not.
pub fn lookup_pitch_class(spelling: &str) -> Option<PitchClass> {
    NOTE_SPELLINGS
        .iter()
        .find(|(name, _)| *name == spelling)
        .map(|&(_, pc)| pc)
}

/// All accepted spellings, in table order
pub fn spellings() -> impl Iterator<Item = &'static str> {
    NOTE_SPELLINGS.iter().map(|(name, _)| *name)
}

/// Canonical name for a pitch class. Values above 11 are reduced first.
pub fn canonical_name(pc: PitchClass) -> &'static str {
    BASE_TONES[(pc % 12) as usize]
}

/// Note names (pitch classes)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Note {
    C,
    Cs, // C# / Db
    D,
    Ds, // D# / Eb
    E,
    F,
    Fs, // F# / Gb
    G,
    Gs, // G# / Ab
    A,
    As, // A# / Bb / Hb
    B,  // H / Cb
}

impl Note {
    /// All notes in chromatic order
    pub const ALL: [Note; 12] = [
        Note::C,
        Note::Cs,
        Note::D,
        Note::Ds,
        Note::E,
        Note::F,
        Note::Fs,
        Note::G,
        Note::Gs,
        Note::A,
        Note::As,
        Note::B,
    ];

    /// Get the pitch class (0-11) for this note
    pub fn pitch_class(self) -> PitchClass {
        self as PitchClass
    }

    /// Get note from pitch class
    pub fn from_pitch_class(pc: PitchClass) -> Self {
        Note::ALL[(pc % 12) as usize]
    }

    /// Canonical spelling of this note
    pub fn name(self) -> &'static str {
        BASE_TONES[self.pitch_class() as usize]
    }

    /// Transpose by semitones
    pub fn transpose(self, semitones: Semitones) -> Self {
        let new_pc = (self.pitch_class() as i16 + semitones as i16).rem_euclid(12) as u8;
        Note::from_pitch_class(new_pc)
    }
}

impl FromStr for Note {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        lookup_pitch_class(s)
            .map(Note::from_pitch_class)
            .ok_or_else(|| TheoryError::NotFoundNote(s.to_string()))
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_pitch_class() {
        assert_eq!(Note::C.pitch_class(), 0);
        assert_eq!(Note::A.pitch_class(), 9);
        assert_eq!(Note::B.pitch_class(), 11);
    }

    #[test]
    fn test_lookup_standard_and_legacy_spellings() {
        assert_eq!(lookup_pitch_class("C"), Some(0));
        assert_eq!(lookup_pitch_class("Db"), Some(1));
        assert_eq!(lookup_pitch_class("C#"), Some(1));
        assert_eq!(lookup_pitch_class("H"), Some(11));
        assert_eq!(lookup_pitch_class("Hb"), Some(10));
        assert_eq!(lookup_pitch_class("B#"), Some(0));
        assert_eq!(lookup_pitch_class("E#"), Some(5));
        assert_eq!(lookup_pitch_class("Fb"), Some(4));
        assert_eq!(lookup_pitch_class("Cb"), Some(11));
    }

    #[test]
    fn test_lookup_rejects_unknown() {
        assert_eq!(lookup_pitch_class("X"), None);
        assert_eq!(lookup_pitch_class("DB"), None);
        assert_eq!(lookup_pitch_class("C4"), None);
        assert_eq!(lookup_pitch_class(""), None);
    }

    #[test]
    fn test_canonical_names_round_trip() {
        for (pc, name) in BASE_TONES.iter().enumerate() {
            assert_eq!(lookup_pitch_class(name), Some(pc as u8));
            assert_eq!(Note::from_pitch_class(pc as u8).name(), *name);
        }
    }

    #[test]
    fn test_every_spelling_is_in_range() {
        assert_eq!(spellings().count(), 23);
        for spelling in spellings() {
            let pc = lookup_pitch_class(spelling).unwrap();
            assert!(pc < 12, "{} -> {}", spelling, pc);
        }
    }

    #[test]
    fn test_note_from_str() {
        assert_eq!("C".parse::<Note>(), Ok(Note::C));
        assert_eq!("Db".parse::<Note>(), Ok(Note::Cs));
        assert_eq!("Hb".parse::<Note>(), Ok(Note::As));
        assert_eq!(
            "X".parse::<Note>(),
            Err(TheoryError::NotFoundNote("X".to_string()))
        );
    }

    #[test]
    fn test_enharmonic_output_is_canonical() {
        let note: Note = "Db".parse().unwrap();
        assert_eq!(note.to_string(), "C#");
        assert_eq!(canonical_name(13), "C#");
    }

    #[test]
    fn test_note_transpose() {
        assert_eq!(Note::C.transpose(2), Note::D);
        assert_eq!(Note::C.transpose(12), Note::C);
        assert_eq!(Note::C.transpose(-1), Note::B);
        assert_eq!(Note::G.transpose(5), Note::C);
    }
}
