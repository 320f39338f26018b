// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Scale catalog and root-anchored scale expansion.
//!
//! Scale names are matched case-insensitively. Expansion adds each offset
//! directly to the resolved root number with no octave folding.

use tracing::debug;

use crate::error::{Result, TheoryError};

use super::parser::parse_note;

/// Number of built-in scale kinds
pub const SCALE_KIND_COUNT: usize = 29;

//    1   3     6   8   10       Db  Eb    Gb  Ab  Bb       C#  D#    F#  G#  A#
// | | | | | | | | | | | | |  | | | | | | | | | | | | |  | | | | | | | | | | | | |
// | |_| |_| | |_| |_| |_| |  | |_| |_| | |_| |_| |_| |  | |_| |_| | |_| |_| |_| |
// |__|___|__|__|___|___|__|  |__|___|__|__|___|___|__|  |__|___|__|__|___|___|__|
//  0   2  4   5  7   9  11    C   D  E   F  G   A   B    C   D  E   F  G   A   B

static SCALE_KINDS: [(&str, &[u8]); SCALE_KIND_COUNT] = [
    // Major and its modes
    ("ionian", &[0, 2, 4, 5, 7, 9, 11]),
    ("dorian", &[0, 2, 3, 5, 7, 9, 10]),
    ("phrigian", &[0, 1, 3, 5, 7, 8, 10]),
    ("lydian", &[0, 2, 4, 6, 7, 9, 11]),
    ("mixolydian", &[0, 2, 4, 5, 7, 9, 10]),
    ("aeolian", &[0, 2, 3, 5, 7, 8, 10]),
    ("locrian", &[0, 1, 3, 5, 6, 8, 10]),
    // Harmonic minor and its modes
    ("harmonic-minor", &[0, 2, 3, 5, 7, 8, 11]),
    ("locrian#6", &[0, 1, 3, 5, 6, 9, 10]),
    ("ionian#5", &[0, 2, 4, 5, 8, 9, 11]),
    ("dorian#4", &[0, 2, 3, 6, 7, 9, 10]),
    ("phrigian-major", &[0, 1, 4, 5, 7, 8, 10]),
    ("lydian#2", &[0, 3, 4, 6, 7, 9, 11]),
    ("super-locrianb7", &[0, 1, 3, 4, 6, 8, 9]),
    // Melodic minor and its modes
    ("super-ionian", &[0, 2, 3, 5, 7, 9, 11]),
    ("super-dorian", &[0, 1, 3, 5, 7, 9, 10]),
    ("super-phrigian", &[0, 2, 4, 6, 8, 9, 11]),
    ("super-lydian", &[0, 2, 4, 6, 7, 9, 10]),
    ("super-mixolydian", &[0, 2, 4, 5, 7, 8, 10]),
    ("super-aeolian", &[0, 2, 3, 5, 6, 8, 10]),
    ("super-locrian", &[0, 1, 3, 4, 6, 8, 10]),
    // Symmetric
    ("whole-tone", &[0, 2, 4, 6, 8, 10]),
    ("diminished", &[0, 2, 3, 5, 6, 8, 9, 11]),
    ("chromatic", &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11]),
    // Pentatonic and blues
    ("pentatonic-minor", &[0, 3, 5, 7, 10]),
    ("pentatonic-major", &[0, 3, 4, 7, 9]),
    ("blues-minor", &[0, 3, 5, 6, 7, 10]),
    ("blues-major", &[0, 2, 3, 4, 7, 9]),
    ("blue-note", &[0, 2, 3, 4, 5, 6, 7, 9, 10, 11]),
];

/// All built-in scale kind keys
pub fn scale_kinds() -> Vec<&'static str> {
    SCALE_KINDS.iter().map(|(kind, _)| *kind).collect()
}

/// Interval offsets for a scale: `ionian` -> `[0, 2, 4, 5, 7, 9, 11]`.
pub fn scale_intervals(kind: &str) -> Result<&'static [u8]> {
    let key = kind.to_lowercase();
    SCALE_KINDS
        .iter()
        .find(|(name, _)| *name == key)
        .map(|&(_, intervals)| intervals)
        .ok_or_else(|| TheoryError::NotFoundScale(kind.to_string()))
}

/// Add each offset to the root number of `root`.
///
/// `root` may be a bare spelling (offsets from its pitch class) or carry
/// an octave (offsets from its absolute pitch). Results are not range
/// checked, so a high root can yield numbers above 127.
pub fn expand_from_root(intervals: &[u8], root: &str) -> Result<Vec<u16>> {
    let root_number = parse_note(root)?.number() as u16;
    Ok(intervals
        .iter()
        .map(|&offset| root_number + offset as u16)
        .collect())
}

/// Scale as note numbers from a root: `ionian`, `D4` -> `[62, 64, 66, 67, 69, 71, 73]`.
pub fn scale_from_root(kind: &str, root: &str) -> Result<Vec<u16>> {
    let intervals = scale_intervals(kind)?;
    let notes = expand_from_root(intervals, root)?;
    debug!(kind, root, ?notes, "expanded scale");
    Ok(notes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_scale_kinds() {
        let kinds = scale_kinds();
        assert_eq!(kinds.len(), SCALE_KIND_COUNT);
        assert!(kinds.contains(&"mixolydian"));

        for kind in kinds {
            assert_eq!(kind, kind.to_lowercase(), "keys are stored lowercase");
            let intervals = scale_intervals(kind).unwrap();
            assert!(!intervals.is_empty());
            assert_eq!(intervals[0], 0, "{} does not start at the root", kind);
        }
    }

    #[test]
    fn test_scale_intervals() {
        assert_eq!(scale_intervals("ionian"), Ok(&[0, 2, 4, 5, 7, 9, 11][..]));
        assert_eq!(scale_intervals("Ionian"), Ok(&[0, 2, 4, 5, 7, 9, 11][..]));
        assert_eq!(
            scale_intervals("super-locrianb7"),
            Ok(&[0, 1, 3, 4, 6, 8, 9][..])
        );
        assert_eq!(scale_intervals("BLUES-MINOR"), scale_intervals("blues-minor"));
    }

    #[test]
    fn test_scale_intervals_error() {
        assert_eq!(
            scale_intervals("notfoundian"),
            Err(TheoryError::NotFoundScale("notfoundian".to_string()))
        );
    }

    #[test]
    fn test_scale_from_root() {
        assert_eq!(
            scale_from_root("ionian", "D4"),
            Ok(vec![62, 64, 66, 67, 69, 71, 73])
        );
        assert_eq!(
            scale_from_root("pentatonic-minor", "C-1"),
            Ok(vec![0, 3, 5, 7, 10])
        );
    }

    #[test]
    fn test_scale_from_bare_root() {
        assert_eq!(scale_from_root("whole-tone", "Eb"), Ok(vec![3, 5, 7, 9, 11, 13]));
    }

    #[test]
    fn test_scale_from_root_not_range_checked() {
        let notes = scale_from_root("ionian", "G9").unwrap();
        assert_eq!(notes.first(), Some(&127));
        assert_eq!(notes.last(), Some(&138));
    }

    #[test]
    fn test_scale_from_root_errors() {
        assert_eq!(
            scale_from_root("notfoundian", "C4"),
            Err(TheoryError::NotFoundScale("notfoundian".to_string()))
        );
        assert_eq!(
            scale_from_root("dorian", "X4"),
            Err(TheoryError::NotFoundNote("X4".to_string()))
        );
        assert_eq!(
            scale_from_root("dorian", "A9"),
            Err(TheoryError::OutOfRange("A9".to_string()))
        );
    }
}
