// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Error types for note, chord and scale resolution.
//!
//! Every variant carries the literal token that caused the failure so
//! callers can surface it unchanged. None of these are fatal; a failed
//! resolution simply produces no result.

use thiserror::Error;

/// Result alias used throughout the library.
pub type Result<T> = std::result::Result<T, TheoryError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TheoryError {
    /// The token does not match the note grammar.
    #[error("Not found note. `{0}`")]
    NotFoundNote(String),

    /// The leading root of a chord symbol is not `A`-`G` plus an optional accidental.
    #[error("Not found chord. `{0}`")]
    NotFoundChord(String),

    /// The kind token is absent from the chord catalog.
    #[error("Not found chord Kind. `{0}`")]
    NotFoundChordKind(String),

    /// The scale name is absent from the scale catalog.
    #[error("Not found scale. `{0}`")]
    NotFoundScale(String),

    /// The note grammar matched but no octave could be read from the suffix.
    #[error("Could not get octave. `{0}`")]
    CouldNotGetOctave(String),

    /// The note grammar matched but no degree could be read from the prefix.
    #[error("Could not get degree. `{0}`")]
    CouldNotGetDegree(String),

    /// An explicit octave argument outside -1..=9.
    #[error("`octave` should be -1 to 9 (got {0})")]
    InvalidOctave(i64),

    /// A computed pitch falls outside the ceiling of the call path.
    #[error("Note out of range. `{0}`")]
    OutOfRange(String),

    /// A user-supplied chord or scale definition is malformed.
    #[error("Invalid definition `{name}`: {reason}")]
    InvalidDefinition { name: String, reason: String },
}
