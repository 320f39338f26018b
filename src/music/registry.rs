// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! User-defined chord and scale kinds layered over the built-in catalogs.
//!
//! The built-in tables are never touched; a `Catalog` checks its own
//! definitions first and falls back to them.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{Result, TheoryError};

use super::chord::{self, chord_pitch_classes_with, voice_with_octave, BASE_KIND};
use super::note::canonical_name;
use super::scale::{self, expand_from_root};

/// Custom chord or scale definition, as loaded from config
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomDefinition {
    /// Kind key (`m7add11`, `hirajoshi`, ...)
    pub name: String,
    /// Offsets from the root in semitones, starting at 0
    pub intervals: Vec<u8>,
}

impl CustomDefinition {
    pub fn new(name: impl Into<String>, intervals: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            intervals,
        }
    }

    /// A definition needs a name and must start at the root.
    pub fn validate(&self) -> Result<()> {
        let invalid = |reason: &str| TheoryError::InvalidDefinition {
            name: self.name.clone(),
            reason: reason.to_string(),
        };

        if self.name.is_empty() {
            return Err(invalid("name must not be empty"));
        }
        match self.intervals.first() {
            None => Err(invalid("intervals must not be empty")),
            Some(0) => Ok(()),
            Some(_) => Err(invalid("first interval must be 0")),
        }
    }
}

/// Chord and scale lookup with user definitions taking precedence
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    chords: HashMap<String, Vec<u8>>,
    scales: HashMap<String, Vec<u8>>,
}

impl Catalog {
    /// A catalog with only the built-in kinds
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from lists of chord and scale definitions.
    pub fn with_definitions(chords: &[CustomDefinition], scales: &[CustomDefinition]) -> Result<Self> {
        let mut catalog = Self::new();
        for def in chords {
            catalog.register_chord(def.clone())?;
        }
        for def in scales {
            catalog.register_scale(def.clone())?;
        }
        Ok(catalog)
    }

    /// Register a chord kind. Keys stay case-sensitive.
    pub fn register_chord(&mut self, def: CustomDefinition) -> Result<()> {
        def.validate()?;
        if chord::chord_intervals(&def.name).is_ok() {
            warn!(kind = %def.name, "custom chord shadows a built-in kind");
        }
        self.chords.insert(def.name, def.intervals);
        Ok(())
    }

    /// Register a scale kind. Keys are stored lowercase.
    pub fn register_scale(&mut self, def: CustomDefinition) -> Result<()> {
        def.validate()?;
        let key = def.name.to_lowercase();
        if scale::scale_intervals(&key).is_ok() {
            warn!(kind = %key, "custom scale shadows a built-in kind");
        }
        self.scales.insert(key, def.intervals);
        Ok(())
    }

    /// Number of user-defined kinds (chords, scales)
    pub fn custom_counts(&self) -> (usize, usize) {
        (self.chords.len(), self.scales.len())
    }

    pub fn chord_intervals(&self, kind: &str) -> Result<&[u8]> {
        let key = if kind.is_empty() { BASE_KIND } else { kind };
        match self.chords.get(key) {
            Some(intervals) => Ok(intervals.as_slice()),
            None => chord::chord_intervals(kind),
        }
    }

    pub fn chord_notes(&self, symbol: &str) -> Result<Vec<String>> {
        Ok(chord_pitch_classes_with(symbol, |kind| self.chord_intervals(kind))?
            .into_iter()
            .map(|pc| canonical_name(pc).to_string())
            .collect())
    }

    pub fn chord_notes_with_octave(&self, symbol: &str, octave: i8) -> Result<Vec<String>> {
        let pitch_classes = chord_pitch_classes_with(symbol, |kind| self.chord_intervals(kind))?;
        voice_with_octave(&pitch_classes, octave)
    }

    pub fn scale_intervals(&self, kind: &str) -> Result<&[u8]> {
        match self.scales.get(&kind.to_lowercase()) {
            Some(intervals) => Ok(intervals.as_slice()),
            None => scale::scale_intervals(kind),
        }
    }

    pub fn scale_from_root(&self, kind: &str, root: &str) -> Result<Vec<u16>> {
        expand_from_root(self.scale_intervals(kind)?, root)
    }

    /// All chord kinds, built-in and custom, sorted
    pub fn chord_kinds(&self) -> Vec<String> {
        merged_names(chord::chord_kinds(), self.chords.keys())
    }

    /// All scale kinds, built-in and custom, sorted
    pub fn scale_kinds(&self) -> Vec<String> {
        merged_names(scale::scale_kinds(), self.scales.keys())
    }
}

fn merged_names<'a>(
    built_in: Vec<&'static str>,
    custom: impl Iterator<Item = &'a String>,
) -> Vec<String> {
    let mut names: Vec<String> = custom.cloned().collect();
    names.extend(built_in.into_iter().map(str::to_string));
    names.sort();
    names.dedup();
    names
}
