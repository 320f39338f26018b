// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Configuration for the chordnote tool.
//!
//! A config file sets output defaults and may add custom chord and scale
//! kinds on top of the built-in catalogs. Files ending in `.toml` are read
//! as TOML; everything else is read as YAML.

use std::fmt;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::music::pitch::validate_octave;
use crate::music::{Catalog, CustomDefinition};

/// Root configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ChordNoteConfig {
    /// Octave used for chord output when none is given on the command line
    #[serde(default)]
    pub default_octave: Option<i8>,
    /// How result lists are printed
    #[serde(default)]
    pub output: OutputFormat,
    /// Tracing filter directive (e.g. "chordnote=debug")
    #[serde(default)]
    pub log_level: Option<String>,
    /// Extra chord kinds
    #[serde(default)]
    pub chords: Vec<CustomDefinition>,
    /// Extra scale kinds
    #[serde(default)]
    pub scales: Vec<CustomDefinition>,
}

impl ChordNoteConfig {
    /// Load and validate a config file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        let config = if is_toml(path) {
            Self::from_toml(&contents)?
        } else {
            Self::from_yaml(&contents)?
        };
        config
            .validate()
            .with_context(|| format!("Invalid config file: {:?}", path))?;
        Ok(config)
    }

    /// Parse a configuration from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).context("Failed to parse YAML configuration")
    }

    /// Parse a configuration from TOML string
    pub fn from_toml(source: &str) -> Result<Self> {
        toml::from_str(source).context("Failed to parse TOML configuration")
    }

    /// Serialize to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("Failed to serialize configuration to YAML")
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string(self).context("Failed to serialize configuration to TOML")
    }

    /// Save to a file, picking the format from the extension
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let contents = if is_toml(path) {
            self.to_toml()?
        } else {
            self.to_yaml()?
        };
        fs::write(path, contents)
            .with_context(|| format!("Failed to write config file: {:?}", path))
    }

    /// Check the default octave and every custom definition
    pub fn validate(&self) -> crate::error::Result<()> {
        if let Some(octave) = self.default_octave {
            validate_octave(octave)?;
        }
        self.chords
            .iter()
            .chain(self.scales.iter())
            .try_for_each(CustomDefinition::validate)
    }

    /// Catalog with this config's custom kinds registered
    pub fn catalog(&self) -> crate::error::Result<Catalog> {
        Catalog::with_definitions(&self.chords, &self.scales)
    }
}

fn is_toml(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.eq_ignore_ascii_case("toml"))
        .unwrap_or(false)
}

/// How a list of results is printed
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// `C E G`
    #[default]
    Plain,
    /// `[C, E, G]`
    List,
    /// One item per line
    Lines,
}

impl OutputFormat {
    pub fn render<T: fmt::Display>(self, items: &[T]) -> String {
        let items: Vec<String> = items.iter().map(ToString::to_string).collect();
        match self {
            OutputFormat::Plain => items.join(" "),
            OutputFormat::List => format!("[{}]", items.join(", ")),
            OutputFormat::Lines => items.join("\n"),
        }
    }
}
