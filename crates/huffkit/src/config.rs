//! File layer configuration.

use serde::Deserialize;
use std::path::Path;

use huffkit_core::{Error, Result};

/// Naming rules for generated output paths.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Extension appended to compressed files, without the dot.
    pub extension: String,

    /// Suffix appended on decompress when the input lacks `extension`.
    pub decompressed_suffix: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            extension: default_extension(),
            decompressed_suffix: default_decompressed_suffix(),
        }
    }
}

impl Config {
    /// Load configuration from a JSON file. Missing fields take their defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| Error::InvalidConfig(format!("{}: {e}", path.display())))?;
        Self::from_json(&contents)
    }

    /// Parse configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Config =
            serde_json::from_str(json).map_err(|e| Error::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("extension", &self.extension),
            ("decompressed_suffix", &self.decompressed_suffix),
        ] {
            if value.is_empty() {
                return Err(Error::InvalidConfig(format!("{name} must not be empty")));
            }
            if value.contains(['.', '/', '\\']) {
                return Err(Error::InvalidConfig(format!(
                    "{name} {value:?} must not contain '.' or path separators"
                )));
            }
        }
        Ok(())
    }
}

fn default_extension() -> String {
    "huff".to_string()
}

fn default_decompressed_suffix() -> String {
    "decompressed".to_string()
}
