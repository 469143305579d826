//! # Converter Configuration
//!
//! A named bundle of jurisdiction-supplied data the ED-318 output needs
//! but the ED-269 input cannot provide: default language, dataset
//! metadata texts, the issued timestamp, geoid reference, output bounding
//! box, collection name, and the ordered list of adjustment passes.
//!
//! Loaded once per run from a YAML or JSON file, passed by reference
//! through conversion and adjustment, never mutated. The `issued`
//! timestamp is explicit in the file rather than taken from the clock, so
//! a run is reproducible from its configuration.

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::text::LocalizedText;

/// Error loading a configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("cannot read configuration '{path}': {source}")]
    Io {
        /// Path to the configuration file.
        path: String,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// The file content did not parse as a configuration.
    #[error("invalid configuration '{path}': {reason}")]
    Parse {
        /// Path to the configuration file.
        path: String,
        /// Parser diagnostic.
        reason: String,
    },
}

/// A complete, named converter configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConverterConfiguration {
    /// Display name, e.g. `FOCA`.
    pub name: String,
    /// Jurisdiction-supplied additions merged into the ED-318 output.
    pub ed318_additions: Ed318Additions,
    /// Ordered names of adjustment passes to apply after conversion.
    #[serde(default)]
    pub adjusters: Vec<String>,
}

/// Data the target schema requires that the legacy schema does not carry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ed318Additions {
    /// Language tag applied to legacy plain strings during conversion.
    pub default_lang: String,
    pub provider: Vec<LocalizedText>,
    pub description: Vec<LocalizedText>,
    #[serde(rename = "technicalLimitation")]
    pub technical_limitation: Vec<LocalizedText>,
    /// Publication timestamp of the converted dataset.
    pub issued: DateTime<Utc>,
    /// Geoid reference, e.g. `CHGeo2004`.
    #[serde(rename = "otherGeoid")]
    pub other_geoid: String,
    /// Bounding box of the output feature collection.
    pub feature_collection_bbox: Vec<f64>,
    /// Name of the output feature collection.
    pub collection_name: String,
}

impl ConverterConfiguration {
    /// Load a configuration from a YAML (`.yaml`/`.yml`) or JSON file,
    /// chosen by extension.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        match ext {
            "yaml" | "yml" => {
                serde_yaml::from_str(&content).map_err(|e| ConfigError::Parse {
                    path: path.display().to_string(),
                    reason: e.to_string(),
                })
            }
            _ => serde_json::from_str(&content).map_err(|e| ConfigError::Parse {
                path: path.display().to_string(),
                reason: e.to_string(),
            }),
        }
    }
}
