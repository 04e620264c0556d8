//! Settings model for one generator run.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::constants;

/// Root settings for a generator run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorSettings {
    /// Catalog location: an `http(s)://` URL, a `file://` URI, or a path.
    pub catalog: String,
    /// Where the build manifest is written.
    pub output: PathBuf,
    /// Collector version the caller asked for. Advisory only: the catalog's
    /// declared version is always the one stamped into the manifest.
    pub requested_version: Option<String>,
    /// Descriptive values for the manifest `dist` section.
    pub dist: DistSettings,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            catalog: constants::DEFAULT_CATALOG_URL.to_string(),
            output: PathBuf::from(constants::DEFAULT_OUTPUT_FILE),
            requested_version: None,
            dist: DistSettings::default(),
        }
    }
}

/// Fixed descriptive fields of the manifest `dist` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DistSettings {
    /// Distribution name.
    pub name: String,
    /// Human-readable description.
    pub description: String,
    /// Directory the builder emits the binary into.
    pub output_path: String,
}

impl Default for DistSettings {
    fn default() -> Self {
        Self {
            name: constants::DEFAULT_DIST_NAME.to_string(),
            description: constants::DEFAULT_DIST_DESCRIPTION.to_string(),
            output_path: constants::DEFAULT_DIST_OUTPUT_PATH.to_string(),
        }
    }
}
