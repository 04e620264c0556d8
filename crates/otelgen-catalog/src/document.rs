//! Serde model of the upstream distribution manifest.
//!
//! Only the fields the index needs are modelled. Other top-level sections
//! (`connectors`, `providers`, `replaces`, ...) are ignored.

use otelgen_common::error::{OtelgenError, Result};
use otelgen_common::kind::ComponentKind;
use serde::Deserialize;

/// A raw catalog document.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogDocument {
    /// Distribution metadata.
    pub dist: CatalogDist,
    /// Published receivers.
    #[serde(default)]
    pub receivers: Vec<CatalogComponent>,
    /// Published processors.
    #[serde(default)]
    pub processors: Vec<CatalogComponent>,
    /// Published exporters.
    #[serde(default)]
    pub exporters: Vec<CatalogComponent>,
    /// Published extensions.
    #[serde(default)]
    pub extensions: Vec<CatalogComponent>,
}

/// The `dist` section of a catalog document.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogDist {
    /// Collector runtime version this catalog targets.
    pub version: String,
}

/// One published component.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogComponent {
    /// Module path plus version tag, space separated.
    pub gomod: String,
}

impl CatalogDocument {
    /// Parses a catalog document from raw bytes.
    ///
    /// # Errors
    ///
    /// Returns `OtelgenError::CatalogFormat` if the bytes are not YAML or
    /// lack `dist.version` or well-formed component sequences.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        serde_yaml::from_slice(bytes).map_err(|e| OtelgenError::CatalogFormat {
            message: e.to_string(),
        })
    }

    /// Returns the published components of one kind, in document order.
    #[must_use]
    pub fn components(&self, kind: ComponentKind) -> &[CatalogComponent] {
        match kind {
            ComponentKind::Receiver => &self.receivers,
            ComponentKind::Processor => &self.processors,
            ComponentKind::Exporter => &self.exporters,
            ComponentKind::Extension => &self.extensions,
        }
    }
}
