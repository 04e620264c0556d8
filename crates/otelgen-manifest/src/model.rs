//! Builder manifest document.

use otelgen_common::error::Result;
use otelgen_common::kind::ComponentKind;
use serde::{Deserialize, Serialize};

/// The builder manifest: distribution metadata plus the exact modules to
/// compile in, per kind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildManifest {
    /// Distribution metadata.
    pub dist: DistSection,
    /// Receiver modules.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub receivers: Vec<ModuleRef>,
    /// Processor modules.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub processors: Vec<ModuleRef>,
    /// Exporter modules.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exporters: Vec<ModuleRef>,
    /// Extension modules.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extensions: Vec<ModuleRef>,
}

/// The `dist` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistSection {
    /// Distribution name.
    pub name: String,
    /// Human-readable description.
    pub description: String,
    /// Directory the builder emits the binary into.
    pub output_path: String,
    /// Collector runtime version to build against.
    pub otelcol_version: String,
}

/// One module entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleRef {
    /// Module path plus version, exactly as published in the catalog.
    pub gomod: String,
}

impl BuildManifest {
    /// Module entries of one kind, in resolution order.
    #[must_use]
    pub fn modules(&self, kind: ComponentKind) -> &[ModuleRef] {
        match kind {
            ComponentKind::Receiver => &self.receivers,
            ComponentKind::Processor => &self.processors,
            ComponentKind::Exporter => &self.exporters,
            ComponentKind::Extension => &self.extensions,
        }
    }

    pub(crate) fn modules_mut(&mut self, kind: ComponentKind) -> &mut Vec<ModuleRef> {
        match kind {
            ComponentKind::Receiver => &mut self.receivers,
            ComponentKind::Processor => &mut self.processors,
            ComponentKind::Exporter => &mut self.exporters,
            ComponentKind::Extension => &mut self.extensions,
        }
    }

    /// Total module count across all kinds.
    #[must_use]
    pub fn module_count(&self) -> usize {
        ComponentKind::ALL
            .iter()
            .map(|kind| self.modules(*kind).len())
            .sum()
    }

    /// Renders the manifest as YAML.
    ///
    /// # Errors
    ///
    /// Returns `OtelgenError::Serialization` if rendering fails.
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}
