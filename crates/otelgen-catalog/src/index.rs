//! Type-name index over a catalog document.
//!
//! Collector configurations name components by *type* (`otlp`,
//! `hostmetrics`), while the catalog lists module coordinates
//! (`.../receiver/otlpreceiver v0.92.0`). The index bridges the two by
//! deriving a type name from every coordinate.

use std::collections::BTreeMap;

use otelgen_common::error::Result;
use otelgen_common::kind::{ComponentKind, PerKind};

use crate::document::CatalogDocument;

/// One published component, keyed in the index by its type name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    /// Kind of the component.
    pub kind: ComponentKind,
    /// Exact build coordinate as published (module path plus version).
    pub coordinate: String,
}

/// Per-kind mapping from type name to catalog entry, plus the runtime
/// version the catalog targets.
#[derive(Debug, Clone, Default)]
pub struct CatalogIndex {
    version: String,
    entries: PerKind<BTreeMap<String, CatalogEntry>>,
}

/// Derives a component type name from a catalog coordinate.
///
/// Takes the first whitespace-separated token as the module path, keeps its
/// final non-empty `/` segment, and strips the kind suffix from the end of that
/// segment when present. The match is exact and case-sensitive.
///
/// ```text
/// go.opentelemetry.io/collector/receiver/otlpreceiver v0.92.0  ->  otlp
/// ```
#[must_use]
pub fn normalize_type_name(coordinate: &str, kind: ComponentKind) -> &str {
    let module = coordinate.split_whitespace().next().unwrap_or_default();
    let module = module.trim_end_matches('/');
    let segment = module.rsplit('/').next().unwrap_or(module);
    segment.strip_suffix(kind.suffix()).unwrap_or(segment)
}

/// Lookup key for type names whose configuration spelling differs from the
/// module spelling only by underscores and case (`memory_limiter`).
fn folded(type_name: &str) -> String {
    type_name
        .chars()
        .filter(|c| *c != '_')
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

impl CatalogIndex {
    /// Parses raw catalog bytes and builds the index.
    ///
    /// # Errors
    ///
    /// Returns `OtelgenError::CatalogFormat` if the document does not have
    /// the expected shape.
    pub fn build(bytes: &[u8]) -> Result<Self> {
        let document = CatalogDocument::from_slice(bytes)?;
        Ok(Self::from_document(&document))
    }

    /// Builds the index from an already parsed document.
    ///
    /// Coordinates that normalize to an already indexed type name replace
    /// the earlier entry.
    #[must_use]
    pub fn from_document(document: &CatalogDocument) -> Self {
        let mut index = Self {
            version: document.dist.version.clone(),
            entries: PerKind::default(),
        };

        for kind in ComponentKind::ALL {
            for component in document.components(kind) {
                index.insert(kind, &component.gomod);
            }
        }

        tracing::info!(
            version = %index.version,
            receivers = index.len(ComponentKind::Receiver),
            processors = index.len(ComponentKind::Processor),
            exporters = index.len(ComponentKind::Exporter),
            extensions = index.len(ComponentKind::Extension),
            "catalog index built"
        );
        index
    }

    fn insert(&mut self, kind: ComponentKind, coordinate: &str) {
        if coordinate.trim().is_empty() {
            tracing::debug!(%kind, "skipping catalog entry with empty coordinate");
            return;
        }
        let type_name = normalize_type_name(coordinate, kind).to_string();
        let entry = CatalogEntry {
            kind,
            coordinate: coordinate.to_string(),
        };
        // TODO: surface duplicate type names as a diagnostic once callers can report them.
        if let Some(previous) = self.entries.get_mut(kind).insert(type_name.clone(), entry) {
            tracing::debug!(
                %kind,
                type_name = %type_name,
                replaced = %previous.coordinate,
                "duplicate catalog type name, last entry wins"
            );
        }
    }

    /// Collector runtime version declared by the catalog.
    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Looks up the entry for a configured component type.
    ///
    /// Exact type names win. Otherwise the name is retried with underscores
    /// removed and lowercased, so `memory_limiter` finds `memorylimiter`.
    #[must_use]
    pub fn lookup(&self, kind: ComponentKind, type_name: &str) -> Option<&CatalogEntry> {
        let entries = self.entries.get(kind);
        entries
            .get(type_name)
            .or_else(|| entries.get(folded(type_name).as_str()))
    }

    /// Number of indexed type names for one kind.
    #[must_use]
    pub fn len(&self, kind: ComponentKind) -> usize {
        self.entries.get(kind).len()
    }

    /// Whether the index holds no entries of any kind.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.iter().all(|(_, entries)| entries.is_empty())
    }

    /// Iterates `(type name, entry)` pairs of one kind in type-name order.
    pub fn entries(&self, kind: ComponentKind) -> impl Iterator<Item = (&str, &CatalogEntry)> {
        self.entries
            .get(kind)
            .iter()
            .map(|(name, entry)| (name.as_str(), entry))
    }
}
