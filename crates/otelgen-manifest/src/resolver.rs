//! Maps configured component instances to catalog coordinates.
//!
//! Per kind, every instance name is reduced to its type (`otlp/internal`
//! becomes `otlp`), the first instance of each type wins, and each type is
//! looked up in the catalog index. Types that resolve to an already emitted
//! coordinate are skipped. Types the catalog does not publish are
//! dropped from the manifest and reported as [`UnresolvedComponent`]s.

use std::collections::HashSet;
use std::fmt;

use otelgen_catalog::CatalogIndex;
use otelgen_common::config::DistSettings;
use otelgen_common::constants::INSTANCE_SEPARATOR;
use otelgen_common::kind::ComponentKind;
use otelgen_config::LogicalConfiguration;

use crate::model::{BuildManifest, DistSection, ModuleRef};

/// A configured component type with no catalog entry. Non-fatal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnresolvedComponent {
    /// Kind the component was configured under.
    pub kind: ComponentKind,
    /// Type that was looked up.
    pub type_name: String,
    /// First instance name that carried this type.
    pub instance: String,
}

impl fmt::Display for UnresolvedComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} type '{}' (from '{}') not found in catalog, skipping",
            self.kind, self.type_name, self.instance
        )
    }
}

/// The caller asked for a collector version the catalog does not target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionAdvisory {
    /// Version the caller requested.
    pub requested: String,
    /// Version the catalog declares, which is the one used.
    pub catalog: String,
}

impl fmt::Display for VersionAdvisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "using catalog version {} instead of requested {}",
            self.catalog, self.requested
        )
    }
}

/// Outcome of one resolution pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// The manifest, complete except for unresolved types.
    pub manifest: BuildManifest,
    /// Types omitted because the catalog lacks them, in discovery order.
    pub unresolved: Vec<UnresolvedComponent>,
    /// Set when the requested version differs from the catalog's.
    pub version_advisory: Option<VersionAdvisory>,
}

/// Returns the type part of an instance name: everything before the first
/// `/`, or the whole name.
#[must_use]
pub fn component_type(instance: &str) -> &str {
    instance
        .split_once(INSTANCE_SEPARATOR)
        .map_or(instance, |(type_name, _)| type_name)
}

/// Resolves a merged configuration against the catalog.
///
/// `dist.otelcol_version` always comes from the catalog. A differing
/// `requested_version` only yields a [`VersionAdvisory`].
#[must_use]
pub fn resolve(
    config: &LogicalConfiguration,
    index: &CatalogIndex,
    dist: &DistSettings,
    requested_version: Option<&str>,
) -> Resolution {
    let mut manifest = BuildManifest {
        dist: DistSection {
            name: dist.name.clone(),
            description: dist.description.clone(),
            output_path: dist.output_path.clone(),
            otelcol_version: index.version().to_string(),
        },
        ..BuildManifest::default()
    };
    let mut unresolved = Vec::new();

    for kind in ComponentKind::ALL {
        let modules = resolve_kind(config, index, kind, &mut unresolved);
        *manifest.modules_mut(kind) = modules;
    }

    let version_advisory = check_requested_version(requested_version, index.version());
    if let Some(advisory) = &version_advisory {
        tracing::warn!(
            requested = %advisory.requested,
            catalog = %advisory.catalog,
            "requested collector version differs from catalog"
        );
    }

    tracing::info!(
        version = %manifest.dist.otelcol_version,
        modules = manifest.module_count(),
        unresolved = unresolved.len(),
        "manifest resolved"
    );

    Resolution {
        manifest,
        unresolved,
        version_advisory,
    }
}

fn resolve_kind(
    config: &LogicalConfiguration,
    index: &CatalogIndex,
    kind: ComponentKind,
    unresolved: &mut Vec<UnresolvedComponent>,
) -> Vec<ModuleRef> {
    let mut seen = HashSet::new();
    let mut emitted = HashSet::new();
    let mut modules = Vec::new();

    for instance in config.components(kind).instance_names() {
        let type_name = component_type(instance);
        if !seen.insert(type_name) {
            continue;
        }

        if let Some(entry) = index.lookup(kind, type_name) {
            // Spelling variants (`memory_limiter`, `memorylimiter`) share one entry.
            if !emitted.insert(entry.coordinate.as_str()) {
                tracing::debug!(%kind, type_name, "type already resolved under another spelling");
                continue;
            }
            tracing::debug!(%kind, type_name, coordinate = %entry.coordinate, "component resolved");
            modules.push(ModuleRef {
                gomod: entry.coordinate.clone(),
            });
        } else {
            let missing = UnresolvedComponent {
                kind,
                type_name: type_name.to_string(),
                instance: instance.to_string(),
            };
            tracing::warn!(%kind, type_name, "component type not found in catalog, skipping");
            unresolved.push(missing);
        }
    }

    modules
}

/// Compares a requested collector version with the catalog's.
#[must_use]
pub fn check_requested_version(requested: Option<&str>, catalog: &str) -> Option<VersionAdvisory> {
    requested
        .filter(|requested| *requested != catalog)
        .map(|requested| VersionAdvisory {
            requested: requested.to_string(),
            catalog: catalog.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;
    use otelgen_config::document::RawDocument;

    const CATALOG: &str = r"
dist:
  version: 0.92.0
receivers:
  - gomod: go.opentelemetry.io/collector/receiver/otlpreceiver v0.92.0
  - gomod: github.com/open-telemetry/opentelemetry-collector-contrib/receiver/hostmetricsreceiver v0.92.0
processors:
  - gomod: go.opentelemetry.io/collector/processor/batchprocessor v0.92.0
  - gomod: go.opentelemetry.io/collector/processor/memorylimiterprocessor v0.92.0
exporters:
  - gomod: go.opentelemetry.io/collector/exporter/otlpexporter v0.92.0
";

    fn index() -> CatalogIndex {
        CatalogIndex::build(CATALOG.as_bytes()).expect("catalog should build")
    }

    fn config(yaml: &str) -> LogicalConfiguration {
        let path = Path::new("inline.yaml");
        let fragment = RawDocument::parse(yaml, path)
            .and_then(|doc| doc.resolve(path))
            .expect("config should parse");
        let mut config = LogicalConfiguration::new();
        config.merge(fragment);
        config
    }

    fn gomods(manifest: &BuildManifest, kind: ComponentKind) -> Vec<&str> {
        manifest
            .modules(kind)
            .iter()
            .map(|m| m.gomod.as_str())
            .collect()
    }

    #[test]
    fn type_is_prefix_before_first_slash() {
        assert_eq!(component_type("otlp"), "otlp");
        assert_eq!(component_type("otlp/1"), "otlp");
        assert_eq!(component_type("otlp/a/b"), "otlp");
        assert_eq!(component_type("memory_limiter"), "memory_limiter");
        assert_eq!(component_type("/x"), "");
    }

    #[test]
    fn qualified_instances_collapse_to_one_module() {
        let resolution = resolve(
            &config("receivers:\n  otlp: {}\n  otlp/1: {}\n"),
            &index(),
            &DistSettings::default(),
            None,
        );
        assert_eq!(
            gomods(&resolution.manifest, ComponentKind::Receiver),
            vec!["go.opentelemetry.io/collector/receiver/otlpreceiver v0.92.0"]
        );
    }

    #[test]
    fn output_follows_first_occurrence_order() {
        let resolution = resolve(
            &config("receivers:\n  hostmetrics: {}\n  otlp/a: {}\n  hostmetrics/2: {}\n  otlp: {}\n"),
            &index(),
            &DistSettings::default(),
            None,
        );
        let receivers = gomods(&resolution.manifest, ComponentKind::Receiver);
        assert_eq!(receivers.len(), 2);
        assert!(receivers[0].contains("hostmetricsreceiver"));
        assert!(receivers[1].contains("otlpreceiver"));
    }

    #[test]
    fn underscore_and_plain_types_resolve() {
        let resolution = resolve(
            &config("processors:\n  batch: {}\n  memory_limiter: {}\n"),
            &index(),
            &DistSettings::default(),
            None,
        );
        assert_eq!(
            gomods(&resolution.manifest, ComponentKind::Processor),
            vec![
                "go.opentelemetry.io/collector/processor/batchprocessor v0.92.0",
                "go.opentelemetry.io/collector/processor/memorylimiterprocessor v0.92.0",
            ]
        );
        assert!(resolution.unresolved.is_empty());
    }

    #[test]
    fn spelling_variants_of_one_type_emit_one_module() {
        let resolution = resolve(
            &config("processors:\n  memory_limiter: {}\n  memorylimiter: {}\n  batch: {}\n  Batch: {}\n"),
            &index(),
            &DistSettings::default(),
            None,
        );
        assert_eq!(
            gomods(&resolution.manifest, ComponentKind::Processor),
            vec![
                "go.opentelemetry.io/collector/processor/memorylimiterprocessor v0.92.0",
                "go.opentelemetry.io/collector/processor/batchprocessor v0.92.0",
            ]
        );
        assert!(resolution.unresolved.is_empty());
    }

    #[test]
    fn unknown_types_are_dropped_and_reported() {
        let resolution = resolve(
            &config("exporters:\n  otlp: {}\n  kafka/primary: {}\n  kafka/backup: {}\n"),
            &index(),
            &DistSettings::default(),
            None,
        );
        assert_eq!(resolution.manifest.exporters.len(), 1);
        assert_eq!(
            resolution.unresolved,
            vec![UnresolvedComponent {
                kind: ComponentKind::Exporter,
                type_name: "kafka".into(),
                instance: "kafka/primary".into(),
            }]
        );
        assert!(resolution.unresolved[0].to_string().contains("not found in catalog"));
    }

    #[test]
    fn lookup_stays_within_kind() {
        let resolution = resolve(
            &config("processors:\n  otlp: {}\n"),
            &index(),
            &DistSettings::default(),
            None,
        );
        assert!(resolution.manifest.processors.is_empty());
        assert_eq!(resolution.unresolved.len(), 1);
    }

    #[test]
    fn dist_uses_settings_and_catalog_version() {
        let dist = DistSettings {
            name: "edge-col".into(),
            ..DistSettings::default()
        };
        let resolution = resolve(&config(""), &index(), &dist, Some("0.119.0"));
        let manifest = &resolution.manifest;
        assert_eq!(manifest.dist.name, "edge-col");
        assert_eq!(manifest.dist.output_path, "./otelcol-custom");
        assert_eq!(manifest.dist.otelcol_version, "0.92.0");
        assert_eq!(manifest.module_count(), 0);
    }

    #[test]
    fn differing_requested_version_is_advisory() {
        let resolution = resolve(&config(""), &index(), &DistSettings::default(), Some("0.119.0"));
        let advisory = resolution.version_advisory.expect("advisory");
        assert_eq!(advisory.requested, "0.119.0");
        assert_eq!(advisory.catalog, "0.92.0");
    }

    #[test]
    fn matching_or_absent_requested_version_is_silent() {
        assert!(check_requested_version(Some("0.92.0"), "0.92.0").is_none());
        assert!(check_requested_version(None, "0.92.0").is_none());
    }
}
