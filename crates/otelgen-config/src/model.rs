//! Merged configuration model.

use std::collections::BTreeMap;

use otelgen_common::kind::{ComponentKind, PerKind};
use serde::Deserialize;
use serde_yaml::{Mapping, Value};

/// Instance name to opaque settings for one component kind.
///
/// Iteration follows first insertion. Overwriting an existing instance keeps
/// its position and replaces its payload.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComponentSet {
    entries: Mapping,
}

impl ComponentSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Converts a parsed YAML mapping, stringifying scalar keys.
    ///
    /// # Errors
    ///
    /// Returns a description of the first key that is not a string, number,
    /// or boolean.
    pub fn from_mapping(mapping: Mapping) -> std::result::Result<Self, String> {
        let mut set = Self::new();
        for (key, payload) in mapping {
            let name = match key {
                Value::String(s) => s,
                Value::Number(n) => n.to_string(),
                Value::Bool(b) => b.to_string(),
                other => return Err(format!("component names must be scalars, got {other:?}")),
            };
            let _ = set.insert(name, payload);
        }
        Ok(set)
    }

    /// Inserts or replaces one instance, returning the replaced payload.
    pub fn insert(&mut self, name: impl Into<String>, payload: Value) -> Option<Value> {
        self.entries.insert(Value::String(name.into()), payload)
    }

    /// Returns the payload for an instance name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries.get(name)
    }

    /// Whether an instance name is present.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Instance names in iteration order.
    pub fn instance_names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().filter_map(Value::as_str)
    }

    /// `(instance name, payload)` pairs in iteration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries
            .iter()
            .filter_map(|(k, v)| k.as_str().map(|name| (name, v)))
    }

    /// Number of instances.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the set holds no instances.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Folds `other` into `self`: union of names, `other` wins on collision.
    pub fn merge(&mut self, other: Self) {
        for (key, payload) in other.entries {
            let _ = self.entries.insert(key, payload);
        }
    }
}

/// The `service` section: which components participate in which pipeline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServiceSection {
    /// Enabled extension instance names.
    pub extensions: Vec<String>,
    /// Pipeline name (`traces`, `metrics/internal`, ...) to its members.
    pub pipelines: BTreeMap<String, PipelineDecl>,
}

/// Members of one pipeline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PipelineDecl {
    /// Receiver instance names.
    pub receivers: Vec<String>,
    /// Processor instance names.
    pub processors: Vec<String>,
    /// Exporter instance names.
    pub exporters: Vec<String>,
}

/// One file's contribution after external references are resolved.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigFragment {
    /// Component blocks per kind.
    pub components: PerKind<ComponentSet>,
    /// Service section, if the file declares one.
    pub service: Option<ServiceSection>,
}

/// Fully merged, reference-free view of all configuration files.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LogicalConfiguration {
    components: PerKind<ComponentSet>,
    service: ServiceSection,
}

impl LogicalConfiguration {
    /// Creates an empty configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds one fragment in. Component sets merge key by key with the
    /// fragment winning. The fragment's service section always replaces the
    /// current one wholesale, so a fragment without one leaves it empty.
    pub fn merge(&mut self, fragment: ConfigFragment) {
        let ConfigFragment {
            mut components,
            service,
        } = fragment;
        for kind in ComponentKind::ALL {
            let incoming = std::mem::take(components.get_mut(kind));
            self.components.get_mut(kind).merge(incoming);
        }
        self.service = service.unwrap_or_default();
    }

    /// Component instances of one kind.
    #[must_use]
    pub const fn components(&self, kind: ComponentKind) -> &ComponentSet {
        self.components.get(kind)
    }

    /// The service section of the most recently merged fragment.
    #[must_use]
    pub const fn service(&self) -> &ServiceSection {
        &self.service
    }

    /// Total instance count across all kinds.
    #[must_use]
    pub fn instance_count(&self) -> usize {
        self.components.iter().map(|(_, set)| set.len()).sum()
    }
}
