//! Parsing of a single configuration file.
//!
//! A file is read generically first: each kind-named top-level key holds
//! either an inline mapping or a `${file:...}` reference string. References
//! are resolved before the file leaves this module, so later stages only
//! ever see inline component sets.

use std::path::Path;

use otelgen_common::error::{OtelgenError, Result};
use otelgen_common::kind::{ComponentKind, PerKind};
use serde_yaml::{Mapping, Value};

use crate::model::{ComponentSet, ConfigFragment, ServiceSection};
use crate::reference;

/// Top-level key of the service section.
const SERVICE_KEY: &str = "service";

/// Value of one kind-named section as written.
#[derive(Debug, Clone, PartialEq)]
pub enum SectionValue {
    /// Components declared in place.
    Inline(ComponentSet),
    /// Components stored in another file.
    ExternalRef(String),
}

impl Default for SectionValue {
    fn default() -> Self {
        Self::Inline(ComponentSet::new())
    }
}

/// One file as written, references still unresolved.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawDocument {
    /// Section value per kind. Absent sections are empty inline sets.
    pub sections: PerKind<SectionValue>,
    /// Service section, if declared.
    pub service: Option<ServiceSection>,
}

impl RawDocument {
    /// Parses the text of one configuration file.
    ///
    /// `path` is only used to label errors.
    ///
    /// # Errors
    ///
    /// Returns `OtelgenError::ConfigFormat` if the text is not YAML, the top
    /// level is not a mapping, a kind section is neither a mapping nor a
    /// string, or the service section is malformed.
    pub fn parse(content: &str, path: &Path) -> Result<Self> {
        let format_err = |message: String| OtelgenError::ConfigFormat {
            path: path.to_path_buf(),
            message,
        };

        let root: Value = serde_yaml::from_str(content).map_err(|e| format_err(e.to_string()))?;
        let root = match root {
            Value::Null => return Ok(Self::default()),
            Value::Mapping(mapping) => mapping,
            other => {
                return Err(format_err(format!(
                    "top level must be a mapping, got {}",
                    value_kind(&other)
                )));
            }
        };

        let mut document = Self::default();
        for kind in ComponentKind::ALL {
            *document.sections.get_mut(kind) = section_value(&root, kind).map_err(format_err)?;
        }

        if let Some(service) = root.get(SERVICE_KEY) {
            let service = if service.is_null() {
                ServiceSection::default()
            } else {
                serde_yaml::from_value(service.clone())
                    .map_err(|e| format_err(format!("invalid service section: {e}")))?
            };
            document.service = Some(service);
        }

        Ok(document)
    }

    /// Replaces every external reference with the block it points at.
    ///
    /// # Errors
    ///
    /// Returns `OtelgenError::ExternalReference` if any reference is
    /// malformed or its target is unusable.
    pub fn resolve(self, path: &Path) -> Result<ConfigFragment> {
        let Self {
            mut sections,
            service,
        } = self;
        let mut fragment = ConfigFragment {
            components: PerKind::default(),
            service,
        };
        for kind in ComponentKind::ALL {
            let set = match std::mem::take(sections.get_mut(kind)) {
                SectionValue::Inline(set) => set,
                SectionValue::ExternalRef(reference) => {
                    let set = reference::load_external(&reference, path)?;
                    tracing::debug!(
                        %kind,
                        reference = %reference,
                        instances = set.len(),
                        "external component block loaded"
                    );
                    set
                }
            };
            *fragment.components.get_mut(kind) = set;
        }
        Ok(fragment)
    }
}

fn section_value(root: &Mapping, kind: ComponentKind) -> std::result::Result<SectionValue, String> {
    match root.get(kind.section()) {
        None | Some(Value::Null) => Ok(SectionValue::default()),
        Some(Value::Mapping(mapping)) => ComponentSet::from_mapping(mapping.clone())
            .map(SectionValue::Inline)
            .map_err(|e| format!("{}: {e}", kind.section())),
        Some(Value::String(reference)) => Ok(SectionValue::ExternalRef(reference.clone())),
        Some(other) => Err(format!(
            "{} must be a mapping or a file reference, got {}",
            kind.section(),
            value_kind(other)
        )),
    }
}

const fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}

/// Reads, parses, and resolves one configuration file.
///
/// # Errors
///
/// Returns `OtelgenError::ConfigRead` if the file cannot be read,
/// `OtelgenError::ConfigFormat` if it is malformed, and
/// `OtelgenError::ExternalReference` if a reference cannot be resolved.
pub fn load_fragment(path: &Path) -> Result<ConfigFragment> {
    tracing::info!(path = %path.display(), "parsing configuration file");
    let content = std::fs::read_to_string(path).map_err(|e| OtelgenError::ConfigRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    RawDocument::parse(&content, path)?.resolve(path)
}
