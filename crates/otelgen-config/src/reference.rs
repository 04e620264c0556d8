//! `${file:<path>}` references to component blocks kept in other files.
//!
//! A referenced path is resolved against the directory of the file that
//! contains the reference, never the working directory. A leading `/` does
//! not escape that directory.

use std::path::{Component, Path, PathBuf};

use otelgen_common::constants::{FILE_REFERENCE_PREFIX, FILE_REFERENCE_SUFFIX};
use otelgen_common::error::{OtelgenError, Result};
use serde_yaml::Value;

use crate::model::ComponentSet;

/// Extracts the path from a `${file:<path>}` reference, or `None` if the
/// text does not have that shape.
#[must_use]
pub fn parse_file_reference(reference: &str) -> Option<&str> {
    reference
        .strip_prefix(FILE_REFERENCE_PREFIX)?
        .strip_suffix(FILE_REFERENCE_SUFFIX)
        .filter(|path| !path.trim().is_empty())
}

/// Resolves a reference to the on-disk path it points at.
///
/// # Errors
///
/// Returns `OtelgenError::ExternalReference` if the reference syntax is not
/// recognized.
pub fn resolve_reference_path(reference: &str, referencing_file: &Path) -> Result<PathBuf> {
    let relative = parse_file_reference(reference).ok_or_else(|| reference_err(
        reference,
        referencing_file,
        format!("expected {FILE_REFERENCE_PREFIX}<path>{FILE_REFERENCE_SUFFIX}"),
    ))?;
    let base = referencing_file.parent().unwrap_or_else(|| Path::new(""));
    let relative: PathBuf = Path::new(relative)
        .components()
        .filter(|c| !matches!(c, Component::RootDir | Component::Prefix(_)))
        .collect();
    Ok(base.join(relative))
}

/// Loads the component block a reference points at.
///
/// The target must be a flat mapping of instance name to settings for a
/// single component kind. An empty target yields an empty set.
///
/// # Errors
///
/// Returns `OtelgenError::ExternalReference` if the syntax is wrong or the
/// target cannot be read or parsed.
pub fn load_external(reference: &str, referencing_file: &Path) -> Result<ComponentSet> {
    let target = resolve_reference_path(reference, referencing_file)?;
    tracing::debug!(
        file = %referencing_file.display(),
        target = %target.display(),
        "resolving external component block"
    );

    let content = std::fs::read_to_string(&target).map_err(|e| {
        reference_err(
            reference,
            referencing_file,
            format!("cannot read {}: {e}", target.display()),
        )
    })?;

    let value: Value = serde_yaml::from_str(&content).map_err(|e| {
        reference_err(
            reference,
            referencing_file,
            format!("cannot parse {}: {e}", target.display()),
        )
    })?;

    let mapping = match value {
        Value::Null => return Ok(ComponentSet::new()),
        Value::Mapping(mapping) => mapping,
        _ => {
            return Err(reference_err(
                reference,
                referencing_file,
                format!("{} is not a mapping of component blocks", target.display()),
            ));
        }
    };

    ComponentSet::from_mapping(mapping).map_err(|message| {
        reference_err(
            reference,
            referencing_file,
            format!("{}: {message}", target.display()),
        )
    })
}

fn reference_err(reference: &str, file: &Path, message: String) -> OtelgenError {
    OtelgenError::ExternalReference {
        file: file.to_path_buf(),
        reference: reference.to_string(),
        message,
    }
}
