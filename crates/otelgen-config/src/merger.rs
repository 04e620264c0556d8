//! Ordered folding of many configuration files.

use std::path::Path;

use otelgen_common::error::Result;
use otelgen_common::kind::ComponentKind;

use crate::document::load_fragment;
use crate::model::LogicalConfiguration;

/// Parses `files` in order and merges them into one logical configuration.
///
/// For every kind, instance names are unioned and a later file overwrites an
/// earlier one on collision. The service section is whatever the last file
/// declares, empty when the last file has none.
///
/// # Errors
///
/// Fails on the first file that cannot be read, parsed, or have its
/// external references resolved. No partial configuration is returned.
pub fn parse<P: AsRef<Path>>(files: &[P]) -> Result<LogicalConfiguration> {
    let mut config = LogicalConfiguration::new();
    for file in files {
        config.merge(load_fragment(file.as_ref())?);
    }

    tracing::info!(
        files = files.len(),
        receivers = config.components(ComponentKind::Receiver).len(),
        processors = config.components(ComponentKind::Processor).len(),
        exporters = config.components(ComponentKind::Exporter).len(),
        extensions = config.components(ComponentKind::Extension).len(),
        pipelines = config.service().pipelines.len(),
        "configuration merged"
    );
    Ok(config)
}
