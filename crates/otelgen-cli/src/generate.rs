//! The generate pipeline: catalog, configuration, resolution, output.

use std::path::Path;

use otelgen_catalog::CatalogIndex;
use otelgen_catalog::source::CatalogSource;
use otelgen_common::error::OtelgenError;
use otelgen_manifest::resolve;

use crate::args::Cli;
use crate::output;

/// Runs one generation.
///
/// Nothing is written unless every step succeeds.
///
/// # Errors
///
/// Returns an error if the catalog cannot be fetched or parsed, any
/// configuration file or reference cannot be loaded, or the manifest cannot
/// be rendered or written.
pub fn execute(cli: Cli) -> anyhow::Result<()> {
    let settings = cli.settings()?;

    let source = CatalogSource::parse(&settings.catalog);
    tracing::info!(source = %source.describe(), "loading catalog");
    let index = CatalogIndex::build(&source.fetch()?)?;

    let config = otelgen_config::parse(&cli.files)?;

    let resolution = resolve(
        &config,
        &index,
        &settings.dist,
        settings.requested_version.as_deref(),
    );
    let yaml = resolution.manifest.to_yaml()?;

    output::print_warnings(&resolution);
    if cli.stdout {
        output::print_manifest(&yaml);
    } else {
        write_manifest(&settings.output, &yaml)?;
        output::print_summary(&resolution, &settings.output);
    }
    Ok(())
}

fn write_manifest(path: &Path, yaml: &str) -> Result<(), OtelgenError> {
    tracing::info!(path = %path.display(), "writing builder manifest");
    std::fs::write(path, yaml).map_err(|e| OtelgenError::Io {
        path: path.to_path_buf(),
        source: e,
    })
}
