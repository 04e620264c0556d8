//! Command-line arguments.

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use otelgen_common::config::GeneratorSettings;
use otelgen_common::constants;

/// Generate an OpenTelemetry Collector builder manifest from pipeline
/// configuration files.
#[derive(Parser, Debug)]
#[command(name = constants::BIN_NAME, version, about, long_about = None)]
pub struct Cli {
    /// Collector configuration files, merged in order (later files win).
    #[arg(required = true, value_name = "CONFIG")]
    pub files: Vec<PathBuf>,

    /// Path of the generated builder manifest.
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Collector version you expect. The catalog's version is always used;
    /// a mismatch is only reported.
    #[arg(long, value_name = "VERSION")]
    pub otel_version: Option<String>,

    /// Catalog location: URL, `file://` URI, or local path.
    #[arg(long, env = constants::CATALOG_ENV_VAR, value_name = "URI")]
    pub catalog: Option<String>,

    /// YAML settings file providing defaults for the options above.
    #[arg(long, value_name = "FILE")]
    pub settings: Option<PathBuf>,

    /// Override `dist.name`.
    #[arg(long)]
    pub dist_name: Option<String>,

    /// Override `dist.description`.
    #[arg(long)]
    pub dist_description: Option<String>,

    /// Override `dist.output_path`.
    #[arg(long)]
    pub dist_output_path: Option<String>,

    /// Print the manifest to stdout instead of writing it.
    #[arg(long)]
    pub stdout: bool,

    /// Emit logs as JSON lines.
    #[arg(long)]
    pub log_json: bool,
}

impl Cli {
    /// Builds the effective settings: built-in defaults, then the settings
    /// file, then explicit flags.
    ///
    /// # Errors
    ///
    /// Returns an error if the settings file cannot be read or parsed.
    pub fn settings(&self) -> anyhow::Result<GeneratorSettings> {
        let mut settings = match &self.settings {
            Some(path) => load_settings(path)?,
            None => GeneratorSettings::default(),
        };

        if let Some(output) = &self.output {
            settings.output.clone_from(output);
        }
        if let Some(version) = &self.otel_version {
            settings.requested_version = Some(version.clone());
        }
        if let Some(catalog) = &self.catalog {
            settings.catalog.clone_from(catalog);
        }
        if let Some(name) = &self.dist_name {
            settings.dist.name.clone_from(name);
        }
        if let Some(description) = &self.dist_description {
            settings.dist.description.clone_from(description);
        }
        if let Some(output_path) = &self.dist_output_path {
            settings.dist.output_path.clone_from(output_path);
        }
        Ok(settings)
    }
}

fn load_settings(path: &Path) -> anyhow::Result<GeneratorSettings> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read settings file {}", path.display()))?;
    serde_yaml::from_str(&content)
        .with_context(|| format!("malformed settings file {}", path.display()))
}
