//! Default locations and fixed manifest values.

/// Upstream otelcol-contrib distribution manifest used as the catalog.
pub const DEFAULT_CATALOG_URL: &str = "https://raw.githubusercontent.com/open-telemetry/opentelemetry-collector-releases/refs/heads/main/distributions/otelcol-contrib/manifest.yaml";

/// Environment variable overriding the catalog source.
pub const CATALOG_ENV_VAR: &str = "OTELGEN_CATALOG";

/// Default path of the generated builder manifest.
pub const DEFAULT_OUTPUT_FILE: &str = "builder-config.yaml";

/// Default `dist.name` of the generated manifest.
pub const DEFAULT_DIST_NAME: &str = "otel-custom-col";

/// Default `dist.description` of the generated manifest.
pub const DEFAULT_DIST_DESCRIPTION: &str = "Custom OpenTelemetry Collector build from config";

/// Default `dist.output_path` of the generated manifest.
pub const DEFAULT_DIST_OUTPUT_PATH: &str = "./otelcol-custom";

/// Opening delimiter of an external component block reference.
pub const FILE_REFERENCE_PREFIX: &str = "${file:";

/// Closing delimiter of an external component block reference.
pub const FILE_REFERENCE_SUFFIX: &str = "}";

/// Separator between a component type and its instance qualifier.
pub const INSTANCE_SEPARATOR: char = '/';

/// Binary name for the CLI.
pub const BIN_NAME: &str = "otelgen";
