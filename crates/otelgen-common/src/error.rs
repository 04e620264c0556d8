//! Unified error types for the otelgen workspace.
//!
//! Every variant is fatal: the run aborts and no manifest is written.
//! Component types missing from the catalog are not errors; the resolver
//! reports them as diagnostics next to an otherwise complete manifest.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type shared across the workspace.
#[derive(Debug, Error)]
pub enum OtelgenError {
    /// The catalog source could not be reached or returned a bad status.
    #[error("failed to fetch catalog from {source_uri}: {message}")]
    CatalogFetch {
        /// URL or path the catalog was requested from.
        source_uri: String,
        /// Transport failure or HTTP status description.
        message: String,
    },

    /// The catalog document does not have the expected shape.
    #[error("malformed catalog document: {message}")]
    CatalogFormat {
        /// Description of the shape violation.
        message: String,
    },

    /// A configuration file could not be read.
    #[error("cannot read configuration file {path}: {source}")]
    ConfigRead {
        /// Offending configuration file.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// A configuration file could not be parsed into the expected shape.
    #[error("malformed configuration file {path}: {message}")]
    ConfigFormat {
        /// Offending configuration file.
        path: PathBuf,
        /// Description of the shape violation.
        message: String,
    },

    /// A `${file:...}` reference is malformed or its target is unusable.
    #[error("bad external reference {reference:?} in {file}: {message}")]
    ExternalReference {
        /// File containing the reference.
        file: PathBuf,
        /// Reference text as written.
        reference: String,
        /// Why the reference could not be resolved.
        message: String,
    },

    /// An I/O operation outside configuration loading failed.
    #[error("I/O error at {path}: {source}")]
    Io {
        /// Path where the I/O error occurred.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Rendering a document failed.
    #[error("serialization error: {source}")]
    Serialization {
        /// Underlying serialization error.
        #[from]
        source: serde_yaml::Error,
    },
}

/// Convenience alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, OtelgenError>;
