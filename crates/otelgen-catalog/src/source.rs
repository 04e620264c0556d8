//! Catalog source protocol handlers.
//!
//! Supports remote `https://` / `http://` locations and local catalog
//! snapshots given as `file://` URIs or plain paths.

use std::path::PathBuf;

use otelgen_common::error::{OtelgenError, Result};

/// Where catalog bytes come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    /// Remote HTTP(S) location.
    Remote(String),
    /// Local catalog snapshot.
    File(PathBuf),
}

impl CatalogSource {
    /// Classifies a catalog location string.
    #[must_use]
    pub fn parse(uri: &str) -> Self {
        if uri.starts_with("https://") || uri.starts_with("http://") {
            Self::Remote(uri.to_string())
        } else if let Some(path) = uri.strip_prefix("file://") {
            Self::File(PathBuf::from(path))
        } else {
            Self::File(PathBuf::from(uri))
        }
    }

    /// Human-readable location for diagnostics.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Remote(url) => url.clone(),
            Self::File(path) => path.display().to_string(),
        }
    }

    /// Fetches the raw catalog bytes.
    ///
    /// # Errors
    ///
    /// Returns `OtelgenError::CatalogFetch` on transport failures, non-success
    /// HTTP statuses, or unreadable local files.
    pub fn fetch(&self) -> Result<Vec<u8>> {
        match self {
            Self::Remote(url) => fetch_remote(url),
            Self::File(path) => {
                tracing::info!(path = %path.display(), "reading local catalog");
                std::fs::read(path).map_err(|e| OtelgenError::CatalogFetch {
                    source_uri: path.display().to_string(),
                    message: e.to_string(),
                })
            }
        }
    }
}

fn fetch_remote(url: &str) -> Result<Vec<u8>> {
    tracing::info!(url, "fetching upstream catalog");
    let fetch_err = |message: String| OtelgenError::CatalogFetch {
        source_uri: url.to_string(),
        message,
    };

    let response = reqwest::blocking::get(url).map_err(|e| fetch_err(e.to_string()))?;
    let status = response.status();
    if !status.is_success() {
        return Err(fetch_err(format!("HTTP {status}")));
    }

    let bytes = response
        .bytes()
        .map_err(|e| fetch_err(format!("failed to read response body: {e}")))?;
    tracing::debug!(url, size = bytes.len(), "catalog downloaded");
    Ok(bytes.to_vec())
}
