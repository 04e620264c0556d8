//! # otelgen-catalog
//!
//! The versioned catalog of collector components an upstream distribution
//! publishes, and the index derived from it.
//!
//! - **Document**: Serde model of the raw catalog manifest.
//! - **Index**: Per-kind mapping from component type name to coordinate.
//! - **Source**: Fetching catalog bytes from HTTP(S) or the local disk.

pub mod document;
pub mod index;
pub mod source;

pub use index::{CatalogEntry, CatalogIndex, normalize_type_name};
