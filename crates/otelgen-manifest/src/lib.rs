//! # otelgen-manifest
//!
//! Turns a merged collector configuration and a catalog index into the
//! builder manifest that assembles a custom collector binary.
//!
//! - **Model**: The builder manifest document and its YAML rendering.
//! - **Resolver**: Type extraction, per-type deduplication, catalog lookup,
//!   and diagnostics for types the catalog does not publish.

pub mod model;
pub mod resolver;

pub use model::{BuildManifest, DistSection, ModuleRef};
pub use resolver::{
    Resolution, UnresolvedComponent, VersionAdvisory, check_requested_version, component_type,
    resolve,
};
