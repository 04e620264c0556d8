//! # otelgen-common
//!
//! Shared component kinds, error definitions, generator settings, and
//! constants used across the entire otelgen workspace.
//!
//! This crate is the leaf of the dependency graph: it depends on no other
//! internal crate and provides the primitives the catalog, config, and
//! manifest crates build upon.

pub mod config;
pub mod constants;
pub mod error;
pub mod kind;
