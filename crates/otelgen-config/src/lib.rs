//! # otelgen-config
//!
//! Loads one or more collector configuration files and folds them into a
//! single [`LogicalConfiguration`](model::LogicalConfiguration).
//!
//! Handles:
//! - **Document**: Generic parsing of one file into per-kind sections.
//! - **Reference**: `${file:...}` component blocks stored in other files.
//! - **Model**: Merged per-kind component sets and the service section.
//! - **Merger**: Ordered, last-write-wins folding of many files.

pub mod document;
pub mod merger;
pub mod model;
pub mod reference;

pub use merger::parse;
pub use model::{ComponentSet, LogicalConfiguration, PipelineDecl, ServiceSection};
