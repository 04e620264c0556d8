//! The closed set of collector component kinds.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Kind of a pluggable collector component.
///
/// Each kind runs through its own independent catalog, merge, and
/// resolution pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentKind {
    /// Ingests telemetry.
    Receiver,
    /// Transforms telemetry in flight.
    Processor,
    /// Ships telemetry to a backend.
    Exporter,
    /// Auxiliary capability outside the data path.
    Extension,
}

impl ComponentKind {
    /// All kinds, in manifest order.
    pub const ALL: [Self; 4] = [
        Self::Receiver,
        Self::Processor,
        Self::Exporter,
        Self::Extension,
    ];

    /// Suffix that module names of this kind carry (`otlpreceiver`).
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Receiver => "receiver",
            Self::Processor => "processor",
            Self::Exporter => "exporter",
            Self::Extension => "extension",
        }
    }

    /// Top-level section name in configuration and catalog documents.
    #[must_use]
    pub const fn section(self) -> &'static str {
        match self {
            Self::Receiver => "receivers",
            Self::Processor => "processors",
            Self::Exporter => "exporters",
            Self::Extension => "extensions",
        }
    }

    /// Position of this kind inside [`Self::ALL`], for per-kind arrays.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Receiver => 0,
            Self::Processor => 1,
            Self::Exporter => 2,
            Self::Extension => 3,
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

/// A value held once per [`ComponentKind`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PerKind<T> {
    slots: [T; 4],
}

impl<T> PerKind<T> {
    /// Builds a table by evaluating `f` for every kind.
    pub fn from_fn(mut f: impl FnMut(ComponentKind) -> T) -> Self {
        Self {
            slots: ComponentKind::ALL.map(&mut f),
        }
    }

    /// Returns the value for `kind`.
    #[must_use]
    pub const fn get(&self, kind: ComponentKind) -> &T {
        &self.slots[kind.index()]
    }

    /// Returns the value for `kind` mutably.
    pub const fn get_mut(&mut self, kind: ComponentKind) -> &mut T {
        &mut self.slots[kind.index()]
    }

    /// Iterates `(kind, value)` pairs in manifest order.
    pub fn iter(&self) -> impl Iterator<Item = (ComponentKind, &T)> {
        ComponentKind::ALL.into_iter().zip(self.slots.iter())
    }
}
