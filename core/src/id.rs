//! Identity handles for model entities.
//!
//! Diagnostics never hold a reference into the model graph. They name the
//! offending entity through a lightweight [`Subject`] instead.

use serde::Serialize;
use std::fmt;

/// The kind of a model entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Module,
    Specification,
    Implementation,
    Dependency,
    Message,
    Property,
    SpecificationReference,
    ImplementationReference,
    MessageReference,
    PropertyReference,
}

impl EntityKind {
    /// Human-readable name used in diagnostic messages.
    pub fn label(&self) -> &'static str {
        match self {
            EntityKind::Module => "module",
            EntityKind::Specification => "specification",
            EntityKind::Implementation => "implementation",
            EntityKind::Dependency => "dependency",
            EntityKind::Message => "message",
            EntityKind::Property => "property",
            EntityKind::SpecificationReference => "specification reference",
            EntityKind::ImplementationReference => "implementation reference",
            EntityKind::MessageReference => "message reference",
            EntityKind::PropertyReference => "property reference",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Handle naming an entity by kind and identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Subject {
    pub kind: EntityKind,
    pub identifier: String,
}

impl Subject {
    pub fn new(kind: EntityKind, identifier: impl Into<String>) -> Self {
        Self {
            kind,
            identifier: identifier.into(),
        }
    }

    pub fn module(name: impl Into<String>) -> Self {
        Self::new(EntityKind::Module, name)
    }

    pub fn specification(identifier: impl Into<String>) -> Self {
        Self::new(EntityKind::Specification, identifier)
    }

    pub fn implementation(identifier: impl Into<String>) -> Self {
        Self::new(EntityKind::Implementation, identifier)
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} '{}'", self.kind, self.identifier)
    }
}
