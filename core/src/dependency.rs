//! Dependencies: named requirements on a specification.

use crate::{Message, MessageReference, Messages, Properties, Property, PropertyReference};

/// Dependency declaration.
///
/// Nested dependencies, messages and properties override the same-named items
/// of the implementation the dependency resolves to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dependency {
    /// Name, unique within the owning scope.
    pub name: String,
    /// Identifier of the target specification.
    pub identifier: String,
    /// Name of the target implementation, for `MANY` specifications.
    pub implementation_name: Option<String>,
    pub version: Option<String>,
    pub optional: bool,
    pub bound: bool,
    pub is_override: bool,
    pub is_final: bool,
    pub deprecated: bool,
    pub dependencies: Vec<Dependency>,
    pub messages: Messages,
    pub properties: Properties,
}

impl Dependency {
    pub fn new(name: impl Into<String>, identifier: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            identifier: identifier.into(),
            ..Self::default()
        }
    }

    pub fn implementation_name(mut self, name: impl Into<String>) -> Self {
        self.implementation_name = Some(name.into());
        self
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    pub fn bound(mut self) -> Self {
        self.bound = true;
        self
    }

    pub fn overriding(mut self) -> Self {
        self.is_override = true;
        self
    }

    pub fn final_(mut self) -> Self {
        self.is_final = true;
        self
    }

    pub fn deprecated(mut self) -> Self {
        self.deprecated = true;
        self
    }

    /// Add a nested dependency override.
    pub fn dependency(mut self, dependency: Dependency) -> Self {
        self.dependencies.push(dependency);
        self
    }

    /// Add a nested message override.
    pub fn message(mut self, message: Message) -> Self {
        self.messages.declarations.push(message);
        self
    }

    pub fn message_reference(mut self, reference: MessageReference) -> Self {
        self.messages.references.push(reference);
        self
    }

    /// Add a nested property override.
    pub fn property(mut self, property: Property) -> Self {
        self.properties.declarations.push(property);
        self
    }

    pub fn property_reference(mut self, reference: PropertyReference) -> Self {
        self.properties.references.push(reference);
        self
    }

    /// Whether this dependency declares any nested overrides.
    pub fn has_overrides(&self) -> bool {
        !self.dependencies.is_empty()
            || !self.messages.declarations.is_empty()
            || !self.properties.declarations.is_empty()
    }
}
