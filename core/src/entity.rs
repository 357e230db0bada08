//! Entity structures of the component model.
//!
//! A `Module` declares specifications and implementations. Implementations
//! inherit from each other through `ImplementationReference` edges and
//! implement specifications through `SpecificationReference`s.

use crate::{
    Dependency, ImplementationReference, Message, MessageReference, Messages, Properties, Property,
    PropertyReference, SpecificationReference,
};

/// How many implementations a specification admits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Multiplicity {
    /// At most one implementation.
    One,
    /// Any number of implementations, told apart by name.
    #[default]
    Many,
}

/// Specification declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Specification {
    /// Unique key within the model.
    pub identifier: String,
    /// Implementing class name.
    pub class: Option<String>,
    pub multiplicity: Multiplicity,
    /// Scope tag. Scoped specifications own their nested configuration.
    pub scope: Option<String>,
    pub version: Option<String>,
    pub properties: Properties,
}

impl Specification {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            ..Self::default()
        }
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn multiplicity(mut self, multiplicity: Multiplicity) -> Self {
        self.multiplicity = multiplicity;
        self
    }

    pub fn one(self) -> Self {
        self.multiplicity(Multiplicity::One)
    }

    pub fn many(self) -> Self {
        self.multiplicity(Multiplicity::Many)
    }

    pub fn scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = Some(scope.into());
        self
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn property(mut self, property: Property) -> Self {
        self.properties.declarations.push(property);
        self
    }

    pub fn property_reference(mut self, reference: PropertyReference) -> Self {
        self.properties.references.push(reference);
        self
    }
}

/// Specification declarations and references of one owner.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Specifications {
    pub declarations: Vec<Specification>,
    pub references: Vec<SpecificationReference>,
}

impl Specifications {
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty() && self.references.is_empty()
    }
}

/// Implementation declarations and parent references of one owner.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Implementations {
    pub declarations: Vec<Implementation>,
    pub references: Vec<ImplementationReference>,
}

impl Implementations {
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty() && self.references.is_empty()
    }
}

/// Implementation declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Implementation {
    /// Unique key within the model.
    pub identifier: String,
    pub class: Option<String>,
    pub is_abstract: bool,
    pub is_final: bool,
    /// Deployment location.
    pub location: Option<String>,
    /// Name distinguishing implementations of a `MANY` specification.
    pub name: Option<String>,
    pub version: Option<String>,
    pub specifications: Specifications,
    /// Parent references. Nested declarations are never legal here.
    pub implementations: Implementations,
    pub dependencies: Vec<Dependency>,
    pub messages: Messages,
    pub properties: Properties,
}

impl Implementation {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            ..Self::default()
        }
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn abstract_(mut self) -> Self {
        self.is_abstract = true;
        self
    }

    pub fn final_(mut self) -> Self {
        self.is_final = true;
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Implement a specification.
    pub fn implements(self, identifier: impl Into<String>) -> Self {
        self.specification_reference(SpecificationReference::new(identifier))
    }

    pub fn specification_reference(mut self, reference: SpecificationReference) -> Self {
        self.specifications.references.push(reference);
        self
    }

    /// Nest a specification declaration (never legal; kept for model fidelity).
    pub fn specification(mut self, specification: Specification) -> Self {
        self.specifications.declarations.push(specification);
        self
    }

    /// Inherit from a parent implementation.
    pub fn extends(self, identifier: impl Into<String>) -> Self {
        self.parent(ImplementationReference::new(identifier))
    }

    pub fn parent(mut self, reference: ImplementationReference) -> Self {
        self.implementations.references.push(reference);
        self
    }

    /// Nest an implementation declaration (never legal; kept for model fidelity).
    pub fn implementation(mut self, implementation: Implementation) -> Self {
        self.implementations.declarations.push(implementation);
        self
    }

    pub fn dependency(mut self, dependency: Dependency) -> Self {
        self.dependencies.push(dependency);
        self
    }

    pub fn message(mut self, message: Message) -> Self {
        self.messages.declarations.push(message);
        self
    }

    pub fn message_reference(mut self, reference: MessageReference) -> Self {
        self.messages.references.push(reference);
        self
    }

    pub fn property(mut self, property: Property) -> Self {
        self.properties.declarations.push(property);
        self
    }

    pub fn property_reference(mut self, reference: PropertyReference) -> Self {
        self.properties.references.push(reference);
        self
    }

    /// Get a locally declared dependency by name.
    pub fn get_dependency(&self, name: &str) -> Option<&Dependency> {
        self.dependencies.iter().find(|d| d.name == name)
    }
}

/// A module: a named unit of declarations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Module {
    pub name: String,
    pub version: Option<String>,
    pub specifications: Specifications,
    pub implementations: Implementations,
    /// Dependencies are never legal at module level.
    pub dependencies: Vec<Dependency>,
    pub messages: Messages,
    pub properties: Properties,
}

impl Module {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn specification(mut self, specification: Specification) -> Self {
        self.specifications.declarations.push(specification);
        self
    }

    pub fn specification_reference(mut self, reference: SpecificationReference) -> Self {
        self.specifications.references.push(reference);
        self
    }

    pub fn implementation(mut self, implementation: Implementation) -> Self {
        self.implementations.declarations.push(implementation);
        self
    }

    pub fn implementation_reference(mut self, reference: ImplementationReference) -> Self {
        self.implementations.references.push(reference);
        self
    }

    pub fn dependency(mut self, dependency: Dependency) -> Self {
        self.dependencies.push(dependency);
        self
    }

    pub fn message(mut self, message: Message) -> Self {
        self.messages.declarations.push(message);
        self
    }

    pub fn message_reference(mut self, reference: MessageReference) -> Self {
        self.messages.references.push(reference);
        self
    }

    pub fn property(mut self, property: Property) -> Self {
        self.properties.declarations.push(property);
        self
    }

    pub fn property_reference(mut self, reference: PropertyReference) -> Self {
        self.properties.references.push(reference);
        self
    }
}
