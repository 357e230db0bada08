//! Properties: named values with an optional declared type.

use crate::error::{ModelError, ModelResult};
use crate::PropertyReference;

/// What a property carries.
///
/// A literal value and an embedded payload are mutually exclusive, so there is
/// no way to hold both.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PropertyContent {
    /// No value; the property coerces to null.
    #[default]
    Empty,
    /// Literal text, coerced to the declared type.
    Literal(String),
    /// Embedded typed payload. Requires the property to declare a type.
    Any(String),
}

impl PropertyContent {
    pub fn is_any(&self) -> bool {
        matches!(self, PropertyContent::Any(_))
    }
}

/// Property declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Property {
    pub name: String,
    /// Declared type name, e.g. `int` or `acme.Endpoint`.
    pub type_name: Option<String>,
    pub content: PropertyContent,
    pub is_final: bool,
    pub is_override: bool,
    pub deprecated: bool,
}

impl Property {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Build a property from the optional `value` and `any` fields of a
    /// serialized model. Fails when both are present.
    pub fn from_parts(
        name: impl Into<String>,
        value: Option<String>,
        any: Option<String>,
    ) -> ModelResult<Self> {
        let name = name.into();
        let content = match (value, any) {
            (Some(_), Some(_)) => return Err(ModelError::exclusive_property_content(name)),
            (Some(value), None) => PropertyContent::Literal(value),
            (None, Some(any)) => PropertyContent::Any(any),
            (None, None) => PropertyContent::Empty,
        };
        Ok(Self {
            name,
            content,
            ..Self::default()
        })
    }

    pub fn type_name(mut self, type_name: impl Into<String>) -> Self {
        self.type_name = Some(type_name.into());
        self
    }

    /// Set a literal value, replacing any previous content.
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.content = PropertyContent::Literal(value.into());
        self
    }

    /// Set an embedded payload, replacing any previous content.
    pub fn any(mut self, payload: impl Into<String>) -> Self {
        self.content = PropertyContent::Any(payload.into());
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
}

/// Property declarations and references of one owner.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Properties {
    pub declarations: Vec<Property>,
    pub references: Vec<PropertyReference>,
}

impl Properties {
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty() && self.references.is_empty()
    }

    /// Get a declaration by name.
    pub fn declaration(&self, name: &str) -> Option<&Property> {
        self.declarations.iter().find(|p| p.name == name)
    }

    /// Whether a declaration or a reference uses the given name.
    pub fn contains(&self, name: &str) -> bool {
        self.declaration(name).is_some() || self.references.iter().any(|r| r.name == name)
    }
}
