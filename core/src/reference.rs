//! References: named pointers to declarations, carrying their own modifiers.

/// A named item that takes part in inheritance.
///
/// Inherited items are keyed by name (or identifier). A `final` item cannot be
/// overridden by a descendant; an `override` item must replace an inherited one.
pub trait Inheritable {
    /// The key under which the item is inherited.
    fn key(&self) -> &str;
    fn is_final(&self) -> bool;
    fn is_override(&self) -> bool;
}

/// Reference to a parent implementation: the edge type of the inheritance graph.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImplementationReference {
    pub identifier: String,
    pub version: Option<String>,
    pub is_override: bool,
    pub is_final: bool,
}

impl ImplementationReference {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            ..Self::default()
        }
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
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
}

/// Reference to a specification an implementation implements.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpecificationReference {
    pub identifier: String,
    pub version: Option<String>,
    pub is_override: bool,
    pub is_final: bool,
    pub deprecated: bool,
}

impl SpecificationReference {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            ..Self::default()
        }
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
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

/// Reference to a message declared elsewhere.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageReference {
    pub name: String,
    pub is_override: bool,
    pub is_final: bool,
    pub deprecated: bool,
}

impl MessageReference {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
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

/// Reference to a property declared elsewhere.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyReference {
    pub name: String,
    pub is_override: bool,
    pub is_final: bool,
    pub deprecated: bool,
}

impl PropertyReference {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
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

macro_rules! inheritable {
    ($ty:ty, $key:ident) => {
        impl Inheritable for $ty {
            fn key(&self) -> &str {
                &self.$key
            }

            fn is_final(&self) -> bool {
                self.is_final
            }

            fn is_override(&self) -> bool {
                self.is_override
            }
        }
    };
}

inheritable!(ImplementationReference, identifier);
inheritable!(SpecificationReference, identifier);
inheritable!(MessageReference, name);
inheritable!(PropertyReference, name);
inheritable!(crate::Dependency, name);
inheritable!(crate::Message, name);
inheritable!(crate::Property, name);
