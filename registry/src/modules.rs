//! The Modules index - immutable model lookup.

use cmv_core::{Implementation, Message, Module, Property, Specification};
use std::collections::HashMap;

/// Position of a declaration: module index and index within that module.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Slot {
    pub(crate) module: usize,
    pub(crate) index: usize,
}

/// The Modules index provides lookup of model declarations by identifier.
/// It is immutable after construction.
#[derive(Debug, Default)]
pub struct Modules {
    /// Modules in declaration order.
    modules: Vec<Module>,
    /// Specification slots by identifier.
    specifications: HashMap<String, Slot>,
    /// Implementation slots by identifier.
    implementations: HashMap<String, Slot>,
    /// Module-level message slots by name (first declaration wins).
    messages: HashMap<String, Slot>,
    /// Module-level property slots by name (first declaration wins).
    properties: HashMap<String, Slot>,
}

impl Modules {
    /// Create the index (use ModulesBuilder for construction).
    pub(crate) fn new(
        modules: Vec<Module>,
        specifications: HashMap<String, Slot>,
        implementations: HashMap<String, Slot>,
        messages: HashMap<String, Slot>,
        properties: HashMap<String, Slot>,
    ) -> Self {
        Self {
            modules,
            specifications,
            implementations,
            messages,
            properties,
        }
    }

    // ==================== Modules ====================

    /// Get all modules in declaration order.
    pub fn modules(&self) -> &[Module] {
        &self.modules
    }

    /// Get a module by name.
    pub fn module(&self, name: &str) -> Option<&Module> {
        self.modules.iter().find(|m| m.name == name)
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    // ==================== Specifications ====================

    /// Get all specification declarations, in module order.
    pub fn specifications(&self) -> impl Iterator<Item = &Specification> {
        self.modules
            .iter()
            .flat_map(|m| m.specifications.declarations.iter())
    }

    /// Get a specification by identifier.
    pub fn specification(&self, identifier: &str) -> Option<&Specification> {
        self.specifications
            .get(identifier)
            .map(|slot| &self.modules[slot.module].specifications.declarations[slot.index])
    }

    /// Get the module declaring a specification.
    pub fn module_of_specification(&self, identifier: &str) -> Option<&Module> {
        self.specifications
            .get(identifier)
            .map(|slot| &self.modules[slot.module])
    }

    /// Get the number of specifications.
    pub fn specification_count(&self) -> usize {
        self.specifications.len()
    }

    // ==================== Implementations ====================

    /// Get all implementation declarations, in module order.
    pub fn implementations(&self) -> impl Iterator<Item = &Implementation> {
        self.modules
            .iter()
            .flat_map(|m| m.implementations.declarations.iter())
    }

    /// Get an implementation by identifier.
    pub fn implementation(&self, identifier: &str) -> Option<&Implementation> {
        self.implementations
            .get(identifier)
            .map(|slot| &self.modules[slot.module].implementations.declarations[slot.index])
    }

    /// Get the module declaring an implementation.
    pub fn module_of_implementation(&self, identifier: &str) -> Option<&Module> {
        self.implementations
            .get(identifier)
            .map(|slot| &self.modules[slot.module])
    }

    /// Get the number of implementations.
    pub fn implementation_count(&self) -> usize {
        self.implementations.len()
    }

    // ==================== Module-level declarations ====================

    /// Get a module-level message declaration by name.
    pub fn message(&self, name: &str) -> Option<&Message> {
        self.messages
            .get(name)
            .map(|slot| &self.modules[slot.module].messages.declarations[slot.index])
    }

    /// Get a module-level property declaration by name.
    pub fn property(&self, name: &str) -> Option<&Property> {
        self.properties
            .get(name)
            .map(|slot| &self.modules[slot.module].properties.declarations[slot.index])
    }
}
