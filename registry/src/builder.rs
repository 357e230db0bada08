//! ModulesBuilder for constructing an immutable Modules index.

use crate::modules::{Modules, Slot};
use cmv_core::Module;
use std::collections::{HashMap, HashSet};
use thiserror::Error;

/// Errors that can occur while indexing modules.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Duplicate module name: {0}")]
    DuplicateModuleName(String),

    #[error("Duplicate specification identifier: {0}")]
    DuplicateSpecification(String),

    #[error("Duplicate implementation identifier: {0}")]
    DuplicateImplementation(String),
}

/// Result type for registry operations.
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Builder for constructing an immutable Modules index.
#[derive(Debug, Default)]
pub struct ModulesBuilder {
    /// Modules being indexed.
    modules: Vec<Module>,
    /// Module names seen so far.
    module_names: HashSet<String>,
    /// Specification identifier to slot mapping.
    specifications: HashMap<String, Slot>,
    /// Implementation identifier to slot mapping.
    implementations: HashMap<String, Slot>,
    /// Module-level message name to slot mapping.
    messages: HashMap<String, Slot>,
    /// Module-level property name to slot mapping.
    properties: HashMap<String, Slot>,
}

impl ModulesBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a module, checking its identifiers against those already added.
    pub fn add_module(&mut self, module: Module) -> RegistryResult<&mut Self> {
        if self.module_names.contains(&module.name) {
            return Err(RegistryError::DuplicateModuleName(module.name));
        }

        // Check every key before touching the index so a failed add leaves it unchanged.
        {
            let mut seen = HashSet::new();
            for spec in &module.specifications.declarations {
                if self.specifications.contains_key(&spec.identifier)
                    || !seen.insert(spec.identifier.as_str())
                {
                    return Err(RegistryError::DuplicateSpecification(spec.identifier.clone()));
                }
            }
        }
        {
            let mut seen = HashSet::new();
            for implementation in &module.implementations.declarations {
                if self.implementations.contains_key(&implementation.identifier)
                    || !seen.insert(implementation.identifier.as_str())
                {
                    return Err(RegistryError::DuplicateImplementation(
                        implementation.identifier.clone(),
                    ));
                }
            }
        }

        let module_index = self.modules.len();
        let slot = |index| Slot {
            module: module_index,
            index,
        };

        for (index, spec) in module.specifications.declarations.iter().enumerate() {
            self.specifications
                .insert(spec.identifier.clone(), slot(index));
        }
        for (index, implementation) in module.implementations.declarations.iter().enumerate() {
            self.implementations
                .insert(implementation.identifier.clone(), slot(index));
        }
        for (index, message) in module.messages.declarations.iter().enumerate() {
            self.messages.entry(message.name.clone()).or_insert(slot(index));
        }
        for (index, property) in module.properties.declarations.iter().enumerate() {
            self.properties
                .entry(property.name.clone())
                .or_insert(slot(index));
        }

        self.module_names.insert(module.name.clone());
        self.modules.push(module);
        Ok(self)
    }

    /// Add a module, consuming and returning the builder.
    pub fn module(mut self, module: Module) -> RegistryResult<Self> {
        self.add_module(module)?;
        Ok(self)
    }

    /// Build the immutable Modules index.
    pub fn build(self) -> RegistryResult<Modules> {
        Ok(Modules::new(
            self.modules,
            self.specifications,
            self.implementations,
            self.messages,
            self.properties,
        ))
    }
}

impl Modules {
    /// Index a list of modules in one step.
    pub fn from_modules(modules: impl IntoIterator<Item = Module>) -> RegistryResult<Self> {
        let mut builder = ModulesBuilder::new();
        for module in modules {
            builder.add_module(module)?;
        }
        builder.build()
    }
}
