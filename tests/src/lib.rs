//! CMV Integration Test Framework
//!
//! Provides a fluent API for writing scenario tests against the validator.
//!
//! A scenario is a set of modules, an optional validator configuration and
//! the expectations the resulting report must meet. Running the scenario
//! indexes the modules, validates them and checks every expectation.
//!
//! # Example
//!
//! ```ignore
//! use cmv_tests::prelude::*;
//!
//! pub fn scenario() -> Scenario {
//!     Scenario::new("self_parent")
//!         .module(
//!             Module::new("m")
//!                 .implementation(Implementation::new("a").class("acme.A").extends("a")),
//!         )
//!         .expect(RuleId::ImplementationInheritanceCycle, 1)
//!         .expect_invalid()
//! }
//!
//! #[test]
//! fn test() {
//!     scenario().run().unwrap();
//! }
//! ```

mod assertion;
mod error;

pub use assertion::{Expectation, ExpectationBuilder};
pub use error::{ScenarioError, ScenarioResult};
pub use scenario::Scenario;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::assertion::{Expectation, ExpectationBuilder};
    pub use crate::error::{ScenarioError, ScenarioResult};
    pub use crate::scenario::Scenario;
    pub use cmv_constraint::{RuleId, Severity, ValidationReport, ValidatorConfig};
    pub use cmv_core::{
        Dependency, Implementation, ImplementationReference, Message, MessageReference, Module,
        Property, PropertyReference, Specification, SpecificationReference,
    };
    pub use cmv_registry::Modules;
}
