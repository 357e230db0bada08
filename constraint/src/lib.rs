//! CMV Constraint
//!
//! Validate a component model against the fixed rule set.
//!
//! Responsibilities:
//! - Apply module, specification, implementation and dependency rules
//! - Resolve inheritance through the registry and compare versions
//! - Collect every violation into a `ValidationReport` keyed by `RuleId`
//! - Never abort a pass: data problems are report entries, not errors

mod checker;
mod coerce;
mod config;
mod error;
mod report;
mod rule;
mod template;

pub use checker::{validate, ModelValidator};
pub use coerce::{CoercionError, DefaultValueCoercer, ValueCoercer};
pub use config::ValidatorConfig;
pub use error::{ConstraintError, ConstraintResult};
pub use report::{Detail, Severity, ValidationReport};
pub use rule::RuleId;
pub use template::{check_text, parse_template, validate_language, TemplateError};
