//! Module-level rules.
//!
//! References and dependencies are only legal nested inside implementations,
//! and module-level messages and properties carry no inheritance modifiers.

use super::{Checker, Owner};
use crate::rule::RuleId;
use cmv_core::{Module, Subject};

impl<'m> Checker<'m> {
    pub(super) fn check_module(&mut self, module: &'m Module) {
        let subject = Subject::module(&module.name);

        for dependency in &module.dependencies {
            self.report(
                RuleId::ModuleDependencies,
                &subject,
                format!("{subject}: dependency '{}' is not allowed at module level", dependency.name),
            );
        }
        for reference in &module.messages.references {
            self.report(
                RuleId::ModuleMessageReference,
                &subject,
                format!("{subject}: message reference '{}' is not allowed at module level", reference.name),
            );
        }
        for reference in &module.properties.references {
            self.report(
                RuleId::ModulePropertyReference,
                &subject,
                format!("{subject}: property reference '{}' is not allowed at module level", reference.name),
            );
        }
        for reference in &module.implementations.references {
            self.report(
                RuleId::ModuleImplementationReference,
                &subject,
                format!(
                    "{subject}: implementation reference '{}' is not allowed at module level",
                    reference.identifier
                ),
            );
        }
        for reference in &module.specifications.references {
            self.report(
                RuleId::ModuleSpecificationReference,
                &subject,
                format!(
                    "{subject}: specification reference '{}' is not allowed at module level",
                    reference.identifier
                ),
            );
        }

        for message in &module.messages.declarations {
            if message.is_final {
                self.report(
                    RuleId::ModuleFinalMessageDeclaration,
                    &subject,
                    format!("{subject}: message '{}' cannot be final at module level", message.name),
                );
            }
            if message.is_override {
                self.report(
                    RuleId::ModuleOverrideMessageDeclaration,
                    &subject,
                    format!("{subject}: message '{}' cannot override at module level", message.name),
                );
            }
        }
        for property in &module.properties.declarations {
            if property.is_final {
                self.report(
                    RuleId::ModuleFinalPropertyDeclaration,
                    &subject,
                    format!("{subject}: property '{}' cannot be final at module level", property.name),
                );
            }
            if property.is_override {
                self.report(
                    RuleId::ModuleOverridePropertyDeclaration,
                    &subject,
                    format!("{subject}: property '{}' cannot override at module level", property.name),
                );
            }
        }

        self.check_messages(RuleId::ModuleMessageTemplate, &subject, &module.messages.declarations);
        self.check_properties(Owner::Module, &subject, &module.properties.declarations);
    }
}
