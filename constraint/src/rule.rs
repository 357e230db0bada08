//! The rule-identifier vocabulary.
//!
//! Every diagnostic carries one of these identifiers. Downstream tooling keys
//! off the identifier string, never off the message text, so the strings are
//! stable.

use crate::error::ConstraintError;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

macro_rules! rules {
    ($($variant:ident => $id:literal,)+) => {
        /// Identifier of a validation rule.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum RuleId {
            $($variant,)+
        }

        impl RuleId {
            /// Every rule, in declaration order.
            pub const ALL: &'static [RuleId] = &[$(RuleId::$variant,)+];

            /// The stable identifier string.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(RuleId::$variant => $id,)+
                }
            }
        }

        impl FromStr for RuleId {
            type Err = ConstraintError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($id => Ok(RuleId::$variant),)+
                    _ => Err(ConstraintError::unknown_rule(s)),
                }
            }
        }
    };
}

rules! {
    // Module level
    ModuleDependencies => "MODULE_DEPENDENCIES_CONSTRAINT",
    ModuleMessageReference => "MODULE_MESSAGE_REFERENCE_CONSTRAINT",
    ModulePropertyReference => "MODULE_PROPERTY_REFERENCE_CONSTRAINT",
    ModuleImplementationReference => "MODULE_IMPLEMENTATION_REFERENCE_CONSTRAINT",
    ModuleSpecificationReference => "MODULE_SPECIFICATION_REFERENCE_CONSTRAINT",
    ModuleFinalMessageDeclaration => "MODULE_FINAL_MESSAGE_DECLARATION_CONSTRAINT",
    ModuleOverrideMessageDeclaration => "MODULE_OVERRIDE_MESSAGE_DECLARATION_CONSTRAINT",
    ModuleFinalPropertyDeclaration => "MODULE_FINAL_PROPERTY_DECLARATION_CONSTRAINT",
    ModuleOverridePropertyDeclaration => "MODULE_OVERRIDE_PROPERTY_DECLARATION_CONSTRAINT",
    ModuleMessageTemplate => "MODULE_MESSAGE_TEMPLATE_CONSTRAINT",
    ModulePropertyType => "MODULE_PROPERTY_TYPE_CONSTRAINT",
    ModulePropertyValue => "MODULE_PROPERTY_VALUE_CONSTRAINT",

    // Specification level
    SpecificationClassDeclaration => "SPECIFICATION_CLASS_DECLARATION_CONSTRAINT",
    SpecificationImplementationMultiplicity => "SPECIFICATION_IMPLEMENTATION_MULTIPLICITY_CONSTRAINT",
    SpecificationImplementationNameUniqueness => "SPECIFICATION_IMPLEMENTATION_NAME_UNIQUENESS_CONSTRAINT",
    SpecificationPropertyReferenceDeclaration => "SPECIFICATION_PROPERTY_REFERENCE_DECLARATION_CONSTRAINT",
    SpecificationPropertyType => "SPECIFICATION_PROPERTY_TYPE_CONSTRAINT",
    SpecificationPropertyValue => "SPECIFICATION_PROPERTY_VALUE_CONSTRAINT",

    // Implementation level
    ImplementationInheritanceCycle => "IMPLEMENTATION_INHERITANCE_CYCLE_CONSTRAINT",
    ImplementationClass => "IMPLEMENTATION_CLASS_CONSTRAINT",
    ImplementationClassDeclaration => "IMPLEMENTATION_CLASS_DECLARATION_CONSTRAINT",
    ImplementationAbstractLocation => "IMPLEMENTATION_ABSTRACT_LOCATION_CONSTRAINT",
    ImplementationDependencyOverride => "IMPLEMENTATION_DEPENDENCY_OVERRIDE_CONSTRAINT",
    ImplementationDependencyInheritance => "IMPLEMENTATION_DEPENDENCY_INHERITANCE_CONSTRAINT",
    ImplementationMessageOverride => "IMPLEMENTATION_MESSAGE_OVERRIDE_CONSTRAINT",
    ImplementationMessageInheritance => "IMPLEMENTATION_MESSAGE_INHERITANCE_CONSTRAINT",
    ImplementationPropertyOverride => "IMPLEMENTATION_PROPERTY_OVERRIDE_CONSTRAINT",
    ImplementationPropertyInheritance => "IMPLEMENTATION_PROPERTY_INHERITANCE_CONSTRAINT",
    ImplementationSpecificationOverride => "IMPLEMENTATION_SPECIFICATION_OVERRIDE_CONSTRAINT",
    ImplementationSpecificationInheritance => "IMPLEMENTATION_SPECIFICATION_INHERITANCE_CONSTRAINT",
    ImplementationImplementationOverride => "IMPLEMENTATION_IMPLEMENTATION_OVERRIDE_CONSTRAINT",
    ImplementationImplementationInheritance => "IMPLEMENTATION_IMPLEMENTATION_INHERITANCE_CONSTRAINT",
    ImplementationImplementationDeclaration => "IMPLEMENTATION_IMPLEMENTATION_DECLARATION_CONSTRAINT",
    ImplementationSpecificationDeclaration => "IMPLEMENTATION_SPECIFICATION_DECLARATION_CONSTRAINT",
    ImplementationDependencyMultipleInheritance => "IMPLEMENTATION_DEPENDENCY_MULTIPLE_INHERITANCE_CONSTRAINT",
    ImplementationMessageMultipleInheritance => "IMPLEMENTATION_MESSAGE_MULTIPLE_INHERITANCE_CONSTRAINT",
    ImplementationPropertyMultipleInheritance => "IMPLEMENTATION_PROPERTY_MULTIPLE_INHERITANCE_CONSTRAINT",
    ImplementationSpecificationMultipleInheritance => "IMPLEMENTATION_SPECIFICATION_MULTIPLE_INHERITANCE_CONSTRAINT",
    ImplementationInheritanceCompatibility => "IMPLEMENTATION_INHERITANCE_COMPATIBILITY_CONSTRAINT",
    ImplementationInheritanceVersioning => "IMPLEMENTATION_INHERITANCE_VERSIONING_CONSTRAINT",
    ImplementationSpecificationCompatibility => "IMPLEMENTATION_SPECIFICATION_COMPATIBILITY_CONSTRAINT",
    ImplementationSpecificationVersioning => "IMPLEMENTATION_SPECIFICATION_VERSIONING_CONSTRAINT",
    ImplementationImplementationReferenceDeclaration => "IMPLEMENTATION_IMPLEMENTATION_REFERENCE_DECLARATION_CONSTRAINT",
    ImplementationSpecificationReferenceDeclaration => "IMPLEMENTATION_SPECIFICATION_REFERENCE_DECLARATION_CONSTRAINT",
    ImplementationMessageReferenceDeclaration => "IMPLEMENTATION_MESSAGE_REFERENCE_DECLARATION_CONSTRAINT",
    ImplementationPropertyReferenceDeclaration => "IMPLEMENTATION_PROPERTY_REFERENCE_DECLARATION_CONSTRAINT",
    ImplementationMessageTemplate => "IMPLEMENTATION_MESSAGE_TEMPLATE_CONSTRAINT",
    ImplementationPropertyType => "IMPLEMENTATION_PROPERTY_TYPE_CONSTRAINT",
    ImplementationPropertyValue => "IMPLEMENTATION_PROPERTY_VALUE_CONSTRAINT",

    // Dependency level
    ImplementationDependencySpecification => "IMPLEMENTATION_DEPENDENCY_SPECIFICATION_CONSTRAINT",
    ImplementationMandatoryDependency => "IMPLEMENTATION_MANDATORY_DEPENDENCY_CONSTRAINT",
    ImplementationDependencyClassDeclaration => "IMPLEMENTATION_DEPENDENCY_CLASS_DECLARATION_CONSTRAINT",
    ImplementationDependencyCompatibility => "IMPLEMENTATION_DEPENDENCY_COMPATIBILITY_CONSTRAINT",
    ImplementationDependencyVersioning => "IMPLEMENTATION_DEPENDENCY_VERSIONING_CONSTRAINT",
    ImplementationDependencyDependenciesOverride => "IMPLEMENTATION_DEPENDENCY_DEPENDENCIES_OVERRIDE_CONSTRAINT",
    ImplementationDependencyMessagesOverride => "IMPLEMENTATION_DEPENDENCY_MESSAGES_OVERRIDE_CONSTRAINT",
    ImplementationDependencyPropertiesOverride => "IMPLEMENTATION_DEPENDENCY_PROPERTIES_OVERRIDE_CONSTRAINT",
    ImplementationDependencyMessageReferenceDeclaration => "IMPLEMENTATION_DEPENDENCY_MESSAGE_REFERENCE_DECLARATION_CONSTRAINT",
    ImplementationDependencyPropertyReferenceDeclaration => "IMPLEMENTATION_DEPENDENCY_PROPERTY_REFERENCE_DECLARATION_CONSTRAINT",
    ImplementationDependencyOverrideDependency => "IMPLEMENTATION_DEPENDENCY_OVERRIDE_DEPENDENCY_CONSTRAINT",
    ImplementationDependencyOverrideMessage => "IMPLEMENTATION_DEPENDENCY_OVERRIDE_MESSAGE_CONSTRAINT",
    ImplementationDependencyOverrideProperty => "IMPLEMENTATION_DEPENDENCY_OVERRIDE_PROPERTY_CONSTRAINT",
    ImplementationDependencyFinalDependency => "IMPLEMENTATION_DEPENDENCY_FINAL_DEPENDENCY_CONSTRAINT",
    ImplementationDependencyFinalMessage => "IMPLEMENTATION_DEPENDENCY_FINAL_MESSAGE_CONSTRAINT",
    ImplementationDependencyFinalProperty => "IMPLEMENTATION_DEPENDENCY_FINAL_PROPERTY_CONSTRAINT",
    ImplementationDependencyMultiplicity => "IMPLEMENTATION_DEPENDENCY_MULTIPLICITY_CONSTRAINT",
    ImplementationDependencyScope => "IMPLEMENTATION_DEPENDENCY_SCOPE_CONSTRAINT",
    ImplementationDependencyImplementationName => "IMPLEMENTATION_DEPENDENCY_IMPLEMENTATION_NAME_CONSTRAINT",
    ImplementationDependencyMessageTemplate => "IMPLEMENTATION_DEPENDENCY_MESSAGE_TEMPLATE_CONSTRAINT",
    ImplementationDependencyPropertyType => "IMPLEMENTATION_DEPENDENCY_PROPERTY_TYPE_CONSTRAINT",
    ImplementationDependencyPropertyValue => "IMPLEMENTATION_DEPENDENCY_PROPERTY_VALUE_CONSTRAINT",
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for RuleId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
