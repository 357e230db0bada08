//! Dependency integration tests.
//!
//! Resolution against specifications and candidate implementations, scoped
//! specifications, and nested overrides of a candidate's members.

use cmv_tests::prelude::*;

fn concrete(id: &str) -> Implementation {
    Implementation::new(id).class(format!("acme.{id}"))
}

mod resolution {
    use super::*;

    pub fn unknown_specification() -> Scenario {
        Scenario::new("unknown_specification")
            .module(Module::new("m").implementation(concrete("app").dependency(Dependency::new("d", "nope"))))
            .expect(RuleId::ImplementationDependencySpecification, 1)
            .check(|e| e.total(1))
    }

    pub fn mandatory_without_implementation() -> Scenario {
        Scenario::new("mandatory_without_implementation")
            .module(
                Module::new("m")
                    .specification(Specification::new("db").class("acme.Db"))
                    .implementation(concrete("app").dependency(Dependency::new("store", "db"))),
            )
            .expect(RuleId::ImplementationMandatoryDependency, 1)
            .check(|e| e.total(1))
    }

    pub fn optional_without_implementation() -> Scenario {
        Scenario::new("optional_without_implementation")
            .module(
                Module::new("m")
                    .specification(Specification::new("db").class("acme.Db"))
                    .implementation(concrete("app").dependency(Dependency::new("store", "db").optional())),
            )
            .expect_valid()
            .check(|e| e.total(0))
    }

    pub fn unclassed_specification() -> Scenario {
        Scenario::new("unclassed_specification")
            .module(
                Module::new("m")
                    .specification(Specification::new("db"))
                    .implementation(concrete("pg").implements("db"))
                    .implementation(concrete("app").dependency(Dependency::new("store", "db"))),
            )
            .expect(RuleId::ImplementationDependencyClassDeclaration, 1)
            .check(|e| e.total(1))
    }

    #[test]
    fn test_dependency_resolution() {
        unknown_specification().run().unwrap();
        mandatory_without_implementation().run().unwrap();
        optional_without_implementation().run().unwrap();
        unclassed_specification().run().unwrap();
    }
}

mod implementation_names {
    use super::*;

    fn module(wanted: &str) -> Module {
        Module::new("m")
            .specification(Specification::new("db").class("acme.Db").many())
            .implementation(concrete("pg").implements("db").name("primary"))
            .implementation(concrete("mem").implements("db").name("backup"))
            .implementation(
                concrete("app").dependency(Dependency::new("store", "db").implementation_name(wanted)),
            )
    }

    pub fn matching() -> Scenario {
        Scenario::new("matching_implementation_name")
            .module(module("primary"))
            .expect_valid()
    }

    pub fn missing() -> Scenario {
        Scenario::new("missing_implementation_name")
            .module(module("tertiary"))
            .expect(RuleId::ImplementationMandatoryDependency, 1)
            .check(|e| {
                e.message_matches(
                    RuleId::ImplementationMandatoryDependency,
                    "an implementation named 'tertiary'",
                )
            })
    }

    #[test]
    fn test_implementation_name_narrows_candidates() {
        matching().run().unwrap();
        missing().run().unwrap();
    }
}

mod scoped_specification {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("scoped_specification")
            .module(
                Module::new("m")
                    .specification(Specification::new("session").class("acme.Session").scope("request"))
                    .implementation(concrete("http-session").implements("session"))
                    .implementation(
                        concrete("app").dependency(
                            Dependency::new("session", "session")
                                .property(Property::new("ttl").type_name("int").value("60")),
                        ),
                    ),
            )
            .expect(RuleId::ImplementationDependencyPropertiesOverride, 1)
            .expect(RuleId::ImplementationDependencyMessagesOverride, 0)
            .expect(RuleId::ImplementationDependencyDependenciesOverride, 0)
            .check(|e| {
                e.message_matches(
                    RuleId::ImplementationDependencyPropertiesOverride,
                    "'request' scoped specification 'session'",
                )
                .total(1)
            })
    }

    #[test]
    fn test_scoped_specification_owns_its_configuration() {
        scenario().run().unwrap();
    }
}

mod nested_overrides {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("nested_overrides")
            .module(
                Module::new("m")
                    .specification(Specification::new("db").class("acme.Db"))
                    .implementation(
                        concrete("pg")
                            .implements("db")
                            .property(Property::new("port").type_name("int").value("5432").final_())
                            .property(Property::new("pool").type_name("int").value("4")),
                    )
                    .implementation(
                        concrete("app").dependency(
                            Dependency::new("store", "db")
                                .property(Property::new("port").type_name("int").value("6543").overriding())
                                .property(Property::new("pool").type_name("int").value("16").overriding())
                                .property(Property::new("retries").type_name("int").value("3").overriding()),
                        ),
                    ),
            )
            .expect(RuleId::ImplementationDependencyFinalProperty, 1)
            .expect(RuleId::ImplementationDependencyOverrideProperty, 1)
            .check(|e| {
                e.message_matches(RuleId::ImplementationDependencyFinalProperty, "'port'")
                    .message_matches(RuleId::ImplementationDependencyOverrideProperty, "'retries'")
                    .total(2)
            })
    }

    #[test]
    fn test_overrides_checked_against_candidate() {
        scenario().run().unwrap();
    }
}

mod overriding_dependency_shape {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("overriding_dependency_shape")
            .module(
                Module::new("m")
                    .specification(Specification::new("service").class("acme.Service").one())
                    .specification(Specification::new("db").class("acme.Db").one())
                    .specification(Specification::new("cache").class("acme.Cache").many())
                    .implementation(concrete("pg").implements("db"))
                    .implementation(concrete("redis").implements("cache"))
                    .implementation(
                        concrete("backend")
                            .implements("service")
                            .dependency(Dependency::new("store", "db")),
                    )
                    .implementation(
                        concrete("app").dependency(
                            Dependency::new("main", "service")
                                .dependency(Dependency::new("store", "cache").overriding()),
                        ),
                    ),
            )
            .expect(RuleId::ImplementationDependencyMultiplicity, 1)
            .expect(RuleId::ImplementationDependencyScope, 0)
            .check(|e| {
                e.subjects(RuleId::ImplementationDependencyMultiplicity, &["app"])
                    .total(1)
            })
    }

    #[test]
    fn test_override_must_keep_multiplicity() {
        scenario().run().unwrap();
    }
}
