//! Specification multiplicity integration tests.

use cmv_tests::prelude::*;

fn concrete(id: &str) -> Implementation {
    Implementation::new(id).class(format!("acme.{id}"))
}

mod one_implemented_twice {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("one_implemented_twice")
            .module(
                Module::new("m")
                    .specification(Specification::new("logger").class("acme.Logger").one())
                    .implementation(concrete("console").implements("logger"))
                    .implementation(concrete("file").implements("logger")),
            )
            .expect(RuleId::SpecificationImplementationMultiplicity, 2)
            .expect_invalid()
            .check(|e| {
                e.subjects(
                    RuleId::SpecificationImplementationMultiplicity,
                    &["console", "file"],
                )
                .message_matches(
                    RuleId::SpecificationImplementationMultiplicity,
                    "admits one implementation but has 2",
                )
            })
    }

    #[test]
    fn test_each_extra_implementation_is_flagged() {
        scenario().run().unwrap();
    }
}

mod one_across_modules {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("one_across_modules")
            .module(
                Module::new("api")
                    .specification(Specification::new("logger").class("acme.Logger").one()),
            )
            .module(Module::new("impl-a").implementation(concrete("console").implements("logger")))
            .module(Module::new("impl-b").implementation(concrete("file").implements("logger")))
            .expect(RuleId::SpecificationImplementationMultiplicity, 2)
    }

    #[test]
    fn test_implementations_counted_across_modules() {
        scenario().run().unwrap();
    }
}

mod abstract_base_not_counted {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("abstract_base_not_counted")
            .module(
                Module::new("m")
                    .specification(Specification::new("logger").class("acme.Logger").one())
                    .implementation(Implementation::new("base").abstract_().implements("logger"))
                    .implementation(concrete("console").extends("base")),
            )
            .expect_valid()
            .check(|e| e.total(0))
    }

    #[test]
    fn test_only_concrete_implementations_count() {
        scenario().run().unwrap();
    }
}

mod many_with_shared_names {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("many_with_shared_names")
            .module(
                Module::new("m")
                    .specification(Specification::new("store").class("acme.Store").many())
                    .implementation(concrete("pg").implements("store").name("primary"))
                    .implementation(concrete("mem").implements("store"))
                    .implementation(concrete("redis").implements("store").name("cache"))
                    .implementation(concrete("mysql").implements("store").name("primary")),
            )
            .check(|e| {
                e.subjects(
                    RuleId::SpecificationImplementationNameUniqueness,
                    &["pg", "mysql"],
                )
                .none(RuleId::SpecificationImplementationMultiplicity)
                .total(2)
            })
    }

    #[test]
    fn test_name_collisions_flag_every_holder() {
        scenario().run().unwrap();
    }
}

mod duplicate_classes {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("duplicate_classes")
            .module(
                Module::new("m")
                    .specification(Specification::new("s1").class("acme.Shared"))
                    .specification(Specification::new("s2").class("acme.Shared"))
                    .implementation(Implementation::new("i1").class("acme.Impl"))
                    .implementation(Implementation::new("i2").class("acme.Impl")),
            )
            .check(|e| {
                e.subjects(RuleId::SpecificationClassDeclaration, &["s2"])
                    .subjects(RuleId::ImplementationClassDeclaration, &["i2"])
                    .total(2)
            })
    }

    #[test]
    fn test_later_declarer_of_a_class_is_flagged() {
        scenario().run().unwrap();
    }
}
