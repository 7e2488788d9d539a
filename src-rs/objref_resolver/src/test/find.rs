//! Tests for the `find` entry point.

use objref_error::ObjrefError;
use objref_parser::error::reason::ParserErrorReason;
use objref_reference::{ParsedReference, QualifiedPath, Reference, UnitName};

use crate::{
    Registry, find,
    error::{FindError, LoadError},
    test::{FailingLoader, TestValue},
};

fn registry() -> Registry<TestValue> {
    Registry::from_units([
        (
            "mod",
            TestValue::namespace([
                ("const", TestValue::constant(1)),
                (
                    "nested",
                    TestValue::namespace([("attr", TestValue::constant(2))]),
                ),
            ]),
        ),
        (
            "mod.sub",
            TestValue::namespace([("item", TestValue::constant(3))]),
        ),
    ])
}

mod success_tests {
    use super::*;

    #[test]
    fn test_unit_only_returns_the_unit() {
        let unit = find("mod.sub", &registry(), None).expect("should load the unit");
        assert_eq!(
            unit,
            TestValue::namespace([("item", TestValue::constant(3))])
        );
    }

    #[test]
    fn test_single_segment() {
        let value = find("mod:const", &registry(), None).expect("should resolve the member");
        assert_eq!(value, TestValue::constant(1));
    }

    #[test]
    fn test_multi_segment_walk() {
        let value = find("mod:nested.attr", &registry(), None).expect("should walk the path");
        assert_eq!(value, TestValue::constant(2));
    }

    #[test]
    fn test_dotted_unit_with_member() {
        let value = find("mod.sub:item", &registry(), None).expect("should resolve the member");
        assert_eq!(value, TestValue::constant(3));
    }

    #[test]
    fn test_pre_parsed_reference() {
        let reference = ParsedReference::new(
            UnitName::new("mod"),
            Some(QualifiedPath::new("nested.attr")),
        );

        let value = find(reference, &registry(), None).expect("should resolve the member");
        assert_eq!(value, TestValue::constant(2));
    }

    #[test]
    fn test_resolution_is_repeatable() {
        let registry = registry();
        assert_eq!(
            find("mod:const", &registry, None),
            find("mod:const", &registry, None)
        );
    }
}

mod failure_tests {
    use super::*;

    #[test]
    fn test_unknown_unit_is_a_load_error() {
        let error = find("missing", &registry(), None).expect_err("should fail to load");
        assert_eq!(
            error,
            FindError::Load(LoadError::UnitNotFound {
                unit_name: "missing".to_string(),
            })
        );
    }

    #[test]
    fn test_missing_member_carries_the_reference() {
        let error = find("mod:oops", &registry(), None).expect_err("should fail the lookup");
        assert_eq!(
            error,
            FindError::MemberNotFound {
                reference: Reference::Text("mod:oops".to_string()),
            }
        );
    }

    #[test]
    fn test_walk_into_a_leaf_fails() {
        let error = find("mod:const.attr", &registry(), None).expect_err("should fail the walk");
        assert!(matches!(error, FindError::MemberNotFound { .. }));
    }

    #[test]
    fn test_pre_parsed_reference_in_error() {
        let reference =
            ParsedReference::new(UnitName::new("mod"), Some(QualifiedPath::new("oops")));

        let error =
            find(reference.clone(), &registry(), None).expect_err("should fail the lookup");
        assert_eq!(
            error,
            FindError::MemberNotFound {
                reference: Reference::Parsed(reference),
            }
        );
    }

    #[test]
    fn test_invalid_reference_is_propagated() {
        let error = find("mod:", &registry(), None).expect_err("should fail to parse");

        let FindError::InvalidReference(parse_error) = error else {
            panic!("expected an invalid reference error, got {error:?}");
        };
        assert_eq!(
            parse_error.reason(),
            ParserErrorReason::MissingQualifiedName
        );
        assert_eq!(parse_error.reference(), "mod:");
    }

    #[test]
    fn test_errors_convert_to_reports() {
        let error = find("mod:", &registry(), None).expect_err("should fail to parse");
        let report = ObjrefError::from_error(&error, "mod:");

        assert_eq!(report.reference(), "mod:");
        assert_eq!(report.message(), "missing qualified name after `:`");
        assert_eq!(report.offset(), Some(4));
        assert!(!report.context().is_empty());
    }

    #[test]
    fn test_loader_errors_surface_unchanged() {
        let error =
            find("mod", &FailingLoader::UnitNotFound, None).expect_err("should fail to load");
        assert_eq!(
            error,
            FindError::Load(LoadError::UnitNotFound {
                unit_name: "mod".to_string(),
            })
        );

        let error = find("mod", &FailingLoader::InvalidAnchor, Some("pkg"))
            .expect_err("should fail to load");
        assert_eq!(
            error,
            FindError::Load(LoadError::InvalidAnchor {
                unit_name: "mod".to_string(),
                anchor: Some("pkg".to_string()),
            })
        );
    }
}

mod anchor_tests {
    use super::*;

    #[test]
    fn test_relative_reference_matches_absolute() {
        let registry = registry();

        let relative = find(".sub:item", &registry, Some("mod")).expect("should resolve");
        let absolute = find("mod.sub:item", &registry, None).expect("should resolve");
        assert_eq!(relative, absolute);
    }

    #[test]
    fn test_dots_only_unit_resolves_to_the_anchor() {
        let value = find(".:const", &registry(), Some("mod")).expect("should resolve");
        assert_eq!(value, TestValue::constant(1));
    }

    #[test]
    fn test_relative_reference_without_anchor() {
        let error = find(".sub", &registry(), None).expect_err("should require an anchor");
        assert!(matches!(
            error,
            FindError::Load(LoadError::InvalidAnchor { anchor: None, .. })
        ));
    }
}
