//! CLI command tests
//!
//! Covers:
//! - Schema loading
//! - Inspect output in every format
//! - Wrap and check commands

use gqlkit::cli::check::{self, Position};
use gqlkit::cli::inspect::{InspectConfig, inspect};
use gqlkit::cli::output::OutputFormat;
use gqlkit::cli::schema::load_registry;
use gqlkit::cli::wrap::{WrapConfig, wrap};
use gqlkit::diagnostics::{GQL0005, GQL0103, TypeSysError};
use gqlkit::types::TypeRegistry;
use insta::assert_snapshot;
use pretty_assertions::assert_eq;
use rstest::{fixture, rstest};
use std::io::Write;

const SCHEMA: &str = r#"{
    "types": [
        {"kind": "OBJECT", "name": "User"},
        {"kind": "UNION", "name": "SearchResult"},
        {"kind": "ENUM", "name": "Role"},
        {"kind": "INPUT_OBJECT", "name": "UserFilter"}
    ]
}"#;

#[fixture]
fn registry() -> TypeRegistry {
    colored::control::set_override(false);

    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(SCHEMA.as_bytes()).unwrap();
    load_registry(Some(file.path())).unwrap()
}

fn refs(sources: &[&str]) -> Vec<String> {
    sources.iter().map(|s| s.to_string()).collect()
}

#[rstest]
fn test_inspect_pretty(registry: TypeRegistry) {
    let config = InspectConfig {
        type_refs: refs(&["[User!]!", "Role"]),
        format: OutputFormat::Pretty,
    };
    let out = inspect(&registry, &config).unwrap();
    assert_snapshot!(out, @r"
    [User!]! (NON_NULL)
      named type:    User
      nullable type: [User!]
      categories:    output, wrapping

    Role (ENUM)
      named type:    Role
      nullable type: Role
      categories:    input, output, leaf, nullable, named
    ");
}

#[rstest]
fn test_inspect_json(registry: TypeRegistry) {
    let config = InspectConfig {
        type_refs: refs(&["[UserFilter!]"]),
        format: OutputFormat::Json,
    };
    let out = inspect(&registry, &config).unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();

    let report = &value[0];
    assert_eq!(report["rendered"], "[UserFilter!]");
    assert_eq!(report["kind"], "LIST");
    assert_eq!(report["named_type"], "UserFilter");
    assert_eq!(report["is_input"], true);
    assert_eq!(report["is_output"], false);
    assert_eq!(report["is_nullable"], true);
}

#[rstest]
fn test_inspect_table(registry: TypeRegistry) {
    let config = InspectConfig {
        type_refs: refs(&["SearchResult", "[Role]"]),
        format: OutputFormat::Table,
    };
    let out = inspect(&registry, &config).unwrap();
    assert!(out.contains("SearchResult"));
    assert!(out.contains("composite, abstract"));
    assert!(out.contains("[Role]"));
}

#[rstest]
fn test_inspect_unknown_type(registry: TypeRegistry) {
    let config = InspectConfig {
        type_refs: refs(&["[Usr]"]),
        format: OutputFormat::Pretty,
    };
    let err = inspect(&registry, &config).unwrap_err();
    assert_eq!(err.to_string(), "Failed to resolve `[Usr]`");
    assert_eq!(
        err.root_cause().to_string(),
        "GQL0104: Unknown type \"Usr\"."
    );
}

#[rstest]
fn test_check_rejects_runaway_nesting(registry: TypeRegistry) {
    let deep = format!("{}Int{}", "[".repeat(50_000), "]".repeat(50_000));
    let report = check::check(&registry, Position::Input, &[deep]);
    assert_eq!(report.failures(), 1);
    match &report.outcomes[0].result {
        Err(err) => assert_eq!(err.code(), GQL0005),
        Ok(ty) => panic!("Expected a nesting error, got {ty}"),
    }
}

#[rstest]
fn test_wrap_renders(registry: TypeRegistry) {
    let config = WrapConfig {
        name: "User".to_string(),
        spec: "!]!".to_string(),
    };
    let ty = wrap(&registry, &config).unwrap();
    assert_eq!(ty.to_string(), "[User!]!");
    assert!(ty.ptr_eq(&registry.resolve("[User!]!").unwrap()));
}

#[rstest]
fn test_wrap_rejects_bad_spec(registry: TypeRegistry) {
    let config = WrapConfig {
        name: "User".to_string(),
        spec: "]x".to_string(),
    };
    let err = wrap(&registry, &config).unwrap_err();
    let cause = err.downcast_ref::<TypeSysError>().unwrap();
    assert_eq!(cause.code(), GQL0103);
}

#[rstest]
fn test_wrap_requires_named_type(registry: TypeRegistry) {
    let config = WrapConfig {
        name: "User!".to_string(),
        spec: "]".to_string(),
    };
    let err = wrap(&registry, &config).unwrap_err();
    assert_eq!(err.to_string(), "`User!` is not a named type");
}

#[rstest]
fn test_check_input_position(registry: TypeRegistry) {
    let report = check::check(&registry, Position::Input, &refs(&["[UserFilter!]", "Role!"]));
    assert!(report.is_success());
    assert_snapshot!(report.render(), @r"
    ok [UserFilter!] is a valid input type
    ok Role! is a valid input type
    Success: All 2 type(s) are valid input types
    ");
}

#[rstest]
fn test_check_reports_failures(registry: TypeRegistry) {
    let report = check::check(
        &registry,
        Position::Output,
        &refs(&["[User]", "UserFilter!", "Nope"]),
    );
    assert!(!report.is_success());
    assert_eq!(report.failures(), 2);
    assert_snapshot!(report.render(), @r#"
    ok [User] is a valid output type
    error[GQL0201]: Expected UserFilter! to be a GraphQL output type.
    error[GQL0104]: Unknown type "Nope".
    Check failed: 2 of 3 type(s) rejected
    "#);
}
