//! Wrapper construction tests
//!
//! Covers:
//! - Identity memoization of List and NonNull
//! - Order significance and rendering
//! - Non-null legality
//! - Concurrent wrapping
//! - Wrapper lifetime relative to the inner type

use gqlkit_types::*;
use pretty_assertions::assert_eq;
use std::sync::{Arc, Barrier};
use std::thread;

#[test]
fn test_list_returns_same_instance() {
    let user = GraphQLType::object("User");
    let a = GraphQLType::list(&user);
    let b = GraphQLType::list(&user);
    assert!(a.ptr_eq(&b));
}

#[test]
fn test_non_null_returns_same_instance() {
    let user = GraphQLType::object("User");
    let a = GraphQLType::non_null(&user).unwrap();
    let b = GraphQLType::non_null(&user).unwrap();
    assert!(a.ptr_eq(&b));
}

#[test]
fn test_same_name_not_deduplicated() {
    let first = GraphQLType::object("User");
    let second = GraphQLType::object("User");

    let a = GraphQLType::list(&first);
    let b = GraphQLType::list(&second);

    assert_eq!(a.to_string(), b.to_string());
    assert_ne!(a, b);
}

#[test]
fn test_wrapper_order_matters() {
    let x = GraphQLType::scalar("X");
    let list_of_required = GraphQLType::list(&GraphQLType::non_null(&x).unwrap());
    let required_list = GraphQLType::non_null(&GraphQLType::list(&x)).unwrap();

    assert_ne!(list_of_required, required_list);
    assert_eq!(list_of_required.to_string(), "[X!]");
    assert_eq!(required_list.to_string(), "[X]!");
}

#[test]
fn test_double_non_null_is_validation_error() {
    let x = GraphQLType::scalar("X");
    let required = GraphQLType::non_null(&x).unwrap();

    let err = GraphQLType::non_null(&required).unwrap_err();
    assert!(err.is_validation());
    assert_eq!(err.to_string(), "GQL0101: Expected X! to be a GraphQL nullable type.");
}

#[test]
fn test_wrap_with_spec_renders() {
    let x = GraphQLType::scalar("X");
    let cases = [
        ("]", "[X]"),
        ("!", "X!"),
        ("!]", "[X!]"),
        ("]!", "[X]!"),
        ("!]!", "[X!]!"),
        ("]]!", "[[X]]!"),
        ("!]!]!", "[[X!]!]!"),
    ];
    for (spec, rendered) in cases {
        assert_eq!(wrap_with_spec(&x, spec).unwrap().to_string(), rendered, "spec {spec}");
    }
}

#[test]
fn test_wrap_with_spec_shares_cache_with_constructors() {
    let x = GraphQLType::scalar("X");
    let built = GraphQLType::non_null(&GraphQLType::list(&x)).unwrap();
    assert_eq!(wrap_with_spec(&x, "]!").unwrap(), built);
}

#[test]
fn test_concurrent_wrapping_yields_one_instance() {
    const THREADS: usize = 16;

    let user = GraphQLType::object("User");
    let barrier = Arc::new(Barrier::new(THREADS));

    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let user = user.clone();
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                let list = GraphQLType::list(&user);
                let required = GraphQLType::non_null(&list).unwrap();
                (list, required)
            })
        })
        .collect();

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    let (first_list, first_required) = &results[0];
    for (list, required) in &results {
        assert!(list.ptr_eq(first_list));
        assert!(required.ptr_eq(first_required));
    }
}

#[test]
fn test_wrapper_keeps_inner_alive() {
    let list = {
        let user = GraphQLType::object("User");
        GraphQLType::list(&user)
    };
    let inner = list.of_type().unwrap();
    assert_eq!(inner.to_string(), "User");
    assert!(inner.is_object_type());
}

#[test]
fn test_dropped_wrapper_is_rebuilt() {
    let user = GraphQLType::object("User");

    let first = GraphQLType::list(&user);
    let rendered = first.to_string();
    drop(first);

    let second = GraphQLType::list(&user);
    assert_eq!(second.to_string(), rendered);
    assert_eq!(second, GraphQLType::list(&user));
}

#[test]
fn test_deep_spec_builds_renders_and_drops() {
    const DEPTH: usize = 100_000;

    let x = GraphQLType::scalar("X");
    let spec = format!("{}!", "]".repeat(DEPTH));
    let ty = wrap_with_spec(&x, &spec).unwrap();

    assert!(ty.named_type().ptr_eq(&x));
    assert_eq!(ty.to_string().len(), 2 * DEPTH + 2);
    drop(ty);

    // The chain is gone; rebuilding one layer starts a fresh wrapper.
    assert_eq!(GraphQLType::list(&x).to_string(), "[X]");
}

#[test]
fn test_types_are_thread_safe() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<GraphQLType>();
    assert_send_sync::<TypeRegistry>();
}
