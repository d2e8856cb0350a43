//! GraphQL type algebra for Rust
//!
//! This crate bundles the gqlkit workspace:
//! - Named types and memoized `List`/`NonNull` wrappers
//! - Classification predicates and assertions
//! - Type-reference parsing and a named-type registry
//! - Structured diagnostics
//!
//! # Example
//!
//! ```
//! use gqlkit::TypeRegistry;
//!
//! let registry = TypeRegistry::with_builtin_scalars();
//! let ty = registry.resolve("[Int!]!").unwrap();
//!
//! assert!(ty.is_input_type());
//! assert_eq!(ty.nullable_type().to_string(), "[Int!]");
//! ```

pub use gqlkit_diagnostics as diagnostics;
pub use gqlkit_types as types;

// Convenience re-exports
pub use gqlkit_diagnostics::{Result, TypeSysError};
pub use gqlkit_types::{
    GraphQLType, NamedKind, TypeKind, TypeRef, TypeRegistry, get_named_type, get_nullable_type,
    wrap_with_spec,
};

// CLI module (only available with cli feature)
#[cfg(feature = "cli")]
pub mod cli;
