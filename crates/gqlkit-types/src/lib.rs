//! GraphQL type algebra
//!
//! This crate defines the closed set of GraphQL type shapes and the rules
//! validators, executors and printers rely on:
//! - Named types (Scalar, Object, Interface, Union, Enum, InputObject)
//! - `List` and `NonNull` wrappers, memoized per inner type instance
//! - Predicates and assertions for every variant and derived category
//! - Unwrap helpers (`get_nullable_type`, `get_named_type`)
//! - Type references (`[User!]!`) and a registry that resolves them
//!
//! # Example
//!
//! ```
//! use gqlkit_types::{GraphQLType, wrap_with_spec};
//!
//! let user = GraphQLType::object("User");
//! let ty = wrap_with_spec(&user, "!]").unwrap();
//!
//! assert_eq!(ty.to_string(), "[User!]");
//! assert!(ty.is_list_type());
//! assert_eq!(ty.named_type(), &user);
//! ```

mod cache;
pub mod classify;
pub mod named;
pub mod registry;
mod ty;
pub mod type_ref;
mod unwrap;
pub mod wrap;

pub use cache::WrapperKind;
pub use classify::{
    AbstractType, Classification, CompositeType, LeafType, NamedTypeRef, WrappingType,
    assert_type, is_type,
};
pub use named::{
    EnumType, InputObjectType, InterfaceType, NamedKind, ObjectType, ScalarType, UnionType,
};
pub use registry::{BUILTIN_SCALARS, SchemaConfig, TypeDefinition, TypeRegistry};
pub use ty::{GraphQLType, ListType, NonNullType, TypeKind};
pub use type_ref::TypeRef;
pub use unwrap::{get_named_type, get_nullable_type};
pub use wrap::{list_of_any, non_null_of_any, parse_wrapping_spec, wrap_with_spec};

pub use gqlkit_diagnostics::{Result, TypeSysError};
