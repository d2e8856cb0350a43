//! List and NonNull constructors

use crate::cache::WrapperKind;
use crate::classify::describe_value;
use crate::ty::{GraphQLType, ListType, NonNullType, TypeKind};
use gqlkit_diagnostics::{GQL0100, GQL0101, GQL0102, GQL0103, Result, TypeSysError};
use std::any::Any;

/// Marker for "wrap in a list" in a wrapping spec
pub const LIST_MARKER: char = ']';
/// Marker for "wrap in non-null" in a wrapping spec
pub const NON_NULL_MARKER: char = '!';

impl GraphQLType {
    /// `[inner]`. Any type may be listed.
    pub fn list(inner: &GraphQLType) -> GraphQLType {
        inner.node().wrappers.get_or_create(WrapperKind::List, || {
            GraphQLType::alloc(TypeKind::List(ListType::new(inner.clone())))
        })
    }

    /// `inner!`. Fails if `inner` is already non-null.
    pub fn non_null(inner: &GraphQLType) -> Result<GraphQLType> {
        if !inner.is_nullable_type() {
            return Err(TypeSysError::validation(
                GQL0101,
                format!("Expected {inner} to be a GraphQL nullable type."),
            ));
        }
        Ok(inner.node().wrappers.get_or_create(WrapperKind::NonNull, || {
            GraphQLType::alloc(TypeKind::NonNull(NonNullType::new(inner.clone())))
        }))
    }

    /// Wrap in the given kind
    pub fn wrap(inner: &GraphQLType, kind: WrapperKind) -> Result<GraphQLType> {
        match kind {
            WrapperKind::List => Ok(Self::list(inner)),
            WrapperKind::NonNull => Self::non_null(inner),
        }
    }
}

/// [`GraphQLType::list`] for type-erased input
pub fn list_of_any(value: &dyn Any) -> Result<GraphQLType> {
    Ok(GraphQLType::list(expect_type(value)?))
}

/// [`GraphQLType::non_null`] for type-erased input
pub fn non_null_of_any(value: &dyn Any) -> Result<GraphQLType> {
    GraphQLType::non_null(expect_type(value)?)
}

fn expect_type(value: &dyn Any) -> Result<&GraphQLType> {
    value.downcast_ref::<GraphQLType>().ok_or_else(|| {
        TypeSysError::validation(
            GQL0100,
            format!("Expected {} to be a GraphQL type.", describe_value(value)),
        )
    })
}

/// Parse a wrapping spec into wrapper kinds, innermost first
pub fn parse_wrapping_spec(spec: &str) -> Result<Vec<WrapperKind>> {
    if spec.is_empty() {
        return Err(TypeSysError::validation(GQL0102, "Wrapping spec must not be empty."));
    }
    spec.chars()
        .map(|marker| match marker {
            LIST_MARKER => Ok(WrapperKind::List),
            NON_NULL_MARKER => Ok(WrapperKind::NonNull),
            other => Err(TypeSysError::validation(
                GQL0103,
                format!("Invalid wrapping marker '{other}' in spec \"{spec}\"."),
            )),
        })
        .collect()
}

/// Apply `spec` to `base` left to right: `]` wraps in a list, `!` in non-null.
///
/// `wrap_with_spec(X, "!]")` is `[X!]`.
pub fn wrap_with_spec(base: &GraphQLType, spec: &str) -> Result<GraphQLType> {
    parse_wrapping_spec(spec)?
        .into_iter()
        .try_fold(base.clone(), |ty, kind| GraphQLType::wrap(&ty, kind))
}
