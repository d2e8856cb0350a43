//! Unwrap helpers

use crate::ty::{GraphQLType, TypeKind};

impl GraphQLType {
    /// Strip one NonNull layer, if present
    pub fn nullable_type(&self) -> &GraphQLType {
        match self.kind() {
            TypeKind::NonNull(non_null) => non_null.of_type(),
            _ => self,
        }
    }

    /// Strip every List and NonNull layer
    pub fn named_type(&self) -> &GraphQLType {
        let mut ty = self;
        while let Some(inner) = ty.of_type() {
            ty = inner;
        }
        ty
    }
}

/// `None` stays `None`; a NonNull yields its inner type; anything else is returned as is
pub fn get_nullable_type(ty: Option<&GraphQLType>) -> Option<&GraphQLType> {
    ty.map(GraphQLType::nullable_type)
}

/// `None` stays `None`; otherwise the named type at the bottom of all wrappers
pub fn get_named_type(ty: Option<&GraphQLType>) -> Option<&GraphQLType> {
    ty.map(GraphQLType::named_type)
}
