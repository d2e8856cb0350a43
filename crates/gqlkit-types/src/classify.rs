//! Type classification
//!
//! Predicates come in two groups. Base-variant predicates compare the top-level
//! discriminant and nothing else. Derived categories are computed from the
//! structure of the type on every call; nothing is cached on the node.
//!
//! Every predicate has an `assert_*` twin that narrows the type to the matching
//! variant data (or a borrowed view enum for multi-variant categories) and fails
//! with an assertion error naming the rejected type otherwise.

use crate::cache::WrapperKind;
use crate::named::{
    EnumType, InputObjectType, InterfaceType, NamedKind, ObjectType, ScalarType, UnionType,
};
use crate::ty::{GraphQLType, ListType, NonNullType, TypeKind};
use gqlkit_diagnostics::{GQL0200, GQL0201, GQL0202, Result, TypeSysError};
use serde::{Deserialize, Serialize};
use std::any::Any;

// === Views ===

/// A type narrowed to one of the six named variants
#[derive(Debug, Clone, Copy)]
pub enum NamedTypeRef<'a> {
    Scalar(&'a ScalarType),
    Object(&'a ObjectType),
    Interface(&'a InterfaceType),
    Union(&'a UnionType),
    Enum(&'a EnumType),
    InputObject(&'a InputObjectType),
}

impl<'a> NamedTypeRef<'a> {
    pub fn name(&self) -> &'a str {
        match self {
            Self::Scalar(t) => t.name(),
            Self::Object(t) => t.name(),
            Self::Interface(t) => t.name(),
            Self::Union(t) => t.name(),
            Self::Enum(t) => t.name(),
            Self::InputObject(t) => t.name(),
        }
    }

    pub fn kind(&self) -> NamedKind {
        match self {
            Self::Scalar(_) => NamedKind::Scalar,
            Self::Object(_) => NamedKind::Object,
            Self::Interface(_) => NamedKind::Interface,
            Self::Union(_) => NamedKind::Union,
            Self::Enum(_) => NamedKind::Enum,
            Self::InputObject(_) => NamedKind::InputObject,
        }
    }
}

/// Scalar or Enum
#[derive(Debug, Clone, Copy)]
pub enum LeafType<'a> {
    Scalar(&'a ScalarType),
    Enum(&'a EnumType),
}

impl<'a> LeafType<'a> {
    pub fn name(&self) -> &'a str {
        match self {
            Self::Scalar(t) => t.name(),
            Self::Enum(t) => t.name(),
        }
    }
}

/// Object, Interface or Union
#[derive(Debug, Clone, Copy)]
pub enum CompositeType<'a> {
    Object(&'a ObjectType),
    Interface(&'a InterfaceType),
    Union(&'a UnionType),
}

impl<'a> CompositeType<'a> {
    pub fn name(&self) -> &'a str {
        match self {
            Self::Object(t) => t.name(),
            Self::Interface(t) => t.name(),
            Self::Union(t) => t.name(),
        }
    }
}

/// Interface or Union
#[derive(Debug, Clone, Copy)]
pub enum AbstractType<'a> {
    Interface(&'a InterfaceType),
    Union(&'a UnionType),
}

impl<'a> AbstractType<'a> {
    pub fn name(&self) -> &'a str {
        match self {
            Self::Interface(t) => t.name(),
            Self::Union(t) => t.name(),
        }
    }
}

/// List or NonNull
#[derive(Debug, Clone, Copy)]
pub enum WrappingType<'a> {
    List(&'a ListType),
    NonNull(&'a NonNullType),
}

impl<'a> WrappingType<'a> {
    pub fn kind(&self) -> WrapperKind {
        match self {
            Self::List(_) => WrapperKind::List,
            Self::NonNull(_) => WrapperKind::NonNull,
        }
    }

    pub fn of_type(&self) -> &'a GraphQLType {
        match self {
            Self::List(t) => t.of_type(),
            Self::NonNull(t) => t.of_type(),
        }
    }
}

// === Predicates ===

impl GraphQLType {
    pub fn is_scalar_type(&self) -> bool {
        matches!(self.kind(), TypeKind::Scalar(_))
    }

    pub fn is_object_type(&self) -> bool {
        matches!(self.kind(), TypeKind::Object(_))
    }

    pub fn is_interface_type(&self) -> bool {
        matches!(self.kind(), TypeKind::Interface(_))
    }

    pub fn is_union_type(&self) -> bool {
        matches!(self.kind(), TypeKind::Union(_))
    }

    pub fn is_enum_type(&self) -> bool {
        matches!(self.kind(), TypeKind::Enum(_))
    }

    pub fn is_input_object_type(&self) -> bool {
        matches!(self.kind(), TypeKind::InputObject(_))
    }

    pub fn is_list_type(&self) -> bool {
        matches!(self.kind(), TypeKind::List(_))
    }

    pub fn is_non_null_type(&self) -> bool {
        matches!(self.kind(), TypeKind::NonNull(_))
    }

    /// Scalar, Enum or InputObject, possibly behind any number of wrappers
    pub fn is_input_type(&self) -> bool {
        // A wrapper is input iff its inner type is, so only the named base decides.
        matches!(
            self.named_type().kind(),
            TypeKind::Scalar(_) | TypeKind::Enum(_) | TypeKind::InputObject(_)
        )
    }

    /// Scalar, Object, Interface, Union or Enum, possibly behind any number of wrappers
    pub fn is_output_type(&self) -> bool {
        matches!(
            self.named_type().kind(),
            TypeKind::Scalar(_)
                | TypeKind::Object(_)
                | TypeKind::Interface(_)
                | TypeKind::Union(_)
                | TypeKind::Enum(_)
        )
    }

    pub fn is_leaf_type(&self) -> bool {
        matches!(self.kind(), TypeKind::Scalar(_) | TypeKind::Enum(_))
    }

    pub fn is_composite_type(&self) -> bool {
        matches!(
            self.kind(),
            TypeKind::Object(_) | TypeKind::Interface(_) | TypeKind::Union(_)
        )
    }

    pub fn is_abstract_type(&self) -> bool {
        matches!(self.kind(), TypeKind::Interface(_) | TypeKind::Union(_))
    }

    pub fn is_wrapping_type(&self) -> bool {
        matches!(self.kind(), TypeKind::List(_) | TypeKind::NonNull(_))
    }

    pub fn is_nullable_type(&self) -> bool {
        !self.is_non_null_type()
    }

    pub fn is_named_type(&self) -> bool {
        !self.is_wrapping_type()
    }

    // === Assertions ===

    fn not_variant(&self, variant: &str) -> TypeSysError {
        TypeSysError::assertion(
            GQL0200,
            format!("Expected {self} to be a GraphQL {variant} type."),
            self.to_string(),
        )
    }

    fn not_category(&self, category: &str) -> TypeSysError {
        TypeSysError::assertion(
            GQL0201,
            format!("Expected {self} to be a GraphQL {category} type."),
            self.to_string(),
        )
    }

    pub fn assert_scalar_type(&self) -> Result<&ScalarType> {
        match self.kind() {
            TypeKind::Scalar(t) => Ok(t),
            _ => Err(self.not_variant("Scalar")),
        }
    }

    pub fn assert_object_type(&self) -> Result<&ObjectType> {
        match self.kind() {
            TypeKind::Object(t) => Ok(t),
            _ => Err(self.not_variant("Object")),
        }
    }

    pub fn assert_interface_type(&self) -> Result<&InterfaceType> {
        match self.kind() {
            TypeKind::Interface(t) => Ok(t),
            _ => Err(self.not_variant("Interface")),
        }
    }

    pub fn assert_union_type(&self) -> Result<&UnionType> {
        match self.kind() {
            TypeKind::Union(t) => Ok(t),
            _ => Err(self.not_variant("Union")),
        }
    }

    pub fn assert_enum_type(&self) -> Result<&EnumType> {
        match self.kind() {
            TypeKind::Enum(t) => Ok(t),
            _ => Err(self.not_variant("Enum")),
        }
    }

    pub fn assert_input_object_type(&self) -> Result<&InputObjectType> {
        match self.kind() {
            TypeKind::InputObject(t) => Ok(t),
            _ => Err(self.not_variant("Input Object")),
        }
    }

    pub fn assert_list_type(&self) -> Result<&ListType> {
        match self.kind() {
            TypeKind::List(t) => Ok(t),
            _ => Err(self.not_variant("List")),
        }
    }

    pub fn assert_non_null_type(&self) -> Result<&NonNullType> {
        match self.kind() {
            TypeKind::NonNull(t) => Ok(t),
            _ => Err(self.not_variant("Non-Null")),
        }
    }

    pub fn assert_input_type(&self) -> Result<&GraphQLType> {
        if self.is_input_type() {
            Ok(self)
        } else {
            Err(self.not_category("input"))
        }
    }

    pub fn assert_output_type(&self) -> Result<&GraphQLType> {
        if self.is_output_type() {
            Ok(self)
        } else {
            Err(self.not_category("output"))
        }
    }

    pub fn assert_leaf_type(&self) -> Result<LeafType<'_>> {
        match self.kind() {
            TypeKind::Scalar(t) => Ok(LeafType::Scalar(t)),
            TypeKind::Enum(t) => Ok(LeafType::Enum(t)),
            _ => Err(self.not_category("leaf")),
        }
    }

    pub fn assert_composite_type(&self) -> Result<CompositeType<'_>> {
        match self.kind() {
            TypeKind::Object(t) => Ok(CompositeType::Object(t)),
            TypeKind::Interface(t) => Ok(CompositeType::Interface(t)),
            TypeKind::Union(t) => Ok(CompositeType::Union(t)),
            _ => Err(self.not_category("composite")),
        }
    }

    pub fn assert_abstract_type(&self) -> Result<AbstractType<'_>> {
        match self.kind() {
            TypeKind::Interface(t) => Ok(AbstractType::Interface(t)),
            TypeKind::Union(t) => Ok(AbstractType::Union(t)),
            _ => Err(self.not_category("abstract")),
        }
    }

    pub fn assert_wrapping_type(&self) -> Result<WrappingType<'_>> {
        match self.kind() {
            TypeKind::List(t) => Ok(WrappingType::List(t)),
            TypeKind::NonNull(t) => Ok(WrappingType::NonNull(t)),
            _ => Err(self.not_category("wrapping")),
        }
    }

    pub fn assert_nullable_type(&self) -> Result<&GraphQLType> {
        if self.is_nullable_type() {
            Ok(self)
        } else {
            Err(self.not_category("nullable"))
        }
    }

    pub fn assert_named_type(&self) -> Result<NamedTypeRef<'_>> {
        match self.kind() {
            TypeKind::Scalar(t) => Ok(NamedTypeRef::Scalar(t)),
            TypeKind::Object(t) => Ok(NamedTypeRef::Object(t)),
            TypeKind::Interface(t) => Ok(NamedTypeRef::Interface(t)),
            TypeKind::Union(t) => Ok(NamedTypeRef::Union(t)),
            TypeKind::Enum(t) => Ok(NamedTypeRef::Enum(t)),
            TypeKind::InputObject(t) => Ok(NamedTypeRef::InputObject(t)),
            TypeKind::List(_) | TypeKind::NonNull(_) => Err(self.not_category("named")),
        }
    }

    /// Full classification report
    pub fn classify(&self) -> Classification {
        Classification {
            rendered: self.to_string(),
            kind: self.kind().as_str().to_string(),
            named_type: self.named_type().to_string(),
            nullable_type: self.nullable_type().to_string(),
            is_input: self.is_input_type(),
            is_output: self.is_output_type(),
            is_leaf: self.is_leaf_type(),
            is_composite: self.is_composite_type(),
            is_abstract: self.is_abstract_type(),
            is_wrapping: self.is_wrapping_type(),
            is_nullable: self.is_nullable_type(),
            is_named: self.is_named_type(),
        }
    }
}

// === Membership ===

/// Whether `value` is a member of the type algebra
pub fn is_type(value: &dyn Any) -> bool {
    value.is::<GraphQLType>()
}

/// Narrow a type-erased value to a [`GraphQLType`]
pub fn assert_type(value: &dyn Any) -> Result<&GraphQLType> {
    value.downcast_ref::<GraphQLType>().ok_or_else(|| {
        let rendered = describe_value(value);
        TypeSysError::assertion(
            GQL0202,
            format!("Expected {rendered} to be a GraphQL type."),
            rendered,
        )
    })
}

/// Best-effort rendering of a type-erased value for error messages
pub(crate) fn describe_value(value: &dyn Any) -> String {
    macro_rules! display_as {
        ($($ty:ty),+ $(,)?) => {
            $(
                if let Some(v) = value.downcast_ref::<$ty>() {
                    return v.to_string();
                }
            )+
        };
    }

    if let Some(s) = value.downcast_ref::<String>() {
        return format!("\"{s}\"");
    }
    if let Some(s) = value.downcast_ref::<&str>() {
        return format!("\"{s}\"");
    }
    if let Some(kind) = value.downcast_ref::<NamedKind>() {
        return format!("kind descriptor {kind:?}");
    }
    if let Some(kind) = value.downcast_ref::<WrapperKind>() {
        return format!("wrapper descriptor {kind:?}");
    }
    display_as!(
        bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
    );
    if value.is::<()>() {
        return "()".to_string();
    }
    "<non-type value>".to_string()
}

/// Every predicate evaluated for one type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub rendered: String,
    pub kind: String,
    pub named_type: String,
    pub nullable_type: String,
    pub is_input: bool,
    pub is_output: bool,
    pub is_leaf: bool,
    pub is_composite: bool,
    pub is_abstract: bool,
    pub is_wrapping: bool,
    pub is_nullable: bool,
    pub is_named: bool,
}
