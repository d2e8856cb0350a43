//! The type algebra
//!
//! [`GraphQLType`] is a cheap, shareable handle to an immutable type node. Equality
//! and hashing are by node identity, never by name or structure: two separately
//! constructed `User` objects are different types, while every `[User!]` built from
//! the same `User` instance is the same node (see [`crate::cache`]).

use crate::cache::WrapperCache;
use crate::named::{
    EnumType, InputObjectType, InterfaceType, NamedKind, ObjectType, ScalarType, UnionType,
};
use std::fmt::{self, Write};
use std::hash::{Hash, Hasher};
use std::sync::{Arc, Weak};

/// Handle to a type in the algebra
#[derive(Clone)]
pub struct GraphQLType(Arc<TypeNode>);

pub(crate) struct TypeNode {
    kind: TypeKind,
    /// Wrappers derived from this node, held weakly
    pub(crate) wrappers: WrapperCache,
}

impl TypeNode {
    /// Move the wrapped type out, leaving a nameless scalar behind
    fn take_inner(&mut self) -> Option<GraphQLType> {
        if !matches!(self.kind, TypeKind::List(_) | TypeKind::NonNull(_)) {
            return None;
        }
        let placeholder = TypeKind::Scalar(ScalarType::new(String::new()));
        match std::mem::replace(&mut self.kind, placeholder) {
            TypeKind::List(list) => Some(list.of_type),
            TypeKind::NonNull(non_null) => Some(non_null.of_type),
            _ => None,
        }
    }
}

// Wrapper chains can be arbitrarily deep, so they are released layer by layer
// instead of through nested drops.
impl Drop for TypeNode {
    fn drop(&mut self) {
        let mut next = self.take_inner();
        while let Some(ty) = next {
            next = Arc::into_inner(ty.0).and_then(|mut node| node.take_inner());
        }
    }
}

/// Closed discriminant over the eight base variants
#[derive(Debug, Clone)]
pub enum TypeKind {
    Scalar(ScalarType),
    Object(ObjectType),
    Interface(InterfaceType),
    Union(UnionType),
    Enum(EnumType),
    InputObject(InputObjectType),
    List(ListType),
    NonNull(NonNullType),
}

impl TypeKind {
    /// Introspection `__TypeKind` name
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Scalar(_) => "SCALAR",
            Self::Object(_) => "OBJECT",
            Self::Interface(_) => "INTERFACE",
            Self::Union(_) => "UNION",
            Self::Enum(_) => "ENUM",
            Self::InputObject(_) => "INPUT_OBJECT",
            Self::List(_) => "LIST",
            Self::NonNull(_) => "NON_NULL",
        }
    }
}

/// `[T]`
#[derive(Debug, Clone)]
pub struct ListType {
    of_type: GraphQLType,
}

impl ListType {
    pub(crate) fn new(of_type: GraphQLType) -> Self {
        Self { of_type }
    }

    pub fn of_type(&self) -> &GraphQLType {
        &self.of_type
    }
}

/// `T!`; the inner type is never itself non-null
#[derive(Debug, Clone)]
pub struct NonNullType {
    of_type: GraphQLType,
}

impl NonNullType {
    pub(crate) fn new(of_type: GraphQLType) -> Self {
        Self { of_type }
    }

    pub fn of_type(&self) -> &GraphQLType {
        &self.of_type
    }
}

impl GraphQLType {
    /// Allocate a fresh node. Wrapper nodes must go through the cache instead.
    pub(crate) fn alloc(kind: TypeKind) -> Self {
        Self(Arc::new(TypeNode {
            kind,
            wrappers: WrapperCache::default(),
        }))
    }

    pub(crate) fn from_node(node: Arc<TypeNode>) -> Self {
        Self(node)
    }

    pub(crate) fn downgrade(&self) -> Weak<TypeNode> {
        Arc::downgrade(&self.0)
    }

    pub(crate) fn node(&self) -> &TypeNode {
        &self.0
    }

    // === Named constructors ===

    pub fn scalar(name: impl Into<String>) -> Self {
        ScalarType::new(name).into()
    }

    pub fn object(name: impl Into<String>) -> Self {
        ObjectType::new(name).into()
    }

    pub fn interface(name: impl Into<String>) -> Self {
        InterfaceType::new(name).into()
    }

    pub fn union(name: impl Into<String>) -> Self {
        UnionType::new(name).into()
    }

    pub fn enum_type(name: impl Into<String>) -> Self {
        EnumType::new(name).into()
    }

    pub fn input_object(name: impl Into<String>) -> Self {
        InputObjectType::new(name).into()
    }

    /// Build a named type of the given kind
    pub fn named(kind: NamedKind, name: impl Into<String>) -> Self {
        match kind {
            NamedKind::Scalar => Self::scalar(name),
            NamedKind::Object => Self::object(name),
            NamedKind::Interface => Self::interface(name),
            NamedKind::Union => Self::union(name),
            NamedKind::Enum => Self::enum_type(name),
            NamedKind::InputObject => Self::input_object(name),
        }
    }

    // === Accessors ===

    pub fn kind(&self) -> &TypeKind {
        &self.node().kind
    }

    /// Name of a named type; `None` for wrappers
    pub fn name(&self) -> Option<&str> {
        match self.kind() {
            TypeKind::Scalar(t) => Some(t.name()),
            TypeKind::Object(t) => Some(t.name()),
            TypeKind::Interface(t) => Some(t.name()),
            TypeKind::Union(t) => Some(t.name()),
            TypeKind::Enum(t) => Some(t.name()),
            TypeKind::InputObject(t) => Some(t.name()),
            TypeKind::List(_) | TypeKind::NonNull(_) => None,
        }
    }

    /// Immediate inner type of a wrapper; `None` for named types
    pub fn of_type(&self) -> Option<&GraphQLType> {
        match self.kind() {
            TypeKind::List(list) => Some(list.of_type()),
            TypeKind::NonNull(non_null) => Some(non_null.of_type()),
            _ => None,
        }
    }

    /// Identity comparison, same as `==`
    pub fn ptr_eq(&self, other: &GraphQLType) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl PartialEq for GraphQLType {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for GraphQLType {}

impl Hash for GraphQLType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        Arc::as_ptr(&self.0).hash(state);
    }
}

impl fmt::Display for GraphQLType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Suffix markers are collected outermost first and written innermost first.
        let mut suffix = Vec::new();
        let mut ty = self;
        loop {
            match ty.kind() {
                TypeKind::List(list) => {
                    f.write_char('[')?;
                    suffix.push(']');
                    ty = list.of_type();
                }
                TypeKind::NonNull(non_null) => {
                    suffix.push('!');
                    ty = non_null.of_type();
                }
                _ => break,
            }
        }
        f.write_str(ty.name().unwrap_or_default())?;
        suffix.iter().rev().try_for_each(|marker| f.write_char(*marker))
    }
}

impl fmt::Debug for GraphQLType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GraphQLType({} {})", self.kind().as_str(), self)
    }
}

impl From<ScalarType> for GraphQLType {
    fn from(t: ScalarType) -> Self {
        Self::alloc(TypeKind::Scalar(t))
    }
}

impl From<ObjectType> for GraphQLType {
    fn from(t: ObjectType) -> Self {
        Self::alloc(TypeKind::Object(t))
    }
}

impl From<InterfaceType> for GraphQLType {
    fn from(t: InterfaceType) -> Self {
        Self::alloc(TypeKind::Interface(t))
    }
}

impl From<UnionType> for GraphQLType {
    fn from(t: UnionType) -> Self {
        Self::alloc(TypeKind::Union(t))
    }
}

impl From<EnumType> for GraphQLType {
    fn from(t: EnumType) -> Self {
        Self::alloc(TypeKind::Enum(t))
    }
}

impl From<InputObjectType> for GraphQLType {
    fn from(t: InputObjectType) -> Self {
        Self::alloc(TypeKind::InputObject(t))
    }
}
