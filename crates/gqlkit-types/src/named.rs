//! Named type variants
//!
//! The six named variants are opaque to this crate apart from their name and an
//! optional description. Field, argument and enum-value structure belongs to the
//! schema layer built on top.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! named_type {
    ($(#[$meta:meta])* $ty:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $ty {
            name: String,
            description: Option<String>,
        }

        impl $ty {
            pub fn new(name: impl Into<String>) -> Self {
                Self {
                    name: name.into(),
                    description: None,
                }
            }

            pub fn with_description(mut self, description: impl Into<String>) -> Self {
                self.description = Some(description.into());
                self
            }

            pub fn name(&self) -> &str {
                &self.name
            }

            pub fn description(&self) -> Option<&str> {
                self.description.as_deref()
            }
        }
    };
}

named_type!(
    /// Leaf type with an opaque serialized form (`Int`, `DateTime`, ...)
    ScalarType
);
named_type!(
    /// Output type with named fields
    ObjectType
);
named_type!(
    /// Abstract output type implemented by objects
    InterfaceType
);
named_type!(
    /// Abstract output type over a set of objects
    UnionType
);
named_type!(
    /// Leaf type with a closed set of values
    EnumType
);
named_type!(
    /// Input type with named input fields
    InputObjectType
);

/// Descriptor of a named variant.
///
/// This is a kind tag used by schema configuration and the registry. It is not
/// itself a member of the type algebra.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NamedKind {
    Scalar,
    Object,
    Interface,
    Union,
    Enum,
    InputObject,
}

impl NamedKind {
    pub const ALL: [NamedKind; 6] = [
        NamedKind::Scalar,
        NamedKind::Object,
        NamedKind::Interface,
        NamedKind::Union,
        NamedKind::Enum,
        NamedKind::InputObject,
    ];

    /// Introspection `__TypeKind` name
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Scalar => "SCALAR",
            Self::Object => "OBJECT",
            Self::Interface => "INTERFACE",
            Self::Union => "UNION",
            Self::Enum => "ENUM",
            Self::InputObject => "INPUT_OBJECT",
        }
    }
}

impl fmt::Display for NamedKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Check a GraphQL name against `/[_A-Za-z][_0-9A-Za-z]*/`
pub fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first == '_' || first.is_ascii_alphabetic() => {
            chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
        }
        _ => false,
    }
}
