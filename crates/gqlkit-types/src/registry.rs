//! Named type registry
//!
//! The registry owns the named types of a schema and resolves type references
//! against them. Wrappers built during resolution go through the memoizing
//! constructors, so resolving `[User!]` twice yields the same instance for as long
//! as one of them is held.

use crate::named::{NamedKind, is_valid_name};
use crate::ty::{GraphQLType, TypeKind};
use crate::type_ref::TypeRef;
use gqlkit_diagnostics::{
    ErrorBuilder, GQL0104, GQL0105, GQL0106, GQL0107, GQL0401, Result, TypeSysError,
};
use indexmap::IndexMap;
use log::debug;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;

/// Names of the built-in scalars, in definition order
pub const BUILTIN_SCALARS: [&str; 5] = ["Int", "Float", "String", "Boolean", "ID"];

/// Schema configuration file contents
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaConfig {
    /// Register Int, Float, String, Boolean and ID before `types`
    #[serde(default = "default_true")]
    pub builtin_scalars: bool,
    #[serde(default)]
    pub types: Vec<TypeDefinition>,
}

impl Default for SchemaConfig {
    fn default() -> Self {
        Self {
            builtin_scalars: true,
            types: Vec::new(),
        }
    }
}

fn default_true() -> bool {
    true
}

/// One named type in a schema configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDefinition {
    pub kind: NamedKind,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Registry of named types, in definition order
#[derive(Debug, Clone, Default)]
pub struct TypeRegistry {
    types: Arc<RwLock<IndexMap<String, GraphQLType>>>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding only the built-in scalars
    pub fn with_builtin_scalars() -> Self {
        let registry = Self::new();
        {
            let mut types = registry.types.write();
            for name in BUILTIN_SCALARS {
                types.insert(name.to_string(), GraphQLType::scalar(name));
            }
        }
        registry
    }

    /// Build a registry from a schema configuration
    pub fn from_config(config: &SchemaConfig) -> Result<Self> {
        let registry = if config.builtin_scalars {
            Self::with_builtin_scalars()
        } else {
            Self::new()
        };
        for def in &config.types {
            let ty = GraphQLType::named(def.kind, def.name.clone());
            let ty = match &def.description {
                Some(description) => with_description(ty, description),
                None => ty,
            };
            registry.insert(ty)?;
        }
        Ok(registry)
    }

    /// Load a schema configuration from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        let config: SchemaConfig = serde_json::from_str(json).map_err(|e| {
            ErrorBuilder::new(GQL0107, format!("Invalid schema definition: {e}"))
                .context("Expected {\"types\": [{\"kind\": \"OBJECT\", \"name\": \"...\"}]}")
                .validation()
        })?;
        Self::from_config(&config)
    }

    /// Load a schema configuration from a JSON file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            TypeSysError::system(GQL0401, format!("Failed to read {}: {e}", path.display()))
        })?;
        debug!("loading schema from {}", path.display());
        Self::from_json(&json)
    }

    /// Create and register a named type
    pub fn define(&self, kind: NamedKind, name: &str) -> Result<GraphQLType> {
        self.insert(GraphQLType::named(kind, name))
    }

    /// Register an existing named type under its own name
    pub fn insert(&self, ty: GraphQLType) -> Result<GraphQLType> {
        let name = ty
            .name()
            .ok_or_else(|| {
                TypeSysError::validation(
                    GQL0106,
                    format!("Only named types can be registered, got {ty}."),
                )
            })?
            .to_string();
        if !is_valid_name(&name) {
            return Err(TypeSysError::validation(
                GQL0106,
                format!("Names must match /[_A-Za-z][_0-9A-Za-z]*/ but \"{name}\" does not."),
            ));
        }

        let mut types = self.types.write();
        if types.contains_key(&name) {
            return Err(TypeSysError::validation(
                GQL0105,
                format!("Schema must contain uniquely named types but contains multiple types named \"{name}\"."),
            ));
        }
        debug!("registered {} {}", ty.kind().as_str(), name);
        types.insert(name, ty.clone());
        Ok(ty)
    }

    pub fn get(&self, name: &str) -> Option<GraphQLType> {
        self.types.read().get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.types.read().contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.types.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.read().is_empty()
    }

    /// Registered names, in definition order
    pub fn names(&self) -> Vec<String> {
        self.types.read().keys().cloned().collect()
    }

    /// Build the type a reference denotes
    pub fn build(&self, type_ref: &TypeRef) -> Result<GraphQLType> {
        let (name, wrappers) = type_ref.wrappers();
        let base = self.get(name).ok_or_else(|| {
            TypeSysError::validation(GQL0104, format!("Unknown type \"{name}\"."))
        })?;
        wrappers
            .into_iter()
            .rev()
            .try_fold(base, |ty, kind| GraphQLType::wrap(&ty, kind))
    }

    /// Parse and build a type reference such as `[User!]!`
    pub fn resolve(&self, source: &str) -> Result<GraphQLType> {
        let type_ref = TypeRef::parse(source)?;
        let ty = self.build(&type_ref)?;
        debug!("resolved {:?} to {}", source, ty);
        Ok(ty)
    }
}

fn with_description(ty: GraphQLType, description: &str) -> GraphQLType {
    match ty.kind().clone() {
        TypeKind::Scalar(t) => t.with_description(description).into(),
        TypeKind::Object(t) => t.with_description(description).into(),
        TypeKind::Interface(t) => t.with_description(description).into(),
        TypeKind::Union(t) => t.with_description(description).into(),
        TypeKind::Enum(t) => t.with_description(description).into(),
        TypeKind::InputObject(t) => t.with_description(description).into(),
        TypeKind::List(_) | TypeKind::NonNull(_) => ty,
    }
}
