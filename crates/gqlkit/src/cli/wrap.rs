//! Wrap command implementation

use anyhow::{Context, Result, bail};
use gqlkit_types::{GraphQLType, TypeRegistry, wrap_with_spec};

/// Configuration for wrap command
pub struct WrapConfig {
    /// Registered named type to wrap
    pub name: String,
    /// Wrapping spec of `]` and `!` markers, innermost first
    pub spec: String,
}

/// Apply the spec to a registered named type
pub fn wrap(registry: &TypeRegistry, config: &WrapConfig) -> Result<GraphQLType> {
    let base = registry
        .resolve(&config.name)
        .with_context(|| format!("Failed to resolve `{}`", config.name))?;
    if !base.is_named_type() {
        bail!("`{}` is not a named type", config.name);
    }
    wrap_with_spec(&base, &config.spec)
        .with_context(|| format!("Failed to wrap `{}` with `{}`", config.name, config.spec))
}
