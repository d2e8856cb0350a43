//! Schema resolution for CLI commands

use anyhow::{Context, Result};
use gqlkit_types::TypeRegistry;
use log::debug;
use std::path::{Path, PathBuf};

/// Environment variable naming the default schema file
pub const SCHEMA_ENV: &str = "GQLKIT_SCHEMA";

/// Pick the schema file: the explicit path wins over `GQLKIT_SCHEMA`
pub fn schema_path(explicit: Option<&Path>) -> Option<PathBuf> {
    explicit.map(Path::to_path_buf).or_else(|| {
        std::env::var_os(SCHEMA_ENV)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
    })
}

/// Load the registry commands resolve type references against
///
/// Without a schema file only the built-in scalars are registered.
pub fn load_registry(explicit: Option<&Path>) -> Result<TypeRegistry> {
    match schema_path(explicit) {
        Some(path) => {
            debug!("Loading schema from {}", path.display());
            TypeRegistry::from_json_file(&path)
                .with_context(|| format!("Failed to load schema: {}", path.display()))
        }
        None => {
            debug!("No schema given, using built-in scalars");
            Ok(TypeRegistry::with_builtin_scalars())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_path_wins() {
        let path = Path::new("schema.json");
        assert_eq!(schema_path(Some(path)), Some(PathBuf::from("schema.json")));
    }

    #[test]
    fn test_missing_schema_file_has_context() {
        let err = load_registry(Some(Path::new("/nonexistent/schema.json"))).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Failed to load schema: /nonexistent/schema.json"
        );
    }
}
