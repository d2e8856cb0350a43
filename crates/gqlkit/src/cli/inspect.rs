//! Inspect command implementation

use super::output::{self, OutputFormat};
use anyhow::{Context, Result, bail};
use gqlkit_types::{Classification, TypeRegistry};
use log::debug;

/// Configuration for inspect command
pub struct InspectConfig {
    pub type_refs: Vec<String>,
    pub format: OutputFormat,
}

/// Classify each type reference and render the reports
pub fn inspect(registry: &TypeRegistry, config: &InspectConfig) -> Result<String> {
    if config.type_refs.is_empty() {
        bail!("No type references specified for inspection");
    }

    let reports = config
        .type_refs
        .iter()
        .map(|source| classify(registry, source))
        .collect::<Result<Vec<_>>>()?;

    output::format_reports(&reports, config.format)
}

fn classify(registry: &TypeRegistry, source: &str) -> Result<Classification> {
    debug!("Inspecting `{source}`");
    let ty = registry
        .resolve(source)
        .with_context(|| format!("Failed to resolve `{source}`"))?;
    Ok(ty.classify())
}
