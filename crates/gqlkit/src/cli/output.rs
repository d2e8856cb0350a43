//! Output formatting utilities

use anyhow::{Context, Result};
use clap::ValueEnum;
use colored::Colorize;
use gqlkit_diagnostics::TypeSysError;
use gqlkit_types::Classification;
use std::io::IsTerminal;
use tabled::{Table, Tabled, settings::Style};

/// Output format options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Indented human-readable report
    #[default]
    Pretty,
    /// Pretty-printed JSON
    Json,
    /// One table row per type
    Table,
}

/// Set up color output based on user preference
pub fn setup_colors(mode: &str) {
    match mode.to_lowercase().as_str() {
        "always" => colored::control::set_override(true),
        "never" => colored::control::set_override(false),
        _ => colored::control::set_override(std::io::stdout().is_terminal()),
    }
}

/// Format an error for display
///
/// Type-system errors anywhere in the chain are rendered as diagnostics below
/// the top-level message.
pub fn format_error(error: &anyhow::Error) -> String {
    let mut out = format!("{} {}", "Error:".red().bold(), error);
    if let Some(err) = error
        .chain()
        .find_map(|cause| cause.downcast_ref::<TypeSysError>())
    {
        out.push('\n');
        out.push_str(&err.to_diagnostic().to_colored_string());
    }
    out
}

/// Format a success message for display
pub fn format_success(message: &str) -> String {
    format!("{} {}", "Success:".green().bold(), message)
}

/// Render classification reports in the requested format
pub fn format_reports(reports: &[Classification], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Pretty => Ok(reports
            .iter()
            .map(format_pretty)
            .collect::<Vec<_>>()
            .join("\n\n")),
        OutputFormat::Json => {
            serde_json::to_string_pretty(reports).context("Failed to serialize JSON")
        }
        OutputFormat::Table => Ok(format_table(reports)),
    }
}

fn format_pretty(report: &Classification) -> String {
    format!(
        "{} ({})\n  named type:    {}\n  nullable type: {}\n  categories:    {}",
        report.rendered.bold(),
        report.kind.cyan(),
        report.named_type,
        report.nullable_type,
        categories(report).join(", ")
    )
}

fn categories(report: &Classification) -> Vec<&'static str> {
    [
        (report.is_input, "input"),
        (report.is_output, "output"),
        (report.is_leaf, "leaf"),
        (report.is_composite, "composite"),
        (report.is_abstract, "abstract"),
        (report.is_wrapping, "wrapping"),
        (report.is_nullable, "nullable"),
        (report.is_named, "named"),
    ]
    .into_iter()
    .filter_map(|(hit, name)| hit.then_some(name))
    .collect()
}

#[derive(Tabled)]
struct Row {
    #[tabled(rename = "Type")]
    rendered: String,
    #[tabled(rename = "Kind")]
    kind: String,
    #[tabled(rename = "Named")]
    named_type: String,
    #[tabled(rename = "Input")]
    input: &'static str,
    #[tabled(rename = "Output")]
    output: &'static str,
    #[tabled(rename = "Categories")]
    categories: String,
}

fn yes_no(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}

fn format_table(reports: &[Classification]) -> String {
    let rows: Vec<Row> = reports
        .iter()
        .map(|report| Row {
            rendered: report.rendered.clone(),
            kind: report.kind.clone(),
            named_type: report.named_type.clone(),
            input: yes_no(report.is_input),
            output: yes_no(report.is_output),
            categories: categories(report).join(", "),
        })
        .collect();

    Table::new(rows).with(Style::modern()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use gqlkit_types::TypeRegistry;

    #[test]
    fn test_categories_of_required_list() {
        let registry = TypeRegistry::with_builtin_scalars();
        let report = registry.resolve("[Int]!").unwrap().classify();
        assert_eq!(categories(&report), vec!["input", "output", "wrapping"]);
    }

    #[test]
    fn test_table_has_one_row_per_type() {
        let registry = TypeRegistry::with_builtin_scalars();
        let reports = vec![
            registry.resolve("Int").unwrap().classify(),
            registry.resolve("[ID!]").unwrap().classify(),
        ];
        let table = format_table(&reports);
        assert!(table.contains("Categories"));
        assert!(table.contains("[ID!]"));
        assert!(table.contains("leaf"));
    }

    #[test]
    fn test_format_error_appends_diagnostic() {
        colored::control::set_override(false);
        let err = TypeRegistry::new().resolve("Missing").unwrap_err();
        let err = anyhow::Error::new(err).context("Failed to resolve `Missing`");
        let rendered = format_error(&err);
        assert!(rendered.starts_with("Error: Failed to resolve `Missing`"));
        assert!(rendered.contains("error[GQL0104]: Unknown type \"Missing\"."));
    }
}
