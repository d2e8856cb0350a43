//! Check command implementation

use super::output;
use clap::ValueEnum;
use colored::Colorize;
use gqlkit_diagnostics::TypeSysError;
use gqlkit_types::{GraphQLType, Result, TypeRegistry};
use log::debug;
use std::fmt;

/// Where a type reference is used
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Position {
    /// Arguments, variables and input fields
    Input,
    /// Object and interface fields
    Output,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Position::Input => write!(f, "input"),
            Position::Output => write!(f, "output"),
        }
    }
}

/// Result of checking one type reference
pub struct CheckOutcome {
    pub type_ref: String,
    pub result: std::result::Result<GraphQLType, TypeSysError>,
}

/// Results for every checked type reference, in argument order
pub struct CheckReport {
    pub position: Position,
    pub outcomes: Vec<CheckOutcome>,
}

impl CheckReport {
    pub fn failures(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_err()).count()
    }

    pub fn is_success(&self) -> bool {
        self.failures() == 0
    }

    /// Render one line per passing type and a diagnostic per failure
    pub fn render(&self) -> String {
        let mut lines = Vec::with_capacity(self.outcomes.len() + 1);
        for outcome in &self.outcomes {
            match &outcome.result {
                Ok(ty) => lines.push(format!(
                    "{} {} is a valid {} type",
                    "ok".green().bold(),
                    ty,
                    self.position
                )),
                Err(err) => lines.push(err.to_diagnostic().to_colored_string()),
            }
        }

        let failures = self.failures();
        if failures == 0 {
            lines.push(output::format_success(&format!(
                "All {} type(s) are valid {} types",
                self.outcomes.len(),
                self.position
            )));
        } else {
            lines.push(format!(
                "{} {} of {} type(s) rejected",
                "Check failed:".red().bold(),
                failures,
                self.outcomes.len()
            ));
        }
        lines.join("\n")
    }
}

/// Check that each type reference is legal in `position`
pub fn check(registry: &TypeRegistry, position: Position, type_refs: &[String]) -> CheckReport {
    let outcomes = type_refs
        .iter()
        .map(|source| CheckOutcome {
            type_ref: source.clone(),
            result: check_one(registry, position, source),
        })
        .collect();

    CheckReport { position, outcomes }
}

fn check_one(registry: &TypeRegistry, position: Position, source: &str) -> Result<GraphQLType> {
    debug!("Checking `{source}` as {position}");
    let ty = registry.resolve(source)?;
    match position {
        Position::Input => ty.assert_input_type()?,
        Position::Output => ty.assert_output_type()?,
    };
    Ok(ty)
}
