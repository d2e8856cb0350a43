//! gqlkit error types

use crate::{ErrorCode, SourceLocation, Span};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// An error rendered for display, with location and help
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Source location, for errors raised while parsing a type reference
    pub location: Option<SourceLocation>,
    /// Additional context or help
    pub help: Option<String>,
}

impl Diagnostic {
    pub fn error(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            location: None,
            help: None,
        }
    }

    pub fn with_location(mut self, location: SourceLocation) -> Self {
        self.location = Some(location);
        self
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Render with terminal colors
    #[cfg(feature = "colored")]
    pub fn to_colored_string(&self) -> String {
        use colored::Colorize;

        let mut out = format!(
            "{}[{}]: {}",
            "error".red().bold(),
            self.code.to_string().bold(),
            self.message
        );
        if let Some(loc) = &self.location {
            out.push_str(&format!(" at {}", loc.to_string().cyan()));
        }
        if let Some(help) = &self.help {
            out.push_str(&format!("\n  {} {}", "help:".green(), help));
        }
        out
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error: {} - {}", self.code, self.message)?;
        if let Some(loc) = &self.location {
            write!(f, " at {}", loc)?;
        }
        Ok(())
    }
}

/// Main gqlkit error type
#[derive(Debug, Clone, Error)]
pub enum TypeSysError {
    /// Type-reference syntax error
    #[error("{code}: {message}")]
    Parse {
        code: ErrorCode,
        message: String,
        expression: String,
        location: Option<SourceLocation>,
    },

    /// Illegal type construction (bad wrapper input, malformed spec, registry misuse)
    #[error("{code}: {message}")]
    Validation {
        code: ErrorCode,
        message: String,
        context: Option<String>,
    },

    /// A type failed a classification assertion
    #[error("{code}: {message}")]
    Assertion {
        code: ErrorCode,
        message: String,
        /// Rendered form of the rejected value
        value: String,
    },

    /// Schema file could not be read
    #[error("{code}: {message}")]
    System { code: ErrorCode, message: String },
}

impl TypeSysError {
    /// Create a validation error
    pub fn validation(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::Validation {
            code,
            message: message.into(),
            context: None,
        }
    }

    /// Create an assertion error for a rejected value
    pub fn assertion(code: ErrorCode, message: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Assertion {
            code,
            message: message.into(),
            value: value.into(),
        }
    }

    /// Create a system error
    pub fn system(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::System {
            code,
            message: message.into(),
        }
    }

    /// Get the error code
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Parse { code, .. }
            | Self::Validation { code, .. }
            | Self::Assertion { code, .. }
            | Self::System { code, .. } => *code,
        }
    }

    /// Get the human-readable message without the code prefix
    pub fn message(&self) -> &str {
        match self {
            Self::Parse { message, .. }
            | Self::Validation { message, .. }
            | Self::Assertion { message, .. }
            | Self::System { message, .. } => message,
        }
    }

    pub fn location(&self) -> Option<&SourceLocation> {
        match self {
            Self::Parse { location, .. } => location.as_ref(),
            _ => None,
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    pub fn is_assertion(&self) -> bool {
        matches!(self, Self::Assertion { .. })
    }

    /// Convert to a diagnostic
    pub fn to_diagnostic(&self) -> Diagnostic {
        let mut diag = Diagnostic::error(self.code(), self.message());
        if let Some(loc) = self.location() {
            diag = diag.with_location(loc.clone());
        }
        let help = match self {
            Self::Validation { context, .. } => context.as_deref(),
            _ => None,
        };
        match help.or(self.code().info().help) {
            Some(help) => diag.with_help(help),
            None => diag,
        }
    }
}

/// Builder for creating errors with fluent API
pub struct ErrorBuilder {
    code: ErrorCode,
    message: String,
    location: Option<SourceLocation>,
    context: Option<String>,
}

impl ErrorBuilder {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            location: None,
            context: None,
        }
    }

    /// Set the span (converts to location)
    pub fn span(mut self, span: Span, source: &str) -> Self {
        self.location = Some(SourceLocation::from_span(span, source));
        self
    }

    /// Add context information
    pub fn context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Build a parse error
    pub fn parse(self, expression: impl Into<String>) -> TypeSysError {
        TypeSysError::Parse {
            code: self.code,
            message: self.message,
            expression: expression.into(),
            location: self.location,
        }
    }

    /// Build a validation error
    pub fn validation(self) -> TypeSysError {
        TypeSysError::Validation {
            code: self.code,
            message: self.message,
            context: self.context,
        }
    }
}
