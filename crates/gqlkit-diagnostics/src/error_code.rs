//! gqlkit error codes following a structured numbering system
//!
//! Error code ranges:
//! - GQL0001-GQL0099: Parse errors (type-reference syntax)
//! - GQL0100-GQL0199: Validation errors (illegal type construction, registry misuse)
//! - GQL0200-GQL0299: Assertion errors (a type failed a classification check)
//! - GQL0400-GQL0499: System errors (schema file I/O)

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

/// Error code identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ErrorCode(u16);

impl ErrorCode {
    /// Create a new error code
    pub const fn new(code: u16) -> Self {
        Self(code)
    }

    /// Get the numeric code
    pub const fn code(&self) -> u16 {
        self.0
    }

    /// Get error information for this code
    pub fn info(&self) -> &'static ErrorInfo {
        ERROR_INFO.get(&self.0).unwrap_or(&UNKNOWN_ERROR)
    }

    /// Check if this is a parse error (0001-0099)
    pub const fn is_parse_error(&self) -> bool {
        self.0 >= 1 && self.0 < 100
    }

    /// Check if this is a validation error (0100-0199)
    pub const fn is_validation_error(&self) -> bool {
        self.0 >= 100 && self.0 < 200
    }

    /// Check if this is an assertion error (0200-0299)
    pub const fn is_assertion_error(&self) -> bool {
        self.0 >= 200 && self.0 < 300
    }

    /// Check if this is a system error (0400-0499)
    pub const fn is_system_error(&self) -> bool {
        self.0 >= 400 && self.0 < 500
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GQL{:04}", self.0)
    }
}

/// Information about an error code
#[derive(Debug, Clone)]
pub struct ErrorInfo {
    /// Short description of the error
    pub description: &'static str,
    /// Detailed help text
    pub help: Option<&'static str>,
}

impl ErrorInfo {
    const fn new(description: &'static str) -> Self {
        Self {
            description,
            help: None,
        }
    }

    const fn with_help(mut self, help: &'static str) -> Self {
        self.help = Some(help);
        self
    }
}

static UNKNOWN_ERROR: ErrorInfo = ErrorInfo::new("Unknown error");

static ERROR_INFO: LazyLock<HashMap<u16, ErrorInfo>> = LazyLock::new(|| {
    let mut map = HashMap::new();

    // Parse errors (0001-0099)
    map.insert(1, ErrorInfo::new("Unexpected token"));
    map.insert(2, ErrorInfo::new("Unexpected end of input"));
    map.insert(3, ErrorInfo::new("Invalid type name"));
    map.insert(4, ErrorInfo::new("Missing closing bracket"));
    map.insert(5, ErrorInfo::new("Type reference nested too deeply")
        .with_help("Wrap the named type in fewer list layers"));

    // Validation errors (0100-0199)
    map.insert(100, ErrorInfo::new("Value is not a type"));
    map.insert(101, ErrorInfo::new("Non-null of non-null type")
        .with_help("A non-null type may only wrap a named type or a list"));
    map.insert(102, ErrorInfo::new("Empty wrapping spec"));
    map.insert(103, ErrorInfo::new("Invalid wrapping marker")
        .with_help("Use ']' to wrap in a list and '!' to wrap in a non-null type"));
    map.insert(104, ErrorInfo::new("Unknown type"));
    map.insert(105, ErrorInfo::new("Duplicate type definition"));
    map.insert(106, ErrorInfo::new("Invalid type name")
        .with_help("Names must match /[_A-Za-z][_0-9A-Za-z]*/"));
    map.insert(107, ErrorInfo::new("Invalid schema definition"));

    // Assertion errors (0200-0299)
    map.insert(200, ErrorInfo::new("Unexpected type variant"));
    map.insert(201, ErrorInfo::new("Type not in expected category"));
    map.insert(202, ErrorInfo::new("Value is not a type"));

    // System errors (0400-0499)
    map.insert(401, ErrorInfo::new("I/O error"));

    map
});

// Parse errors
pub const GQL0001: ErrorCode = ErrorCode::new(1);
pub const GQL0002: ErrorCode = ErrorCode::new(2);
pub const GQL0003: ErrorCode = ErrorCode::new(3);
pub const GQL0004: ErrorCode = ErrorCode::new(4);
pub const GQL0005: ErrorCode = ErrorCode::new(5);

// Validation errors
pub const GQL0100: ErrorCode = ErrorCode::new(100);
pub const GQL0101: ErrorCode = ErrorCode::new(101);
pub const GQL0102: ErrorCode = ErrorCode::new(102);
pub const GQL0103: ErrorCode = ErrorCode::new(103);
pub const GQL0104: ErrorCode = ErrorCode::new(104);
pub const GQL0105: ErrorCode = ErrorCode::new(105);
pub const GQL0106: ErrorCode = ErrorCode::new(106);
pub const GQL0107: ErrorCode = ErrorCode::new(107);

// Assertion errors
pub const GQL0200: ErrorCode = ErrorCode::new(200);
pub const GQL0201: ErrorCode = ErrorCode::new(201);
pub const GQL0202: ErrorCode = ErrorCode::new(202);

// System errors
pub const GQL0401: ErrorCode = ErrorCode::new(401);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_display() {
        assert_eq!(GQL0001.to_string(), "GQL0001");
        assert_eq!(GQL0101.to_string(), "GQL0101");
    }

    #[test]
    fn test_error_categories() {
        assert!(GQL0001.is_parse_error());
        assert!(!GQL0001.is_validation_error());

        assert!(GQL0101.is_validation_error());
        assert!(!GQL0101.is_assertion_error());

        assert!(GQL0200.is_assertion_error());
        assert!(GQL0401.is_system_error());
    }

    #[test]
    fn test_error_info() {
        assert_eq!(GQL0101.info().description, "Non-null of non-null type");
        assert!(GQL0103.info().help.is_some());
        assert_eq!(ErrorCode::new(999).info().description, "Unknown error");
    }
}
