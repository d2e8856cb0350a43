//! gqlkit diagnostics and error handling
//!
//! This crate provides the error handling infrastructure shared by the gqlkit crates:
//! structured error codes, source locations for type-reference parsing, and
//! diagnostic reporting.

mod error;
mod error_code;
mod span;

pub use error::*;
pub use error_code::*;
pub use span::*;

/// Result type for gqlkit operations
pub type Result<T> = std::result::Result<T, TypeSysError>;
