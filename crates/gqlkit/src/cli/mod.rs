//! CLI functionality for the gqlkit tool
//!
//! This module contains all CLI-related functionality including:
//! - Schema loading
//! - Type inspection
//! - Wrapping named types with a spec
//! - Position checks
//! - Output formatting

pub mod check;
pub mod inspect;
pub mod output;
pub mod schema;
pub mod wrap;
