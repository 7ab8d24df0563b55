//! Unified error types for the Atom codec.
//!
//! This module provides a single error type shared by the parser, the writer,
//! the builders and the JSON codec.

// Submodule declarations
pub mod conversions;
pub mod types;

// Re-exports
pub use types::{Error, Result};
