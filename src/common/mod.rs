//! Common types and utilities shared by the parser, writer and JSON codec.

// Submodule declarations
pub mod error;
pub mod xml;

// Re-exports for convenience
pub use error::{Error, Result};
