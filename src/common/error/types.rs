//! Unified error types for the Atom codec.
//!
//! Fatal conditions (malformed XML, a non-Atom root, a document that cannot be
//! written, misuse of the builder API) surface as [`Error`]. Tolerable format
//! issues found while reading never become an `Err`; they travel through the
//! diagnostic channel instead (see [`crate::parser::Diagnostic`]).
use crate::validate::Violations;
use thiserror::Error;

/// Main error type for Atom codec operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Input is not well-formed XML
    #[error("XML error: {0}")]
    Xml(String),

    /// Root element is neither `atom:feed` nor `atom:entry`
    #[error("Not an Atom document: {0}")]
    NotAtomDocument(String),

    /// A mandatory field or relationship is missing or malformed
    #[error("Structural error: {0}")]
    Structural(Violations),

    /// A child was appended to a container that cannot own it
    #[error("Type mismatch: atom:{container} cannot contain {child}")]
    TypeMismatch {
        container: &'static str,
        child: &'static str,
    },

    /// JSON text could not be parsed
    #[error("JSON error: {0}")]
    Json(String),

    /// A registered JSON field holds a value of the wrong shape
    #[error("Invalid JSON for field '{field}': expected {expected}")]
    InvalidJson {
        field: String,
        expected: &'static str,
    },
}

/// Result type for Atom codec operations.
pub type Result<T> = std::result::Result<T, Error>;
