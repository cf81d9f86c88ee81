//! Error types for propvet.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.
//! Validation findings are never errors: they are reported as diagnostics
//! through the problem sink. The variants here are hard failures only,
//! environment problems the engine cannot turn into actionable diagnostics.

use crate::resolve::ResolveError;
use thiserror::Error;

/// Main error type for propvet operations.
#[derive(Error, Debug)]
pub enum PropvetError {
    /// A property value could not be resolved for a reason other than a
    /// notation problem. Notation problems are caught at the dispatch
    /// boundary and become diagnostics instead.
    #[error("property value resolution failed: {0}")]
    Resolve(#[from] ResolveError),

    /// The reserved-location policy could not be loaded or compiled.
    #[error("invalid reserved-location policy: {0}")]
    Policy(String),

    /// A validation report could not be written.
    #[error("report output failed: {0}")]
    Report(String),
}

/// Result type alias for propvet operations.
pub type Result<T> = std::result::Result<T, PropvetError>;
