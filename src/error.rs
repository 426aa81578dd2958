//! Error types for csvline

use thiserror::Error;

/// Errors raised by the strict line helpers
///
/// The plain parser is total and never produces one of these.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CsvError {
    /// Line split into a different number of fields than the caller expected
    #[error("expected {expected} fields, found {found}")]
    FieldCount { expected: usize, found: usize },
}

/// Result type for csvline operations
pub type Result<T> = std::result::Result<T, CsvError>;
