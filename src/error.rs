//! Error types for the Attendance Classification Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! Note that an unparseable timestamp is NOT an error: bad rows are dropped
//! by the normalizer and the batch continues. Errors are reserved for
//! conditions that must stop a run, such as rows whose shape is wrong
//! (silently coercing a missing field could mis-map columns).

use thiserror::Error;

/// The main error type for the Attendance Classification Engine.
///
/// # Example
///
/// ```
/// use attendance_engine::error::EngineError;
///
/// let error = EngineError::MalformedRow {
///     index: 3,
///     expected: 3,
///     found: 2,
/// };
/// assert_eq!(
///     error.to_string(),
///     "Malformed row at index 3: expected 3 fields, found 2"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// An input row did not have the expected number of fields.
    #[error("Malformed row at index {index}: expected {expected} fields, found {found}")]
    MalformedRow {
        /// Zero-based position of the row in the extracted sequence.
        index: usize,
        /// The number of fields a well-formed row carries.
        expected: usize,
        /// The number of fields actually present.
        found: usize,
    },

    /// Policy file was not found at the specified path.
    #[error("Policy file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Policy file could not be parsed.
    #[error("Failed to parse policy file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
