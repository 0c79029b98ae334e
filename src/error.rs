//! Validation error type.

use thiserror::Error;

/// Error returned when a constructor or mutator receives an invalid value.
///
/// Carries the offending field and value, and for closed-set fields the
/// accepted choices. These errors always propagate to the caller and are
/// never recovered internally. Expected business outcomes (a full bus, a
/// passenger who is not aboard) are reported as returned values instead,
/// not as errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A required text field was empty.
    #[error("{field} cannot be empty")]
    EmptyField {
        /// Name of the empty field.
        field: &'static str,
    },

    /// A field that requires a strictly positive value received zero or less.
    #[error("{field} must be positive (got {value})")]
    NotPositive {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// A numeric field fell outside its allowed range.
    #[error("{field} must be between {min} and {max} (got {value})")]
    OutOfRange {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: i64,
        /// Lower bound (inclusive).
        min: i64,
        /// Upper bound (inclusive).
        max: i64,
    },

    /// A value did not match any member of a closed set.
    #[error("invalid {field} {value:?}, choose from: {valid:?}")]
    InvalidChoice {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: String,
        /// The accepted choices.
        valid: &'static [&'static str],
    },
}
