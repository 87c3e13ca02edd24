//! Unified error type for wire-to-domain conversion
//!
//! Every fallible conversion in this crate reports through `ConvertError`,
//! so callers can pattern-match on the fault kind and tests can assert
//! exact error values.

use thiserror::Error;

/// Error raised while converting a wire message into a domain value object.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConvertError {
    /// A required wire field (or required nested message) was absent.
    /// The payload names exactly the field that was missing.
    #[error("{0} is required")]
    MissingField(&'static str),

    /// A wire enum field carried a discriminant this library does not know.
    /// This indicates protocol-version drift, not a recoverable user error;
    /// there is no fallback variant and the value is never silently mapped.
    #[error("unrecognized {field} value: {value}")]
    UnrecognizedEnum { field: &'static str, value: i32 },
}

impl ConvertError {
    /// Create a missing-required-field error
    pub fn missing(field: &'static str) -> Self {
        Self::MissingField(field)
    }

    /// Create an unrecognized-enum-discriminant error
    pub fn unrecognized(field: &'static str, value: i32) -> Self {
        Self::UnrecognizedEnum { field, value }
    }
}
