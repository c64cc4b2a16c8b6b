//! Validation error types with detailed rejection reasons.

use std::fmt;
use thiserror::Error;

/// The kind of validation error that occurred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Input was empty when a value was required.
    Empty,
    /// Input exceeded maximum allowed length.
    TooLong {
        /// Maximum allowed length.
        max: usize,
        /// Actual length of input.
        actual: usize,
    },
    /// Input contained invalid characters.
    InvalidCharacters {
        /// Description of invalid characters found.
        found: String,
        /// Description of allowed characters.
        allowed: String,
    },
    /// Input did not match expected format.
    InvalidFormat {
        /// Expected format description.
        expected: String,
        /// What was actually provided.
        actual: String,
    },
    /// Input was not a valid IPv4 address.
    InvalidAddress {
        /// The rejected input.
        value: String,
        /// Why it was rejected.
        reason: String,
    },
    /// Input was not a valid IPv4 CIDR subnet.
    InvalidSubnet {
        /// The rejected input.
        value: String,
        /// Why it was rejected.
        reason: String,
    },
    /// Input was not a plain decimal number.
    InvalidNumber {
        /// The rejected input.
        value: String,
    },
    /// Numeric value was out of allowed range.
    OutOfRange {
        /// Minimum allowed value.
        min: u64,
        /// Maximum allowed value.
        max: u64,
        /// Actual value provided.
        actual: u64,
    },
}

impl fmt::Display for ValidationErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "input cannot be empty"),
            Self::TooLong { max, actual } => {
                write!(f, "input too long: {actual} chars exceeds max of {max}")
            }
            Self::InvalidCharacters { found, allowed } => {
                write!(f, "invalid characters '{found}': allowed: {allowed}")
            }
            Self::InvalidFormat { expected, actual } => {
                write!(f, "invalid format: expected {expected}, got '{actual}'")
            }
            Self::InvalidAddress { value, reason } => {
                write!(f, "invalid IPv4 address '{value}': {reason}")
            }
            Self::InvalidSubnet { value, reason } => {
                write!(f, "invalid subnet '{value}': {reason}")
            }
            Self::InvalidNumber { value } => write!(f, "'{value}' is not a number"),
            Self::OutOfRange { min, max, actual } => {
                write!(f, "value {actual} out of range [{min}, {max}]")
            }
        }
    }
}

/// Error returned when validation fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("validation failed for '{field}': {kind}")]
pub struct ValidationError {
    /// The name of the field that failed validation.
    pub field: String,
    /// The kind of validation error.
    pub kind: ValidationErrorKind,
}

impl ValidationError {
    /// Create a new validation error.
    #[must_use]
    pub fn new(field: impl Into<String>, kind: ValidationErrorKind) -> Self {
        Self {
            field: field.into(),
            kind,
        }
    }

    /// Create an "empty" validation error.
    #[must_use]
    pub fn empty(field: impl Into<String>) -> Self {
        Self::new(field, ValidationErrorKind::Empty)
    }

    /// Create a "too long" validation error.
    #[must_use]
    pub fn too_long(field: impl Into<String>, max: usize, actual: usize) -> Self {
        Self::new(field, ValidationErrorKind::TooLong { max, actual })
    }

    /// Create an "invalid characters" validation error.
    #[must_use]
    pub fn invalid_characters(
        field: impl Into<String>,
        found: impl Into<String>,
        allowed: impl Into<String>,
    ) -> Self {
        Self::new(
            field,
            ValidationErrorKind::InvalidCharacters {
                found: found.into(),
                allowed: allowed.into(),
            },
        )
    }

    /// Create an "invalid format" validation error.
    #[must_use]
    pub fn invalid_format(
        field: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self::new(
            field,
            ValidationErrorKind::InvalidFormat {
                expected: expected.into(),
                actual: actual.into(),
            },
        )
    }

    /// Create an "invalid address" validation error.
    #[must_use]
    pub fn invalid_address(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::new(
            field,
            ValidationErrorKind::InvalidAddress {
                value: value.into(),
                reason: reason.into(),
            },
        )
    }

    /// Create an "invalid subnet" validation error.
    #[must_use]
    pub fn invalid_subnet(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::new(
            field,
            ValidationErrorKind::InvalidSubnet {
                value: value.into(),
                reason: reason.into(),
            },
        )
    }

    /// Create an "invalid number" validation error.
    #[must_use]
    pub fn invalid_number(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(
            field,
            ValidationErrorKind::InvalidNumber {
                value: value.into(),
            },
        )
    }

    /// Create an "out of range" validation error.
    #[must_use]
    pub fn out_of_range(field: impl Into<String>, min: u64, max: u64, actual: u64) -> Self {
        Self::new(field, ValidationErrorKind::OutOfRange { min, max, actual })
    }

    /// Check if this is an empty error.
    #[must_use]
    pub fn is_empty_error(&self) -> bool {
        matches!(self.kind, ValidationErrorKind::Empty)
    }

    /// Check if the value was rejected as an IPv4 address.
    #[must_use]
    pub fn is_address_error(&self) -> bool {
        matches!(self.kind, ValidationErrorKind::InvalidAddress { .. })
    }

    /// Check if the value was rejected as a CIDR subnet.
    #[must_use]
    pub fn is_subnet_error(&self) -> bool {
        matches!(self.kind, ValidationErrorKind::InvalidSubnet { .. })
    }

    /// Check if a numeric parameter was missing, malformed or out of range.
    #[must_use]
    pub fn is_numeric_error(&self) -> bool {
        matches!(
            self.kind,
            ValidationErrorKind::InvalidNumber { .. } | ValidationErrorKind::OutOfRange { .. }
        )
    }

    /// The message without the field prefix, for display next to a form field.
    #[must_use]
    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}
