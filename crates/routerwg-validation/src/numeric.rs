//! Numeric validation functions.
//!
//! Form values arrive as text, so these parse as well as range-check.

use crate::error::ValidationError;
use crate::MAX_KEEPALIVE_SECONDS;

/// Validate a UDP listen port.
///
/// Ports must be plain decimal digits in the range 1-65535.
///
/// # Errors
///
/// Returns `ValidationError` if the port is missing, not a number, or out
/// of range.
pub fn validate_port(field: &str, value: &str) -> Result<u16, ValidationError> {
    parse_bounded(field, value, 1, u64::from(u16::MAX))
}

/// Validate a persistent keepalive interval in seconds.
///
/// Keepalive must be a positive integer no larger than 65535.
///
/// # Errors
///
/// Returns `ValidationError` if the interval is missing, not a number, or
/// out of range.
pub fn validate_keepalive(field: &str, value: &str) -> Result<u16, ValidationError> {
    parse_bounded(field, value, 1, u64::from(MAX_KEEPALIVE_SECONDS))
}

fn parse_bounded(field: &str, value: &str, min: u64, max: u64) -> Result<u16, ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::empty(field));
    }
    if !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::invalid_number(field, value));
    }

    // All-digit strings only fail to parse on overflow.
    let parsed: u64 = value.parse().unwrap_or(u64::MAX);
    if parsed < min || parsed > max {
        return Err(ValidationError::out_of_range(field, min, max, parsed));
    }

    u16::try_from(parsed).map_err(|_| ValidationError::out_of_range(field, min, max, parsed))
}
