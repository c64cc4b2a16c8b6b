//! Router name and hostname validation.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::ValidationError;
use crate::network::is_valid_ipv4;
use crate::{MAX_HOSTNAME_LENGTH, MAX_ROUTER_NAME_LENGTH};

/// Regex for router names usable as RouterOS interface names.
static ROUTER_NAME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9][a-zA-Z0-9_.-]*$").unwrap_or_else(|_| unreachable!()));

/// Regex for valid hostnames (RFC 1123): labels of 1-63 characters.
static HOSTNAME_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9]([a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(\.[a-zA-Z0-9]([a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .unwrap_or_else(|_| unreachable!())
});

/// Validate a router name.
///
/// The name becomes the WireGuard interface name and is written unquoted
/// into the script. Names must:
/// - Be 1-64 characters
/// - Start with alphanumeric
/// - Contain only alphanumeric, hyphens, underscores and dots
///
/// # Errors
///
/// Returns `ValidationError` if the name is invalid.
///
/// # Example
///
/// ```
/// use routerwg_validation::validate_router_name;
///
/// assert!(validate_router_name("master_name", "wg-office").is_ok());
/// assert!(validate_router_name("master_name", "wg office").is_err());
/// ```
pub fn validate_router_name(field: &str, name: &str) -> Result<String, ValidationError> {
    if name.is_empty() {
        return Err(ValidationError::empty(field));
    }

    if name.len() > MAX_ROUTER_NAME_LENGTH {
        return Err(ValidationError::too_long(field, MAX_ROUTER_NAME_LENGTH, name.len()));
    }

    if !ROUTER_NAME_REGEX.is_match(name) {
        let found: String = name
            .chars()
            .filter(|c| !(c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.')))
            .collect();
        if found.is_empty() {
            return Err(ValidationError::invalid_format(
                field,
                "name starting with a letter or digit",
                name,
            ));
        }
        return Err(ValidationError::invalid_characters(
            field,
            found,
            "alphanumeric, '-', '_', '.'",
        ));
    }

    Ok(name.to_string())
}

/// Validate a hostname or IPv4 literal used as a tunnel endpoint.
///
/// # Errors
///
/// Returns `ValidationError` if the value is neither an RFC 1123 hostname
/// nor a strict IPv4 address.
pub fn validate_hostname(field: &str, hostname: &str) -> Result<String, ValidationError> {
    if hostname.is_empty() {
        return Err(ValidationError::empty(field));
    }

    if hostname.len() > MAX_HOSTNAME_LENGTH {
        return Err(ValidationError::too_long(field, MAX_HOSTNAME_LENGTH, hostname.len()));
    }

    // All-numeric labels look like an address; accept only a real one.
    let numeric = hostname.bytes().all(|b| b.is_ascii_digit() || b == b'.');
    if numeric {
        if is_valid_ipv4(hostname) {
            return Ok(hostname.to_string());
        }
        return Err(ValidationError::invalid_format(
            field,
            "RFC 1123 hostname or IPv4 address",
            hostname,
        ));
    }

    if !HOSTNAME_REGEX.is_match(hostname) {
        return Err(ValidationError::invalid_format(
            field,
            "RFC 1123 hostname or IPv4 address",
            hostname,
        ));
    }

    Ok(hostname.to_lowercase())
}
