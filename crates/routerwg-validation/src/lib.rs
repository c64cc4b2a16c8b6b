//! Input validation for routerwg tunnel parameters.
//!
//! Every value that ends up in a generated RouterOS script passes through
//! this crate first. The script synthesizer interpolates values verbatim,
//! so the validators here are the only line of defence against malformed
//! or injected statements.
//!
//! # Network Values
//!
//! ```
//! use routerwg_validation::{is_valid_ipv4, is_valid_subnet, validate_subnet};
//!
//! assert!(is_valid_ipv4("192.168.1.1"));
//! assert!(!is_valid_ipv4("256.1.1.1"));
//! assert!(is_valid_subnet("10.0.0.0/24"));
//!
//! let lan = validate_subnet("lan", "192.168.88.0/24")?;
//! assert_eq!(lan.prefix_len(), 24);
//! # Ok::<(), routerwg_validation::ValidationError>(())
//! ```
//!
//! # Collecting Errors
//!
//! Forms are validated as a batch so that every problem can be reported at
//! once. [`ValidationBuilder`] records each failure and hands back the
//! parsed value for the checks that passed:
//!
//! ```
//! use routerwg_validation::{validate_ipv4, validate_port, ValidationBuilder};
//!
//! let mut builder = ValidationBuilder::new();
//! let ip = builder.check(validate_ipv4("ip", "10.0.0.1"));
//! let port = builder.check(validate_port("port", "0"));
//!
//! assert!(ip.is_some());
//! assert!(port.is_none());
//! assert_eq!(builder.error_count(), 1);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod builder;
mod error;
mod network;
mod numeric;
mod strings;

pub use builder::ValidationBuilder;
pub use error::{ValidationError, ValidationErrorKind};
pub use network::{is_valid_ipv4, is_valid_subnet, validate_ipv4, validate_subnet};
pub use numeric::{validate_keepalive, validate_port};
pub use strings::{validate_hostname, validate_router_name};

/// Maximum length for router (interface) names.
pub const MAX_ROUTER_NAME_LENGTH: usize = 64;

/// Maximum length for hostnames (RFC 1035).
pub const MAX_HOSTNAME_LENGTH: usize = 253;

/// Largest IPv4 prefix length.
pub const MAX_IPV4_PREFIX_LEN: u8 = 32;

/// Largest accepted keepalive interval in seconds.
pub const MAX_KEEPALIVE_SECONDS: u16 = u16::MAX;

#[cfg(test)]
mod tests;
