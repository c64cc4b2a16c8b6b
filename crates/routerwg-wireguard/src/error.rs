//! Error types for WireGuard key and script operations.

use thiserror::Error;

/// Errors that can occur during WireGuard key and script operations.
#[derive(Debug, Error)]
pub enum WireGuardError {
    /// Invalid key format.
    #[error("invalid key: {0}")]
    InvalidKey(String),

    /// Invalid base64 encoding.
    #[error("invalid base64 encoding: {0}")]
    InvalidBase64(String),

    /// Invalid key length.
    #[error("invalid key length: expected 32, got {0}")]
    InvalidKeyLength(usize),

    /// The operating system entropy source failed.
    #[error("entropy source unavailable: {0}")]
    Entropy(String),

    /// A tunnel parameter was outside its allowed range.
    #[error("invalid tunnel parameter: {0}")]
    InvalidParameter(String),

    /// A script policy setting was outside its allowed range.
    #[error("invalid script policy: {0}")]
    InvalidPolicy(String),
}

impl From<base64::DecodeError> for WireGuardError {
    fn from(err: base64::DecodeError) -> Self {
        Self::InvalidBase64(err.to_string())
    }
}

/// Result type for WireGuard operations.
pub type Result<T> = std::result::Result<T, WireGuardError>;
