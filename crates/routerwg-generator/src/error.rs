//! Error types for the generator.

use std::fmt;
use std::path::PathBuf;

use routerwg_validation::ValidationError;
use routerwg_wireguard::WireGuardError;
use thiserror::Error;

/// Errors that can occur while handling a form submission.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// One or more form fields were rejected. Nothing was generated.
    #[error("{}", ValidationReport(.0))]
    Validation(Vec<ValidationError>),

    /// The key pair provider failed.
    #[error("key generation failed: {0}")]
    KeyGeneration(#[source] WireGuardError),

    /// Tunnel parameters were rejected after validation.
    #[error("invalid tunnel parameters: {0}")]
    Parameters(#[source] WireGuardError),

    /// The configured script policy is unusable.
    #[error("invalid script policy: {0}")]
    Policy(#[source] WireGuardError),
}

impl GenerateError {
    /// Returns the field errors if this is a validation failure.
    #[must_use]
    pub fn validation_errors(&self) -> Option<&[ValidationError]> {
        match self {
            Self::Validation(errors) => Some(errors),
            _ => None,
        }
    }

    /// Returns `true` if the submission was rejected by validation.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

struct ValidationReport<'a>(&'a [ValidationError]);

impl fmt::Display for ValidationReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} invalid field(s)", self.0.len())?;
        for error in self.0 {
            write!(f, "\n  {error}")?;
        }
        Ok(())
    }
}

/// Errors that can occur while loading generator settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The settings file could not be read.
    #[error("failed to read settings file '{}': {source}", path.display())]
    Read {
        /// File that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The settings file is not valid TOML or has unknown keys.
    #[error("invalid settings TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// A setting has an unusable value.
    #[error("invalid settings: {0}")]
    Invalid(String),
}

/// Result type for settings operations.
pub type SettingsResult<T> = std::result::Result<T, SettingsError>;
