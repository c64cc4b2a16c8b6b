//! CLI error types.

use std::fmt;

use routerwg_generator::{GenerateError, SettingsError};

/// CLI-specific errors.
#[derive(Debug)]
pub enum CliError {
    /// Settings file missing or invalid.
    Config(String),
    /// The form was rejected; the report has already been written.
    InvalidInput(usize),
    /// Key generation or script synthesis failed.
    Generate(String),
    /// Output formatting error.
    Format(String),
    /// IO error.
    Io(std::io::Error),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(msg) => write!(f, "configuration error: {msg}"),
            Self::InvalidInput(count) => write!(f, "invalid input: {count} field(s) rejected"),
            Self::Generate(msg) => write!(f, "generation failed: {msg}"),
            Self::Format(msg) => write!(f, "format error: {msg}"),
            Self::Io(e) => write!(f, "IO error: {e}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<SettingsError> for CliError {
    fn from(err: SettingsError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<GenerateError> for CliError {
    fn from(err: GenerateError) -> Self {
        match err {
            GenerateError::Validation(errors) => Self::InvalidInput(errors.len()),
            GenerateError::Policy(e) => Self::Config(e.to_string()),
            other => Self::Generate(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use routerwg_validation::ValidationError;
    use routerwg_wireguard::WireGuardError;

    #[test]
    fn cli_error_display_invalid_input() {
        let err = CliError::InvalidInput(2);
        assert_eq!(err.to_string(), "invalid input: 2 field(s) rejected");
    }

    #[test]
    fn cli_error_display_config() {
        let err = CliError::Config("bad mtu".into());
        assert_eq!(err.to_string(), "configuration error: bad mtu");
    }

    #[test]
    fn cli_error_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        let cli_err = CliError::from(io_err);
        assert!(matches!(cli_err, CliError::Io(_)));
    }

    #[test]
    fn cli_error_from_generate_error() {
        let err = CliError::from(GenerateError::Validation(vec![
            ValidationError::empty("master_name"),
            ValidationError::empty("client_name"),
        ]));
        assert!(matches!(err, CliError::InvalidInput(2)));

        let err = CliError::from(GenerateError::KeyGeneration(WireGuardError::Entropy(
            "unavailable".into(),
        )));
        assert!(matches!(err, CliError::Generate(_)));
        assert!(err.to_string().contains("key generation failed"));
    }
}
