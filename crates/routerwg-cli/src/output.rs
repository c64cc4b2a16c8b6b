//! Output formatting for CLI commands.
//!
//! Supports table (human-readable) and JSON output formats.

use std::io::Write;

use routerwg_generator::{FieldMessage, SubmitResponse};
use routerwg_validation::ValidationError;
use routerwg_wireguard::KeyPair;
use serde::Serialize;

use crate::cli::Format;
use crate::error::CliError;

/// Output formatter that handles both table and JSON output.
#[derive(Debug, Clone)]
pub struct OutputFormat {
    format: Format,
}

impl OutputFormat {
    /// Create a new output formatter.
    #[must_use]
    pub const fn new(format: Format) -> Self {
        Self { format }
    }

    /// Write a serializable value to the output.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails.
    pub fn write<W, T>(&self, writer: &mut W, value: &T) -> Result<(), CliError>
    where
        W: Write,
        T: Serialize + TableDisplay,
    {
        match self.format {
            Format::Json => {
                serde_json::to_writer_pretty(&mut *writer, value)
                    .map_err(|e| CliError::Format(format!("JSON serialization failed: {e}")))?;
                writeln!(writer)?;
            }
            Format::Table => {
                value.write_table(writer)?;
            }
        }
        Ok(())
    }

    /// Write a serializable value to a string.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_string<T>(&self, value: &T) -> Result<String, CliError>
    where
        T: Serialize + TableDisplay,
    {
        let mut buf = Vec::new();
        self.write(&mut buf, value)?;
        String::from_utf8(buf).map_err(|e| CliError::Format(format!("UTF-8 error: {e}")))
    }
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self::new(Format::Table)
    }
}

/// Trait for types that can be displayed as a table.
pub trait TableDisplay {
    /// Write the value as human-readable text.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn write_table<W: Write>(&self, writer: &mut W) -> Result<(), CliError>;
}

const RULE: &str = "══════════════════════════════════";

impl TableDisplay for SubmitResponse {
    fn write_table<W: Write>(&self, writer: &mut W) -> Result<(), CliError> {
        match self {
            Self::Generated(configs) => {
                writeln!(writer, "Master router script")?;
                writeln!(writer, "{RULE}")?;
                write!(writer, "{}", configs.master_config)?;
                writeln!(writer)?;
                writeln!(writer, "Client router script")?;
                writeln!(writer, "{RULE}")?;
                write!(writer, "{}", configs.client_config)?;
            }
            Self::Rejected { errors } => write_field_table(writer, errors)?,
            Self::Failed { error } => writeln!(writer, "Generation failed: {error}")?,
        }
        Ok(())
    }
}

/// Result of checking a form without generating anything.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    /// Whether every field passed.
    pub valid: bool,
    /// Rejected fields, in form order.
    pub errors: Vec<FieldMessage>,
}

impl ValidationReport {
    /// Builds a report from the validator's errors.
    #[must_use]
    pub fn from_errors(errors: &[ValidationError]) -> Self {
        Self {
            valid: errors.is_empty(),
            errors: errors.iter().map(FieldMessage::from).collect(),
        }
    }
}

impl TableDisplay for ValidationReport {
    fn write_table<W: Write>(&self, writer: &mut W) -> Result<(), CliError> {
        if self.valid {
            writeln!(writer, "Form is valid")?;
            return Ok(());
        }
        write_field_table(writer, &self.errors)
    }
}

fn write_field_table<W: Write>(writer: &mut W, errors: &[FieldMessage]) -> Result<(), CliError> {
    writeln!(writer, "{:<14}  {}", "FIELD", "PROBLEM")?;
    writeln!(writer, "{}", "─".repeat(72))?;
    for error in errors {
        writeln!(writer, "{:<14}  {}", error.field, error.message)?;
    }
    writeln!(writer)?;
    writeln!(writer, "{} field(s) rejected", errors.len())?;
    Ok(())
}

/// A key pair as printed by `keygen`.
#[derive(Debug, Clone, Serialize)]
pub struct KeyPairOutput {
    /// Base64 private key.
    pub private_key: String,
    /// Base64 public key.
    pub public_key: String,
}

impl From<&KeyPair> for KeyPairOutput {
    fn from(keys: &KeyPair) -> Self {
        Self {
            private_key: keys.private_key().to_base64(),
            public_key: keys.public_key().to_base64(),
        }
    }
}

impl TableDisplay for KeyPairOutput {
    fn write_table<W: Write>(&self, writer: &mut W) -> Result<(), CliError> {
        writeln!(writer, "Private Key:  {}", self.private_key)?;
        writeln!(writer, "Public Key:   {}", self.public_key)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use routerwg_generator::GeneratedConfigs;
    use routerwg_wireguard::PrivateKey;

    fn configs() -> SubmitResponse {
        SubmitResponse::Generated(GeneratedConfigs {
            master_config: "/interface wireguard add name=R1\n".into(),
            client_config: "/interface wireguard add name=R2\n".into(),
        })
    }

    #[test]
    fn generated_table_shows_both_scripts() {
        let output = OutputFormat::new(Format::Table)
            .to_string(&configs())
            .expect("format");

        assert!(output.contains("Master router script"));
        assert!(output.contains("Client router script"));
        let master = output.find("name=R1").expect("master script");
        let client = output.find("name=R2").expect("client script");
        assert!(master < client);
    }

    #[test]
    fn generated_json_has_both_keys() {
        let output = OutputFormat::new(Format::Json)
            .to_string(&configs())
            .expect("format");
        let value: serde_json::Value = serde_json::from_str(&output).expect("valid json");

        assert_eq!(value["master_config"], "/interface wireguard add name=R1\n");
        assert_eq!(value["client_config"], "/interface wireguard add name=R2\n");
    }

    #[test]
    fn report_table_lists_fields() {
        let report = ValidationReport::from_errors(&[
            ValidationError::invalid_address("master_ip", "999.1.1.1", "octet 999 exceeds 255"),
            ValidationError::empty("client_name"),
        ]);
        let output = OutputFormat::new(Format::Table)
            .to_string(&report)
            .expect("format");

        assert!(!report.valid);
        assert!(output.contains("master_ip"));
        assert!(output.contains("octet 999 exceeds 255"));
        assert!(output.contains("2 field(s) rejected"));
    }

    #[test]
    fn empty_report_is_valid() {
        let report = ValidationReport::from_errors(&[]);
        let output = OutputFormat::default().to_string(&report).expect("format");
        assert!(report.valid);
        assert_eq!(output, "Form is valid\n");
    }

    #[test]
    fn keypair_output_json() {
        let keys = KeyPair::from_private_key(PrivateKey::from_bytes_array([7; 32]));
        let output = OutputFormat::new(Format::Json)
            .to_string(&KeyPairOutput::from(&keys))
            .expect("format");
        let value: serde_json::Value = serde_json::from_str(&output).expect("valid json");

        assert_eq!(value["private_key"], keys.private_key().to_base64());
        assert_eq!(value["public_key"], keys.public_key().to_base64());
    }
}
