//! Validate command implementation.

use std::io::Write;

use routerwg_generator::{FormDefaults, GeneratorSettings};
use routerwg_wireguard::ScriptPolicy;
use tracing::debug;

use crate::cli::FormArgs;
use crate::error::CliError;
use crate::output::{OutputFormat, ValidationReport};

/// Validate command executor.
pub struct ValidateCommand {
    defaults: FormDefaults,
    policy: ScriptPolicy,
}

impl ValidateCommand {
    /// Create a validate command from loaded settings.
    ///
    /// The script policy takes part in validation: with the default
    /// gateway the client address must share the master tunnel subnet.
    #[must_use]
    pub fn new(settings: &GeneratorSettings) -> Self {
        Self {
            defaults: settings.defaults,
            policy: settings.script.clone(),
        }
    }

    /// Execute the validate command.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::InvalidInput`] after writing the report if any
    /// field is rejected.
    pub fn execute<W: Write>(
        &self,
        writer: &mut W,
        format: &OutputFormat,
        args: &FormArgs,
    ) -> Result<(), CliError> {
        let form = args.to_form(&self.defaults);
        let errors = form.validate_with(&self.policy).err().unwrap_or_default();
        debug!(rejected = errors.len(), "form checked");

        let report = ValidationReport::from_errors(&errors);
        format.write(writer, &report)?;

        if report.valid {
            Ok(())
        } else {
            Err(CliError::InvalidInput(errors.len()))
        }
    }
}
