//! Generate command implementation.

use std::io::Write;

use routerwg_generator::{FormDefaults, Generator, GeneratorSettings, SubmitResponse};
use routerwg_wireguard::{KeySource, OsKeySource};

use crate::cli::FormArgs;
use crate::error::CliError;
use crate::output::OutputFormat;

/// Generate command executor.
pub struct GenerateCommand<K = OsKeySource> {
    generator: Generator<K>,
    defaults: FormDefaults,
}

impl GenerateCommand<OsKeySource> {
    /// Create a generate command from loaded settings.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::Config`] if the script policy is unusable.
    pub fn new(settings: &GeneratorSettings) -> Result<Self, CliError> {
        Ok(Self {
            generator: Generator::from_settings(settings)?,
            defaults: settings.defaults,
        })
    }
}

impl<K: KeySource> GenerateCommand<K> {
    /// Create a generate command around an existing generator.
    #[must_use]
    pub fn with_generator(generator: Generator<K>, defaults: FormDefaults) -> Self {
        Self {
            generator,
            defaults,
        }
    }

    /// Execute the generate command.
    ///
    /// On a rejected form the validation report is written before the
    /// error is returned, so the caller only has to set the exit status.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::InvalidInput`] if the form is rejected, or
    /// [`CliError::Generate`] if key generation fails.
    pub fn execute<W: Write>(
        &self,
        writer: &mut W,
        format: &OutputFormat,
        args: &FormArgs,
    ) -> Result<(), CliError> {
        let form = args.to_form(&self.defaults);
        match self.generator.handle_submit(&form) {
            Ok(configs) => format.write(writer, &SubmitResponse::Generated(configs)),
            Err(err) if err.is_validation() => {
                let count = err.validation_errors().map_or(0, <[_]>::len);
                format.write(writer, &SubmitResponse::from_result(Err(err)))?;
                Err(CliError::InvalidInput(count))
            }
            Err(err) => Err(err.into()),
        }
    }
}
