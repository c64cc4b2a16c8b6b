//! Keygen command implementation.

use std::io::Write;

use routerwg_wireguard::{KeySource, OsKeySource};

use crate::error::CliError;
use crate::output::{KeyPairOutput, OutputFormat};

/// Keygen command executor.
pub struct KeygenCommand<K = OsKeySource> {
    keys: K,
}

impl KeygenCommand<OsKeySource> {
    /// Create a keygen command backed by the OS CSPRNG.
    #[must_use]
    pub const fn new() -> Self {
        Self { keys: OsKeySource }
    }
}

impl Default for KeygenCommand<OsKeySource> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: KeySource> KeygenCommand<K> {
    /// Create a keygen command with a custom key source.
    #[must_use]
    pub const fn with_key_source(keys: K) -> Self {
        Self { keys }
    }

    /// Execute the keygen command.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::Generate`] if no key can be produced.
    pub fn execute<W: Write>(&self, writer: &mut W, format: &OutputFormat) -> Result<(), CliError> {
        let keys = self
            .keys
            .generate_keypair()
            .map_err(|e| CliError::Generate(e.to_string()))?;
        format.write(writer, &KeyPairOutput::from(&keys))
    }
}
