//! Generator settings.
//!
//! Settings come from an optional TOML file:
//!
//! ```toml
//! [script]
//! interface_prefix_len = 30
//! route_gateway = "peer-address"
//! mtu = 1420
//! allowed_address = "any"
//! firewall_rule = false
//! comments = true
//!
//! [defaults]
//! listen_port = 51820
//! keepalive = 25
//! ```
//!
//! Every key is optional. Unknown keys are rejected so typos surface.

use std::path::Path;

use routerwg_wireguard::ScriptPolicy;
use serde::{Deserialize, Serialize};

use crate::error::{SettingsError, SettingsResult};

/// Default WireGuard listen port.
pub const DEFAULT_LISTEN_PORT: u16 = 51820;

/// Default persistent keepalive in seconds.
pub const DEFAULT_KEEPALIVE_SECONDS: u16 = 25;

/// Values used for form fields the user leaves out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormDefaults {
    /// Listen port.
    pub listen_port: u16,
    /// Keepalive interval in seconds.
    pub keepalive: u16,
}

impl Default for FormDefaults {
    fn default() -> Self {
        Self {
            listen_port: DEFAULT_LISTEN_PORT,
            keepalive: DEFAULT_KEEPALIVE_SECONDS,
        }
    }
}

/// All generator settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorSettings {
    /// Script layout choices.
    pub script: ScriptPolicy,
    /// Form defaults.
    pub defaults: FormDefaults,
}

impl GeneratorSettings {
    /// Load settings from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn from_file(path: impl AsRef<Path>) -> SettingsResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_toml(&content)
    }

    /// Parse settings from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid or a value is out of range.
    pub fn from_toml(content: &str) -> SettingsResult<Self> {
        let settings: Self = toml::from_str(content)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Validate the settings.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Invalid`] naming the first bad value.
    pub fn validate(&self) -> SettingsResult<()> {
        self.script
            .validate()
            .map_err(|e| SettingsError::Invalid(e.to_string()))?;

        if self.defaults.listen_port == 0 {
            return Err(SettingsError::Invalid(
                "defaults.listen_port must be greater than 0".to_string(),
            ));
        }

        if self.defaults.keepalive == 0 {
            return Err(SettingsError::Invalid(
                "defaults.keepalive must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
