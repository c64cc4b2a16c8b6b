//! Command-line argument parsing with clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use routerwg_generator::{FormDefaults, FormInput, GeneratorSettings};
use tracing::debug;

use crate::error::CliError;

/// routerwg - WireGuard tunnel scripts for MikroTik RouterOS.
#[derive(Parser, Debug, Clone)]
#[command(name = "routerwg")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Settings file (TOML).
    #[arg(short, long, env = "ROUTERWG_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = Format::Table)]
    pub format: Format,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Loads the settings file, or the defaults when none is given.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::Config`] if the file cannot be read or is invalid.
    pub fn settings(&self) -> Result<GeneratorSettings, CliError> {
        match &self.config {
            Some(path) => {
                debug!(path = %path.display(), "loading settings");
                Ok(GeneratorSettings::from_file(path)?)
            }
            None => Ok(GeneratorSettings::default()),
        }
    }
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Format {
    /// Human-readable output.
    #[default]
    Table,
    /// JSON output for scripting.
    Json,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Generate the master and client scripts for one tunnel.
    Generate(FormArgs),

    /// Check a tunnel form without generating keys.
    Validate(FormArgs),

    /// Generate a single WireGuard key pair.
    Keygen,
}

/// The tunnel form as command-line flags.
///
/// Values are taken as text and checked by the validator, so a bad value
/// shows up in the validation report alongside every other problem.
#[derive(Args, Debug, Clone, Default)]
pub struct FormArgs {
    /// Master router name.
    #[arg(long)]
    pub master_name: Option<String>,

    /// Master router tunnel IP address.
    #[arg(long)]
    pub master_ip: Option<String>,

    /// Public hostname the client dials instead of the master IP.
    #[arg(long)]
    pub master_fqdn: Option<String>,

    /// Master LAN subnet (CIDR).
    #[arg(long)]
    pub master_subnet: Option<String>,

    /// Client router name.
    #[arg(long)]
    pub client_name: Option<String>,

    /// Client router tunnel IP address.
    #[arg(long)]
    pub client_ip: Option<String>,

    /// Client LAN subnet (CIDR).
    #[arg(long)]
    pub client_subnet: Option<String>,

    /// WireGuard listen port [default: from settings, 51820].
    #[arg(long)]
    pub listen_port: Option<String>,

    /// Client persistent keepalive in seconds [default: from settings, 25].
    #[arg(long)]
    pub keepalive: Option<String>,
}

impl FormArgs {
    /// Builds the raw form, filling port and keepalive from `defaults`.
    #[must_use]
    pub fn to_form(&self, defaults: &FormDefaults) -> FormInput {
        FormInput {
            master_name: self.master_name.clone().unwrap_or_default(),
            master_ip: self.master_ip.clone().unwrap_or_default(),
            master_fqdn: self.master_fqdn.clone().unwrap_or_default(),
            master_subnet: self.master_subnet.clone().unwrap_or_default(),
            client_name: self.client_name.clone().unwrap_or_default(),
            client_ip: self.client_ip.clone().unwrap_or_default(),
            client_subnet: self.client_subnet.clone().unwrap_or_default(),
            listen_port: self
                .listen_port
                .clone()
                .unwrap_or_else(|| defaults.listen_port.to_string()),
            keepalive: self
                .keepalive
                .clone()
                .unwrap_or_else(|| defaults.keepalive.to_string()),
        }
    }
}
