//! # routerwg-cli
//!
//! Command-line host for the RouterOS WireGuard generator.
//!
//! Provides commands for:
//! - Generating the master and client scripts for one tunnel
//! - Checking a tunnel form without generating keys
//! - Producing a single key pair
//!
//! Settings are read from the file named by `--config` or
//! `ROUTERWG_CONFIG`; without one the built-in defaults apply.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod cli;
pub mod commands;
pub mod error;
pub mod output;

pub use cli::{Cli, Commands, FormArgs, Format};
pub use error::CliError;
pub use output::OutputFormat;
