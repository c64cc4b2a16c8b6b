//! CLI command implementations.
//!
//! Each submodule implements a specific CLI command:
//! - [`generate`] - Both tunnel scripts from a form
//! - [`validate`] - Form check without key generation
//! - [`keygen`] - A single key pair

pub mod generate;
pub mod keygen;
pub mod validate;

pub use generate::GenerateCommand;
pub use keygen::KeygenCommand;
pub use validate::ValidateCommand;
