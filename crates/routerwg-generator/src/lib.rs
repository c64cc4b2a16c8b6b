//! Tunnel form handling for RouterOS WireGuard scripts.
//!
//! Takes the nine fields of a tunnel form as text, validates all of them,
//! and on success generates a key pair per router and both RouterOS
//! scripts. On failure it returns every rejected field and nothing else.
//!
//! ```
//! use routerwg_generator::{handle_submit, FormInput};
//!
//! let form = FormInput {
//!     master_name: "R1".into(),
//!     master_ip: "10.0.0.1".into(),
//!     master_subnet: "192.168.1.0/24".into(),
//!     client_name: "R2".into(),
//!     client_ip: "10.0.0.2".into(),
//!     client_subnet: "192.168.2.0/24".into(),
//!     listen_port: "51820".into(),
//!     keepalive: "25".into(),
//!     ..FormInput::default()
//! };
//!
//! let configs = handle_submit(&form)?;
//! assert!(configs.client_config.contains("endpoint-address=10.0.0.1"));
//! # Ok::<(), routerwg_generator::GenerateError>(())
//! ```

pub mod error;
pub mod form;
pub mod orchestrator;
pub mod settings;

pub use error::{GenerateError, SettingsError};
pub use form::{FormField, FormInput, PeerSpec, ValidatedForm};
pub use orchestrator::{handle_submit, FieldMessage, GeneratedConfigs, Generator, SubmitResponse};
pub use settings::{FormDefaults, GeneratorSettings, DEFAULT_KEEPALIVE_SECONDS, DEFAULT_LISTEN_PORT};
