//! WireGuard key types and RouterOS tunnel script synthesis.
//!
//! This crate holds the pieces that turn two validated peers into two
//! RouterOS scripts:
//!
//! - [`keys`]: Curve25519 key pairs from the OS CSPRNG
//! - [`types`]: peers, roles and shared tunnel parameters
//! - [`policy`]: fixed choices about the script layout
//! - [`script`]: the synthesizer itself
//!
//! ```
//! use std::net::Ipv4Addr;
//! use routerwg_wireguard::{generate_config, KeyPair, PeerConfig, Role, ScriptPolicy, TunnelParameters};
//!
//! let master = PeerConfig::new("R1", Ipv4Addr::new(10, 0, 0, 1), "192.168.1.0/24".parse()?, KeyPair::generate()?, Role::Initiator);
//! let client = PeerConfig::new("R2", Ipv4Addr::new(10, 0, 0, 2), "192.168.2.0/24".parse()?, KeyPair::generate()?, Role::Responder);
//! let params = TunnelParameters::new(51820, 25)?;
//!
//! let script = generate_config(&client, &master.counterpart(), &params, &ScriptPolicy::default());
//! assert!(script.contains("persistent-keepalive=25s"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod error;
pub mod keys;
pub mod policy;
pub mod script;
pub mod types;

pub use error::{Result, WireGuardError};
pub use keys::{generate_keypair, KeyPair, KeySource, OsKeySource, PrivateKey, PublicKey, KEY_SIZE};
pub use policy::{AllowedAddress, RouteGateway, ScriptPolicy};
pub use script::generate_config;
pub use types::{Counterpart, PeerConfig, Role, TunnelParameters};
