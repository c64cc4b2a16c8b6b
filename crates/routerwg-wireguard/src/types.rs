//! Core types for a two-peer tunnel.

use std::fmt;
use std::net::Ipv4Addr;

use ipnet::Ipv4Net;
use serde::{Deserialize, Serialize};

use crate::error::{Result, WireGuardError};
use crate::keys::{KeyPair, PublicKey};

/// Which side of the tunnel a peer is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// The "Master" router. Accepts the connection and never dials out.
    Initiator,
    /// The "Client" router. Dials the master and keeps the tunnel alive.
    Responder,
}

impl Role {
    /// Returns `true` for the master side.
    #[must_use]
    pub const fn is_initiator(self) -> bool {
        matches!(self, Self::Initiator)
    }

    /// Short label used in scripts and output.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Initiator => "master",
            Self::Responder => "client",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Settings shared by both ends of the tunnel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TunnelParameters {
    listen_port: u16,
    keepalive_seconds: u16,
}

impl TunnelParameters {
    /// Creates tunnel parameters.
    ///
    /// # Errors
    ///
    /// Returns [`WireGuardError::InvalidParameter`] if either value is zero.
    pub fn new(listen_port: u16, keepalive_seconds: u16) -> Result<Self> {
        if listen_port == 0 {
            return Err(WireGuardError::InvalidParameter(
                "listen port must be in 1-65535".to_string(),
            ));
        }
        if keepalive_seconds == 0 {
            return Err(WireGuardError::InvalidParameter(
                "keepalive must be a positive number of seconds".to_string(),
            ));
        }
        Ok(Self {
            listen_port,
            keepalive_seconds,
        })
    }

    /// UDP port the master listens on and the client dials.
    #[must_use]
    pub const fn listen_port(&self) -> u16 {
        self.listen_port
    }

    /// Persistent keepalive sent by the client.
    #[must_use]
    pub const fn keepalive_seconds(&self) -> u16 {
        self.keepalive_seconds
    }
}

/// One router taking part in the tunnel, including its own key pair.
#[derive(Debug, Clone)]
pub struct PeerConfig {
    /// Router name, also used as the WireGuard interface name.
    pub name: String,
    /// Address of the tunnel interface.
    pub ip: Ipv4Addr,
    /// LAN behind this router, routed through the tunnel by the other side.
    pub lan_subnet: Ipv4Net,
    /// Public hostname the other side can dial instead of `ip`.
    pub fqdn: Option<String>,
    /// This router's key pair.
    pub keys: KeyPair,
    /// Which side of the tunnel this router is on.
    pub role: Role,
}

impl PeerConfig {
    /// Creates a peer without an FQDN.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        ip: Ipv4Addr,
        lan_subnet: Ipv4Net,
        keys: KeyPair,
        role: Role,
    ) -> Self {
        Self {
            name: name.into(),
            ip,
            lan_subnet,
            fqdn: None,
            keys,
            role,
        }
    }

    /// Sets the FQDN.
    #[must_use]
    pub fn with_fqdn(mut self, fqdn: impl Into<String>) -> Self {
        self.fqdn = Some(fqdn.into());
        self
    }

    /// The view of this peer that may appear in the other router's script.
    #[must_use]
    pub fn counterpart(&self) -> Counterpart {
        Counterpart {
            name: self.name.clone(),
            ip: self.ip,
            lan_subnet: self.lan_subnet,
            fqdn: self.fqdn.clone(),
            public_key: *self.keys.public_key(),
        }
    }
}

/// The public half of a [`PeerConfig`], as seen from the other router.
///
/// Carries no private key, so it can be handed to the synthesizer for the
/// remote side without any risk of leaking secrets across documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counterpart {
    /// Router name.
    pub name: String,
    /// Address of the tunnel interface.
    pub ip: Ipv4Addr,
    /// LAN behind the router.
    pub lan_subnet: Ipv4Net,
    /// Public hostname, if any.
    pub fqdn: Option<String>,
    /// The router's public key.
    pub public_key: PublicKey,
}

impl Counterpart {
    /// Address to dial: the FQDN when present, else the tunnel IP.
    #[must_use]
    pub fn endpoint_address(&self) -> String {
        self.fqdn.clone().unwrap_or_else(|| self.ip.to_string())
    }
}
