//! The raw tunnel form and its validation.

use std::fmt;
use std::net::Ipv4Addr;

use ipnet::Ipv4Net;
use routerwg_validation::{
    validate_hostname, validate_ipv4, validate_keepalive, validate_port, validate_router_name,
    validate_subnet, ValidationBuilder, ValidationError,
};
use routerwg_wireguard::{KeyPair, PeerConfig, Role, RouteGateway, ScriptPolicy};
use serde::{Deserialize, Serialize};

/// Identifies one input of the tunnel form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    /// Master router name.
    MasterName,
    /// Master tunnel address.
    MasterIp,
    /// Master public hostname.
    MasterFqdn,
    /// Master LAN subnet.
    MasterSubnet,
    /// Client router name.
    ClientName,
    /// Client tunnel address.
    ClientIp,
    /// Client LAN subnet.
    ClientSubnet,
    /// Shared listen port.
    ListenPort,
    /// Client keepalive interval.
    Keepalive,
}

impl FormField {
    /// Every field, in form order.
    pub const ALL: [Self; 9] = [
        Self::MasterName,
        Self::MasterIp,
        Self::MasterFqdn,
        Self::MasterSubnet,
        Self::ClientName,
        Self::ClientIp,
        Self::ClientSubnet,
        Self::ListenPort,
        Self::Keepalive,
    ];

    /// Identifier carried in [`ValidationError::field`].
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MasterName => "master_name",
            Self::MasterIp => "master_ip",
            Self::MasterFqdn => "master_fqdn",
            Self::MasterSubnet => "master_subnet",
            Self::ClientName => "client_name",
            Self::ClientIp => "client_ip",
            Self::ClientSubnet => "client_subnet",
            Self::ListenPort => "listen_port",
            Self::Keepalive => "keepalive",
        }
    }

    /// Human-readable label for error messages.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::MasterName => "Master router name",
            Self::MasterIp => "Master router IP address",
            Self::MasterFqdn => "Master router FQDN",
            Self::MasterSubnet => "Master LAN subnet",
            Self::ClientName => "Client router name",
            Self::ClientIp => "Client router IP address",
            Self::ClientSubnet => "Client LAN subnet",
            Self::ListenPort => "Listen port",
            Self::Keepalive => "Persistent keepalive",
        }
    }

    /// Looks a field up by its identifier.
    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.as_str() == id)
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The tunnel form exactly as submitted, every value still text.
///
/// `master_fqdn` may be empty, meaning the client dials `master_ip`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormInput {
    /// Master router name.
    pub master_name: String,
    /// Master tunnel address.
    pub master_ip: String,
    /// Master public hostname, or empty.
    pub master_fqdn: String,
    /// Master LAN subnet in CIDR notation.
    pub master_subnet: String,
    /// Client router name.
    pub client_name: String,
    /// Client tunnel address.
    pub client_ip: String,
    /// Client LAN subnet in CIDR notation.
    pub client_subnet: String,
    /// Listen port.
    pub listen_port: String,
    /// Keepalive interval in seconds.
    pub keepalive: String,
}

impl FormInput {
    /// Validates every field against the default script policy.
    ///
    /// # Errors
    ///
    /// See [`FormInput::validate_with`].
    pub fn validate(&self) -> Result<ValidatedForm, Vec<ValidationError>> {
        self.validate_with(&ScriptPolicy::default())
    }

    /// Validates every field and returns the typed form.
    ///
    /// All fields are checked even after a failure, so the error list is
    /// complete. When the LAN routes use the peer address as gateway, the
    /// client address must lie in the master's tunnel subnet
    /// (`master_ip/interface_prefix_len`), or neither route would resolve.
    ///
    /// # Errors
    ///
    /// Returns every [`ValidationError`] found, each tagged with its
    /// [`FormField`] identifier.
    pub fn validate_with(
        &self,
        policy: &ScriptPolicy,
    ) -> Result<ValidatedForm, Vec<ValidationError>> {
        use FormField as F;

        let mut builder = ValidationBuilder::new();

        let master_name = builder.check(validate_router_name(F::MasterName.as_str(), &self.master_name));
        let master_ip = builder.check(validate_ipv4(F::MasterIp.as_str(), &self.master_ip));
        let master_fqdn = if self.master_fqdn.is_empty() {
            Some(None)
        } else {
            builder
                .check(validate_hostname(F::MasterFqdn.as_str(), &self.master_fqdn))
                .map(Some)
        };
        let master_subnet = builder.check(validate_subnet(F::MasterSubnet.as_str(), &self.master_subnet));
        let client_name = builder.check(validate_router_name(F::ClientName.as_str(), &self.client_name));
        let client_ip = builder.check(validate_ipv4(F::ClientIp.as_str(), &self.client_ip));
        let client_subnet = builder.check(validate_subnet(F::ClientSubnet.as_str(), &self.client_subnet));
        let listen_port = builder.check(validate_port(F::ListenPort.as_str(), &self.listen_port));
        let keepalive = builder.check(validate_keepalive(F::Keepalive.as_str(), &self.keepalive));

        if let (Some(master), Some(client)) = (master_ip, client_ip) {
            if master == client {
                builder.record(ValidationError::invalid_address(
                    F::ClientIp.as_str(),
                    &self.client_ip,
                    "must differ from the master router address",
                ));
            } else if policy.route_gateway == RouteGateway::PeerAddress {
                let prefix = policy.interface_prefix_len;
                let shared = Ipv4Net::new(master, prefix).is_ok_and(|net| net.contains(&client));
                if !shared {
                    builder.record(ValidationError::invalid_address(
                        F::ClientIp.as_str(),
                        &self.client_ip,
                        format!("must be in the master tunnel subnet {master}/{prefix}"),
                    ));
                }
            }
        }

        match (
            master_name,
            master_ip,
            master_fqdn,
            master_subnet,
            client_name,
            client_ip,
            client_subnet,
            listen_port,
            keepalive,
        ) {
            (
                Some(master_name),
                Some(master_ip),
                Some(master_fqdn),
                Some(master_subnet),
                Some(client_name),
                Some(client_ip),
                Some(client_subnet),
                Some(listen_port),
                Some(keepalive),
            ) if !builder.has_errors() => Ok(ValidatedForm {
                master: PeerSpec {
                    name: master_name,
                    ip: master_ip,
                    lan_subnet: master_subnet,
                    fqdn: master_fqdn,
                },
                client: PeerSpec {
                    name: client_name,
                    ip: client_ip,
                    lan_subnet: client_subnet,
                    fqdn: None,
                },
                listen_port,
                keepalive,
            }),
            _ => Err(builder.into_errors()),
        }
    }
}

/// One router as described by a validated form, before it has keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeerSpec {
    /// Router name.
    pub name: String,
    /// Tunnel address.
    pub ip: Ipv4Addr,
    /// LAN subnet.
    pub lan_subnet: Ipv4Net,
    /// Public hostname.
    pub fqdn: Option<String>,
}

impl PeerSpec {
    /// Attaches a key pair and a role.
    #[must_use]
    pub fn into_peer(self, keys: KeyPair, role: Role) -> PeerConfig {
        PeerConfig {
            name: self.name,
            ip: self.ip,
            lan_subnet: self.lan_subnet,
            fqdn: self.fqdn,
            keys,
            role,
        }
    }
}

/// A form whose every field passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedForm {
    /// The master router.
    pub master: PeerSpec,
    /// The client router.
    pub client: PeerSpec,
    /// Listen port.
    pub listen_port: u16,
    /// Keepalive interval in seconds.
    pub keepalive: u16,
}
