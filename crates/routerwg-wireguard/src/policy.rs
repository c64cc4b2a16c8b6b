//! Script shape settings.
//!
//! A [`ScriptPolicy`] fixes the choices a RouterOS tunnel script has to
//! make that the form does not ask about: the tunnel prefix length, what
//! the LAN route points at, and so on. The defaults are the canonical
//! layout; settings files may override them.

use serde::{Deserialize, Serialize};

use crate::error::{Result, WireGuardError};

/// Default prefix length on the tunnel interface address.
pub const DEFAULT_INTERFACE_PREFIX_LEN: u8 = 30;

/// Default WireGuard interface MTU on RouterOS.
pub const DEFAULT_MTU: u16 = 1420;

/// Smallest MTU that still carries IPv6, and the floor RouterOS accepts.
pub const MIN_MTU: u16 = 1280;

/// What the route to the remote LAN uses as its gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RouteGateway {
    /// The remote router's tunnel address.
    #[default]
    PeerAddress,
    /// The local WireGuard interface.
    Interface,
}

/// What the peer entry lists under `allowed-address`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AllowedAddress {
    /// `0.0.0.0/0`; routing alone decides what enters the tunnel.
    #[default]
    Any,
    /// The remote tunnel address and the remote LAN only.
    PeerNetworks,
}

/// Settings that shape the generated script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScriptPolicy {
    /// Prefix length on `/ip address add`.
    pub interface_prefix_len: u8,
    /// Gateway of the LAN route.
    pub route_gateway: RouteGateway,
    /// Interface MTU.
    pub mtu: u16,
    /// Peer `allowed-address` contents.
    pub allowed_address: AllowedAddress,
    /// Emit an input-chain accept rule for the listen port on the master.
    pub firewall_rule: bool,
    /// Emit `#` comment lines.
    pub comments: bool,
}

impl Default for ScriptPolicy {
    fn default() -> Self {
        Self {
            interface_prefix_len: DEFAULT_INTERFACE_PREFIX_LEN,
            route_gateway: RouteGateway::default(),
            mtu: DEFAULT_MTU,
            allowed_address: AllowedAddress::default(),
            firewall_rule: false,
            comments: true,
        }
    }
}

impl ScriptPolicy {
    /// Checks the policy values.
    ///
    /// # Errors
    ///
    /// Returns [`WireGuardError::InvalidPolicy`] if the prefix length is not
    /// in 1-32 or the MTU is below 1280.
    pub fn validate(&self) -> Result<()> {
        if self.interface_prefix_len == 0 || self.interface_prefix_len > 32 {
            return Err(WireGuardError::InvalidPolicy(format!(
                "interface_prefix_len must be in 1-32, got {}",
                self.interface_prefix_len
            )));
        }
        if self.mtu < MIN_MTU {
            return Err(WireGuardError::InvalidPolicy(format!(
                "mtu must be at least {MIN_MTU}, got {}",
                self.mtu
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy_is_canonical() {
        let policy = ScriptPolicy::default();
        assert_eq!(policy.interface_prefix_len, 30);
        assert_eq!(policy.route_gateway, RouteGateway::PeerAddress);
        assert_eq!(policy.mtu, 1420);
        assert_eq!(policy.allowed_address, AllowedAddress::Any);
        assert!(!policy.firewall_rule);
        assert!(policy.comments);
        assert!(policy.validate().is_ok());
    }

    #[test]
    fn validate_rejects_bad_prefix() {
        let mut policy = ScriptPolicy::default();
        policy.interface_prefix_len = 0;
        assert!(policy.validate().is_err());
        policy.interface_prefix_len = 33;
        assert!(policy.validate().is_err());
        policy.interface_prefix_len = 24;
        assert!(policy.validate().is_ok());
    }

    #[test]
    fn validate_rejects_small_mtu() {
        let policy = ScriptPolicy {
            mtu: 576,
            ..ScriptPolicy::default()
        };
        let err = policy.validate().expect_err("mtu too small");
        assert!(err.to_string().contains("mtu"));
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let policy: ScriptPolicy =
            serde_json::from_str(r#"{"route_gateway": "interface"}"#).expect("deserialize");
        assert_eq!(policy.route_gateway, RouteGateway::Interface);
        assert_eq!(policy.interface_prefix_len, DEFAULT_INTERFACE_PREFIX_LEN);
    }
}
