//! RouterOS script generation.
//!
//! Produces the terminal commands that create one end of the tunnel on a
//! MikroTik router. Values are written verbatim; callers must pass
//! validated names and hostnames.

use std::fmt::Write as FmtWrite;

use tracing::debug;

use crate::policy::{AllowedAddress, RouteGateway, ScriptPolicy};
use crate::types::{Counterpart, PeerConfig, TunnelParameters};

/// Generates the RouterOS script for `local`, talking to `remote`.
///
/// The shape depends on `local.role`: the initiator's peer entry has no
/// endpoint and no keepalive, the responder's dials `remote` and keeps the
/// tunnel open. Statements are emitted in a fixed order: interface, peer,
/// address, route, then the optional firewall rule.
#[must_use]
pub fn generate_config(
    local: &PeerConfig,
    remote: &Counterpart,
    params: &TunnelParameters,
    policy: &ScriptPolicy,
) -> String {
    debug!(router = %local.name, role = %local.role, "synthesizing tunnel script");

    let mut output = String::new();
    let name = &local.name;

    if policy.comments {
        let _ = writeln!(output, "# WireGuard configuration for {name}");
    }

    let _ = writeln!(
        output,
        "/interface wireguard add listen-port={} mtu={} name={name} private-key=\"{}\"",
        params.listen_port(),
        policy.mtu,
        local.keys.private_key().to_base64()
    );

    output.push_str(&peer_statement(local, remote, params, policy));
    output.push('\n');

    let _ = writeln!(
        output,
        "/ip address add address={}/{} interface={name}",
        local.ip, policy.interface_prefix_len
    );

    if policy.comments {
        output.push('\n');
        let _ = writeln!(output, "# Route to {} LAN", remote.name);
    }
    let gateway = match policy.route_gateway {
        RouteGateway::PeerAddress => remote.ip.to_string(),
        RouteGateway::Interface => name.clone(),
    };
    let _ = writeln!(
        output,
        "/ip route add dst-address={} gateway={gateway}",
        remote.lan_subnet
    );

    if policy.firewall_rule && local.role.is_initiator() {
        if policy.comments {
            output.push('\n');
            let _ = writeln!(output, "# Allow WireGuard handshakes from {}", remote.name);
        }
        let _ = writeln!(
            output,
            "/ip firewall filter add action=accept chain=input dst-port={} protocol=udp comment=\"wireguard {name}\"",
            params.listen_port()
        );
    }

    output
}

fn peer_statement(
    local: &PeerConfig,
    remote: &Counterpart,
    params: &TunnelParameters,
    policy: &ScriptPolicy,
) -> String {
    let allowed = match policy.allowed_address {
        AllowedAddress::Any => "0.0.0.0/0".to_string(),
        AllowedAddress::PeerNetworks => format!("{}/32,{}", remote.ip, remote.lan_subnet),
    };

    let mut line = format!("/interface wireguard peers add allowed-address={allowed}");

    if !local.role.is_initiator() {
        let _ = write!(
            line,
            " endpoint-address={} endpoint-port={}",
            remote.endpoint_address(),
            params.listen_port()
        );
    }

    let _ = write!(
        line,
        " interface={} public-key=\"{}\"",
        local.name, remote.public_key
    );

    if !local.role.is_initiator() {
        let _ = write!(line, " persistent-keepalive={}s", params.keepalive_seconds());
    }

    let _ = write!(line, " name=\"{}\"", remote.name);
    line
}
