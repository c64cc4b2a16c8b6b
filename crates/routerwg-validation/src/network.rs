//! IPv4 address and CIDR subnet validation.
//!
//! Parsing is strict: four dot-separated groups of one to three ASCII
//! digits, no leading zeros, no surrounding whitespace. `std`'s
//! `Ipv4Addr` parser is close but its error carries no reason, and the
//! reason is what ends up next to the form field.

use std::net::Ipv4Addr;

use ipnet::Ipv4Net;

use crate::error::ValidationError;
use crate::MAX_IPV4_PREFIX_LEN;

/// Returns `true` if `value` is a dotted-quad IPv4 address.
///
/// ```
/// use routerwg_validation::is_valid_ipv4;
///
/// assert!(is_valid_ipv4("192.168.1.1"));
/// assert!(!is_valid_ipv4("1.2.3"));
/// assert!(!is_valid_ipv4("01.02.03.04"));
/// ```
#[must_use]
pub fn is_valid_ipv4(value: &str) -> bool {
    parse_ipv4(value).is_ok()
}

/// Returns `true` if `value` is an IPv4 address followed by `/` and a
/// prefix length in `[0, 32]`.
///
/// ```
/// use routerwg_validation::is_valid_subnet;
///
/// assert!(is_valid_subnet("10.0.0.0/24"));
/// assert!(!is_valid_subnet("10.0.0.0/33"));
/// assert!(!is_valid_subnet("10.0.0.0"));
/// ```
#[must_use]
pub fn is_valid_subnet(value: &str) -> bool {
    parse_subnet(value).is_ok()
}

/// Validate an IPv4 host address.
///
/// # Errors
///
/// Returns `ValidationError` tagged with `field` if the value is empty or
/// not a strict dotted-quad address.
pub fn validate_ipv4(field: &str, value: &str) -> Result<Ipv4Addr, ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::empty(field));
    }
    parse_ipv4(value).map_err(|reason| ValidationError::invalid_address(field, value, reason))
}

/// Validate an IPv4 subnet in CIDR notation.
///
/// Host bits are kept as given; `192.168.1.7/24` is accepted.
///
/// # Errors
///
/// Returns `ValidationError` tagged with `field` if the value is empty, has
/// no prefix, or either half is malformed.
pub fn validate_subnet(field: &str, value: &str) -> Result<Ipv4Net, ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::empty(field));
    }
    parse_subnet(value).map_err(|reason| ValidationError::invalid_subnet(field, value, reason))
}

fn parse_ipv4(value: &str) -> Result<Ipv4Addr, String> {
    let groups: Vec<&str> = value.split('.').collect();
    if groups.len() != 4 {
        return Err(format!(
            "expected 4 dot-separated octets, found {}",
            groups.len()
        ));
    }

    let mut octets = [0u8; 4];
    for (slot, group) in octets.iter_mut().zip(&groups) {
        *slot = parse_octet(group)?;
    }
    Ok(Ipv4Addr::from(octets))
}

fn parse_octet(group: &str) -> Result<u8, String> {
    if group.is_empty() {
        return Err("empty octet".to_string());
    }
    if !group.bytes().all(|b| b.is_ascii_digit()) {
        return Err(format!("octet '{group}' is not a decimal number"));
    }
    if group.len() > 1 && group.starts_with('0') {
        return Err(format!("octet '{group}' has a leading zero"));
    }
    if group.len() > 3 {
        return Err(format!("octet {group} exceeds 255"));
    }

    let value: u16 = group
        .parse()
        .map_err(|_| format!("octet '{group}' is not a decimal number"))?;
    u8::try_from(value).map_err(|_| format!("octet {value} exceeds 255"))
}

fn parse_subnet(value: &str) -> Result<Ipv4Net, String> {
    let Some((address, prefix)) = value.split_once('/') else {
        return Err("missing '/<prefix>'".to_string());
    };

    let address = parse_ipv4(address)?;
    let prefix = parse_prefix(prefix)?;
    Ipv4Net::new(address, prefix).map_err(|e| e.to_string())
}

fn parse_prefix(prefix: &str) -> Result<u8, String> {
    if prefix.is_empty() {
        return Err("missing prefix length".to_string());
    }
    if !prefix.bytes().all(|b| b.is_ascii_digit()) {
        return Err(format!("prefix '{prefix}' is not a decimal number"));
    }
    if prefix.len() > 1 && prefix.starts_with('0') {
        return Err(format!("prefix '{prefix}' has a leading zero"));
    }
    if prefix.len() > 2 {
        return Err(format!("prefix {prefix} exceeds {MAX_IPV4_PREFIX_LEN}"));
    }

    let value: u8 = prefix
        .parse()
        .map_err(|_| format!("prefix '{prefix}' is not a decimal number"))?;
    if value > MAX_IPV4_PREFIX_LEN {
        return Err(format!("prefix {value} exceeds {MAX_IPV4_PREFIX_LEN}"));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("192.168.1.1" ; "private address")]
    #[test_case("0.0.0.0" ; "all zeros")]
    #[test_case("255.255.255.255" ; "broadcast")]
    #[test_case("10.0.0.1" ; "tunnel address")]
    fn valid_ipv4(value: &str) {
        assert!(is_valid_ipv4(value));
    }

    #[test_case("256.1.1.1" ; "octet over 255")]
    #[test_case("1.2.3" ; "three groups")]
    #[test_case("1.2.3.4.5" ; "five groups")]
    #[test_case("" ; "empty")]
    #[test_case("a.b.c.d" ; "letters")]
    #[test_case("1.2.3.4 " ; "trailing space")]
    #[test_case(" 1.2.3.4" ; "leading space")]
    #[test_case("01.02.03.04" ; "leading zeros")]
    #[test_case("1..3.4" ; "empty group")]
    #[test_case("1.2.3.4/24" ; "subnet given")]
    #[test_case("+1.2.3.4" ; "sign")]
    #[test_case("1.2.3.1000" ; "four digit octet")]
    fn invalid_ipv4(value: &str) {
        assert!(!is_valid_ipv4(value));
    }

    #[test_case("10.0.0.0/24" ; "class a lan")]
    #[test_case("192.168.88.0/24" ; "routeros default lan")]
    #[test_case("0.0.0.0/0" ; "default route")]
    #[test_case("10.0.0.1/32" ; "host route")]
    #[test_case("192.168.1.7/24" ; "host bits set")]
    fn valid_subnet(value: &str) {
        assert!(is_valid_subnet(value));
    }

    #[test_case("10.0.0.0/33" ; "prefix over 32")]
    #[test_case("10.0.0.0" ; "no prefix")]
    #[test_case("10.0.0.0/" ; "empty prefix")]
    #[test_case("10.0.0.0/abc" ; "non numeric prefix")]
    #[test_case("10.0.0.0/024" ; "leading zero prefix")]
    #[test_case("10.0.0.0/24/8" ; "two slashes")]
    #[test_case("300.0.0.0/24" ; "bad address")]
    #[test_case("/24" ; "no address")]
    fn invalid_subnet(value: &str) {
        assert!(!is_valid_subnet(value));
    }

    #[test]
    fn validate_ipv4_returns_address() {
        let ip = validate_ipv4("ip", "10.0.0.2").expect("valid address");
        assert_eq!(ip, Ipv4Addr::new(10, 0, 0, 2));
    }

    #[test]
    fn validate_ipv4_empty_is_empty_error() {
        let err = validate_ipv4("master_ip", "").expect_err("empty should fail");
        assert!(err.is_empty_error());
        assert_eq!(err.field, "master_ip");
    }

    #[test]
    fn validate_ipv4_reports_octet() {
        let err = validate_ipv4("master_ip", "999.1.1.1").expect_err("999 should fail");
        assert!(err.is_address_error());
        assert!(err.message().contains("octet 999 exceeds 255"));
    }

    #[test]
    fn validate_ipv4_reports_group_count() {
        let err = validate_ipv4("ip", "1.2.3").expect_err("three groups should fail");
        assert!(err.message().contains("found 3"));
    }

    #[test]
    fn validate_subnet_returns_network() {
        let net = validate_subnet("lan", "192.168.2.0/24").expect("valid subnet");
        assert_eq!(net.addr(), Ipv4Addr::new(192, 168, 2, 0));
        assert_eq!(net.prefix_len(), 24);
        assert_eq!(net.to_string(), "192.168.2.0/24");
    }

    #[test]
    fn validate_subnet_keeps_host_bits() {
        let net = validate_subnet("lan", "192.168.1.7/24").expect("valid subnet");
        assert_eq!(net.to_string(), "192.168.1.7/24");
    }

    #[test]
    fn validate_subnet_missing_prefix() {
        let err = validate_subnet("client_subnet", "10.0.0.0").expect_err("no prefix");
        assert!(err.is_subnet_error());
        assert!(err.message().contains("missing '/<prefix>'"));
    }

    #[test]
    fn validate_subnet_reports_address_reason() {
        let err = validate_subnet("lan", "10.0.0.256/24").expect_err("bad octet");
        assert!(err.is_subnet_error());
        assert!(err.message().contains("octet 256 exceeds 255"));
    }
}
