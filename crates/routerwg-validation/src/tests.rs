//! Property-based tests with proptest.

use crate::*;
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    // -------------------------------------------------------------------------
    // IPv4 tests
    // -------------------------------------------------------------------------

    #[test]
    fn prop_formatted_addresses_always_pass(octets in prop::array::uniform4(any::<u8>())) {
        let text = std::net::Ipv4Addr::from(octets).to_string();
        prop_assert!(is_valid_ipv4(&text));
        let parsed = validate_ipv4("ip", &text);
        prop_assert_eq!(parsed.ok().map(|ip| ip.octets()), Some(octets));
    }

    #[test]
    fn prop_octets_over_255_fail(
        a in any::<u8>(),
        b in any::<u8>(),
        c in any::<u8>(),
        big in 256u32..1000
    ) {
        let text = format!("{a}.{b}.{c}.{big}");
        prop_assert!(!is_valid_ipv4(&text));
    }

    #[test]
    fn prop_wrong_group_count_fails(groups in prop::collection::vec(any::<u8>(), 0..10)) {
        prop_assume!(groups.len() != 4);
        let text = groups.iter().map(ToString::to_string).collect::<Vec<_>>().join(".");
        prop_assert!(!is_valid_ipv4(&text));
    }

    #[test]
    fn prop_ipv4_agrees_with_std_on_strict_input(s in "[0-9.]{1,16}") {
        // std rejects leading zeros too, so both parsers should agree.
        let ours = is_valid_ipv4(&s);
        let std_ok = s.parse::<std::net::Ipv4Addr>().is_ok();
        prop_assert_eq!(ours, std_ok);
    }

    #[test]
    fn prop_ipv4_never_panics(s in "\\PC*") {
        let _ = validate_ipv4("ip", &s);
    }

    // -------------------------------------------------------------------------
    // Subnet tests
    // -------------------------------------------------------------------------

    #[test]
    fn prop_valid_subnets_pass(octets in prop::array::uniform4(any::<u8>()), prefix in 0u8..=32) {
        let text = format!("{}/{prefix}", std::net::Ipv4Addr::from(octets));
        prop_assert!(is_valid_subnet(&text));
    }

    #[test]
    fn prop_prefix_over_32_fails(octets in prop::array::uniform4(any::<u8>()), prefix in 33u32..100) {
        let text = format!("{}/{prefix}", std::net::Ipv4Addr::from(octets));
        prop_assert!(!is_valid_subnet(&text));
    }

    #[test]
    fn prop_bare_address_is_not_subnet(octets in prop::array::uniform4(any::<u8>())) {
        let text = std::net::Ipv4Addr::from(octets).to_string();
        prop_assert!(!is_valid_subnet(&text));
    }

    // -------------------------------------------------------------------------
    // Numeric tests
    // -------------------------------------------------------------------------

    #[test]
    fn prop_ports_in_range_pass(port in 1u16..=u16::MAX) {
        prop_assert_eq!(validate_port("port", &port.to_string()).ok(), Some(port));
    }

    #[test]
    fn prop_ports_out_of_range_fail(port in 65536u64..10_000_000) {
        prop_assert!(validate_port("port", &port.to_string()).is_err());
    }

    // -------------------------------------------------------------------------
    // Router name tests
    // -------------------------------------------------------------------------

    #[test]
    fn prop_valid_router_names_always_pass(name in "[a-zA-Z0-9][a-zA-Z0-9_.-]{0,63}") {
        prop_assert!(validate_router_name("name", &name).is_ok());
    }

    #[test]
    fn prop_router_names_never_contain_script_metacharacters(name in "\\PC{1,64}") {
        if let Ok(valid) = validate_router_name("name", &name) {
            prop_assert!(!valid.contains(['"', ' ', '\n', '=', '/', ';']));
        }
    }
}
