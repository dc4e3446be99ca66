use crate::chain::{AddressChain, Hop};
use crate::trust::{TrustPolicy, TrustedNetworks, is_trusted};
use std::net::IpAddr;

fn networks(cidrs: &[&str]) -> TrustedNetworks {
    TrustedNetworks::parse(cidrs).unwrap()
}

#[test]
fn address_inside_any_range_is_trusted() {
    let trusted = networks(&["10.0.0.0/8", "fd00::/8"]);

    assert!(trusted.contains(&"10.1.2.3".parse::<IpAddr>().unwrap()));
    assert!(trusted.contains(&"fd12::1".parse::<IpAddr>().unwrap()));
    assert!(!trusted.contains(&"11.0.0.1".parse::<IpAddr>().unwrap()));
    assert!(!trusted.contains(&"2001:db8::1".parse::<IpAddr>().unwrap()));
}

#[test]
fn malformed_hop_is_never_trusted() {
    // Arrange
    let trusted = networks(&["0.0.0.0/1", "128.0.0.0/1"]);
    let hop = Hop::parse(0, "not-an-ip");

    // Act / Assert
    assert!(!trusted.is_trusted(&hop));
    assert!(!is_trusted(None, &trusted));
}

#[test]
fn mapped_ipv6_hop_matches_ipv4_range() {
    let trusted = networks(&["10.0.0.0/8"]);

    assert!(trusted.is_trusted(&Hop::parse(0, "::ffff:10.9.9.9")));
}

#[test]
fn empty_set_trusts_nothing() {
    let trusted = TrustedNetworks::default();

    assert!(trusted.is_empty());
    assert!(!trusted.is_trusted(&Hop::parse(0, "127.0.0.1")));
}

#[test]
fn invalid_cidr_fails_to_parse() {
    assert!(TrustedNetworks::parse(["10.0.0.0/33"]).is_err());
    assert!(TrustedNetworks::parse(["10.0.0.1"]).is_err());
    assert!(TrustedNetworks::parse(["banana"]).is_err());
}

#[test]
fn policy_dispatches_to_matching_resolver() {
    let chain = AddressChain::parse("1.2.3.4,5.6.7.8,10.0.0.1");

    let by_networks = TrustPolicy::TrustedNetworks(networks(&["10.0.0.0/8"])).resolve(&chain);
    let by_depth = TrustPolicy::TrustedHopCount(2).resolve(&chain);

    assert_eq!(by_networks.client_addr().as_deref(), Some("5.6.7.8"));
    assert_eq!(by_depth.client_addr().as_deref(), Some("1.2.3.4"));
}
