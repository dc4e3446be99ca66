use crate::chain::AddressChain;
use crate::resolve::{Indeterminate, resolve_trusted_networks};
use crate::trust::TrustedNetworks;
use pretty_assertions::assert_eq;

fn private_ranges() -> TrustedNetworks {
    TrustedNetworks::parse(["10.0.0.0/8", "192.168.0.0/16"]).unwrap()
}

#[test]
fn trusted_suffix_is_filtered_out() {
    // Arrange
    let chain = AddressChain::parse("203.0.113.7,10.0.0.5,10.0.0.6");

    // Act
    let res = resolve_trusted_networks(&chain, &private_ranges());

    // Assert
    assert_eq!(res.client_addr().as_deref(), Some("203.0.113.7"));
    assert_eq!(res.retained_chain(), "203.0.113.7");
    assert_eq!(res.indeterminate, None);
}

#[test]
fn client_is_rightmost_untrusted_hop() {
    let chain = AddressChain::parse("203.0.113.7,198.51.100.9,10.0.0.6");

    let res = resolve_trusted_networks(&chain, &private_ranges());

    assert_eq!(res.client_addr().as_deref(), Some("198.51.100.9"));
    assert_eq!(res.retained_chain(), "203.0.113.7,198.51.100.9");
}

#[test]
fn trusted_hops_in_the_middle_are_removed_without_reordering() {
    let chain = AddressChain::parse("1.1.1.1,10.0.0.1,2.2.2.2,192.168.1.1,3.3.3.3,10.0.0.2");

    let res = resolve_trusted_networks(&chain, &private_ranges());

    let positions: Vec<usize> = res.retained.iter().map(|h| h.position()).collect();
    assert_eq!(positions, vec![0, 2, 4]);
    assert_eq!(res.retained_chain(), "1.1.1.1,2.2.2.2,3.3.3.3");
    assert_eq!(res.client_addr().as_deref(), Some("3.3.3.3"));
}

#[test]
fn all_trusted_chain_is_indeterminate() {
    let chain = AddressChain::parse("10.0.0.1,192.168.0.1");

    let res = resolve_trusted_networks(&chain, &private_ranges());

    assert!(!res.is_resolved());
    assert!(res.retained.is_empty());
    assert_eq!(
        res.indeterminate,
        Some(Indeterminate::AllHopsTrusted { hops: 2 })
    );
}

#[test]
fn empty_chain_is_indeterminate() {
    let res = resolve_trusted_networks(&AddressChain::parse(""), &private_ranges());

    assert_eq!(res.indeterminate, Some(Indeterminate::EmptyChain));
}

#[test]
fn malformed_hop_can_become_the_client() {
    // A spoofed garbage entry behind the trusted proxy is kept, never trusted.
    let chain = AddressChain::parse("1.2.3.4, bogus ,10.0.0.1");

    let res = resolve_trusted_networks(&chain, &private_ranges());

    assert_eq!(res.client_addr().as_deref(), Some("bogus"));
    assert_eq!(res.retained_chain(), "1.2.3.4,bogus");
}

#[test]
fn filtering_is_idempotent_once_all_hops_are_untrusted() {
    // Arrange
    let networks = private_ranges();
    let first = resolve_trusted_networks(
        &AddressChain::parse(" 8.8.8.8, 10.1.1.1 ,::ffff:9.9.9.9,192.168.3.3"),
        &networks,
    );

    // Act
    let second = resolve_trusted_networks(&AddressChain::parse(&first.retained_chain()), &networks);

    // Assert
    assert_eq!(first.retained_chain(), "8.8.8.8,9.9.9.9");
    assert_eq!(second.retained_chain(), first.retained_chain());
    assert_eq!(second.client_addr(), first.client_addr());
}

#[test]
fn no_trusted_networks_keeps_every_hop() {
    let chain = AddressChain::parse("10.0.0.1,10.0.0.2");

    let res = resolve_trusted_networks(&chain, &TrustedNetworks::default());

    assert_eq!(res.retained_chain(), "10.0.0.1,10.0.0.2");
    assert_eq!(res.client_addr().as_deref(), Some("10.0.0.2"));
}
