// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

#![cfg(test)]
use std::net::{Ipv4Addr, Ipv6Addr};
use std::sync::Arc;
use std::thread;

use ifdesc_common::config::ParseConfig;
use ifdesc_common::error::{InterfaceError, ParseError};
use ifdesc_common::utils::ip::Scope;
use ifdesc_core::descriptor::{Lifetime, LinkState};
use ifdesc_core::source::StaticSource;
use ifdesc_core::summary;
use ifdesc_core::NetworkInterface;
use pnet::util::MacAddr;

use crate::fixtures;

fn ens6() -> NetworkInterface {
    NetworkInterface::with_descriptor("ens6", fixtures::ens6_joined())
}

#[test]
fn test_get_ip() {
    assert_eq!(ens6().ip().unwrap().to_string(), "192.168.121.38");
}

#[test]
fn test_get_ip6() {
    assert_eq!(ens6().ip6().unwrap().to_string(), "::ffff:192.168.121.38");
}

#[test]
fn test_get_prefix() {
    assert_eq!(ens6().prefix(), Some(24));
}

#[test]
fn test_get_prefix6() {
    assert_eq!(ens6().prefix6(), Some(64));
}

#[test]
fn test_get_mask() {
    assert_eq!(ens6().mask().unwrap().to_string(), "255.255.255.0");
}

#[test]
fn test_get_mask6() {
    let iface = ens6();
    assert_eq!(iface.mask6(), Some(64));
    assert_eq!(iface.mask6(), iface.prefix6());
}

#[test]
fn joined_and_multiline_listings_agree() {
    let joined = ens6();
    let multiline = NetworkInterface::with_descriptor("ens6", fixtures::ens6());

    assert_eq!(joined.summary(), multiline.summary());
}

#[test]
fn ens6_link_details() {
    let iface = ens6();

    assert_eq!(iface.index(), Some(2));
    assert_eq!(iface.mtu(), Some(1500));
    assert_eq!(iface.state(), Some(LinkState::Up));
    assert!(iface.is_up());
    assert_eq!(iface.mac(), Some(MacAddr::new(0x52, 0x54, 0x00, 0xa6, 0x76, 0x53)));
    assert_eq!(iface.broadcast(), Some(Ipv4Addr::new(192, 168, 121, 255)));
    assert_eq!(
        iface.try_ipv4().unwrap().unwrap().lifetimes.valid,
        Some(Lifetime::Seconds(2325))
    );
}

#[test]
fn loopback_has_no_global_ipv6() {
    let lo = NetworkInterface::with_descriptor("lo", fixtures::LOOPBACK);

    assert_eq!(lo.ip(), Some(Ipv4Addr::LOCALHOST));
    assert_eq!(lo.mask().unwrap().to_string(), "255.0.0.0");
    assert_eq!(lo.state(), Some(LinkState::Unknown));
    assert_eq!(lo.link_type(), Some("loopback"));
    assert_eq!(lo.ip6(), None);
    assert_eq!(lo.ipv6_addresses()[0].scope, Scope::Host);
}

#[test]
fn link_local_only_interface() {
    let strict = NetworkInterface::with_descriptor("enp9s0", fixtures::LINK_LOCAL_ONLY);
    assert_eq!(strict.ip(), None);
    assert_eq!(strict.ip6(), None);
    assert_eq!(strict.prefix6(), None);
    assert_eq!(strict.try_ipv6(), Ok(None));
    assert_eq!(strict.parsed().altnames(), ["enx3c7c3f1eaa01"]);

    let config = ParseConfig::default().with_link_local_fallback(true);
    let mut fallback = NetworkInterface::with_config("enp9s0", config);
    fallback.populate(fixtures::LINK_LOCAL_ONLY).unwrap();
    assert_eq!(
        fallback.ip6(),
        Some("fe80::3e7c:3fff:fe1e:aa01".parse::<Ipv6Addr>().unwrap())
    );
    assert_eq!(fallback.mask6(), Some(64));
}

#[test]
fn multi_homed_interface_uses_first_matches() {
    let wlan = NetworkInterface::with_descriptor("wlan0", fixtures::WLAN_MULTI);

    assert_eq!(wlan.ip(), Some(Ipv4Addr::new(10, 20, 30, 40)));
    assert_eq!(wlan.mask().unwrap().to_string(), "255.255.252.0");
    assert_eq!(
        wlan.ip6(),
        Some("2a02:8070:c189:d00:1234:5678:9abc:def0".parse::<Ipv6Addr>().unwrap())
    );
    assert_eq!(wlan.prefix6(), Some(64));
    assert_eq!(wlan.ipv6_addresses().len(), 3);

    let v4 = wlan.try_ipv4().unwrap().unwrap();
    assert_eq!(v4.lifetimes.valid, Some(Lifetime::Seconds(86400)));
    assert_eq!(v4.lifetimes.preferred, Some(Lifetime::Seconds(86000)));
}

#[test]
fn down_interface_without_addresses() {
    let eth1 = NetworkInterface::with_descriptor("eth1", fixtures::DOWN_NO_ADDRESS);

    assert!(!eth1.is_up());
    assert_eq!(eth1.state(), Some(LinkState::Down));
    assert_eq!(eth1.ip(), None);
    assert_eq!(eth1.prefix(), None);
    assert_eq!(eth1.mask(), None);
    assert_eq!(eth1.ip6(), None);
    assert_eq!(eth1.try_ipv4(), Ok(None));
}

#[test]
fn point_to_point_tunnel() {
    let tun = NetworkInterface::with_descriptor("tun0", fixtures::TUNNEL);

    assert_eq!(tun.ip(), Some(Ipv4Addr::new(10, 8, 0, 6)));
    assert_eq!(tun.prefix(), Some(32));
    assert_eq!(tun.mask().unwrap().to_string(), "255.255.255.255");
    assert_eq!(tun.mac(), None);
    assert_eq!(tun.link_type(), Some("none"));
}

#[test]
fn garbled_listing_degrades_to_absent() {
    let br0 = NetworkInterface::with_descriptor("br0", fixtures::GARBLED);

    assert_eq!(br0.ip(), Some(Ipv4Addr::new(192, 168, 1, 10)));
    assert_eq!(br0.prefix(), None);
    assert_eq!(br0.mask(), None);
    assert_eq!(br0.prefix6(), None);
    assert_eq!(br0.mask6(), None);

    assert!(matches!(br0.try_ipv4(), Err(ParseError::MalformedPrefix { line: 3, .. })));
    assert!(matches!(
        br0.try_ipv6(),
        Err(ParseError::PrefixOutOfRange { prefix: 200, max: 128, .. })
    ));
    assert_eq!(br0.parsed().errors().len(), 2);
}

#[test]
fn populate_through_source() {
    let source = StaticSource::new()
        .with("ens6", fixtures::ens6())
        .with("lo", fixtures::LOOPBACK);

    let mut ens6 = NetworkInterface::new("ens6");
    ens6.populate_from(&source).unwrap();
    assert_eq!(ens6.ip6().unwrap().to_string(), "::ffff:192.168.121.38");

    let again = ens6.populate_from(&source);
    assert!(matches!(again, Err(InterfaceError::AlreadyPopulated(_))));

    let mut missing = NetworkInterface::new("eth7");
    assert!(matches!(
        missing.populate_from(&source),
        Err(InterfaceError::Fetch { .. })
    ));
}

#[test]
fn concurrent_first_access_parses_once() {
    let iface = Arc::new(ens6());

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let iface = Arc::clone(&iface);
            thread::spawn(move || (iface.ip(), iface.ip6(), iface.mask()))
        })
        .collect();

    for handle in handles {
        let (ip, ip6, mask) = handle.join().unwrap();
        assert_eq!(ip, Some(Ipv4Addr::new(192, 168, 121, 38)));
        assert_eq!(ip6.unwrap().to_string(), "::ffff:192.168.121.38");
        assert_eq!(mask, Some(Ipv4Addr::new(255, 255, 255, 0)));
    }
}

#[test]
fn summarize_whole_host() {
    let interfaces = vec![
        NetworkInterface::with_descriptor("lo", fixtures::LOOPBACK),
        ens6(),
        NetworkInterface::with_descriptor("wlan0", fixtures::WLAN_MULTI),
        NetworkInterface::with_descriptor("eth1", fixtures::DOWN_NO_ADDRESS),
    ];

    let summaries = summary::summarize(&interfaces);
    let names: Vec<&str> = summaries.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, ["lo", "ens6", "wlan0", "eth1"]);

    assert_eq!(summaries[1].ipv4.as_ref().unwrap().prefix, 24);
    assert_eq!(summaries[2].ipv6.as_ref().unwrap().prefix, 64);
    assert!(summaries[3].ipv4.is_none());
}
