// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

use std::net::{Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

use pnet::ipnetwork::Ipv4Network;

/// The `scope` keyword printed after an address by `ip addr show`.
///
/// IPv4 and IPv6 lines share the same vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Scope {
    Global,
    Site,
    Link,
    Host,
    #[default]
    Unknown,
}

impl Scope {
    pub fn is_global(&self) -> bool {
        matches!(self, Scope::Global)
    }

    pub fn is_link(&self) -> bool {
        matches!(self, Scope::Link)
    }
}

impl FromStr for Scope {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "global" | "universe" => Scope::Global,
            "site" => Scope::Site,
            "link" => Scope::Link,
            "host" => Scope::Host,
            _ => Scope::Unknown,
        })
    }
}

impl std::fmt::Display for Scope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Scope::Global => "global",
            Scope::Site => "site",
            Scope::Link => "link",
            Scope::Host => "host",
            Scope::Unknown => "unknown",
        };
        f.write_str(s)
    }
}

/// Guesses the scope of an IPv4 address whose line carried no `scope` keyword.
pub fn infer_ipv4_scope(ipv4_addr: &Ipv4Addr) -> Scope {
    match true {
        _ if ipv4_addr.is_loopback() => Scope::Host,
        _ if ipv4_addr.is_link_local() => Scope::Link,
        _ if ipv4_addr.is_unspecified() => Scope::Unknown,
        _ => Scope::Global,
    }
}

/// Guesses the scope of an IPv6 address whose line carried no `scope` keyword.
///
/// Mirrors the kernel's own classification: loopback is host scope,
/// `fe80::/10` is link scope, everything else routable is global.
pub fn infer_ipv6_scope(ipv6_addr: &Ipv6Addr) -> Scope {
    match true {
        _ if ipv6_addr.is_loopback() => Scope::Host,
        _ if ipv6_addr.is_unicast_link_local() => Scope::Link,
        _ if ipv6_addr.is_unspecified() || ipv6_addr.is_multicast() => Scope::Unknown,
        _ => Scope::Global,
    }
}

/// Renders an IPv4 prefix length as a dotted-quad netmask.
///
/// Returns `None` for prefixes above 32.
///
/// # Examples
/// ```
/// use std::net::Ipv4Addr;
/// use ifdesc_common::utils::ip;
///
/// assert_eq!(ip::prefix_to_mask(24), Some(Ipv4Addr::new(255, 255, 255, 0)));
/// assert_eq!(ip::prefix_to_mask(0), Some(Ipv4Addr::UNSPECIFIED));
/// assert_eq!(ip::prefix_to_mask(33), None);
/// ```
pub fn prefix_to_mask(prefix: u8) -> Option<Ipv4Addr> {
    Ipv4Network::new(Ipv4Addr::UNSPECIFIED, prefix)
        .ok()
        .map(|network| network.mask())
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
