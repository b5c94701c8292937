// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

use std::net::{Ipv4Addr, Ipv6Addr};

use ifdesc_common::debug;
use rayon::prelude::*;
use serde::Serialize;

use crate::descriptor::{Lifetimes, LinkState};
use crate::interface::NetworkInterface;

/// A snapshot of everything derived from one interface's descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InterfaceSummary {
    pub name: String,
    pub index: Option<u32>,
    pub state: Option<LinkState>,
    pub up: bool,
    pub mtu: Option<u32>,
    pub mac: Option<String>,
    pub ipv4: Option<Ipv4Summary>,
    pub ipv6: Option<Ipv6Summary>,
    pub ipv6_addresses: Vec<Ipv6Summary>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ipv4Summary {
    pub address: Ipv4Addr,
    pub prefix: u8,
    pub mask: Ipv4Addr,
    pub broadcast: Option<Ipv4Addr>,
    pub lifetimes: Lifetimes,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ipv6Summary {
    pub address: Ipv6Addr,
    pub prefix: u8,
    pub scope: String,
    pub lifetimes: Lifetimes,
}

impl NetworkInterface {
    pub fn summary(&self) -> InterfaceSummary {
        let ipv4 = match (self.ip(), self.prefix(), self.mask()) {
            (Some(address), Some(prefix), Some(mask)) => Some(Ipv4Summary {
                address,
                prefix,
                mask,
                broadcast: self.broadcast(),
                lifetimes: self
                    .parsed()
                    .ipv4_line()
                    .map(|l| l.lifetimes)
                    .unwrap_or_default(),
            }),
            _ => None,
        };

        let to_summary = |entry: crate::descriptor::Ipv6Entry| Ipv6Summary {
            address: entry.address,
            prefix: entry.prefix,
            scope: entry.scope.to_string(),
            lifetimes: entry.lifetimes,
        };

        InterfaceSummary {
            name: self.name().to_string(),
            index: self.index(),
            state: self.state(),
            up: self.is_up(),
            mtu: self.mtu(),
            mac: self.mac().map(|m| m.to_string()),
            ipv4,
            ipv6: self.try_ipv6().ok().flatten().map(to_summary),
            ipv6_addresses: self.ipv6_addresses().into_iter().map(to_summary).collect(),
        }
    }
}

/// Summarises many interfaces in parallel. Output order matches input order.
pub fn summarize(interfaces: &[NetworkInterface]) -> Vec<InterfaceSummary> {
    debug!("Summarising {} interfaces", interfaces.len());
    interfaces.par_iter().map(NetworkInterface::summary).collect()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
