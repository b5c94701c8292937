// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

use std::str::FromStr;
use std::sync::LazyLock;

use ifdesc_common::warn;
use pnet::util::MacAddr;
use regex::Regex;
use serde::Serialize;

static HEADER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d+):\s*([^\s:@]+)(?:@([^\s:]+))?:\s*<([^>]*)>(.*)$")
        .expect("header pattern is valid")
});

static LINK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^link/(\S+)(?:\s+(\S+))?(?:\s+(?:brd|peer)\s+(\S+))?")
        .expect("link pattern is valid")
});

/// Operational state as reported after the `state` keyword (RFC 2863 names).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum LinkState {
    Up,
    Down,
    LowerLayerDown,
    Dormant,
    NotPresent,
    Testing,
    Unknown,
}

impl FromStr for LinkState {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "UP" => LinkState::Up,
            "DOWN" => LinkState::Down,
            "LOWERLAYERDOWN" => LinkState::LowerLayerDown,
            "DORMANT" => LinkState::Dormant,
            "NOTPRESENT" => LinkState::NotPresent,
            "TESTING" => LinkState::Testing,
            _ => LinkState::Unknown,
        })
    }
}

/// The first line of a descriptor:
/// `2: ens6: <BROADCAST,MULTICAST,UP,LOWER_UP> mtu 1500 qdisc pfifo_fast state UP ...`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub index: u32,
    pub name: String,
    /// The lower device of stacked links, e.g. `eth0` in `eth0.10@eth0`.
    pub parent: Option<String>,
    pub flags: Vec<String>,
    pub mtu: Option<u32>,
    pub qdisc: Option<String>,
    pub master: Option<String>,
    pub state: Option<LinkState>,
}

impl Header {
    pub(crate) fn parse(line_no: usize, line: &str) -> Option<Self> {
        let caps = HEADER_RE.captures(line)?;

        let index = caps[1].parse().ok()?;
        let flags = caps[4]
            .split(',')
            .map(str::trim)
            .filter(|f| !f.is_empty())
            .map(str::to_string)
            .collect();

        let mut header = Header {
            index,
            name: caps[2].to_string(),
            parent: caps.get(3).map(|m| m.as_str().to_string()),
            flags,
            mtu: None,
            qdisc: None,
            master: None,
            state: None,
        };

        let mut tokens = caps[5].split_whitespace();
        while let Some(key) = tokens.next() {
            match key {
                "mtu" => {
                    let value = tokens.next();
                    header.mtu = value.and_then(|v| v.parse().ok());
                    if header.mtu.is_none() {
                        warn!("line {line_no}: unreadable mtu {value:?}");
                    }
                }
                "qdisc" => header.qdisc = tokens.next().map(str::to_string),
                "master" => header.master = tokens.next().map(str::to_string),
                "state" => header.state = tokens.next().and_then(|s| s.parse().ok()),
                _ => {}
            }
        }

        Some(header)
    }

    pub fn has_flag(&self, flag: &str) -> bool {
        self.flags.iter().any(|f| f == flag)
    }
}

/// The `link/<type> <address> brd <address>` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub kind: String,
    pub address: Option<String>,
    pub broadcast: Option<String>,
}

impl Link {
    pub(crate) fn parse(line: &str) -> Option<Self> {
        let caps = LINK_RE.captures(line)?;
        Some(Link {
            kind: caps[1].to_string(),
            address: caps.get(2).map(|m| m.as_str().to_string()),
            broadcast: caps.get(3).map(|m| m.as_str().to_string()),
        })
    }

    /// The hardware address, for link types that carry a MAC.
    pub fn mac(&self) -> Option<MacAddr> {
        match self.kind.as_str() {
            "ether" | "loopback" | "ieee802.11" => self.address.as_deref()?.parse().ok(),
            _ => None,
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
