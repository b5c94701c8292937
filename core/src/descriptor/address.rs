// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! `inet` / `inet6` lines and the lifetime trailers that follow them.

use std::net::{Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

use ifdesc_common::error::{AddressFamily, ParseError};
use ifdesc_common::utils::ip::{self, Scope};
use serde::Serialize;

/// Address types that can appear on an `inet`/`inet6` line.
pub trait InetAddress: FromStr + Copy + std::fmt::Debug {
    const FAMILY: AddressFamily;

    fn infer_scope(&self) -> Scope;
}

impl InetAddress for Ipv4Addr {
    const FAMILY: AddressFamily = AddressFamily::Ipv4;

    fn infer_scope(&self) -> Scope {
        ip::infer_ipv4_scope(self)
    }
}

impl InetAddress for Ipv6Addr {
    const FAMILY: AddressFamily = AddressFamily::Ipv6;

    fn infer_scope(&self) -> Scope {
        ip::infer_ipv6_scope(self)
    }
}

/// How long an address remains valid or preferred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Lifetime {
    Forever,
    Seconds(u64),
}

impl FromStr for Lifetime {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "forever" {
            return Ok(Lifetime::Forever);
        }
        s.strip_suffix("sec")
            .and_then(|n| n.parse().ok())
            .map(Lifetime::Seconds)
            .ok_or(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Lifetimes {
    pub valid: Option<Lifetime>,
    pub preferred: Option<Lifetime>,
}

/// One `inet`/`inet6` line as it appeared in the descriptor.
///
/// Address and prefix are interpreted independently, so a line with a
/// garbled prefix still reports its address.
#[derive(Debug, Clone, PartialEq)]
pub struct AddressLine<A: InetAddress> {
    /// 1-based position of the line in the descriptor.
    pub line: usize,
    pub address: Result<A, ParseError>,
    pub prefix: Result<u8, ParseError>,
    pub scope: Scope,
    pub broadcast: Option<A>,
    pub peer: Option<A>,
    pub lifetimes: Lifetimes,
}

/// A fully interpreted address line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddressEntry<A> {
    pub address: A,
    pub prefix: u8,
    pub scope: Scope,
    pub broadcast: Option<A>,
    pub peer: Option<A>,
    pub lifetimes: Lifetimes,
}

pub type Ipv4Entry = AddressEntry<Ipv4Addr>;
pub type Ipv6Entry = AddressEntry<Ipv6Addr>;

impl<A: InetAddress> AddressLine<A> {
    /// Parses the fields following the `inet`/`inet6` keyword.
    ///
    /// `address` is the token before the `/`, `prefix` the token after it
    /// (if any), and `rest` everything after the address token.
    pub(crate) fn parse(line: usize, address: &str, prefix: Option<&str>, rest: &str) -> Self {
        let parsed_address = address
            .parse::<A>()
            .map_err(|_| ParseError::MalformedAddress {
                line,
                family: A::FAMILY,
                token: address.to_string(),
            });

        let mut scope: Option<Scope> = None;
        let mut broadcast: Option<A> = None;
        let mut peer: Option<A> = None;
        let mut peer_prefix: Option<&str> = None;

        let mut tokens = rest.split_whitespace();
        while let Some(token) = tokens.next() {
            match token {
                "scope" => scope = tokens.next().and_then(|s| s.parse().ok()),
                "brd" => broadcast = tokens.next().and_then(|b| b.parse().ok()),
                "peer" => {
                    if let Some(value) = tokens.next() {
                        let (addr, pfx) = split_prefix(value);
                        peer = addr.parse().ok();
                        peer_prefix = pfx;
                    }
                }
                _ => {}
            }
        }

        // Point-to-point lines carry the prefix on the peer address instead.
        let parsed_prefix = parse_prefix(line, A::FAMILY, prefix.or(peer_prefix));

        let scope = match (scope, &parsed_address) {
            (Some(scope), _) => scope,
            (None, Ok(addr)) => addr.infer_scope(),
            (None, Err(_)) => Scope::Unknown,
        };

        Self {
            line,
            address: parsed_address,
            prefix: parsed_prefix,
            scope,
            broadcast,
            peer,
            lifetimes: Lifetimes::default(),
        }
    }

    /// Applies a `valid_lft ... preferred_lft ...` trailer, in either order.
    pub(crate) fn apply_lifetimes(&mut self, trailer: &str) {
        let mut tokens = trailer.split_whitespace();
        while let Some(key) = tokens.next() {
            let value = tokens.next().and_then(|v| v.parse::<Lifetime>().ok());
            match key {
                "valid_lft" => self.lifetimes.valid = value,
                "preferred_lft" => self.lifetimes.preferred = value,
                _ => {}
            }
        }
    }

    /// Interprets the line, reporting the first malformed field.
    pub fn entry(&self) -> Result<AddressEntry<A>, ParseError> {
        let address = self.address.clone()?;
        let prefix = self.prefix.clone()?;
        Ok(AddressEntry {
            address,
            prefix,
            scope: self.scope,
            broadcast: self.broadcast,
            peer: self.peer,
            lifetimes: self.lifetimes,
        })
    }

    pub fn is_well_formed(&self) -> bool {
        self.address.is_ok() && self.prefix.is_ok()
    }

    pub fn errors(&self) -> impl Iterator<Item = &ParseError> {
        self.address
            .as_ref()
            .err()
            .into_iter()
            .chain(self.prefix.as_ref().err())
    }
}

pub(crate) fn split_prefix(token: &str) -> (&str, Option<&str>) {
    match token.split_once('/') {
        Some((addr, prefix)) => (addr, Some(prefix)),
        None => (token, None),
    }
}

/// A missing prefix means a host route (`/32` or `/128`).
fn parse_prefix(line: usize, family: AddressFamily, token: Option<&str>) -> Result<u8, ParseError> {
    let max = family.max_prefix();
    let Some(token) = token else {
        return Ok(max);
    };

    let value: u32 = token.parse().map_err(|_| ParseError::MalformedPrefix {
        line,
        token: token.to_string(),
    })?;

    if value > max as u32 {
        return Err(ParseError::PrefixOutOfRange {
            line,
            family,
            prefix: value,
            max,
        });
    }

    Ok(value as u8)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
