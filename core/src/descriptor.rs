// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! Tolerant parser for the text `ip addr show dev <name>` prints for one interface.
//!
//! The listing has no formal grammar, so the parser works line by line:
//! every line is trimmed, classified by its leading keyword and handed to the
//! matching field extractor. Lines it does not recognise are skipped.
//!
//! ```text
//! 2: ens6: <BROADCAST,MULTICAST,UP,LOWER_UP> mtu 1500 qdisc pfifo_fast state UP group default qlen 1000
//!     link/ether 52:54:00:a6:76:53 brd ff:ff:ff:ff:ff:ff
//!     inet 192.168.121.38/24 brd 192.168.121.255 scope global dynamic ens6
//!        valid_lft 2325sec preferred_lft 2325sec
//!     inet6 ::ffff:192.168.121.38/64 scope global
//!        valid_lft forever preferred_lft forever
//! ```

use std::net::{Ipv4Addr, Ipv6Addr};
use std::sync::LazyLock;

use ifdesc_common::config::ParseConfig;
use ifdesc_common::error::ParseError;
use ifdesc_common::{debug, trace, warn};
use regex::Regex;

mod address;
mod link;

pub use address::{
    AddressEntry, AddressLine, InetAddress, Ipv4Entry, Ipv6Entry, Lifetime, Lifetimes,
};
pub use link::{Header, Link, LinkState};

use address::split_prefix;

static INET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(inet6?)\s+(\S+)(.*)$").expect("inet pattern is valid")
});

/// What a single trimmed line of the listing describes.
#[derive(Debug, PartialEq, Eq)]
enum Line<'a> {
    Header,
    Link,
    AltName(&'a str),
    Inet,
    Inet6,
    Lifetimes,
    Unknown,
}

fn classify(line: &str) -> Line<'_> {
    let mut tokens = line.split_whitespace();
    let Some(keyword) = tokens.next() else {
        return Line::Unknown;
    };

    match keyword {
        "inet" => Line::Inet,
        "inet6" => Line::Inet6,
        "valid_lft" | "preferred_lft" => Line::Lifetimes,
        "altname" => tokens.next().map_or(Line::Unknown, Line::AltName),
        k if k.starts_with("link/") => Line::Link,
        k if k
            .strip_suffix(':')
            .is_some_and(|idx| !idx.is_empty() && idx.bytes().all(|b| b.is_ascii_digit())) =>
        {
            Line::Header
        }
        _ => Line::Unknown,
    }
}

/// The address line that the next lifetime trailer belongs to.
#[derive(Debug, Clone, Copy)]
enum Cursor {
    None,
    V4(usize),
    V6(usize),
}

/// Everything recoverable from one interface's listing.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Descriptor {
    header: Option<Header>,
    link: Option<Link>,
    altnames: Vec<String>,
    ipv4: Vec<AddressLine<Ipv4Addr>>,
    ipv6: Vec<AddressLine<Ipv6Addr>>,
    link_local_fallback: bool,
}

impl Descriptor {
    pub fn parse(raw: &str, config: &ParseConfig) -> Self {
        let mut descriptor = Descriptor {
            link_local_fallback: config.link_local_fallback,
            ..Default::default()
        };
        let mut cursor = Cursor::None;

        let lines = raw
            .split(|c: char| c == '\n' || (config.accept_pipe_separator && c == '|'))
            .map(str::trim)
            .enumerate()
            .map(|(idx, line)| (idx + 1, line))
            .filter(|(_, line)| !line.is_empty());

        for (line_no, line) in lines {
            match classify(line) {
                Line::Header => match Header::parse(line_no, line) {
                    Some(header) if descriptor.header.is_none() => descriptor.header = Some(header),
                    Some(header) => {
                        warn!("line {line_no}: ignoring second header for {}", header.name)
                    }
                    None => warn!("line {line_no}: unreadable header '{line}'"),
                },
                Line::Link => {
                    if descriptor.link.is_none() {
                        descriptor.link = Link::parse(line);
                    }
                }
                Line::AltName(name) => descriptor.altnames.push(name.to_string()),
                Line::Inet | Line::Inet6 => {
                    let Some(caps) = INET_RE.captures(line) else {
                        continue;
                    };
                    let (address, prefix) = split_prefix(caps.get(2).map_or("", |m| m.as_str()));
                    let rest = caps.get(3).map_or("", |m| m.as_str());

                    if &caps[1] == "inet" {
                        let parsed = AddressLine::parse(line_no, address, prefix, rest);
                        log_errors(&parsed);
                        descriptor.ipv4.push(parsed);
                        cursor = Cursor::V4(descriptor.ipv4.len() - 1);
                    } else {
                        let parsed = AddressLine::parse(line_no, address, prefix, rest);
                        log_errors(&parsed);
                        descriptor.ipv6.push(parsed);
                        cursor = Cursor::V6(descriptor.ipv6.len() - 1);
                    }
                }
                Line::Lifetimes => match cursor {
                    Cursor::V4(idx) => descriptor.ipv4[idx].apply_lifetimes(line),
                    Cursor::V6(idx) => descriptor.ipv6[idx].apply_lifetimes(line),
                    Cursor::None => trace!("line {line_no}: lifetime trailer without an address"),
                },
                Line::Unknown => trace!("line {line_no}: skipping '{line}'"),
            }
        }

        debug!(
            "Parsed descriptor for {}: {} inet, {} inet6 lines",
            descriptor.name().unwrap_or("<unnamed>"),
            descriptor.ipv4.len(),
            descriptor.ipv6.len()
        );

        descriptor
    }

    pub fn header(&self) -> Option<&Header> {
        self.header.as_ref()
    }

    pub fn name(&self) -> Option<&str> {
        self.header.as_ref().map(|h| h.name.as_str())
    }

    pub fn link(&self) -> Option<&Link> {
        self.link.as_ref()
    }

    pub fn altnames(&self) -> &[String] {
        &self.altnames
    }

    pub fn ipv4_lines(&self) -> &[AddressLine<Ipv4Addr>] {
        &self.ipv4
    }

    pub fn ipv6_lines(&self) -> &[AddressLine<Ipv6Addr>] {
        &self.ipv6
    }

    /// The IPv4 line the interface is described by: the first `inet` line.
    ///
    /// Additional `inet` lines (secondary addresses) are not considered.
    pub fn ipv4_line(&self) -> Option<&AddressLine<Ipv4Addr>> {
        self.ipv4.first()
    }

    /// The first `inet6` line with global scope, in listing order.
    ///
    /// Falls back to the first link-scope line only when the descriptor was
    /// parsed with [`ParseConfig::link_local_fallback`].
    pub fn ipv6_line(&self) -> Option<&AddressLine<Ipv6Addr>> {
        self.ipv6
            .iter()
            .find(|l| l.scope.is_global())
            .or_else(|| {
                self.link_local_fallback
                    .then(|| self.ipv6.iter().find(|l| l.scope.is_link()))
                    .flatten()
            })
    }

    pub fn try_ipv4(&self) -> Result<Option<Ipv4Entry>, ParseError> {
        self.ipv4_line().map(AddressLine::entry).transpose()
    }

    pub fn try_ipv6(&self) -> Result<Option<Ipv6Entry>, ParseError> {
        self.ipv6_line().map(AddressLine::entry).transpose()
    }

    /// All parse problems, in listing order.
    pub fn errors(&self) -> Vec<ParseError> {
        let mut errors: Vec<ParseError> = self
            .ipv4
            .iter()
            .flat_map(|l| l.errors().cloned())
            .chain(self.ipv6.iter().flat_map(|l| l.errors().cloned()))
            .collect();
        errors.sort_by_key(ParseError::line);
        errors
    }
}

fn log_errors<A: InetAddress>(line: &AddressLine<A>) {
    for err in line.errors() {
        warn!("{err}");
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
