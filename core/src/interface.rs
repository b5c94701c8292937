// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! # Network Interface Model
//!
//! [`NetworkInterface`] is a read-only view over the `ip addr show` listing of a
//! single interface.
//!
//! ## Key Concepts
//! * **Lifecycle**: An interface is created unpopulated and receives its descriptor
//!   exactly once, either directly or through a [`DescriptorSource`].
//! * **Lazy parsing**: The descriptor is parsed on first access and the result is
//!   cached for the lifetime of the instance.
//! * **Lenient vs strict**: The plain accessors answer `None` for both missing and
//!   malformed data; the `try_*` accessors tell the two apart.

use std::net::{Ipv4Addr, Ipv6Addr};
use std::sync::OnceLock;

use ifdesc_common::config::ParseConfig;
use ifdesc_common::error::{InterfaceError, ParseError};
use ifdesc_common::utils::ip;
use ifdesc_common::debug;
use pnet::ipnetwork::{Ipv4Network, Ipv6Network};
use pnet::util::MacAddr;

use crate::descriptor::{Descriptor, Header, Ipv4Entry, Ipv6Entry, LinkState};
use crate::source::DescriptorSource;

#[derive(Debug, Clone)]
pub struct NetworkInterface {
    name: String,
    raw: Option<String>,
    config: ParseConfig,
    parsed: OnceLock<Descriptor>,
}

impl NetworkInterface {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_config(name, ParseConfig::default())
    }

    pub fn with_config(name: impl Into<String>, config: ParseConfig) -> Self {
        Self {
            name: name.into(),
            raw: None,
            config,
            parsed: OnceLock::new(),
        }
    }

    /// Creates an interface that already holds its descriptor.
    pub fn with_descriptor(name: impl Into<String>, raw: impl Into<String>) -> Self {
        let mut interface = Self::new(name);
        interface.raw = Some(raw.into());
        interface
    }

    /// Assigns the raw descriptor. An interface can only be populated once.
    pub fn populate(&mut self, raw: impl Into<String>) -> Result<(), InterfaceError> {
        if self.raw.is_some() {
            return Err(InterfaceError::AlreadyPopulated(self.name.clone()));
        }
        self.raw = Some(raw.into());
        self.parsed = OnceLock::new();
        Ok(())
    }

    /// Asks `source` for this interface's descriptor and stores it.
    pub fn populate_from(&mut self, source: &impl DescriptorSource) -> Result<(), InterfaceError> {
        if self.raw.is_some() {
            return Err(InterfaceError::AlreadyPopulated(self.name.clone()));
        }
        let raw = source.fetch(&self.name).map_err(|err| InterfaceError::Fetch {
            name: self.name.clone(),
            source: err,
        })?;
        debug!("Fetched {} byte descriptor for {}", raw.len(), self.name);
        self.populate(raw)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn descriptor(&self) -> Option<&str> {
        self.raw.as_deref()
    }

    pub fn is_populated(&self) -> bool {
        self.raw.is_some()
    }

    pub fn config(&self) -> &ParseConfig {
        &self.config
    }

    /// The parsed descriptor. Unpopulated interfaces parse as empty.
    pub fn parsed(&self) -> &Descriptor {
        self.parsed.get_or_init(|| match &self.raw {
            Some(raw) => Descriptor::parse(raw, &self.config),
            None => Descriptor::default(),
        })
    }

    /// The address of the first `inet` line.
    pub fn ip(&self) -> Option<Ipv4Addr> {
        self.parsed().ipv4_line()?.address.as_ref().ok().copied()
    }

    /// The prefix length of the first `inet` line, `0..=32`.
    pub fn prefix(&self) -> Option<u8> {
        self.parsed().ipv4_line()?.prefix.as_ref().ok().copied()
    }

    /// [`Self::prefix`] rendered as a dotted-quad netmask.
    pub fn mask(&self) -> Option<Ipv4Addr> {
        ip::prefix_to_mask(self.prefix()?)
    }

    pub fn broadcast(&self) -> Option<Ipv4Addr> {
        self.parsed().ipv4_line()?.broadcast
    }

    pub fn network(&self) -> Option<Ipv4Network> {
        Ipv4Network::new(self.ip()?, self.prefix()?).ok()
    }

    pub fn try_ipv4(&self) -> Result<Option<Ipv4Entry>, ParseError> {
        self.parsed().try_ipv4()
    }

    /// The first global-scope `inet6` address. Link-local addresses are
    /// skipped unless the interface was configured with a link-local fallback.
    pub fn ip6(&self) -> Option<Ipv6Addr> {
        self.parsed().ipv6_line()?.address.as_ref().ok().copied()
    }

    /// The prefix length of the line selected by [`Self::ip6`], `0..=128`.
    pub fn prefix6(&self) -> Option<u8> {
        self.parsed().ipv6_line()?.prefix.as_ref().ok().copied()
    }

    /// IPv6 has no dotted mask notation; callers receive the prefix length.
    pub fn mask6(&self) -> Option<u8> {
        self.prefix6()
    }

    pub fn network6(&self) -> Option<Ipv6Network> {
        Ipv6Network::new(self.ip6()?, self.prefix6()?).ok()
    }

    pub fn try_ipv6(&self) -> Result<Option<Ipv6Entry>, ParseError> {
        self.parsed().try_ipv6()
    }

    /// Every well-formed `inet6` entry, in listing order.
    pub fn ipv6_addresses(&self) -> Vec<Ipv6Entry> {
        self.parsed()
            .ipv6_lines()
            .iter()
            .filter_map(|line| line.entry().ok())
            .collect()
    }

    fn header(&self) -> Option<&Header> {
        self.parsed().header()
    }

    pub fn index(&self) -> Option<u32> {
        self.header().map(|h| h.index)
    }

    pub fn flags(&self) -> &[String] {
        self.header().map(|h| h.flags.as_slice()).unwrap_or_default()
    }

    pub fn mtu(&self) -> Option<u32> {
        self.header()?.mtu
    }

    pub fn state(&self) -> Option<LinkState> {
        self.header()?.state
    }

    /// Administratively up, i.e. the `UP` flag is set.
    pub fn is_up(&self) -> bool {
        self.header().is_some_and(|h| h.has_flag("UP"))
    }

    pub fn link_type(&self) -> Option<&str> {
        self.parsed().link().map(|l| l.kind.as_str())
    }

    pub fn mac(&self) -> Option<MacAddr> {
        self.parsed().link()?.mac()
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
