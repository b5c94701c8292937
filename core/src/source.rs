// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

use std::collections::HashMap;

/// Defines the contract for obtaining an interface's raw `ip addr show` listing.
///
/// Running the command (or reading a captured copy of its output) is the
/// implementor's business; the model only consumes the text.
pub trait DescriptorSource {
    /// Returns the listing for exactly one interface.
    fn fetch(&self, name: &str) -> anyhow::Result<String>;
}

impl<F> DescriptorSource for F
where
    F: Fn(&str) -> anyhow::Result<String>,
{
    fn fetch(&self, name: &str) -> anyhow::Result<String> {
        self(name)
    }
}

/// A source backed by listings that are already in memory.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    listings: HashMap<String, String>,
}

impl StaticSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, listing: impl Into<String>) -> Self {
        self.insert(name, listing);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, listing: impl Into<String>) {
        self.listings.insert(name.into(), listing.into());
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.listings.keys().map(String::as_str)
    }
}

impl DescriptorSource for StaticSource {
    fn fetch(&self, name: &str) -> anyhow::Result<String> {
        match self.listings.get(name) {
            Some(listing) => Ok(listing.clone()),
            None => anyhow::bail!("no listing for interface {name}"),
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
