// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! Error types shared by the descriptor parser and the interface model.
//!
//! A missing `inet`/`inet6` line is never an error; these types only describe
//! lines that were recognised but could not be interpreted, and misuse of the
//! interface lifecycle.

/// A recognised address line whose fields could not be interpreted.
///
/// `line` is 1-based and counts lines after separator normalisation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("line {line}: '{token}' is not a valid {family} address")]
    MalformedAddress {
        line: usize,
        family: AddressFamily,
        token: String,
    },
    #[error("line {line}: '{token}' is not a numeric prefix length")]
    MalformedPrefix { line: usize, token: String },
    #[error("line {line}: prefix length {prefix} exceeds {max} for {family}")]
    PrefixOutOfRange {
        line: usize,
        family: AddressFamily,
        prefix: u32,
        max: u8,
    },
}

impl ParseError {
    pub fn line(&self) -> usize {
        match self {
            ParseError::MalformedAddress { line, .. }
            | ParseError::MalformedPrefix { line, .. }
            | ParseError::PrefixOutOfRange { line, .. } => *line,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressFamily {
    Ipv4,
    Ipv6,
}

impl AddressFamily {
    pub fn max_prefix(&self) -> u8 {
        match self {
            AddressFamily::Ipv4 => 32,
            AddressFamily::Ipv6 => 128,
        }
    }
}

impl std::fmt::Display for AddressFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AddressFamily::Ipv4 => write!(f, "IPv4"),
            AddressFamily::Ipv6 => write!(f, "IPv6"),
        }
    }
}

/// Lifecycle errors of a network interface model.
#[derive(Debug, thiserror::Error)]
pub enum InterfaceError {
    #[error("interface {0} already holds a descriptor")]
    AlreadyPopulated(String),
    #[error("failed to fetch descriptor for {name}: {source}")]
    Fetch {
        name: String,
        #[source]
        source: anyhow::Error,
    },
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
