// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

/// Options controlling how an interface descriptor is interpreted.
///
/// The defaults reproduce the behaviour callers of the address accessors
/// expect: global IPv6 addresses only, and tolerance for descriptors that
/// were stored with `|` in place of newlines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseConfig {
    /// Lets the IPv6 address accessor fall back to a link-local address.
    ///
    /// # Behavior
    /// * **False** (Default): Only `scope global` addresses are ever selected.
    ///   An interface that only carries an `fe80::` address reports no IPv6 address.
    /// * **True**: When no global address exists, the first link-local address
    ///   (in descriptor order) is selected instead.
    pub link_local_fallback: bool,

    /// Treats the `|` character as a line break.
    ///
    /// Some consumers persist the tool output as a single line, joined with `|`.
    /// The character never appears in a genuine `ip addr show` listing, so
    /// enabling this is harmless for multi-line input.
    pub accept_pipe_separator: bool,
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self {
            link_local_fallback: false,
            accept_pipe_separator: true,
        }
    }
}

impl ParseConfig {
    pub fn with_link_local_fallback(mut self, enabled: bool) -> Self {
        self.link_local_fallback = enabled;
        self
    }

    pub fn with_pipe_separator(mut self, enabled: bool) -> Self {
        self.accept_pipe_separator = enabled;
        self
    }
}
