// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! Thin wrappers around the 'tracing' crate.
//! Parser modules log through these macros so that none of them
//! depend on tracing directly. Installing a subscriber is left to
//! whoever embeds the library.

#[macro_export]
macro_rules! trace {
    ($($arg:tt)+) => {
        tracing::trace!(status = "trace", $($arg)+)
    };
}

#[macro_export]
macro_rules! debug {
    ($($arg:tt)+) => {
        tracing::debug!(status = "debug", $($arg)+)
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)+) => {
        tracing::warn!(status = "warn", $($arg)+)
    };
}
