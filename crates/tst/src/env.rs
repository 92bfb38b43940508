// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access.
//!
//! All environment variables read by tst are defined here.
//! Use these accessors instead of calling `std::env::var()` directly.

/// Env var name constants.
mod names {
    pub const TST_SHOW_PASSED: &str = "TST_SHOW_PASSED";
    pub const TST_COLOR: &str = "TST_COLOR";
    pub const NO_COLOR: &str = "NO_COLOR";
}

pub use names::*;

use crate::theme::ColorMode;

/// `TST_SHOW_PASSED` — Print `Passed` lines. Unparseable values are ignored.
pub fn show_passed() -> Option<bool> {
    std::env::var(names::TST_SHOW_PASSED)
        .ok()
        .and_then(|v| parse_bool(&v))
}

/// `TST_COLOR` — `always`, `never` or `auto`.
pub fn color_mode() -> Option<ColorMode> {
    std::env::var(names::TST_COLOR)
        .ok()
        .and_then(|v| ColorMode::parse(&v))
}

/// `NO_COLOR` — Set and non-empty disables automatic coloring.
pub fn no_color() -> bool {
    std::env::var_os(names::NO_COLOR).is_some_and(|v| !v.is_empty())
}

pub(crate) fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" | "y" => Some(true),
        "0" | "false" | "no" | "off" | "n" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
#[path = "env_tests.rs"]
pub(crate) mod tests;
