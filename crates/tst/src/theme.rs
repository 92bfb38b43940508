// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Console color theme for report lines.
//!
//! The theme is resolved once per process from the terminal and the
//! environment; every style is either an SGR escape or the empty string.

use std::io::IsTerminal;
use std::sync::OnceLock;

/// ANSI escape sequences used by the colored theme.
pub mod escape {
    /// Reset to normal text
    pub const RESET: &str = "\x1b[0m";
    /// Bright white on blue
    pub const WHITE_ON_BLUE: &str = "\x1b[97;44m";
    /// Black on red
    pub const BLACK_ON_RED: &str = "\x1b[30;41m";
    /// Black on green
    pub const BLACK_ON_GREEN: &str = "\x1b[30;42m";
    /// Yellow on grey
    pub const YELLOW_ON_GREY: &str = "\x1b[93;100m";
    /// Red text
    pub const RED: &str = "\x1b[31m";
    /// Green text
    pub const GREEN: &str = "\x1b[32m";
    /// Magenta text
    pub const MAGENTA: &str = "\x1b[35m";
}

/// Named styles for every report element
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    pub normal: &'static str,
    pub testing: &'static str,
    pub passed: &'static str,
    pub failed: &'static str,
    pub skipped: &'static str,
    pub red: &'static str,
    pub green: &'static str,
    pub magenta: &'static str,
}

impl Theme {
    /// Theme with every style set to an ANSI escape
    pub const ANSI: Theme = Theme {
        normal: escape::RESET,
        testing: escape::WHITE_ON_BLUE,
        passed: escape::BLACK_ON_GREEN,
        failed: escape::BLACK_ON_RED,
        skipped: escape::YELLOW_ON_GREY,
        red: escape::RED,
        green: escape::GREEN,
        magenta: escape::MAGENTA,
    };

    /// Theme with every style empty
    pub const PLAIN: Theme = Theme {
        normal: "",
        testing: "",
        passed: "",
        failed: "",
        skipped: "",
        red: "",
        green: "",
        magenta: "",
    };

    /// Whether this theme emits escape sequences
    pub fn is_colored(&self) -> bool {
        !self.normal.is_empty()
    }

    /// Pick a theme for a color mode.
    ///
    /// `Auto` colors only on a unix terminal with `NO_COLOR` unset.
    pub fn resolve(mode: ColorMode, is_terminal: bool, no_color: bool) -> Self {
        let colored = match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => cfg!(unix) && is_terminal && !no_color,
        };
        if colored {
            Self::ANSI
        } else {
            Self::PLAIN
        }
    }

    /// Resolve a theme from the current process environment
    pub fn detect() -> Self {
        Self::resolve(
            crate::env::color_mode().unwrap_or_default(),
            std::io::stdout().is_terminal(),
            crate::env::no_color(),
        )
    }

    /// Process-wide theme, detected on first use and fixed afterwards
    pub fn global() -> Self {
        static GLOBAL: OnceLock<Theme> = OnceLock::new();
        *GLOBAL.get_or_init(Self::detect)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::global()
    }
}

/// When to color output
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Parse a `TST_COLOR` value (case-insensitive)
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "auto" => Some(Self::Auto),
            "always" => Some(Self::Always),
            "never" => Some(Self::Never),
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "theme_tests.rs"]
mod tests;
