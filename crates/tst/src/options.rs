// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Reporting options from the environment and the command line.
//!
//! The host harness owns the process arguments, so only arguments starting
//! with `--tst.` are parsed here; everything else is left alone.
//!
//! The default libtest harness rejects unknown options before any test
//! runs, so under plain `cargo test` only `TST_SHOW_PASSED` applies. The
//! `--tst.show-passed` flag reaches [`Options::load`] from test targets
//! built with `harness = false` and from custom runners.

use crate::error::Error;
use clap::builder::BoolishValueParser;
use clap::Parser;
use std::ffi::OsString;

/// Prefix shared by every tst command-line flag
pub const FLAG_PREFIX: &str = "--tst.";

/// Reporting options
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Options {
    /// Print `Passed` lines (failures are always printed)
    pub show_passed: bool,
}

/// tst flags mixed into the host harness's arguments
#[derive(Parser, Debug)]
#[command(
    name = "tst",
    no_binary_name = true,
    disable_help_flag = true,
    disable_version_flag = true
)]
struct FlagArgs {
    /// Output PASSED messages
    #[arg(
        long = "tst.show-passed",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        value_parser = BoolishValueParser::new()
    )]
    show_passed: Option<bool>,
}

impl Options {
    /// Options from environment variables only
    pub fn from_env() -> Self {
        Self {
            show_passed: crate::env::show_passed().unwrap_or(false),
        }
    }

    /// Apply `--tst.*` flags found in `args` on top of `self`.
    pub fn with_args<I, T>(self, args: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let flags: Vec<OsString> = args
            .into_iter()
            .map(Into::into)
            .filter(|arg| arg.to_str().is_some_and(|s| s.starts_with(FLAG_PREFIX)))
            .collect();
        let parsed = FlagArgs::try_parse_from(flags)?;
        Ok(Self {
            show_passed: parsed.show_passed.unwrap_or(self.show_passed),
        })
    }

    /// Options from the environment, then the process arguments.
    ///
    /// A malformed `--tst.` flag is reported as a warning and ignored.
    /// Arguments that do not start with `--tst.` (libtest filters and
    /// options) never change the result.
    pub fn load() -> Self {
        let base = Self::from_env();
        match base.with_args(std::env::args_os()) {
            Ok(options) => options,
            Err(e) => {
                crate::diagnostic::print_warning(format_args!("ignoring tst flags: {}", e));
                base
            }
        }
    }
}

#[cfg(test)]
#[path = "options_tests.rs"]
mod tests;
