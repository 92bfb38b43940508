// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error and warning lines emitted by checks.

use crate::console::ConsoleHandle;
use std::fmt::Display;
use std::io::IsTerminal;

/// Sink for `Error:` / `Warning:` diagnostic lines
#[derive(Clone, Debug)]
pub struct Diagnostics {
    console: ConsoleHandle,
    colored: bool,
}

impl Diagnostics {
    /// Diagnostics written to an explicit console
    pub fn new(console: ConsoleHandle, colored: bool) -> Self {
        Self { console, colored }
    }

    /// Diagnostics on stderr, colored when stderr is a terminal
    pub fn stderr() -> Self {
        Self::new(ConsoleHandle::stderr(), std::io::stderr().is_terminal())
    }

    /// Diagnostics captured in memory, never colored
    pub fn buffer() -> Self {
        Self::new(ConsoleHandle::buffer(), false)
    }

    pub fn console(&self) -> &ConsoleHandle {
        &self.console
    }

    /// Print an error line
    pub fn error(&self, msg: impl Display) {
        self.console.write_line(format_error(msg, self.colored));
    }

    /// Print a warning line
    pub fn warning(&self, msg: impl Display) {
        self.console.write_line(format_warning(msg, self.colored));
    }
}

impl Default for Diagnostics {
    fn default() -> Self {
        Self::stderr()
    }
}

/// Print an error message to stderr.
pub fn print_error(msg: impl Display) {
    Diagnostics::stderr().error(msg);
}

/// Print a warning message to stderr.
pub fn print_warning(msg: impl Display) {
    Diagnostics::stderr().warning(msg);
}

fn format_error(msg: impl Display, colored: bool) -> String {
    if colored {
        format!("\x1b[31mError: {}\x1b[0m", msg)
    } else {
        format!("Error: {}", msg)
    }
}

fn format_warning(msg: impl Display, colored: bool) -> String {
    if colored {
        format!("\x1b[33mWarning: {}\x1b[0m", msg)
    } else {
        format!("Warning: {}", msg)
    }
}

#[cfg(test)]
#[path = "diagnostic_tests.rs"]
mod tests;
