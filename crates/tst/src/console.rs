// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Console abstraction so report output can be captured in tests.

use parking_lot::Mutex;
use std::fmt;
use std::sync::Arc;

/// Where report text goes
#[derive(Clone)]
pub enum ConsoleHandle {
    /// Standard output, through the harness's capture when running under `cargo test`
    Stdout,
    /// Standard error
    Stderr,
    /// In-memory buffer shared between clones
    Buffer(Arc<Mutex<String>>),
}

impl ConsoleHandle {
    /// Create a stdout handle
    pub fn stdout() -> Self {
        Self::Stdout
    }

    /// Create a stderr handle
    pub fn stderr() -> Self {
        Self::Stderr
    }

    /// Create an empty in-memory buffer
    pub fn buffer() -> Self {
        Self::Buffer(Arc::new(Mutex::new(String::new())))
    }

    /// Write text as-is
    pub fn write_str(&self, text: &str) {
        match self {
            // print!/eprint! go through the test harness's output capture
            Self::Stdout => print!("{}", text),
            Self::Stderr => eprint!("{}", text),
            Self::Buffer(buf) => buf.lock().push_str(text),
        }
    }

    /// Write text followed by a line break
    pub fn write_line(&self, line: impl fmt::Display) {
        self.write_str(&format!("{}\n", line));
    }

    /// Buffered text so far (None for stdout/stderr)
    pub fn contents(&self) -> Option<String> {
        match self {
            Self::Buffer(buf) => Some(buf.lock().clone()),
            Self::Stdout | Self::Stderr => None,
        }
    }

    /// Take and clear the buffered text (None for stdout/stderr)
    pub fn take(&self) -> Option<String> {
        match self {
            Self::Buffer(buf) => Some(std::mem::take(&mut *buf.lock())),
            Self::Stdout | Self::Stderr => None,
        }
    }

    /// Check if this is an in-memory buffer
    pub fn is_buffer(&self) -> bool {
        matches!(self, Self::Buffer(_))
    }
}

impl Default for ConsoleHandle {
    fn default() -> Self {
        Self::stdout()
    }
}

impl fmt::Debug for ConsoleHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdout => f.write_str("Stdout"),
            Self::Stderr => f.write_str("Stderr"),
            Self::Buffer(buf) => f.debug_tuple("Buffer").field(&buf.lock().len()).finish(),
        }
    }
}

#[cfg(test)]
#[path = "console_tests.rs"]
mod tests;
