// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Accumulating check for tests with several fallible setup steps.
//!
//! Every step runs; the first failure latches and only [`Chk::reset`]
//! clears it. A single [`Chk::show_pass_fail`] reports the verdict.
//!
//! ```
//! use tst::{Check, Chk};
//!
//! let mut chk = Chk::new();
//! let mut scratch = vec![0u8; 4];
//! let parsed = "17".parse::<u32>();
//! chk.err(&parsed, "parse port");
//! chk.tru(
//!     parsed == Ok(17),
//!     Check::msg(format_args!("unexpected port {:?}", parsed)).on_failure(|| scratch.clear()),
//! );
//! assert!(chk.ok());
//! assert_eq!(scratch.len(), 4);
//! ```

use crate::diagnostic::Diagnostics;
use crate::report::Reporter;
use std::fmt;
use tst_case::Recorder;

/// Options for a single [`Chk::tru`] / [`Chk::err`] step.
///
/// Pass `()` for a step with neither message nor cleanup.
#[derive(Default)]
pub struct Check<'a> {
    message: Option<String>,
    on_failure: Option<Box<dyn FnOnce() + 'a>>,
}

impl<'a> Check<'a> {
    /// No message, no cleanup
    pub fn new() -> Self {
        Self::default()
    }

    /// Diagnostic printed when the step fails. An empty message prints
    /// nothing.
    pub fn msg(message: impl fmt::Display) -> Self {
        Self::from(message.to_string())
    }

    /// Cleanup run once when the step fails
    pub fn on_failure(mut self, cleanup: impl FnOnce() + 'a) -> Self {
        self.on_failure = Some(Box::new(cleanup));
        self
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn has_cleanup(&self) -> bool {
        self.on_failure.is_some()
    }
}

impl fmt::Debug for Check<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Check")
            .field("message", &self.message)
            .field("on_failure", &self.on_failure.is_some())
            .finish()
    }
}

impl From<&str> for Check<'_> {
    fn from(message: &str) -> Self {
        Self::msg(message)
    }
}

impl From<()> for Check<'_> {
    fn from(_: ()) -> Self {
        Self::new()
    }
}

impl From<String> for Check<'_> {
    fn from(message: String) -> Self {
        Self {
            message: (!message.is_empty()).then_some(message),
            on_failure: None,
        }
    }
}

impl From<fmt::Arguments<'_>> for Check<'_> {
    fn from(args: fmt::Arguments<'_>) -> Self {
        Self::msg(args)
    }
}

/// Latching pass/fail state across several steps
#[derive(Clone, Debug, Default)]
pub struct Chk {
    failed: bool,
    diagnostics: Diagnostics,
}

impl Chk {
    /// Clean check reporting diagnostics on stderr
    pub fn new() -> Self {
        Self::default()
    }

    /// Clean check reporting diagnostics to `diagnostics`
    pub fn with_diagnostics(diagnostics: Diagnostics) -> Self {
        Self {
            failed: false,
            diagnostics,
        }
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// Clear a latched failure
    pub fn reset(&mut self) {
        self.failed = false;
    }

    /// Latch a failure unconditionally
    pub fn fail(&mut self) {
        self.failed = true;
    }

    /// True while nothing has failed
    pub fn ok(&self) -> bool {
        !self.failed
    }

    pub fn is_failed(&self) -> bool {
        self.failed
    }

    /// Step that fails when `condition` is false. Returns whether it failed.
    ///
    /// On failure the message (if any) is printed, then the cleanup runs,
    /// then the failure latches.
    pub fn tru<'a>(&mut self, condition: bool, check: impl Into<Check<'a>>) -> bool {
        if !condition {
            let check = check.into();
            if let Some(message) = &check.message {
                self.diagnostics.error(message);
            }
            self.latch(check);
        }
        !condition
    }

    /// Step that fails when `result` is an error. Returns whether it failed.
    ///
    /// The message, when given, is printed with the error appended.
    pub fn err<'a, T, E: fmt::Display>(
        &mut self,
        result: &Result<T, E>,
        check: impl Into<Check<'a>>,
    ) -> bool {
        match result {
            Ok(_) => false,
            Err(e) => {
                let check = check.into();
                if let Some(message) = &check.message {
                    self.diagnostics
                        .error(format_args!("{}: {}", message, e));
                }
                self.latch(check);
                true
            }
        }
    }

    /// Step that fails unless `actual` equals `expected` (both may be None).
    ///
    /// A mismatch prints the received error and the expected one.
    pub fn err_is<E>(&mut self, actual: Option<&E>, expected: Option<&E>) -> bool
    where
        E: PartialEq + fmt::Debug + ?Sized,
    {
        if actual == expected {
            return false;
        }
        self.diagnostics
            .error(format_args!("Received error: {:?}", actual));
        self.diagnostics
            .warning(format_args!("Should have received: {:?}", expected));
        self.failed = true;
        true
    }

    /// Print the verdict under `who`. Returns whether the check failed.
    ///
    /// State is left as-is; call [`Chk::reset`] before reusing.
    pub fn show_pass_fail(&self, reporter: &Reporter, recorder: &dyn Recorder, who: &str) -> bool {
        if self.failed {
            reporter.failed(recorder, who, who);
        } else {
            reporter.passed(recorder, who, who);
        }
        self.failed
    }

    fn latch(&mut self, check: Check<'_>) {
        if let Some(cleanup) = check.on_failure {
            cleanup();
        }
        self.failed = true;
    }
}

#[cfg(test)]
#[path = "chk_tests.rs"]
mod tests;
