// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Reporting primitives: banners, pass/fail lines and comparison helpers.
//!
//! Every helper returns `true` when the check FAILED, so results can be
//! folded with `||` across a test body.

use crate::console::ConsoleHandle;
use crate::diagnostic::Diagnostics;
use crate::digest::{verify_file_digest, Algorithm};
use crate::options::Options;
use crate::slice::{compare_slices, SliceRef};
use crate::text::{colorize_lines, hex_dump};
use crate::theme::Theme;
use std::fmt::Display;
use std::panic::{Location, UnwindSafe};
use std::path::Path;
use tst_case::Recorder;

/// Label column for an enabled test
pub const TESTING_LABEL: &str = " Testing: ";
/// Label column for a disabled test
pub const DISABLED_LABEL: &str = " Disabled ";
/// Label column for a passed check
pub const PASSED_LABEL: &str = "  Passed  ";
/// Label column for a failed check
pub const FAILED_LABEL: &str = "  Failed  ";

/// Writes report lines with a fixed theme and options
#[derive(Clone, Debug)]
pub struct Reporter {
    theme: Theme,
    options: Options,
    console: ConsoleHandle,
}

impl Reporter {
    pub fn new(theme: Theme, options: Options, console: ConsoleHandle) -> Self {
        Self {
            theme,
            options,
            console,
        }
    }

    /// Global theme, options from env and args, stdout
    pub fn from_env() -> Self {
        Self::new(Theme::global(), Options::load(), ConsoleHandle::stdout())
    }

    /// Plain reporter writing into an in-memory buffer
    pub fn buffered(options: Options) -> Self {
        Self::new(Theme::PLAIN, options, ConsoleHandle::buffer())
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn console(&self) -> &ConsoleHandle {
        &self.console
    }

    /// Toggle printing of `Passed` lines
    pub fn set_show_passed(&mut self, show: bool) {
        self.options.show_passed = show;
    }

    /// Diagnostics sink matching this reporter's console.
    ///
    /// Buffered reporters keep diagnostics in the same buffer; stdout
    /// reporters send them to stderr.
    pub fn diagnostics(&self) -> Diagnostics {
        match &self.console {
            ConsoleHandle::Buffer(_) => {
                Diagnostics::new(self.console.clone(), self.theme.is_colored())
            }
            ConsoleHandle::Stdout | ConsoleHandle::Stderr => {
                Diagnostics::new(ConsoleHandle::stderr(), self.theme.is_colored())
            }
        }
    }

    /// Announce a test. Returns `enabled` so it can guard the body.
    pub fn testing(&self, name: &str, description: &str, enabled: bool) -> bool {
        let (style, label) = if enabled {
            (self.theme.testing, TESTING_LABEL)
        } else {
            (self.theme.skipped, DISABLED_LABEL)
        };
        self.console.write_line(format_args!(
            "{}{}{} {:<20} {}",
            style, label, self.theme.normal, name, description
        ));
        enabled
    }

    /// Print a pass line when `show_passed` is on
    pub fn passed(&self, _recorder: &dyn Recorder, _id: &str, message: impl Display) {
        if self.options.show_passed {
            self.console.write_line(format_args!(
                "{}{}{} {}",
                self.theme.passed, PASSED_LABEL, self.theme.normal, message
            ));
        }
    }

    /// Print a fail line and mark the case failed with `id`
    pub fn failed(&self, recorder: &dyn Recorder, id: &str, message: impl Display) {
        self.console.write_line(format_args!(
            "{}{}{} {}",
            self.theme.failed, FAILED_LABEL, self.theme.normal, message
        ));
        recorder.error(id);
    }

    /// Report a boolean outcome under `who`. Returns `!passed`.
    pub fn check(&self, recorder: &dyn Recorder, who: &str, passed: bool) -> bool {
        if passed {
            self.passed(recorder, who, who);
        } else {
            self.failed(recorder, who, who);
        }
        !passed
    }

    /// Byte-slice equality
    pub fn bin(&self, recorder: &dyn Recorder, who: &str, a: &[u8], b: &[u8]) -> bool {
        self.check(recorder, who, a == b)
    }

    /// Passes iff `f` panics
    pub fn panics<F>(&self, recorder: &dyn Recorder, who: &str, f: F) -> bool
    where
        F: FnOnce() + UnwindSafe,
    {
        let panicked = std::panic::catch_unwind(f).is_err();
        self.check(recorder, who, panicked)
    }

    /// Compare bytes, naming the check after the call site.
    ///
    /// On mismatch both buffers are hex dumped: expected in green, actual
    /// in red.
    #[track_caller]
    pub fn cmp_bytes(&self, recorder: &dyn Recorder, expected: &[u8], actual: &[u8]) -> bool {
        let who = caller_id(Location::caller());
        let failed = expected != actual;
        if failed {
            self.failed(recorder, &who, &who);
            self.console.write_str(self.theme.green);
            self.console.write_str(&hex_dump(expected));
            self.console.write_str(self.theme.red);
            self.console.write_str(&hex_dump(actual));
            self.console.write_str(self.theme.normal);
        } else {
            self.passed(recorder, &who, &who);
        }
        failed
    }

    /// Compare two tagged slices. Mismatches are reported as
    /// `"<who>: <reason>"`.
    pub fn slice<'a>(
        &self,
        recorder: &dyn Recorder,
        who: &str,
        a: impl Into<SliceRef<'a>>,
        b: impl Into<SliceRef<'a>>,
    ) -> bool {
        match compare_slices(a.into(), b.into()) {
            Ok(()) => {
                self.passed(recorder, who, who);
                false
            }
            Err(mismatch) => {
                let message = format!("{}: {}", who, mismatch);
                self.failed(recorder, &message, &message);
                true
            }
        }
    }

    /// MD5 of `path` against the accepted values; see [`Reporter::digest_file`].
    #[track_caller]
    pub fn md5_sum_file<S: AsRef<str>>(
        &self,
        recorder: &dyn Recorder,
        path: impl AsRef<Path>,
        accepted: &[S],
    ) -> bool {
        self.digest_file(recorder, path, Algorithm::Md5, accepted)
    }

    /// Digest `path` and check it against the accepted values.
    ///
    /// Returns `true` when nothing matched. A mismatch prints the computed
    /// digest next to every accepted value; the case is left for the caller
    /// to mark. An unreadable file goes to the recorder's fatal path.
    #[track_caller]
    pub fn digest_file<S: AsRef<str>>(
        &self,
        recorder: &dyn Recorder,
        path: impl AsRef<Path>,
        algorithm: Algorithm,
        accepted: &[S],
    ) -> bool {
        let location = Location::caller();
        let check = match verify_file_digest(path.as_ref(), algorithm, accepted) {
            Ok(check) => check,
            Err(e) => {
                self.diagnostics().error(&e);
                recorder.fatal(&e.to_string());
                return true;
            }
        };
        if check.matched() {
            return false;
        }
        let origin = format!(" @ {} in {}", location.line(), location.file());
        self.console
            .write_line(check.render_mismatch(&self.theme, &origin));
        true
    }

    /// Print each line of `src` in the failure style
    pub fn as_red(&self, src: &str) {
        self.console
            .write_str(&colorize_lines(self.theme.failed, self.theme.normal, src));
    }

    /// Print each line of `src` in the skipped style
    pub fn as_yellow(&self, src: &str) {
        self.console
            .write_str(&colorize_lines(self.theme.skipped, self.theme.normal, src));
    }

    /// Print each line of `src` in the passed style
    pub fn as_green(&self, src: &str) {
        self.console
            .write_str(&colorize_lines(self.theme.passed, self.theme.normal, src));
    }
}

impl Default for Reporter {
    fn default() -> Self {
        Self::from_env()
    }
}

/// `"<file> @ <line>"` identifier for a call site
pub(crate) fn caller_id(location: &Location<'_>) -> String {
    format!("{} @ {}", location.file(), location.line())
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
