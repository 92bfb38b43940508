// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Test invocation wrapper.
//!
//! A [`Session`] owns the reporter and the lifecycle hooks for a suite and
//! runs each test body between them. Configure hooks before tests start;
//! a session is shared read-only while bodies run.

use crate::hooks::{AfterEachGuard, Hooks};
use crate::report::{caller_id, Reporter};
use std::panic::Location;
use std::time::{Duration, Instant};
use tst_case::Recorder;

/// What a test body reports back
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Outcome {
    /// Test name; empty means "use the call site"
    pub name: String,
    pub description: String,
    pub failed: bool,
}

impl Outcome {
    pub fn new(name: impl Into<String>, description: impl Into<String>, failed: bool) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            failed,
        }
    }

    /// A passing outcome
    pub fn passed(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(name, description, false)
    }

    /// A failing outcome
    pub fn failed(name: impl Into<String>) -> Self {
        Self::new(name, String::new(), true)
    }

    /// An outcome named after the session call site
    pub fn unnamed(failed: bool) -> Self {
        Self::new(String::new(), String::new(), failed)
    }
}

impl<N, D> From<(N, D, bool)> for Outcome
where
    N: Into<String>,
    D: Into<String>,
{
    fn from((name, description, failed): (N, D, bool)) -> Self {
        Self::new(name, description, failed)
    }
}

/// Reporter plus lifecycle hooks for a suite
#[derive(Clone, Debug, Default)]
pub struct Session {
    reporter: Reporter,
    hooks: Hooks,
}

impl Session {
    pub fn new(reporter: Reporter) -> Self {
        Self {
            reporter,
            hooks: Hooks::new(),
        }
    }

    /// Session using [`Reporter::from_env`]
    pub fn from_env() -> Self {
        Self::new(Reporter::from_env())
    }

    /// Builder: replace the hooks
    pub fn with_hooks(mut self, hooks: Hooks) -> Self {
        self.hooks = hooks;
        self
    }

    pub fn reporter(&self) -> &Reporter {
        &self.reporter
    }

    pub fn reporter_mut(&mut self) -> &mut Reporter {
        &mut self.reporter
    }

    pub fn hooks(&self) -> &Hooks {
        &self.hooks
    }

    pub fn hooks_mut(&mut self) -> &mut Hooks {
        &mut self.hooks
    }

    /// See [`Reporter::testing`]
    pub fn testing(&self, name: &str, description: &str, enabled: bool) -> bool {
        self.reporter.testing(name, description, enabled)
    }

    /// Run a test body that does not need the recorder.
    ///
    /// Returns whether the body failed.
    #[track_caller]
    pub fn run<F, O>(&self, recorder: &dyn Recorder, body: F) -> bool
    where
        F: FnOnce() -> O,
        O: Into<Outcome>,
    {
        self.run_at(Location::caller(), recorder, |_| body().into())
    }

    /// Run a test body that receives the recorder.
    ///
    /// Order: before-each, body (timed), report, after-each. The after-each
    /// hook also runs if the body unwinds. Returns whether the body failed.
    #[track_caller]
    pub fn run_with<F, O>(&self, recorder: &dyn Recorder, body: F) -> bool
    where
        F: FnOnce(&dyn Recorder) -> O,
        O: Into<Outcome>,
    {
        self.run_at(Location::caller(), recorder, |r| body(r).into())
    }

    fn run_at(
        &self,
        location: &Location<'_>,
        recorder: &dyn Recorder,
        body: impl FnOnce(&dyn Recorder) -> Outcome,
    ) -> bool {
        self.hooks.run_before_each();
        let _after = AfterEachGuard::new(&self.hooks);

        let start = Instant::now();
        let outcome = body(recorder);
        let elapsed = format_elapsed(start.elapsed());

        let name = if outcome.name.is_empty() {
            caller_id(location)
        } else {
            outcome.name
        };

        if outcome.failed {
            self.reporter
                .failed(recorder, &name, format_args!("{:>15}: {}", elapsed, name));
        } else {
            self.reporter.passed(
                recorder,
                &name,
                format_args!("{:>15}: {} {}", elapsed, name, outcome.description),
            );
        }
        outcome.failed
    }
}

fn format_elapsed(elapsed: Duration) -> String {
    format!("{:?}", elapsed)
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
