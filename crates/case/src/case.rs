// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `cargo test` recorder implementation.

use crate::recorder::Recorder;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use thiserror::Error;

/// A single recorded failure
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Failure {
    /// Position in the case's failure sequence
    pub seq: u64,
    /// Time since the case was created
    pub elapsed: Duration,
    /// Message handed to [`Recorder::error`] or [`Recorder::fatal`]
    pub message: String,
    /// Whether the failure aborted the case
    pub fatal: bool,
}

/// Returned by [`TestCase::finish`] when any failure was recorded
#[derive(Debug, Error)]
#[error("test case `{name}` failed: {}", messages.join("; "))]
pub struct CaseFailure {
    pub name: String,
    pub messages: Vec<String>,
}

/// Recorder for one test function under the standard harness.
///
/// Clones share the same failure list, so a case can be handed to helper
/// threads or closures and still be finished once.
///
/// Dropping the last handle of a case that recorded failures without
/// calling [`TestCase::finish`] panics, so the enclosing `#[test]` fails
/// either way.
pub struct TestCase {
    name: String,
    start: Instant,
    failures: Arc<Mutex<Vec<Failure>>>,
    finished: Arc<AtomicBool>,
}

impl TestCase {
    /// Create a recorder for the named case
    #[must_use = "a case reports its failures through `finish`"]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            start: Instant::now(),
            failures: Arc::new(Mutex::new(Vec::new())),
            finished: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Name given at construction
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All recorded failures, in order
    pub fn failures(&self) -> Vec<Failure> {
        self.failures.lock().clone()
    }

    /// Recorded failure messages, in order
    pub fn messages(&self) -> Vec<String> {
        self.failures
            .lock()
            .iter()
            .map(|f| f.message.clone())
            .collect()
    }

    /// Number of recorded failures
    pub fn len(&self) -> usize {
        self.failures.lock().len()
    }

    /// Check if nothing has been recorded
    pub fn is_empty(&self) -> bool {
        self.failures.lock().is_empty()
    }

    /// Consume the case, converting recorded failures into an error.
    ///
    /// Finishing any clone finishes the case for every handle.
    pub fn finish(self) -> Result<(), CaseFailure> {
        self.finished.store(true, Ordering::SeqCst);
        let messages = self.messages();
        if messages.is_empty() {
            Ok(())
        } else {
            Err(CaseFailure {
                name: self.name.clone(),
                messages,
            })
        }
    }

    /// Whether [`TestCase::finish`] was called on any handle
    pub fn is_finished(&self) -> bool {
        self.finished.load(Ordering::SeqCst)
    }

    fn push(&self, message: &str, fatal: bool) {
        let mut failures = self.failures.lock();
        let seq = failures.len() as u64;
        failures.push(Failure {
            seq,
            elapsed: self.start.elapsed(),
            message: message.to_string(),
            fatal,
        });
    }
}

impl Recorder for TestCase {
    fn error(&self, message: &str) {
        self.push(message, false);
    }

    // Unwinding is how the standard harness aborts a test.
    #[allow(clippy::panic)]
    fn fatal(&self, message: &str) {
        self.push(message, true);
        panic!("{}: {}", self.name, message);
    }

    fn has_failed(&self) -> bool {
        !self.failures.lock().is_empty()
    }
}

impl Clone for TestCase {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            start: self.start,
            failures: Arc::clone(&self.failures),
            finished: Arc::clone(&self.finished),
        }
    }
}

impl Drop for TestCase {
    // Unwinding is how the standard harness fails a test.
    #[allow(clippy::panic)]
    fn drop(&mut self) {
        if std::thread::panicking()
            || Arc::strong_count(&self.failures) > 1
            || self.is_finished()
        {
            return;
        }
        let messages = self.messages();
        if !messages.is_empty() {
            panic!(
                "test case `{}` dropped without finish: {}",
                self.name,
                messages.join("; ")
            );
        }
    }
}

#[cfg(test)]
#[path = "case_tests.rs"]
mod tests;
