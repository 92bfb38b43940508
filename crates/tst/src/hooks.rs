// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Before/after-each lifecycle hooks.

use std::fmt;
use std::sync::Arc;

/// A zero-argument lifecycle callback
pub type Hook = Arc<dyn Fn() + Send + Sync>;

fn noop() -> Hook {
    Arc::new(|| {})
}

/// Callbacks run around every test body executed by a session.
///
/// Both slots default to no-ops and are never empty.
#[derive(Clone)]
pub struct Hooks {
    before_each: Hook,
    after_each: Hook,
}

impl Hooks {
    /// Hooks with both slots set to no-ops
    pub fn new() -> Self {
        Self {
            before_each: noop(),
            after_each: noop(),
        }
    }

    /// Set the callback run before each test body
    pub fn set_before_each(&mut self, hook: impl Fn() + Send + Sync + 'static) {
        self.before_each = Arc::new(hook);
    }

    /// Set the callback run after each test body
    pub fn set_after_each(&mut self, hook: impl Fn() + Send + Sync + 'static) {
        self.after_each = Arc::new(hook);
    }

    /// Builder form of [`Hooks::set_before_each`]
    pub fn with_before_each(mut self, hook: impl Fn() + Send + Sync + 'static) -> Self {
        self.set_before_each(hook);
        self
    }

    /// Builder form of [`Hooks::set_after_each`]
    pub fn with_after_each(mut self, hook: impl Fn() + Send + Sync + 'static) -> Self {
        self.set_after_each(hook);
        self
    }

    /// Restore the before-each no-op
    pub fn clear_before_each(&mut self) {
        self.before_each = noop();
    }

    /// Restore the after-each no-op
    pub fn clear_after_each(&mut self) {
        self.after_each = noop();
    }

    /// Restore both no-ops
    pub fn reset(&mut self) {
        self.clear_before_each();
        self.clear_after_each();
    }

    /// Current before-each callback
    pub fn before_each(&self) -> &Hook {
        &self.before_each
    }

    /// Current after-each callback
    pub fn after_each(&self) -> &Hook {
        &self.after_each
    }

    pub fn run_before_each(&self) {
        (self.before_each)()
    }

    pub fn run_after_each(&self) {
        (self.after_each)()
    }
}

impl Default for Hooks {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Hooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hooks").finish_non_exhaustive()
    }
}

/// Runs the after-each hook when dropped, including during unwinding.
pub(crate) struct AfterEachGuard<'a> {
    hooks: &'a Hooks,
}

impl<'a> AfterEachGuard<'a> {
    pub(crate) fn new(hooks: &'a Hooks) -> Self {
        Self { hooks }
    }
}

impl Drop for AfterEachGuard<'_> {
    fn drop(&mut self) {
        self.hooks.run_after_each();
    }
}

#[cfg(test)]
#[path = "hooks_tests.rs"]
mod tests;
