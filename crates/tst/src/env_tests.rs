// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use std::sync::{Mutex, MutexGuard};
use yare::parameterized;

// Serialize tests that touch TST_* and NO_COLOR.
static ENV_LOCK: Mutex<()> = Mutex::new(());

pub(crate) fn env_lock() -> MutexGuard<'static, ()> {
    ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Guard that restores/removes env var on drop, ensuring cleanup even on panic
pub(crate) struct EnvGuard {
    key: &'static str,
    previous: Option<String>,
}

impl EnvGuard {
    pub(crate) fn set(key: &'static str, value: &str) -> Self {
        let previous = std::env::var(key).ok();
        std::env::set_var(key, value);
        Self { key, previous }
    }

    pub(crate) fn remove(key: &'static str) -> Self {
        let previous = std::env::var(key).ok();
        std::env::remove_var(key);
        Self { key, previous }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match &self.previous {
            Some(prev) => std::env::set_var(self.key, prev),
            None => std::env::remove_var(self.key),
        }
    }
}

#[parameterized(
    one = { "1", Some(true) },
    true_lower = { "true", Some(true) },
    true_mixed = { "True", Some(true) },
    yes = { "yes", Some(true) },
    on_padded = { " on ", Some(true) },
    zero = { "0", Some(false) },
    false_upper = { "FALSE", Some(false) },
    off = { "off", Some(false) },
    empty = { "", None },
    garbage = { "maybe", None },
)]
fn parse_bool_values(input: &str, expected: Option<bool>) {
    assert_eq!(parse_bool(input), expected);
}

#[test]
fn show_passed_returns_none_when_unset() {
    let _lock = env_lock();
    let _env = EnvGuard::remove(TST_SHOW_PASSED);
    assert_eq!(show_passed(), None);
}

#[test]
fn show_passed_parses_when_set() {
    let _lock = env_lock();
    let _env = EnvGuard::set(TST_SHOW_PASSED, "yes");
    assert_eq!(show_passed(), Some(true));
}

#[test]
fn show_passed_ignores_garbage() {
    let _lock = env_lock();
    let _env = EnvGuard::set(TST_SHOW_PASSED, "sometimes");
    assert_eq!(show_passed(), None);
}

#[test]
fn color_mode_parses_when_set() {
    let _lock = env_lock();
    let _env = EnvGuard::set(TST_COLOR, "never");
    assert_eq!(color_mode(), Some(ColorMode::Never));
}

#[test]
fn no_color_requires_non_empty_value() {
    let _lock = env_lock();
    {
        let _env = EnvGuard::set(NO_COLOR, "");
        assert!(!no_color());
    }
    {
        let _env = EnvGuard::set(NO_COLOR, "1");
        assert!(no_color());
    }
    let _env = EnvGuard::remove(NO_COLOR);
    assert!(!no_color());
}
