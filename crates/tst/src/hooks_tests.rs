// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use std::panic::AssertUnwindSafe;
use std::sync::atomic::{AtomicUsize, Ordering};

fn counter() -> (Arc<AtomicUsize>, impl Fn() + Send + Sync + 'static) {
    let count = Arc::new(AtomicUsize::new(0));
    let hook_count = Arc::clone(&count);
    (count, move || {
        hook_count.fetch_add(1, Ordering::SeqCst);
    })
}

#[test]
fn defaults_are_noops() {
    let hooks = Hooks::default();
    hooks.run_before_each();
    hooks.run_after_each();
    (hooks.before_each())();
}

#[test]
fn set_hooks_run() {
    let (before, before_hook) = counter();
    let (after, after_hook) = counter();
    let mut hooks = Hooks::new();
    hooks.set_before_each(before_hook);
    hooks.set_after_each(after_hook);

    hooks.run_before_each();
    hooks.run_before_each();
    hooks.run_after_each();

    assert_eq!(before.load(Ordering::SeqCst), 2);
    assert_eq!(after.load(Ordering::SeqCst), 1);
}

#[test]
fn clear_restores_noop_per_slot() {
    let (before, before_hook) = counter();
    let (after, after_hook) = counter();
    let mut hooks = Hooks::new()
        .with_before_each(before_hook)
        .with_after_each(after_hook);

    hooks.clear_before_each();
    hooks.run_before_each();
    hooks.run_after_each();

    assert_eq!(before.load(Ordering::SeqCst), 0);
    assert_eq!(after.load(Ordering::SeqCst), 1);

    hooks.clear_after_each();
    hooks.run_after_each();
    assert_eq!(after.load(Ordering::SeqCst), 1);
}

#[test]
fn reset_clears_both() {
    let (before, before_hook) = counter();
    let (after, after_hook) = counter();
    let mut hooks = Hooks::new()
        .with_before_each(before_hook)
        .with_after_each(after_hook);

    hooks.reset();
    hooks.run_before_each();
    hooks.run_after_each();

    assert_eq!(before.load(Ordering::SeqCst), 0);
    assert_eq!(after.load(Ordering::SeqCst), 0);
}

#[test]
fn clones_share_callbacks() {
    let (count, hook) = counter();
    let hooks = Hooks::new().with_before_each(hook);
    let clone = hooks.clone();
    clone.run_before_each();
    hooks.run_before_each();
    assert_eq!(count.load(Ordering::SeqCst), 2);
}

#[test]
fn guard_runs_after_each_on_unwind() {
    let (count, hook) = counter();
    let hooks = Hooks::new().with_after_each(hook);

    let result = std::panic::catch_unwind(AssertUnwindSafe(|| {
        let _guard = AfterEachGuard::new(&hooks);
        std::panic::panic_any("body failed");
    }));

    assert!(result.is_err());
    assert_eq!(count.load(Ordering::SeqCst), 1);
}
