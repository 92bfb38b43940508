// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

//! End-to-end suites driving a session the way a test file would.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use tst::{Check, Chk, Diagnostics, Hooks, Options, Outcome, Reporter, Session, TestCase};

fn buffered_session() -> Session {
    Session::new(Reporter::buffered(Options { show_passed: true }))
}

fn counting_hooks() -> (Hooks, Arc<AtomicUsize>, Arc<AtomicUsize>) {
    let before = Arc::new(AtomicUsize::new(0));
    let after = Arc::new(AtomicUsize::new(0));
    let before_hook = Arc::clone(&before);
    let after_hook = Arc::clone(&after);
    let hooks = Hooks::new()
        .with_before_each(move || {
            before_hook.fetch_add(1, Ordering::SeqCst);
        })
        .with_after_each(move || {
            after_hook.fetch_add(1, Ordering::SeqCst);
        });
    (hooks, before, after)
}

#[test]
fn hooks_fire_once_per_executed_body() {
    let (hooks, before, after) = counting_hooks();
    let mut session = buffered_session().with_hooks(hooks);
    let case = TestCase::new("hooks_fire_once_per_executed_body");

    if session.testing("enabled", "Should see 3 successful tests", true) {
        assert!(!session.run(&case, || Outcome::passed("passed 1", "")));
        assert!(!session.run(&case, || Outcome::passed("passed 2", "")));
        assert!(!session.run(&case, || Outcome::passed("passed 3", "")));
    }
    if session.testing("ignored", "Should see 'Disabled'", false) {
        session.run(&case, || -> Outcome { panic!("disabled body must not run") });
    }

    assert_eq!(before.load(Ordering::SeqCst), 3);
    assert_eq!(after.load(Ordering::SeqCst), 3);

    session.hooks_mut().reset();
    session.run(&case, || Outcome::passed("after reset", ""));
    assert_eq!(before.load(Ordering::SeqCst), 3);
    assert_eq!(after.load(Ordering::SeqCst), 3);

    case.finish().unwrap();

    let out = session.reporter().console().take().unwrap();
    assert!(out.contains(" Testing:  enabled"));
    assert!(out.contains(" Disabled  ignored"));
    assert_eq!(out.matches("  Passed  ").count(), 4);
}

#[test]
fn failing_body_fails_the_case() {
    let session = buffered_session();
    let case = TestCase::new("failing_body_fails_the_case");

    if session.testing("failing", "Should see a 'Failed' test", true) {
        assert!(session.run(&case, || Outcome::failed("enabled failed")));
    }

    let failure = case.finish().unwrap_err();
    assert_eq!(failure.messages, vec!["enabled failed"]);
}

#[test]
fn user_handled_reports() {
    let session = buffered_session();
    let reporter = session.reporter();
    let case = TestCase::new("user_handled_reports");

    reporter.passed(&case, "user", "Passed user test...");
    reporter.failed(&case, "user", "Failed user test...");

    let file = tempfile::NamedTempFile::new().unwrap();
    std::fs::write(file.path(), b"some fixture").unwrap();
    if reporter.md5_sum_file(&case, file.path(), &["failed-md5-sum-value"]) {
        reporter.failed(&case, "user", "Failed md5 test...");
    } else {
        reporter.passed(&case, "user", "Passed md5 test...");
    }

    let out = reporter.console().take().unwrap();
    assert_eq!(out.matches("  Passed  ").count(), 1);
    assert_eq!(out.matches("  Failed  ").count(), 2);
    assert!(out.contains("-- endianess issue?"));
    assert_eq!(case.finish().unwrap_err().messages, vec!["user", "user"]);
}

#[test]
fn multi_step_setup_with_chk() {
    let session = buffered_session();
    let case = TestCase::new("multi_step_setup_with_chk");
    let dir = tempfile::tempdir().unwrap();

    let failed = session.run_with(&case, |recorder| {
        let mut chk = Chk::with_diagnostics(Diagnostics::buffer());
        let config = dir.path().join("config.toml");
        let written = std::fs::write(&config, "port = 17\n");
        chk.err(&written, "write config");
        let read = std::fs::read_to_string(&config);
        chk.err(&read, "read config");
        chk.tru(
            read.as_deref().map(|s| s.contains("17")).unwrap_or(false),
            Check::msg("port missing"),
        );
        let missing = std::fs::read(dir.path().join("absent"));
        let kind = missing.as_ref().err().map(|e| e.kind());
        chk.err_is(kind.as_ref(), Some(&std::io::ErrorKind::NotFound));

        let failed = chk.show_pass_fail(session.reporter(), recorder, "config setup");
        Outcome::new("config round trip", "write, read, check", failed)
    });

    assert!(!failed);
    case.finish().unwrap();
}

#[test]
fn slice_scenarios() {
    let session = buffered_session();
    let reporter = session.reporter();
    let case = TestCase::new("slice_scenarios");

    assert!(!reporter.slice(&case, "equal", &[1u8, 2, 3], &[1u8, 2, 3]));
    assert!(reporter.slice(&case, "differ", &[1u8, 2, 3], &[1u8, 2, 4]));
    assert!(!reporter.slice(&case, "floats", &vec![0.5f64, 1.5], &vec![0.5f64, 1.5]));

    assert_eq!(
        case.finish().unwrap_err().messages,
        vec!["differ: mismatch at index 2"]
    );
}
