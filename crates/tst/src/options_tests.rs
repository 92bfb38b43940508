// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::env::tests::{env_lock, EnvGuard};
use crate::env::TST_SHOW_PASSED;
use yare::parameterized;

#[test]
fn default_hides_passed() {
    assert!(!Options::default().show_passed);
}

#[parameterized(
    bare_flag = { &["--tst.show-passed"], true },
    explicit_true = { &["--tst.show-passed=true"], true },
    explicit_yes = { &["--tst.show-passed=yes"], true },
    explicit_false = { &["--tst.show-passed=false"], false },
    explicit_zero = { &["--tst.show-passed=0"], false },
    harness_args_only = { &["--nocapture", "--test-threads=1", "my_test"], false },
    custom_runner_mixed = { &["--nocapture", "--tst.show-passed", "filter"], true },
    no_args = { &[], false },
)]
fn flags_override_default(args: &[&str], expected: bool) {
    let options = Options::default().with_args(args.iter().copied()).unwrap();
    assert_eq!(options.show_passed, expected);
}

#[test]
fn absent_flag_keeps_base_value() {
    let base = Options { show_passed: true };
    let options = base.with_args(["--exact", "name"]).unwrap();
    assert!(options.show_passed);
}

#[test]
fn flag_can_turn_off_base_value() {
    let base = Options { show_passed: true };
    let options = base.with_args(["--tst.show-passed=off"]).unwrap();
    assert!(!options.show_passed);
}

#[test]
fn unknown_tst_flag_is_an_error() {
    let result = Options::default().with_args(["--tst.bogus"]);
    assert!(matches!(result, Err(Error::Options(_))));
}

#[test]
fn bad_value_is_an_error() {
    let result = Options::default().with_args(["--tst.show-passed=sometimes"]);
    assert!(matches!(result, Err(Error::Options(_))));
}

#[test]
fn from_env_reads_show_passed() {
    let _lock = env_lock();
    let _env = EnvGuard::set(TST_SHOW_PASSED, "1");
    assert!(Options::from_env().show_passed);
}

#[test]
fn flag_beats_environment() {
    let _lock = env_lock();
    let _env = EnvGuard::set(TST_SHOW_PASSED, "true");
    let options = Options::from_env()
        .with_args(["--tst.show-passed=false"])
        .unwrap();
    assert!(!options.show_passed);
}

#[test]
fn load_reads_environment_under_libtest() {
    let _lock = env_lock();
    let _env = EnvGuard::set(TST_SHOW_PASSED, "1");
    assert!(Options::load().show_passed);
}

#[test]
fn load_defaults_to_hidden_under_libtest() {
    let _lock = env_lock();
    let _env = EnvGuard::remove(TST_SHOW_PASSED);
    assert!(!Options::load().show_passed);
}

#[test]
fn libtest_filters_do_not_toggle() {
    let options = Options::default()
        .with_args(["tst-tests", "tst.show-passed", "--exact", "--show-output"])
        .unwrap();
    assert!(!options.show_passed);
}
