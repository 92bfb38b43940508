// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Host test-case recording for tst reports.
//!
//! A [`Recorder`] is the handle a report writes into when an assertion
//! fails. [`TestCase`] is the recorder used under the standard `cargo test`
//! harness: it collects every failure message and turns them into a
//! [`CaseFailure`] once the test body is done.

mod case;
mod recorder;

pub use case::{CaseFailure, Failure, TestCase};
pub use recorder::Recorder;
