// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Test-support helpers layered over the host test harness.
//!
//! A [`Session`] wraps each test body with before/after hooks, times it and
//! prints a colorized pass/fail line. [`Chk`] accumulates several fallible
//! setup steps into one verdict. [`Reporter`] carries the reporting
//! primitives: banners, pass/fail lines, byte and slice comparison, file
//! digest checks and multi-line colorizers.
//!
//! Every failure is recorded on a [`TestCase`]; `finish` hands them to the
//! harness as the test's `Err`.
//!
//! ```no_run
//! use tst::{CaseFailure, Outcome, Session, TestCase};
//!
//! fn parse_header() -> Result<(), CaseFailure> {
//!     let session = Session::from_env();
//!     let case = TestCase::new("parse_header");
//!     if session.testing("parse", "round-trips a header", true) {
//!         session.run(&case, || Outcome::passed("parse header", "16 bytes"));
//!     }
//!     case.finish()
//! }
//! ```

pub mod chk;
pub mod console;
pub mod diagnostic;
pub mod digest;
pub mod env;
pub mod error;
pub mod hooks;
pub mod options;
pub mod report;
pub mod session;
pub mod slice;
pub mod text;
pub mod theme;

pub use chk::{Check, Chk};
pub use console::ConsoleHandle;
pub use diagnostic::Diagnostics;
pub use digest::{file_digest, verify_file_digest, Algorithm, DigestCheck, DigestError};
pub use error::Error;
pub use hooks::{Hook, Hooks};
pub use options::Options;
pub use report::Reporter;
pub use session::{Outcome, Session};
pub use slice::{compare_slices, ElementType, SliceMismatch, SliceRef};
pub use theme::{ColorMode, Theme};
pub use tst_case::{CaseFailure, Recorder, TestCase};
