// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Recorder trait implemented by host test harnesses.

/// Per-case handle supplied by the host test harness.
pub trait Recorder {
    /// Mark the case failed with `message`. Execution continues.
    fn error(&self, message: &str);

    /// Abort the case after an unrecoverable setup error.
    ///
    /// Harnesses that cannot unwind record the message and return; callers
    /// then treat the step as failed.
    fn fatal(&self, message: &str);

    /// Whether anything has marked the case failed.
    fn has_failed(&self) -> bool;
}

impl<R: Recorder + ?Sized> Recorder for &R {
    fn error(&self, message: &str) {
        (**self).error(message)
    }

    fn fatal(&self, message: &str) {
        (**self).fatal(message)
    }

    fn has_failed(&self) -> bool {
        (**self).has_failed()
    }
}
