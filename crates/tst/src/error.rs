// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Crate-level error type.

use crate::digest::DigestError;
use thiserror::Error;

/// Errors surfaced by tst's fallible entry points
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Digest(#[from] DigestError),

    #[error("invalid tst option: {0}")]
    Options(#[from] clap::Error),
}
