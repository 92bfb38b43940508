// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Streamed file digests checked against accepted hex values.

use crate::theme::Theme;
use md5::Md5;
use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Hash used for a file check
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Algorithm {
    /// 128-bit MD5
    #[default]
    Md5,
    /// 256-bit SHA-2
    Sha256,
}

impl Algorithm {
    /// Label prefixed to mismatch reports
    pub fn label(&self) -> &'static str {
        match self {
            Self::Md5 => "MD5CHK",
            Self::Sha256 => "SHA256CHK",
        }
    }

    /// Length of the lowercase hex encoding
    pub fn hex_len(&self) -> usize {
        match self {
            Self::Md5 => 32,
            Self::Sha256 => 64,
        }
    }
}

/// Errors from opening or reading the file being digested
#[derive(Debug, Error)]
pub enum DigestError {
    #[error("File `{}` not found.", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed reading `{}`: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Result of checking one file against its accepted digests
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DigestCheck {
    pub path: PathBuf,
    pub algorithm: Algorithm,
    /// Computed digest, lowercase hex
    pub digest: String,
    /// Accepted values, in the order supplied
    pub accepted: Vec<String>,
}

impl DigestCheck {
    /// Whether the computed digest equals any accepted value
    pub fn matched(&self) -> bool {
        self.accepted.iter().any(|v| *v == self.digest)
    }

    /// A single rejected candidate usually means a byte-order mixup
    pub fn endianness_hint(&self) -> bool {
        self.accepted.len() == 1 && !self.matched()
    }

    /// Mismatch report: computed digest, every accepted value, optional hint.
    ///
    /// `origin` follows the label, e.g. `" @ 12 in tests/io.rs"`.
    pub fn render_mismatch(&self, theme: &Theme, origin: &str) -> String {
        let mut out = format!(
            "{magenta}{label}{origin}: {normal}{path} got( {red}{digest}{normal} )",
            magenta = theme.magenta,
            label = self.algorithm.label(),
            origin = origin,
            normal = theme.normal,
            path = self.path.display(),
            red = theme.red,
            digest = self.digest,
        );
        for value in &self.accepted {
            out.push_str(&format!(
                "\n   exp( {}{}{} )",
                theme.green, value, theme.normal
            ));
        }
        if self.endianness_hint() {
            out.push_str("      -- endianess issue?");
        }
        out
    }
}

/// Digest the full contents of `path`, returned as lowercase hex.
pub fn file_digest(path: &Path, algorithm: Algorithm) -> Result<String, DigestError> {
    let mut file = File::open(path).map_err(|source| DigestError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let digest = match algorithm {
        Algorithm::Md5 => stream::<Md5>(&mut file),
        Algorithm::Sha256 => stream::<Sha256>(&mut file),
    };
    digest.map_err(|source| DigestError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Digest `path` and compare against the accepted values.
pub fn verify_file_digest<S: AsRef<str>>(
    path: &Path,
    algorithm: Algorithm,
    accepted: &[S],
) -> Result<DigestCheck, DigestError> {
    let digest = file_digest(path, algorithm)?;
    Ok(DigestCheck {
        path: path.to_path_buf(),
        algorithm,
        digest,
        accepted: accepted.iter().map(|v| v.as_ref().to_string()).collect(),
    })
}

fn stream<D: Digest + io::Write>(reader: &mut impl Read) -> io::Result<String> {
    let mut hasher = D::new();
    io::copy(reader, &mut hasher)?;
    Ok(hex::encode(hasher.finalize()))
}

#[cfg(test)]
#[path = "digest_tests.rs"]
mod tests;
