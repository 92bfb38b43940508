// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `tst-md5` entry point: check a file's digest against accepted values.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use tst::diagnostic::print_error;
use tst::{verify_file_digest, Algorithm, Theme};

/// Exit codes
mod exit_codes {
    /// Digest matched an accepted value
    pub const MATCHED: u8 = 0;
    /// Digest matched nothing
    pub const MISMATCH: u8 = 1;
    /// File could not be opened or read
    pub const IO_ERROR: u8 = 2;
}

/// Check a file's digest against one or more accepted values
#[derive(Parser, Debug)]
#[command(name = "tst-md5", version)]
struct Cli {
    /// Digest algorithm
    #[arg(long, value_enum, default_value = "md5")]
    algorithm: Algorithm,

    /// File to digest
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Accepted lowercase hex digests
    #[arg(value_name = "EXPECTED", required = true)]
    expected: Vec<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match verify_file_digest(&cli.file, cli.algorithm, &cli.expected) {
        Ok(check) if check.matched() => {
            println!("{}: {} OK", check.path.display(), check.digest);
            ExitCode::from(exit_codes::MATCHED)
        }
        Ok(check) => {
            println!("{}", check.render_mismatch(&Theme::global(), ""));
            ExitCode::from(exit_codes::MISMATCH)
        }
        Err(e) => {
            print_error(e);
            ExitCode::from(exit_codes::IO_ERROR)
        }
    }
}
