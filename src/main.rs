// SPDX-FileCopyrightText: 2026 Sébastien Helleu <flashcode@flashtux.org>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Pocheck checks the structure of a gettext file (*.po) and reports the entries with
//! problems.
//!
//! The file is split into entries separated by blank lines, then each entry is checked:
//!
//! - `msgid` and `msgstr` lines must be followed by a quoted string
//! - quotes inside the strings must be escaped and balanced
//! - continued string lines must be closed
//! - each entry must have a `msgid` and a `msgstr`
//!
//! The encoding of the file is detected by trying a list of encodings (UTF-8, Chinese,
//! Japanese and Western European encodings).
//!
//! The exit code is 0 if the file has no problem, 1 otherwise.

mod args;
mod checker;
mod config;
mod diagnostic;
mod po;
mod result;

use clap::{CommandFactory, Parser, error::ErrorKind};

use crate::args::Cli;
use crate::checker::run_check;

/// Handle a command line error and return the exit code: help and version are displayed
/// with exit code 0, any other error displays the usage on stdout with exit code 1.
fn args_error_code(err: &clap::Error) -> i32 {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            let _ = err.print();
            0
        }
        _ => {
            println!("{}", Cli::command().render_help());
            1
        }
    }
}

fn main() {
    let args = match Cli::try_parse() {
        Ok(args) => args,
        Err(err) => std::process::exit(args_error_code(&err)),
    };
    let rc = run_check(&args);
    std::process::exit(rc);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_error_code(args: &[&str]) -> i32 {
        let err = Cli::try_parse_from(args).unwrap_err();
        args_error_code(&err)
    }

    #[test]
    fn test_args_error_code() {
        assert_eq!(parse_error_code(&["pocheck"]), 1);
        assert_eq!(parse_error_code(&["pocheck", "fr.po", "de.po"]), 1);
        assert_eq!(parse_error_code(&["pocheck", "--unknown", "fr.po"]), 1);
        assert_eq!(parse_error_code(&["pocheck", "--help"]), 0);
        assert_eq!(parse_error_code(&["pocheck", "--version"]), 0);
    }
}
