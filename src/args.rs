// SPDX-FileCopyrightText: 2026 Sébastien Helleu <flashcode@flashtux.org>
//
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(
    author,
    name = "pocheck",
    about = "Check the structure of a gettext PO file.",
    after_help = "Checks performed:
  1. quotes of msgid and msgstr lines
  2. closing quote of continued string lines
  3. escaped quotes in strings
  4. completeness of entries (msgid and msgstr)

Examples:
  pocheck translation.po
  pocheck --no-advisory \"/path/to/my files/translation.po\""
)]
#[command(version)]
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// PO file to check
    pub file: PathBuf,

    /// Configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Do not report advisory diagnostics (possibly unescaped quotes)
    #[arg(short = 'a', long)]
    pub no_advisory: bool,

    /// Do not display the original lines of entries with problems
    #[arg(short = 'l', long)]
    pub no_lines: bool,

    /// Quiet mode: do not display the report, only set the exit code
    #[arg(short, long)]
    pub quiet: bool,

    /// Display the encodings tried to decode the file
    #[arg(short, long)]
    pub verbose: bool,
}
