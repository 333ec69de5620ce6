// SPDX-FileCopyrightText: 2026 Sébastien Helleu <flashcode@flashtux.org>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Display check result.

use std::fmt::Write;

use colored::Colorize;

use crate::{
    checker::CheckResult,
    config::Settings,
    po::{entry::Entry, escape::EscapeVisibleExt},
};

const SEPARATOR_WIDTH: usize = 80;
const SEPARATOR_ENTRY_WIDTH: usize = 40;

/// Format a string value of an entry (`msgid` or `msgstr`), if the keyword was found.
fn format_value(label: &str, value: Option<&str>) -> Option<String> {
    match value {
        Some("") => Some(format!("{label}: {}", "(empty)".dimmed())),
        Some(value) => Some(format!("{label}: \"{value}\"")),
        None => None,
    }
}

/// Format an entry with problems: values, diagnostics and original lines.
fn format_entry(out: &mut String, entry: &Entry, settings: &Settings) {
    let _ = writeln!(
        out,
        "{} {}",
        format!("[Entry #{}]", entry.number).bold(),
        format!("(line {})", entry.line_number).cyan()
    );
    let _ = writeln!(out, "{}", "-".repeat(SEPARATOR_ENTRY_WIDTH));
    if let Some(msgctxt) = &entry.msgctxt {
        let _ = writeln!(out, "Context: {msgctxt}");
    }
    let values = [
        format_value("Source (msgid)", entry.msgid.as_deref()),
        format_value("Translation (msgstr)", entry.msgstr.as_deref()),
    ];
    for value in values.into_iter().flatten() {
        let _ = writeln!(out, "{value}");
    }
    let _ = writeln!(out, "\nProblems found:");
    for diagnostic in &entry.diagnostics {
        let _ = writeln!(out, "  • {}", diagnostic.to_colored_string());
    }
    if settings.lines {
        let _ = writeln!(out, "\nOriginal text:");
        for (line_no, line) in entry.iter_lines() {
            let _ = writeln!(
                out,
                "{}: {}",
                format!("{line_no:>3}").cyan(),
                line.escape_visible()
            );
        }
    }
    let _ = writeln!(out, "\n{}\n", "=".repeat(SEPARATOR_WIDTH));
}

/// Format the full report for a checked file.
#[must_use]
pub fn format_result(result: &CheckResult, settings: &Settings) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Checking file: {}",
        result.path.display().to_string().bold()
    );
    let _ = writeln!(out, "File encoding: {}", result.encoding);
    let _ = writeln!(out, "Total entries: {}", result.entries);
    let _ = writeln!(out, "Problem entries: {}", result.problems.len());
    let _ = writeln!(out, "{}", "=".repeat(SEPARATOR_WIDTH));
    if result.is_valid() {
        let _ = writeln!(out, "{}", "✓ All entries are correctly formatted!".green());
        let _ = write!(out, "\n{}", "✓ File format is valid".bright_green().bold());
    } else {
        let _ = writeln!(out, "{}\n", "✗ Problem entries found:".red());
        for entry in &result.problems {
            format_entry(&mut out, entry, settings);
        }
        let _ = write!(
            out,
            "{}",
            "✗ File format has problems that need fixing"
                .bright_red()
                .bold()
        );
    }
    out
}

/// Display the result of the check and return the appropriate exit code.
pub fn display_result(result: &CheckResult, settings: &Settings) -> i32 {
    if !settings.quiet {
        println!("{}", format_result(result, settings));
    }
    i32::from(!result.is_valid())
}
