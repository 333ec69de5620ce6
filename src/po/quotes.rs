// SPDX-FileCopyrightText: 2026 Sébastien Helleu <flashcode@flashtux.org>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Analysis of the double quotes inside a string value.

use crate::diagnostic::Severity;

/// A quoting problem found in a string value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteProblem {
    /// A quotation mark is opened and never closed.
    Unclosed,
    /// Odd number of quotation marks, escaped ones excluded.
    OddCount(usize),
    /// Quotation mark not preceded by a backslash (character position, 0-based).
    Unescaped(usize),
}

impl QuoteProblem {
    /// Return the severity of the problem: the position heuristic also fires on
    /// well-formed strings, so it is only advisory.
    #[must_use]
    pub fn severity(&self) -> Severity {
        match self {
            QuoteProblem::Unclosed | QuoteProblem::OddCount(_) => Severity::Error,
            QuoteProblem::Unescaped(_) => Severity::Advisory,
        }
    }
}

impl std::fmt::Display for QuoteProblem {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            QuoteProblem::Unclosed => write!(f, "unclosed quotation mark"),
            QuoteProblem::OddCount(count) => {
                write!(f, "odd number of quotation marks ({count})")
            }
            QuoteProblem::Unescaped(pos) => {
                write!(f, "possibly unescaped quotation mark at position {pos}")
            }
        }
    }
}

/// Return `true` if a quotation mark opened in the value is never closed.
///
/// A backslash escapes the next character, so `\"` does not toggle the state.
fn has_unclosed_quote(value: &str) -> bool {
    let mut in_quote = false;
    let mut escape_next = false;
    for ch in value.chars() {
        if escape_next {
            escape_next = false;
        } else if ch == '\\' {
            escape_next = true;
        } else if ch == '"' {
            in_quote = !in_quote;
        }
    }
    in_quote
}

/// Count the quotation marks remaining once all `\"` sequences are removed.
fn count_bare_quotes(value: &str) -> usize {
    value.replace("\\\"", "").matches('"').count()
}

/// Find all quoting problems in a string value.
///
/// The checks are independent and the problems are returned in this order:
/// unclosed quote, odd count, then every unescaped quote by ascending position.
#[must_use]
pub fn find_quote_problems(value: &str) -> Vec<QuoteProblem> {
    let mut problems = Vec::new();
    if has_unclosed_quote(value) {
        problems.push(QuoteProblem::Unclosed);
    }
    let count = count_bare_quotes(value);
    if count % 2 != 0 {
        problems.push(QuoteProblem::OddCount(count));
    }
    let mut prev = None;
    for (pos, ch) in value.chars().enumerate() {
        if ch == '"' && prev != Some('\\') {
            problems.push(QuoteProblem::Unescaped(pos));
        }
        prev = Some(ch);
    }
    problems
}
