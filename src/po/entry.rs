// SPDX-FileCopyrightText: 2026 Sébastien Helleu <flashcode@flashtux.org>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! PO file entry.

use crate::diagnostic::Diagnostic;

#[derive(Debug, Default, PartialEq)]
pub struct Entry {
    /// Sequence number of the entry in the file (1-based).
    pub number: usize,
    /// Line number of the first line of the entry in the file (1-based).
    pub line_number: usize,
    /// Raw lines of the entry, without line terminators.
    pub lines: Vec<String>,
    pub msgctxt: Option<String>,
    pub msgid: Option<String>,
    pub msgstr: Option<String>,
    pub diagnostics: Vec<Diagnostic>,
}

impl Entry {
    /// Create a new PO entry with its number, line number and raw lines.
    #[must_use]
    pub fn new(number: usize, line_number: usize, lines: Vec<String>) -> Self {
        Self {
            number,
            line_number,
            lines,
            ..Default::default()
        }
    }

    /// Return `true` if a `msgid` line was found in the entry.
    #[must_use]
    pub fn has_msgid(&self) -> bool {
        self.msgid.is_some()
    }

    /// Return `true` if a `msgstr` line was found in the entry.
    #[must_use]
    pub fn has_msgstr(&self) -> bool {
        self.msgstr.is_some()
    }

    /// Add a diagnostic to the entry.
    pub fn report(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Remove all advisory diagnostics.
    pub fn drop_advisory(&mut self) {
        self.diagnostics.retain(|diag| !diag.is_advisory());
    }

    /// Return `true` if at least one diagnostic was reported on this entry.
    #[must_use]
    pub fn has_problems(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    /// Iterate over the raw lines with their number inside the entry (1-based).
    pub fn iter_lines(&self) -> impl Iterator<Item = (usize, &str)> + '_ {
        self.lines
            .iter()
            .enumerate()
            .map(|(idx, line)| (idx + 1, line.as_str()))
    }
}
