// SPDX-FileCopyrightText: 2026 Sébastien Helleu <flashcode@flashtux.org>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! PO file parser: split the decoded text into entries separated by blank lines.

use memchr::Memchr;

use crate::po::entry::Entry;

pub struct Parser<'d> {
    data: &'d str,
    iter_lines: Memchr<'d>,
    offset: usize,
    line_number: usize,
    next_line_number: usize,
    entry_number: usize,
}

impl<'d> Parser<'d> {
    /// Create a new `Parser` from the given decoded text.
    #[must_use]
    pub fn new(data: &'d str) -> Self {
        Self {
            data,
            iter_lines: memchr::memchr_iter(b'\n', data.as_bytes()),
            offset: 0,
            line_number: 0,
            next_line_number: 1,
            entry_number: 0,
        }
    }

    /// Return the next line from the input data without its line terminator, updating
    /// the parser's location.
    fn next_line(&mut self) -> Option<&'d str> {
        if self.offset >= self.data.len() {
            return None;
        }
        let start = self.offset;
        let end = self.iter_lines.next().unwrap_or(self.data.len());
        self.offset = end + 1;
        self.line_number = self.next_line_number;
        self.next_line_number += 1;
        Some(self.data[start..end].trim_end_matches('\r'))
    }
}

/// Implement the `Iterator` trait for `Parser`, yielding `Entry` items.
impl Iterator for Parser<'_> {
    type Item = Entry;

    /// Return the next `Entry` from the parser, or `None` if finished.
    ///
    /// Blank lines before the entry are skipped, the entry ends on the next blank line
    /// (not included) or at the end of data.
    fn next(&mut self) -> Option<Self::Item> {
        let mut lines: Vec<String> = Vec::new();
        let mut line_number = 0;
        while let Some(line) = self.next_line() {
            if line.trim().is_empty() {
                if lines.is_empty() {
                    continue;
                }
                break;
            }
            if lines.is_empty() {
                line_number = self.line_number;
            }
            lines.push(line.to_string());
        }
        if lines.is_empty() {
            return None;
        }
        self.entry_number += 1;
        Some(Entry::new(self.entry_number, line_number, lines))
    }
}
