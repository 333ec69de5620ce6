// SPDX-FileCopyrightText: 2026 Sébastien Helleu <flashcode@flashtux.org>
//
// SPDX-License-Identifier: GPL-3.0-or-later

use std::fmt::Write;

pub trait EscapeVisibleExt {
    fn escape_visible(&self) -> String;
}

/// Return true if the character is displayed as nothing or as a plain space: format
/// characters, line and paragraph separators, and any space other than ASCII space.
fn is_invisible(ch: char) -> bool {
    if ch.is_whitespace() {
        return ch != ' ';
    }
    if ch == '"' || ch == '\'' {
        return false;
    }
    // Not the first char of the string, so that combining marks are not escaped.
    let mut s = String::with_capacity(8);
    s.push(' ');
    s.push(ch);
    s.escape_debug().nth(1) == Some('\\')
}

impl EscapeVisibleExt for str {
    /// Render a raw line with backslashes, control and invisible characters as visible
    /// escape sequences, so that the report shows exactly what is in the file.
    fn escape_visible(&self) -> String {
        let mut out = String::with_capacity(self.len() + self.len() / 4);
        for ch in self.chars() {
            match ch {
                '\\' => out.push_str("\\\\"),
                '\n' => out.push_str("\\n"),
                '\r' => out.push_str("\\r"),
                '\t' => out.push_str("\\t"),
                '\u{feff}' => out.push_str("\\ufeff"),
                c if c.is_control() || is_invisible(c) => {
                    let code = u32::from(c);
                    if code <= 0xff {
                        let _ = write!(out, "\\x{code:02x}");
                    } else {
                        let _ = write!(out, "\\u{code:04x}");
                    }
                }
                _ => out.push(ch),
            }
        }
        out
    }
}
