// SPDX-FileCopyrightText: 2026 Sébastien Helleu <flashcode@flashtux.org>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Diagnostic for PO entries.

use colored::Colorize;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Ord, PartialOrd, Hash)]
pub enum Severity {
    /// Heuristic finding, it may also fire on well-formed strings.
    Advisory,
    #[default]
    Error,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Line number inside the entry (1-based), if the problem is tied to a line.
    pub line: Option<usize>,
    pub severity: Severity,
    pub message: String,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Severity::Advisory => write!(f, "advisory"),
            Severity::Error => write!(f, "error"),
        }
    }
}

impl Diagnostic {
    /// Create a new error `Diagnostic` for the whole entry.
    #[must_use]
    pub fn new<S: Into<String>>(message: S) -> Self {
        Self {
            message: message.into(),
            ..Default::default()
        }
    }

    /// Create a new error `Diagnostic` for a line of the entry.
    #[must_use]
    pub fn at_line<S: Into<String>>(line: usize, message: S) -> Self {
        Self {
            line: Some(line),
            message: message.into(),
            ..Default::default()
        }
    }

    /// Set the severity of the diagnostic.
    #[must_use]
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    #[must_use]
    pub fn is_advisory(&self) -> bool {
        self.severity == Severity::Advisory
    }

    /// Format the diagnostic with colors for the report.
    #[must_use]
    pub fn to_colored_string(&self) -> String {
        match self.severity {
            Severity::Error => self.to_string(),
            Severity::Advisory => format!("{} ({})", self, self.severity)
                .dimmed()
                .to_string(),
        }
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.line {
            Some(line) => write!(f, "line {line}: {}", self.message),
            None => write!(f, "{}", self.message),
        }
    }
}
