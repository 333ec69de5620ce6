// SPDX-FileCopyrightText: 2026 Sébastien Helleu <flashcode@flashtux.org>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Checker for PO files.

use std::path::{Path, PathBuf};

use colored::Colorize;

use crate::{
    args,
    config::Settings,
    diagnostic::Diagnostic,
    po::{encoding::read_file, entry::Entry, parser::Parser, quotes::find_quote_problems},
    result::display_result,
};

const KEYWORD_CTXT: &str = "msgctxt";
const KEYWORD_ID: &str = "msgid";
const KEYWORD_STR: &str = "msgstr";

/// Result of the check of one PO file.
#[derive(Debug, Default)]
pub struct CheckResult {
    pub path: PathBuf,
    pub encoding: String,
    pub entries: usize,
    pub problems: Vec<Entry>,
}

impl CheckResult {
    /// Return `true` if no entry has a problem.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.problems.is_empty()
    }
}

/// Check a `msgid` or `msgstr` line and return the string value found.
///
/// The value is the content between `keyword "` and the final `"`; if the line does
/// not have this form, it is everything after the keyword and one space.
fn check_message_line(entry: &mut Entry, line_no: usize, line: &str, keyword: &str) -> String {
    let value = line
        .strip_prefix(keyword)
        .and_then(|rest| rest.strip_prefix(" \""))
        .and_then(|rest| rest.strip_suffix('"'))
        .map_or_else(
            || {
                let rest = &line[keyword.len()..];
                rest.strip_prefix(' ').unwrap_or(rest).to_string()
            },
            str::to_string,
        );
    if !line[keyword.len()..].starts_with(" \"") {
        entry.report(Diagnostic::at_line(
            line_no,
            format!("{keyword} missing opening quote (expected '{keyword} \"')"),
        ));
    }
    if line.contains('"') {
        for problem in find_quote_problems(&value) {
            entry.report(
                Diagnostic::at_line(line_no, format!("{keyword} quote problem - {problem}"))
                    .with_severity(problem.severity()),
            );
        }
    } else {
        entry.report(Diagnostic::at_line(line_no, format!("{keyword} missing quotes")));
    }
    value
}

/// Check a continued string line (starting with `"`).
///
/// A line without closing quote must be followed by another string line; a string line
/// ending the entry is not checked.
fn check_string_line(entry: &mut Entry, line_no: usize, line: &str) {
    if line.ends_with('"') {
        return;
    }
    if let Some(next) = entry.lines.get(line_no)
        && !next.trim_start().starts_with('"')
    {
        entry.report(Diagnostic::at_line(line_no, "string line missing closing quote"));
    }
}

/// Check all lines of a PO entry, then its completeness.
///
/// Lines are classified by their first keyword: `msgctxt`, `msgid`, `msgstr`, or a
/// continued string starting with `"`; all other lines (comments) are ignored.
pub fn check_entry(entry: &mut Entry) {
    for idx in 0..entry.lines.len() {
        let line_no = idx + 1;
        let line = entry.lines[idx].trim().to_string();
        if line.is_empty() {
            continue;
        }
        if line.starts_with(KEYWORD_CTXT) {
            entry.msgctxt = Some(line);
        } else if line.starts_with(KEYWORD_ID) {
            entry.msgid = Some(check_message_line(entry, line_no, &line, KEYWORD_ID));
        } else if line.starts_with(KEYWORD_STR) {
            entry.msgstr = Some(check_message_line(entry, line_no, &line, KEYWORD_STR));
        } else if line.starts_with('"') {
            check_string_line(entry, line_no, &line);
        }
    }
    if !entry.has_msgid() {
        entry.report(Diagnostic::new(format!("missing {KEYWORD_ID} definition")));
    }
    if !entry.has_msgstr() {
        entry.report(Diagnostic::new(format!("missing {KEYWORD_STR} definition")));
    }
}

pub struct Checker<'d> {
    pub path: PathBuf,
    pub encoding: String,
    pub entries: usize,
    pub problems: Vec<Entry>,
    parser: Parser<'d>,
    advisory: bool,
}

impl<'d> Checker<'d> {
    /// Create a new `Checker` for the given decoded text.
    pub fn new(data: &'d str) -> Self {
        Checker {
            path: PathBuf::new(),
            encoding: String::new(),
            entries: 0,
            problems: Vec::new(),
            parser: Parser::new(data),
            advisory: true,
        }
    }

    /// Set the path of the file being checked.
    pub fn with_path(mut self, path: &Path) -> Self {
        self.path = PathBuf::from(path);
        self
    }

    /// Set the name of the encoding used to decode the file.
    pub fn with_encoding(mut self, encoding: String) -> Self {
        self.encoding = encoding;
        self
    }

    /// Set the flag indicating the advisory diagnostics are kept.
    pub fn with_advisory(mut self, advisory: bool) -> Self {
        self.advisory = advisory;
        self
    }

    /// Perform all checks on every entry of the PO file.
    pub fn do_all_checks(&mut self) {
        for mut entry in self.parser.by_ref() {
            self.entries += 1;
            check_entry(&mut entry);
            if !self.advisory {
                entry.drop_advisory();
            }
            if entry.has_problems() {
                self.problems.push(entry);
            }
        }
    }

    /// Consume the checker and return the result.
    pub fn into_result(self) -> CheckResult {
        CheckResult {
            path: self.path,
            encoding: self.encoding,
            entries: self.entries,
            problems: self.problems,
        }
    }
}

/// Check a single PO file and return the result.
pub fn check_file(path: &Path, settings: &Settings) -> std::io::Result<CheckResult> {
    let decoded = read_file(path, &settings.encodings, settings.verbose)?;
    let mut checker = Checker::new(&decoded.text)
        .with_path(path)
        .with_encoding(decoded.label())
        .with_advisory(settings.advisory);
    checker.do_all_checks();
    Ok(checker.into_result())
}

/// Check the file given on command line, display the result and return the exit code.
pub fn run_check(args: &args::Cli) -> i32 {
    let path = args.file.as_path();
    if !path.exists() {
        eprintln!(
            "{}: file '{}' does not exist",
            "Error".bright_red().bold(),
            path.display()
        );
        return 1;
    }
    if !path.is_file() {
        eprintln!(
            "{}: '{}' is not a file",
            "Error".bright_red().bold(),
            path.display()
        );
        return 1;
    }
    let settings = match Settings::from_args(args) {
        Ok(settings) => settings,
        Err(err) => {
            eprintln!("{}: {err}", "Error".bright_red().bold());
            return 1;
        }
    };
    match check_file(path, &settings) {
        Ok(result) => display_result(&result, &settings),
        Err(err) => {
            eprintln!(
                "{}: could not read file '{}': {err}",
                "Error".bright_red().bold(),
                path.display()
            );
            1
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser as _;

    use super::*;
    use crate::diagnostic::Severity;

    fn write_temp_file(name: &str, content: &[u8]) -> PathBuf {
        let path = std::env::temp_dir().join(format!("pocheck-{}-{name}", std::process::id()));
        std::fs::write(&path, content).unwrap();
        path
    }

    fn run_quiet(path: &Path) -> i32 {
        let args =
            args::Cli::try_parse_from(["pocheck", "--quiet", path.to_str().unwrap()]).unwrap();
        run_check(&args)
    }

    fn check_content(content: &str) -> CheckResult {
        let mut checker = Checker::new(content);
        checker.do_all_checks();
        checker.into_result()
    }

    fn check_lines(lines: &[&str]) -> Entry {
        let mut entry = Entry::new(
            1,
            1,
            lines.iter().map(|line| (*line).to_string()).collect(),
        );
        check_entry(&mut entry);
        entry
    }

    fn messages(entry: &Entry) -> Vec<String> {
        entry.diagnostics.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_empty_file() {
        let result = check_content("");
        assert_eq!(result.entries, 0);
        assert!(result.is_valid());
        let result = check_content("\n\n   \n");
        assert_eq!(result.entries, 0);
        assert!(result.is_valid());
    }

    #[test]
    fn test_entry_ok() {
        let entry = check_lines(&["msgid \"hello\"", "msgstr \"world\""]);
        assert!(!entry.has_problems());
        assert_eq!(entry.msgid.as_deref(), Some("hello"));
        assert_eq!(entry.msgstr.as_deref(), Some("world"));
        assert!(entry.msgctxt.is_none());
    }

    #[test]
    fn test_entry_ok_comments_multiline() {
        let entry = check_lines(&[
            "# translator comment",
            "#: src/main.c:42",
            "#, c-format",
            "msgctxt \"menu\"",
            "msgid \"\"",
            "\"hello \"",
            "\"world\"",
            "msgstr \"\"",
            "  \"bonjour \"",
            "\"le monde\"",
        ]);
        assert!(!entry.has_problems(), "{:?}", entry.diagnostics);
        assert_eq!(entry.msgctxt.as_deref(), Some("msgctxt \"menu\""));
        assert_eq!(entry.msgid.as_deref(), Some(""));
        assert_eq!(entry.msgstr.as_deref(), Some(""));
    }

    #[test]
    fn test_escaped_quotes_ok() {
        let entry = check_lines(&[
            "msgid \"this is a \\\"test\\\"\"",
            "msgstr \"ceci est un \\\"test\\\"\"",
        ]);
        assert!(!entry.has_problems(), "{:?}", entry.diagnostics);
        assert_eq!(entry.msgid.as_deref(), Some("this is a \\\"test\\\""));
    }

    #[test]
    fn test_missing_opening_quote() {
        let entry = check_lines(&["msgid hello\"", "msgstr \"world\""]);
        let messages = messages(&entry);
        assert!(
            messages.contains(
                &"line 1: msgid missing opening quote (expected 'msgid \"')".to_string()
            ),
            "{messages:?}"
        );
        assert_eq!(entry.msgid.as_deref(), Some("hello\""));
    }

    #[test]
    fn test_missing_quotes() {
        let entry = check_lines(&["msgid hello", "msgstr world"]);
        assert_eq!(
            messages(&entry),
            vec![
                "line 1: msgid missing opening quote (expected 'msgid \"')",
                "line 1: msgid missing quotes",
                "line 2: msgstr missing opening quote (expected 'msgstr \"')",
                "line 2: msgstr missing quotes",
            ]
        );
        assert_eq!(entry.msgid.as_deref(), Some("hello"));
        assert_eq!(entry.msgstr.as_deref(), Some("world"));
    }

    #[test]
    fn test_unterminated_msgid() {
        let entry = check_lines(&["msgid \"unterminated", "msgstr \"\""]);
        assert_eq!(entry.msgid.as_deref(), Some("\"unterminated"));
        assert_eq!(
            messages(&entry),
            vec![
                "line 1: msgid quote problem - unclosed quotation mark",
                "line 1: msgid quote problem - odd number of quotation marks (1)",
                "line 1: msgid quote problem - possibly unescaped quotation mark at position 0",
            ]
        );
        assert_eq!(entry.diagnostics[0].severity, Severity::Error);
        assert_eq!(entry.diagnostics[2].severity, Severity::Advisory);
    }

    #[test]
    fn test_unescaped_quote_in_msgstr() {
        let entry = check_lines(&["msgid \"a test\"", "msgstr \"un \"test\"\""]);
        assert_eq!(entry.msgstr.as_deref(), Some("un \"test\""));
        assert_eq!(
            messages(&entry),
            vec![
                "line 2: msgstr quote problem - possibly unescaped quotation mark at position 3",
                "line 2: msgstr quote problem - possibly unescaped quotation mark at position 8",
            ]
        );
        assert!(entry.diagnostics.iter().all(Diagnostic::is_advisory));
    }

    #[test]
    fn test_missing_msgstr() {
        let entry = check_lines(&["msgid \"x\""]);
        assert_eq!(messages(&entry), vec!["missing msgstr definition"]);
        let entry = check_lines(&["msgid \"unterminated"]);
        assert_eq!(
            messages(&entry)
                .iter()
                .filter(|msg| *msg == "missing msgstr definition")
                .count(),
            1
        );
    }

    #[test]
    fn test_missing_msgid_and_msgstr() {
        let entry = check_lines(&["# only a comment", "#: src/main.c:1"]);
        assert_eq!(
            messages(&entry),
            vec!["missing msgid definition", "missing msgstr definition"]
        );
    }

    #[test]
    fn test_string_line_missing_closing_quote() {
        let entry = check_lines(&["msgid \"\"", "\"hello", "msgstr \"bonjour\""]);
        assert_eq!(
            messages(&entry),
            vec!["line 2: string line missing closing quote"]
        );
        // Followed by another string line: not reported.
        let entry = check_lines(&["msgid \"\"", "\"hello", "\"world\"", "msgstr \"x\""]);
        assert!(!entry.has_problems());
        // Last line of the entry: not reported.
        let entry = check_lines(&["msgid \"a\"", "msgstr \"\"", "\"dangling"]);
        assert!(!entry.has_problems());
    }

    #[test]
    fn test_context_last_wins() {
        let entry = check_lines(&[
            "msgctxt \"first\"",
            "  msgctxt \"second\"  ",
            "msgid \"a\"",
            "msgstr \"b\"",
        ]);
        assert!(!entry.has_problems());
        assert_eq!(entry.msgctxt.as_deref(), Some("msgctxt \"second\""));
    }

    #[test]
    fn test_plural_keywords_prefix_match() {
        let entry = check_lines(&[
            "msgid \"file\"",
            "msgid_plural \"files\"",
            "msgstr[0] \"fichier\"",
        ]);
        assert_eq!(
            messages(&entry),
            vec![
                "line 2: msgid missing opening quote (expected 'msgid \"')",
                "line 2: msgid quote problem - possibly unescaped quotation mark at position 8",
                "line 2: msgid quote problem - possibly unescaped quotation mark at position 14",
                "line 3: msgstr missing opening quote (expected 'msgstr \"')",
                "line 3: msgstr quote problem - possibly unescaped quotation mark at position 4",
                "line 3: msgstr quote problem - possibly unescaped quotation mark at position 12",
            ]
        );
    }

    #[test]
    fn test_two_entries_ok() {
        let result = check_content("msgid \"a\"\nmsgstr \"b\"\n\nmsgid \"c\"\nmsgstr \"d\"\n");
        assert_eq!(result.entries, 2);
        assert!(result.is_valid());
    }

    #[test]
    fn test_problem_entries() {
        let result = check_content(
            r#"msgid "a"
msgstr "b"

msgid "x"

msgstr "y"
"#,
        );
        assert_eq!(result.entries, 3);
        assert_eq!(result.problems.len(), 2);
        assert_eq!(result.problems[0].number, 2);
        assert_eq!(
            result.problems[0].diagnostics,
            vec![Diagnostic::new("missing msgstr definition")]
        );
        assert_eq!(result.problems[1].number, 3);
        assert_eq!(
            result.problems[1].diagnostics,
            vec![Diagnostic::new("missing msgid definition")]
        );
    }

    #[test]
    fn test_no_advisory() {
        let content = "msgid \"a\"\nmsgstr \"un \\\"b\\\" \"c\"\"\n";
        let result = check_content(content);
        assert_eq!(result.problems.len(), 1);
        let mut checker = Checker::new(content).with_advisory(false);
        checker.do_all_checks();
        let result = checker.into_result();
        assert_eq!(result.entries, 1);
        assert!(result.is_valid());
    }

    #[test]
    fn test_check_file() {
        let path = write_temp_file(
            "check-file.po",
            b"msgid \"a\"\nmsgstr \"b\"\n\nmsgid \"c\"\nmsgstr \"d\"\n",
        );
        let result = check_file(&path, &Settings::default()).unwrap();
        assert_eq!(result.path, path);
        assert_eq!(result.encoding, "utf-8");
        assert_eq!(result.entries, 2);
        assert!(result.is_valid());
        assert_eq!(run_quiet(&path), 0);
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_check_file_gbk() {
        let (content, _, _) = encoding_rs::GBK.encode("msgid \"file\"\nmsgstr \"文件\"\n");
        let path = write_temp_file("check-file-gbk.po", &content);
        let result = check_file(&path, &Settings::default()).unwrap();
        assert_eq!(result.encoding, "gbk");
        assert_eq!(result.entries, 1);
        assert!(result.is_valid());
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_check_file_problem() {
        let path = write_temp_file("check-file-problem.po", b"msgid \"x\"\n");
        let result = check_file(&path, &Settings::default()).unwrap();
        assert_eq!(result.entries, 1);
        assert_eq!(result.problems.len(), 1);
        assert_eq!(
            result.problems[0].diagnostics,
            vec![Diagnostic::new("missing msgstr definition")]
        );
        assert_eq!(run_quiet(&path), 1);
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_run_check_bad_path() {
        let path = std::env::temp_dir().join("pocheck-does-not-exist.po");
        assert_eq!(run_quiet(&path), 1);
        assert_eq!(run_quiet(&std::env::temp_dir()), 1);
    }
}
