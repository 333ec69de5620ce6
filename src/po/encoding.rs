// SPDX-FileCopyrightText: 2026 Sébastien Helleu <flashcode@flashtux.org>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Detection of the encoding of a PO file.
//!
//! The encoding declared in the header is not trusted: the raw bytes are decoded with
//! an ordered list of candidate encodings, the first one that decodes the whole file
//! without error wins.

use std::{fs::File, io::Read, path::Path};

use colored::Colorize;
use encoding_rs::{DecoderResult, Encoding};

const UTF8_BOM: &[u8] = b"\xef\xbb\xbf";

/// Candidate encodings tried by default, in this order.
pub const DEFAULT_ENCODINGS: [&str; 10] = [
    "utf-8-sig",
    "utf-8",
    "gbk",
    "gb2312",
    "big5",
    "shift_jis",
    "euc-jp",
    "cp932",
    "latin-1",
    "cp1252",
];

/// An encoding to try on the file content.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub name: String,
    pub encoding: &'static Encoding,
    /// The data must start with the UTF-8 byte order mark (`utf-8-sig`).
    pub bom: bool,
}

/// How the text was decoded.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum DecodeMode {
    #[default]
    Strict,
    /// Invalid sequences were dropped.
    Ignore,
    /// Invalid sequences were replaced by U+FFFD.
    Replace,
}

/// Text decoded from the raw bytes of a file.
#[derive(Debug, Default)]
pub struct Decoded {
    pub text: String,
    pub encoding: String,
    pub mode: DecodeMode,
}

impl std::fmt::Display for DecodeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            DecodeMode::Strict => write!(f, "strict"),
            DecodeMode::Ignore => write!(f, "ignoring errors"),
            DecodeMode::Replace => write!(f, "with replacement"),
        }
    }
}

impl Decoded {
    /// Return the encoding name with the decoding mode, for display.
    #[must_use]
    pub fn label(&self) -> String {
        match self.mode {
            DecodeMode::Strict => self.encoding.clone(),
            _ => format!("{} ({})", self.encoding, self.mode),
        }
    }
}

impl Candidate {
    /// Create a candidate from an encoding label.
    ///
    /// Python-style names (`utf-8-sig`, `cp932`, `latin-1`) are accepted in addition to
    /// the WHATWG labels known by `encoding_rs`.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        let name = label.trim().to_lowercase();
        let (encoding, bom) = match name.as_str() {
            "utf-8-sig" | "utf_8_sig" => (encoding_rs::UTF_8, true),
            "cp932" | "mskanji" => (encoding_rs::SHIFT_JIS, false),
            "latin-1" | "latin_1" => (encoding_rs::WINDOWS_1252, false),
            _ => (Encoding::for_label(name.as_bytes())?, false),
        };
        Some(Self {
            name,
            encoding,
            bom,
        })
    }

    /// Return the data to decode, or `None` if a required BOM is missing.
    fn payload<'d>(&self, data: &'d [u8]) -> Option<&'d [u8]> {
        if self.bom {
            data.strip_prefix(UTF8_BOM)
        } else {
            Some(data)
        }
    }

    /// Decode the data, failing on the first invalid sequence.
    #[must_use]
    pub fn decode_strict(&self, data: &[u8]) -> Option<String> {
        self.encoding
            .decode_without_bom_handling_and_without_replacement(self.payload(data)?)
            .map(std::borrow::Cow::into_owned)
    }

    /// Decode the data, dropping invalid sequences.
    #[must_use]
    pub fn decode_ignore(&self, data: &[u8]) -> Option<String> {
        let mut src = self.payload(data)?;
        let mut decoder = self.encoding.new_decoder_without_bom_handling();
        let mut text = String::with_capacity(
            decoder
                .max_utf8_buffer_length_without_replacement(src.len())
                .unwrap_or(src.len()),
        );
        loop {
            let (result, read) = decoder.decode_to_string_without_replacement(src, &mut text, true);
            src = &src[read..];
            match result {
                DecoderResult::InputEmpty => return Some(text),
                DecoderResult::Malformed(_, _) => {}
                DecoderResult::OutputFull => text.reserve(src.len().saturating_mul(3) + 16),
            }
        }
    }
}

/// Build the list of candidates from encoding labels.
pub fn get_candidates<S: AsRef<str>>(labels: &[S]) -> Result<Vec<Candidate>, String> {
    if labels.is_empty() {
        return Err("empty list of encodings".to_string());
    }
    labels
        .iter()
        .map(|label| {
            Candidate::from_label(label.as_ref())
                .ok_or_else(|| format!("unknown encoding: {}", label.as_ref()))
        })
        .collect()
}

/// Return the default list of candidates.
#[must_use]
pub fn default_candidates() -> Vec<Candidate> {
    DEFAULT_ENCODINGS
        .iter()
        .filter_map(|label| Candidate::from_label(label))
        .collect()
}

fn log_attempt(verbose: bool, name: &str, mode: DecodeMode) {
    if verbose {
        eprintln!("{}: trying {name} ({mode})", "encoding".cyan());
    }
}

fn log_success(verbose: bool, decoded: &Decoded) {
    if verbose {
        eprintln!(
            "{}: file decoded with {}",
            "encoding".cyan(),
            decoded.label().bold()
        );
    }
}

/// Decode raw bytes with the first candidate that succeeds.
///
/// All candidates are first tried in strict mode, then in the same order dropping
/// invalid sequences; as a last resort the data is decoded as UTF-8 with replacement
/// characters, so this function never fails.
#[must_use]
pub fn decode_bytes(data: &[u8], candidates: &[Candidate], verbose: bool) -> Decoded {
    let passes: [(DecodeMode, fn(&Candidate, &[u8]) -> Option<String>); 2] = [
        (DecodeMode::Strict, Candidate::decode_strict),
        (DecodeMode::Ignore, Candidate::decode_ignore),
    ];
    for (mode, decode) in passes {
        for candidate in candidates {
            log_attempt(verbose, &candidate.name, mode);
            if let Some(text) = decode(candidate, data) {
                let decoded = Decoded {
                    text,
                    encoding: candidate.name.clone(),
                    mode,
                };
                log_success(verbose, &decoded);
                return decoded;
            }
        }
    }
    log_attempt(verbose, "utf-8", DecodeMode::Replace);
    let decoded = Decoded {
        text: String::from_utf8_lossy(data).into_owned(),
        encoding: "utf-8".to_string(),
        mode: DecodeMode::Replace,
    };
    log_success(verbose, &decoded);
    decoded
}

/// Read a file and decode its content.
pub fn read_file(path: &Path, candidates: &[Candidate], verbose: bool) -> std::io::Result<Decoded> {
    let mut file = File::open(path)?;
    let mut buf = Vec::new();
    file.read_to_end(&mut buf)?;
    Ok(decode_bytes(&buf, candidates, verbose))
}
