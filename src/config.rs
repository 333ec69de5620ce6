// SPDX-FileCopyrightText: 2026 Sébastien Helleu <flashcode@flashtux.org>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration file and settings.
//!
//! Example of configuration file:
//!
//! ```toml
//! advisory = false
//! lines = true
//! encodings = ["utf-8", "gbk", "cp1252"]
//! ```

use std::{error::Error, path::Path};

use serde::Deserialize;

use crate::{
    args,
    po::encoding::{Candidate, default_candidates, get_candidates},
};

#[derive(Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct Config {
    pub advisory: bool,
    pub lines: bool,
    pub encodings: Option<Vec<String>>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            advisory: true,
            lines: true,
            encodings: None,
        }
    }
}

impl Config {
    /// Read the configuration from a TOML file.
    pub fn read(path: &Path) -> Result<Self, Box<dyn Error>> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }
}

/// Settings used to check a file: configuration file merged with command line.
#[derive(Debug)]
pub struct Settings {
    pub advisory: bool,
    pub lines: bool,
    pub quiet: bool,
    pub verbose: bool,
    pub encodings: Vec<Candidate>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            advisory: true,
            lines: true,
            quiet: false,
            verbose: false,
            encodings: default_candidates(),
        }
    }
}

impl Settings {
    /// Build the settings from a configuration and the command line arguments.
    ///
    /// A command line flag can only disable what the configuration enables.
    pub fn new(config: &Config, args: &args::Cli) -> Result<Self, String> {
        let encodings = match &config.encodings {
            Some(labels) => get_candidates(labels.as_slice())?,
            None => default_candidates(),
        };
        Ok(Self {
            advisory: config.advisory && !args.no_advisory,
            lines: config.lines && !args.no_lines,
            quiet: args.quiet,
            verbose: args.verbose,
            encodings,
        })
    }

    /// Build the settings from the command line, reading the configuration file if
    /// one is given.
    pub fn from_args(args: &args::Cli) -> Result<Self, Box<dyn Error>> {
        let Some(path) = &args.config else {
            return Ok(Settings::new(&Config::default(), args)?);
        };
        Config::read(path)
            .and_then(|config| Ok(Settings::new(&config, args)?))
            .map_err(|err| {
                format!(
                    "invalid configuration file '{}': {}",
                    path.display(),
                    err.to_string().trim_end()
                )
                .into()
            })
    }
}
