// build-js: codewords TypeScript build orchestrator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Global CLI options.
//!
//! # Option Precedence
//!
//! ```text
//! --config FILE     ← Additional config files (can repeat)
//! --set KEY=VAL     ← Direct config override (can repeat)
//! --root DIR        ← paths.root override
//! --log-level N     ← Console verbosity (0-6)
//! --file-log-level  ← File verbosity (defaults to --log-level)
//! --log-file FILE   ← Also log to FILE
//!
//! Precedence: --root > --set > --config > build_js.toml > defaults
//! ```

use clap::Args;
use std::path::{Path, PathBuf};

use crate::config::CONFIG_FILE_NAME;
use crate::config::loader::ConfigLoader;
use crate::error::Result;

/// Options that configure the orchestrator itself rather than the build mode.
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalOptions {
    /// Path to additional TOML configuration file(s).
    /// Can be specified multiple times.
    #[arg(short = 'c', long = "config", value_name = "FILE", action = clap::ArgAction::Append)]
    pub configs: Vec<PathBuf>,

    /// Sets an option, such as 'watch.poll_interval_ms=500'.
    /// Can be specified multiple times.
    #[arg(short = 's', long = "set", value_name = "OPTION", action = clap::ArgAction::Append)]
    pub options: Vec<String>,

    /// Project root containing the subproject directories.
    #[arg(short = 'C', long = "root", value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Console log level (0=silent, 1=errors, 2=warnings, 3=info, 4=debug, 5=trace, 6=dump).
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=6)
    )]
    pub log_level: Option<u8>,

    /// File log level, overrides --log-level for the log file.
    #[arg(long = "file-log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=6)
    )]
    pub file_log_level: Option<u8>,

    /// Path to log file.
    #[arg(long = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,
}

impl GlobalOptions {
    /// Returns the project root, defaulting to the current directory.
    #[must_use]
    pub fn root_dir(&self) -> &Path {
        self.root.as_deref().unwrap_or_else(|| Path::new("."))
    }

    /// Builds the layered configuration loader for these options.
    ///
    /// # Errors
    ///
    /// Returns an error if a `--set` option is not of the form `KEY=VALUE`.
    pub fn config_loader(&self) -> Result<ConfigLoader> {
        let mut loader = ConfigLoader::new().file_if_exists(self.root_dir().join(CONFIG_FILE_NAME));
        for path in &self.configs {
            loader = loader.file(path);
        }
        for option in &self.options {
            loader = loader.set_option(option)?;
        }
        if let Some(root) = &self.root {
            loader = loader.set("paths.root", root.display().to_string())?;
        }
        Ok(loader)
    }
}
