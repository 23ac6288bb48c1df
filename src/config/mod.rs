// build-js: codewords TypeScript build orchestrator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for build-js.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults (npx tsc, ./codewords_core, ./codewords_lang_js)
//! 2. build_js.toml in the project root (optional)
//! 3. --config FILE (in order)
//! 4. --set KEY=VALUE
//! 5. --root DIR
//! ```
//!
//! # Example
//!
//! ```toml
//! [compiler]
//! program = "npx"
//! args = ["tsc"]
//! watch_args = ["--watch"]
//!
//! [paths]
//! core = "codewords_core"
//! lang_js = "codewords_lang_js"
//!
//! [watch]
//! poll_interval_ms = 1000
//! terminate_sibling = false
//! ```

pub mod loader;
pub mod paths;
pub mod types;


use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{ConfigError, Result};

use loader::ConfigLoader;
use paths::PathsConfig;
use types::{CompilerConfig, WatchConfig};

/// Name of the optional configuration file looked up in the project root.
pub const CONFIG_FILE_NAME: &str = "build_js.toml";

/// Complete application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// External compiler invocation.
    pub compiler: CompilerConfig,
    /// Subproject locations.
    pub paths: PathsConfig,
    /// Watch mode options.
    pub watch: WatchConfig,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use build_js::config::Config;
    ///
    /// let config = Config::builder()
    ///     .file_if_exists("build_js.toml")
    ///     .set_option("watch.poll_interval_ms=500")?
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// does not match the `Config` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().toml(content).build()
    }

    /// Check values that deserialize fine but cannot be used.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError::InvalidValue` for an empty compiler program or
    /// a zero poll interval.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        self.compiler.validate()?;
        self.watch.validate()
    }
}
