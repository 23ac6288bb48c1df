// build-js: codewords TypeScript build orchestrator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Stacks TOML layers and overrides, later ones winning.
//!
//! ```text
//! <root>/build_js.toml   file_if_exists
//! --config FILE ...      file
//! --set KEY=VALUE ...    set_option
//! --root DIR             set("paths.root")
//!         |
//!       build() --> Config (validated)
//! ```

use config::builder::DefaultState;
use config::{ConfigBuilder, File, FileFormat};
use std::fmt;
use std::path::{Path, PathBuf};

use super::Config;
use crate::error::{ConfigError, Result};

/// One contribution to the final configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Layer {
    File(PathBuf),
    Inline,
    Override(String),
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Inline => f.write_str("<inline>"),
            Self::Override(key) => write!(f, "--set {key}"),
        }
    }
}

#[derive(Default)]
pub struct ConfigLoader {
    builder: ConfigBuilder<DefaultState>,
    layers: Vec<Layer>,
}

impl ConfigLoader {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a TOML file that must exist when `build` runs.
    #[must_use]
    pub fn file(self, path: impl AsRef<Path>) -> Self {
        self.add_file(path.as_ref(), true)
    }

    /// Adds a TOML file that is skipped when absent.
    #[must_use]
    pub fn file_if_exists(self, path: impl AsRef<Path>) -> Self {
        self.add_file(path.as_ref(), false)
    }

    fn add_file(mut self, path: &Path, required: bool) -> Self {
        self.builder = self
            .builder
            .add_source(File::from(path).format(FileFormat::Toml).required(required));
        if required || path.is_file() {
            self.layers.push(Layer::File(path.to_path_buf()));
        }
        self
    }

    #[must_use]
    pub fn toml(mut self, content: &str) -> Self {
        self.builder = self
            .builder
            .add_source(File::from_str(content, FileFormat::Toml));
        self.layers.push(Layer::Inline);
        self
    }

    /// Overrides a single dotted key, e.g. `paths.root`.
    ///
    /// # Errors
    ///
    /// `ConfigError::InvalidOverride` when the key is not a valid path.
    pub fn set(mut self, key: &str, value: impl Into<config::Value>) -> Result<Self> {
        self.builder = self
            .builder
            .set_override(key, value)
            .map_err(|_| ConfigError::InvalidOverride(key.to_owned()))?;
        self.layers.push(Layer::Override(key.to_owned()));
        Ok(self)
    }

    /// Applies one `--set KEY=VALUE` argument. Whitespace around either side
    /// is ignored.
    ///
    /// # Errors
    ///
    /// `ConfigError::InvalidOverride` without `=` or with an empty key.
    pub fn set_option(self, option: &str) -> Result<Self> {
        match option.split_once('=') {
            Some((key, value)) if !key.trim().is_empty() => self.set(key.trim(), value.trim()),
            _ => Err(ConfigError::InvalidOverride(option.to_owned()).into()),
        }
    }

    /// Layers in the order they apply.
    #[must_use]
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Merges every layer over the defaults and validates the result.
    ///
    /// # Errors
    ///
    /// A missing required file, malformed TOML, an unknown key or a value
    /// rejected by `Config::validate`.
    pub fn build(self) -> Result<Config> {
        let Self { builder, layers } = self;
        let load_error = |err: config::ConfigError| {
            let sources: Vec<String> = layers.iter().map(ToString::to_string).collect();
            ConfigError::Load {
                sources: if sources.is_empty() {
                    "defaults".to_owned()
                } else {
                    sources.join(", ")
                },
                message: err.to_string(),
            }
        };

        let config: Config = builder
            .build()
            .and_then(config::Config::try_deserialize::<Config>)
            .map_err(load_error)?;
        config.validate()?;
        Ok(config)
    }
}
