// build-js: codewords TypeScript build orchestrator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration types for build-js.
//!
//! ```text
//! [compiler]  program, args, watch_args
//! [watch]     poll_interval_ms, terminate_sibling
//! ```

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::ConfigError;

/// How the external compiler is invoked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CompilerConfig {
    /// Program to run, resolved via PATH.
    pub program: String,
    /// Arguments passed before any mode-specific ones.
    pub args: Vec<String>,
    /// Arguments appended in watch mode.
    pub watch_args: Vec<String>,
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self {
            program: "npx".to_string(),
            args: vec!["tsc".to_string()],
            watch_args: vec!["--watch".to_string()],
        }
    }
}

impl CompilerConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.program.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                section: "compiler",
                key: "program",
                message: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

/// Watch mode behavior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WatchConfig {
    /// Delay between two liveness polls, in milliseconds.
    pub poll_interval_ms: u64,
    /// Kill the surviving compiler when the other one exits.
    pub terminate_sibling: bool,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: 1000,
            terminate_sibling: false,
        }
    }
}

impl WatchConfig {
    /// Returns the poll interval as a `Duration`.
    #[must_use]
    pub const fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.poll_interval_ms == 0 {
            return Err(ConfigError::InvalidValue {
                section: "watch",
                key: "poll_interval_ms",
                message: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}
