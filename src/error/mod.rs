// build-js: codewords TypeScript build orchestrator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Typed failures, surfaced to `main` through `anyhow`.
//!
//! ```text
//! ConfigError   bad file, bad value, bad --set
//! ProcessError  compiler missing, cannot start, cannot wait/kill
//!        \           /
//!        anyhow::Error  -->  "Error: ..." on stderr, exit 1
//! ```
//!
//! A compiler that runs and exits non-zero is not an error here: that is a
//! build outcome and carries its own exit code.

use std::io;
use thiserror::Error;

pub type Result<T> = anyhow::Result<T>;

/// Result of talking to a child process.
pub type ProcessResult<T> = std::result::Result<T, ProcessError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// One of the layered sources could not be read or deserialized.
    #[error("cannot load configuration from {sources}: {message}")]
    Load { sources: String, message: String },

    #[error("[{section}] {key}: {message}")]
    InvalidValue {
        section: &'static str,
        key: &'static str,
        message: String,
    },

    #[error("--set expects KEY=VALUE, got '{0}'")]
    InvalidOverride(String),
}

#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("'{program}' was not found on PATH")]
    NotOnPath { program: String },

    /// The program or its working directory could not be used.
    #[error("cannot start `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },

    #[error("cannot query {name}: {source}")]
    Wait {
        name: String,
        #[source]
        source: io::Error,
    },

    #[error("cannot kill {name}: {source}")]
    Kill {
        name: String,
        #[source]
        source: io::Error,
    },
}
