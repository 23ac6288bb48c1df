// build-js: codewords TypeScript build orchestrator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Orchestrator diagnostics on top of `tracing`.
//!
//! ```text
//!          registry
//!         /        \
//!   stderr          --log-file (optional)
//!   -l level        --file-log-level
//!   no timestamps   non_blocking writer
//! ```
//!
//! Stdout is never written here: it carries compiler output and `Success!`.

use anyhow::Context;
use bon::Builder;
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    EnvFilter, Layer, fmt, fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt,
};

use crate::error::Result;

/// Verbosity selected with `-l` / `--file-log-level` (0-6).
///
/// `Info` reports which subproject runs and how it ended, `Debug` adds the
/// working directory and command line, `Trace` adds pids and poll ticks.
/// `Dump` is accepted for the full 0-6 range and behaves like `Trace`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
    Dump,
}

impl LogLevel {
    /// Maps a numeric CLI level, or `None` above 6.
    #[must_use]
    pub const fn from_u8(level: u8) -> Option<Self> {
        Some(match level {
            0 => Self::Off,
            1 => Self::Error,
            2 => Self::Warn,
            3 => Self::Info,
            4 => Self::Debug,
            5 => Self::Trace,
            6 => Self::Dump,
            _ => return None,
        })
    }

    /// `EnvFilter` directive for this level.
    #[must_use]
    pub const fn directive(self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace | Self::Dump => "trace",
        }
    }
}

/// Where diagnostics go and how verbose each sink is.
#[derive(Debug, Clone, Default, Builder)]
pub struct LogConfig {
    #[builder(setters(name = with_console_level), default)]
    console_level: LogLevel,
    #[builder(setters(name = with_file_level), default)]
    file_level: LogLevel,
    #[builder(setters(name = with_log_file), into)]
    log_file: Option<PathBuf>,
}

impl LogConfig {
    #[must_use]
    pub const fn console_level(&self) -> LogLevel {
        self.console_level
    }

    #[must_use]
    pub const fn file_level(&self) -> LogLevel {
        self.file_level
    }

    #[must_use]
    pub fn log_file(&self) -> Option<&Path> {
        self.log_file.as_deref()
    }
}

/// Flushes the file sink when dropped; hold it until `main` returns.
pub struct LogGuard {
    _file: Option<WorkerGuard>,
}

/// Installs the global subscriber.
///
/// # Errors
///
/// Fails when the log file or its parent directory cannot be created.
pub fn init_logging(config: &LogConfig) -> Result<LogGuard> {
    let console = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .with_filter(EnvFilter::new(config.console_level().directive()));

    let mut file_guard = None;
    let file = match config.log_file() {
        Some(path) => {
            let (writer, guard) = tracing_appender::non_blocking(open_log_file(path)?);
            file_guard = Some(guard);
            Some(
                fmt::layer()
                    .with_writer(writer)
                    .with_ansi(false)
                    .with_span_events(FmtSpan::CLOSE)
                    .with_filter(EnvFilter::new(config.file_level().directive())),
            )
        }
        None => None,
    };

    tracing_subscriber::registry().with(console).with(file).init();

    Ok(LogGuard { _file: file_guard })
}

fn open_log_file(path: &Path) -> Result<File> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("cannot create log directory {}", dir.display()))?;
    }
    File::create(path).with_context(|| format!("cannot create log file {}", path.display()))
}
