// build-js: codewords TypeScript build orchestrator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Build command implementation.
//!
//! ```text
//! Mode::Sequential                    Mode::Watch
//!   core    start + wait                core    start --watch
//!     != 0 --> exit 1                   lang_js start --watch
//!   lang_js start + wait                loop every poll interval:
//!     != 0 --> exit 1                     core exited?    --> its code
//!   "Success!" --> exit 0                 lang_js exited? --> its code
//! ```
//!
//! Ctrl+C cancels either mode with exit code 130.

mod watch;


use std::process::ExitCode;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

use crate::compiler::Compiler;
use crate::config::Config;
use crate::error::Result;
use crate::subproject::Subproject;

pub use watch::run_watch;

/// Exit code reported when the build is interrupted.
pub const INTERRUPTED_EXIT_CODE: i32 = 130;

/// Top-level mode, selected once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Compile each subproject once, in order, stopping at the first failure.
    Sequential,
    /// Run both compilers in their own watch mode until one of them exits.
    Watch,
}

impl Mode {
    #[must_use]
    pub const fn from_watch_flag(watch: bool) -> Self {
        if watch { Self::Watch } else { Self::Sequential }
    }
}

/// How a build run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Both subprojects compiled.
    Success,
    /// A sequential step exited non-zero; later steps were not started.
    StepFailed { subproject: Subproject, code: i32 },
    /// A watch mode compiler exited.
    WatchExited { subproject: Subproject, code: i32 },
    /// Ctrl+C was received.
    Interrupted,
}

impl Outcome {
    /// Returns the process exit code for this outcome.
    #[must_use]
    pub const fn code(&self) -> i32 {
        match self {
            Self::Success => 0,
            Self::StepFailed { .. } => 1,
            Self::WatchExited { code, .. } => *code,
            Self::Interrupted => INTERRUPTED_EXIT_CODE,
        }
    }

    /// Returns the exit code as an `ExitCode`.
    ///
    /// A compiler killed by a signal already reports 128 + signal; anything
    /// still outside 0-255 maps to `ExitCode::FAILURE`.
    #[must_use]
    pub fn exit_code(&self) -> ExitCode {
        u8::try_from(self.code()).map_or(ExitCode::FAILURE, ExitCode::from)
    }
}

/// Main handler for the build.
///
/// # Errors
///
/// Returns an error if a compiler cannot be launched or its status cannot be
/// queried. Compiler failures are reported through the `Outcome`.
pub async fn run_build_command(
    mode: Mode,
    config: &Config,
    token: CancellationToken,
) -> Result<Outcome> {
    let compiler = Compiler::from_config(config);

    let outcome = match mode {
        Mode::Sequential => run_sequential(&compiler, token).await?,
        Mode::Watch => run_watch(&compiler, &config.watch, token).await?,
    };

    match outcome {
        Outcome::Success => info!("Build completed successfully"),
        Outcome::StepFailed { subproject, code } => {
            error!(subproject = %subproject, exit_code = code, "Build failed");
        }
        Outcome::WatchExited { subproject, code } => {
            info!(subproject = %subproject, exit_code = code, "Compiler exited, stopping");
        }
        Outcome::Interrupted => warn!("Build interrupted"),
    }

    Ok(outcome)
}

/// Compiles each subproject in order, stopping at the first failure.
///
/// Prints `Success!` on stdout when every step exits with code 0.
///
/// # Errors
///
/// Returns an error if a compiler cannot be launched or waited for.
pub async fn run_sequential(compiler: &Compiler, token: CancellationToken) -> Result<Outcome> {
    for subproject in Subproject::ALL {
        let mut handle = compiler.start(subproject, &[])?;

        let code = tokio::select! {
            code = handle.wait() => code?,
            () = token.cancelled() => {
                warn!(subproject = %subproject, "Cancellation requested, terminating compiler");
                handle.kill().await?;
                return Ok(Outcome::Interrupted);
            }
        };

        if code != 0 {
            return Ok(Outcome::StepFailed { subproject, code });
        }
        info!(subproject = %subproject, "compiled");
    }

    println!("Success!");
    Ok(Outcome::Success)
}
