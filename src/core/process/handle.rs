// build-js: codewords TypeScript build orchestrator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Handle to a running child process.
//!
//! ```text
//! ProcessHandle
//!   try_exit_code()  non-blocking, None while running
//!   wait()           blocks until exit
//!   kill()           no-op once exited
//! ```
//!
//! A child killed by signal N reports 128 + N, as a shell would (SIGTERM is
//! 143, SIGKILL 137). Where no signal is available the code is -1.

use std::process::ExitStatus;
use tokio::process::Child;
use tracing::trace;

use crate::error::{ProcessError, ProcessResult};

/// A launched child process.
///
/// The exit code is remembered once observed, so every query after exit
/// returns the same value.
#[derive(Debug)]
pub struct ProcessHandle {
    name: String,
    child: Child,
    exit_code: Option<i32>,
}

impl ProcessHandle {
    pub(super) const fn new(name: String, child: Child) -> Self {
        Self {
            name,
            child,
            exit_code: None,
        }
    }

    /// Returns the exit code if the process has exited, without blocking.
    ///
    /// # Errors
    ///
    /// `ProcessError::Wait` if the status cannot be queried.
    pub fn try_exit_code(&mut self) -> ProcessResult<Option<i32>> {
        if self.exit_code.is_some() {
            return Ok(self.exit_code);
        }

        let status = self.child.try_wait().map_err(|source| ProcessError::Wait {
            name: self.name.clone(),
            source,
        })?;
        Ok(status.map(|status| self.record(status)))
    }

    /// Waits for the process to exit and returns its exit code.
    ///
    /// # Errors
    ///
    /// `ProcessError::Wait` if waiting fails.
    pub async fn wait(&mut self) -> ProcessResult<i32> {
        if let Some(code) = self.exit_code {
            return Ok(code);
        }

        let status = self
            .child
            .wait()
            .await
            .map_err(|source| ProcessError::Wait {
                name: self.name.clone(),
                source,
            })?;
        Ok(self.record(status))
    }

    /// Kills the process and reaps it, unless it already exited.
    ///
    /// # Errors
    ///
    /// `ProcessError::Kill` if the signal cannot be delivered.
    pub async fn kill(&mut self) -> ProcessResult<()> {
        if self.try_exit_code()?.is_some() {
            return Ok(());
        }

        self.child
            .kill()
            .await
            .map_err(|source| ProcessError::Kill {
                name: self.name.clone(),
                source,
            })?;
        self.wait().await.map(drop)
    }

    fn record(&mut self, status: ExitStatus) -> i32 {
        let code = exit_code_of(status);
        trace!(process = %self.name, exit_code = code, "exited");
        self.exit_code = Some(code);
        code
    }
}

#[cfg(unix)]
pub(super) fn exit_code_of(status: ExitStatus) -> i32 {
    use std::os::unix::process::ExitStatusExt as _;

    status
        .code()
        .or_else(|| status.signal().map(|signal| 128 + signal))
        .unwrap_or(-1)
}

#[cfg(not(unix))]
pub(super) fn exit_code_of(status: ExitStatus) -> i32 {
    status.code().unwrap_or(-1)
}
