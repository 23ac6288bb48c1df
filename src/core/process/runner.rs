// build-js: codewords TypeScript build orchestrator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Turns a `ProcessBuilder` into a running child.

use std::fmt::Write as _;
use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, trace};

use super::builder::ProcessBuilder;
use super::handle::ProcessHandle;
use crate::error::{ProcessError, ProcessResult};

impl ProcessBuilder {
    /// Shell-ish rendering for logs and error messages.
    #[must_use]
    pub fn command_line(&self) -> String {
        let mut line = self.program.display().to_string();
        for arg in &self.args {
            let arg = arg.to_string_lossy();
            if arg.contains(char::is_whitespace) {
                let _ = write!(line, " \"{arg}\"");
            } else {
                let _ = write!(line, " {arg}");
            }
        }
        line
    }

    /// Starts the child and returns at once.
    ///
    /// All three standard streams are shared with the orchestrator, so the
    /// compiler can prompt (e.g. `npx` asking to install a package) and its
    /// output reaches the terminal unbuffered. Dropping the handle leaves the
    /// child running.
    ///
    /// # Errors
    ///
    /// `ProcessError::Spawn` when the program or working directory is unusable.
    pub fn spawn(self) -> ProcessResult<ProcessHandle> {
        let line = self.command_line();
        let mut command = Command::new(&self.program);
        command
            .args(&self.args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .kill_on_drop(false);
        if let Some(dir) = &self.cwd {
            debug!(process = %self.name, cwd = %dir.display(), "cd");
            command.current_dir(dir);
        }
        debug!(process = %self.name, cmd = %line, "exec");

        let child = command.spawn().map_err(|source| ProcessError::Spawn {
            command: line,
            source,
        })?;
        trace!(process = %self.name, pid = ?child.id(), "spawned");
        Ok(ProcessHandle::new(self.name, child))
    }
}
