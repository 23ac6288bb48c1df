// build-js: codewords TypeScript build orchestrator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Compiler invocations for the two subprojects.
//!
//! ```text
//! Compiler::from_config(&Config)
//!   invocation(sub, extra) --> Invocation { subproject, cwd, args }
//!   start(sub, extra)      --> ProcessHandle (non-blocking)
//!
//! npx tsc [extra...]   in   <root>/<subproject dir>
//! ```


use std::path::PathBuf;
use tracing::info;

use crate::config::Config;
use crate::config::paths::PathsConfig;
use crate::config::types::CompilerConfig;
use crate::core::process::builder::ProcessBuilder;
use crate::core::process::handle::ProcessHandle;
use crate::error::Result;
use crate::subproject::Subproject;

/// One compiler run: where it runs and with which arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Subproject being compiled.
    pub subproject: Subproject,
    /// Working directory of the compiler.
    pub cwd: PathBuf,
    /// Arguments after the program name.
    pub args: Vec<String>,
}

/// Starts the external compiler in a subproject directory.
#[derive(Debug, Clone)]
pub struct Compiler {
    compiler: CompilerConfig,
    paths: PathsConfig,
}

impl Compiler {
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            compiler: config.compiler.clone(),
            paths: config.paths.clone(),
        }
    }

    /// Arguments that put the compiler in its own watch mode.
    #[must_use]
    pub fn watch_args(&self) -> &[String] {
        &self.compiler.watch_args
    }

    /// Describes the run for `subproject` with `extra` appended to the
    /// configured arguments.
    #[must_use]
    pub fn invocation(&self, subproject: Subproject, extra: &[String]) -> Invocation {
        Invocation {
            subproject,
            cwd: self.paths.dir(subproject),
            args: self
                .compiler
                .args
                .iter()
                .chain(extra)
                .cloned()
                .collect(),
        }
    }

    /// Starts the compiler for `subproject` and returns immediately.
    ///
    /// The compiler shares this process's terminal: stdin, stdout and stderr.
    ///
    /// # Errors
    ///
    /// Returns an error if the compiler program is not in PATH or the
    /// process cannot be spawned (e.g. the subproject directory is missing).
    pub fn start(&self, subproject: Subproject, extra: &[String]) -> Result<ProcessHandle> {
        let invocation = self.invocation(subproject, extra);
        info!(subproject = %subproject, "compiling");

        let handle = ProcessBuilder::which(&self.compiler.program)?
            .args(invocation.args)
            .cwd(&invocation.cwd)
            .name(subproject.name())
            .spawn()?;
        Ok(handle)
    }
}
