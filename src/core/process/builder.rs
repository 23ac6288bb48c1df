// build-js: codewords TypeScript build orchestrator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Describes one child: resolved program, argument list, directory, label.

use std::collections::BTreeMap;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, OnceLock, PoisonError};

use crate::error::{ProcessError, ProcessResult};

/// PATH lookups already done by this process; both compilers share one.
static RESOLVED: OnceLock<Mutex<BTreeMap<String, PathBuf>>> = OnceLock::new();

fn resolve(program: &str) -> Option<PathBuf> {
    let mut resolved = RESOLVED
        .get_or_init(Mutex::default)
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    if let Some(path) = resolved.get(program) {
        return Some(path.clone());
    }
    let path = which::which(program).ok()?;
    resolved.insert(program.to_owned(), path.clone());
    Some(path)
}

#[derive(Debug)]
pub struct ProcessBuilder {
    pub(super) program: PathBuf,
    pub(super) args: Vec<OsString>,
    pub(super) cwd: Option<PathBuf>,
    pub(super) name: String,
}

impl ProcessBuilder {
    pub(super) fn new(program: PathBuf) -> Self {
        let name = program
            .file_stem()
            .map_or_else(|| "process".to_owned(), |s| s.to_string_lossy().into_owned());
        Self {
            program,
            args: Vec::new(),
            cwd: None,
            name,
        }
    }

    /// Looks `program` up on PATH (or takes it as a path if it has a slash).
    ///
    /// # Errors
    ///
    /// `ProcessError::NotOnPath` when nothing executable matches.
    pub fn which(program: &str) -> ProcessResult<Self> {
        resolve(program)
            .map(Self::new)
            .ok_or_else(|| ProcessError::NotOnPath {
                program: program.to_owned(),
            })
    }

    #[must_use]
    pub fn args<I>(mut self, args: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<OsString>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn cwd(mut self, dir: impl AsRef<Path>) -> Self {
        self.cwd = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Label used in log lines instead of the program name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}
