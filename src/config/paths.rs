// build-js: codewords TypeScript build orchestrator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Path configuration.
//!
//! ```text
//! root/
//!   codewords_core/      (core)
//!     build/
//!   codewords_lang_js/   (lang_js)
//!     build/
//! ```
//!
//! Relative subproject directories are resolved against `root`; absolute
//! ones are used as-is.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::subproject::Subproject;

/// Locations of the two subprojects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PathsConfig {
    /// Project root (default: the current directory).
    pub root: PathBuf,
    /// `codewords_core` directory.
    pub core: PathBuf,
    /// `codewords_lang_js` directory.
    pub lang_js: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            core: PathBuf::from(Subproject::Core.name()),
            lang_js: PathBuf::from(Subproject::LangJs.name()),
        }
    }
}

impl PathsConfig {
    /// Returns the working directory for a subproject's compiler.
    #[must_use]
    pub fn dir(&self, subproject: Subproject) -> PathBuf {
        let dir: &Path = match subproject {
            Subproject::Core => &self.core,
            Subproject::LangJs => &self.lang_js,
        };
        self.root.join(dir)
    }
}
