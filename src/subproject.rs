// build-js: codewords TypeScript build orchestrator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! The two TypeScript subprojects, in build order.
//!
//! ```text
//! Core (codewords_core) --> LangJs (codewords_lang_js)
//! ```

use std::fmt;

/// One of the two independently buildable subprojects.
///
/// Ordering matters: `Core` is built first in sequential mode and polled
/// first in watch mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Subproject {
    /// `codewords_core`
    Core,
    /// `codewords_lang_js`
    LangJs,
}

impl Subproject {
    /// All subprojects in build order.
    pub const ALL: [Self; 2] = [Self::Core, Self::LangJs];

    /// Returns the subproject name, which is also its default directory.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Core => "codewords_core",
            Self::LangJs => "codewords_lang_js",
        }
    }
}

impl fmt::Display for Subproject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
