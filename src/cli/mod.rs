// build-js: codewords TypeScript build orchestrator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for build-js using clap derive.
//!
//! # Usage
//!
//! ```text
//! build_js [global options] [--watch]
//! ```

pub mod global;

#[cfg(test)]
mod tests;

use crate::cli::global::GlobalOptions;
use crate::cmd::build::Mode;
use clap::Parser;

/// Builds the `codewords_core` and `codewords_lang_js` libraries.
///
/// Built libraries are placed in `codewords_core/build/` and
/// `codewords_lang_js/build/`.
#[derive(Debug, Parser)]
#[command(
    name = "build_js",
    author,
    version,
    about = "Builds the codewords_core and codewords_lang_js libraries",
    long_about = "Builds the codewords_core and codewords_lang_js libraries.\n\n\
                  Built libraries will be located in codewords_core/build/ and\n\
                  codewords_lang_js/build/, respectively. By default both are\n\
                  compiled once, in that order, stopping at the first failure.\n\
                  With --watch both compilers stay resident and build_js exits\n\
                  as soon as either of them exits.",
    after_help = "CONFIG FILES:\n\n\
                  build_js looks for an optional `build_js.toml` in the project\n\
                  root (the current directory, or --root). Additional files can\n\
                  be given with --config and are loaded after it; --set overrides\n\
                  single keys on top of all files."
)]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Execute subproject compilers in watch mode. Exit when any complete.
    #[arg(long)]
    pub watch: bool,
}

impl Cli {
    /// Returns the build mode selected by `--watch`.
    #[must_use]
    pub const fn mode(&self) -> Mode {
        Mode::from_watch_flag(self.watch)
    }
}

/// Parses command-line arguments.
///
/// Exits with a usage error on unknown or malformed arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

