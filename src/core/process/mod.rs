// build-js: codewords TypeScript build orchestrator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Async process spawning and management.
//!
//! ```text
//! ProcessBuilder::which("npx")
//!   .args() .cwd() .name()
//!   .spawn()
//!       --> tokio::process::Command (stdio inherited)
//!       --> ProcessHandle { try_exit_code, wait, kill }
//! ```

pub mod builder;
pub mod handle;
mod runner;
