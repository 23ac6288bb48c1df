// build-js: codewords TypeScript build orchestrator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                  main.rs
//!                     |
//!          +----------+----------+
//!          v                     v
//!       cli (clap)         cmd::build
//!          |           sequential | watch
//!          +----------+----------+
//!                     v
//!              ,-------------,
//!              |   config    |
//!              | TOML layers |
//!              '------+------'
//!                     v
//!                 compiler
//!           Invocation, Compiler
//!                     |
//!   +-----------------------------------------+
//!   |  core   process builder + handle        |
//!   +-----------------------------------------+
//!   |  foundation   error, logging, subproject|
//!   +-----------------------------------------+
//! ```

pub mod cli;
pub mod cmd;
pub mod compiler;
pub mod config;
pub mod core;
pub mod error;
pub mod logging;
pub mod subproject;
