// build-js: codewords TypeScript build orchestrator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for the sequential and watch build modes.
//!
//! The compiler is replaced by `sh build.sh` in each subproject directory.

#![cfg(unix)]

mod common;

use std::time::{Duration, Instant};

use build_js::cmd::build::{Mode, Outcome, run_build_command};
use build_js::subproject::Subproject;
use common::Fixture;
use tokio_util::sync::CancellationToken;

// =============================================================================
// Sequential Mode
// =============================================================================

#[tokio::test]
async fn sequential_both_succeed() {
    let fixture = Fixture::new("exit 0", "exit 0");

    let outcome = run_build_command(Mode::Sequential, &fixture.config(), CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(outcome, Outcome::Success);
    assert_eq!(outcome.code(), 0);
    assert_eq!(fixture.invoked_args(Subproject::Core).as_deref(), Some(""));
    assert_eq!(fixture.invoked_args(Subproject::LangJs).as_deref(), Some(""));
}

#[tokio::test]
async fn sequential_core_failure_skips_lang_js() {
    let fixture = Fixture::new("exit 2", "exit 0");

    let outcome = run_build_command(Mode::Sequential, &fixture.config(), CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(
        outcome,
        Outcome::StepFailed {
            subproject: Subproject::Core,
            code: 2,
        }
    );
    assert_eq!(outcome.code(), 1);
    assert!(fixture.invoked_args(Subproject::Core).is_some());
    assert!(fixture.invoked_args(Subproject::LangJs).is_none());
}

#[tokio::test]
async fn sequential_lang_js_failure() {
    let fixture = Fixture::new("exit 0", "exit 7");

    let outcome = run_build_command(Mode::Sequential, &fixture.config(), CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(
        outcome,
        Outcome::StepFailed {
            subproject: Subproject::LangJs,
            code: 7,
        }
    );
    assert_eq!(outcome.code(), 1);
}

#[tokio::test]
async fn sequential_core_finishes_before_lang_js_starts() {
    let fixture = Fixture::new("sleep 0.2\ntouch done", "test -f ../codewords_core/done");

    let outcome = run_build_command(Mode::Sequential, &fixture.config(), CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(outcome, Outcome::Success);
}

#[tokio::test]
async fn sequential_missing_directory_is_an_error() {
    let fixture = Fixture::new("exit 0", "exit 0");
    std::fs::remove_dir_all(fixture.root().join(Subproject::LangJs.name())).unwrap();

    let result =
        run_build_command(Mode::Sequential, &fixture.config(), CancellationToken::new()).await;

    assert!(result.is_err());
    assert!(fixture.invoked_args(Subproject::Core).is_some());
}

#[tokio::test]
async fn sequential_interrupted() {
    let fixture = Fixture::new("sleep 5", "exit 0");
    let token = CancellationToken::new();
    token.cancel();

    let started = Instant::now();
    let outcome = run_build_command(Mode::Sequential, &fixture.config(), token)
        .await
        .unwrap();

    assert_eq!(outcome, Outcome::Interrupted);
    assert_eq!(outcome.code(), 130);
    assert!(started.elapsed() < Duration::from_secs(5));
    assert!(fixture.invoked_args(Subproject::LangJs).is_none());
}

// =============================================================================
// Watch Mode
// =============================================================================

#[tokio::test]
async fn watch_core_exit_code_propagates_and_lang_js_keeps_running() {
    let fixture = Fixture::new("sleep 0.25\nexit 3", "sleep 1\ntouch finished");

    let outcome = run_build_command(Mode::Watch, &fixture.config(), CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(
        outcome,
        Outcome::WatchExited {
            subproject: Subproject::Core,
            code: 3,
        }
    );
    assert_eq!(outcome.code(), 3);
    assert_eq!(fixture.invoked_args(Subproject::Core).as_deref(), Some("--watch"));
    assert_eq!(fixture.invoked_args(Subproject::LangJs).as_deref(), Some("--watch"));

    // lang_js was left running, so it gets to finish on its own.
    assert!(!fixture.has_file(Subproject::LangJs, "finished"));
    tokio::time::sleep(Duration::from_secs(2)).await;
    assert!(fixture.has_file(Subproject::LangJs, "finished"));
}

#[tokio::test]
async fn watch_signalled_compiler_reports_128_plus_signal() {
    let fixture = Fixture::new("sleep 0.1\nkill -TERM $$", "sleep 1");

    let outcome = run_build_command(Mode::Watch, &fixture.config(), CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(
        outcome,
        Outcome::WatchExited {
            subproject: Subproject::Core,
            code: 143,
        }
    );
}

#[tokio::test]
async fn watch_lang_js_exit_code_propagates() {
    let fixture = Fixture::new("sleep 1", "exit 4");

    let outcome = run_build_command(Mode::Watch, &fixture.config(), CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(
        outcome,
        Outcome::WatchExited {
            subproject: Subproject::LangJs,
            code: 4,
        }
    );
}

#[tokio::test]
async fn watch_clean_exit_is_success_code() {
    let fixture = Fixture::new("sleep 0.1\nexit 0", "sleep 1");

    let outcome = run_build_command(Mode::Watch, &fixture.config(), CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(outcome.code(), 0);
}

#[tokio::test]
async fn watch_terminate_sibling_kills_survivor() {
    let fixture = Fixture::new("sleep 0.1\nexit 3", "sleep 1\ntouch finished").terminate_sibling();

    let outcome = run_build_command(Mode::Watch, &fixture.config(), CancellationToken::new())
        .await
        .unwrap();
    assert_eq!(outcome.code(), 3);

    tokio::time::sleep(Duration::from_millis(1500)).await;
    assert!(!fixture.has_file(Subproject::LangJs, "finished"));
}

#[tokio::test]
async fn watch_interrupted() {
    let fixture = Fixture::new("sleep 5", "sleep 5").terminate_sibling();
    let token = CancellationToken::new();

    let cancel = token.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(300)).await;
        cancel.cancel();
    });

    let started = Instant::now();
    let outcome = run_build_command(Mode::Watch, &fixture.config(), token)
        .await
        .unwrap();

    assert_eq!(outcome, Outcome::Interrupted);
    assert!(started.elapsed() < Duration::from_secs(5));
}
