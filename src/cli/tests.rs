// build-js: codewords TypeScript build orchestrator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::cli::Cli;
use crate::cmd::build::Mode;
use clap::Parser;
use clap::error::ErrorKind;
use std::path::Path;

#[test]
fn test_parse_no_args_is_sequential() {
    let cli = Cli::try_parse_from(["build_js"]).unwrap();
    assert!(!cli.watch);
    assert_eq!(cli.mode(), Mode::Sequential);
}

#[test]
fn test_parse_watch() {
    let cli = Cli::try_parse_from(["build_js", "--watch"]).unwrap();
    assert_eq!(cli.mode(), Mode::Watch);
}

#[test]
fn test_parse_global_options() {
    let cli = Cli::try_parse_from(["build_js", "-l", "4", "--watch"]).unwrap();
    insta::assert_debug_snapshot!(cli, @r"
    Cli {
        global: GlobalOptions {
            configs: [],
            options: [],
            root: None,
            log_level: Some(
                4,
            ),
            file_log_level: None,
            log_file: None,
        },
        watch: true,
    }
    ");
}

#[test]
fn test_unknown_flag_rejected() {
    let err = Cli::try_parse_from(["build_js", "--bogus"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnknownArgument);
}

#[test]
fn test_watch_takes_no_value() {
    assert!(Cli::try_parse_from(["build_js", "--watch=yes"]).is_err());
    assert!(Cli::try_parse_from(["build_js", "--watch", "extra"]).is_err());
}

#[test]
fn test_log_level_range() {
    assert!(Cli::try_parse_from(["build_js", "-l", "7"]).is_err());
}

#[test]
fn test_root_defaults_to_current_dir() {
    let cli = Cli::try_parse_from(["build_js"]).unwrap();
    assert_eq!(cli.global.root_dir(), Path::new("."));

    let cli = Cli::try_parse_from(["build_js", "-C", "/work/codewords"]).unwrap();
    assert_eq!(cli.global.root_dir(), Path::new("/work/codewords"));
}

#[test]
fn test_config_loader_applies_set_and_root() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().display().to_string();
    let cli = Cli::try_parse_from([
        "build_js",
        "--root",
        root.as_str(),
        "-s",
        "watch.poll_interval_ms=20",
    ])
    .unwrap();

    let config = cli.global.config_loader().unwrap().build().unwrap();
    assert_eq!(config.watch.poll_interval_ms, 20);
    assert_eq!(config.paths.root, dir.path());
}

#[test]
fn test_config_loader_reads_root_config_file() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("build_js.toml"),
        "[compiler]\nprogram = \"yarn\"\n",
    )
    .unwrap();
    let root = dir.path().display().to_string();
    let cli = Cli::try_parse_from(["build_js", "-C", root.as_str()]).unwrap();

    let config = cli.global.config_loader().unwrap().build().unwrap();
    assert_eq!(config.compiler.program, "yarn");
}

#[test]
fn test_config_loader_rejects_bad_set() {
    let cli = Cli::try_parse_from(["build_js", "-s", "novalue"]).unwrap();
    assert!(cli.global.config_loader().is_err());
}
