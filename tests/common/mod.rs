// build-js: codewords TypeScript build orchestrator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Shared fixture: a project root whose "compiler" is a shell script.
//!
//! ```text
//! <tmp>/
//!   build_js.toml          program = "sh", args = ["build.sh"]
//!   codewords_core/build.sh
//!   codewords_lang_js/build.sh
//! ```
//!
//! Every script first records its arguments in `invoked.txt`.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use build_js::config::Config;
use build_js::subproject::Subproject;
use tempfile::TempDir;

pub struct Fixture {
    dir: TempDir,
    poll_interval_ms: u64,
    terminate_sibling: bool,
}

impl Fixture {
    /// Creates a project whose compilers run `core` and `lang_js` as script bodies.
    pub fn new(core: &str, lang_js: &str) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        for (subproject, body) in [(Subproject::Core, core), (Subproject::LangJs, lang_js)] {
            let sub_dir = dir.path().join(subproject.name());
            std::fs::create_dir(&sub_dir).expect("create subproject dir");
            std::fs::write(
                sub_dir.join("build.sh"),
                format!("echo \"$@\" > invoked.txt\n{body}\n"),
            )
            .expect("write build script");
        }

        let fixture = Self {
            dir,
            poll_interval_ms: 100,
            terminate_sibling: false,
        };
        fixture.write_config();
        fixture
    }

    pub fn terminate_sibling(mut self) -> Self {
        self.terminate_sibling = true;
        self.write_config();
        self
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn config_path(&self) -> PathBuf {
        self.root().join("build_js.toml")
    }

    /// Loads the configuration the same way the binary does with `--root`.
    pub fn config(&self) -> Config {
        Config::builder()
            .file(self.config_path())
            .set("paths.root", self.root().display().to_string())
            .expect("set root")
            .build()
            .expect("fixture config is valid")
    }

    /// Arguments the subproject's compiler was started with, if it was started.
    pub fn invoked_args(&self, subproject: Subproject) -> Option<String> {
        std::fs::read_to_string(self.root().join(subproject.name()).join("invoked.txt"))
            .ok()
            .map(|args| args.trim().to_string())
    }

    pub fn has_file(&self, subproject: Subproject, name: &str) -> bool {
        self.root().join(subproject.name()).join(name).exists()
    }

    fn write_config(&self) {
        let toml = format!(
            "[compiler]\n\
             program = \"sh\"\n\
             args = [\"build.sh\"]\n\
             watch_args = [\"--watch\"]\n\
             \n\
             [watch]\n\
             poll_interval_ms = {}\n\
             terminate_sibling = {}\n",
            self.poll_interval_ms, self.terminate_sibling
        );
        std::fs::write(self.config_path(), toml).expect("write config");
    }
}
