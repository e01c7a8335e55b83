// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared helpers for CLI specs.
//!
//! `cli()` runs the binary in the current directory; `Project` gives a
//! scratch directory for schedule files. Every run asserts its exit code.

#![allow(dead_code)]

use assert_cmd::Command;
use std::path::Path;
use tempfile::TempDir;

/// A schedule file with one valid and one invalid schedule
pub const MIXED_SCHEDULES: &str = r#"
[schedule.nightly]
cron = "0 0 2 * * ?"
description = "Nightly cleanup"

[schedule.reports]
cron = "0 0 25 * * ?"
"#;

pub const VALID_SCHEDULES: &str = r#"
[schedule.hourly]
cron = "0 0 * * * ?"

[schedule.weekdays]
cron = "0 30 9 ? * MON-FRI"
"#;

pub fn cli() -> CliBuilder {
    CliBuilder::new(None)
}

pub struct CliBuilder {
    cmd: Command,
}

impl CliBuilder {
    fn new(dir: Option<&Path>) -> Self {
        let mut cmd = Command::cargo_bin("qcron").unwrap();
        cmd.env_remove("RUST_LOG");
        if let Some(dir) = dir {
            cmd.current_dir(dir);
        }
        Self { cmd }
    }

    pub fn args(mut self, args: &[&str]) -> Self {
        self.cmd.args(args);
        self
    }

    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.cmd.env(key, value);
        self
    }

    /// Run and expect exit code 0
    pub fn passes(self) -> RunAssert {
        self.exits_with(0)
    }

    /// Run and expect exit code 1 (invalid input or unreadable file)
    pub fn fails(self) -> RunAssert {
        self.exits_with(1)
    }

    /// Run and expect exit code 2 (rejected by argument parsing)
    pub fn usage_error(self) -> RunAssert {
        self.exits_with(2)
    }

    fn exits_with(mut self, code: i32) -> RunAssert {
        let output = self.cmd.output().unwrap();
        let run = RunAssert {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        };
        assert_eq!(
            output.status.code(),
            Some(code),
            "unexpected exit code\nstdout:\n{}\nstderr:\n{}",
            run.stdout,
            run.stderr
        );
        run
    }
}

pub struct RunAssert {
    stdout: String,
    stderr: String,
}

impl RunAssert {
    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    pub fn stderr(&self) -> &str {
        &self.stderr
    }

    pub fn stdout_has(self, needle: &str) -> Self {
        assert!(
            self.stdout.contains(needle),
            "stdout missing {:?}\nstdout:\n{}",
            needle,
            self.stdout
        );
        self
    }

    pub fn stdout_lacks(self, needle: &str) -> Self {
        assert!(
            !self.stdout.contains(needle),
            "stdout unexpectedly has {:?}\nstdout:\n{}",
            needle,
            self.stdout
        );
        self
    }

    pub fn stdout_eq(self, expected: &str) -> Self {
        similar_asserts::assert_eq!(self.stdout.as_str(), expected);
        self
    }

    pub fn stderr_has(self, needle: &str) -> Self {
        assert!(
            self.stderr.contains(needle),
            "stderr missing {:?}\nstderr:\n{}",
            needle,
            self.stderr
        );
        self
    }

    pub fn stderr_empty(self) -> Self {
        assert!(self.stderr.is_empty(), "stderr not empty:\n{}", self.stderr);
        self
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.stdout).unwrap()
    }
}

/// Scratch directory holding schedule files
pub struct Project {
    dir: TempDir,
}

impl Project {
    pub fn empty() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn file(&self, name: &str, content: &str) {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, content).unwrap();
    }

    pub fn qcron(&self) -> CliBuilder {
        CliBuilder::new(Some(self.path()))
    }
}
