// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared helpers for CLI specs.

#![allow(clippy::unwrap_used)]
#![allow(dead_code)]

use std::fs;
use std::path::Path;
use std::process::Command as StdCommand;

use assert_cmd::Command;
use tempfile::TempDir;

pub use predicates::prelude::*;

/// The gv binary with no working directory set.
pub fn gv() -> Command {
    Command::cargo_bin("gv").unwrap()
}

/// The gv binary rooted in a project directory.
///
/// HOME points at the project too, so user-level recipe files on the host
/// cannot leak into specs.
pub fn gv_in(dir: &TempDir) -> Command {
    let mut cmd = gv();
    cmd.current_dir(dir.path());
    cmd.env("HOME", dir.path());
    cmd
}

/// Creates a project directory with `.beads/issues.jsonl` holding the lines.
pub fn project(lines: &[&str]) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    write_issues(dir.path(), lines);
    dir
}

/// Rewrites the project's issues file.
pub fn write_issues(root: &Path, lines: &[&str]) {
    let beads = root.join(".beads");
    fs::create_dir_all(&beads).unwrap();
    fs::write(beads.join("issues.jsonl"), format!("{}\n", lines.join("\n"))).unwrap();
}

/// A three-issue chain: gv-top depends on gv-mid depends on gv-base.
pub fn chain_project() -> TempDir {
    project(&[
        r#"{"id":"gv-top","title":"Ship the feature","priority":1,"dependencies":[{"issue_id":"gv-top","depends_on_id":"gv-mid","type":"blocks"}]}"#,
        r#"{"id":"gv-mid","title":"Wire the backend","priority":2,"dependencies":[{"issue_id":"gv-mid","depends_on_id":"gv-base","type":"blocks"}]}"#,
        r#"{"id":"gv-base","title":"Define the schema","priority":2}"#,
    ])
}

/// Runs git in a directory, asserting success.
pub fn git(root: &Path, args: &[&str]) {
    let status = StdCommand::new("git")
        .args(args)
        .current_dir(root)
        .env("GIT_AUTHOR_NAME", "spec")
        .env("GIT_AUTHOR_EMAIL", "spec@example.com")
        .env("GIT_COMMITTER_NAME", "spec")
        .env("GIT_COMMITTER_EMAIL", "spec@example.com")
        .status()
        .unwrap();
    assert!(status.success(), "git {args:?} failed");
}

/// Initializes a git repository and commits the current issues file.
pub fn commit_all(root: &Path, message: &str) {
    if !root.join(".git").is_dir() {
        git(root, &["init", "-q", "-b", "main"]);
    }
    git(root, &["add", "."]);
    git(root, &["commit", "-q", "-m", message]);
}
