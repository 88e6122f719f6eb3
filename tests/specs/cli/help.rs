// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Help and version surface.

#![allow(clippy::unwrap_used)]

use super::common::*;
use yare::parameterized;

#[test]
fn help_lists_the_commands() {
    gv().arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("insights"))
        .stdout(predicate::str::contains("plan"))
        .stdout(predicate::str::contains("priority"))
        .stdout(predicate::str::contains("diff"))
        .stdout(predicate::str::contains("recipes"));
}

#[parameterized(
    insights = { "insights" },
    plan = { "plan" },
    priority = { "priority" },
    diff = { "diff" },
    show = { "show" },
    export = { "export" },
    recipes = { "recipes" },
)]
fn command_help_works(command: &str) {
    gv().args([command, "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn version_flag_prints_version() {
    gv().arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("gv "));
}

#[test]
fn unknown_command_fails() {
    gv().arg("frobnicate").assert().failure();
}
