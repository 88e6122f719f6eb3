// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Specs for `gv recipes` and project recipe files.

#![allow(clippy::unwrap_used)]

use super::common::*;

#[test]
fn builtins_are_listed() {
    let dir = project(&[r#"{"id":"gv-a","title":"A"}"#]);
    gv_in(&dir)
        .arg("recipes")
        .assert()
        .success()
        .stdout(predicate::str::contains("actionable"))
        .stdout(predicate::str::contains("stale"))
        .stdout(predicate::str::contains("builtin"));
}

#[test]
fn json_listing_is_sorted_by_name() {
    let dir = project(&[r#"{"id":"gv-a","title":"A"}"#]);
    let output = gv_in(&dir)
        .args(["recipes", "--output", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let names: Vec<&str> = value["recipes"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["name"].as_str().unwrap())
        .collect();
    let mut sorted = names.clone();
    sorted.sort_unstable();
    assert_eq!(names, sorted);
}

#[test]
fn project_recipes_are_picked_up() {
    let dir = project(&[
        r#"{"id":"gv-bug","title":"Crash on load","issue_type":"bug"}"#,
        r#"{"id":"gv-task","title":"Tidy docs","issue_type":"task"}"#,
    ]);
    std::fs::create_dir_all(dir.path().join(".gv")).unwrap();
    std::fs::write(
        dir.path().join(".gv/recipes.toml"),
        r#"
[recipes.crashes]
description = "Crash reports only"

[recipes.crashes.filters]
title_contains = "crash"
"#,
    )
    .unwrap();

    gv_in(&dir)
        .arg("recipes")
        .assert()
        .success()
        .stdout(predicate::str::contains("crashes"))
        .stdout(predicate::str::contains("project"));

    gv_in(&dir)
        .args(["-r", "crashes", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("gv-bug"))
        .stdout(predicate::str::contains("gv-task").not());
}
