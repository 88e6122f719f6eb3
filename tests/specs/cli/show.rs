// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Specs for `gv show` and the recipe flag.

#![allow(clippy::unwrap_used)]

use super::common::*;

#[test]
fn lists_all_issues() {
    let dir = chain_project();
    gv_in(&dir)
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("gv-top"))
        .stdout(predicate::str::contains("gv-mid"))
        .stdout(predicate::str::contains("gv-base"));
}

#[test]
fn actionable_recipe_filters_the_listing() {
    let dir = chain_project();
    gv_in(&dir)
        .args(["-r", "actionable", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("gv-base"))
        .stdout(predicate::str::contains("gv-top").not());
}

#[test]
fn unknown_recipe_fails_with_the_available_names() {
    let dir = chain_project();
    gv_in(&dir)
        .args(["-r", "bogus", "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("actionable"));
}

#[test]
fn as_of_lists_the_historical_state() {
    let dir = project(&[r#"{"id":"gv-old","title":"Old state"}"#]);
    commit_all(dir.path(), "initial");
    write_issues(dir.path(), &[r#"{"id":"gv-new","title":"New state"}"#]);

    gv_in(&dir)
        .args(["show", "--as-of", "HEAD"])
        .assert()
        .success()
        .stdout(predicate::str::contains("gv-old"))
        .stdout(predicate::str::contains("gv-new").not());
}

#[test]
fn explicit_input_overrides_discovery() {
    let dir = chain_project();
    let extra = dir.path().join("other.jsonl");
    std::fs::write(&extra, "{\"id\":\"gv-other\",\"title\":\"Elsewhere\"}\n").unwrap();

    gv_in(&dir)
        .args(["--input", extra.to_str().unwrap(), "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("gv-other"))
        .stdout(predicate::str::contains("gv-top").not());
}
