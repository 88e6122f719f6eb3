// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Specs for `gv diff` against real git history.

#![allow(clippy::unwrap_used)]

use super::common::*;

#[test]
fn diff_against_previous_commit() {
    let dir = project(&[
        r#"{"id":"gv-a","title":"A","priority":1}"#,
        r#"{"id":"gv-b","title":"B","priority":2}"#,
    ]);
    commit_all(dir.path(), "initial");

    // Close gv-a, bump gv-b, add gv-c.
    write_issues(
        dir.path(),
        &[
            r#"{"id":"gv-a","title":"A","priority":1,"status":"closed"}"#,
            r#"{"id":"gv-b","title":"B","priority":1}"#,
            r#"{"id":"gv-c","title":"C","priority":3}"#,
        ],
    );

    let output = gv_in(&dir)
        .args(["diff", "--since", "HEAD", "--output", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let diff = &value["diff"];
    assert_eq!(diff["new_issues"][0]["id"], "gv-c");
    assert_eq!(diff["closed_issues"][0]["id"], "gv-a");
    assert_eq!(diff["modified_issues"][0]["id"], "gv-b");
    assert_eq!(
        diff["modified_issues"][0]["changes"][0]["field"],
        "priority"
    );
    assert_eq!(diff["summary"]["health_trend"], "improving");
}

#[test]
fn human_diff_shows_the_trend() {
    let dir = project(&[r#"{"id":"gv-a","title":"A"}"#]);
    commit_all(dir.path(), "initial");
    write_issues(
        dir.path(),
        &[
            r#"{"id":"gv-a","title":"A"}"#,
            r#"{"id":"gv-new","title":"New work"}"#,
        ],
    );

    gv_in(&dir)
        .args(["diff", "--since", "HEAD"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Health trend:"))
        .stdout(predicate::str::contains("degrading"))
        .stdout(predicate::str::contains("gv-new"));
}

#[test]
fn identical_states_are_stable() {
    let dir = project(&[r#"{"id":"gv-a","title":"A"}"#]);
    commit_all(dir.path(), "initial");

    gv_in(&dir)
        .args(["diff", "--since", "HEAD"])
        .assert()
        .success()
        .stdout(predicate::str::contains("stable"));
}

#[test]
fn unknown_revision_fails_cleanly() {
    let dir = project(&[r#"{"id":"gv-a","title":"A"}"#]);
    commit_all(dir.path(), "initial");

    gv_in(&dir)
        .args(["diff", "--since", "no-such-rev"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}
