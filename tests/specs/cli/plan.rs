// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Specs for `gv plan`.

#![allow(clippy::unwrap_used)]

use super::common::*;

#[test]
fn chain_plan_starts_at_the_bottom() {
    let dir = chain_project();
    let output = gv_in(&dir)
        .args(["plan", "--output", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let plan = &value["plan"];
    assert_eq!(plan["summary"]["total_actionable"], 1);
    assert_eq!(plan["summary"]["total_tracks"], 1);
    assert_eq!(plan["tracks"][0]["items"][0]["id"], "gv-base");
    assert_eq!(plan["tracks"][0]["items"][0]["unblocks"][0], "gv-mid");
}

#[test]
fn independent_components_get_separate_tracks() {
    let dir = project(&[
        r#"{"id":"gv-a","title":"A","dependencies":[{"issue_id":"gv-a","depends_on_id":"gv-b","type":"blocks"}]}"#,
        r#"{"id":"gv-b","title":"B"}"#,
        r#"{"id":"gv-p","title":"P","dependencies":[{"issue_id":"gv-p","depends_on_id":"gv-q","type":"blocks"}]}"#,
        r#"{"id":"gv-q","title":"Q"}"#,
    ]);
    let output = gv_in(&dir)
        .args(["plan", "--output", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["plan"]["summary"]["total_tracks"], 2);
}

#[test]
fn text_plan_is_readable() {
    let dir = chain_project();
    gv_in(&dir)
        .arg("plan")
        .assert()
        .success()
        .stdout(predicate::str::contains("Track 1:"))
        .stdout(predicate::str::contains("gv-base"))
        .stdout(predicate::str::contains("unblocks: gv-mid"));
}

#[test]
fn everything_blocked_says_so() {
    let dir = project(&[
        r#"{"id":"gv-x","title":"X","dependencies":[{"issue_id":"gv-x","depends_on_id":"gv-y","type":"blocks"}]}"#,
        r#"{"id":"gv-y","title":"Y","status":"blocked","dependencies":[{"issue_id":"gv-y","depends_on_id":"gv-x","type":"blocks"}]}"#,
    ]);
    gv_in(&dir)
        .arg("plan")
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing is actionable"));
}
