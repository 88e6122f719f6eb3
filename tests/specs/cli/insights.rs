// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Specs for `gv insights`.

#![allow(clippy::unwrap_used)]

use super::common::*;

#[test]
fn json_output_is_valid_and_complete() {
    let dir = chain_project();
    let output = gv_in(&dir)
        .args(["insights", "--output", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert!(value.get("generated_at").is_some());
    assert!(value["warnings"].as_array().unwrap().is_empty());
    let insights = &value["insights"];
    assert_eq!(insights["keystones"][0]["id"], "gv-base");
    assert_eq!(insights["stats"]["in_degree"]["gv-base"], 1);
}

#[test]
fn text_output_names_sections() {
    let dir = chain_project();
    gv_in(&dir)
        .arg("insights")
        .assert()
        .success()
        .stdout(predicate::str::contains("Keystones"))
        .stdout(predicate::str::contains("gv-top"));
}

#[test]
fn dangling_dependency_warns_but_succeeds() {
    let dir = project(&[
        r#"{"id":"gv-a","title":"A","dependencies":[{"issue_id":"gv-a","depends_on_id":"gv-ghost","type":"blocks"}]}"#,
    ]);
    gv_in(&dir)
        .arg("insights")
        .assert()
        .success()
        .stderr(predicate::str::contains("gv-ghost"));
}

#[test]
fn warnings_are_embedded_in_json_not_stderr() {
    let dir = project(&[
        r#"{"id":"gv-a","title":"A","dependencies":[{"issue_id":"gv-a","depends_on_id":"gv-ghost","type":"blocks"}]}"#,
    ]);
    let output = gv_in(&dir)
        .args(["insights", "--output", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let warnings = value["warnings"].as_array().unwrap();
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].as_str().unwrap().contains("gv-ghost"));
}

#[test]
fn missing_project_fails_with_hint() {
    let dir = tempfile::tempdir().unwrap();
    gv_in(&dir)
        .arg("insights")
        .assert()
        .failure()
        .stderr(predicate::str::contains(".beads/issues.jsonl"));
}

#[test]
fn repeated_runs_produce_identical_analysis() {
    let dir = chain_project();
    let first = gv_in(&dir)
        .args(["insights", "--output", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let second = gv_in(&dir)
        .args(["insights", "--output", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let mut a: serde_json::Value = serde_json::from_slice(&first).unwrap();
    let mut b: serde_json::Value = serde_json::from_slice(&second).unwrap();
    // Only the generation timestamp may differ between runs.
    a.as_object_mut().unwrap().remove("generated_at");
    b.as_object_mut().unwrap().remove("generated_at");
    assert_eq!(a, b);
}
