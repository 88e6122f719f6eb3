// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Specs for `gv priority`.

#![allow(clippy::unwrap_used)]

use super::common::*;

fn hub_project() -> tempfile::TempDir {
    // gv-key holds up six leaves but sits at the lowest priority.
    let mut lines = vec![
        r#"{"id":"gv-key","title":"Keystone","priority":4,"dependencies":[{"issue_id":"gv-key","depends_on_id":"gv-base","type":"blocks"}]}"#.to_string(),
        r#"{"id":"gv-base","title":"Base","priority":2}"#.to_string(),
    ];
    for n in 0..6 {
        lines.push(format!(
            r#"{{"id":"gv-leaf-{n}","title":"Leaf {n}","priority":2,"dependencies":[{{"issue_id":"gv-leaf-{n}","depends_on_id":"gv-key","type":"blocks"}}]}}"#
        ));
    }
    let line_refs: Vec<&str> = lines.iter().map(String::as_str).collect();
    project(&line_refs)
}

#[test]
fn misprioritized_hub_gets_an_increase() {
    let dir = hub_project();
    let output = gv_in(&dir)
        .args(["priority", "--output", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let recommendations = value["recommendations"].as_array().unwrap();
    let key = recommendations
        .iter()
        .find(|r| r["id"] == "gv-key")
        .unwrap();
    assert_eq!(key["direction"], "increase");
    assert!(key["confidence"].as_f64().unwrap() >= 0.5);
    assert_eq!(value["summary"]["total_issues"], 8);
}

#[test]
fn summary_counts_high_confidence() {
    let dir = hub_project();
    let output = gv_in(&dir)
        .args(["priority", "--output", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let recommendations = value["recommendations"].as_array().unwrap();
    let high = recommendations
        .iter()
        .filter(|r| r["confidence"].as_f64().unwrap() >= 0.7)
        .count();
    assert_eq!(value["summary"]["high_confidence"], high);
}

#[test]
fn text_output_prints_directions() {
    let dir = hub_project();
    gv_in(&dir)
        .arg("priority")
        .assert()
        .success()
        .stdout(predicate::str::contains("gv-key"))
        .stdout(predicate::str::contains("increase"));
}
