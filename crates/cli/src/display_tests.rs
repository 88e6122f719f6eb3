// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use gv_core::{Analyzer, DepType, Dependency, Issue, Snapshot, Status};

fn issues(nodes: &[&str], edges: &[(&str, &str)]) -> Vec<Issue> {
    nodes
        .iter()
        .map(|id| {
            let mut issue = Issue::new(*id, format!("Issue {id}"));
            issue.dependencies = edges
                .iter()
                .filter(|(from, _)| from == id)
                .map(|(from, to)| Dependency::new(*from, *to, DepType::Blocks))
                .collect();
            issue
        })
        .collect()
}

#[test]
fn issue_line_contains_the_essentials() {
    let mut issue = Issue::new("gv-a1b2", "Fix the importer");
    issue.priority = 1;
    issue.status = Status::InProgress;
    let line = format_issue_line(&issue);
    assert!(line.starts_with("P1 in_progress"));
    assert!(line.contains("gv-a1b2"));
    assert!(line.ends_with("Fix the importer"));
}

#[test]
fn cycles_render_closed() {
    let cycle = vec!["a".to_string(), "b".to_string(), "c".to_string()];
    assert_eq!(format_cycle(&cycle), "a -> b -> c -> a");
    assert_eq!(format_cycle(&[]), "(empty)");
}

#[test]
fn insights_rendering_names_the_sections() {
    let analyzer = Analyzer::new(issues(&["a", "b", "c"], &[("a", "b"), ("b", "c")]));
    let text = render_insights(&analyzer.insights(10)).join("\n");
    assert!(text.contains("Bottlenecks"));
    assert!(text.contains("Keystones"));
    assert!(text.contains("density"));
}

#[test]
fn plan_rendering_handles_empty_and_full() {
    let empty = Analyzer::new(Vec::new()).execution_plan();
    assert_eq!(render_plan(&empty), vec!["Nothing is actionable right now"]);

    let analyzer = Analyzer::new(issues(&["a", "b"], &[("a", "b")]));
    let text = render_plan(&analyzer.execution_plan()).join("\n");
    assert!(text.contains("Track 1:"));
    assert!(text.contains("unblocks: a"));
    assert!(text.contains("Start with b"));
}

#[test]
fn recommendations_rendering_handles_empty() {
    assert_eq!(
        render_recommendations(&[]),
        vec!["Priorities look consistent with the graph"]
    );
}

#[test]
fn diff_rendering_shows_trend_and_sections() {
    let from = Snapshot::at(issues(&["a", "b"], &[]), "old", chrono::Utc::now());
    let mut changed = issues(&["a", "b", "c"], &[]);
    changed[0].status = Status::Closed;
    let to = Snapshot::at(changed, "new", chrono::Utc::now());
    let diff = gv_core::compare(&from, &to);

    let text = render_diff(&diff, "HEAD~5").join("\n");
    assert!(text.contains("Changes since HEAD~5"));
    assert!(text.contains("Health trend:"));
    assert!(text.contains("New issues:"));
    assert!(text.contains("Closed issues:"));
    assert!(text.contains("[c]"));
    assert!(text.contains("[a]"));
}
