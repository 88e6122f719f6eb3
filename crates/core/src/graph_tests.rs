// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::issue::Dependency;
use yare::parameterized;

fn issue(id: &str) -> Issue {
    Issue::new(id, format!("Issue {id}"))
}

fn issue_with_deps(id: &str, deps: &[(&str, DepType)]) -> Issue {
    let mut i = issue(id);
    i.dependencies = deps
        .iter()
        .map(|(target, t)| Dependency::new(id, *target, t.clone()))
        .collect();
    i
}

#[test]
fn empty_input_builds_empty_graph() {
    let graph = DepGraph::build(Vec::new());
    assert_eq!(graph.node_count(), 0);
    assert_eq!(graph.edge_count(), 0);
    assert!(graph.warnings().is_empty());
}

#[test]
fn nodes_follow_input_order() {
    let graph = DepGraph::build(vec![issue("gv-c"), issue("gv-a"), issue("gv-b")]);
    assert_eq!(graph.ids(), &["gv-c", "gv-a", "gv-b"]);
    assert_eq!(graph.index("gv-a"), Some(1));
    assert_eq!(graph.issue("gv-b").unwrap().id, "gv-b");
}

#[test]
fn blocks_and_parent_child_become_edges() {
    let graph = DepGraph::build(vec![
        issue_with_deps(
            "gv-a",
            &[("gv-b", DepType::Blocks), ("gv-c", DepType::ParentChild)],
        ),
        issue("gv-b"),
        issue("gv-c"),
    ]);
    assert_eq!(graph.edge_count(), 2);
    let edges: Vec<(usize, usize)> = graph.edges().map(|(u, v, _)| (u, v)).collect();
    assert_eq!(edges, vec![(0, 1), (0, 2)]);
}

#[parameterized(
    related = { DepType::Related },
    discovered_from = { DepType::DiscoveredFrom },
    unknown = { DepType::Other("caused-by".to_string()) },
)]
fn metadata_relations_produce_no_edges(dep_type: DepType) {
    let graph = DepGraph::build(vec![
        issue_with_deps("gv-a", &[("gv-b", dep_type)]),
        issue("gv-b"),
    ]);
    assert_eq!(graph.edge_count(), 0);
    assert!(graph.warnings().is_empty());
}

#[test]
fn dangling_dependency_dropped_with_warning() {
    let graph = DepGraph::build(vec![issue_with_deps("gv-a", &[("gv-gone", DepType::Blocks)])]);
    assert_eq!(graph.edge_count(), 0);
    assert_eq!(graph.node_count(), 1);
    assert_eq!(
        graph.warnings(),
        &[BuildWarning::DanglingDependency {
            issue_id: "gv-a".to_string(),
            depends_on_id: "gv-gone".to_string(),
        }]
    );
}

#[test]
fn self_dependency_dropped_with_warning() {
    let graph = DepGraph::build(vec![issue_with_deps("gv-a", &[("gv-a", DepType::Blocks)])]);
    assert_eq!(graph.edge_count(), 0);
    assert_eq!(
        graph.warnings(),
        &[BuildWarning::SelfDependency {
            issue_id: "gv-a".to_string(),
        }]
    );
}

#[test]
fn duplicate_edges_merged_with_warning() {
    let graph = DepGraph::build(vec![
        issue_with_deps(
            "gv-a",
            &[("gv-b", DepType::Blocks), ("gv-b", DepType::Blocks)],
        ),
        issue("gv-b"),
    ]);
    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.warnings().len(), 1);
    assert!(matches!(
        graph.warnings()[0],
        BuildWarning::DuplicateEdge { .. }
    ));
}

#[test]
fn blocks_and_parent_child_between_same_pair_both_kept() {
    let graph = DepGraph::build(vec![
        issue_with_deps(
            "gv-a",
            &[("gv-b", DepType::Blocks), ("gv-b", DepType::ParentChild)],
        ),
        issue("gv-b"),
    ]);
    assert_eq!(graph.edge_count(), 2);
    assert!(graph.warnings().is_empty());
}

#[test]
fn duplicate_issue_id_keeps_first() {
    let mut second = issue("gv-a");
    second.title = "Impostor".to_string();
    let graph = DepGraph::build(vec![issue("gv-a"), second]);
    assert_eq!(graph.node_count(), 1);
    assert_eq!(graph.issue("gv-a").unwrap().title, "Issue gv-a");
    assert_eq!(
        graph.warnings(),
        &[BuildWarning::DuplicateIssue {
            issue_id: "gv-a".to_string(),
        }]
    );
}

#[test]
fn invalid_issue_skipped_with_warning() {
    let graph = DepGraph::build(vec![issue(""), issue("gv-a")]);
    assert_eq!(graph.node_count(), 1);
    assert!(matches!(
        graph.warnings()[0],
        BuildWarning::InvalidIssue { .. }
    ));
}

#[test]
fn cycles_are_kept() {
    let graph = DepGraph::build(vec![
        issue_with_deps("gv-a", &[("gv-b", DepType::Blocks)]),
        issue_with_deps("gv-b", &[("gv-a", DepType::Blocks)]),
    ]);
    assert_eq!(graph.edge_count(), 2);
    assert!(graph.warnings().is_empty());
}

#[test]
fn isolated_issues_become_nodes() {
    let graph = DepGraph::build(vec![issue("gv-island")]);
    assert_eq!(graph.node_count(), 1);
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn blocks_adjacency_skips_parent_child() {
    let graph = DepGraph::build(vec![
        issue_with_deps(
            "gv-a",
            &[("gv-b", DepType::Blocks), ("gv-c", DepType::ParentChild)],
        ),
        issue("gv-b"),
        issue("gv-c"),
    ]);
    assert_eq!(graph.blocks_out()[0], vec![1]);
    assert!(graph.blocks_in()[2].is_empty());
    assert_eq!(graph.blocks_in()[1], vec![0]);
}

#[test]
fn warning_messages_are_readable() {
    let warning = BuildWarning::DanglingDependency {
        issue_id: "gv-a".to_string(),
        depends_on_id: "gv-x".to_string(),
    };
    assert_eq!(
        warning.to_string(),
        "issue gv-a depends on unknown issue gv-x: edge dropped"
    );
}
