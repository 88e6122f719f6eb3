// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::cancel::CancelToken;
use crate::graph::DepGraph;
use crate::issue::{DepType, Dependency, Issue};
use crate::metrics::{Adjacency, MetricState};

fn adjacency(nodes: &[&str], edges: &[(&str, &str)]) -> Adjacency {
    let issues: Vec<Issue> = nodes
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
        .collect();
    Adjacency::from_graph(&DepGraph::build(issues))
}

#[test]
fn empty_graph() {
    let (scores, diag) = betweenness(&adjacency(&[], &[]), 500, 100, &CancelToken::new());
    assert!(scores.is_empty());
    assert_eq!(diag.state, MetricState::Converged);
}

#[test]
fn chain_middle_is_the_bridge() {
    let adj = adjacency(&["a", "b", "c"], &[("a", "b"), ("b", "c")]);
    let (scores, diag) = betweenness(&adj, 500, 100, &CancelToken::new());
    assert_eq!(diag.state, MetricState::Converged);
    // Only a -> b -> c passes through b.
    assert_eq!(scores, vec![0.0, 1.0, 0.0]);
}

#[test]
fn longer_chain_scores_grow_toward_the_middle() {
    let adj = adjacency(
        &["a", "b", "c", "d", "e"],
        &[("a", "b"), ("b", "c"), ("c", "d"), ("d", "e")],
    );
    let (scores, _) = betweenness(&adj, 500, 100, &CancelToken::new());
    assert_eq!(scores[0], 0.0);
    assert_eq!(scores[4], 0.0);
    assert!(scores[2] > scores[1]);
    assert!(scores[2] > scores[3]);
}

#[test]
fn diamond_middles_share_paths() {
    let adj = adjacency(
        &["a", "b", "c", "d"],
        &[("a", "b"), ("a", "c"), ("b", "d"), ("c", "d")],
    );
    let (scores, _) = betweenness(&adj, 500, 100, &CancelToken::new());
    // Two shortest a -> d paths, one through each middle node.
    assert!((scores[1] - 0.5).abs() < 1e-9);
    assert!((scores[2] - 0.5).abs() < 1e-9);
    assert_eq!(scores[0], 0.0);
    assert_eq!(scores[3], 0.0);
}

#[test]
fn small_graphs_are_exact() {
    let adj = adjacency(&["a", "b"], &[("a", "b")]);
    let (_, diag) = betweenness(&adj, 500, 100, &CancelToken::new());
    assert_eq!(diag.state, MetricState::Converged);
}

#[test]
fn sampling_kicks_in_above_the_exact_limit() {
    let ids: Vec<String> = (0..30).map(|i| format!("gv-{i:03}")).collect();
    let id_refs: Vec<&str> = ids.iter().map(String::as_str).collect();
    let edges: Vec<(&str, &str)> = id_refs.windows(2).map(|w| (w[0], w[1])).collect();
    let adj = adjacency(&id_refs, &edges);
    let (scores, diag) = betweenness(&adj, 10, 5, &CancelToken::new());
    assert_eq!(diag.state, MetricState::Approximate);
    // Endpoints of the chain still score lowest under sampling.
    assert_eq!(scores[0], 0.0);
    assert!(scores[15] > 0.0);
}

#[test]
fn cancelled_between_pivots_reports_aborted() {
    let cancel = CancelToken::new();
    cancel.cancel();
    let adj = adjacency(&["a", "b", "c"], &[("a", "b"), ("b", "c")]);
    let (_, diag) = betweenness(&adj, 500, 100, &cancel);
    assert_eq!(diag.state, MetricState::Aborted);
}
