// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::graph::DepGraph;
use crate::issue::{DepType, Dependency, Issue};
use crate::metrics::Adjacency;

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
    assert!(core_numbers(&adjacency(&[], &[])).is_empty());
}

#[test]
fn isolated_nodes_have_core_zero() {
    assert_eq!(core_numbers(&adjacency(&["a", "b"], &[])), vec![0, 0]);
}

#[test]
fn chain_is_one_core() {
    let adj = adjacency(&["a", "b", "c"], &[("a", "b"), ("b", "c")]);
    assert_eq!(core_numbers(&adj), vec![1, 1, 1]);
}

#[test]
fn triangle_is_two_core() {
    let adj = adjacency(
        &["a", "b", "c"],
        &[("a", "b"), ("b", "c"), ("c", "a")],
    );
    assert_eq!(core_numbers(&adj), vec![2, 2, 2]);
}

#[test]
fn direction_is_ignored_in_the_projection() {
    // a -> b and b -> a collapse to a single undirected edge.
    let adj = adjacency(&["a", "b"], &[("a", "b"), ("b", "a")]);
    assert_eq!(core_numbers(&adj), vec![1, 1]);
}

#[test]
fn pendant_nodes_stay_in_lower_cores() {
    // Triangle a-b-c plus a pendant d hanging off a.
    let adj = adjacency(
        &["a", "b", "c", "d"],
        &[("a", "b"), ("b", "c"), ("c", "a"), ("d", "a")],
    );
    assert_eq!(core_numbers(&adj), vec![2, 2, 2, 1]);
}
