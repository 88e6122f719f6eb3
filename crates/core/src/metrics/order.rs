// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! DAG-only metrics: topological order and critical-path heights.
//!
//! Both are defined only for acyclic graphs. With cycles present the order is
//! empty and heights are zeroed; callers learn why from the `skipped_cycles`
//! diagnostics. Density lives here too since it falls out of the same counts.

use petgraph::algo::toposort;

use crate::graph::DepGraph;

use super::Adjacency;

/// Dependents-first order: for every edge `u -> v`, u precedes v.
///
/// Returns None when the graph has a cycle.
pub(crate) fn topological_order(graph: &DepGraph) -> Option<Vec<usize>> {
    toposort(graph.petgraph(), None)
        .ok()
        .map(|order| order.into_iter().map(|ix| ix.index()).collect())
}

/// Critical-path height per node over a DAG.
///
/// `h(v) = 1 + max h(u)` over v's dependents `u -> v`; issues nothing depends
/// on have height 1. A high score marks an issue sitting at the bottom of a
/// long chain of dependent work. Walks the topological order forwards, so
/// every dependent is finished before the issues it depends on.
pub(crate) fn critical_heights(adj: &Adjacency, order: &[usize]) -> Vec<f64> {
    let mut heights = vec![1.0; adj.n];
    for &v in order {
        let mut tallest = 0.0f64;
        for &u in &adj.inc[v] {
            tallest = tallest.max(heights[u]);
        }
        if !adj.inc[v].is_empty() {
            heights[v] = 1.0 + tallest;
        }
    }
    heights
}

/// Edge density `|E| / (|V| * (|V|-1))`; 0 for graphs with fewer than 2 nodes.
pub(crate) fn density(nodes: usize, edges: usize) -> f64 {
    if nodes > 1 {
        edges as f64 / (nodes as f64 * (nodes as f64 - 1.0))
    } else {
        0.0
    }
}

#[cfg(test)]
#[path = "order_tests.rs"]
mod tests;
