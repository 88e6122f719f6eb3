// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! K-core decomposition on the undirected projection.
//!
//! Peels minimum-degree vertices in (degree, index) order; the core number of
//! a node is the largest k such that it survives into a subgraph where every
//! node has at least k undirected neighbors.

use std::collections::BTreeSet;

use super::Adjacency;

pub(crate) fn core_numbers(adj: &Adjacency) -> Vec<usize> {
    let n = adj.n;
    let mut neighbors: Vec<BTreeSet<usize>> = vec![BTreeSet::new(); n];
    for u in 0..n {
        for &v in &adj.out[u] {
            neighbors[u].insert(v);
            neighbors[v].insert(u);
        }
    }

    let mut degree: Vec<usize> = neighbors.iter().map(BTreeSet::len).collect();
    let mut remaining: BTreeSet<(usize, usize)> =
        (0..n).map(|v| (degree[v], v)).collect();
    let mut core = vec![0usize; n];
    let mut current = 0usize;

    while let Some(&(d, v)) = remaining.iter().next() {
        remaining.remove(&(d, v));
        current = current.max(d);
        core[v] = current;
        for &w in &neighbors[v] {
            if remaining.remove(&(degree[w], w)) {
                degree[w] -= 1;
                remaining.insert((degree[w], w));
            }
        }
    }

    core
}

#[cfg(test)]
#[path = "kcore_tests.rs"]
mod tests;
