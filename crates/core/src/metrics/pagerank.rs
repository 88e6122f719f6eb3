// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! PageRank over the dependency direction.
//!
//! The random walk follows `u -> v` ("u depends on v"), so rank accumulates
//! on fundamental prerequisites: the more work transitively depends on an
//! issue, the higher its score. Dangling nodes (out-degree 0) redistribute
//! their mass uniformly, keeping the total at 1.

use crate::cancel::CancelToken;

use super::{Adjacency, Diagnostic};

/// Power iteration with uniform teleport and dangling redistribution.
///
/// Returns the converged (or last) rank vector in node-index order.
pub(crate) fn page_rank(
    adj: &Adjacency,
    damping: f64,
    tolerance: f64,
    max_iterations: usize,
    cancel: &CancelToken,
) -> (Vec<f64>, Diagnostic) {
    let n = adj.n;
    if n == 0 {
        return (Vec::new(), Diagnostic::complete());
    }

    let uniform = 1.0 / n as f64;
    let base = (1.0 - damping) * uniform;
    let mut rank = vec![uniform; n];

    for iteration in 1..=max_iterations {
        if cancel.is_cancelled() {
            return (rank, Diagnostic::aborted(iteration));
        }

        let mut next = vec![base; n];
        let mut dangling_mass = 0.0;
        for u in 0..n {
            if adj.out[u].is_empty() {
                dangling_mass += rank[u];
                continue;
            }
            let share = damping * rank[u] / adj.out[u].len() as f64;
            for &v in &adj.out[u] {
                next[v] += share;
            }
        }
        let dangling_share = damping * dangling_mass * uniform;
        for value in next.iter_mut() {
            *value += dangling_share;
        }

        let delta: f64 = next
            .iter()
            .zip(rank.iter())
            .map(|(a, b)| (a - b).abs())
            .sum();
        rank = next;
        if delta < tolerance {
            tracing::debug!(iteration, "pagerank converged");
            return (rank, Diagnostic::converged(iteration));
        }
    }

    (
        rank,
        Diagnostic::partial(max_iterations, "tolerance not reached"),
    )
}

#[cfg(test)]
#[path = "pagerank_tests.rs"]
mod tests;
