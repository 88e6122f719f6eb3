// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Eigenvector centrality and HITS.
//!
//! Both are power iterations with L2 normalization after every step.
//! Eigenvector centrality accumulates along the edge direction, so score
//! flows onto depended-upon nodes. HITS scores the two roles separately:
//! authorities are depended-upon issues, hubs are issues that depend on many
//! authorities.

use crate::cancel::CancelToken;

use super::{Adjacency, Diagnostic};

/// Eigenvector centrality via shifted power iteration (`x + A^T x`).
///
/// The shift keeps the iteration alive on acyclic graphs, where the plain
/// adjacency power collapses to zero before converging.
pub(crate) fn eigenvector(
    adj: &Adjacency,
    tolerance: f64,
    max_iterations: usize,
    cancel: &CancelToken,
) -> (Vec<f64>, Diagnostic) {
    let n = adj.n;
    if n == 0 {
        return (Vec::new(), Diagnostic::complete());
    }

    let mut x = vec![1.0 / (n as f64).sqrt(); n];
    for iteration in 1..=max_iterations {
        if cancel.is_cancelled() {
            return (x, Diagnostic::aborted(iteration));
        }

        let mut next = x.clone();
        for u in 0..n {
            for &v in &adj.out[u] {
                next[v] += x[u];
            }
        }
        if !normalize(&mut next) {
            return (vec![0.0; n], Diagnostic::converged(iteration));
        }

        let delta = max_delta(&next, &x);
        x = next;
        if delta < tolerance {
            tracing::debug!(iteration, "eigenvector converged");
            return (x, Diagnostic::converged(iteration));
        }
    }

    (
        x,
        Diagnostic::partial(max_iterations, "tolerance not reached"),
    )
}

/// HITS hubs and authorities via mutual recursion.
///
/// Returns `(hubs, authorities)` in node-index order.
pub(crate) fn hits(
    adj: &Adjacency,
    tolerance: f64,
    max_iterations: usize,
    cancel: &CancelToken,
) -> (Vec<f64>, Vec<f64>, Diagnostic) {
    let n = adj.n;
    if n == 0 {
        return (Vec::new(), Vec::new(), Diagnostic::complete());
    }

    let start = 1.0 / (n as f64).sqrt();
    let mut hubs = vec![start; n];
    let mut authorities = vec![start; n];

    for iteration in 1..=max_iterations {
        if cancel.is_cancelled() {
            return (hubs, authorities, Diagnostic::aborted(iteration));
        }

        let mut next_auth = vec![0.0; n];
        for u in 0..n {
            for &v in &adj.out[u] {
                next_auth[v] += hubs[u];
            }
        }
        let live_auth = normalize(&mut next_auth);

        let mut next_hubs = vec![0.0; n];
        for u in 0..n {
            for &v in &adj.out[u] {
                next_hubs[u] += next_auth[v];
            }
        }
        let live_hubs = normalize(&mut next_hubs);

        if !live_auth || !live_hubs {
            // No edges at all: both roles are uniformly absent.
            return (vec![0.0; n], vec![0.0; n], Diagnostic::converged(iteration));
        }

        let delta = max_delta(&next_hubs, &hubs).max(max_delta(&next_auth, &authorities));
        hubs = next_hubs;
        authorities = next_auth;
        if delta < tolerance {
            tracing::debug!(iteration, "hits converged");
            return (hubs, authorities, Diagnostic::converged(iteration));
        }
    }

    (
        hubs,
        authorities,
        Diagnostic::partial(max_iterations, "tolerance not reached"),
    )
}

/// L2-normalizes in place. Returns false if the vector is (near) zero.
fn normalize(values: &mut [f64]) -> bool {
    let norm = values.iter().map(|v| v * v).sum::<f64>().sqrt();
    if norm <= f64::EPSILON {
        return false;
    }
    for value in values.iter_mut() {
        *value /= norm;
    }
    true
}

fn max_delta(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y).abs())
        .fold(0.0, f64::max)
}

#[cfg(test)]
#[path = "hits_tests.rs"]
mod tests;
