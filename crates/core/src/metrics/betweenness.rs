// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Betweenness centrality (Brandes).
//!
//! Exact up to the configured node limit; past it, BFS runs from a set of
//! evenly-spaced pivot sources and per-node sums are rescaled by |V|/pivots.
//! Pivot choice is deterministic over insertion order so repeated runs are
//! byte-identical without an RNG.

use std::collections::VecDeque;

use crate::cancel::CancelToken;

use super::{Adjacency, Diagnostic};

pub(crate) fn betweenness(
    adj: &Adjacency,
    exact_limit: usize,
    pivots: usize,
    cancel: &CancelToken,
) -> (Vec<f64>, Diagnostic) {
    let n = adj.n;
    let mut scores = vec![0.0; n];
    if n == 0 {
        return (scores, Diagnostic::complete());
    }

    let exact = n <= exact_limit;
    let sources: Vec<usize> = if exact {
        (0..n).collect()
    } else {
        let k = pivots.min(n);
        (0..k).map(|i| i * n / k).collect()
    };

    let mut completed = 0;
    let mut aborted = false;
    for &s in &sources {
        if cancel.is_cancelled() {
            aborted = true;
            break;
        }
        accumulate_from(adj, s, &mut scores);
        completed += 1;
    }

    // Rescale so sampled sums estimate the all-sources total.
    if completed > 0 && completed < n {
        let scale = n as f64 / completed as f64;
        for score in scores.iter_mut() {
            *score *= scale;
        }
    }

    let diagnostic = if aborted {
        Diagnostic::aborted(completed)
    } else if exact {
        Diagnostic::complete()
    } else {
        Diagnostic::approximate(format!("sampled {completed} of {n} sources"))
    };
    (scores, diagnostic)
}

/// Single-source shortest-path accumulation (Brandes' inner loop).
fn accumulate_from(adj: &Adjacency, s: usize, scores: &mut [f64]) {
    let n = adj.n;
    let mut stack: Vec<usize> = Vec::with_capacity(n);
    let mut predecessors: Vec<Vec<usize>> = vec![Vec::new(); n];
    let mut sigma = vec![0.0; n];
    let mut dist = vec![-1i64; n];
    let mut queue = VecDeque::new();

    sigma[s] = 1.0;
    dist[s] = 0;
    queue.push_back(s);

    while let Some(v) = queue.pop_front() {
        stack.push(v);
        for &w in &adj.out[v] {
            if dist[w] < 0 {
                dist[w] = dist[v] + 1;
                queue.push_back(w);
            }
            if dist[w] == dist[v] + 1 {
                sigma[w] += sigma[v];
                predecessors[w].push(v);
            }
        }
    }

    let mut delta = vec![0.0; n];
    while let Some(w) = stack.pop() {
        for &v in &predecessors[w] {
            delta[v] += sigma[v] / sigma[w] * (1.0 + delta[w]);
        }
        if w != s {
            scores[w] += delta[w];
        }
    }
}

#[cfg(test)]
#[path = "betweenness_tests.rs"]
mod tests;
