// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Metric kernels over the dependency graph.
//!
//! All kernels are read-only over an immutable adjacency derived from
//! [`DepGraph`] and run fanned out on scoped threads; assembly back into
//! [`GraphStats`] is single-threaded and ordered, so parallel execution never
//! changes output bytes. Non-convergence, approximation, cycle-skips, and
//! cancellation are reported per metric through [`Diagnostic`] records, never
//! as failures.

mod betweenness;
mod cycles;
mod hits;
mod kcore;
mod order;
mod pagerank;

use std::collections::{BTreeMap, BTreeSet};
use std::thread;

use serde::Serialize;

use crate::cancel::CancelToken;
use crate::graph::DepGraph;

/// Tuning knobs for the metric kernels.
///
/// Defaults are the contract values; changing them changes the outputs, so
/// they are surfaced here rather than buried in the kernels.
#[derive(Debug, Clone)]
pub struct MetricOptions {
    /// PageRank damping factor.
    pub damping: f64,
    /// Convergence tolerance for the iterative kernels.
    pub tolerance: f64,
    /// Iteration cap for the iterative kernels.
    pub max_iterations: usize,
    /// Betweenness is exact up to this many nodes.
    pub exact_betweenness_limit: usize,
    /// Pivot sources sampled above the exact limit.
    pub betweenness_pivots: usize,
    /// Cap on enumerated simple cycles.
    pub max_cycles: usize,
}

impl Default for MetricOptions {
    fn default() -> Self {
        MetricOptions {
            damping: 0.85,
            tolerance: 1e-6,
            max_iterations: 1000,
            exact_betweenness_limit: 500,
            betweenness_pivots: 100,
            max_cycles: 100,
        }
    }
}

/// Convergence state of a single metric run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(rename_all = "snake_case")]
pub enum MetricState {
    /// Reached tolerance (or ran to completion for non-iterative kernels).
    Converged,
    /// Hit an iteration or enumeration cap; values are the last iterate.
    Partial,
    /// Sampled approximation was used instead of the exact algorithm.
    Approximate,
    /// Not computed because the graph has cycles.
    SkippedCycles,
    /// Cancelled mid-run; values are the current iterate.
    Aborted,
}

/// Per-metric diagnostics attached to the result.
#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct Diagnostic {
    pub state: MetricState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iterations: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl Diagnostic {
    pub(crate) fn converged(iterations: usize) -> Self {
        Diagnostic {
            state: MetricState::Converged,
            iterations: Some(iterations),
            detail: None,
        }
    }

    pub(crate) fn complete() -> Self {
        Diagnostic {
            state: MetricState::Converged,
            iterations: None,
            detail: None,
        }
    }

    pub(crate) fn partial(iterations: usize, detail: impl Into<String>) -> Self {
        Diagnostic {
            state: MetricState::Partial,
            iterations: Some(iterations),
            detail: Some(detail.into()),
        }
    }

    pub(crate) fn approximate(detail: impl Into<String>) -> Self {
        Diagnostic {
            state: MetricState::Approximate,
            iterations: None,
            detail: Some(detail.into()),
        }
    }

    pub(crate) fn skipped_cycles() -> Self {
        Diagnostic {
            state: MetricState::SkippedCycles,
            iterations: None,
            detail: Some("graph contains cycles".to_string()),
        }
    }

    pub(crate) fn aborted(iterations: usize) -> Self {
        Diagnostic {
            state: MetricState::Aborted,
            iterations: Some(iterations),
            detail: Some("cancelled by caller".to_string()),
        }
    }
}

/// The full metric suite for one graph, keyed by issue id.
///
/// Every map is ordered so serialization is deterministic. Isolated or
/// unreachable nodes get well-defined defaults: 0 for centralities, 1 for
/// critical-path height on an acyclic graph.
#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct GraphStats {
    pub page_rank: BTreeMap<String, f64>,
    pub betweenness: BTreeMap<String, f64>,
    pub eigenvector: BTreeMap<String, f64>,
    pub hubs: BTreeMap<String, f64>,
    pub authorities: BTreeMap<String, f64>,
    /// Issues that depend on this one (blocking power).
    pub in_degree: BTreeMap<String, usize>,
    /// Issues this one is waiting on (fragility).
    pub out_degree: BTreeMap<String, usize>,
    /// Longest dependent chain above each node; zeroed when cyclic.
    pub critical_path: BTreeMap<String, f64>,
    /// K-core number on the undirected projection.
    pub core_number: BTreeMap<String, usize>,
    /// Simple cycles, each rotated so its smallest id comes first, sorted by
    /// (length, ids).
    pub cycles: Vec<Vec<String>>,
    /// Ids belonging to a strongly connected component of size >= 2.
    pub in_cycle: BTreeSet<String>,
    /// Dependents-first order; empty when the graph has cycles.
    pub topological_order: Vec<String>,
    /// Edge density |E| / (|V| * (|V|-1)).
    pub density: f64,
    pub diagnostics: BTreeMap<String, Diagnostic>,
}

/// Index adjacency shared by the kernels.
///
/// Neighbor lists are deduplicated (a `blocks` plus `parent-child` pair
/// contributes one walkable edge) and kept in first-appearance order. The
/// degree fields count every retained typed edge, matching the invariant that
/// in-degree plus out-degree equals edges incident to the node.
pub(crate) struct Adjacency {
    pub n: usize,
    pub out: Vec<Vec<usize>>,
    pub inc: Vec<Vec<usize>>,
    pub out_degree: Vec<usize>,
    pub in_degree: Vec<usize>,
}

impl Adjacency {
    pub(crate) fn from_graph(graph: &DepGraph) -> Self {
        let n = graph.node_count();
        let mut out = vec![Vec::new(); n];
        let mut inc = vec![Vec::new(); n];
        let mut out_degree = vec![0usize; n];
        let mut in_degree = vec![0usize; n];
        for (u, v, _) in graph.edges() {
            out_degree[u] += 1;
            in_degree[v] += 1;
            if !out[u].contains(&v) {
                out[u].push(v);
                inc[v].push(u);
            }
        }
        Adjacency {
            n,
            out,
            inc,
            out_degree,
            in_degree,
        }
    }
}

/// Runs the whole metric suite.
pub(crate) fn compute(graph: &DepGraph, opts: &MetricOptions, cancel: &CancelToken) -> GraphStats {
    let adj = Adjacency::from_graph(graph);
    let ids = graph.ids();

    let (pr, bw, eig, ht, cores, cyc) = thread::scope(|s| {
        let pr = s.spawn(|| {
            pagerank::page_rank(&adj, opts.damping, opts.tolerance, opts.max_iterations, cancel)
        });
        let bw = s.spawn(|| {
            betweenness::betweenness(
                &adj,
                opts.exact_betweenness_limit,
                opts.betweenness_pivots,
                cancel,
            )
        });
        let eig =
            s.spawn(|| hits::eigenvector(&adj, opts.tolerance, opts.max_iterations, cancel));
        let ht = s.spawn(|| hits::hits(&adj, opts.tolerance, opts.max_iterations, cancel));
        let cores = s.spawn(|| kcore::core_numbers(&adj));
        let cyc = s.spawn(|| cycles::simple_cycles(graph, opts.max_cycles, cancel));
        (
            pr.join().expect("pagerank kernel panicked"),
            bw.join().expect("betweenness kernel panicked"),
            eig.join().expect("eigenvector kernel panicked"),
            ht.join().expect("hits kernel panicked"),
            cores.join().expect("k-core kernel panicked"),
            cyc.join().expect("cycle kernel panicked"),
        )
    });

    let (pr_values, pr_diag) = pr;
    let (bw_values, bw_diag) = bw;
    let (eig_values, eig_diag) = eig;
    let (hub_values, auth_values, hits_diag) = ht;
    let (raw_cycles, in_cycle_flags, cycles_diag) = cyc;

    let topo = order::topological_order(graph);
    let (topo_ids, topo_diag, cp_values, cp_diag) = match topo {
        Some(order) => {
            let heights = order::critical_heights(&adj, &order);
            (
                order.iter().map(|&i| ids[i].to_string()).collect(),
                Diagnostic::complete(),
                heights,
                Diagnostic::complete(),
            )
        }
        None => (
            Vec::new(),
            Diagnostic::skipped_cycles(),
            vec![0.0; adj.n],
            Diagnostic::skipped_cycles(),
        ),
    };

    let mut cycles_canonical: Vec<Vec<String>> = raw_cycles
        .into_iter()
        .map(|cycle| canonicalize_cycle(&cycle, ids))
        .collect();
    cycles_canonical.sort_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)));

    let mut diagnostics = BTreeMap::new();
    diagnostics.insert("page_rank".to_string(), pr_diag);
    diagnostics.insert("betweenness".to_string(), bw_diag);
    diagnostics.insert("eigenvector".to_string(), eig_diag);
    diagnostics.insert("hits".to_string(), hits_diag);
    diagnostics.insert("cycles".to_string(), cycles_diag);
    diagnostics.insert("topological_order".to_string(), topo_diag);
    diagnostics.insert("critical_path".to_string(), cp_diag);

    GraphStats {
        page_rank: zip_f64(ids, &pr_values),
        betweenness: zip_f64(ids, &bw_values),
        eigenvector: zip_f64(ids, &eig_values),
        hubs: zip_f64(ids, &hub_values),
        authorities: zip_f64(ids, &auth_values),
        in_degree: zip_usize(ids, &adj.in_degree),
        out_degree: zip_usize(ids, &adj.out_degree),
        critical_path: zip_f64(ids, &cp_values),
        core_number: zip_usize(ids, &cores),
        cycles: cycles_canonical,
        in_cycle: in_cycle_flags
            .iter()
            .enumerate()
            .filter(|&(_, &f)| f)
            .map(|(i, _)| ids[i].to_string())
            .collect(),
        topological_order: topo_ids,
        density: order::density(adj.n, graph.edge_count()),
        diagnostics,
    }
}

/// Rotates a cycle so its lexicographically smallest id leads.
pub(crate) fn canonicalize_cycle(cycle: &[usize], ids: &[String]) -> Vec<String> {
    if cycle.is_empty() {
        return Vec::new();
    }
    let start = cycle
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| ids[**a].cmp(&ids[**b]))
        .map(|(pos, _)| pos)
        .unwrap_or(0);
    cycle[start..]
        .iter()
        .chain(cycle[..start].iter())
        .map(|&i| ids[i].to_string())
        .collect()
}

fn zip_f64(ids: &[String], values: &[f64]) -> BTreeMap<String, f64> {
    ids.iter()
        .cloned()
        .zip(values.iter().copied())
        .collect()
}

fn zip_usize(ids: &[String], values: &[usize]) -> BTreeMap<String, usize> {
    ids.iter()
        .cloned()
        .zip(values.iter().copied())
        .collect()
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
