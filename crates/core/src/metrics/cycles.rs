// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Simple cycle enumeration.
//!
//! Tarjan's SCC decomposition narrows the search, then Johnson's circuit
//! algorithm enumerates simple cycles inside each component of size >= 2.
//! Enumeration is capped globally to bound cost on pathological graphs; the
//! cap is reported as a `partial` diagnostic, never an error. Self-loops are
//! removed at build time, so cycle membership is exactly "SCC size >= 2".

use std::collections::{HashMap, HashSet};

use petgraph::algo::tarjan_scc;

use crate::cancel::CancelToken;
use crate::graph::DepGraph;

use super::Diagnostic;

/// Returns `(cycles, in_cycle, diagnostic)`.
///
/// Cycles are index paths without the closing repeat; `in_cycle[v]` is true
/// iff v belongs to an SCC of size >= 2. Output order is deterministic:
/// components by smallest member index, start nodes ascending within each.
pub(crate) fn simple_cycles(
    graph: &DepGraph,
    max_cycles: usize,
    cancel: &CancelToken,
) -> (Vec<Vec<usize>>, Vec<bool>, Diagnostic) {
    let n = graph.node_count();
    let mut in_cycle = vec![false; n];

    let mut components: Vec<Vec<usize>> = tarjan_scc(graph.petgraph())
        .into_iter()
        .filter(|scc| scc.len() >= 2)
        .map(|scc| {
            let mut nodes: Vec<usize> = scc.into_iter().map(|ix| ix.index()).collect();
            nodes.sort_unstable();
            nodes
        })
        .collect();
    components.sort_by_key(|nodes| nodes[0]);

    for component in &components {
        for &v in component {
            in_cycle[v] = true;
        }
    }

    let mut search = CircuitSearch {
        cycles: Vec::new(),
        max_cycles,
        capped: false,
    };

    let mut aborted = false;
    for component in &components {
        if cancel.is_cancelled() {
            aborted = true;
            break;
        }
        if search.capped {
            break;
        }
        search.enumerate_component(graph, component);
    }

    let diagnostic = if aborted {
        Diagnostic::aborted(search.cycles.len())
    } else if search.capped {
        Diagnostic::partial(
            search.cycles.len(),
            format!("cycle enumeration capped at {max_cycles}"),
        )
    } else {
        Diagnostic::complete()
    };
    (search.cycles, in_cycle, diagnostic)
}

/// Johnson's circuit search state for one run.
struct CircuitSearch {
    cycles: Vec<Vec<usize>>,
    max_cycles: usize,
    capped: bool,
}

impl CircuitSearch {
    /// Enumerates circuits of one SCC, Johnson-style: for each start node in
    /// ascending order, search the subgraph restricted to nodes >= start.
    fn enumerate_component(&mut self, graph: &DepGraph, component: &[usize]) {
        let members: HashSet<usize> = component.iter().copied().collect();
        // Local adjacency restricted to the component, deduplicated, sorted
        // for stable enumeration order.
        let mut adjacency: Vec<(usize, Vec<usize>)> = component
            .iter()
            .map(|&u| (u, Vec::new()))
            .collect();
        let position: HashMap<usize, usize> = component
            .iter()
            .enumerate()
            .map(|(pos, &u)| (u, pos))
            .collect();
        for (u, v, _) in graph.edges() {
            if members.contains(&u) && members.contains(&v) {
                let list = &mut adjacency[position[&u]].1;
                if !list.contains(&v) {
                    list.push(v);
                }
            }
        }
        for (_, list) in adjacency.iter_mut() {
            list.sort_unstable();
        }

        for &start in component {
            if self.capped {
                return;
            }
            let mut blocked: HashSet<usize> = HashSet::new();
            let mut block_map: HashMap<usize, Vec<usize>> = HashMap::new();
            let mut path: Vec<usize> = Vec::new();
            self.circuit(
                start,
                start,
                &adjacency,
                &position,
                &mut blocked,
                &mut block_map,
                &mut path,
            );
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn circuit(
        &mut self,
        v: usize,
        start: usize,
        adjacency: &[(usize, Vec<usize>)],
        position: &HashMap<usize, usize>,
        blocked: &mut HashSet<usize>,
        block_map: &mut HashMap<usize, Vec<usize>>,
        path: &mut Vec<usize>,
    ) -> bool {
        let mut found = false;
        path.push(v);
        blocked.insert(v);

        let successors = adjacency[position[&v]].1.clone();
        for w in successors {
            // Nodes below the current start were exhausted in earlier passes.
            if w < start || self.capped {
                continue;
            }
            if w == start {
                self.cycles.push(path.clone());
                found = true;
                if self.cycles.len() >= self.max_cycles {
                    self.capped = true;
                }
            } else if !blocked.contains(&w) {
                if self.circuit(w, start, adjacency, position, blocked, block_map, path) {
                    found = true;
                }
            }
        }

        if found {
            unblock(v, blocked, block_map);
        } else {
            for w in adjacency[position[&v]].1.iter().copied() {
                if w >= start {
                    block_map.entry(w).or_default().push(v);
                }
            }
        }

        path.pop();
        found
    }
}

/// Johnson's recursive unblock.
fn unblock(
    v: usize,
    blocked: &mut HashSet<usize>,
    block_map: &mut HashMap<usize, Vec<usize>>,
) {
    blocked.remove(&v);
    if let Some(waiters) = block_map.remove(&v) {
        for w in waiters {
            if blocked.contains(&w) {
                unblock(w, blocked, block_map);
            }
        }
    }
}

#[cfg(test)]
#[path = "cycles_tests.rs"]
mod tests;
