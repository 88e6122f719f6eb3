// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Dependency graph construction.
//!
//! [`DepGraph`] turns an ordered issue sequence into a directed petgraph with
//! a bidirectional map between issue ids and node indices. An edge `u -> v`
//! means "u depends on v": in-degree measures blocking power, out-degree
//! measures fragility. Only `blocks` and `parent-child` dependencies become
//! edges; every other relation type is metadata.
//!
//! Construction is lenient. Dirty input (dangling references, self-loops,
//! duplicate edges, duplicate ids) is repaired with a [`BuildWarning`] and
//! never fails the build. Cycles are kept as-is; detecting and reporting them
//! is the metric layer's job.

use std::collections::{HashMap, HashSet};
use std::fmt;

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;

use crate::issue::{DepType, Issue};

/// A non-fatal input hygiene problem found while building the graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildWarning {
    /// Record failed validation and was skipped entirely.
    InvalidIssue { reason: String },
    /// A later record reused an existing id; the first record wins.
    DuplicateIssue { issue_id: String },
    /// Dependency target does not exist in this snapshot; edge dropped.
    DanglingDependency { issue_id: String, depends_on_id: String },
    /// Issue depends on itself; edge dropped.
    SelfDependency { issue_id: String },
    /// Same (source, target, type) edge seen more than once; merged.
    DuplicateEdge {
        issue_id: String,
        depends_on_id: String,
        dep_type: String,
    },
}

impl fmt::Display for BuildWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildWarning::InvalidIssue { reason } => {
                write!(f, "skipped invalid issue: {reason}")
            }
            BuildWarning::DuplicateIssue { issue_id } => {
                write!(f, "duplicate issue id {issue_id}: keeping first occurrence")
            }
            BuildWarning::DanglingDependency {
                issue_id,
                depends_on_id,
            } => {
                write!(
                    f,
                    "issue {issue_id} depends on unknown issue {depends_on_id}: edge dropped"
                )
            }
            BuildWarning::SelfDependency { issue_id } => {
                write!(f, "issue {issue_id} depends on itself: edge dropped")
            }
            BuildWarning::DuplicateEdge {
                issue_id,
                depends_on_id,
                dep_type,
            } => {
                write!(
                    f,
                    "duplicate {dep_type} dependency {issue_id} -> {depends_on_id}: merged"
                )
            }
        }
    }
}

/// Directed dependency graph over a snapshot's issues.
///
/// Node insertion order is the order of first appearance in the input, and
/// node index `i` always corresponds to `ids()[i]` / `issues()[i]`. The graph
/// is immutable after [`build`](DepGraph::build).
#[derive(Debug)]
pub struct DepGraph {
    graph: DiGraph<usize, DepType>,
    ids: Vec<String>,
    index_of: HashMap<String, usize>,
    issues: Vec<Issue>,
    warnings: Vec<BuildWarning>,
}

impl DepGraph {
    /// Builds the graph from an ordered issue sequence.
    ///
    /// Nodes are created for every valid issue, including isolated ones.
    /// Edges come only from `blocks` and `parent-child` dependencies, with
    /// dangling targets, self-loops, and duplicates dropped under warnings.
    pub fn build(input: Vec<Issue>) -> Self {
        let mut graph = DiGraph::with_capacity(input.len(), input.len());
        let mut ids: Vec<String> = Vec::with_capacity(input.len());
        let mut index_of: HashMap<String, usize> = HashMap::with_capacity(input.len());
        let mut issues: Vec<Issue> = Vec::with_capacity(input.len());
        let mut warnings = Vec::new();

        for issue in input {
            if let Err(e) = issue.validate() {
                warnings.push(BuildWarning::InvalidIssue {
                    reason: e.to_string(),
                });
                continue;
            }
            if index_of.contains_key(&issue.id) {
                warnings.push(BuildWarning::DuplicateIssue {
                    issue_id: issue.id.clone(),
                });
                continue;
            }
            let idx = ids.len();
            graph.add_node(idx);
            index_of.insert(issue.id.clone(), idx);
            ids.push(issue.id.clone());
            issues.push(issue);
        }

        let mut seen: HashSet<(usize, usize, DepType)> = HashSet::new();
        for u in 0..issues.len() {
            for d in 0..issues[u].dependencies.len() {
                let dep = &issues[u].dependencies[d];
                if !dep.dep_type.is_graph_edge() {
                    continue;
                }
                let dep_type = dep.dep_type.clone();
                let target = dep.depends_on_id.clone();
                let Some(&v) = index_of.get(&target) else {
                    warnings.push(BuildWarning::DanglingDependency {
                        issue_id: ids[u].clone(),
                        depends_on_id: target,
                    });
                    continue;
                };
                if u == v {
                    warnings.push(BuildWarning::SelfDependency {
                        issue_id: ids[u].clone(),
                    });
                    continue;
                }
                if !seen.insert((u, v, dep_type.clone())) {
                    warnings.push(BuildWarning::DuplicateEdge {
                        issue_id: ids[u].clone(),
                        depends_on_id: ids[v].clone(),
                        dep_type: dep_type.to_string(),
                    });
                    continue;
                }
                graph.add_edge(NodeIndex::new(u), NodeIndex::new(v), dep_type);
            }
        }

        tracing::debug!(
            nodes = ids.len(),
            edges = graph.edge_count(),
            warnings = warnings.len(),
            "dependency graph built"
        );

        DepGraph {
            graph,
            ids,
            index_of,
            issues,
            warnings,
        }
    }

    /// Number of nodes (valid issues).
    pub fn node_count(&self) -> usize {
        self.ids.len()
    }

    /// Number of retained edges.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Issue ids in insertion order; position is the node index.
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    /// Issues in insertion order, parallel to [`ids`](DepGraph::ids).
    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    /// Node index for an issue id, if present.
    pub fn index(&self, id: &str) -> Option<usize> {
        self.index_of.get(id).copied()
    }

    /// Issue record by id, if present.
    pub fn issue(&self, id: &str) -> Option<&Issue> {
        self.index(id).map(|i| &self.issues[i])
    }

    /// Warnings accumulated during the build.
    pub fn warnings(&self) -> &[BuildWarning] {
        &self.warnings
    }

    /// All retained edges as (source, target, type) triples in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, &DepType)> + '_ {
        self.graph
            .edge_references()
            .map(|e| (e.source().index(), e.target().index(), e.weight()))
    }

    /// The underlying petgraph, for algorithm kernels.
    pub(crate) fn petgraph(&self) -> &DiGraph<usize, DepType> {
        &self.graph
    }

    /// Outgoing `blocks` targets per node, deduplicated, in edge order.
    pub(crate) fn blocks_out(&self) -> Vec<Vec<usize>> {
        let mut out = vec![Vec::new(); self.node_count()];
        for (u, v, t) in self.edges() {
            if t.is_blocking() && !out[u].contains(&v) {
                out[u].push(v);
            }
        }
        out
    }

    /// Incoming `blocks` sources per node, deduplicated, in edge order.
    pub(crate) fn blocks_in(&self) -> Vec<Vec<usize>> {
        let mut inc = vec![Vec::new(); self.node_count()];
        for (u, v, t) in self.edges() {
            if t.is_blocking() && !inc[v].contains(&u) {
                inc[v].push(u);
            }
        }
        inc
    }
}

#[cfg(test)]
#[path = "graph_tests.rs"]
mod tests;
