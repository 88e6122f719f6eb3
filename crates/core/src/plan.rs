// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Execution planning: what can be worked on now, and what finishing it
//! frees up.
//!
//! An issue is actionable when it is open or in progress and every `blocks`
//! target it depends on is terminal. Actionable issues are scored with a
//! weighted impact blend, then partitioned into tracks: weakly connected
//! components of the actionable items together with the open work blocked
//! behind them. Tracks are independent, so separate agents can take one each
//! without stepping on shared dependencies.

use std::collections::HashMap;

use serde::Serialize;

use crate::graph::DepGraph;
use crate::issue::Status;
use crate::metrics::GraphStats;

/// Weights for the impact blend. Defaults are the contract values; use a
/// custom instance to experiment, never edit the defaults in place.
#[derive(Debug, Clone)]
pub struct PlanWeights {
    pub page_rank: f64,
    pub critical_path: f64,
    pub unblocks: f64,
    pub priority: f64,
}

impl Default for PlanWeights {
    fn default() -> Self {
        PlanWeights {
            page_rank: 0.4,
            critical_path: 0.3,
            unblocks: 0.2,
            priority: 0.1,
        }
    }
}

/// One actionable issue in the plan.
#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct PlanItem {
    pub id: String,
    pub title: String,
    pub priority: u8,
    /// Serialized as the status string.
    #[cfg_attr(feature = "schemars", schemars(with = "String"))]
    pub status: Status,
    pub impact: f64,
    /// Open issues that become actionable when this one closes.
    pub unblocks: Vec<String>,
}

/// An independent work stream.
#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct Track {
    /// 1-based position after sorting by max impact.
    pub id: usize,
    pub items: Vec<PlanItem>,
    pub max_impact: f64,
}

/// Roll-up over the whole plan.
#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct PlanSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_item: Option<String>,
    pub top_impact: f64,
    pub total_actionable: usize,
    pub total_tracks: usize,
}

/// A dependency-respecting execution plan.
#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct ExecutionPlan {
    pub tracks: Vec<Track>,
    pub summary: PlanSummary,
}

/// Builds the plan from a graph and its metric suite.
pub(crate) fn build(graph: &DepGraph, stats: &GraphStats, weights: &PlanWeights) -> ExecutionPlan {
    let n = graph.node_count();
    let issues = graph.issues();
    let ids = graph.ids();
    let blocks_out = graph.blocks_out();

    let terminal: Vec<bool> = issues.iter().map(|i| i.is_terminal()).collect();
    let actionable: Vec<bool> = (0..n)
        .map(|v| {
            issues[v].status.is_workable() && blocks_out[v].iter().all(|&t| terminal[t])
        })
        .collect();

    let unblocks = unblock_sets(graph);

    // Impact components, normalized linearly to [0,1] over the actionable set.
    let members: Vec<usize> = (0..n).filter(|&v| actionable[v]).collect();
    let pr: Vec<f64> = members.iter().map(|&v| stats.page_rank[&ids[v]]).collect();
    let cp: Vec<f64> = members
        .iter()
        .map(|&v| stats.critical_path[&ids[v]])
        .collect();
    let pr_norm = min_max_normalize(&pr);
    let cp_norm = min_max_normalize(&cp);
    let max_unblocks = members
        .iter()
        .map(|&v| unblocks[v].len())
        .max()
        .unwrap_or(0);

    let mut impact = vec![0.0f64; n];
    for (pos, &v) in members.iter().enumerate() {
        let unblock_share = if max_unblocks > 0 {
            unblocks[v].len() as f64 / max_unblocks as f64
        } else {
            0.0
        };
        impact[v] = weights.page_rank * pr_norm[pos]
            + weights.critical_path * cp_norm[pos]
            + weights.unblocks * unblock_share
            + weights.priority * priority_weight(issues[v].priority);
    }

    // Tracks: weakly connected components over the actionable items plus
    // every edge pointing into one of them.
    let mut dsu = DisjointSets::new(n);
    for (u, v, _) in graph.edges() {
        if actionable[v] {
            dsu.union(u, v);
        }
    }

    let mut tracks: Vec<Track> = Vec::new();
    let mut root_track: HashMap<usize, usize> = HashMap::new();
    for &v in &members {
        let root = dsu.find(v);
        let slot = *root_track.entry(root).or_insert_with(|| {
            tracks.push(Track {
                id: 0,
                items: Vec::new(),
                max_impact: 0.0,
            });
            tracks.len() - 1
        });
        tracks[slot].items.push(PlanItem {
            id: ids[v].clone(),
            title: issues[v].title.clone(),
            priority: issues[v].priority,
            status: issues[v].status.clone(),
            impact: impact[v],
            unblocks: unblocks[v].iter().map(|&w| ids[w].clone()).collect(),
        });
    }

    for track in tracks.iter_mut() {
        track
            .items
            .sort_by(|a, b| b.impact.total_cmp(&a.impact).then_with(|| a.id.cmp(&b.id)));
        track.max_impact = track.items.first().map(|i| i.impact).unwrap_or(0.0);
    }
    tracks.sort_by(|a, b| {
        b.max_impact
            .total_cmp(&a.max_impact)
            .then_with(|| a.items[0].id.cmp(&b.items[0].id))
    });
    for (pos, track) in tracks.iter_mut().enumerate() {
        track.id = pos + 1;
    }

    let top = tracks.first().and_then(|t| t.items.first());
    let summary = PlanSummary {
        top_item: top.map(|i| i.id.clone()),
        top_impact: top.map(|i| i.impact).unwrap_or(0.0),
        total_actionable: members.len(),
        total_tracks: tracks.len(),
    };

    ExecutionPlan { tracks, summary }
}

/// For every node, the open issues whose only unresolved `blocks` dependency
/// is that node: closing it makes them actionable.
pub(crate) fn unblock_sets(graph: &DepGraph) -> Vec<Vec<usize>> {
    let n = graph.node_count();
    let issues = graph.issues();
    let blocks_out = graph.blocks_out();
    let blocks_in = graph.blocks_in();
    let terminal: Vec<bool> = issues.iter().map(|i| i.is_terminal()).collect();

    let mut result = vec![Vec::new(); n];
    for v in 0..n {
        for &w in &blocks_in[v] {
            if !issues[w].status.is_workable() {
                continue;
            }
            let open_targets: Vec<usize> = blocks_out[w]
                .iter()
                .copied()
                .filter(|&t| !terminal[t])
                .collect();
            if open_targets == [v] {
                result[v].push(w);
            }
        }
        result[v].sort_by(|&a, &b| graph.ids()[a].cmp(&graph.ids()[b]));
    }
    result
}

/// Linear map of priority 0..=4 onto weight 1.0..=0.2.
pub(crate) fn priority_weight(priority: u8) -> f64 {
    1.0 - 0.2 * f64::from(priority.min(4))
}

/// Linear normalization to [0,1]; a constant slice maps to all zeros.
pub(crate) fn min_max_normalize(values: &[f64]) -> Vec<f64> {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if values.is_empty() || (max - min).abs() < f64::EPSILON {
        return vec![0.0; values.len()];
    }
    values.iter().map(|v| (v - min) / (max - min)).collect()
}

/// Union-find with path compression.
struct DisjointSets {
    parent: Vec<usize>,
}

impl DisjointSets {
    fn new(n: usize) -> Self {
        DisjointSets {
            parent: (0..n).collect(),
        }
    }

    fn find(&mut self, v: usize) -> usize {
        if self.parent[v] != v {
            let root = self.find(self.parent[v]);
            self.parent[v] = root;
        }
        self.parent[v]
    }

    fn union(&mut self, a: usize, b: usize) {
        let ra = self.find(a);
        let rb = self.find(b);
        if ra != rb {
            // Smaller root wins so component identity is stable.
            let (lo, hi) = if ra < rb { (ra, rb) } else { (rb, ra) };
            self.parent[hi] = lo;
        }
    }
}

#[cfg(test)]
#[path = "plan_tests.rs"]
mod tests;
