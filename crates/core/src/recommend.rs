// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Priority recommendations.
//!
//! Every non-terminal issue gets an impact score (same blend as the planner,
//! normalized over the non-terminal population). Sorting by impact maps each
//! issue to an expected priority through fixed quantile bands; whenever the
//! expected priority differs from the current one by at least a full step, a
//! recommendation is emitted with a confidence derived from the gap size and
//! the impact score.

use std::fmt;

use serde::Serialize;

use crate::graph::DepGraph;
use crate::metrics::GraphStats;
use crate::plan::{min_max_normalize, priority_weight, unblock_sets, PlanWeights};

/// Quantile boundaries mapping the impact ranking onto priorities 0..=4.
///
/// Stored as cumulative fractions: the top `p0` of issues expect priority 0,
/// up to `p1` expect 1, and so on; the remainder expects 4. Defaults are the
/// contract values (5% / 20% / 50% / 80%).
#[derive(Debug, Clone)]
pub struct QuantileBands {
    pub p0: f64,
    pub p1: f64,
    pub p2: f64,
    pub p3: f64,
}

impl Default for QuantileBands {
    fn default() -> Self {
        QuantileBands {
            p0: 0.05,
            p1: 0.20,
            p2: 0.50,
            p3: 0.80,
        }
    }
}

impl QuantileBands {
    /// Expected priority for the issue at `rank` (0-based) of `total`.
    fn expected(&self, rank: usize, total: usize) -> u8 {
        let fraction = rank as f64 / total as f64;
        if fraction < self.p0 {
            0
        } else if fraction < self.p1 {
            1
        } else if fraction < self.p2 {
            2
        } else if fraction < self.p3 {
            3
        } else {
            4
        }
    }
}

/// Which way the priority should move. Lower numbers are higher priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Increase,
    Decrease,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Increase => write!(f, "increase"),
            Direction::Decrease => write!(f, "decrease"),
        }
    }
}

/// A single priority adjustment suggestion.
#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct PriorityRecommendation {
    pub id: String,
    pub current: u8,
    pub expected: u8,
    pub direction: Direction,
    /// Strength of the suggestion in [0,1].
    pub confidence: f64,
    /// Names the dominant metric behind the score.
    pub reasoning: String,
    pub impact: f64,
}

/// Generates recommendations sorted by (confidence desc, impact desc, id asc).
pub(crate) fn recommend(
    graph: &DepGraph,
    stats: &GraphStats,
    weights: &PlanWeights,
    bands: &QuantileBands,
) -> Vec<PriorityRecommendation> {
    let ids = graph.ids();
    let issues = graph.issues();
    let unblocks = unblock_sets(graph);

    let members: Vec<usize> = (0..graph.node_count())
        .filter(|&v| !issues[v].is_terminal())
        .collect();
    if members.is_empty() {
        return Vec::new();
    }

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

    struct Scored {
        node: usize,
        impact: f64,
        pr_term: f64,
        cp_term: f64,
        unblock_count: usize,
        unblock_term: f64,
    }

    let mut scored: Vec<Scored> = members
        .iter()
        .enumerate()
        .map(|(pos, &v)| {
            let unblock_share = if max_unblocks > 0 {
                unblocks[v].len() as f64 / max_unblocks as f64
            } else {
                0.0
            };
            let pr_term = weights.page_rank * pr_norm[pos];
            let cp_term = weights.critical_path * cp_norm[pos];
            let unblock_term = weights.unblocks * unblock_share;
            Scored {
                node: v,
                impact: pr_term
                    + cp_term
                    + unblock_term
                    + weights.priority * priority_weight(issues[v].priority),
                pr_term,
                cp_term,
                unblock_count: unblocks[v].len(),
                unblock_term,
            }
        })
        .collect();

    scored.sort_by(|a, b| {
        b.impact
            .total_cmp(&a.impact)
            .then_with(|| ids[a.node].cmp(&ids[b.node]))
    });

    let total = scored.len();
    let mut recommendations: Vec<PriorityRecommendation> = Vec::new();
    for (rank, s) in scored.iter().enumerate() {
        let current = issues[s.node].priority;
        let expected = bands.expected(rank, total);
        let gap = i16::from(expected).abs_diff(i16::from(current));
        if gap < 1 {
            continue;
        }
        let direction = if expected < current {
            Direction::Increase
        } else {
            Direction::Decrease
        };
        let confidence = (0.3 + 0.2 * f64::from(gap) + 0.2 * s.impact).clamp(0.0, 1.0);
        recommendations.push(PriorityRecommendation {
            id: ids[s.node].clone(),
            current,
            expected,
            direction,
            confidence,
            reasoning: reasoning(direction, s.pr_term, s.cp_term, s.unblock_term, s.unblock_count),
            impact: s.impact,
        });
    }

    recommendations.sort_by(|a, b| {
        b.confidence
            .total_cmp(&a.confidence)
            .then_with(|| b.impact.total_cmp(&a.impact))
            .then_with(|| a.id.cmp(&b.id))
    });
    recommendations
}

/// Human-readable explanation naming the dominant impact component.
fn reasoning(
    direction: Direction,
    pr_term: f64,
    cp_term: f64,
    unblock_term: f64,
    unblock_count: usize,
) -> String {
    if direction == Direction::Decrease {
        return "Low graph impact: few issues depend on this".to_string();
    }
    if pr_term >= cp_term && pr_term >= unblock_term {
        "High PageRank: many issues transitively depend on this".to_string()
    } else if cp_term >= unblock_term {
        "High critical path: holds up a long chain of dependent work".to_string()
    } else {
        format!("Closing this unblocks {unblock_count} issue(s) immediately")
    }
}

#[cfg(test)]
#[path = "recommend_tests.rs"]
mod tests;
