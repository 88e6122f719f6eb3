// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! High-level insight lists rolled up from the metric suite.

use serde::Serialize;

use crate::metrics::GraphStats;

/// Default number of entries per insight list.
pub const DEFAULT_INSIGHT_LIMIT: usize = 50;

/// A single entry in an insight list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct InsightItem {
    pub id: String,
    pub value: f64,
}

/// Actionable summary of the graph analysis.
///
/// Each list holds the top-N ids for one metric, sorted by value descending
/// with id ascending as the tie-break. The full per-node maps stay available
/// through `stats` for downstream tooling.
#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct Insights {
    /// Top betweenness: issues bridging otherwise separate clusters.
    pub bottlenecks: Vec<InsightItem>,
    /// Top critical-path score: issues under the longest dependent chains.
    pub keystones: Vec<InsightItem>,
    /// Top eigenvector centrality.
    pub influencers: Vec<InsightItem>,
    /// Top HITS hub scores: issues depending on many authorities.
    pub hubs: Vec<InsightItem>,
    /// Top HITS authority scores: issues many others depend on.
    pub authorities: Vec<InsightItem>,
    /// Fully isolated issues (no edges either way), lexicographic.
    pub orphans: Vec<String>,
    /// Canonicalized simple cycles.
    pub cycles: Vec<Vec<String>>,
    pub cluster_density: f64,
    /// Full per-node maps backing the lists above.
    pub stats: GraphStats,
}

impl Insights {
    /// Rolls raw stats into ranked lists, keeping at most `limit` per list.
    pub fn from_stats(stats: &GraphStats, limit: usize) -> Self {
        Insights {
            bottlenecks: top_items(&stats.betweenness, limit),
            keystones: top_items(&stats.critical_path, limit),
            influencers: top_items(&stats.eigenvector, limit),
            hubs: top_items(&stats.hubs, limit),
            authorities: top_items(&stats.authorities, limit),
            orphans: stats
                .in_degree
                .iter()
                .filter(|(id, deg)| **deg == 0 && stats.out_degree.get(id.as_str()) == Some(&0))
                .map(|(id, _)| id.clone())
                .collect(),
            cycles: stats.cycles.clone(),
            cluster_density: stats.density,
            stats: stats.clone(),
        }
    }
}

/// Top `limit` entries by value descending, id ascending on ties.
fn top_items(map: &std::collections::BTreeMap<String, f64>, limit: usize) -> Vec<InsightItem> {
    let mut items: Vec<InsightItem> = map
        .iter()
        .map(|(id, &value)| InsightItem {
            id: id.clone(),
            value,
        })
        .collect();
    // BTreeMap iteration is id-ascending; the stable sort preserves that
    // order among equal values.
    items.sort_by(|a, b| b.value.total_cmp(&a.value));
    items.truncate(limit);
    items
}

#[cfg(test)]
#[path = "insights_tests.rs"]
mod tests;
