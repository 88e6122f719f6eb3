// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! One-shot analysis façade.
//!
//! [`Analyzer`] builds the dependency graph once and exposes every engine
//! output over it. All entry points are side-effect-free; the metric suite is
//! computed on first use and cached, and the cache is safe to share across
//! threads. Repeated analyses of the same input produce identical results.

use std::sync::OnceLock;

use crate::cancel::CancelToken;
use crate::graph::{BuildWarning, DepGraph};
use crate::insights::Insights;
use crate::metrics::{self, GraphStats, MetricOptions};
use crate::plan::{self, ExecutionPlan, PlanWeights};
use crate::recommend::{self, PriorityRecommendation, QuantileBands};
use crate::issue::Issue;

/// Analysis engine over one immutable issue set.
#[derive(Debug)]
pub struct Analyzer {
    graph: DepGraph,
    options: MetricOptions,
    weights: PlanWeights,
    bands: QuantileBands,
    stats: OnceLock<GraphStats>,
}

impl Analyzer {
    /// Builds the graph with default tuning.
    pub fn new(issues: Vec<Issue>) -> Self {
        Analyzer::with_config(
            issues,
            MetricOptions::default(),
            PlanWeights::default(),
            QuantileBands::default(),
        )
    }

    /// Builds the graph with explicit tuning knobs.
    pub fn with_config(
        issues: Vec<Issue>,
        options: MetricOptions,
        weights: PlanWeights,
        bands: QuantileBands,
    ) -> Self {
        Analyzer {
            graph: DepGraph::build(issues),
            options,
            weights,
            bands,
            stats: OnceLock::new(),
        }
    }

    /// The underlying dependency graph.
    pub fn graph(&self) -> &DepGraph {
        &self.graph
    }

    /// Input hygiene warnings accumulated while building the graph.
    pub fn warnings(&self) -> &[BuildWarning] {
        self.graph.warnings()
    }

    /// The full metric suite, computed once and cached.
    pub fn stats(&self) -> &GraphStats {
        self.stats
            .get_or_init(|| metrics::compute(&self.graph, &self.options, &CancelToken::new()))
    }

    /// Runs the metric suite under a cancellation token, bypassing the cache.
    ///
    /// Kernels interrupted by the token return their current iterate with an
    /// `aborted` diagnostic.
    pub fn analyze_with(&self, cancel: &CancelToken) -> GraphStats {
        metrics::compute(&self.graph, &self.options, cancel)
    }

    /// Top-N insight lists over the cached stats.
    pub fn insights(&self, limit: usize) -> Insights {
        Insights::from_stats(self.stats(), limit)
    }

    /// Dependency-respecting execution plan.
    pub fn execution_plan(&self) -> ExecutionPlan {
        plan::build(&self.graph, self.stats(), &self.weights)
    }

    /// Priority adjustment recommendations.
    pub fn recommendations(&self) -> Vec<PriorityRecommendation> {
        recommend::recommend(&self.graph, self.stats(), &self.weights, &self.bands)
    }
}

#[cfg(test)]
#[path = "analyzer_tests.rs"]
mod tests;
