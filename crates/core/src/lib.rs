// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! gv-core: Graph analysis engine for the gv issue-tracker viewer.
//!
//! This crate turns a list of issue records into a typed dependency graph,
//! a suite of centrality and DAG metrics, an execution plan of parallel work
//! tracks, priority recommendations, and semantic diffs between snapshots.
//! It is pure: same input, same output, no I/O.
//!
//! # Main components
//!
//! - [`Analyzer`] - one-shot façade over a single issue set
//! - [`DepGraph`] - the typed dependency graph and its build warnings
//! - [`GraphStats`] - per-node metric maps with convergence diagnostics
//! - [`compare`] - structured diff between two [`Snapshot`]s

pub mod analyzer;
pub mod cancel;
pub mod diff;
pub mod error;
pub mod graph;
pub mod insights;
pub mod issue;
pub mod metrics;
pub mod plan;
pub mod recommend;

pub use analyzer::Analyzer;
pub use cancel::CancelToken;
pub use diff::{compare, SnapshotDiff};
pub use error::{Error, Result};
pub use graph::{BuildWarning, DepGraph};
pub use insights::{Insights, DEFAULT_INSIGHT_LIMIT};
pub use issue::{DepType, Dependency, Issue, IssueType, Snapshot, Status};
pub use metrics::{GraphStats, MetricOptions};
pub use plan::{ExecutionPlan, PlanWeights};
pub use recommend::{PriorityRecommendation, QuantileBands};
