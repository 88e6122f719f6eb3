// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Snapshot comparison.
//!
//! Computes a structured, deterministic diff between two issue snapshots:
//! membership changes, lifecycle transitions, tracked-field modifications,
//! cycle deltas, and aggregate metric movement, topped with a coarse health
//! trend. `diff(A, A)` is empty apart from zeroed deltas and a "stable"
//! trend.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::Serialize;

use crate::graph::DepGraph;
use crate::issue::{Issue, Snapshot};
use crate::metrics::{self, MetricOptions};
use crate::cancel::CancelToken;

/// Compact reference to an issue on one side of the diff.
#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct DiffIssue {
    pub id: String,
    pub title: String,
    pub priority: u8,
    pub status: String,
}

impl DiffIssue {
    fn from_issue(issue: &Issue) -> Self {
        DiffIssue {
            id: issue.id.clone(),
            title: issue.title.clone(),
            priority: issue.priority,
            status: issue.status.to_string(),
        }
    }
}

/// One tracked-field change inside a modified issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct FieldChange {
    pub field: String,
    pub old_value: String,
    pub new_value: String,
}

/// An issue present in both snapshots with at least one tracked change.
#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct ModifiedIssue {
    pub id: String,
    pub title: String,
    /// Changes sorted alphabetically by field name.
    pub changes: Vec<FieldChange>,
}

/// Signed movement of the headline totals.
#[derive(Debug, Clone, Default, Serialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct MetricDeltas {
    pub total_issues: i64,
    pub open_issues: i64,
    pub blocked_issues: i64,
    pub cycle_count: i64,
    pub density: f64,
}

/// Coarse direction of project health between the snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum HealthTrend {
    Improving,
    Stable,
    Degrading,
}

impl fmt::Display for HealthTrend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HealthTrend::Improving => write!(f, "improving"),
            HealthTrend::Stable => write!(f, "stable"),
            HealthTrend::Degrading => write!(f, "degrading"),
        }
    }
}

/// Count roll-up for the diff.
#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct DiffSummary {
    pub issues_added: usize,
    pub issues_removed: usize,
    pub issues_closed: usize,
    pub issues_reopened: usize,
    pub issues_modified: usize,
    pub cycles_introduced: usize,
    pub cycles_resolved: usize,
    pub health_trend: HealthTrend,
}

/// Structured diff between two snapshots.
#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct SnapshotDiff {
    pub from_revision: String,
    pub to_revision: String,
    pub new_issues: Vec<DiffIssue>,
    pub removed_issues: Vec<DiffIssue>,
    pub closed_issues: Vec<DiffIssue>,
    pub reopened_issues: Vec<DiffIssue>,
    pub modified_issues: Vec<ModifiedIssue>,
    pub new_cycles: Vec<Vec<String>>,
    pub resolved_cycles: Vec<Vec<String>>,
    pub metric_deltas: MetricDeltas,
    pub summary: DiffSummary,
}

/// Compares two snapshots.
///
/// Each side is analyzed independently (cycles, density, blocked counts), so
/// the result depends only on the two issue sets.
pub fn compare(from: &Snapshot, to: &Snapshot) -> SnapshotDiff {
    let from_graph = DepGraph::build(from.issues.clone());
    let to_graph = DepGraph::build(to.issues.clone());
    let options = MetricOptions::default();
    let cancel = CancelToken::new();
    let from_stats = metrics::compute(&from_graph, &options, &cancel);
    let to_stats = metrics::compute(&to_graph, &options, &cancel);

    let from_map: BTreeMap<&str, &Issue> = from_graph
        .issues()
        .iter()
        .map(|i| (i.id.as_str(), i))
        .collect();
    let to_map: BTreeMap<&str, &Issue> = to_graph
        .issues()
        .iter()
        .map(|i| (i.id.as_str(), i))
        .collect();

    let mut new_issues = Vec::new();
    let mut removed_issues = Vec::new();
    let mut closed_issues = Vec::new();
    let mut reopened_issues = Vec::new();
    let mut modified_issues = Vec::new();

    for (id, issue) in &to_map {
        if !from_map.contains_key(id) {
            new_issues.push(DiffIssue::from_issue(issue));
        }
    }
    for (id, issue) in &from_map {
        if !to_map.contains_key(id) {
            removed_issues.push(DiffIssue::from_issue(issue));
        }
    }

    for (id, before) in &from_map {
        let Some(after) = to_map.get(id) else {
            continue;
        };
        let was_terminal = before.is_terminal();
        let is_terminal = after.is_terminal();
        if !was_terminal && is_terminal {
            closed_issues.push(DiffIssue::from_issue(after));
            continue;
        }
        if was_terminal && !is_terminal {
            reopened_issues.push(DiffIssue::from_issue(after));
            continue;
        }
        let changes = field_changes(before, after);
        if !changes.is_empty() {
            modified_issues.push(ModifiedIssue {
                id: (*id).to_string(),
                title: after.title.clone(),
                changes,
            });
        }
    }

    let from_cycles: BTreeSet<Vec<String>> = from_stats.cycles.iter().cloned().collect();
    let to_cycles: BTreeSet<Vec<String>> = to_stats.cycles.iter().cloned().collect();
    let new_cycles: Vec<Vec<String>> = to_cycles.difference(&from_cycles).cloned().collect();
    let resolved_cycles: Vec<Vec<String>> = from_cycles.difference(&to_cycles).cloned().collect();

    let metric_deltas = MetricDeltas {
        total_issues: to_graph.node_count() as i64 - from_graph.node_count() as i64,
        open_issues: count_open(&to_graph) as i64 - count_open(&from_graph) as i64,
        blocked_issues: count_blocked(&to_graph) as i64 - count_blocked(&from_graph) as i64,
        cycle_count: to_stats.cycles.len() as i64 - from_stats.cycles.len() as i64,
        density: to_stats.density - from_stats.density,
    };

    let added = new_issues.len() as i64;
    let closed = closed_issues.len() as i64;
    let introduced = new_cycles.len() as i64;
    let resolved = resolved_cycles.len() as i64;
    // Degrading on any backwards movement; improving only with real forward
    // progress and none backwards; no movement at all is stable.
    let health_trend = if added - closed > 0 || introduced - resolved > 0 {
        HealthTrend::Degrading
    } else if closed + resolved > 0 {
        HealthTrend::Improving
    } else {
        HealthTrend::Stable
    };

    let summary = DiffSummary {
        issues_added: new_issues.len(),
        issues_removed: removed_issues.len(),
        issues_closed: closed_issues.len(),
        issues_reopened: reopened_issues.len(),
        issues_modified: modified_issues.len(),
        cycles_introduced: new_cycles.len(),
        cycles_resolved: resolved_cycles.len(),
        health_trend,
    };

    SnapshotDiff {
        from_revision: from.revision.clone(),
        to_revision: to.revision.clone(),
        new_issues,
        removed_issues,
        closed_issues,
        reopened_issues,
        modified_issues,
        new_cycles,
        resolved_cycles,
        metric_deltas,
        summary,
    }
}

/// Issues in non-terminal states.
fn count_open(graph: &DepGraph) -> usize {
    graph.issues().iter().filter(|i| !i.is_terminal()).count()
}

/// Issues with at least one non-terminal `blocks` target.
fn count_blocked(graph: &DepGraph) -> usize {
    let issues = graph.issues();
    let blocks_out = graph.blocks_out();
    (0..graph.node_count())
        .filter(|&v| {
            !issues[v].is_terminal() && blocks_out[v].iter().any(|&t| !issues[t].is_terminal())
        })
        .count()
}

/// Tracked-field changes between two versions of the same issue, sorted
/// alphabetically by field name.
fn field_changes(before: &Issue, after: &Issue) -> Vec<FieldChange> {
    let mut changes = Vec::new();
    let mut push = |field: &str, old: String, new: String| {
        if old != new {
            changes.push(FieldChange {
                field: field.to_string(),
                old_value: old,
                new_value: new,
            });
        }
    };

    push("assignee", before.assignee.clone(), after.assignee.clone());
    push(
        "dependencies",
        render_dependencies(before),
        render_dependencies(after),
    );
    push("labels", before.labels.join(","), after.labels.join(","));
    push(
        "priority",
        before.priority.to_string(),
        after.priority.to_string(),
    );
    push(
        "status",
        before.status.to_string(),
        after.status.to_string(),
    );
    push("title", before.title.clone(), after.title.clone());
    push(
        "type",
        before.issue_type.to_string(),
        after.issue_type.to_string(),
    );

    changes
}

/// Stable string form of an issue's dependency list.
fn render_dependencies(issue: &Issue) -> String {
    let mut entries: Vec<String> = issue
        .dependencies
        .iter()
        .map(|d| format!("{}:{}", d.depends_on_id, d.dep_type))
        .collect();
    entries.sort();
    entries.dedup();
    entries.join(",")
}

#[cfg(test)]
#[path = "diff_tests.rs"]
mod tests;
