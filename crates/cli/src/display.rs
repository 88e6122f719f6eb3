// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Human-readable rendering helpers.
//!
//! Pure formatting: every function returns strings (or pushes lines), so the
//! command layer decides where output goes and tests can assert on content.

use gv_core::insights::{InsightItem, Insights};
use gv_core::diff::{HealthTrend, SnapshotDiff};
use gv_core::plan::ExecutionPlan;
use gv_core::recommend::PriorityRecommendation;
use gv_core::Issue;

/// Maximum rows rendered per insight list in text mode.
const LIST_ROWS: usize = 10;

/// One-line issue summary: `P2 open     gv-a1b2  Fix the importer`.
pub fn format_issue_line(issue: &Issue) -> String {
    format!(
        "P{} {:<12} {:<12} {}",
        issue.priority,
        issue.status.as_str(),
        issue.id,
        issue.title
    )
}

/// Renders a cycle as `a -> b -> c -> a`.
pub fn format_cycle(cycle: &[String]) -> String {
    if cycle.is_empty() {
        return "(empty)".to_string();
    }
    let mut out = cycle.join(" -> ");
    out.push_str(" -> ");
    out.push_str(&cycle[0]);
    out
}

fn push_list(lines: &mut Vec<String>, heading: &str, items: &[InsightItem]) {
    if items.is_empty() {
        return;
    }
    lines.push(format!("{heading}:"));
    for item in items.iter().take(LIST_ROWS) {
        lines.push(format!("  {:<16} {:.4}", item.id, item.value));
    }
    lines.push(String::new());
}

/// Text rendering of the insights report.
pub fn render_insights(insights: &Insights) -> Vec<String> {
    let mut lines = Vec::new();
    lines.push(format!(
        "Graph: {} issues, {} edges, density {:.4}",
        insights.stats.page_rank.len(),
        insights
            .stats
            .out_degree
            .values()
            .sum::<usize>(),
        insights.cluster_density
    ));
    lines.push(String::new());

    push_list(&mut lines, "Bottlenecks (betweenness)", &insights.bottlenecks);
    push_list(&mut lines, "Keystones (critical path)", &insights.keystones);
    push_list(&mut lines, "Influencers (eigenvector)", &insights.influencers);
    push_list(&mut lines, "Hubs", &insights.hubs);
    push_list(&mut lines, "Authorities", &insights.authorities);

    if !insights.cycles.is_empty() {
        lines.push("Circular dependencies:".to_string());
        for cycle in &insights.cycles {
            lines.push(format!("  {}", format_cycle(cycle)));
        }
        lines.push(String::new());
    }
    if !insights.orphans.is_empty() {
        lines.push(format!("Orphans: {}", insights.orphans.join(", ")));
    }
    lines
}

/// Text rendering of the execution plan.
pub fn render_plan(plan: &ExecutionPlan) -> Vec<String> {
    let mut lines = Vec::new();
    if plan.tracks.is_empty() {
        lines.push("Nothing is actionable right now".to_string());
        return lines;
    }
    lines.push(format!(
        "{} actionable issue(s) across {} track(s)",
        plan.summary.total_actionable, plan.summary.total_tracks
    ));
    if let Some(top) = &plan.summary.top_item {
        lines.push(format!(
            "Start with {top} (impact {:.2})",
            plan.summary.top_impact
        ));
    }
    lines.push(String::new());
    for track in &plan.tracks {
        lines.push(format!("Track {}:", track.id));
        for item in &track.items {
            lines.push(format!(
                "  [{:.2}] P{} {:<12} {}",
                item.impact, item.priority, item.id, item.title
            ));
            if !item.unblocks.is_empty() {
                lines.push(format!("         unblocks: {}", item.unblocks.join(", ")));
            }
        }
        lines.push(String::new());
    }
    lines.pop();
    lines
}

/// Text rendering of priority recommendations.
pub fn render_recommendations(recommendations: &[PriorityRecommendation]) -> Vec<String> {
    let mut lines = Vec::new();
    if recommendations.is_empty() {
        lines.push("Priorities look consistent with the graph".to_string());
        return lines;
    }
    for rec in recommendations {
        lines.push(format!(
            "{} P{} -> P{} ({}, confidence {:.2})",
            rec.id, rec.current, rec.expected, rec.direction, rec.confidence
        ));
        lines.push(format!("    {}", rec.reasoning));
    }
    lines
}

/// Text rendering of a snapshot diff.
pub fn render_diff(diff: &SnapshotDiff, since: &str) -> Vec<String> {
    let mut lines = Vec::new();
    lines.push(format!("Changes since {since}"));
    lines.push(String::new());

    let arrow = match diff.summary.health_trend {
        HealthTrend::Improving => "^",
        HealthTrend::Stable => "=",
        HealthTrend::Degrading => "v",
    };
    lines.push(format!(
        "Health trend: {arrow} {}",
        diff.summary.health_trend
    ));
    lines.push(String::new());

    lines.push("Summary:".to_string());
    let counts = [
        ("+", diff.summary.issues_added, "new issues"),
        ("*", diff.summary.issues_closed, "issues closed"),
        ("-", diff.summary.issues_removed, "issues removed"),
        ("~", diff.summary.issues_reopened, "issues reopened"),
        ("~", diff.summary.issues_modified, "issues modified"),
        ("!", diff.summary.cycles_introduced, "new cycles introduced"),
        ("*", diff.summary.cycles_resolved, "cycles resolved"),
    ];
    for (mark, count, label) in counts {
        if count > 0 {
            lines.push(format!("  {mark} {count} {label}"));
        }
    }
    lines.push(String::new());

    if !diff.new_issues.is_empty() {
        lines.push("New issues:".to_string());
        for issue in &diff.new_issues {
            lines.push(format!("  + [{}] {} (P{})", issue.id, issue.title, issue.priority));
        }
        lines.push(String::new());
    }
    if !diff.closed_issues.is_empty() {
        lines.push("Closed issues:".to_string());
        for issue in &diff.closed_issues {
            lines.push(format!("  * [{}] {}", issue.id, issue.title));
        }
        lines.push(String::new());
    }
    if !diff.reopened_issues.is_empty() {
        lines.push("Reopened issues:".to_string());
        for issue in &diff.reopened_issues {
            lines.push(format!("  ~ [{}] {}", issue.id, issue.title));
        }
        lines.push(String::new());
    }
    if !diff.modified_issues.is_empty() {
        lines.push("Modified issues:".to_string());
        for modified in diff.modified_issues.iter().take(LIST_ROWS) {
            lines.push(format!("  ~ [{}] {}", modified.id, modified.title));
            for change in &modified.changes {
                lines.push(format!(
                    "      {}: {} -> {}",
                    change.field, change.old_value, change.new_value
                ));
            }
        }
        if diff.modified_issues.len() > LIST_ROWS {
            lines.push(format!(
                "  ... and {} more",
                diff.modified_issues.len() - LIST_ROWS
            ));
        }
        lines.push(String::new());
    }
    if !diff.new_cycles.is_empty() {
        lines.push("New circular dependencies:".to_string());
        for cycle in &diff.new_cycles {
            lines.push(format!("  ! {}", format_cycle(cycle)));
        }
        lines.push(String::new());
    }

    lines.push("Metric changes:".to_string());
    let deltas = [
        ("Total issues", diff.metric_deltas.total_issues),
        ("Open issues", diff.metric_deltas.open_issues),
        ("Blocked issues", diff.metric_deltas.blocked_issues),
        ("Cycles", diff.metric_deltas.cycle_count),
    ];
    let mut any = false;
    for (label, delta) in deltas {
        if delta != 0 {
            lines.push(format!("  {label}: {delta:+}"));
            any = true;
        }
    }
    if !any {
        lines.push("  (none)".to_string());
    }
    lines
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;
