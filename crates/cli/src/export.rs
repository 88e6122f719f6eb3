// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Markdown status report.
//!
//! Renders a readable project report: headline counts, top insight tables,
//! the execution plan, cycle warnings, and a Mermaid diagram of the `blocks`
//! edges. The diagram is capped so large trackers still produce something a
//! renderer will draw.

use std::fmt::Write as _;

use gv_core::{Analyzer, DepType, Issue};

use crate::display::format_cycle;

/// Node cap for the Mermaid diagram.
const MERMAID_NODE_LIMIT: usize = 60;

/// Rows per insight table.
const TABLE_ROWS: usize = 10;

/// Renders the full Markdown report for an issue set.
pub fn render_markdown(issues: &[Issue]) -> String {
    let analyzer = Analyzer::new(issues.to_vec());
    let stats = analyzer.stats();
    let insights = analyzer.insights(TABLE_ROWS);
    let plan = analyzer.execution_plan();

    let open = issues.iter().filter(|i| !i.is_terminal()).count();
    let closed = issues.len() - open;

    let mut out = String::new();
    let _ = writeln!(out, "# Issue Tracker Status");
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "{} issues ({open} open, {closed} closed), {} dependency edges, density {:.4}",
        issues.len(),
        analyzer.graph().edge_count(),
        stats.density
    );
    let _ = writeln!(out);

    if !stats.cycles.is_empty() {
        let _ = writeln!(out, "## Circular Dependencies");
        let _ = writeln!(out);
        for cycle in &stats.cycles {
            let _ = writeln!(out, "- `{}`", format_cycle(cycle));
        }
        let _ = writeln!(out);
    }

    insight_table(&mut out, "Bottlenecks", "Betweenness", &insights.bottlenecks);
    insight_table(&mut out, "Keystones", "Critical path", &insights.keystones);

    if !plan.tracks.is_empty() {
        let _ = writeln!(out, "## Execution Plan");
        let _ = writeln!(out);
        for track in &plan.tracks {
            let _ = writeln!(out, "### Track {}", track.id);
            let _ = writeln!(out);
            for item in &track.items {
                let _ = write!(
                    out,
                    "- **{}** (P{}, impact {:.2}) {}",
                    item.id, item.priority, item.impact, item.title
                );
                if item.unblocks.is_empty() {
                    let _ = writeln!(out);
                } else {
                    let _ = writeln!(out, " - unblocks {}", item.unblocks.join(", "));
                }
            }
            let _ = writeln!(out);
        }
    }

    let _ = writeln!(out, "## Dependency Graph");
    let _ = writeln!(out);
    let _ = writeln!(out, "```mermaid");
    let _ = write!(out, "{}", mermaid(issues));
    let _ = writeln!(out, "```");
    out
}

fn insight_table(
    out: &mut String,
    heading: &str,
    value_label: &str,
    items: &[gv_core::insights::InsightItem],
) {
    if items.is_empty() {
        return;
    }
    let _ = writeln!(out, "## {heading}");
    let _ = writeln!(out);
    let _ = writeln!(out, "| Issue | {value_label} |");
    let _ = writeln!(out, "|---|---|");
    for item in items {
        let _ = writeln!(out, "| {} | {:.4} |", item.id, item.value);
    }
    let _ = writeln!(out);
}

/// Mermaid `graph TD` over the `blocks` edges of the first issues in input
/// order, up to the node cap.
fn mermaid(issues: &[Issue]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "graph TD");

    let included: std::collections::HashSet<&str> = issues
        .iter()
        .take(MERMAID_NODE_LIMIT)
        .map(|i| i.id.as_str())
        .collect();

    for issue in issues.iter().take(MERMAID_NODE_LIMIT) {
        let _ = writeln!(
            out,
            "    {}[\"{}\"]",
            sanitize(&issue.id),
            issue.title.replace('"', "'")
        );
    }
    for issue in issues.iter().take(MERMAID_NODE_LIMIT) {
        for dep in &issue.dependencies {
            if dep.dep_type == DepType::Blocks && included.contains(dep.depends_on_id.as_str()) {
                let _ = writeln!(
                    out,
                    "    {} --> {}",
                    sanitize(&issue.id),
                    sanitize(&dep.depends_on_id)
                );
            }
        }
    }
    if issues.len() > MERMAID_NODE_LIMIT {
        let _ = writeln!(
            out,
            "    more[\"... {} more issues\"]",
            issues.len() - MERMAID_NODE_LIMIT
        );
    }
    out
}

/// Mermaid node ids tolerate only word characters and dashes.
fn sanitize(id: &str) -> String {
    id.chars()
        .map(|c| if c.is_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect()
}

#[cfg(test)]
#[path = "export_tests.rs"]
mod tests;
