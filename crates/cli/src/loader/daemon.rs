// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Daemon export document parsing.
//!
//! The beads daemon serves `{"issues": [...]}` with camelCase fields,
//! `ISSUE_STATUS_*` / `ISSUE_TYPE_*` enum strings, and dependency
//! information split across four peer arrays plus a parent scalar. The
//! normalization into the engine model:
//!
//! - `dependsOn[i]` and `blockedBy[i]` both become outgoing `blocks` edges,
//!   deduplicated against each other
//! - `parent` becomes a `parent-child` edge
//! - `blocks[i]` and `children[i]` are ignored; they are inverse relations
//!   that surface when the other endpoint is processed

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::Deserialize;

use gv_core::{DepType, Dependency, Issue, IssueType, Status};

use super::Loaded;

/// One issue in the daemon's wire shape.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireIssue {
    #[serde(default)]
    id: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    status: String,
    #[serde(default, rename = "type")]
    issue_type: String,
    #[serde(default)]
    priority: i64,
    #[serde(default)]
    created_at: String,
    #[serde(default)]
    updated_at: String,
    #[serde(default)]
    closed_at: String,
    #[serde(default)]
    parent: String,
    #[serde(default)]
    assignee: String,
    #[serde(default)]
    labels: Vec<String>,
    #[serde(default)]
    children: Vec<String>,
    #[serde(default)]
    depends_on: Vec<String>,
    #[serde(default)]
    blocks: Vec<String>,
    #[serde(default)]
    blocked_by: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct ExportDocument {
    #[serde(default)]
    issues: Vec<WireIssue>,
}

/// Parses a daemon export document.
pub fn parse_export(content: &str) -> Loaded {
    let mut loaded = Loaded::default();
    let document: ExportDocument = match serde_json::from_str(content) {
        Ok(d) => d,
        Err(e) => {
            loaded.warnings.push(format!("unreadable export document: {e}"));
            return loaded;
        }
    };

    for wire in &document.issues {
        match normalize(wire) {
            Ok(issue) => {
                if let Err(e) = issue.validate() {
                    loaded.warnings.push(format!("skipping issue: {e}"));
                    continue;
                }
                loaded.issues.push(issue);
            }
            Err(reason) => loaded.warnings.push(format!("skipping issue: {reason}")),
        }
    }
    tracing::debug!(
        issues = loaded.issues.len(),
        warnings = loaded.warnings.len(),
        "parsed export document"
    );
    loaded
}

/// Maps a daemon enum string onto the open model enums.
///
/// Known values carry a prefix (`ISSUE_STATUS_OPEN`); unknown values fall
/// back to the prefix-stripped lowercase form so tracker extensions survive.
fn map_enum(value: &str, prefix: &str) -> String {
    value.strip_prefix(prefix).unwrap_or(value).to_lowercase()
}

fn parse_time(value: &str, field: &str, id: &str) -> Result<Option<DateTime<Utc>>, String> {
    if value.is_empty() {
        return Ok(None);
    }
    DateTime::parse_from_rfc3339(value)
        .map(|t| Some(t.to_utc()))
        .map_err(|e| format!("issue {id}: invalid {field} {value:?}: {e}"))
}

fn normalize(wire: &WireIssue) -> Result<Issue, String> {
    let mut issue = Issue::new(&wire.id, &wire.title);
    issue.description = wire.description.clone();
    issue.status = Status::from(map_enum(&wire.status, "ISSUE_STATUS_").as_str());
    issue.issue_type = IssueType::from(map_enum(&wire.issue_type, "ISSUE_TYPE_").as_str());
    issue.priority = wire.priority.clamp(0, 4) as u8;
    issue.assignee = wire.assignee.clone();
    issue.labels = wire.labels.clone();

    if let Some(created) = parse_time(&wire.created_at, "created_at", &wire.id)? {
        issue.created_at = created;
    }
    if let Some(updated) = parse_time(&wire.updated_at, "updated_at", &wire.id)? {
        issue.updated_at = updated;
    }
    issue.closed_at = parse_time(&wire.closed_at, "closed_at", &wire.id)?;

    // dependsOn and blockedBy both mean "this issue waits on the target".
    let mut seen: HashSet<&str> = HashSet::new();
    for target in wire.depends_on.iter().chain(wire.blocked_by.iter()) {
        if target.is_empty() || !seen.insert(target.as_str()) {
            continue;
        }
        issue
            .dependencies
            .push(Dependency::new(&wire.id, target, DepType::Blocks));
    }
    if !wire.parent.is_empty() && !seen.contains(wire.parent.as_str()) {
        issue
            .dependencies
            .push(Dependency::new(&wire.id, &wire.parent, DepType::ParentChild));
    }
    // wire.blocks and wire.children are inverse edges; skipped on purpose.
    let _ = (&wire.blocks, &wire.children);

    Ok(issue)
}

#[cfg(test)]
#[path = "daemon_tests.rs"]
mod tests;
