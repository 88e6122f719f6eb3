// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Core issue types for the gv analysis engine.
//!
//! This module contains the normalized record types the engine analyzes:
//! Issue, Dependency, Snapshot, and the open enums Status, IssueType, and
//! DepType. Trackers extend their vocabularies over time, so the enums keep a
//! known set of variants plus an `Other` passthrough that round-trips unknown
//! strings unchanged.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Workflow status of an issue.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Status {
    /// Not yet started. Initial state for new issues.
    Open,
    /// Currently being worked on.
    InProgress,
    /// Waiting on one or more dependencies.
    Blocked,
    /// Intentionally parked.
    Deferred,
    /// Held at the top of the tracker, exempt from staleness.
    Pinned,
    /// Attached to an agent hook.
    Hooked,
    /// Completed.
    Closed,
    /// Deleted but retained for history.
    Tombstone,
    /// Tracker extension the engine has no special handling for.
    Other(String),
}

impl Status {
    /// Returns the string representation used in storage and display.
    pub fn as_str(&self) -> &str {
        match self {
            Status::Open => "open",
            Status::InProgress => "in_progress",
            Status::Blocked => "blocked",
            Status::Deferred => "deferred",
            Status::Pinned => "pinned",
            Status::Hooked => "hooked",
            Status::Closed => "closed",
            Status::Tombstone => "tombstone",
            Status::Other(s) => s,
        }
    }

    /// Returns true if this is a terminal state (closed or tombstone).
    pub fn is_terminal(&self) -> bool {
        matches!(self, Status::Closed | Status::Tombstone)
    }

    /// Returns true if this is an active state (not closed/tombstone).
    pub fn is_active(&self) -> bool {
        !self.is_terminal()
    }

    /// Returns true for states the execution planner considers workable.
    ///
    /// Only open and in-progress issues can be actionable; blocked, deferred,
    /// pinned, hooked, and unknown states never enter the plan.
    pub fn is_workable(&self) -> bool {
        matches!(self, Status::Open | Status::InProgress)
    }
}

impl Default for Status {
    fn default() -> Self {
        Status::Open
    }
}

impl From<&str> for Status {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "open" => Status::Open,
            "in_progress" => Status::InProgress,
            "blocked" => Status::Blocked,
            "deferred" => Status::Deferred,
            "pinned" => Status::Pinned,
            "hooked" => Status::Hooked,
            "closed" => Status::Closed,
            "tombstone" => Status::Tombstone,
            _ => Status::Other(s.to_string()),
        }
    }
}

impl From<String> for Status {
    fn from(s: String) -> Self {
        Status::from(s.as_str())
    }
}

impl From<Status> for String {
    fn from(s: Status) -> Self {
        s.as_str().to_string()
    }
}

impl FromStr for Status {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Status::from(s))
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Classification of issues by their nature and scope.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum IssueType {
    /// Defect or problem to fix.
    Bug,
    /// New capability.
    Feature,
    /// Standard unit of work.
    Task,
    /// Cross-cutting initiative spanning multiple features.
    Epic,
    /// Maintenance work (refactoring, cleanup, dependency updates).
    Chore,
    /// Tracker extension (e.g. "molecule", "agent").
    Other(String),
}

impl IssueType {
    /// Returns the string representation used in storage and display.
    pub fn as_str(&self) -> &str {
        match self {
            IssueType::Bug => "bug",
            IssueType::Feature => "feature",
            IssueType::Task => "task",
            IssueType::Epic => "epic",
            IssueType::Chore => "chore",
            IssueType::Other(s) => s,
        }
    }
}

impl Default for IssueType {
    fn default() -> Self {
        IssueType::Task
    }
}

impl From<&str> for IssueType {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "bug" => IssueType::Bug,
            "feature" => IssueType::Feature,
            "task" => IssueType::Task,
            "epic" => IssueType::Epic,
            "chore" => IssueType::Chore,
            _ => IssueType::Other(s.to_string()),
        }
    }
}

impl From<String> for IssueType {
    fn from(s: String) -> Self {
        IssueType::from(s.as_str())
    }
}

impl From<IssueType> for String {
    fn from(t: IssueType) -> Self {
        t.as_str().to_string()
    }
}

impl FromStr for IssueType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(IssueType::from(s))
    }
}

impl fmt::Display for IssueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Relation types for dependencies between issues.
///
/// Only `blocks` and `parent-child` become edges in the analysis graph; every
/// other type (known or unknown) is carried as metadata.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DepType {
    /// The target must be satisfied before the owning issue can proceed.
    Blocks,
    /// The target is the owning issue's parent.
    ParentChild,
    /// Informational cross-reference.
    Related,
    /// The owning issue was filed while working on the target.
    DiscoveredFrom,
    /// Tracker extension; treated as non-blocking metadata.
    Other(String),
}

impl DepType {
    /// Returns the string representation used in storage and display.
    pub fn as_str(&self) -> &str {
        match self {
            DepType::Blocks => "blocks",
            DepType::ParentChild => "parent-child",
            DepType::Related => "related",
            DepType::DiscoveredFrom => "discovered-from",
            DepType::Other(s) => s,
        }
    }

    /// Whether this relation becomes an edge in the analysis graph.
    pub fn is_graph_edge(&self) -> bool {
        matches!(self, DepType::Blocks | DepType::ParentChild)
    }

    /// Whether an open target of this relation blocks the owning issue.
    ///
    /// Parent-child edges shape the graph but never gate actionability.
    pub fn is_blocking(&self) -> bool {
        matches!(self, DepType::Blocks)
    }
}

impl Default for DepType {
    fn default() -> Self {
        DepType::Blocks
    }
}

impl From<&str> for DepType {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "blocks" => DepType::Blocks,
            "parent-child" | "parent_child" => DepType::ParentChild,
            "related" => DepType::Related,
            "discovered-from" | "discovered_from" => DepType::DiscoveredFrom,
            _ => DepType::Other(s.to_string()),
        }
    }
}

impl From<String> for DepType {
    fn from(s: String) -> Self {
        DepType::from(s.as_str())
    }
}

impl From<DepType> for String {
    fn from(t: DepType) -> Self {
        t.as_str().to_string()
    }
}

impl FromStr for DepType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(DepType::from(s))
    }
}

impl fmt::Display for DepType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A typed, directed dependency owned by an issue.
///
/// `issue_id` depends on `depends_on_id`; the target must be satisfied for
/// the owner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dependency {
    /// The dependent (owning) issue.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub issue_id: String,
    /// The target issue.
    pub depends_on_id: String,
    /// Relation type. Beads writes `type`; legacy tooling writes `dep_type`.
    #[serde(rename = "type", alias = "dep_type", default)]
    pub dep_type: DepType,
}

impl Dependency {
    /// Creates a dependency of the given type.
    pub fn new(
        issue_id: impl Into<String>,
        depends_on_id: impl Into<String>,
        dep_type: DepType,
    ) -> Self {
        Dependency {
            issue_id: issue_id.into(),
            depends_on_id: depends_on_id.into(),
            dep_type,
        }
    }
}

fn default_priority() -> u8 {
    2
}

/// A normalized issue record.
///
/// Field set follows the beads JSONL shape; every field except `id` is
/// optional on the wire. Records are immutable once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    /// Unique identifier within a snapshot.
    pub id: String,
    /// Short description of the work.
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub design: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub acceptance_criteria: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub notes: String,
    /// Current workflow state.
    #[serde(default)]
    pub status: Status,
    /// Classification of the issue.
    #[serde(default)]
    pub issue_type: IssueType,
    /// Priority 0 (highest) through 4 (lowest).
    #[serde(default = "default_priority")]
    pub priority: u8,
    /// Person or queue this issue is assigned to.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub assignee: String,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub closed_at: Option<DateTime<Utc>>,
    /// Labels in source order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<String>,
    /// Outgoing dependencies in source order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dependencies: Vec<Dependency>,
    /// Opaque supplier-specific fields (estimates, due dates, external refs).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
}

impl Issue {
    /// Creates a minimal open task with the given id and title.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        let now = Utc::now();
        Issue {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            design: String::new(),
            acceptance_criteria: String::new(),
            notes: String::new(),
            status: Status::Open,
            issue_type: IssueType::Task,
            priority: default_priority(),
            assignee: String::new(),
            created_at: now,
            updated_at: now,
            closed_at: None,
            labels: Vec::new(),
            dependencies: Vec::new(),
            metadata: None,
        }
    }

    /// Checks the record satisfies the engine's minimum requirements.
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(Error::InvalidIssue("empty issue id".to_string()));
        }
        if self.priority > 4 {
            return Err(Error::InvalidIssue(format!(
                "issue {}: priority {} out of range 0..=4",
                self.id, self.priority
            )));
        }
        Ok(())
    }

    /// Returns true if the issue is closed or tombstoned.
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }
}

/// An immutable issue set captured at a labeled revision.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    /// Revision label (commit SHA, tag, or "current").
    pub revision: String,
    /// When this state was captured.
    pub captured_at: DateTime<Utc>,
    /// The issues as of the revision.
    pub issues: Vec<Issue>,
}

impl Snapshot {
    /// Captures the current issue set under the label "current".
    pub fn new(issues: Vec<Issue>) -> Self {
        Snapshot {
            revision: "current".to_string(),
            captured_at: Utc::now(),
            issues,
        }
    }

    /// Captures an issue set under an explicit revision label and timestamp.
    pub fn at(issues: Vec<Issue>, revision: impl Into<String>, captured_at: DateTime<Utc>) -> Self {
        Snapshot {
            revision: revision.into(),
            captured_at,
            issues,
        }
    }
}

#[cfg(test)]
#[path = "issue_tests.rs"]
mod tests;
