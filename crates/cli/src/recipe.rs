// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Named filter/sort recipes applied before analysis.
//!
//! A recipe shrinks the issue set (status, priority, labels, time windows,
//! blocker conditions) and orders what remains. Built-ins cover the common
//! views; users layer their own from `~/.config/gv/recipes.toml`, and
//! projects from `.gv/recipes.toml`, with later sources winning on name
//! collisions. An accept-all recipe with no sort is a strict no-op, so
//! applying one never changes analysis output.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use gv_core::{Issue, Status};

use crate::error::{Error, Result};

/// Where a recipe was defined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RecipeSource {
    Builtin,
    User,
    Project,
}

impl RecipeSource {
    /// Returns the string representation used in listings.
    pub fn as_str(&self) -> &'static str {
        match self {
            RecipeSource::Builtin => "builtin",
            RecipeSource::User => "user",
            RecipeSource::Project => "project",
        }
    }
}

/// Filter conditions; all present conditions must hold.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RecipeFilters {
    /// Keep issues whose status matches any of these.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub status: Vec<String>,
    /// Keep issues with any of these priorities.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub priority: Vec<u8>,
    /// Require every one of these labels.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<String>,
    /// Drop issues carrying any of these labels.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exclude_labels: Vec<String>,
    /// Relative ("7d", "36h") or absolute ("2026-07-01") window bounds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_after: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_before: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_after: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_before: Option<String>,
    /// Require (or forbid) at least one open `blocks` dependency.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_blockers: Option<bool>,
    /// Keep only issues with no open `blocks` dependency.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actionable: Option<bool>,
    /// Case-insensitive title substring.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_contains: Option<String>,
    /// Issue id prefix.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_prefix: Option<String>,
}

/// Sort specification.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RecipeSort {
    /// One of: priority, created, updated, title, id, status.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub field: String,
    /// "asc" or "desc"; empty picks the field's natural direction.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub direction: String,
}

/// A named filter + sort preset.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Recipe {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub filters: RecipeFilters,
    #[serde(default)]
    pub sort: RecipeSort,
}

/// Summary row for recipe listings.
#[derive(Debug, Clone, Serialize)]
pub struct RecipeSummary {
    pub name: String,
    pub description: String,
    pub source: RecipeSource,
}

/// On-disk recipe file: a table of recipes keyed by name.
#[derive(Debug, Default, Deserialize)]
struct RecipeFile {
    #[serde(default)]
    recipes: BTreeMap<String, Recipe>,
}

/// All known recipes with source attribution.
#[derive(Debug, Default)]
pub struct RecipeSet {
    recipes: BTreeMap<String, (Recipe, RecipeSource)>,
}

impl RecipeSet {
    /// Builds the built-in set only.
    pub fn builtin() -> Self {
        let mut set = RecipeSet::default();
        for (name, recipe) in builtins() {
            set.recipes
                .insert(name.to_string(), (recipe, RecipeSource::Builtin));
        }
        set
    }

    /// Builds the full set: built-ins, then user file, then project file.
    pub fn load_default() -> Result<Self> {
        let mut set = RecipeSet::builtin();
        if let Some(user_file) = user_recipes_path() {
            set.merge_file(&user_file, RecipeSource::User)?;
        }
        set.merge_file(Path::new(".gv/recipes.toml"), RecipeSource::Project)?;
        Ok(set)
    }

    /// Merges one recipe file; missing files are fine, unreadable ones fail.
    fn merge_file(&mut self, path: &Path, source: RecipeSource) -> Result<()> {
        if !path.is_file() {
            return Ok(());
        }
        let content = std::fs::read_to_string(path)?;
        let file: RecipeFile =
            toml::from_str(&content).map_err(|e| Error::InvalidRecipeFile {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;
        for (name, recipe) in file.recipes {
            self.recipes.insert(name, (recipe, source));
        }
        Ok(())
    }

    /// Looks up a recipe by name.
    pub fn get(&self, name: &str) -> Option<&Recipe> {
        self.recipes.get(name).map(|(r, _)| r)
    }

    /// Looks up a recipe, or fails with the available names in the message.
    pub fn require(&self, name: &str) -> Result<&Recipe> {
        self.get(name).ok_or_else(|| Error::UnknownRecipe {
            name: name.to_string(),
            available: self
                .recipes
                .keys()
                .cloned()
                .collect::<Vec<_>>()
                .join(", "),
        })
    }

    /// Name-sorted summaries for listings.
    pub fn summaries(&self) -> Vec<RecipeSummary> {
        self.recipes
            .iter()
            .map(|(name, (recipe, source))| RecipeSummary {
                name: name.clone(),
                description: recipe.description.clone(),
                source: *source,
            })
            .collect()
    }
}

fn user_recipes_path() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .map(|home| PathBuf::from(home).join(".config").join("gv").join("recipes.toml"))
}

/// The built-in recipe library.
fn builtins() -> Vec<(&'static str, Recipe)> {
    let recipe = |description: &str, filters: RecipeFilters, sort: RecipeSort| Recipe {
        description: description.to_string(),
        filters,
        sort,
    };
    vec![
        (
            "default",
            recipe(
                "All issues, priority first",
                RecipeFilters::default(),
                RecipeSort {
                    field: "priority".to_string(),
                    direction: String::new(),
                },
            ),
        ),
        (
            "actionable",
            recipe(
                "Open issues with no open blockers",
                RecipeFilters {
                    status: vec!["open".to_string(), "in_progress".to_string()],
                    actionable: Some(true),
                    ..RecipeFilters::default()
                },
                RecipeSort {
                    field: "priority".to_string(),
                    direction: String::new(),
                },
            ),
        ),
        (
            "recent",
            recipe(
                "Issues touched in the last week",
                RecipeFilters {
                    updated_after: Some("7d".to_string()),
                    ..RecipeFilters::default()
                },
                RecipeSort {
                    field: "updated".to_string(),
                    direction: String::new(),
                },
            ),
        ),
        (
            "blocked",
            recipe(
                "Open issues waiting on something",
                RecipeFilters {
                    status: vec![
                        "open".to_string(),
                        "in_progress".to_string(),
                        "blocked".to_string(),
                    ],
                    has_blockers: Some(true),
                    ..RecipeFilters::default()
                },
                RecipeSort {
                    field: "priority".to_string(),
                    direction: String::new(),
                },
            ),
        ),
        (
            "high-impact",
            recipe(
                "Top-priority open issues",
                RecipeFilters {
                    status: vec!["open".to_string(), "in_progress".to_string()],
                    priority: vec![0, 1],
                    ..RecipeFilters::default()
                },
                RecipeSort {
                    field: "priority".to_string(),
                    direction: String::new(),
                },
            ),
        ),
        (
            "stale",
            recipe(
                "Open issues untouched for a month",
                RecipeFilters {
                    status: vec!["open".to_string(), "in_progress".to_string()],
                    updated_before: Some("30d".to_string()),
                    ..RecipeFilters::default()
                },
                RecipeSort {
                    field: "updated".to_string(),
                    direction: "asc".to_string(),
                },
            ),
        ),
    ]
}

/// Applies a recipe: filter, then stable sort.
pub fn apply(recipe: &Recipe, issues: Vec<Issue>) -> Vec<Issue> {
    let now = Utc::now();
    let mut kept = filter(&recipe.filters, issues, now);
    sort(&recipe.sort, &mut kept);
    kept
}

fn filter(filters: &RecipeFilters, issues: Vec<Issue>, now: DateTime<Utc>) -> Vec<Issue> {
    // Open blocker targets are resolved against the unfiltered set, so a
    // status filter cannot make a blocked issue look actionable.
    let open_ids: std::collections::HashSet<&str> = issues
        .iter()
        .filter(|i| !i.is_terminal())
        .map(|i| i.id.as_str())
        .collect();
    let has_open_blockers = |issue: &Issue| {
        issue
            .dependencies
            .iter()
            .any(|d| d.dep_type.is_blocking() && open_ids.contains(d.depends_on_id.as_str()))
    };

    issues
        .iter()
        .filter(|issue| {
            if !filters.status.is_empty()
                && !filters
                    .status
                    .iter()
                    .any(|s| Status::from(s.as_str()) == issue.status)
            {
                return false;
            }
            if !filters.priority.is_empty() && !filters.priority.contains(&issue.priority) {
                return false;
            }
            if !filters.labels.iter().all(|want| {
                issue
                    .labels
                    .iter()
                    .any(|have| have.eq_ignore_ascii_case(want))
            }) {
                return false;
            }
            if filters.exclude_labels.iter().any(|skip| {
                issue
                    .labels
                    .iter()
                    .any(|have| have.eq_ignore_ascii_case(skip))
            }) {
                return false;
            }
            if !within(
                issue.created_at,
                filters.created_after.as_deref(),
                filters.created_before.as_deref(),
                now,
            ) {
                return false;
            }
            if !within(
                issue.updated_at,
                filters.updated_after.as_deref(),
                filters.updated_before.as_deref(),
                now,
            ) {
                return false;
            }
            if let Some(wanted) = filters.has_blockers {
                if has_open_blockers(issue) != wanted {
                    return false;
                }
            }
            if filters.actionable == Some(true) && has_open_blockers(issue) {
                return false;
            }
            if let Some(needle) = &filters.title_contains {
                if !issue.title.to_lowercase().contains(&needle.to_lowercase()) {
                    return false;
                }
            }
            if let Some(prefix) = &filters.id_prefix {
                if !issue.id.starts_with(prefix.as_str()) {
                    return false;
                }
            }
            true
        })
        .cloned()
        .collect()
}

fn within(
    value: DateTime<Utc>,
    after: Option<&str>,
    before: Option<&str>,
    now: DateTime<Utc>,
) -> bool {
    if let Some(threshold) = after.and_then(|spec| parse_time_spec(spec, now)) {
        if value < threshold {
            return false;
        }
    }
    if let Some(threshold) = before.and_then(|spec| parse_time_spec(spec, now)) {
        if value > threshold {
            return false;
        }
    }
    true
}

/// Parses "7d" / "36h" / "90m" as now-relative, or an absolute RFC 3339 /
/// `YYYY-MM-DD` timestamp. Unparseable specs disable the bound.
pub fn parse_time_spec(spec: &str, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
    let spec = spec.trim();
    if let Some(number) = spec.strip_suffix('d') {
        let days: i64 = number.parse().ok()?;
        return Some(now - Duration::days(days));
    }
    if let Some(number) = spec.strip_suffix('h') {
        let hours: i64 = number.parse().ok()?;
        return Some(now - Duration::hours(hours));
    }
    if let Some(number) = spec.strip_suffix('m') {
        let minutes: i64 = number.parse().ok()?;
        return Some(now - Duration::minutes(minutes));
    }
    if let Ok(t) = DateTime::parse_from_rfc3339(spec) {
        return Some(t.to_utc());
    }
    if let Ok(date) = NaiveDate::parse_from_str(spec, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|t| t.and_utc());
    }
    None
}

fn sort(spec: &RecipeSort, issues: &mut [Issue]) {
    if spec.field.is_empty() {
        return;
    }
    // Dates default to newest first, everything else ascending.
    let ascending = match spec.direction.as_str() {
        "asc" => true,
        "desc" => false,
        _ => !matches!(spec.field.as_str(), "created" | "updated"),
    };
    issues.sort_by(|a, b| {
        let ordering = match spec.field.as_str() {
            "priority" => a.priority.cmp(&b.priority),
            "created" => a.created_at.cmp(&b.created_at),
            "updated" => a.updated_at.cmp(&b.updated_at),
            "title" => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
            "id" => a.id.cmp(&b.id),
            "status" => a.status.as_str().cmp(b.status.as_str()),
            _ => std::cmp::Ordering::Equal,
        };
        if ascending {
            ordering
        } else {
            ordering.reverse()
        }
    });
}

#[cfg(test)]
#[path = "recipe_tests.rs"]
mod tests;
