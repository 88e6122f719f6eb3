// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Issue loaders.
//!
//! Every loader produces the same thing: a sequence of normalized
//! [`Issue`](gv_core::Issue) records plus a list of hygiene warnings for
//! records that had to be skipped or repaired. Two on-disk encodings are
//! supported and sniffed automatically:
//!
//! - beads JSONL: one issue object per line, dependencies inline
//! - daemon export: one JSON document `{"issues": [...]}` in the daemon's
//!   camelCase shape with peer dependency arrays
//!
//! The git loader replays either encoding from a historical revision.

pub mod daemon;
pub mod git;
pub mod jsonl;

use std::path::{Path, PathBuf};

use gv_core::Issue;

use crate::error::{Error, Result};

/// Issues file location within a beads project.
const BEADS_DIR: &str = ".beads";
const ISSUES_FILE: &str = "issues.jsonl";

/// A loaded issue set with accumulated hygiene warnings.
#[derive(Debug, Default)]
pub struct Loaded {
    pub issues: Vec<Issue>,
    pub warnings: Vec<String>,
}

/// Loads issues from an explicit file, or discovers the project's issues
/// file by walking up from the working directory.
pub fn load(input: Option<&str>) -> Result<Loaded> {
    let path = match input {
        Some(p) => PathBuf::from(p),
        None => discover_issues_file()?,
    };
    tracing::debug!(path = %path.display(), "loading issues");
    load_path(&path)
}

/// Loads issues from one file, sniffing the encoding.
pub fn load_path(path: &Path) -> Result<Loaded> {
    let content = std::fs::read_to_string(path)?;
    Ok(parse(&content))
}

/// Parses issue content in either supported encoding.
pub fn parse(content: &str) -> Loaded {
    if looks_like_document(content) {
        daemon::parse_export(content)
    } else {
        jsonl::parse(content)
    }
}

/// JSONL puts one complete record per line; an export document either spans
/// lines or is a one-line object carrying an `issues` array.
fn looks_like_document(content: &str) -> bool {
    let Some(first_line) = content.lines().find(|l| !l.trim().is_empty()) else {
        return false;
    };
    let trimmed = first_line.trim();
    if !trimmed.starts_with('{') {
        return false;
    }
    match serde_json::from_str::<serde_json::Value>(trimmed) {
        Ok(value) => value.get("issues").is_some_and(serde_json::Value::is_array),
        Err(_) => true,
    }
}

/// Walks up from the current directory looking for `.beads/issues.jsonl`.
fn discover_issues_file() -> Result<PathBuf> {
    let mut dir = std::env::current_dir()?;
    loop {
        let candidate = dir.join(BEADS_DIR).join(ISSUES_FILE);
        if candidate.is_file() {
            return Ok(candidate);
        }
        if !dir.pop() {
            return Err(Error::IssuesFileNotFound);
        }
    }
}

/// Relative path of the issues file inside a repository, for git loads.
pub(crate) fn issues_repo_path() -> String {
    format!("{BEADS_DIR}/{ISSUES_FILE}")
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
