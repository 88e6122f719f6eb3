// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Beads JSONL parsing.
//!
//! One issue object per line. Malformed lines and invalid records are
//! skipped with a warning; loading never fails on dirty data.

use gv_core::Issue;

use super::Loaded;

/// Parses newline-delimited issue records.
pub fn parse(content: &str) -> Loaded {
    let mut loaded = Loaded::default();
    for (number, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match serde_json::from_str::<Issue>(line) {
            Ok(issue) => {
                if let Err(e) = issue.validate() {
                    loaded
                        .warnings
                        .push(format!("line {}: skipping issue: {e}", number + 1));
                    continue;
                }
                loaded.issues.push(issue);
            }
            Err(e) => {
                loaded
                    .warnings
                    .push(format!("line {}: skipping malformed record: {e}", number + 1));
            }
        }
    }
    tracing::debug!(
        issues = loaded.issues.len(),
        warnings = loaded.warnings.len(),
        "parsed jsonl"
    );
    loaded
}

#[cfg(test)]
#[path = "jsonl_tests.rs"]
mod tests;
