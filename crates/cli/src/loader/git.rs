// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Historical snapshots out of git.
//!
//! Replays the tracked issues file from an arbitrary revision with
//! `git show`, so diffs and `--as-of` views need no tracker support. Date
//! arguments (`YYYY-MM-DD`) resolve to the last commit on or before that
//! day. The issues file must be tracked for historical loads to work.

use std::process::Command;

use chrono::{DateTime, NaiveDate, Utc};

use gv_core::Snapshot;

use crate::error::{Error, Result};

use super::{issues_repo_path, Loaded};

/// Loads the issue snapshot at a revision or date.
///
/// Warnings from parsing ride along in the returned [`Loaded`].
pub fn load_at(rev: &str) -> Result<(Snapshot, Vec<String>)> {
    let commit = resolve_revision(rev)?;
    let content = show_file(&commit, &issues_repo_path())?;
    let Loaded { issues, warnings } = super::parse(&content);
    let captured_at = commit_time(&commit).unwrap_or_else(|_| Utc::now());
    Ok((Snapshot::at(issues, commit, captured_at), warnings))
}

/// Resolves a revision argument (SHA, branch, tag, HEAD~N, or date) to a
/// full commit id.
pub fn resolve_revision(rev: &str) -> Result<String> {
    if let Some(commit) = resolve_date(rev)? {
        return Ok(commit);
    }
    let output = git(&["rev-parse", "--verify", &format!("{rev}^{{commit}}")])?;
    if output.is_empty() {
        return Err(Error::UnknownRevision(rev.to_string()));
    }
    Ok(output)
}

/// Resolves `YYYY-MM-DD` to the last commit on or before that date; None if
/// the argument is not a date.
fn resolve_date(rev: &str) -> Result<Option<String>> {
    if NaiveDate::parse_from_str(rev, "%Y-%m-%d").is_err() {
        return Ok(None);
    }
    let output = git(&[
        "rev-list",
        "-1",
        &format!("--before={rev}T23:59:59"),
        "HEAD",
    ])?;
    if output.is_empty() {
        return Err(Error::UnknownRevision(rev.to_string()));
    }
    Ok(Some(output))
}

/// Commit timestamp of a revision.
fn commit_time(commit: &str) -> Result<DateTime<Utc>> {
    let output = git(&["show", "-s", "--format=%cI", commit])?;
    DateTime::parse_from_rfc3339(&output)
        .map(|t| t.to_utc())
        .map_err(|e| Error::Git(format!("unreadable commit time {output:?}: {e}")))
}

/// File content at a revision.
fn show_file(commit: &str, path: &str) -> Result<String> {
    git(&["show", &format!("{commit}:{path}")])
}

/// Runs git, trimming stdout; stderr becomes the error message.
fn git(args: &[&str]) -> Result<String> {
    let output = Command::new("git")
        .args(args)
        .output()
        .map_err(|e| Error::Git(format!("cannot run git: {e}")))?;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(Error::Git(stderr.trim().to_string()));
    }
    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

#[cfg(test)]
#[path = "git_tests.rs"]
mod tests;
