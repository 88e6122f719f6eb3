// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for the gv CLI.

use thiserror::Error;

/// All possible errors that can occur in CLI operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error(
        "no issues file found\n  hint: run inside a project with .beads/issues.jsonl, or pass --input <file>"
    )]
    IssuesFileNotFound,

    #[error("unknown recipe '{name}'\n  hint: available recipes: {available}")]
    UnknownRecipe { name: String, available: String },

    #[error("invalid recipe file {path}: {reason}")]
    InvalidRecipeFile { path: String, reason: String },

    #[error("git error: {0}")]
    Git(String),

    #[error("cannot resolve revision '{0}'")]
    UnknownRevision(String),

    #[error("engine error: {0}")]
    Core(#[from] gv_core::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for CLI operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
