// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for gv-core operations.
//!
//! Input hygiene problems (bad records, dangling references) are not errors;
//! they surface as [`BuildWarning`](crate::graph::BuildWarning)s and the
//! analysis continues. This enum covers the cases that genuinely fail an
//! operation.

use thiserror::Error;

/// All possible errors that can occur in gv-core operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid issue record: {0}")]
    InvalidIssue(String),

    #[error("unknown issue id: {0}")]
    UnknownIssue(String),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for gv-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
