// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Schema types for `gv diff` JSON output.

use schemars::JsonSchema;
use serde::Serialize;

use gv_core::SnapshotDiff;

use super::Envelope;

/// JSON output structure for the diff command.
#[derive(JsonSchema, Serialize)]
pub struct DiffOutputJson {
    #[serde(flatten)]
    pub envelope: Envelope,
    /// Structured changes between the two snapshots.
    pub diff: SnapshotDiff,
}
