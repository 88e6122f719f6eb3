// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Schema types for `gv plan` JSON output.

use schemars::JsonSchema;
use serde::Serialize;

use gv_core::ExecutionPlan;

use super::Envelope;

/// JSON output structure for the plan command.
#[derive(JsonSchema, Serialize)]
pub struct PlanOutputJson {
    #[serde(flatten)]
    pub envelope: Envelope,
    /// Parallel work tracks and the plan summary.
    pub plan: ExecutionPlan,
}
