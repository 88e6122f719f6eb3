// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Schema types for `gv priority` JSON output.

use schemars::JsonSchema;
use serde::Serialize;

use gv_core::PriorityRecommendation;

use super::Envelope;

/// Count roll-up over the recommendation list.
#[derive(JsonSchema, Serialize)]
pub struct PrioritySummaryJson {
    pub total_issues: usize,
    pub recommendations: usize,
    /// Recommendations with confidence >= 0.7.
    pub high_confidence: usize,
}

/// JSON output structure for the priority command.
#[derive(JsonSchema, Serialize)]
pub struct PriorityOutputJson {
    #[serde(flatten)]
    pub envelope: Envelope,
    /// Sorted by confidence, then impact, then id.
    pub recommendations: Vec<PriorityRecommendation>,
    pub summary: PrioritySummaryJson,
}
