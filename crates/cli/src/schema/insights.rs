// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Schema types for `gv insights` JSON output.

use schemars::JsonSchema;
use serde::Serialize;

use gv_core::Insights;

use super::Envelope;

/// JSON output structure for the insights command.
#[derive(JsonSchema, Serialize)]
pub struct InsightsOutputJson {
    #[serde(flatten)]
    pub envelope: Envelope,
    /// Ranked lists, cycles, density, and the full per-node stat maps.
    pub insights: Insights,
}
