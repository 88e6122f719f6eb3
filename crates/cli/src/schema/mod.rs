// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Schema types for robot (JSON) output structures.
//!
//! Robot outputs are always valid JSON, even for partial analyses: every
//! wrapper carries a `generated_at` timestamp and the loader/build warnings,
//! and the embedded engine structures carry their own per-metric
//! diagnostics.

use chrono::Utc;
use schemars::JsonSchema;
use serde::Serialize;

pub mod diff;
pub mod insights;
pub mod plan;
pub mod priority;
pub mod recipes;

/// Common envelope fields for robot outputs.
///
/// Not serialized directly; each output embeds these via `#[serde(flatten)]`.
#[derive(JsonSchema, Serialize)]
pub struct Envelope {
    /// RFC 3339 generation time.
    pub generated_at: String,
    /// Input hygiene warnings from loading and graph construction.
    pub warnings: Vec<String>,
}

impl Envelope {
    /// Stamps an envelope with the current time.
    pub fn now(warnings: Vec<String>) -> Self {
        Envelope {
            generated_at: Utc::now().to_rfc3339(),
            warnings,
        }
    }
}
