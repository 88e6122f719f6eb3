// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use gv_core::Analyzer;

use crate::cli::OutputFormat;
use crate::display;
use crate::error::Result;
use crate::schema::priority::{PriorityOutputJson, PrioritySummaryJson};
use crate::schema::Envelope;

use super::{all_warnings, load_issues, print_warnings};

/// Confidence threshold counted as "high" in the summary.
const HIGH_CONFIDENCE: f64 = 0.7;

pub fn run(input: Option<&str>, recipe: Option<&str>, format: OutputFormat) -> Result<()> {
    let loaded = load_issues(input, recipe)?;
    let total_issues = loaded.issues.len();
    let analyzer = Analyzer::new(loaded.issues);
    let warnings = all_warnings(&loaded.warnings, &analyzer);
    let recommendations = analyzer.recommendations();

    match format {
        OutputFormat::Text => {
            print_warnings(&warnings);
            for line in display::render_recommendations(&recommendations) {
                println!("{line}");
            }
        }
        OutputFormat::Json => {
            let summary = PrioritySummaryJson {
                total_issues,
                recommendations: recommendations.len(),
                high_confidence: recommendations
                    .iter()
                    .filter(|r| r.confidence >= HIGH_CONFIDENCE)
                    .count(),
            };
            let output = PriorityOutputJson {
                envelope: Envelope::now(warnings),
                recommendations,
                summary,
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "priority_tests.rs"]
mod tests;
