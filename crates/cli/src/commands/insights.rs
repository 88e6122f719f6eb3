// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use gv_core::Analyzer;

use crate::cli::OutputFormat;
use crate::display;
use crate::error::Result;
use crate::schema::insights::InsightsOutputJson;
use crate::schema::Envelope;

use super::{all_warnings, load_issues, print_warnings};

pub fn run(
    input: Option<&str>,
    recipe: Option<&str>,
    limit: usize,
    format: OutputFormat,
) -> Result<()> {
    let loaded = load_issues(input, recipe)?;
    let analyzer = Analyzer::new(loaded.issues);
    let warnings = all_warnings(&loaded.warnings, &analyzer);
    let insights = analyzer.insights(limit);

    match format {
        OutputFormat::Text => {
            print_warnings(&warnings);
            for line in display::render_insights(&insights) {
                println!("{line}");
            }
        }
        OutputFormat::Json => {
            let output = InsightsOutputJson {
                envelope: Envelope::now(warnings),
                insights,
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "insights_tests.rs"]
mod tests;
