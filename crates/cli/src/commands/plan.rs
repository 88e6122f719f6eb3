// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use gv_core::Analyzer;

use crate::cli::OutputFormat;
use crate::display;
use crate::error::Result;
use crate::schema::plan::PlanOutputJson;
use crate::schema::Envelope;

use super::{all_warnings, load_issues, print_warnings};

pub fn run(input: Option<&str>, recipe: Option<&str>, format: OutputFormat) -> Result<()> {
    let loaded = load_issues(input, recipe)?;
    let analyzer = Analyzer::new(loaded.issues);
    let warnings = all_warnings(&loaded.warnings, &analyzer);
    let plan = analyzer.execution_plan();

    match format {
        OutputFormat::Text => {
            print_warnings(&warnings);
            for line in display::render_plan(&plan) {
                println!("{line}");
            }
        }
        OutputFormat::Json => {
            let output = PlanOutputJson {
                envelope: Envelope::now(warnings),
                plan,
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "plan_tests.rs"]
mod tests;
