// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use crate::cli::OutputFormat;
use crate::error::Result;
use crate::recipe::RecipeSet;
use crate::schema::recipes::{RecipeJson, RecipesOutputJson};

pub fn run(format: OutputFormat) -> Result<()> {
    let set = RecipeSet::load_default()?;
    let summaries = set.summaries();

    match format {
        OutputFormat::Text => {
            for summary in &summaries {
                println!(
                    "{:<14} {:<46} ({})",
                    summary.name,
                    summary.description,
                    summary.source.as_str()
                );
            }
        }
        OutputFormat::Json => {
            let output = RecipesOutputJson {
                recipes: summaries
                    .iter()
                    .map(|s| RecipeJson {
                        name: s.name.clone(),
                        description: s.description.clone(),
                        source: s.source.as_str().to_string(),
                    })
                    .collect(),
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "recipes_tests.rs"]
mod tests;
