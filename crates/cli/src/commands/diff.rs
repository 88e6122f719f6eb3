// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use gv_core::{compare, Snapshot};

use crate::cli::OutputFormat;
use crate::display;
use crate::error::Result;
use crate::loader::git;
use crate::recipe::{self, RecipeSet};
use crate::schema::diff::DiffOutputJson;
use crate::schema::Envelope;

use super::{load_issues, print_warnings};

pub fn run(
    input: Option<&str>,
    recipe: Option<&str>,
    since: &str,
    format: OutputFormat,
) -> Result<()> {
    let (mut from, mut warnings) = git::load_at(since)?;
    // The recipe shrinks both sides, otherwise filtered-out issues would
    // read as additions or removals.
    if let Some(name) = recipe {
        let set = RecipeSet::load_default()?;
        from.issues = recipe::apply(set.require(name)?, std::mem::take(&mut from.issues));
    }
    let loaded = load_issues(input, recipe)?;
    warnings.extend(loaded.warnings);
    let to = Snapshot::new(loaded.issues);

    let diff = compare(&from, &to);

    match format {
        OutputFormat::Text => {
            print_warnings(&warnings);
            for line in display::render_diff(&diff, since) {
                println!("{line}");
            }
        }
        OutputFormat::Json => {
            let output = DiffOutputJson {
                envelope: Envelope::now(warnings),
                diff,
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "diff_tests.rs"]
mod tests;
