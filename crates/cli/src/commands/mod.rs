// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod diff;
pub mod export;
pub mod insights;
pub mod plan;
pub mod priority;
pub mod recipes;
pub mod show;

use gv_core::Analyzer;

use crate::error::Result;
use crate::loader::{self, Loaded};
use crate::recipe::{self, RecipeSet};

/// Loads issues honoring `--input` and `--recipe`.
pub(crate) fn load_issues(input: Option<&str>, recipe_name: Option<&str>) -> Result<Loaded> {
    let mut loaded = loader::load(input)?;
    if let Some(name) = recipe_name {
        let set = RecipeSet::load_default()?;
        let chosen = set.require(name)?;
        loaded.issues = recipe::apply(chosen, loaded.issues);
    }
    Ok(loaded)
}

/// Loader warnings plus the analyzer's graph-construction warnings, in that
/// order, rendered for output.
pub(crate) fn all_warnings(loaded_warnings: &[String], analyzer: &Analyzer) -> Vec<String> {
    loaded_warnings
        .iter()
        .cloned()
        .chain(analyzer.warnings().iter().map(ToString::to_string))
        .collect()
}

/// Human mode prefixes warnings on stderr so stdout stays clean.
pub(crate) fn print_warnings(warnings: &[String]) {
    for warning in warnings {
        eprintln!("warning: {warning}");
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
