// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! gvrs - the gv CLI library.
//!
//! This crate provides the command surface of the `gv` tool, a read-only
//! graph analyzer for beads-style issue trackers. The analysis itself lives
//! in `gv_core`; this crate supplies the collaborators around it:
//!
//! - [`loader`] - JSONL files, daemon export documents, git history
//! - [`recipe`] - named filter/sort presets applied before analysis
//! - [`display`] / [`export`] - human text and Markdown rendering
//! - [`schema`] - JSON output shapes for robot consumers

mod cli;
mod commands;
mod display;
mod export;
mod schema;

pub mod error;
pub mod loader;
pub mod recipe;

pub use cli::{Cli, Command, OutputFormat};
pub use error::{Error, Result};

use clap::CommandFactory;
use clap_complete::generate;

/// Executes a parsed CLI command. This is the main entry point for library
/// users and provides a testable way to run commands without process
/// execution.
pub fn run(cli: Cli) -> Result<()> {
    let input = cli.input.as_deref();
    let recipe = cli.recipe.as_deref();
    match cli.command {
        Command::Insights { limit, output } => {
            commands::insights::run(input, recipe, limit, output)
        }
        Command::Plan { output } => commands::plan::run(input, recipe, output),
        Command::Priority { output } => commands::priority::run(input, recipe, output),
        Command::Diff { since, output } => commands::diff::run(input, recipe, &since, output),
        Command::Show { as_of } => commands::show::run(input, recipe, as_of.as_deref()),
        Command::Export { filepath } => commands::export::run(input, recipe, &filepath),
        Command::Recipes { output } => commands::recipes::run(output),
        Command::Completion { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "gv", &mut std::io::stdout());
            Ok(())
        }
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
