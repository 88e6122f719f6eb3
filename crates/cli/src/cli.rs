// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

/// Output format for commands supporting structured output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

const COMMANDS_HELP: &str = "\
Analysis:
  insights    Graph centrality and health insights
  plan        Dependency-respecting execution plan
  priority    Priority adjustment recommendations
  diff        Changes since a historical revision
  show        List loaded issues (optionally at a past revision)

Reporting & Setup:
  export      Write a Markdown status report
  recipes     List available filter/sort recipes
  completion  Generate shell completions";

const QUICKSTART_HELP: &str = "\
Get started:
  gv plan                    What can be worked on right now
  gv insights --output json  Full graph analysis for agents
  gv diff --since HEAD~10    What changed over the last ten commits
  gv -r actionable show      Apply a recipe before display";

#[derive(Parser)]
#[command(name = "gv")]
#[command(about = "A read-only graph analyzer for beads-style issue trackers")]
#[command(
    long_about = "A read-only graph analyzer for beads-style issue trackers.\n\n\
    Loads issue records, builds the dependency graph, and reports insights,\n\
    execution plans, priority recommendations, and snapshot diffs."
)]
#[command(version)]
#[command(before_help = COMMANDS_HELP)]
#[command(after_help = QUICKSTART_HELP)]
pub struct Cli {
    /// Change to this directory before doing anything
    #[arg(short = 'C', long, global = true, value_name = "DIR")]
    pub directory: Option<String>,

    /// Read issues from this file instead of discovering .beads/issues.jsonl
    #[arg(long, global = true, value_name = "FILE")]
    pub input: Option<String>,

    /// Apply a named recipe (filter + sort) before analysis
    #[arg(short = 'r', long, global = true, value_name = "NAME")]
    pub recipe: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Graph centrality and health insights
    #[command(after_help = "Examples:\n  \
        gv insights                 Top bottlenecks, keystones, cycles\n  \
        gv insights --limit 10      Shorter lists\n  \
        gv insights --output json   Full stats for agents")]
    Insights {
        /// Entries per list
        #[arg(long, default_value_t = gv_core::DEFAULT_INSIGHT_LIMIT)]
        limit: usize,

        /// Output format
        #[arg(long, short, value_enum, default_value_t = OutputFormat::Text)]
        output: OutputFormat,
    },

    /// Dependency-respecting execution plan
    Plan {
        /// Output format
        #[arg(long, short, value_enum, default_value_t = OutputFormat::Text)]
        output: OutputFormat,
    },

    /// Priority adjustment recommendations
    Priority {
        /// Output format
        #[arg(long, short, value_enum, default_value_t = OutputFormat::Text)]
        output: OutputFormat,
    },

    /// Changes since a historical revision
    #[command(after_help = "Examples:\n  \
        gv diff --since HEAD~10        Compare against ten commits ago\n  \
        gv diff --since v1.4           Compare against a tag\n  \
        gv diff --since 2026-07-01     Compare against a date\n  \
        gv diff --since main -o json   Machine-readable diff")]
    Diff {
        /// Revision to compare against (SHA, branch, tag, HEAD~N, or YYYY-MM-DD)
        #[arg(long, value_name = "REV")]
        since: String,

        /// Output format
        #[arg(long, short, value_enum, default_value_t = OutputFormat::Text)]
        output: OutputFormat,
    },

    /// List loaded issues (optionally at a past revision)
    Show {
        /// View state at a point in time (SHA, branch, tag, or YYYY-MM-DD)
        #[arg(long, value_name = "REV")]
        as_of: Option<String>,
    },

    /// Write a Markdown status report
    Export {
        /// Destination file (e.g. report.md)
        filepath: String,
    },

    /// List available filter/sort recipes
    Recipes {
        /// Output format
        #[arg(long, short, value_enum, default_value_t = OutputFormat::Text)]
        output: OutputFormat,
    },

    /// Generate shell completions
    Completion {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
