// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use clap::Parser;

#[test]
fn insights_defaults() {
    let cli = Cli::try_parse_from(["gv", "insights"]).unwrap();
    match cli.command {
        Command::Insights { limit, output } => {
            assert_eq!(limit, 50);
            assert_eq!(output, OutputFormat::Text);
        }
        _ => panic!("wrong command"),
    }
}

#[test]
fn insights_json_output() {
    let cli = Cli::try_parse_from(["gv", "insights", "--output", "json", "--limit", "5"]).unwrap();
    match cli.command {
        Command::Insights { limit, output } => {
            assert_eq!(limit, 5);
            assert_eq!(output, OutputFormat::Json);
        }
        _ => panic!("wrong command"),
    }
}

#[test]
fn global_flags_parse_anywhere() {
    let cli = Cli::try_parse_from(["gv", "plan", "-C", "/tmp", "--input", "x.jsonl", "-r", "stale"])
        .unwrap();
    assert_eq!(cli.directory.as_deref(), Some("/tmp"));
    assert_eq!(cli.input.as_deref(), Some("x.jsonl"));
    assert_eq!(cli.recipe.as_deref(), Some("stale"));
}

#[test]
fn diff_requires_since() {
    assert!(Cli::try_parse_from(["gv", "diff"]).is_err());
    let cli = Cli::try_parse_from(["gv", "diff", "--since", "HEAD~3"]).unwrap();
    match cli.command {
        Command::Diff { since, .. } => assert_eq!(since, "HEAD~3"),
        _ => panic!("wrong command"),
    }
}

#[test]
fn show_accepts_as_of() {
    let cli = Cli::try_parse_from(["gv", "show", "--as-of", "v1.0"]).unwrap();
    match cli.command {
        Command::Show { as_of } => assert_eq!(as_of.as_deref(), Some("v1.0")),
        _ => panic!("wrong command"),
    }
}

#[test]
fn export_takes_a_filepath() {
    let cli = Cli::try_parse_from(["gv", "export", "report.md"]).unwrap();
    match cli.command {
        Command::Export { filepath } => assert_eq!(filepath, "report.md"),
        _ => panic!("wrong command"),
    }
}

#[test]
fn unknown_subcommand_is_rejected() {
    assert!(Cli::try_parse_from(["gv", "frobnicate"]).is_err());
}

#[test]
fn short_output_flag_works() {
    let cli = Cli::try_parse_from(["gv", "priority", "-o", "json"]).unwrap();
    match cli.command {
        Command::Priority { output } => assert_eq!(output, OutputFormat::Json),
        _ => panic!("wrong command"),
    }
}
