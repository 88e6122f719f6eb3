// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use crate::display::format_issue_line;
use crate::error::Result;
use crate::loader::git;

use super::{load_issues, print_warnings};

pub fn run(input: Option<&str>, recipe: Option<&str>, as_of: Option<&str>) -> Result<()> {
    let (issues, warnings) = match as_of {
        Some(rev) => {
            let (snapshot, warnings) = git::load_at(rev)?;
            println!("Issues at {}:", snapshot.revision);
            (snapshot.issues, warnings)
        }
        None => {
            let loaded = load_issues(input, recipe)?;
            (loaded.issues, loaded.warnings)
        }
    };
    print_warnings(&warnings);

    if issues.is_empty() {
        println!("No issues found");
        return Ok(());
    }
    for issue in &issues {
        println!("{}", format_issue_line(issue));
    }
    Ok(())
}

#[cfg(test)]
#[path = "show_tests.rs"]
mod tests;
