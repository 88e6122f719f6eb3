// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Schema types for `gv recipes` JSON output.

use schemars::JsonSchema;
use serde::Serialize;

/// One recipe in the listing.
#[derive(JsonSchema, Serialize)]
pub struct RecipeJson {
    pub name: String,
    pub description: String,
    /// Where the recipe came from: builtin, user, or project.
    pub source: String,
}

/// JSON output structure for the recipes command.
#[derive(JsonSchema, Serialize)]
pub struct RecipesOutputJson {
    pub recipes: Vec<RecipeJson>,
}
