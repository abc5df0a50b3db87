//! CLI command for adding recipes

use std::path::Path;

use anyhow::Context;
use serde_json::Value;

use super::{open_archive, output_path};
use crate::edit::{add_recipe, default_recipe_file_name};

/// Add a recipe file to the behavior pack
pub fn add(
    path: &Path,
    recipe: &Path,
    name: Option<&str>,
    output: Option<&Path>,
    suffix: &str,
) -> anyhow::Result<()> {
    let text = std::fs::read_to_string(recipe).with_context(|| format!("failed to read {}", recipe.display()))?;
    let recipe_json: Value =
        serde_json::from_str(&text).with_context(|| format!("{} is not valid JSON", recipe.display()))?;

    let archive = open_archive(path)?;
    let file_name = name.map_or_else(|| default_recipe_file_name(&recipe_json), str::to_string);
    let (modified, written) = add_recipe(&archive, &file_name, &recipe_json)?;

    let out = output_path(path, &archive, suffix, output);
    modified.save(&out)?;

    println!("Added {written}");
    println!("Saved {}", out.display());
    Ok(())
}
