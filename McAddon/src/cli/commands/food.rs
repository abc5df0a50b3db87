//! CLI command for adding food effects

use std::path::Path;
use std::time::Instant;

use super::{open_archive, output_path};
use crate::cli::progress::{DISK, GEAR, LOOKING_GLASS, print_done, print_step};
use crate::error::Error;
use crate::migrate::{FoodEffect, apply_food_effects};
use crate::pack::find_item;

/// Add effects to a food item and save the modified addon
pub fn execute(
    path: &Path,
    identifier: &str,
    effects: &[FoodEffect],
    output: Option<&Path>,
    suffix: &str,
    quiet: bool,
) -> anyhow::Result<()> {
    let start = Instant::now();

    if !quiet {
        print_step(1, 3, LOOKING_GLASS, &format!("Finding {identifier}..."));
    }
    let archive = open_archive(path)?;
    let item = find_item(&archive, identifier).ok_or_else(|| Error::ItemNotFound(identifier.to_string()))?;

    if !quiet {
        print_step(2, 3, GEAR, &format!("Adding {} effect(s)...", effects.len()));
    }
    let outcome = apply_food_effects(&archive, &item, effects)?;

    let out = output_path(path, &archive, suffix, output);
    if !quiet {
        print_step(3, 3, DISK, &format!("Writing {}...", out.display()));
    }
    outcome.archive.save(&out)?;

    println!("Behavior item: {}", outcome.behavior_path);
    if let Some(resource) = &outcome.resource_path {
        println!("Resource item: {resource}");
    }
    for warning in &outcome.warnings {
        println!("  - {warning}");
    }
    println!("Saved {}", out.display());

    if !quiet {
        print_done(start.elapsed());
    }
    Ok(())
}
