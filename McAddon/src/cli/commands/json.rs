//! CLI commands for raw JSON files

use std::path::Path;

use anyhow::Context;

use super::{open_archive, output_path};
use crate::edit::set_json_file;

/// Print a JSON file as stored
pub fn show(path: &Path, file: &str) -> anyhow::Result<()> {
    let archive = open_archive(path)?;
    println!("{}", archive.read_text(file)?);
    Ok(())
}

/// Replace a JSON file's text if it parses
pub fn set(path: &Path, file: &str, input: &Path, output: Option<&Path>, suffix: &str) -> anyhow::Result<()> {
    let text = std::fs::read_to_string(input).with_context(|| format!("failed to read {}", input.display()))?;

    let mut archive = open_archive(path)?;
    let existed = archive.is_file(file);
    set_json_file(&mut archive, file, &text)?;

    let out = output_path(path, &archive, suffix, output);
    archive.save(&out)?;

    println!("{} {file}", if existed { "Updated" } else { "Created" });
    println!("Saved {}", out.display());
    Ok(())
}
