//! CLI commands for texture operations

use std::path::Path;

use anyhow::Context;

use super::{open_archive, output_path};
use crate::archive::file_name;
use crate::cli::progress::PICTURE;
use crate::edit::{
    add_texture, extract_texture, list_textures, remove_texture, replace_texture, texture_tree,
};

/// List textures, flat or as a tree
pub fn list(path: &Path, tree: bool) -> anyhow::Result<()> {
    let archive = open_archive(path)?;

    if tree {
        let root = texture_tree(&archive);
        println!("{PICTURE}{} ({} texture(s))", archive.name(), root.file_count());
        print!("{root}");
        return Ok(());
    }

    let textures = list_textures(&archive);
    if textures.is_empty() {
        println!("No textures found in {}", archive.name());
        return Ok(());
    }
    for texture in &textures {
        println!("  {:>10}  {}", texture.size, texture.path);
    }
    println!("\nTotal: {} texture(s)", textures.len());
    Ok(())
}

/// Add a PNG under `folder`
pub fn add(
    path: &Path,
    png: &Path,
    folder: &str,
    name: Option<&str>,
    output: Option<&Path>,
    suffix: &str,
) -> anyhow::Result<()> {
    let data = std::fs::read(png).with_context(|| format!("failed to read {}", png.display()))?;
    let name = match name {
        Some(name) => name.to_string(),
        None => png
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .context("PNG path has no file name")?,
    };

    let mut archive = open_archive(path)?;
    let written = add_texture(&mut archive, folder, &name, data);
    save(path, &archive, output, suffix, &format!("Added {written}"))
}

/// Replace an existing texture
pub fn replace(path: &Path, texture: &str, png: &Path, output: Option<&Path>, suffix: &str) -> anyhow::Result<()> {
    let data = std::fs::read(png).with_context(|| format!("failed to read {}", png.display()))?;
    let mut archive = open_archive(path)?;
    replace_texture(&mut archive, texture, data)?;
    save(path, &archive, output, suffix, &format!("Replaced {texture}"))
}

/// Remove a texture
pub fn remove(path: &Path, texture: &str, output: Option<&Path>, suffix: &str) -> anyhow::Result<()> {
    let mut archive = open_archive(path)?;
    remove_texture(&mut archive, texture)?;
    save(path, &archive, output, suffix, &format!("Removed {texture}"))
}

/// Write a texture out to disk
pub fn extract(path: &Path, texture: &str, destination: Option<&Path>) -> anyhow::Result<()> {
    let archive = open_archive(path)?;
    let data = extract_texture(&archive, texture)?;
    let dest = destination.map_or_else(|| Path::new(file_name(texture)).to_path_buf(), Path::to_path_buf);
    std::fs::write(&dest, data)?;
    println!("Wrote {} ({} bytes)", dest.display(), data.len());
    Ok(())
}

fn save(
    input: &Path,
    archive: &crate::archive::AddonArchive,
    output: Option<&Path>,
    suffix: &str,
    message: &str,
) -> anyhow::Result<()> {
    let out = output_path(input, archive, suffix, output);
    archive.save(&out)?;
    println!("{message}");
    println!("Saved {}", out.display());
    Ok(())
}
