//! PNG texture management

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::archive::{AddonArchive, extension_is, file_name};
use crate::error::{Error, Result};

/// A PNG entry in the archive
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextureFile {
    /// File name
    pub name: String,
    /// Full archive path
    pub path: String,
    /// Uncompressed size in bytes
    pub size: usize,
}

/// Folder node of the texture tree
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TextureFolder {
    /// Folder name (empty for the archive root)
    pub name: String,
    /// Full folder path (empty for the archive root)
    pub path: String,
    /// Sub folders, sorted by name
    pub folders: BTreeMap<String, TextureFolder>,
    /// Textures directly in this folder, in archive order
    pub files: Vec<TextureFile>,
}

impl TextureFolder {
    /// Number of textures in this folder and everything below it
    #[must_use]
    pub fn file_count(&self) -> usize {
        self.files.len() + self.folders.values().map(TextureFolder::file_count).sum::<usize>()
    }

    fn render(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        let indent = "  ".repeat(depth);
        for folder in self.folders.values() {
            writeln!(f, "{indent}{}/ ({})", folder.name, folder.file_count())?;
            folder.render(f, depth + 1)?;
        }
        for file in &self.files {
            writeln!(f, "{indent}{} ({} bytes)", file.name, file.size)?;
        }
        Ok(())
    }
}

impl fmt::Display for TextureFolder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render(f, 0)
    }
}

/// All `.png` files in archive order
#[must_use]
pub fn list_textures(archive: &AddonArchive) -> Vec<TextureFile> {
    archive
        .files()
        .filter(|(path, _)| extension_is(path, "png"))
        .map(|(path, data)| TextureFile {
            name: file_name(path).to_string(),
            path: path.to_string(),
            size: data.len(),
        })
        .collect()
}

/// Folder tree of all textures
#[must_use]
pub fn texture_tree(archive: &AddonArchive) -> TextureFolder {
    let mut root = TextureFolder::default();

    for texture in list_textures(archive) {
        let parts: Vec<&str> = texture.path.split('/').collect();
        let mut current = &mut root;

        for (i, folder) in parts.iter().take(parts.len().saturating_sub(1)).enumerate() {
            current = current
                .folders
                .entry((*folder).to_string())
                .or_insert_with(|| TextureFolder {
                    name: (*folder).to_string(),
                    path: parts[..=i].join("/"),
                    ..TextureFolder::default()
                });
        }

        current.files.push(texture);
    }

    root
}

/// Add a texture under `folder` (empty for the archive root)
///
/// Returns the path written.
pub fn add_texture(archive: &mut AddonArchive, folder: &str, name: &str, data: Vec<u8>) -> String {
    let folder = folder.trim_matches('/');
    let path = if folder.is_empty() {
        name.to_string()
    } else {
        format!("{folder}/{name}")
    };
    archive.write(path.as_str(), data);
    tracing::debug!("Added texture {}", path);
    path
}

/// Replace an existing texture's bytes
///
/// # Errors
/// Returns [`Error::TextureNotFound`] if no file exists at `path`.
pub fn replace_texture(archive: &mut AddonArchive, path: &str, data: Vec<u8>) -> Result<()> {
    if !archive.is_file(path) {
        return Err(Error::TextureNotFound(path.to_string()));
    }
    archive.write(path, data);
    tracing::debug!("Replaced texture {}", path);
    Ok(())
}

/// Remove a texture
///
/// # Errors
/// Returns [`Error::TextureNotFound`] if no file exists at `path`.
pub fn remove_texture(archive: &mut AddonArchive, path: &str) -> Result<()> {
    if !archive.is_file(path) {
        return Err(Error::TextureNotFound(path.to_string()));
    }
    archive.remove(path);
    tracing::debug!("Removed texture {}", path);
    Ok(())
}

/// Bytes of a texture, for extraction
///
/// # Errors
/// Returns [`Error::TextureNotFound`] if no file exists at `path`.
pub fn extract_texture<'a>(archive: &'a AddonArchive, path: &str) -> Result<&'a [u8]> {
    archive
        .read_bytes(path)
        .map_err(|_| Error::TextureNotFound(path.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addon() -> AddonArchive {
        let mut addon = AddonArchive::new("tex.mcaddon");
        addon.write("R/textures/items/apple.png", vec![1, 2, 3]);
        addon.write("R/textures/items/pear.PNG", vec![1]);
        addon.write("R/textures/blocks/ore.png", vec![9; 10]);
        addon.write("R/textures/terrain.json", b"{}".to_vec());
        addon.write("pack_icon.png", vec![0; 4]);
        addon
    }

    #[test]
    fn test_list_and_tree() {
        let addon = addon();
        assert_eq!(list_textures(&addon).len(), 4);

        let tree = texture_tree(&addon);
        assert_eq!(tree.file_count(), 4);
        assert_eq!(tree.files[0].name, "pack_icon.png");

        let textures = &tree.folders["R"].folders["textures"];
        assert_eq!(textures.path, "R/textures");
        assert_eq!(textures.file_count(), 3);
        let names: Vec<_> = textures.folders.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["blocks", "items"]);
        assert!(tree.to_string().contains("items/ (2)"));
    }

    #[test]
    fn test_add_replace_remove() {
        let mut addon = addon();
        let path = add_texture(&mut addon, "R/textures/items/", "cherry.png", vec![7]);
        assert_eq!(path, "R/textures/items/cherry.png");
        assert_eq!(add_texture(&mut addon, "", "top.png", vec![]), "top.png");

        replace_texture(&mut addon, "R/textures/items/apple.png", vec![4, 4]).unwrap();
        assert_eq!(extract_texture(&addon, "R/textures/items/apple.png").unwrap(), &[4, 4]);

        remove_texture(&mut addon, "R/textures/items/pear.PNG").unwrap();
        assert!(!addon.contains("R/textures/items/pear.PNG"));

        assert!(matches!(
            replace_texture(&mut addon, "missing.png", vec![]),
            Err(Error::TextureNotFound(_))
        ));
        assert!(matches!(remove_texture(&mut addon, "missing.png"), Err(Error::TextureNotFound(_))));
    }
}
