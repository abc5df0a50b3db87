//! Structural anomaly detection
//!
//! Everything reported here is a warning.

use std::collections::HashSet;

use indexmap::{IndexMap, IndexSet};
use serde_json::Value;

use super::{Finding, ValidationReport};
use crate::archive::{AddonArchive, file_name, split_segments};
use crate::pack::content::{BLOCK_KEY, ITEM_KEY, SHAPED_RECIPE_KEY, SHAPELESS_RECIPE_KEY};
use crate::pack::truthy_field;

/// Folder names expected to hold files
pub const IMPORTANT_FOLDERS: [&str; 5] = ["recipes", "items", "blocks", "texts", "textures"];

/// Run the anomaly check group
pub fn detect_anomalies(archive: &AddonArchive, report: &mut ValidationReport) {
    check_empty_folders(archive, report);
    check_duplicate_identifiers(archive, report);
    check_file_names(archive, report);
}

fn check_empty_folders(archive: &AddonArchive, report: &mut ValidationReport) {
    let mut folders: IndexSet<String> = IndexSet::new();
    let mut with_files: HashSet<String> = HashSet::new();

    for (path, entry) in archive.entries() {
        let parts = split_segments(path);
        let ancestors = if entry.is_dir() { parts.len() } else { parts.len().saturating_sub(1) };

        for depth in 1..=ancestors {
            let folder = parts[..depth].join("/");
            if !entry.is_dir() {
                with_files.insert(folder.clone());
            }
            folders.insert(folder);
        }
    }

    for folder in &folders {
        let name = file_name(folder).to_lowercase();
        if IMPORTANT_FOLDERS.contains(&name.as_str()) && !with_files.contains(folder) {
            report.warning(Finding::at(
                "Empty Important Folder",
                "Folder appears to be empty but typically should contain files.",
                folder.clone(),
            ));
        }
    }
}

/// Identifier a document declares, checking item, block, shaped, shapeless in turn
///
/// The first section present decides; a present section without an
/// identifier yields `None` without trying the next one.
fn declared_identifier(document: &Value) -> Option<String> {
    let section = [ITEM_KEY, BLOCK_KEY, SHAPED_RECIPE_KEY, SHAPELESS_RECIPE_KEY]
        .into_iter()
        .find_map(|key| truthy_field(document, key))?;

    section
        .get("description")
        .and_then(|description| truthy_field(description, "identifier"))
        .and_then(Value::as_str)
        .map(str::to_string)
}

fn check_duplicate_identifiers(archive: &AddonArchive, report: &mut ValidationReport) {
    let mut definitions: IndexMap<String, Vec<String>> = IndexMap::new();

    for path in archive.files_with_extension("json") {
        let Ok(text) = archive.read_text(path) else {
            continue;
        };
        let Ok(document) = serde_json::from_str::<Value>(&text) else {
            continue;
        };
        if let Some(identifier) = declared_identifier(&document) {
            definitions.entry(identifier).or_default().push(path.to_string());
        }
    }

    for (identifier, paths) in definitions {
        if paths.len() > 1 {
            report.warning(Finding::new(
                "Duplicate Identifier",
                format!(
                    "Identifier \"{identifier}\" is defined in {} files: {}",
                    paths.len(),
                    paths.join(", ")
                ),
            ));
        }
    }
}

fn check_file_names(archive: &AddonArchive, report: &mut ValidationReport) {
    for (path, _) in archive.files() {
        let name = file_name(path);

        if name.contains(' ') {
            report.warning(Finding::at(
                "Spaces in Filename",
                "Filenames with spaces may cause issues. Consider using underscores instead.",
                path,
            ));
        }

        if name != name.to_lowercase() && !path.to_lowercase().ends_with("manifest.json") {
            report.warning(Finding::at(
                "Uppercase in Filename",
                "Filenames should be lowercase for consistency.",
                path,
            ));
        }
    }
}
