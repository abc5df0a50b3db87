//! Top-level folder layout check
//!
//! An `.mcaddon` must hold exactly one folder ending in `Behavior`, exactly
//! one ending in `Resources`, and no loose files at the root.

use serde::Serialize;

use super::Finding;
use crate::archive::AddonArchive;
use crate::error::{Error, Result};
use crate::pack::PackKind;

/// How strictly extra top-level folders are treated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StructurePolicy {
    /// Extra folders are a warning (validation)
    #[default]
    Lenient,
    /// Extra folders are an error (combine precondition)
    Strict,
}

/// Outcome of the layout check
#[derive(Debug, Clone, Default, Serialize)]
pub struct StructureReport {
    /// Layout errors
    pub errors: Vec<Finding>,
    /// Layout warnings
    pub warnings: Vec<Finding>,
    /// The single `*Behavior` folder, when exactly one exists
    pub behavior_folder: Option<String>,
    /// The single `*Resources` folder, when exactly one exists
    pub resources_folder: Option<String>,
}

impl StructureReport {
    /// Whether no layout errors were found
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Both section folders, or the first error as an [`Error::InvalidStructure`]
    ///
    /// # Errors
    /// Returns the first recorded error when the layout is not valid.
    pub fn into_sections(self, archive_name: &str) -> Result<(String, String)> {
        if let Some(first) = self.errors.into_iter().next() {
            return Err(Error::InvalidStructure {
                archive: archive_name.to_string(),
                details: first.details,
            });
        }
        match (self.behavior_folder, self.resources_folder) {
            (Some(behavior), Some(resources)) => Ok((behavior, resources)),
            _ => Err(Error::InvalidStructure {
                archive: archive_name.to_string(),
                details: "missing Behavior or Resources folder".to_string(),
            }),
        }
    }
}

/// Check the top-level layout of an archive
#[must_use]
pub fn validate_structure(archive: &AddonArchive, policy: StructurePolicy) -> StructureReport {
    let mut report = StructureReport::default();
    let items = archive.top_level_items();
    let strict = policy == StructurePolicy::Strict;

    for (name, item) in &items {
        if item.is_file {
            let details = if strict {
                format!("Top-level files are not allowed. Found file: {name}")
            } else {
                "Top-level files are not allowed in MCADDON packages.".to_string()
            };
            report
                .errors
                .push(Finding::at("Invalid Structure", details, name.clone()));
        }
    }

    let folders: Vec<&str> = items
        .iter()
        .filter(|(_, item)| item.is_dir)
        .map(|(name, _)| name.as_str())
        .collect();

    for kind in PackKind::all() {
        let suffix = kind.folder_suffix();
        let matching: Vec<&str> = folders
            .iter()
            .copied()
            .filter(|name| name.ends_with(suffix))
            .collect();

        let label = match kind {
            PackKind::Behavior => "Behavior Pack",
            PackKind::Resources => "Resources Pack",
        };

        match matching.as_slice() {
            [] => report.errors.push(Finding::new(
                format!("Missing {label}"),
                format!("No folder ending with \"{suffix}\" found at top level."),
            )),
            [single] => {
                let folder = Some((*single).to_string());
                match kind {
                    PackKind::Behavior => report.behavior_folder = folder,
                    PackKind::Resources => report.resources_folder = folder,
                }
            }
            many => report.errors.push(Finding::new(
                format!("Multiple {label}s"),
                format!(
                    "Multiple folders ending with \"{suffix}\" found: {}",
                    many.join(", ")
                ),
            )),
        }
    }

    let extra: Vec<&str> = folders
        .iter()
        .copied()
        .filter(|name| !name.ends_with("Behavior") && !name.ends_with("Resources"))
        .collect();

    if !extra.is_empty() {
        let list = extra.join(", ");
        if strict {
            report.errors.push(Finding::new(
                "Extra Top-Level Folders",
                format!(
                    "Extra top-level folders found: {list}. Only Behavior and Resources folders are allowed."
                ),
            ));
        } else {
            report.warnings.push(Finding::new(
                "Extra Top-Level Folders",
                format!("Found unexpected top-level folders: {list}"),
            ));
        }
    }

    report
}
