//! Validating every addon below a folder

use std::path::{Path, PathBuf};

use serde::Serialize;
use walkdir::WalkDir;

use super::{ValidationOptions, ValidationReport, validate_with_options};
use crate::archive::AddonArchive;
use crate::error::{Error, Result};
use crate::progress::{AddonPhase, AddonProgress, ProgressCallback};

/// Archive extensions picked up by [`find_addon_files`]
pub const ADDON_EXTENSIONS: [&str; 1] = ["mcaddon"];

/// Result of validating many archives
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchValidationResult {
    /// Report per archive that could be opened, in path order
    pub reports: Vec<ValidationReport>,
    /// Archives that could not be opened, with the reason
    pub unreadable: Vec<(PathBuf, String)>,
}

impl BatchValidationResult {
    /// Number of archives that passed
    #[must_use]
    pub fn passed_count(&self) -> usize {
        self.reports.iter().filter(|r| r.passed).count()
    }

    /// Whether every archive opened and passed
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.unreadable.is_empty() && self.reports.iter().all(|r| r.passed)
    }
}

/// Find all addon archives in a directory recursively
///
/// # Returns
/// A sorted list of paths.
///
/// # Errors
/// Returns [`Error::WalkDirError`] if the directory cannot be traversed.
pub fn find_addon_files<P: AsRef<Path>>(dir: P) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir).follow_links(true) {
        let entry = entry.map_err(|e| Error::WalkDirError(e.to_string()))?;
        let path = entry.path();
        let is_addon = path
            .extension()
            .is_some_and(|ext| ADDON_EXTENSIONS.iter().any(|a| ext.eq_ignore_ascii_case(a)));
        if path.is_file() && is_addon {
            files.push(path.to_path_buf());
        }
    }
    files.sort();
    Ok(files)
}

/// Open and validate each archive in turn
///
/// An archive that fails to open is recorded in
/// [`BatchValidationResult::unreadable`] and the batch continues.
#[must_use]
pub fn batch_validate(
    paths: &[PathBuf],
    options: &ValidationOptions,
    progress: ProgressCallback,
) -> BatchValidationResult {
    let mut result = BatchValidationResult::default();
    let total = paths.len();

    for (i, path) in paths.iter().enumerate() {
        progress(&AddonProgress::with_file(
            AddonPhase::ValidatingArchive,
            i + 1,
            total,
            path.display().to_string(),
        ));

        match AddonArchive::open(path) {
            Ok(archive) => {
                result
                    .reports
                    .push(validate_with_options(&archive, options, &|_: &AddonProgress| {}));
            }
            Err(e) => {
                tracing::warn!("Cannot open {}: {}", path.display(), e);
                result.unreadable.push((path.clone(), e.to_string()));
            }
        }
    }

    progress(&AddonProgress::new(AddonPhase::Complete, total, total));
    tracing::info!(
        "Validated {} archive(s): {} passed, {} unreadable",
        total,
        result.passed_count(),
        result.unreadable.len()
    );
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_find_and_validate() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("nested");
        fs::create_dir_all(&nested).unwrap();

        let mut addon = AddonArchive::new("good.mcaddon");
        addon.write_text("GBehavior/manifest.json", "{}");
        addon.save(nested.join("good.MCADDON")).unwrap();
        fs::write(dir.path().join("broken.mcaddon"), b"not a zip").unwrap();
        fs::write(dir.path().join("notes.txt"), b"x").unwrap();

        let files = find_addon_files(dir.path()).unwrap();
        assert_eq!(files.len(), 2);

        let result = batch_validate(&files, &ValidationOptions::default(), &|_: &AddonProgress| {});
        assert_eq!(result.reports.len(), 1);
        assert_eq!(result.unreadable.len(), 1);
        assert!(!result.all_passed());
    }

    #[test]
    fn test_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            find_addon_files(dir.path().join("absent")),
            Err(Error::WalkDirError(_))
        ));
    }
}
