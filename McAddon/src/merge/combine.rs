//! Combining two addons
//!
//! Files from the source addon are folded into a copy of the destination,
//! section by section. New files are copied byte for byte, colliding
//! `.json` files are deep-merged (arrays unique-appended, except in
//! manifests), colliding `.lang` files are merged by key, and any other
//! collision keeps the destination file.

use std::fmt;

use serde::Serialize;

use super::json::deep_merge;
use super::lang::merge_lang;
use crate::archive::{AddonArchive, extension_is};
use crate::error::Result;
use crate::progress::{AddonPhase, AddonProgress, ProgressCallback};
use crate::validate::{StructurePolicy, validate_structure};

/// File counts for one merged section
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SectionStats {
    /// Files copied because the destination lacked them
    pub added: usize,
    /// Colliding `.json`/`.lang` files merged
    pub merged: usize,
    /// Colliding files left as they were in the destination
    pub skipped: usize,
}

impl SectionStats {
    /// Total number of source files visited
    #[must_use]
    pub fn total(&self) -> usize {
        self.added + self.merged + self.skipped
    }
}

impl std::ops::Add for SectionStats {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            added: self.added + other.added,
            merged: self.merged + other.merged,
            skipped: self.skipped + other.skipped,
        }
    }
}

impl fmt::Display for SectionStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} added, {} merged, {} skipped",
            self.added, self.merged, self.skipped
        )
    }
}

/// Result of combining two addons
#[derive(Debug, Clone)]
pub struct CombineResult {
    /// The combined archive (named after the destination)
    pub archive: AddonArchive,
    /// Behavior section counts
    pub behavior: SectionStats,
    /// Resources section counts
    pub resources: SectionStats,
}

impl CombineResult {
    /// Counts summed over both sections
    #[must_use]
    pub fn totals(&self) -> SectionStats {
        self.behavior + self.resources
    }

    /// Multi-line human-readable summary
    #[must_use]
    pub fn summary(&self) -> String {
        let totals = self.totals();
        format!(
            "{} file(s) added from source\n{} file(s) merged\n{} file(s) skipped (collisions)\nBehavior: {}\nResources: {}",
            totals.added, totals.merged, totals.skipped, self.behavior, self.resources
        )
    }
}

/// Combine `source` into a copy of `dest`
///
/// # Errors
/// Returns [`crate::Error::InvalidStructure`] if either archive does not have
/// exactly one `*Behavior` and one `*Resources` folder with nothing else at
/// the top level. Nothing is merged in that case.
pub fn combine(source: &AddonArchive, dest: &AddonArchive) -> Result<CombineResult> {
    combine_with_progress(source, dest, &|_: &AddonProgress| {})
}

/// Combine two addons with progress reporting
///
/// # Errors
/// See [`combine`].
pub fn combine_with_progress(
    source: &AddonArchive,
    dest: &AddonArchive,
    progress: ProgressCallback,
) -> Result<CombineResult> {
    let (source_behavior, source_resources) =
        validate_structure(source, StructurePolicy::Strict).into_sections(source.name())?;
    let (dest_behavior, dest_resources) =
        validate_structure(dest, StructurePolicy::Strict).into_sections(dest.name())?;

    let mut combined = dest.clone();

    progress(&AddonProgress::with_file(AddonPhase::MergingBehavior, 1, 2, &source_behavior));
    let behavior = merge_section(source, &mut combined, &source_behavior, &dest_behavior);

    progress(&AddonProgress::with_file(AddonPhase::MergingResources, 2, 2, &source_resources));
    let resources = merge_section(source, &mut combined, &source_resources, &dest_resources);

    progress(&AddonProgress::new(AddonPhase::Complete, 2, 2));

    let result = CombineResult {
        archive: combined,
        behavior,
        resources,
    };
    tracing::info!(
        "Combined {} into {}: {}",
        source.name(),
        dest.name(),
        result.totals()
    );
    Ok(result)
}

/// Merge every file under `source_section/` into `dest_section/` of `combined`
pub fn merge_section(
    source: &AddonArchive,
    combined: &mut AddonArchive,
    source_section: &str,
    dest_section: &str,
) -> SectionStats {
    let mut stats = SectionStats::default();
    let prefix = format!("{source_section}/");

    for (source_path, data) in source.files() {
        let Some(relative) = source_path.strip_prefix(&prefix) else {
            continue;
        };
        let dest_path = format!("{dest_section}/{relative}");

        if !combined.is_file(&dest_path) {
            combined.write(dest_path.as_str(), data.to_vec());
            tracing::debug!("Added {}", dest_path);
            stats.added += 1;
            continue;
        }

        let merged = if extension_is(source_path, "json") {
            let keep_arrays = relative.to_lowercase().ends_with("manifest.json");
            merge_json_entry(source, combined, source_path, &dest_path, !keep_arrays)
        } else if extension_is(source_path, "lang") {
            merge_lang_entry(source, combined, source_path, &dest_path)
        } else {
            false
        };

        if merged {
            tracing::debug!("Merged {}", dest_path);
            stats.merged += 1;
        } else {
            tracing::debug!("Skipped collision {}", dest_path);
            stats.skipped += 1;
        }
    }

    stats
}

fn merge_json_entry(
    source: &AddonArchive,
    combined: &mut AddonArchive,
    source_path: &str,
    dest_path: &str,
    merge_arrays: bool,
) -> bool {
    let (Ok(source_value), Ok(dest_value)) = (source.read_json(source_path), combined.read_json(dest_path)) else {
        return false;
    };
    let merged = deep_merge(&dest_value, &source_value, merge_arrays);
    combined.write_json(dest_path, &merged).is_ok()
}

fn merge_lang_entry(source: &AddonArchive, combined: &mut AddonArchive, source_path: &str, dest_path: &str) -> bool {
    let (Ok(source_text), Ok(dest_text)) = (source.read_text(source_path), combined.read_text(dest_path)) else {
        return false;
    };
    combined.write_text(dest_path, &merge_lang(&dest_text, &source_text));
    true
}
