//! Addon validation
//!
//! Five independent check groups run in order and only ever append
//! [`Finding`]s; none of them aborts the run:
//!
//! 1. [`structure`] - top-level folder layout
//! 2. [`manifest`] - manifest completeness and pack presence
//! 3. [`json`] - JSON syntax and per-folder document shape
//! 4. [`localization`] - display-name coverage in `.lang` files
//! 5. [`anomalies`] - empty folders, duplicate identifiers, file naming
//!
//! A report passes when it has no errors; warnings never fail it.
//! [`batch`] runs the same checks over every addon below a folder.

pub mod anomalies;
pub mod batch;
pub mod json;
pub mod localization;
pub mod manifest;
pub mod structure;

use std::fmt;

use serde::Serialize;

use crate::archive::AddonArchive;
use crate::progress::{AddonPhase, AddonProgress, ProgressCallback};

pub use batch::{BatchValidationResult, batch_validate, find_addon_files};
pub use structure::{StructurePolicy, StructureReport, validate_structure};

/// Default threshold below which a manifest `format_version` is flagged
pub const DEFAULT_MIN_FORMAT_VERSION: &str = "1.20.0";

/// Default number of identifiers listed in the missing display name warning
pub const DEFAULT_MISSING_NAME_PREVIEW: usize = 5;

/// A single validation error or warning
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    /// Short title
    pub title: String,
    /// Human-readable explanation
    pub details: String,
    /// Archive path the finding refers to, if any
    pub path: Option<String>,
}

impl Finding {
    /// Finding without a path
    #[must_use]
    pub fn new(title: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            details: details.into(),
            path: None,
        }
    }

    /// Finding tied to an archive path
    #[must_use]
    pub fn at(title: impl Into<String>, details: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            details: details.into(),
            path: Some(path.into()),
        }
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title, self.details)?;
        if let Some(path) = &self.path {
            write!(f, " ({path})")?;
        }
        Ok(())
    }
}

/// Collected findings of a validation run
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationReport {
    /// Name of the validated archive
    pub archive: String,
    /// Errors (any error fails validation)
    pub errors: Vec<Finding>,
    /// Warnings (never fail validation)
    pub warnings: Vec<Finding>,
    /// Whether `errors` is empty
    pub passed: bool,
}

impl ValidationReport {
    /// Empty report for an archive
    #[must_use]
    pub fn new(archive: impl Into<String>) -> Self {
        Self {
            archive: archive.into(),
            errors: Vec::new(),
            warnings: Vec::new(),
            passed: true,
        }
    }

    /// Record an error
    pub fn error(&mut self, finding: Finding) {
        self.errors.push(finding);
        self.passed = false;
    }

    /// Record a warning
    pub fn warning(&mut self, finding: Finding) {
        self.warnings.push(finding);
    }

    /// Number of errors
    #[must_use]
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    /// Number of warnings
    #[must_use]
    pub fn warning_count(&self) -> usize {
        self.warnings.len()
    }

    /// One-line summary
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "{}: {} ({} error(s), {} warning(s))",
            self.archive,
            if self.passed { "passed" } else { "failed" },
            self.error_count(),
            self.warning_count()
        )
    }

    /// Recompute `passed` from the error list
    fn finish(&mut self) {
        self.passed = self.errors.is_empty();
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.summary())?;
        for finding in &self.errors {
            writeln!(f, "  [error] {finding}")?;
        }
        for finding in &self.warnings {
            writeln!(f, "  [warning] {finding}")?;
        }
        Ok(())
    }
}

/// Tunables for a validation run
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationOptions {
    /// Manifest `format_version` values below this are warned about
    pub min_format_version: String,
    /// How many identifiers the missing display name warning lists
    pub missing_name_preview: usize,
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self {
            min_format_version: DEFAULT_MIN_FORMAT_VERSION.to_string(),
            missing_name_preview: DEFAULT_MISSING_NAME_PREVIEW,
        }
    }
}

/// Validate an archive with default options
#[must_use]
pub fn validate(archive: &AddonArchive) -> ValidationReport {
    validate_with_options(archive, &ValidationOptions::default(), &|_: &AddonProgress| {})
}

/// Validate an archive, reporting one progress step per check group
#[must_use]
pub fn validate_with_progress(archive: &AddonArchive, progress: ProgressCallback) -> ValidationReport {
    validate_with_options(archive, &ValidationOptions::default(), progress)
}

/// Validate an archive with explicit options
#[must_use]
pub fn validate_with_options(
    archive: &AddonArchive,
    options: &ValidationOptions,
    progress: ProgressCallback,
) -> ValidationReport {
    const TOTAL: usize = 5;

    let mut report = ValidationReport::new(archive.name());

    progress(&AddonProgress::new(AddonPhase::CheckingStructure, 1, TOTAL));
    let layout = validate_structure(archive, StructurePolicy::Lenient);
    for finding in layout.errors {
        report.error(finding);
    }
    for finding in layout.warnings {
        report.warning(finding);
    }

    progress(&AddonProgress::new(AddonPhase::CheckingManifests, 2, TOTAL));
    manifest::check_manifests(archive, options, &mut report);

    progress(&AddonProgress::new(AddonPhase::CheckingJson, 3, TOTAL));
    json::check_json_files(archive, &mut report);

    progress(&AddonProgress::new(AddonPhase::CheckingLocalization, 4, TOTAL));
    localization::check_display_names(archive, options, &mut report);

    progress(&AddonProgress::new(AddonPhase::DetectingAnomalies, 5, TOTAL));
    anomalies::detect_anomalies(archive, &mut report);

    report.finish();
    progress(&AddonProgress::new(AddonPhase::Complete, TOTAL, TOTAL));

    tracing::info!("{}", report.summary());
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn test_finding_display() {
        let finding = Finding::at("Missing Pack UUID", "no uuid", "B/manifest.json");
        assert_eq!(finding.to_string(), "Missing Pack UUID: no uuid (B/manifest.json)");
    }

    #[test]
    fn test_report_pass_state() {
        let mut report = ValidationReport::new("x.mcaddon");
        report.warning(Finding::new("W", "w"));
        assert!(report.passed);
        report.error(Finding::new("E", "e"));
        assert!(!report.passed);
        assert_eq!(report.summary(), "x.mcaddon: failed (1 error(s), 1 warning(s))");
    }

    #[test]
    fn test_progress_steps() {
        let phases = Mutex::new(Vec::new());
        let addon = AddonArchive::new("empty.mcaddon");
        let report = validate_with_progress(&addon, &|p: &AddonProgress| {
            phases.lock().unwrap().push(p.phase);
        });

        assert!(!report.passed);
        let phases = phases.into_inner().unwrap();
        assert_eq!(phases.len(), 6);
        assert_eq!(phases[0], AddonPhase::CheckingStructure);
        assert_eq!(phases[5], AddonPhase::Complete);
    }
}
