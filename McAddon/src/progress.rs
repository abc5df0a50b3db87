//! Progress reporting for multi-step addon operations

/// Progress callback type for addon operations
pub type ProgressCallback<'a> = &'a (dyn Fn(&AddonProgress) + Sync + Send);

/// Progress information during addon operations
#[derive(Debug, Clone)]
pub struct AddonProgress {
    /// Current operation phase
    pub phase: AddonPhase,
    /// Current step number (1-indexed)
    pub current: usize,
    /// Total number of steps
    pub total: usize,
    /// Current file being processed (if applicable)
    pub current_file: Option<String>,
}

impl AddonProgress {
    /// Create a new progress update
    #[must_use]
    pub fn new(phase: AddonPhase, current: usize, total: usize) -> Self {
        Self {
            phase,
            current,
            total,
            current_file: None,
        }
    }

    /// Create a progress update with a file name
    #[must_use]
    pub fn with_file(phase: AddonPhase, current: usize, total: usize, file: impl Into<String>) -> Self {
        Self {
            phase,
            current,
            total,
            current_file: Some(file.into()),
        }
    }

    /// Get the progress percentage (0.0 - 1.0)
    #[must_use]
    pub fn percentage(&self) -> f32 {
        if self.total == 0 {
            1.0
        } else {
            self.current as f32 / self.total as f32
        }
    }
}

/// Phase of an addon operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddonPhase {
    /// Checking the top-level folder layout
    CheckingStructure,
    /// Checking manifest files
    CheckingManifests,
    /// Parsing and checking JSON files
    CheckingJson,
    /// Checking localization coverage
    CheckingLocalization,
    /// Looking for naming and duplication anomalies
    DetectingAnomalies,
    /// Merging the behavior pack section
    MergingBehavior,
    /// Merging the resource pack section
    MergingResources,
    /// Validating one archive of a batch
    ValidatingArchive,
    /// Operation complete
    Complete,
}

impl AddonPhase {
    /// Get a human-readable description of this phase
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::CheckingStructure => "Checking structure",
            Self::CheckingManifests => "Checking manifests",
            Self::CheckingJson => "Checking JSON files",
            Self::CheckingLocalization => "Checking localization",
            Self::DetectingAnomalies => "Detecting anomalies",
            Self::MergingBehavior => "Merging behavior pack",
            Self::MergingResources => "Merging resource pack",
            Self::ValidatingArchive => "Validating",
            Self::Complete => "Complete",
        }
    }
}
