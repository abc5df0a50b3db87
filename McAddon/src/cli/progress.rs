//! CLI progress display utilities
//!
//! Step indicators with emojis, printed from library progress callbacks.

use std::time::Duration;

use console::{Emoji, style};
use indicatif::{HumanDuration, ProgressBar, ProgressStyle};

use crate::progress::{AddonPhase, AddonProgress};

// =============================================================================
// Emoji Constants (with ASCII fallbacks for terminals without emoji support)
// =============================================================================

/// Magnifying glass - for reading/scanning operations
pub static LOOKING_GLASS: Emoji<'_, '_> = Emoji("🔍 ", "");
/// Package - for archive operations
pub static PACKAGE: Emoji<'_, '_> = Emoji("📦 ", "");
/// Floppy disk - for writing/saving operations
pub static DISK: Emoji<'_, '_> = Emoji("💾 ", "");
/// Gear - for merging/conversion operations
pub static GEAR: Emoji<'_, '_> = Emoji("⚙️  ", "");
/// Sparkles - for completion
pub static SPARKLE: Emoji<'_, '_> = Emoji("✨ ", "");
/// Document - for JSON file operations
pub static DOCUMENT: Emoji<'_, '_> = Emoji("📄 ", "");
/// Picture - for texture operations
pub static PICTURE: Emoji<'_, '_> = Emoji("🖼️  ", "");

// =============================================================================
// Step-Based Progress
// =============================================================================

/// Print a step indicator: `[1/3] 📦 Message...`
pub fn print_step(current: usize, total: usize, emoji: Emoji, msg: &str) {
    println!(
        "{} {}{}",
        style(format!("[{current}/{total}]")).bold().dim(),
        emoji,
        msg
    );
}

/// Print completion message: `✨ Done in 2s`
pub fn print_done(elapsed: Duration) {
    println!("{} Done in {}", SPARKLE, HumanDuration(elapsed));
}

/// Emoji shown for a library phase
#[must_use]
pub fn phase_emoji(phase: AddonPhase) -> Emoji<'static, 'static> {
    match phase {
        AddonPhase::CheckingStructure | AddonPhase::ValidatingArchive => PACKAGE,
        AddonPhase::CheckingManifests | AddonPhase::CheckingJson | AddonPhase::CheckingLocalization => {
            DOCUMENT
        }
        AddonPhase::DetectingAnomalies => LOOKING_GLASS,
        AddonPhase::MergingBehavior | AddonPhase::MergingResources => GEAR,
        AddonPhase::Complete => SPARKLE,
    }
}

/// Print one library progress update as a step line
///
/// The final `Complete` update is not printed; callers finish with
/// [`print_done`].
pub fn print_progress(progress: &AddonProgress) {
    if progress.phase == AddonPhase::Complete {
        return;
    }
    let msg = match &progress.current_file {
        Some(file) => format!("{} {file}", progress.phase.as_str()),
        None => format!("{}...", progress.phase.as_str()),
    };
    print_step(progress.current, progress.total, phase_emoji(progress.phase), &msg);
}

// =============================================================================
// Simple Progress Helpers
// =============================================================================

/// Create a simple spinner
///
/// # Panics
/// Panics if the template string is invalid (this is a compile-time constant).
#[must_use]
pub fn simple_spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .expect("valid template"),
    );
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}
