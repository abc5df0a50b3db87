//! # McAddon
//!
//! A pure-Rust library for working with Minecraft Bedrock addon packages
//! (`.mcaddon`).
//!
//! ## Capabilities
//!
//! - **Pack locator** - find the behavior and resource pack roots from manifests
//! - **Content index** - list items, blocks and recipes by identifier
//! - **Merge engine** - deep JSON merge and `.lang` merge
//! - **Combiner** - fold one addon into another
//! - **Differ** - semantic comparison of the JSON in two addons
//! - **Validator** - structure, manifest, JSON, localization and anomaly checks
//! - **Format migrator** - split items into the legacy `1.10` format, add food effects
//! - **Edits** - recipes, raw JSON text and PNG textures
//!
//! ## Quick Start
//!
//! ### Validating an Addon
//!
//! ```no_run
//! use mcaddon::archive::AddonArchive;
//! use mcaddon::validate::validate;
//!
//! let addon = AddonArchive::open("my_addon.mcaddon")?;
//! let report = validate(&addon);
//! println!("{report}");
//! # Ok::<(), mcaddon::Error>(())
//! ```
//!
//! ### Combining Two Addons
//!
//! ```no_run
//! use mcaddon::archive::AddonArchive;
//! use mcaddon::merge::combine;
//!
//! let source = AddonArchive::open("extra.mcaddon")?;
//! let dest = AddonArchive::open("base.mcaddon")?;
//! let result = combine(&source, &dest)?;
//! println!("{}", result.summary());
//! result.archive.save(dest.output_name("_combined"))?;
//! # Ok::<(), mcaddon::Error>(())
//! ```
//!
//! ### Using the Prelude
//!
//! ```
//! use mcaddon::prelude::*;
//!
//! let addon = AddonArchive::new("empty.mcaddon");
//! assert!(locate_behavior_pack(&addon).is_none());
//! ```
//!
//! ## Feature Flags
//!
//! - `cli` - Enables the `mcaddon` command-line binary

pub mod archive;
pub mod config;
pub mod diff;
pub mod edit;
pub mod error;
pub mod merge;
pub mod migrate;
pub mod pack;
pub mod progress;
pub mod validate;

// Re-exports for convenience
pub use error::{Error, Result};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::error::{Error, Result};

    pub use crate::archive::AddonArchive;
    pub use crate::config::Settings;
    pub use crate::progress::{AddonPhase, AddonProgress, ProgressCallback};

    // Pack model
    pub use crate::pack::{
        ContentKind, ContentRecord, PackIndex, PackKind, PackRoot, find_item, list_blocks,
        list_items, list_recipes, locate_behavior_pack, locate_resources_pack,
    };

    // Operations
    pub use crate::diff::{PackageDiff, diff_archives};
    pub use crate::edit::{add_recipe, add_texture, remove_texture, replace_texture, set_json_file};
    pub use crate::merge::{CombineResult, combine, deep_merge, merge_lang};
    pub use crate::migrate::{FoodEffect, apply_food_effects, migrate_item_to_legacy_format};
    pub use crate::validate::{Finding, ValidationOptions, ValidationReport, validate};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// CLI module (feature-gated)
#[cfg(feature = "cli")]
pub mod cli;
