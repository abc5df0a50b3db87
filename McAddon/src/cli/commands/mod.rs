use clap::{Subcommand, ValueEnum};
use std::path::{Path, PathBuf};

use crate::archive::AddonArchive;
use crate::migrate::FoodEffect;

pub mod combine;
pub mod definitions;
pub mod diff;
pub mod execute;
pub mod food;
pub mod json;
pub mod list;
pub mod migrate;
pub mod recipe;
pub mod texture;
pub mod validate;

pub use definitions::{JsonCommands, RecipeCommands, TextureCommands};

/// Output format for reports
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

/// Content listed by `list`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ListKind {
    Items,
    Blocks,
    Recipes,
    /// Items with a `minecraft:food` component
    Food,
    #[default]
    All,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate an addon, or every addon below a folder
    Validate {
        /// .mcaddon file or folder to scan recursively
        path: PathBuf,

        /// Report format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Suppress progress output
        #[arg(short, long)]
        quiet: bool,
    },

    /// Merge one addon into another
    Combine {
        /// Addon whose files are merged in
        source: PathBuf,

        /// Addon that wins JSON collisions
        destination: PathBuf,

        /// Output file (default: destination name with the combined suffix)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Suppress progress output
        #[arg(short, long)]
        quiet: bool,
    },

    /// Compare the JSON content of two addons
    Diff {
        /// First addon
        a: PathBuf,

        /// Second addon
        b: PathBuf,

        /// Report format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// List value-level changes inside modified files
        #[arg(short, long)]
        changes: bool,
    },

    /// List items, blocks and recipes by identifier
    List {
        /// Addon to inspect
        path: PathBuf,

        /// Which content to list
        #[arg(short, long, value_enum, default_value_t = ListKind::All)]
        kind: ListKind,

        /// Report format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Show an item converted to the legacy 1.10 split format
    Migrate {
        /// Addon containing the item
        path: PathBuf,

        /// Item identifier (namespace:name)
        identifier: String,
    },

    /// Add food effects to an item
    Food {
        /// Addon containing the item
        path: PathBuf,

        /// Item identifier (namespace:name)
        identifier: String,

        /// Effect as name:seconds:intensity (repeatable)
        #[arg(short, long = "effect", required = true)]
        effects: Vec<FoodEffect>,

        /// Output file (default: input name with the food suffix)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Suppress progress output
        #[arg(short, long)]
        quiet: bool,
    },

    /// Recipe operations
    Recipe {
        #[command(subcommand)]
        command: RecipeCommands,
    },

    /// PNG texture operations
    Texture {
        #[command(subcommand)]
        command: TextureCommands,
    },

    /// Raw JSON file operations
    Json {
        #[command(subcommand)]
        command: JsonCommands,
    },
}

/// Open an archive, naming the path on failure
fn open_archive(path: &Path) -> anyhow::Result<AddonArchive> {
    AddonArchive::open(path).map_err(|e| anyhow::anyhow!("failed to open {}: {e}", path.display()))
}

/// Output path: explicit, or next to the input with `suffix` inserted
fn output_path(input: &Path, archive: &AddonArchive, suffix: &str, output: Option<&Path>) -> PathBuf {
    output.map_or_else(|| input.with_file_name(archive.output_name(suffix)), Path::to_path_buf)
}
