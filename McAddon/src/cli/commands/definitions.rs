//! Subcommand enum definitions for CLI

use clap::Subcommand;
use std::path::PathBuf;

/// Recipe commands
#[derive(Subcommand)]
pub enum RecipeCommands {
    /// Add a recipe JSON file to the behavior pack
    Add {
        /// Addon to modify
        path: PathBuf,

        /// Recipe JSON file
        recipe: PathBuf,

        /// File name inside recipes/ (default: derived from the recipe identifier)
        #[arg(short, long)]
        name: Option<String>,

        /// Output file (default: input name with the recipe suffix)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// PNG texture commands
#[derive(Subcommand)]
pub enum TextureCommands {
    /// List textures in archive order, or as a folder tree
    List {
        /// Addon to inspect
        path: PathBuf,

        /// Show a folder tree with texture counts
        #[arg(short, long)]
        tree: bool,
    },

    /// Add a PNG file to the addon
    Add {
        /// Addon to modify
        path: PathBuf,

        /// PNG file to add
        png: PathBuf,

        /// Folder inside the addon (default: archive root)
        #[arg(short, long, default_value = "")]
        folder: String,

        /// File name inside the addon (default: the PNG's file name)
        #[arg(short, long)]
        name: Option<String>,

        /// Output file (default: input name with the edited suffix)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Replace an existing texture
    Replace {
        /// Addon to modify
        path: PathBuf,

        /// Texture path inside the addon
        texture: String,

        /// New PNG file
        png: PathBuf,

        /// Output file (default: input name with the edited suffix)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Remove a texture
    Remove {
        /// Addon to modify
        path: PathBuf,

        /// Texture path inside the addon
        texture: String,

        /// Output file (default: input name with the edited suffix)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Write a texture out to disk
    Extract {
        /// Addon to read
        path: PathBuf,

        /// Texture path inside the addon
        texture: String,

        /// Destination file (default: the texture's file name)
        destination: Option<PathBuf>,
    },
}

/// Raw JSON file commands
#[derive(Subcommand)]
pub enum JsonCommands {
    /// Print a JSON file from the addon
    Show {
        /// Addon to read
        path: PathBuf,

        /// File path inside the addon
        file: String,
    },

    /// Replace a JSON file's text, rejecting invalid JSON
    Set {
        /// Addon to modify
        path: PathBuf,

        /// File path inside the addon
        file: String,

        /// File with the new JSON text
        input: PathBuf,

        /// Output file (default: input name with the edited suffix)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}
