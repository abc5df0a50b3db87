//! Command execution implementations

use super::Commands;
use super::definitions::{JsonCommands, RecipeCommands, TextureCommands};
use super::{combine, diff, food, json, list, migrate, recipe, texture, validate};
use crate::config::Settings;

impl Commands {
    /// Execute the selected command.
    ///
    /// # Errors
    /// Returns an error if the underlying command fails.
    pub fn execute(&self, settings: &Settings) -> anyhow::Result<()> {
        match self {
            Commands::Validate { path, format, quiet } => {
                validate::execute(path, *format, &settings.validation_options(), *quiet)
            }
            Commands::Combine {
                source,
                destination,
                output,
                quiet,
            } => combine::execute(
                source,
                destination,
                output.as_deref(),
                &settings.output.combined_suffix,
                *quiet,
            ),
            Commands::Diff {
                a,
                b,
                format,
                changes,
            } => diff::execute(a, b, *format, *changes),
            Commands::List { path, kind, format } => list::execute(path, *kind, *format),
            Commands::Migrate { path, identifier } => migrate::execute(path, identifier),
            Commands::Food {
                path,
                identifier,
                effects,
                output,
                quiet,
            } => food::execute(
                path,
                identifier,
                effects,
                output.as_deref(),
                &settings.output.food_suffix,
                *quiet,
            ),
            Commands::Recipe { command } => command.execute(settings),
            Commands::Texture { command } => command.execute(settings),
            Commands::Json { command } => command.execute(settings),
        }
    }
}

impl RecipeCommands {
    /// Execute the selected recipe command.
    ///
    /// # Errors
    /// Returns an error if the underlying recipe operation fails.
    pub fn execute(&self, settings: &Settings) -> anyhow::Result<()> {
        match self {
            RecipeCommands::Add {
                path,
                recipe,
                name,
                output,
            } => recipe::add(
                path,
                recipe,
                name.as_deref(),
                output.as_deref(),
                &settings.output.recipe_suffix,
            ),
        }
    }
}

impl TextureCommands {
    /// Execute the selected texture command.
    ///
    /// # Errors
    /// Returns an error if the underlying texture operation fails.
    pub fn execute(&self, settings: &Settings) -> anyhow::Result<()> {
        let suffix = &settings.output.edited_suffix;
        match self {
            TextureCommands::List { path, tree } => texture::list(path, *tree),
            TextureCommands::Add {
                path,
                png,
                folder,
                name,
                output,
            } => texture::add(path, png, folder, name.as_deref(), output.as_deref(), suffix),
            TextureCommands::Replace {
                path,
                texture: target,
                png,
                output,
            } => texture::replace(path, target, png, output.as_deref(), suffix),
            TextureCommands::Remove {
                path,
                texture: target,
                output,
            } => texture::remove(path, target, output.as_deref(), suffix),
            TextureCommands::Extract {
                path,
                texture: target,
                destination,
            } => texture::extract(path, target, destination.as_deref()),
        }
    }
}

impl JsonCommands {
    /// Execute the selected JSON command.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or the new text is invalid.
    pub fn execute(&self, settings: &Settings) -> anyhow::Result<()> {
        match self {
            JsonCommands::Show { path, file } => json::show(path, file),
            JsonCommands::Set {
                path,
                file,
                input,
                output,
            } => json::set(path, file, input, output.as_deref(), &settings.output.edited_suffix),
        }
    }
}
