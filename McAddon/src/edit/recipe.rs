//! Adding recipes to the behavior pack

use serde_json::Value;

use crate::archive::AddonArchive;
use crate::error::{Error, Result};
use crate::pack::content::{SHAPED_RECIPE_KEY, SHAPELESS_RECIPE_KEY};
use crate::pack::locate_behavior_pack;

/// Folder below the behavior pack root that holds recipes
pub const RECIPES_FOLDER: &str = "recipes";

/// Default recipe file name when none is given
#[must_use]
pub fn default_recipe_file_name(recipe: &Value) -> String {
    let identifier = [SHAPED_RECIPE_KEY, SHAPELESS_RECIPE_KEY]
        .iter()
        .find_map(|key| recipe[*key]["description"]["identifier"].as_str())
        .unwrap_or("custom_recipe");
    let stem = identifier.rsplit(':').next().unwrap_or(identifier);
    format!("{stem}.json")
}

/// Write `recipe` as `<behavior pack>/recipes/<file_name>`
///
/// An existing file with the same name is overwritten.
///
/// # Errors
/// Returns [`Error::BehaviorPackNotFound`] if the archive has no behavior pack.
pub fn add_recipe(archive: &AddonArchive, file_name: &str, recipe: &Value) -> Result<(AddonArchive, String)> {
    let root = locate_behavior_pack(archive).ok_or_else(|| Error::BehaviorPackNotFound(archive.name().to_string()))?;

    let path = format!("{}{}", root.join(RECIPES_FOLDER), file_name.trim_start_matches('/'));
    let mut modified = archive.clone();
    modified.write_json(path.as_str(), recipe)?;

    tracing::info!("Added recipe {} to {}", path, archive.name());
    Ok((modified, path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_add_recipe() {
        let mut addon = AddonArchive::new("r.mcaddon");
        addon.write_text("RB/manifest.json", r#"{"modules":[{"type":"data"}]}"#);

        let recipe = json!({"format_version": "1.20.0", "minecraft:recipe_shaped": {"description": {"identifier": "demo:cake"}}});
        let (modified, path) = add_recipe(&addon, "cake.json", &recipe).unwrap();
        assert_eq!(path, "RB/recipes/cake.json");
        assert_eq!(modified.read_json(&path).unwrap(), recipe);
        assert!(modified.read_text(&path).unwrap().contains("\n  "));
        assert!(!addon.contains(&path));
    }

    #[test]
    fn test_requires_behavior_pack() {
        let addon = AddonArchive::new("empty.mcaddon");
        assert!(matches!(
            add_recipe(&addon, "x.json", &json!({})),
            Err(Error::BehaviorPackNotFound(_))
        ));
    }

    #[test]
    fn test_default_file_name() {
        let shapeless = json!({"minecraft:recipe_shapeless": {"description": {"identifier": "demo:bread"}}});
        assert_eq!(default_recipe_file_name(&shapeless), "bread.json");
        assert_eq!(default_recipe_file_name(&json!({})), "custom_recipe.json");
    }
}
