//! Food effects on legacy-format items
//!
//! Effects on `minecraft:food` only take effect in the `1.10` item format,
//! so the item is migrated first and both halves are written back.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use super::{FormatMigration, migrate_item_to_legacy_format};
use crate::archive::{AddonArchive, file_name};
use crate::error::{Error, Result};
use crate::pack::content::{FOOD_COMPONENT, ITEM_KEY};
use crate::pack::{ContentRecord, find_resource_pack_item_file, locate_resources_pack};

/// Game ticks per second
pub const TICKS_PER_SECOND: u32 = 20;

/// One status effect granted when the food is eaten
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodEffect {
    /// Effect name, with or without the `minecraft:` prefix
    pub effect: String,
    /// Duration in seconds
    pub duration_secs: u32,
    /// Effect level, 1 to 255
    pub intensity: u32,
}

impl FoodEffect {
    /// Create a new effect
    #[must_use]
    pub fn new(effect: impl Into<String>, duration_secs: u32, intensity: u32) -> Self {
        Self {
            effect: effect.into(),
            duration_secs,
            intensity,
        }
    }

    /// Check the effect is usable
    ///
    /// # Errors
    /// Returns a message describing the first invalid field.
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.effect.trim().is_empty() {
            return Err("effect name must not be empty".to_string());
        }
        if self.duration_secs == 0 {
            return Err("duration must be greater than 0".to_string());
        }
        if !(1..=255).contains(&self.intensity) {
            return Err("intensity must be between 1 and 255".to_string());
        }
        Ok(())
    }

    /// Namespaced effect name
    #[must_use]
    pub fn qualified_name(&self) -> String {
        let name = self.effect.trim();
        if name.starts_with("minecraft:") {
            name.to_string()
        } else {
            format!("minecraft:{name}")
        }
    }

    /// Effect entry as stored in `minecraft:food.effects`
    #[must_use]
    pub fn to_json(&self) -> Value {
        json!({
            "name": self.qualified_name(),
            "duration": self.duration_secs.saturating_mul(TICKS_PER_SECOND),
            "amplifier": self.intensity.saturating_sub(1),
        })
    }
}

impl fmt::Display for FoodEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.effect, self.duration_secs, self.intensity)
    }
}

/// Parses `name:seconds:intensity`; the name may itself contain `:`
impl FromStr for FoodEffect {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let mut parts = s.rsplitn(3, ':');
        let (Some(intensity), Some(duration), Some(effect)) = (parts.next(), parts.next(), parts.next()) else {
            return Err(format!("expected name:seconds:intensity, got \"{s}\""));
        };
        let duration_secs = duration
            .trim()
            .parse()
            .map_err(|_| format!("invalid duration \"{duration}\""))?;
        let intensity = intensity
            .trim()
            .parse()
            .map_err(|_| format!("invalid intensity \"{intensity}\""))?;
        Ok(Self::new(effect.trim(), duration_secs, intensity))
    }
}

/// Everything produced by [`apply_food_effects`]
#[derive(Debug, Clone)]
pub struct FoodEffectsOutcome {
    /// The modified archive
    pub archive: AddonArchive,
    /// The legacy split, with effects added to the behavior document
    pub migration: FormatMigration,
    /// Where the behavior document was written
    pub behavior_path: String,
    /// Where the resource document was written, if a resource pack exists
    pub resource_path: Option<String>,
    /// Conversion and write notes, in order
    pub warnings: Vec<String>,
}

/// Add food effects to an item, converting it to the legacy split format
///
/// # Arguments
/// * `archive` - Addon containing the item; it is not modified
/// * `item` - Item record from the content index
/// * `effects` - Effects to append to `minecraft:food.effects`
///
/// # Errors
/// Returns an error if `effects` is empty or invalid, or the item has no
/// `minecraft:food` component.
pub fn apply_food_effects(
    archive: &AddonArchive,
    item: &ContentRecord,
    effects: &[FoodEffect],
) -> Result<FoodEffectsOutcome> {
    if effects.is_empty() {
        return Err(Error::InvalidFoodEffect {
            index: 0,
            message: "at least one effect is required".to_string(),
        });
    }
    for (i, effect) in effects.iter().enumerate() {
        effect
            .validate()
            .map_err(|message| Error::InvalidFoodEffect { index: i + 1, message })?;
    }
    if !item.is_food() {
        return Err(Error::NotAFoodItem(item.identifier.clone()));
    }

    let mut migration = migrate_item_to_legacy_format(&item.parsed);
    let mut warnings = migration.warnings.clone();

    let (Some(behavior_doc), Some(resource_doc)) =
        (migration.behavior_pack_data.as_mut(), migration.resource_pack_data.as_ref())
    else {
        return Err(Error::NotAFoodItem(item.identifier.clone()));
    };

    let food = &mut behavior_doc[ITEM_KEY]["components"][FOOD_COMPONENT];
    if !food.is_object() {
        *food = json!({});
    }
    if !food.get("effects").is_some_and(Value::is_array) {
        food["effects"] = json!([]);
    }
    if let Some(list) = food["effects"].as_array_mut() {
        list.extend(effects.iter().map(FoodEffect::to_json));
    }

    let mut modified = archive.clone();
    modified.write_json(item.path.as_str(), behavior_doc)?;

    let identifier = behavior_doc[ITEM_KEY]["description"]["identifier"]
        .as_str()
        .unwrap_or_default()
        .to_string();

    let resource_path = match locate_resources_pack(&modified) {
        Some(root) => {
            let path = match find_resource_pack_item_file(&modified, &identifier) {
                Some(existing) => existing,
                None => {
                    warnings.push("Created new resource pack item file (required for format 1.10)".to_string());
                    format!("{}{}", root.join("items"), file_name(&item.path))
                }
            };
            modified.write_json(path.as_str(), resource_doc)?;
            warnings.push("Updated both BP and RP item files (format 1.10 requires split files)".to_string());
            Some(path)
        }
        None => {
            warnings.push("Warning: No resource pack found - RP item file not created".to_string());
            None
        }
    };

    tracing::info!(
        "Added {} food effect(s) to {} in {}",
        effects.len(),
        identifier,
        archive.name()
    );

    Ok(FoodEffectsOutcome {
        archive: modified,
        behavior_path: item.path.clone(),
        resource_path,
        migration,
        warnings,
    })
}
