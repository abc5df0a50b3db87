//! Legacy item format migration
//!
//! Format `1.10` items are split in two: a behavior-pack document with the
//! functional components and a resource-pack document with the visual ones.
//! [`migrate_item_to_legacy_format`] performs that split on a parsed item;
//! [`food`] uses it to attach food effects, which only work in that format.

pub mod food;

use serde::Serialize;
use serde_json::{Map, Value, json};

use crate::pack::content::ITEM_KEY;
use crate::pack::{is_truthy, truthy_field};

pub use food::{FoodEffect, FoodEffectsOutcome, apply_food_effects};

/// Target `format_version` of migrated documents
pub const LEGACY_FORMAT_VERSION: &str = "1.10";

/// Identifier used when the source item declares none
pub const UNKNOWN_ITEM_IDENTIFIER: &str = "unknown:item";

/// Tags component, converted rather than copied
pub const TAGS_COMPONENT: &str = "minecraft:tags";

/// Components kept in the behavior-pack document
pub const FUNCTIONAL_COMPONENTS: [&str; 11] = [
    "minecraft:food",
    "minecraft:max_stack_size",
    "minecraft:hand_equipped",
    "minecraft:stacked_by_data",
    "minecraft:foil",
    "minecraft:allow_off_hand",
    "minecraft:should_despawn",
    "minecraft:liquid_clipped",
    "minecraft:durability",
    "minecraft:on_use",
    "minecraft:on_use_on",
];

/// Components kept in the resource-pack document
pub const VISUAL_COMPONENTS: [&str; 1] = ["minecraft:icon"];

/// Result of splitting an item into legacy documents
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FormatMigration {
    /// Behavior-pack item document, `None` if the input had no `minecraft:item`
    pub behavior_pack_data: Option<Value>,
    /// Resource-pack item document, `None` if the input had no `minecraft:item`
    pub resource_pack_data: Option<Value>,
    /// `format_version` of the input, as text
    pub original_version: Option<String>,
    /// Components that have no place in the legacy format
    pub removed_components: Vec<String>,
    /// Human-readable notes about the conversion
    pub warnings: Vec<String>,
}

impl FormatMigration {
    /// Whether the input was an item and both documents were produced
    #[must_use]
    pub fn is_migrated(&self) -> bool {
        self.behavior_pack_data.is_some() && self.resource_pack_data.is_some()
    }
}

fn version_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn legacy_document(identifier: &str) -> Value {
    json!({
        "format_version": LEGACY_FORMAT_VERSION,
        ITEM_KEY: {
            "description": { "identifier": identifier },
            "components": {}
        }
    })
}

/// Legacy tag list for a `minecraft:tags` component
///
/// `{"tags": [...]}` flattens to the bare array; a bare array is kept.
fn legacy_tags(tags: &Value) -> Option<Value> {
    match tags {
        Value::Object(map) => map.get("tags").filter(|t| t.is_array()).cloned(),
        Value::Array(_) => Some(tags.clone()),
        _ => None,
    }
}

/// Split an item document into legacy behavior and resource documents
///
/// Pure transform; nothing is written anywhere.
///
/// `removed_components` lists every component outside both allow-lists,
/// except a `minecraft:tags` that converts to a legacy tag array. That one
/// lands in the behavior document and is not reported as removed.
#[must_use]
pub fn migrate_item_to_legacy_format(item_document: &Value) -> FormatMigration {
    let mut result = FormatMigration {
        original_version: truthy_field(item_document, "format_version").map(version_text),
        ..FormatMigration::default()
    };

    let Some(item) = truthy_field(item_document, ITEM_KEY) else {
        return result;
    };

    let identifier = item
        .get("description")
        .and_then(|d| truthy_field(d, "identifier"))
        .map_or_else(|| UNKNOWN_ITEM_IDENTIFIER.to_string(), version_text);

    let mut behavior = Map::new();
    let mut resources = Map::new();

    if let Some(components) = truthy_field(item, "components").and_then(Value::as_object) {
        for (name, value) in components {
            if FUNCTIONAL_COMPONENTS.contains(&name.as_str()) {
                behavior.insert(name.clone(), value.clone());
            } else if VISUAL_COMPONENTS.contains(&name.as_str()) {
                resources.insert(name.clone(), value.clone());
            } else if name == TAGS_COMPONENT && is_truthy(value) {
                match legacy_tags(value) {
                    Some(tags) => {
                        behavior.insert(name.clone(), tags);
                    }
                    None => result.removed_components.push(name.clone()),
                }
            } else {
                result.removed_components.push(name.clone());
            }
        }
    }

    let mut behavior_doc = legacy_document(&identifier);
    behavior_doc[ITEM_KEY]["components"] = Value::Object(behavior);
    let mut resource_doc = legacy_document(&identifier);
    resource_doc[ITEM_KEY]["components"] = Value::Object(resources);

    result.behavior_pack_data = Some(behavior_doc);
    result.resource_pack_data = Some(resource_doc);

    if let Some(version) = &result.original_version {
        if version != LEGACY_FORMAT_VERSION {
            result
                .warnings
                .push(format!("Format version changed: {version} → {LEGACY_FORMAT_VERSION}"));
            result
                .warnings
                .push("Using vanilla Enchanted Golden Apple format (split BP/RP files)".to_string());
        }
    }

    result
        .warnings
        .push("Items will appear under generic \"Items\" category in Creative Mode".to_string());

    if !result.removed_components.is_empty() {
        result.warnings.push(format!(
            "Removed {} incompatible component(s)",
            result.removed_components.len()
        ));
    }

    tracing::debug!(
        "Migrated {} to format {} ({} component(s) removed)",
        identifier,
        LEGACY_FORMAT_VERSION,
        result.removed_components.len()
    );
    result
}
