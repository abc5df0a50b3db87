//! Typed content listings
//!
//! Items, blocks and recipes are found by path (`/items/`, `/blocks/`,
//! `/recipes/` plus a `.json` extension, both case-insensitive) and kept when
//! they parse and carry an identifier. Everything else is skipped quietly;
//! reporting broken files is the validator's job.

use std::fmt;

use serde::Serialize;
use serde_json::Value;

use super::locator::{locate_behavior_pack, locate_resources_pack};
use crate::archive::{AddonArchive, extension_is};

/// Top-level key of an item document
pub const ITEM_KEY: &str = "minecraft:item";
/// Top-level key of a block document
pub const BLOCK_KEY: &str = "minecraft:block";
/// Top-level key of a shaped recipe document
pub const SHAPED_RECIPE_KEY: &str = "minecraft:recipe_shaped";
/// Top-level key of a shapeless recipe document
pub const SHAPELESS_RECIPE_KEY: &str = "minecraft:recipe_shapeless";
/// Food component name
pub const FOOD_COMPONENT: &str = "minecraft:food";

/// Identifier shown for food items that declare none
const UNKNOWN_IDENTIFIER: &str = "Unknown";

/// Kind of indexed content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ContentKind {
    /// `minecraft:item` documents under `/items/`
    Item,
    /// `minecraft:block` documents under `/blocks/`
    Block,
    /// Shaped or shapeless recipes under `/recipes/`
    Recipe,
}

impl ContentKind {
    /// Path segment that marks files of this kind
    #[must_use]
    pub fn folder_segment(self) -> &'static str {
        match self {
            Self::Item => "/items/",
            Self::Block => "/blocks/",
            Self::Recipe => "/recipes/",
        }
    }

    /// Whether an archive path is a candidate file of this kind
    #[must_use]
    pub fn matches_path(self, path: &str) -> bool {
        path.to_lowercase().contains(self.folder_segment()) && extension_is(path, "json")
    }

    /// Identifier declared by a parsed document of this kind
    ///
    /// Recipes try the shaped form first, then shapeless.
    #[must_use]
    pub fn extract_identifier(self, value: &Value) -> Option<String> {
        match self {
            Self::Item => description_identifier(value, ITEM_KEY),
            Self::Block => description_identifier(value, BLOCK_KEY),
            Self::Recipe => description_identifier(value, SHAPED_RECIPE_KEY)
                .or_else(|| description_identifier(value, SHAPELESS_RECIPE_KEY)),
        }
    }

    /// All kinds in listing order
    #[must_use]
    pub fn all() -> [Self; 3] {
        [Self::Item, Self::Block, Self::Recipe]
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Item => write!(f, "item"),
            Self::Block => write!(f, "block"),
            Self::Recipe => write!(f, "recipe"),
        }
    }
}

/// JavaScript-style truthiness: `null`, `false`, `0` and `""` are falsy
#[must_use]
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Field lookup that treats falsy values as absent
#[must_use]
pub fn truthy_field<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    value.get(key).filter(|v| is_truthy(v))
}

/// `value[key].description.identifier` when it is a non-empty string
#[must_use]
pub fn description_identifier(value: &Value, key: &str) -> Option<String> {
    value
        .get(key)?
        .get("description")?
        .get("identifier")?
        .as_str()
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// An indexed item, block or recipe
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContentRecord {
    /// Content kind
    pub kind: ContentKind,
    /// Archive path of the JSON file
    pub path: String,
    /// Declared identifier (`namespace:name`)
    pub identifier: String,
    /// File text as stored
    #[serde(skip)]
    pub raw_content: String,
    /// Parsed document
    #[serde(skip)]
    pub parsed: Value,
}

impl ContentRecord {
    /// `components` object of an item document
    #[must_use]
    pub fn item_components(&self) -> Option<&serde_json::Map<String, Value>> {
        self.parsed.get(ITEM_KEY)?.get("components")?.as_object()
    }

    /// Whether the item carries a truthy `minecraft:food` component
    #[must_use]
    pub fn is_food(&self) -> bool {
        has_food_component(&self.parsed)
    }
}

fn has_food_component(value: &Value) -> bool {
    value
        .get(ITEM_KEY)
        .and_then(|item| truthy_field(item, "components"))
        .and_then(|components| truthy_field(components, FOOD_COMPONENT))
        .is_some()
}

/// A parsed JSON file
#[derive(Debug, Clone, PartialEq)]
pub struct JsonFile {
    /// Archive path
    pub path: String,
    /// File text as stored
    pub content: String,
    /// Parsed document
    pub parsed: Value,
}

/// Every parsable `.json` file in enumeration order, optionally filtered by path
#[must_use]
pub fn json_files(archive: &AddonArchive, filter: Option<&dyn Fn(&str) -> bool>) -> Vec<JsonFile> {
    let mut files = Vec::new();

    for path in archive.files_with_extension("json") {
        if filter.is_some_and(|f| !f(path)) {
            continue;
        }
        match read_document(archive, path) {
            Some((content, parsed)) => files.push(JsonFile {
                path: path.to_string(),
                content,
                parsed,
            }),
            None => tracing::debug!("Skipping unparsable JSON {}", path),
        }
    }

    files
}

fn read_document(archive: &AddonArchive, path: &str) -> Option<(String, Value)> {
    let content = archive.read_text(path).ok()?;
    let parsed = serde_json::from_str(&content).ok()?;
    Some((content, parsed))
}

/// Scan without the behavior-pack gate
fn scan(archive: &AddonArchive, kind: ContentKind) -> Vec<ContentRecord> {
    let mut records = Vec::new();

    for (path, _) in archive.files() {
        if !kind.matches_path(path) {
            continue;
        }
        let Some((raw_content, parsed)) = read_document(archive, path) else {
            tracing::debug!("Skipping unparsable {} file {}", kind, path);
            continue;
        };
        let Some(identifier) = kind.extract_identifier(&parsed) else {
            tracing::debug!("Skipping {} file without identifier {}", kind, path);
            continue;
        };
        records.push(ContentRecord {
            kind,
            path: path.to_string(),
            identifier,
            raw_content,
            parsed,
        });
    }

    records
}

/// All records of a kind; empty when the archive has no behavior pack
#[must_use]
pub fn list_content(archive: &AddonArchive, kind: ContentKind) -> Vec<ContentRecord> {
    if locate_behavior_pack(archive).is_none() {
        return Vec::new();
    }
    scan(archive, kind)
}

/// All items
#[must_use]
pub fn list_items(archive: &AddonArchive) -> Vec<ContentRecord> {
    list_content(archive, ContentKind::Item)
}

/// All blocks
#[must_use]
pub fn list_blocks(archive: &AddonArchive) -> Vec<ContentRecord> {
    list_content(archive, ContentKind::Block)
}

/// All recipes
#[must_use]
pub fn list_recipes(archive: &AddonArchive) -> Vec<ContentRecord> {
    list_content(archive, ContentKind::Recipe)
}

/// First record of a kind with the given identifier
#[must_use]
pub fn find_by_identifier(
    archive: &AddonArchive,
    kind: ContentKind,
    identifier: &str,
) -> Option<ContentRecord> {
    list_content(archive, kind)
        .into_iter()
        .find(|r| r.identifier == identifier)
}

/// First item with the given identifier
#[must_use]
pub fn find_item(archive: &AddonArchive, identifier: &str) -> Option<ContentRecord> {
    find_by_identifier(archive, ContentKind::Item, identifier)
}

/// First block with the given identifier
#[must_use]
pub fn find_block(archive: &AddonArchive, identifier: &str) -> Option<ContentRecord> {
    find_by_identifier(archive, ContentKind::Block, identifier)
}

/// Items matching a predicate
pub fn filter_items<F>(archive: &AddonArchive, predicate: F) -> Vec<ContentRecord>
where
    F: Fn(&ContentRecord) -> bool,
{
    list_items(archive).into_iter().filter(predicate).collect()
}

/// Items with a `minecraft:food` component
///
/// Unlike [`list_items`], items without an identifier are kept and listed as
/// `Unknown`.
#[must_use]
pub fn food_items(archive: &AddonArchive) -> Vec<ContentRecord> {
    if locate_behavior_pack(archive).is_none() {
        return Vec::new();
    }

    let mut items = Vec::new();
    for (path, _) in archive.files() {
        if !ContentKind::Item.matches_path(path) {
            continue;
        }
        let Some((raw_content, parsed)) = read_document(archive, path) else {
            continue;
        };
        if !has_food_component(&parsed) {
            continue;
        }
        let identifier = ContentKind::Item
            .extract_identifier(&parsed)
            .unwrap_or_else(|| UNKNOWN_IDENTIFIER.to_string());
        items.push(ContentRecord {
            kind: ContentKind::Item,
            path: path.to_string(),
            identifier,
            raw_content,
            parsed,
        });
    }

    items
}

/// Path of the resource-pack item file declaring `identifier`
///
/// Only files inside the located resource pack are considered.
#[must_use]
pub fn find_resource_pack_item_file(archive: &AddonArchive, identifier: &str) -> Option<String> {
    let root = locate_resources_pack(archive)?;

    archive
        .files()
        .map(|(path, _)| path)
        .filter(|path| ContentKind::Item.matches_path(path) && root.contains(path))
        .find(|path| {
            read_document(archive, path).is_some_and(|(_, parsed)| {
                ContentKind::Item.extract_identifier(&parsed).as_deref() == Some(identifier)
            })
        })
        .map(str::to_string)
}
