//! CLI command for previewing a legacy format migration

use std::path::Path;

use super::open_archive;
use crate::error::Error;
use crate::migrate::migrate_item_to_legacy_format;
use crate::pack::find_item;

/// Print the behavior and resource documents an item migrates to
pub fn execute(path: &Path, identifier: &str) -> anyhow::Result<()> {
    let archive = open_archive(path)?;
    let item = find_item(&archive, identifier).ok_or_else(|| Error::ItemNotFound(identifier.to_string()))?;
    let migration = migrate_item_to_legacy_format(&item.parsed);

    println!("Item: {} ({})", item.identifier, item.path);
    if let Some(version) = &migration.original_version {
        println!("Original format version: {version}");
    }

    if let Some(doc) = &migration.behavior_pack_data {
        println!("\nBehavior pack document:");
        println!("{}", serde_json::to_string_pretty(doc)?);
    }
    if let Some(doc) = &migration.resource_pack_data {
        println!("\nResource pack document:");
        println!("{}", serde_json::to_string_pretty(doc)?);
    }

    if !migration.removed_components.is_empty() {
        println!("\nRemoved components:");
        for name in &migration.removed_components {
            println!("  - {name}");
        }
    }
    if !migration.warnings.is_empty() {
        println!("\nWarnings:");
        for warning in &migration.warnings {
            println!("  - {warning}");
        }
    }

    Ok(())
}
