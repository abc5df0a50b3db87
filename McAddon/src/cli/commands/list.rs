//! CLI command for listing addon content

use std::path::Path;

use super::{ListKind, OutputFormat, open_archive};
use crate::pack::{ContentKind, ContentRecord, PackIndex, food_items};

/// List content records of the behavior pack
pub fn execute(path: &Path, kind: ListKind, format: OutputFormat) -> anyhow::Result<()> {
    let archive = open_archive(path)?;
    let index = PackIndex::new(&archive);

    let records: Vec<ContentRecord> = match kind {
        ListKind::Items => index.items().to_vec(),
        ListKind::Blocks => index.blocks().to_vec(),
        ListKind::Recipes => index.recipes().to_vec(),
        ListKind::Food => food_items(&archive),
        ListKind::All => ContentKind::all()
            .into_iter()
            .flat_map(|k| index.records(k).iter().cloned())
            .collect(),
    };

    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    match index.behavior_pack() {
        Some(root) => println!("Behavior pack: {}", root.path),
        None => {
            println!("No behavior pack found in {}", archive.name());
            return Ok(());
        }
    }
    if let Some(root) = index.resources_pack() {
        println!("Resource pack: {}", root.path);
    }
    println!();

    if records.is_empty() {
        println!("No content found");
        return Ok(());
    }

    for record in &records {
        let food = if record.is_food() { " [food]" } else { "" };
        println!("  {:<7} {:<40} {}{food}", record.kind.to_string(), record.identifier, record.path);
    }
    println!("\nTotal: {} record(s)", records.len());

    Ok(())
}
