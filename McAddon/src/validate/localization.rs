//! Display-name coverage
//!
//! Every item and block identifier should have an `item.<id>.name` or
//! `tile.<id>.name` key in some `.lang` file.

use indexmap::IndexSet;
use std::collections::HashSet;

use super::{Finding, ValidationOptions, ValidationReport};
use crate::archive::AddonArchive;
use crate::merge::LangFile;
use crate::pack::content::{BLOCK_KEY, ITEM_KEY};
use crate::pack::truthy_field;

/// Item and block identifiers declared anywhere in the archive, in first-seen order
#[must_use]
pub fn declared_identifiers(archive: &AddonArchive) -> IndexSet<String> {
    let mut identifiers = IndexSet::new();

    for path in archive.files_with_extension("json") {
        let Ok(text) = archive.read_text(path) else {
            continue;
        };
        let Ok(document) = serde_json::from_str::<serde_json::Value>(&text) else {
            continue;
        };

        for key in [ITEM_KEY, BLOCK_KEY] {
            let identifier = truthy_field(&document, key)
                .and_then(|section| truthy_field(section, "description"))
                .and_then(|description| truthy_field(description, "identifier"))
                .and_then(serde_json::Value::as_str);
            if let Some(identifier) = identifier {
                identifiers.insert(identifier.to_string());
            }
        }
    }

    identifiers
}

/// Run the localization check group
pub fn check_display_names(archive: &AddonArchive, options: &ValidationOptions, report: &mut ValidationReport) {
    let identifiers = declared_identifiers(archive);
    let lang_paths: Vec<&str> = archive.files_with_extension("lang").collect();

    if identifiers.is_empty() {
        return;
    }

    if lang_paths.is_empty() {
        report.warning(Finding::new(
            "No Localization Files",
            "No .lang files found. Items and blocks will not have display names.",
        ));
        return;
    }

    let mut keys: HashSet<String> = HashSet::new();
    for path in lang_paths {
        match archive.read_text(path) {
            Ok(text) => keys.extend(LangFile::parse(&text).keys().map(|k| k.trim().to_string())),
            Err(e) => tracing::debug!("Skipping unreadable lang file {}: {}", path, e),
        }
    }

    let missing: Vec<&str> = identifiers
        .iter()
        .filter(|id| {
            !keys.contains(&format!("item.{id}.name")) && !keys.contains(&format!("tile.{id}.name"))
        })
        .map(String::as_str)
        .collect();

    if missing.is_empty() {
        return;
    }

    let preview = missing
        .iter()
        .take(options.missing_name_preview)
        .copied()
        .collect::<Vec<_>>()
        .join(", ");
    let more = if missing.len() > options.missing_name_preview { "..." } else { "" };

    report.warning(Finding::new(
        "Missing Display Names",
        format!(
            "{} item(s)/block(s) missing localization entries: {preview}{more}",
            missing.len()
        ),
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str) -> String {
        format!(r#"{{"minecraft:item":{{"description":{{"identifier":"{id}"}}}}}}"#)
    }

    fn run(addon: &AddonArchive) -> ValidationReport {
        let mut report = ValidationReport::new(addon.name());
        check_display_names(addon, &ValidationOptions::default(), &mut report);
        report
    }

    #[test]
    fn test_no_lang_files_warns_once() {
        let mut addon = AddonArchive::new("l.mcaddon");
        addon.write_text("B/items/a.json", &item("x:a"));
        addon.write_text("B/items/b.json", &item("x:b"));
        let report = run(&addon);
        assert_eq!(report.warnings.len(), 1);
        assert_eq!(report.warnings[0].title, "No Localization Files");
        assert!(report.passed);
    }

    #[test]
    fn test_item_and_tile_keys_count() {
        let mut addon = AddonArchive::new("l.mcaddon");
        addon.write_text("B/items/a.json", &item("x:a"));
        addon.write_text(
            "B/blocks/b.json",
            r#"{"minecraft:block":{"description":{"identifier":"x:b"}}}"#,
        );
        addon.write_text("R/texts/en_US.lang", "item.x:a.name=A\ntile.x:b.name =B");
        assert!(run(&addon).warnings.is_empty());
    }

    #[test]
    fn test_missing_names_preview_truncates() {
        let mut addon = AddonArchive::new("l.mcaddon");
        for i in 0..7 {
            addon.write_text(format!("B/items/i{i}.json"), &item(&format!("x:i{i}")));
        }
        addon.write_text("R/texts/en_US.lang", "item.x:i0.name=Zero");
        let report = run(&addon);
        assert_eq!(report.warnings.len(), 1);
        assert_eq!(
            report.warnings[0].details,
            "6 item(s)/block(s) missing localization entries: x:i1, x:i2, x:i3, x:i4, x:i5..."
        );
    }

    #[test]
    fn test_no_identifiers_no_findings() {
        let addon = AddonArchive::new("empty.mcaddon");
        assert!(run(&addon).warnings.is_empty());
    }
}
