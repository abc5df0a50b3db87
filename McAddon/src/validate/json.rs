//! JSON syntax and document shape checks

use serde_json::Value;

use super::{Finding, ValidationReport};
use crate::archive::AddonArchive;
use crate::pack::content::{BLOCK_KEY, ITEM_KEY, SHAPED_RECIPE_KEY, SHAPELESS_RECIPE_KEY};
use crate::pack::{ContentKind, truthy_field};

/// Run the JSON check group
///
/// Every `.json` file must parse. Files under `/recipes/`, `/items/` and
/// `/blocks/` (first match wins, in that order) get shape checks.
pub fn check_json_files(archive: &AddonArchive, report: &mut ValidationReport) {
    let mut json_count = 0;

    for path in archive.files_with_extension("json") {
        json_count += 1;

        let parsed = archive
            .read_text(path)
            .map_err(|e| e.to_string())
            .and_then(|text| serde_json::from_str::<Value>(&text).map_err(|e| e.to_string()));

        let document = match parsed {
            Ok(document) => document,
            Err(message) => {
                report.error(Finding::at(
                    "Invalid JSON",
                    format!("Failed to parse JSON file: {message}"),
                    path,
                ));
                continue;
            }
        };

        let lower = path.to_lowercase();
        if lower.contains(ContentKind::Recipe.folder_segment()) {
            check_recipe(path, &document, report);
        } else if lower.contains(ContentKind::Item.folder_segment()) {
            check_item(path, &document, report);
        } else if lower.contains(ContentKind::Block.folder_segment()) {
            check_block(path, &document, report);
        }
    }

    if json_count == 0 {
        report.warning(Finding::new(
            "No JSON Files",
            "No JSON files found in the package (besides manifests).",
        ));
    }
}

fn has_identifier(section: &Value) -> bool {
    truthy_field(section, "description")
        .and_then(|description| truthy_field(description, "identifier"))
        .is_some()
}

fn check_recipe(path: &str, document: &Value, report: &mut ValidationReport) {
    if truthy_field(document, "format_version").is_none() {
        report.warning(Finding::at(
            "Missing format_version in Recipe",
            "Recipe file is missing format_version field.",
            path,
        ));
    }

    if truthy_field(document, SHAPED_RECIPE_KEY).is_none()
        && truthy_field(document, SHAPELESS_RECIPE_KEY).is_none()
    {
        report.error(Finding::at(
            "Invalid Recipe Type",
            "Recipe file must contain either minecraft:recipe_shaped or minecraft:recipe_shapeless.",
            path,
        ));
    }
}

fn check_item(path: &str, document: &Value, report: &mut ValidationReport) {
    if truthy_field(document, "format_version").is_none() {
        report.warning(Finding::at(
            "Missing format_version in Item",
            "Item file is missing format_version field.",
            path,
        ));
    }

    match truthy_field(document, ITEM_KEY) {
        None => report.error(Finding::at(
            "Invalid Item Structure",
            "Item file must contain minecraft:item object.",
            path,
        )),
        Some(item) if !has_identifier(item) => report.error(Finding::at(
            "Missing Item Identifier",
            "Item is missing description.identifier field.",
            path,
        )),
        Some(_) => {}
    }
}

fn check_block(path: &str, document: &Value, report: &mut ValidationReport) {
    if let Some(block) = truthy_field(document, BLOCK_KEY) {
        if !has_identifier(block) {
            report.error(Finding::at(
                "Missing Block Identifier",
                "Block is missing description.identifier field.",
                path,
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(files: &[(&str, &str)]) -> ValidationReport {
        let mut addon = AddonArchive::new("json.mcaddon");
        for (path, text) in files {
            addon.write_text(*path, text);
        }
        let mut report = ValidationReport::new(addon.name());
        check_json_files(&addon, &mut report);
        report
    }

    fn titles(findings: &[Finding]) -> Vec<&str> {
        findings.iter().map(|f| f.title.as_str()).collect()
    }

    #[test]
    fn test_invalid_json_reported_with_path() {
        let report = run(&[("B/items/bad.json", "{ nope")]);
        assert_eq!(titles(&report.errors), vec!["Invalid JSON"]);
        assert_eq!(report.errors[0].path.as_deref(), Some("B/items/bad.json"));
    }

    #[test]
    fn test_recipe_checks() {
        let report = run(&[("B/recipes/r.json", r#"{"something":{}}"#)]);
        assert_eq!(titles(&report.errors), vec!["Invalid Recipe Type"]);
        assert_eq!(titles(&report.warnings), vec!["Missing format_version in Recipe"]);
    }

    #[test]
    fn test_item_checks() {
        let report = run(&[
            ("B/items/a.json", r#"{"format_version":"1.20.0"}"#),
            ("B/items/b.json", r#"{"format_version":"1.20.0","minecraft:item":{"description":{}}}"#),
            ("B/items/c.json", r#"{"minecraft:item":{"description":{"identifier":"x:c"}}}"#),
        ]);
        assert_eq!(
            titles(&report.errors),
            vec!["Invalid Item Structure", "Missing Item Identifier"]
        );
        assert_eq!(titles(&report.warnings), vec!["Missing format_version in Item"]);
    }

    #[test]
    fn test_block_without_block_key_is_fine() {
        let report = run(&[
            ("B/blocks/meta.json", r#"{"other":1}"#),
            ("B/blocks/ore.json", r#"{"minecraft:block":{}}"#),
        ]);
        assert_eq!(titles(&report.errors), vec!["Missing Block Identifier"]);
        assert_eq!(report.errors[0].path.as_deref(), Some("B/blocks/ore.json"));
    }

    #[test]
    fn test_no_json_files_warning() {
        let report = run(&[("B/texts/en_US.lang", "a=b")]);
        assert!(report.errors.is_empty());
        assert_eq!(titles(&report.warnings), vec!["No JSON Files"]);
    }
}
