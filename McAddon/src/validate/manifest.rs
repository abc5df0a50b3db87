//! Manifest completeness checks

use serde_json::Value;

use super::{Finding, ValidationOptions, ValidationReport};
use crate::archive::AddonArchive;
use crate::pack::{PackKind, locate_pack, manifests_declaring, truthy_field};

/// Numeric value of the leading decimal prefix of a version string
///
/// `"1.16.100"` reads as `1.16`, `2` as `2.0`; anything without a numeric
/// prefix yields `None`.
#[must_use]
pub fn leading_version(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => leading_float(s),
        _ => None,
    }
}

fn leading_float(text: &str) -> Option<f64> {
    let text = text.trim_start();
    let mut end = 0;
    let mut seen_dot = false;
    let mut seen_digit = false;

    for (i, c) in text.char_indices() {
        match c {
            '0'..='9' => seen_digit = true,
            '.' if !seen_dot => seen_dot = true,
            '-' | '+' if i == 0 => {}
            _ => break,
        }
        end = i + c.len_utf8();
    }

    if !seen_digit {
        return None;
    }
    text[..end].trim_end_matches('.').parse().ok()
}

fn version_label(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Run the manifest check group
pub fn check_manifests(archive: &AddonArchive, options: &ValidationOptions, report: &mut ValidationReport) {
    let manifests: Vec<&str> = archive
        .files()
        .map(|(path, _)| path)
        .filter(|path| path.to_lowercase().ends_with("manifest.json"))
        .collect();

    if manifests.is_empty() {
        report.error(Finding::new(
            "No Manifest Files",
            "No manifest.json files found in the package.",
        ));
        return;
    }

    let min_version = leading_float(&options.min_format_version);
    let mut has_behavior = false;
    let mut has_resources = false;

    for path in manifests {
        let parsed = archive
            .read_text(path)
            .map_err(|e| e.to_string())
            .and_then(|text| serde_json::from_str::<Value>(&text).map_err(|e| e.to_string()));

        let manifest = match parsed {
            Ok(manifest) => manifest,
            Err(message) => {
                report.error(Finding::at(
                    "Invalid Manifest JSON",
                    format!("Failed to parse manifest.json: {message}"),
                    path,
                ));
                continue;
            }
        };

        if truthy_field(&manifest, "format_version").is_none() {
            report.error(Finding::at(
                "Missing format_version",
                "manifest.json is missing format_version field.",
                path,
            ));
        }

        check_header(&manifest, path, report);

        match manifest.get("modules") {
            Some(Value::Array(modules)) => {
                let declares = |module_type: &str| {
                    modules
                        .iter()
                        .any(|m| m.get("type").and_then(Value::as_str) == Some(module_type))
                };
                has_behavior |= declares(PackKind::Behavior.module_type());
                has_resources |= declares(PackKind::Resources.module_type());

                for (idx, module) in modules.iter().enumerate() {
                    check_module(module, idx, path, report);
                }
            }
            _ => report.error(Finding::at(
                "Missing modules",
                "manifest.json is missing modules array.",
                path,
            )),
        }

        if let Some(format_version) = truthy_field(&manifest, "format_version") {
            let is_old = leading_version(format_version)
                .zip(min_version)
                .is_some_and(|(version, min)| version < min);
            if is_old {
                report.warning(Finding::at(
                    "Old Format Version",
                    format!(
                        "Format version {} is older than {}. Consider updating.",
                        version_label(format_version),
                        options.min_format_version
                    ),
                    path,
                ));
            }
        }
    }

    if !has_behavior {
        report.error(Finding::new(
            "No Behavior Pack Manifest",
            "No manifest.json with \"data\" module type found.",
        ));
    }
    if !has_resources {
        report.error(Finding::new(
            "No Resources Pack Manifest",
            "No manifest.json with \"resources\" module type found.",
        ));
    }

    for kind in PackKind::all() {
        check_ambiguous_packs(archive, kind, report);
    }
}

fn check_header(manifest: &Value, path: &str, report: &mut ValidationReport) {
    let Some(header) = truthy_field(manifest, "header") else {
        report.error(Finding::at(
            "Missing header",
            "manifest.json is missing header section.",
            path,
        ));
        return;
    };

    if truthy_field(header, "name").is_none() {
        report.error(Finding::at(
            "Missing Pack Name",
            "manifest.json header is missing name field.",
            path,
        ));
    }
    if truthy_field(header, "description").is_none() {
        report.warning(Finding::at(
            "Missing Pack Description",
            "manifest.json header is missing description field.",
            path,
        ));
    }
    if truthy_field(header, "uuid").is_none() {
        report.error(Finding::at(
            "Missing Pack UUID",
            "manifest.json header is missing uuid field.",
            path,
        ));
    }
    if truthy_field(header, "version").is_none() {
        report.error(Finding::at(
            "Missing Pack Version",
            "manifest.json header is missing version field.",
            path,
        ));
    }
}

fn check_module(module: &Value, idx: usize, path: &str, report: &mut ValidationReport) {
    let module_type = truthy_field(module, "type");
    let type_label = module_type.map_or_else(|| "unknown".to_string(), version_label);

    if module_type.is_none() {
        report.error(Finding::at(
            "Missing Module Type",
            format!("Module {idx} is missing type field."),
            path,
        ));
    }
    if truthy_field(module, "uuid").is_none() {
        report.error(Finding::at(
            "Missing Module UUID",
            format!("Module {idx} ({type_label}) is missing uuid field."),
            path,
        ));
    }
    if truthy_field(module, "version").is_none() {
        report.error(Finding::at(
            "Missing Module Version",
            format!("Module {idx} ({type_label}) is missing version field."),
            path,
        ));
    }
}

/// Warn when several manifests declare the same pack kind
fn check_ambiguous_packs(archive: &AddonArchive, kind: PackKind, report: &mut ValidationReport) {
    let paths = manifests_declaring(archive, kind);
    if paths.len() < 2 {
        return;
    }

    let label = match kind {
        PackKind::Behavior => "Behavior",
        PackKind::Resources => "Resources",
    };
    let chosen = locate_pack(archive, kind).map_or_else(|| "none".to_string(), |root| root.path);

    report.warning(Finding::new(
        format!("Multiple {label} Pack Manifests"),
        format!(
            "{} manifests declare a \"{}\" module: {}. Using {}.",
            paths.len(),
            kind.module_type(),
            paths.join(", "),
            chosen
        ),
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const GOOD_BP: &str = r#"{"format_version":2,"header":{"name":"X","description":"d","uuid":"h1","version":[1,0,0]},"modules":[{"type":"data","uuid":"u1","version":[1,0,0]}]}"#;
    const GOOD_RP: &str = r#"{"format_version":2,"header":{"name":"X","description":"d","uuid":"h2","version":[1,0,0]},"modules":[{"type":"resources","uuid":"u2","version":[1,0,0]}]}"#;

    fn run(addon: &AddonArchive) -> ValidationReport {
        let mut report = ValidationReport::new(addon.name());
        check_manifests(addon, &ValidationOptions::default(), &mut report);
        report
    }

    #[test]
    fn test_complete_manifests_pass() {
        let mut addon = AddonArchive::new("ok.mcaddon");
        addon.write_text("XBehavior/manifest.json", GOOD_BP);
        addon.write_text("XResources/manifest.json", GOOD_RP);
        let report = run(&addon);
        assert!(report.errors.is_empty(), "{:?}", report.errors);
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn test_no_manifests_single_error() {
        let mut addon = AddonArchive::new("none.mcaddon");
        addon.write_text("XBehavior/items/a.json", "{}");
        let report = run(&addon);
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.errors[0].title, "No Manifest Files");
    }

    #[test]
    fn test_missing_fields() {
        let mut addon = AddonArchive::new("bad.mcaddon");
        addon.write_text(
            "XBehavior/manifest.json",
            r#"{"format_version":"1.16.0","header":{"name":"X","version":[1,0,0]},"modules":[{"uuid":""}]}"#,
        );
        addon.write_text("XResources/manifest.json", GOOD_RP);
        let report = run(&addon);

        let titles: Vec<_> = report.errors.iter().map(|f| f.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "Missing Pack UUID",
                "Missing Module Type",
                "Missing Module UUID",
                "Missing Module Version",
                "No Behavior Pack Manifest",
            ]
        );
        assert_eq!(report.errors[2].details, "Module 0 (unknown) is missing uuid field.");

        let warnings: Vec<_> = report.warnings.iter().map(|f| f.title.as_str()).collect();
        assert_eq!(warnings, vec!["Missing Pack Description", "Old Format Version"]);
        assert_eq!(
            report.warnings[1].details,
            "Format version 1.16.0 is older than 1.20.0. Consider updating."
        );
    }

    #[test]
    fn test_invalid_manifest_json() {
        let mut addon = AddonArchive::new("broken.mcaddon");
        addon.write_text("XBehavior/manifest.json", "{");
        let report = run(&addon);
        assert_eq!(report.errors[0].title, "Invalid Manifest JSON");
        assert!(report.errors[0].details.starts_with("Failed to parse manifest.json: "));
    }

    #[test]
    fn test_multiple_behavior_manifests_warn() {
        let mut addon = AddonArchive::new("dup.mcaddon");
        addon.write_text("ABehavior/manifest.json", GOOD_BP);
        addon.write_text("BBehavior/manifest.json", GOOD_BP);
        addon.write_text("XResources/manifest.json", GOOD_RP);
        let report = run(&addon);
        assert!(report.errors.is_empty());
        assert_eq!(report.warnings.len(), 1);
        assert_eq!(report.warnings[0].title, "Multiple Behavior Pack Manifests");
        assert!(report.warnings[0].details.ends_with("Using ABehavior."));
    }

    #[test]
    fn test_leading_version() {
        assert_eq!(leading_version(&json!("1.16.100")), Some(1.16));
        assert_eq!(leading_version(&json!(2)), Some(2.0));
        assert_eq!(leading_version(&json!("1.")), Some(1.0));
        assert_eq!(leading_version(&json!("beta")), None);
        assert_eq!(leading_version(&json!([1, 2])), None);
    }
}
