//! End-to-end tests over in-memory addons

mod common;

use common::{AddonBuilder, block, item, manifest, shaped_recipe};
use mcaddon::prelude::*;
use mcaddon::validate::{StructurePolicy, validate_structure};
use pretty_assertions::assert_eq;
use serde_json::json;
use tempfile::tempdir;

fn identifiers(records: &[ContentRecord]) -> Vec<String> {
    let mut ids: Vec<String> = records.iter().map(|r| r.identifier.clone()).collect();
    ids.sort();
    ids
}

#[test]
fn test_two_pack_layout_has_no_structural_errors() {
    let addon = AddonBuilder::new("scenario.mcaddon").with_packs("My").build();

    let report = validate_structure(&addon, StructurePolicy::Strict);
    assert!(report.errors.is_empty());
    assert_eq!(report.behavior_folder.as_deref(), Some("MyBehavior"));
    assert_eq!(report.resources_folder.as_deref(), Some("MyResources"));
}

#[test]
fn test_locator_ignores_enumeration_order() {
    let forward = AddonBuilder::new("a.mcaddon")
        .json("BP/manifest.json", &manifest("data"))
        .json("RP/manifest.json", &manifest("resources"))
        .item("BP/items/a.json", "demo:a")
        .build();
    let reversed = AddonBuilder::new("b.mcaddon")
        .item("BP/items/a.json", "demo:a")
        .json("RP/manifest.json", &manifest("resources"))
        .json("BP/manifest.json", &manifest("data"))
        .build();

    for addon in [&forward, &reversed] {
        assert_eq!(locate_behavior_pack(addon).map(|r| r.path), Some("BP".to_string()));
        assert_eq!(locate_resources_pack(addon).map(|r| r.path), Some("RP".to_string()));
    }
}

#[test]
fn test_content_index_lists_by_kind() {
    let addon = AddonBuilder::new("content.mcaddon")
        .with_packs("C")
        .item("CBehavior/items/apple.json", "demo:apple")
        .json("CBehavior/blocks/ore.json", &block("demo:ore"))
        .json("CBehavior/recipes/torch.json", &shaped_recipe("demo:torch"))
        .text("CBehavior/items/broken.json", "{ not json")
        .build();

    let index = PackIndex::new(&addon);
    assert_eq!(identifiers(index.items()), vec!["demo:apple"]);
    assert_eq!(identifiers(index.blocks()), vec!["demo:ore"]);
    assert_eq!(identifiers(index.recipes()), vec!["demo:torch"]);
    assert_eq!(
        find_item(&addon, "demo:apple").map(|r| r.path),
        Some("CBehavior/items/apple.json".to_string())
    );
}

#[test]
fn test_combine_into_empty_overlay_keeps_all_content() {
    let source = AddonBuilder::new("source.mcaddon")
        .with_packs("S")
        .item("SBehavior/items/apple.json", "demo:apple")
        .json("SBehavior/blocks/ore.json", &block("demo:ore"))
        .json("SBehavior/recipes/torch.json", &shaped_recipe("demo:torch"))
        .text("SResources/texts/en_US.lang", "item.demo:apple.name=Apple")
        .build();
    let dest = AddonBuilder::new("dest.mcaddon").with_packs("D").build();

    let result = combine(&source, &dest).unwrap();
    let combined = &result.archive;

    assert_eq!(identifiers(&list_items(combined)), identifiers(&list_items(&source)));
    assert_eq!(identifiers(&list_blocks(combined)), identifiers(&list_blocks(&source)));
    assert_eq!(identifiers(&list_recipes(combined)), identifiers(&list_recipes(&source)));
    assert!(combined.is_file("DResources/texts/en_US.lang"));

    assert_eq!(result.behavior.added, 3);
    assert_eq!(result.behavior.merged, 1);
    assert_eq!(result.resources.added, 1);
    assert_eq!(
        combined.read_json("DBehavior/manifest.json").unwrap(),
        dest.read_json("DBehavior/manifest.json").unwrap()
    );
}

#[test]
fn test_combine_merges_collisions() {
    let source = AddonBuilder::new("s.mcaddon")
        .with_packs("S")
        .json("SBehavior/items/apple.json", &json!({"minecraft:item": {"tags": ["a", "b"], "extra": 1}}))
        .text("SResources/texts/en_US.lang", "item.x.name=New\nitem.y.name=Y")
        .text("SResources/textures/a.png", "source")
        .build();
    let dest = AddonBuilder::new("d.mcaddon")
        .with_packs("D")
        .json("DBehavior/items/apple.json", &json!({"minecraft:item": {"tags": ["a"], "extra": 0}}))
        .text("DResources/texts/en_US.lang", "item.x.name=Old")
        .text("DResources/textures/a.png", "dest")
        .build();

    let result = combine(&source, &dest).unwrap();
    let combined = &result.archive;

    assert_eq!(
        combined.read_json("DBehavior/items/apple.json").unwrap(),
        json!({"minecraft:item": {"tags": ["a", "b"], "extra": 0}})
    );
    assert_eq!(
        combined.read_text("DResources/texts/en_US.lang").unwrap(),
        "item.x.name=New\nitem.y.name=Y"
    );
    assert_eq!(combined.read_text("DResources/textures/a.png").unwrap(), "dest");
    assert_eq!(result.resources.skipped, 1);
}

#[test]
fn test_combine_rejects_loose_files() {
    let source = AddonBuilder::new("s.mcaddon")
        .with_packs("S")
        .text("readme.txt", "hi")
        .build();
    let dest = AddonBuilder::new("d.mcaddon").with_packs("D").build();

    let err = combine(&source, &dest).unwrap_err();
    assert!(matches!(err, Error::InvalidStructure { ref archive, .. } if archive == "s.mcaddon"));
}

#[test]
fn test_missing_pack_uuid_is_one_error() {
    let mut behavior = manifest("data");
    behavior["header"].as_object_mut().unwrap().remove("uuid");

    let addon = AddonBuilder::new("uuid.mcaddon")
        .json("UBehavior/manifest.json", &behavior)
        .json("UResources/manifest.json", &manifest("resources"))
        .build();

    let report = validate(&addon);
    assert_eq!(report.errors.len(), 1);
    assert_eq!(report.errors[0].title, "Missing Pack UUID");
    assert_eq!(report.errors[0].path.as_deref(), Some("UBehavior/manifest.json"));
    assert!(!report.passed);
}

#[test]
fn test_no_localization_files_is_only_a_warning() {
    let addon = AddonBuilder::new("lang.mcaddon")
        .with_packs("L")
        .item("LBehavior/items/apple.json", "demo:apple")
        .build();

    let report = validate(&addon);
    assert!(report.errors.is_empty());
    let titles: Vec<&str> = report.warnings.iter().map(|f| f.title.as_str()).collect();
    assert_eq!(titles, vec!["No Localization Files"]);
    assert!(report.passed);
}

#[test]
fn test_migration_scenario() {
    let document = json!({
        "format_version": "1.20.50",
        "minecraft:item": {
            "description": {"identifier": "demo:apple"},
            "components": {
                "minecraft:food": {"nutrition": 4},
                "minecraft:icon": {"texture": "x"},
                "minecraft:custom_foo": {}
            }
        }
    });

    let migration = migrate_item_to_legacy_format(&document);
    assert_eq!(
        migration.behavior_pack_data.unwrap()["minecraft:item"]["components"],
        json!({"minecraft:food": {"nutrition": 4}})
    );
    assert_eq!(
        migration.resource_pack_data.unwrap()["minecraft:item"]["components"],
        json!({"minecraft:icon": {"texture": "x"}})
    );
    assert_eq!(migration.removed_components, vec!["minecraft:custom_foo"]);
}

#[test]
fn test_food_effects_then_validate() {
    let apple = json!({
        "format_version": "1.20.50",
        "minecraft:item": {
            "description": {"identifier": "demo:apple"},
            "components": {"minecraft:food": {"nutrition": 4}, "minecraft:icon": {"texture": "apple"}}
        }
    });
    let addon = AddonBuilder::new("food.mcaddon")
        .with_packs("F")
        .json("FBehavior/items/apple.json", &apple)
        .text("FResources/texts/en_US.lang", "item.demo:apple.name=Apple")
        .build();

    let item = find_item(&addon, "demo:apple").unwrap();
    let outcome = apply_food_effects(&addon, &item, &[FoodEffect::new("regeneration", 5, 2)]).unwrap();

    let report = validate(&outcome.archive);
    assert!(report.passed, "{report}");
    assert!(outcome.archive.is_file("FResources/items/apple.json"));
}

#[test]
fn test_save_and_reopen() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("round.mcaddon");

    let mut addon = AddonBuilder::new("round.mcaddon")
        .with_packs("R")
        .item("RBehavior/items/apple.json", "demo:apple")
        .build();
    addon.add_directory("RBehavior/functions");
    addon.save(&path).unwrap();

    let reopened = AddonArchive::open(&path).unwrap();
    assert_eq!(reopened.name(), "round.mcaddon");
    assert_eq!(reopened.paths().collect::<Vec<_>>(), addon.paths().collect::<Vec<_>>());
    assert!(reopened.is_dir("RBehavior/functions/"));
    assert!(diff_archives(&addon, &reopened).is_empty());
}

#[test]
fn test_settings_drive_output_names() {
    let settings = Settings::from_toml_str("[output]\ncombined_suffix = \"_merged\"").unwrap();
    let addon = AddonArchive::new("Pack.McAddon");
    assert_eq!(addon.output_name(&settings.output.combined_suffix), "Pack_merged.mcaddon");
}
