//! In-memory addon fixtures shared by the integration tests

#![allow(dead_code)]

use mcaddon::archive::AddonArchive;
use serde_json::{Value, json};

/// Builds an addon entry by entry
pub struct AddonBuilder {
    archive: AddonArchive,
}

impl AddonBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            archive: AddonArchive::new(name),
        }
    }

    /// Behavior and resource manifests under `<prefix>Behavior` and `<prefix>Resources`
    pub fn with_packs(self, prefix: &str) -> Self {
        self.json(&format!("{prefix}Behavior/manifest.json"), &manifest("data"))
            .json(&format!("{prefix}Resources/manifest.json"), &manifest("resources"))
    }

    pub fn json(mut self, path: &str, value: &Value) -> Self {
        self.archive
            .write_json(path, value)
            .expect("fixture JSON serializes");
        self
    }

    pub fn text(mut self, path: &str, text: &str) -> Self {
        self.archive.write_text(path, text);
        self
    }

    pub fn item(self, path: &str, identifier: &str) -> Self {
        self.json(path, &item(identifier))
    }

    pub fn build(self) -> AddonArchive {
        self.archive
    }
}

pub fn manifest(module_type: &str) -> Value {
    json!({
        "format_version": 2,
        "header": {"name": "X", "description": "test pack", "uuid": "h1", "version": [1, 0, 0]},
        "modules": [{"type": module_type, "uuid": "u1", "version": [1, 0, 0]}]
    })
}

pub fn item(identifier: &str) -> Value {
    json!({
        "format_version": "1.20.50",
        "minecraft:item": {
            "description": {"identifier": identifier},
            "components": {"minecraft:max_stack_size": 64}
        }
    })
}

pub fn block(identifier: &str) -> Value {
    json!({
        "format_version": "1.20.50",
        "minecraft:block": {"description": {"identifier": identifier}, "components": {}}
    })
}

pub fn shaped_recipe(identifier: &str) -> Value {
    json!({
        "format_version": "1.20.50",
        "minecraft:recipe_shaped": {
            "description": {"identifier": identifier},
            "pattern": ["#"],
            "key": {"#": {"item": "minecraft:stick"}},
            "result": {"item": "minecraft:torch"}
        }
    })
}
