//! Pack model: locating pack roots and indexing their content
//!
//! - [`locator`] finds behavior/resource pack roots from `manifest.json` files
//! - [`content`] lists items, blocks and recipes by identifier
//! - [`index`] memoises both for a single archive

pub mod content;
pub mod index;
pub mod locator;

pub use content::{
    ContentKind, ContentRecord, JsonFile, filter_items, find_block, find_by_identifier, find_item,
    find_resource_pack_item_file, food_items, is_truthy, json_files, list_blocks, list_content,
    list_items, list_recipes, truthy_field,
};
pub use index::PackIndex;
pub use locator::{
    ManifestInfo, ManifestModule, PackKind, PackRoot, find_manifests, is_manifest_path,
    locate_behavior_pack, locate_pack, locate_resources_pack, manifests_declaring,
};
