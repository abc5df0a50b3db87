//! Pack root discovery
//!
//! A pack root is any folder holding a `manifest.json` whose `modules`
//! declare `type: "data"` (behavior pack) or `type: "resources"` (resource
//! pack). Manifests are visited in archive enumeration order and the first
//! match wins.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::archive::{AddonArchive, file_name, pack_path, parent_folder};

/// Sentinel path for a pack that lives at the archive root
pub const ARCHIVE_ROOT: &str = ".";

/// Manifest file name (matched case-insensitively)
pub const MANIFEST_FILE: &str = "manifest.json";

/// Which half of an addon a pack root belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PackKind {
    /// Behavior pack (`data` module)
    Behavior,
    /// Resource pack (`resources` module)
    Resources,
}

impl PackKind {
    /// Manifest module `type` that identifies this kind of pack
    #[must_use]
    pub fn module_type(self) -> &'static str {
        match self {
            Self::Behavior => "data",
            Self::Resources => "resources",
        }
    }

    /// Suffix the top-level folder of this pack is expected to carry
    #[must_use]
    pub fn folder_suffix(self) -> &'static str {
        match self {
            Self::Behavior => "Behavior",
            Self::Resources => "Resources",
        }
    }

    /// Both kinds, behavior first
    #[must_use]
    pub fn all() -> [Self; 2] {
        [Self::Behavior, Self::Resources]
    }
}

impl fmt::Display for PackKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Behavior => write!(f, "behavior pack"),
            Self::Resources => write!(f, "resource pack"),
        }
    }
}

/// A located pack folder
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct PackRoot {
    /// Pack kind
    pub kind: PackKind,
    /// Folder path without trailing slash, or `"."` at the archive root
    pub path: String,
}

impl PackRoot {
    /// Create a pack root, mapping an empty folder to the archive root
    #[must_use]
    pub fn new(kind: PackKind, path: impl Into<String>) -> Self {
        let path = path.into();
        let path = path.trim_end_matches('/');
        Self {
            kind,
            path: if path.is_empty() {
                ARCHIVE_ROOT.to_string()
            } else {
                path.to_string()
            },
        }
    }

    /// Whether the pack sits at the archive root
    #[must_use]
    pub fn is_archive_root(&self) -> bool {
        self.path == ARCHIVE_ROOT
    }

    /// Folder path for a sub folder of this pack, with trailing slash
    ///
    /// `Pack` + `recipes` gives `Pack/recipes/`; the archive root gives
    /// `recipes/`.
    #[must_use]
    pub fn join(&self, sub: &str) -> String {
        let mut folder = pack_path(&self.path, sub.trim_end_matches('/'));
        folder.push('/');
        folder
    }

    /// Whether an archive path lies inside this pack
    #[must_use]
    pub fn contains(&self, path: &str) -> bool {
        self.is_archive_root() || path.starts_with(&format!("{}/", self.path))
    }
}

impl fmt::Display for PackRoot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.kind, self.path)
    }
}

/// One entry of a manifest's `modules` array
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ManifestModule {
    /// Module type (`data`, `resources`, `script`, ...)
    #[serde(rename = "type", default)]
    pub module_type: Option<String>,
    /// Module UUID
    #[serde(default)]
    pub uuid: Option<String>,
    /// Module version, usually `[major, minor, patch]`
    #[serde(default)]
    pub version: Option<Value>,
}

impl ManifestModule {
    /// Read a module leniently; fields of the wrong type are treated as absent
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        let text = |key: &str| value.get(key).and_then(Value::as_str).map(str::to_string);
        Self {
            module_type: text("type"),
            uuid: text("uuid"),
            version: value.get("version").cloned(),
        }
    }
}

/// A parsed manifest and where it was found
#[derive(Debug, Clone)]
pub struct ManifestInfo {
    /// Archive path of the `manifest.json`
    pub path: String,
    /// Parsed `modules` entries (empty when the array is absent)
    pub modules: Vec<ManifestModule>,
}

impl ManifestInfo {
    /// Whether any module declares the given pack kind
    #[must_use]
    pub fn declares(&self, kind: PackKind) -> bool {
        self.modules
            .iter()
            .any(|m| m.module_type.as_deref() == Some(kind.module_type()))
    }

    /// Folder containing the manifest
    #[must_use]
    pub fn folder(&self) -> String {
        parent_folder(&self.path)
    }
}

/// Whether an archive path names a manifest file
#[must_use]
pub fn is_manifest_path(path: &str) -> bool {
    file_name(path).eq_ignore_ascii_case(MANIFEST_FILE)
}

/// Parse a manifest's modules; `None` when the text is not usable
fn parse_modules(text: &str) -> Option<Vec<ManifestModule>> {
    let value: Value = serde_json::from_str(text).ok()?;
    match value.get("modules") {
        Some(Value::Array(items)) => Some(items.iter().map(ManifestModule::from_value).collect()),
        Some(_) => None,
        None => Some(Vec::new()),
    }
}

/// All readable manifests in enumeration order
///
/// Manifests that fail to decode or parse are skipped.
#[must_use]
pub fn find_manifests(archive: &AddonArchive) -> Vec<ManifestInfo> {
    let mut manifests = Vec::new();

    for (path, _) in archive.files() {
        if !is_manifest_path(path) {
            continue;
        }

        let Ok(text) = archive.read_text(path) else {
            tracing::debug!("Skipping unreadable manifest {}", path);
            continue;
        };

        match parse_modules(&text) {
            Some(modules) => manifests.push(ManifestInfo {
                path: path.to_string(),
                modules,
            }),
            None => tracing::debug!("Skipping unparsable manifest {}", path),
        }
    }

    manifests
}

/// Locate the first pack root of the given kind
#[must_use]
pub fn locate_pack(archive: &AddonArchive, kind: PackKind) -> Option<PackRoot> {
    let mut matches = find_manifests(archive)
        .into_iter()
        .filter(|m| m.declares(kind));

    let first = matches.next()?;
    let extra = matches.count();
    if extra > 0 {
        tracing::warn!(
            "{} declares {} {} manifests, using {}",
            archive.name(),
            extra + 1,
            kind.module_type(),
            first.path
        );
    }

    Some(PackRoot::new(kind, first.folder()))
}

/// Locate the behavior pack (`data` module) root
#[must_use]
pub fn locate_behavior_pack(archive: &AddonArchive) -> Option<PackRoot> {
    locate_pack(archive, PackKind::Behavior)
}

/// Locate the resource pack (`resources` module) root
#[must_use]
pub fn locate_resources_pack(archive: &AddonArchive) -> Option<PackRoot> {
    locate_pack(archive, PackKind::Resources)
}

/// Paths of every manifest declaring the given pack kind
#[must_use]
pub fn manifests_declaring(archive: &AddonArchive, kind: PackKind) -> Vec<String> {
    find_manifests(archive)
        .into_iter()
        .filter(|m| m.declares(kind))
        .map(|m| m.path)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manifest(module_type: &str) -> String {
        format!(r#"{{"format_version":2,"modules":[{{"type":"{module_type}","uuid":"u","version":[1,0,0]}}]}}"#)
    }

    #[test]
    fn test_locates_both_packs() {
        let mut addon = AddonArchive::new("a.mcaddon");
        addon.write_text("FooBehavior/manifest.json", &manifest("data"));
        addon.write_text("FooResources/manifest.json", &manifest("resources"));

        let bp = locate_behavior_pack(&addon).unwrap();
        let rp = locate_resources_pack(&addon).unwrap();
        assert_eq!(bp.path, "FooBehavior");
        assert_eq!(rp.path, "FooResources");
        assert_eq!(bp.join("recipes"), "FooBehavior/recipes/");
    }

    #[test]
    fn test_root_manifest_maps_to_dot() {
        let mut addon = AddonArchive::new("a.mcpack");
        addon.write_text("manifest.json", &manifest("data"));

        let bp = locate_behavior_pack(&addon).unwrap();
        assert!(bp.is_archive_root());
        assert_eq!(bp.join("items"), "items/");
        assert!(bp.contains("items/apple.json"));
        assert!(locate_resources_pack(&addon).is_none());
    }

    #[test]
    fn test_skips_invalid_and_irrelevant_manifests() {
        let mut addon = AddonArchive::new("a.mcaddon");
        addon.write_text("Broken/manifest.json", "{ not json");
        addon.write_text("Script/manifest.json", &manifest("script"));
        addon.write_text("NoModules/manifest.json", r#"{"header":{}}"#);
        addon.write_text("Real/manifest.json", &manifest("data"));

        assert_eq!(locate_behavior_pack(&addon).unwrap().path, "Real");
        assert_eq!(find_manifests(&addon).len(), 3);
    }

    #[test]
    fn test_first_match_wins() {
        let mut addon = AddonArchive::new("a.mcaddon");
        addon.write_text("Second/manifest.json", &manifest("data"));
        addon.write_text("First/manifest.json", &manifest("data"));

        assert_eq!(locate_behavior_pack(&addon).unwrap().path, "Second");
        assert_eq!(
            manifests_declaring(&addon, PackKind::Behavior),
            vec!["Second/manifest.json", "First/manifest.json"]
        );
    }

    #[test]
    fn test_no_manifests() {
        let mut addon = AddonArchive::new("a.mcaddon");
        addon.write_text("Pack/items/a.json", "{}");
        assert!(locate_behavior_pack(&addon).is_none());
        assert!(locate_resources_pack(&addon).is_none());
    }

    #[test]
    fn test_contains_requires_folder_boundary() {
        let root = PackRoot::new(PackKind::Resources, "PackRes/");
        assert_eq!(root.path, "PackRes");
        assert!(root.contains("PackRes/items/a.json"));
        assert!(!root.contains("PackResources2/items/a.json"));
    }
}
