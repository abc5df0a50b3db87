//! Memoised per-archive lookups

use std::cell::OnceCell;

use super::content::{self, ContentKind, ContentRecord};
use super::locator::{self, PackKind, PackRoot};
use crate::archive::AddonArchive;

/// Lazily computed pack roots and content listings for one archive
///
/// The index holds a shared borrow, so the archive cannot change underneath
/// it. Build a new index after writing to the archive.
#[derive(Debug)]
pub struct PackIndex<'a> {
    archive: &'a AddonArchive,
    behavior: OnceCell<Option<PackRoot>>,
    resources: OnceCell<Option<PackRoot>>,
    items: OnceCell<Vec<ContentRecord>>,
    blocks: OnceCell<Vec<ContentRecord>>,
    recipes: OnceCell<Vec<ContentRecord>>,
}

impl<'a> PackIndex<'a> {
    /// Create an empty index over `archive`
    #[must_use]
    pub fn new(archive: &'a AddonArchive) -> Self {
        Self {
            archive,
            behavior: OnceCell::new(),
            resources: OnceCell::new(),
            items: OnceCell::new(),
            blocks: OnceCell::new(),
            recipes: OnceCell::new(),
        }
    }

    /// Archive being indexed
    #[must_use]
    pub fn archive(&self) -> &'a AddonArchive {
        self.archive
    }

    /// Located pack root of a kind
    #[must_use]
    pub fn pack(&self, kind: PackKind) -> Option<&PackRoot> {
        let cell = match kind {
            PackKind::Behavior => &self.behavior,
            PackKind::Resources => &self.resources,
        };
        cell.get_or_init(|| locator::locate_pack(self.archive, kind))
            .as_ref()
    }

    /// Behavior pack root
    #[must_use]
    pub fn behavior_pack(&self) -> Option<&PackRoot> {
        self.pack(PackKind::Behavior)
    }

    /// Resource pack root
    #[must_use]
    pub fn resources_pack(&self) -> Option<&PackRoot> {
        self.pack(PackKind::Resources)
    }

    /// Records of a kind; empty when there is no behavior pack
    #[must_use]
    pub fn records(&self, kind: ContentKind) -> &[ContentRecord] {
        let cell = match kind {
            ContentKind::Item => &self.items,
            ContentKind::Block => &self.blocks,
            ContentKind::Recipe => &self.recipes,
        };
        cell.get_or_init(|| {
            if self.behavior_pack().is_none() {
                Vec::new()
            } else {
                content::list_content(self.archive, kind)
            }
        })
    }

    /// All items
    #[must_use]
    pub fn items(&self) -> &[ContentRecord] {
        self.records(ContentKind::Item)
    }

    /// All blocks
    #[must_use]
    pub fn blocks(&self) -> &[ContentRecord] {
        self.records(ContentKind::Block)
    }

    /// All recipes
    #[must_use]
    pub fn recipes(&self) -> &[ContentRecord] {
        self.records(ContentKind::Recipe)
    }

    /// First record of a kind with this identifier
    #[must_use]
    pub fn find(&self, kind: ContentKind, identifier: &str) -> Option<&ContentRecord> {
        self.records(kind).iter().find(|r| r.identifier == identifier)
    }
}
