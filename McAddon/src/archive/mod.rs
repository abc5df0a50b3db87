//! In-memory addon archive
//!
//! `.mcaddon` and `.mcpack` files are plain ZIP archives. [`AddonArchive`]
//! decodes every entry up front and keeps them in central-directory order, so
//! every later scan (locator, index, differ, validator) walks the same
//! enumeration order the archive was written in.
//!
//! ```no_run
//! use mcaddon::archive::AddonArchive;
//!
//! let addon = AddonArchive::open("MyAddon.mcaddon")?;
//! for path in addon.paths() {
//!     println!("{path}");
//! }
//! let modified = addon.with_file("MyAddonBehavior/recipes/new.json", b"{}".to_vec());
//! modified.save("MyAddon_edited.mcaddon")?;
//! # Ok::<(), mcaddon::Error>(())
//! ```

pub mod paths;

use std::io::{Cursor, Read, Write};
use std::path::Path;

use indexmap::IndexMap;
use serde_json::Value;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

use crate::error::{Error, Result};

pub use paths::{extension_is, file_name, normalize_path, pack_path, parent_folder, split_segments};

/// UTF-8 byte order mark, tolerated at the start of text entries
const UTF8_BOM: &str = "\u{feff}";

/// Contents of a single archive entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryData {
    /// Directory marker (path ends with `/`)
    Directory,
    /// File payload
    File(Vec<u8>),
}

impl EntryData {
    /// Whether this entry is a directory marker
    #[must_use]
    pub fn is_dir(&self) -> bool {
        matches!(self, Self::Directory)
    }
}

/// What a top-level name in the archive turned out to be
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TopLevelItem {
    /// Name is used as a folder (directory marker or has children)
    pub is_dir: bool,
    /// Name is a loose file at the archive root
    pub is_file: bool,
}

/// An addon archive held entirely in memory
#[derive(Debug, Clone, Default)]
pub struct AddonArchive {
    name: String,
    entries: IndexMap<String, EntryData>,
}

impl AddonArchive {
    /// Create an empty archive with the given file name
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: IndexMap::new(),
        }
    }

    /// Decode a ZIP archive from bytes
    ///
    /// # Errors
    /// Returns an error if the bytes are not a readable ZIP archive.
    pub fn from_bytes(name: impl Into<String>, bytes: &[u8]) -> Result<Self> {
        let name = name.into();
        let mut zip = ZipArchive::new(Cursor::new(bytes))?;
        let mut entries = IndexMap::with_capacity(zip.len());

        for i in 0..zip.len() {
            let mut file = zip.by_index(i)?;
            let path = normalize_path(file.name());

            if file.is_dir() {
                entries.insert(path, EntryData::Directory);
            } else {
                let mut data = Vec::with_capacity(usize::try_from(file.size()).unwrap_or(0));
                file.read_to_end(&mut data)?;
                entries.insert(path, EntryData::File(data));
            }
        }

        tracing::debug!("Loaded {} entries from {}", entries.len(), name);
        Ok(Self { name, entries })
    }

    /// Read an archive from disk
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or is not a ZIP archive.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)?;
        let name = path
            .file_name()
            .map_or_else(|| "addon.mcaddon".to_string(), |n| n.to_string_lossy().into_owned());
        Self::from_bytes(name, &bytes)
    }

    /// File name the archive was loaded from
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Derive an output file name by inserting `suffix` before `.mcaddon`
    #[must_use]
    pub fn output_name(&self, suffix: &str) -> String {
        paths::with_suffix(&self.name, suffix)
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    /// Number of entries, directory markers included
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the archive has no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries in enumeration order
    pub fn entries(&self) -> impl Iterator<Item = (&str, &EntryData)> {
        self.entries.iter().map(|(p, e)| (p.as_str(), e))
    }

    /// All entry paths in enumeration order
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// File entries (no directory markers) in enumeration order
    pub fn files(&self) -> impl Iterator<Item = (&str, &[u8])> {
        self.entries.iter().filter_map(|(p, e)| match e {
            EntryData::File(data) => Some((p.as_str(), data.as_slice())),
            EntryData::Directory => None,
        })
    }

    /// Paths of file entries whose extension matches `ext` (case-insensitive)
    pub fn files_with_extension<'a>(&'a self, ext: &'a str) -> impl Iterator<Item = &'a str> {
        self.files()
            .map(|(p, _)| p)
            .filter(move |p| extension_is(p, ext))
    }

    /// Whether an entry exists at exactly this path
    #[must_use]
    pub fn contains(&self, path: &str) -> bool {
        self.entries.contains_key(path)
    }

    /// Whether the entry at `path` is a file
    #[must_use]
    pub fn is_file(&self, path: &str) -> bool {
        matches!(self.entries.get(path), Some(EntryData::File(_)))
    }

    /// Whether the entry at `path` is a directory marker
    #[must_use]
    pub fn is_dir(&self, path: &str) -> bool {
        matches!(self.entries.get(path), Some(EntryData::Directory))
    }

    /// Raw bytes of a file entry
    ///
    /// # Errors
    /// Returns an error if the entry is missing or is a directory.
    pub fn read_bytes(&self, path: &str) -> Result<&[u8]> {
        match self.entries.get(path) {
            Some(EntryData::File(data)) => Ok(data),
            Some(EntryData::Directory) => Err(Error::EntryIsDirectory(path.to_string())),
            None => Err(Error::EntryNotFound(path.to_string())),
        }
    }

    /// File entry decoded as UTF-8 (a leading byte order mark is dropped)
    ///
    /// # Errors
    /// Returns an error if the entry is missing, a directory, or not UTF-8.
    pub fn read_text(&self, path: &str) -> Result<String> {
        let text = String::from_utf8(self.read_bytes(path)?.to_vec())?;
        Ok(match text.strip_prefix(UTF8_BOM) {
            Some(stripped) => stripped.to_string(),
            None => text,
        })
    }

    /// File entry parsed as JSON
    ///
    /// # Errors
    /// Returns an error if the entry cannot be read or does not parse.
    pub fn read_json(&self, path: &str) -> Result<Value> {
        let text = self.read_text(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Top-level names and whether each is a folder or a loose file
    ///
    /// The first entry seen for a name decides its classification.
    #[must_use]
    pub fn top_level_items(&self) -> IndexMap<String, TopLevelItem> {
        let mut items = IndexMap::new();

        for (path, entry) in &self.entries {
            let parts = split_segments(path);
            let Some(top) = parts.first() else {
                continue;
            };

            items.entry((*top).to_string()).or_insert(TopLevelItem {
                is_dir: entry.is_dir() || parts.len() > 1,
                is_file: parts.len() == 1 && !entry.is_dir(),
            });
        }

        items
    }

    // ------------------------------------------------------------------
    // Mutations
    // ------------------------------------------------------------------

    /// Add or overwrite a file; overwriting keeps the entry's position
    pub fn write(&mut self, path: impl Into<String>, data: impl Into<Vec<u8>>) {
        let path = normalize_path(&path.into());
        self.entries.insert(path, EntryData::File(data.into()));
    }

    /// Add or overwrite a text file
    pub fn write_text(&mut self, path: impl Into<String>, text: &str) {
        self.write(path, text.as_bytes().to_vec());
    }

    /// Add or overwrite a JSON file, pretty-printed with two-space indent
    ///
    /// # Errors
    /// Returns an error if the value cannot be serialized.
    pub fn write_json(&mut self, path: impl Into<String>, value: &Value) -> Result<()> {
        let text = serde_json::to_string_pretty(value)?;
        self.write_text(path, &text);
        Ok(())
    }

    /// Add a directory marker (a trailing `/` is added if missing)
    pub fn add_directory(&mut self, path: &str) {
        let mut dir = normalize_path(path).trim_end_matches('/').to_string();
        dir.push('/');
        self.entries.entry(dir).or_insert(EntryData::Directory);
    }

    /// Remove a file, or a folder and everything below it
    ///
    /// Returns `true` if anything was removed.
    pub fn remove(&mut self, path: &str) -> bool {
        let before = self.entries.len();
        let removed = self.entries.shift_remove(path);

        if removed.is_none() || path.ends_with('/') || matches!(removed, Some(EntryData::Directory)) {
            let folder = format!("{}/", path.trim_end_matches('/'));
            self.entries.retain(|p, _| !p.starts_with(&folder));
        }

        before != self.entries.len()
    }

    /// Copy of this archive with one file added or overwritten
    #[must_use]
    pub fn with_file(&self, path: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        let mut copy = self.clone();
        copy.write(path, data);
        copy
    }

    /// Copy of this archive with a file or folder removed
    #[must_use]
    pub fn without_file(&self, path: &str) -> Self {
        let mut copy = self.clone();
        copy.remove(path);
        copy
    }

    // ------------------------------------------------------------------
    // Serialization
    // ------------------------------------------------------------------

    /// Encode the archive as a deflate-compressed ZIP
    ///
    /// # Errors
    /// Returns an error if the ZIP writer fails.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

        for (path, entry) in &self.entries {
            match entry {
                EntryData::Directory => {
                    writer.add_directory(path.trim_end_matches('/'), options)?;
                }
                EntryData::File(data) => {
                    writer.start_file(path.as_str(), options)?;
                    writer.write_all(data)?;
                }
            }
        }

        let cursor = writer.finish()?;
        Ok(cursor.into_inner())
    }

    /// Encode the archive and write it to disk
    ///
    /// # Errors
    /// Returns an error if encoding or writing fails.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let bytes = self.to_bytes()?;
        std::fs::write(path.as_ref(), bytes)?;
        tracing::info!("Wrote {} ({} entries)", path.as_ref().display(), self.len());
        Ok(())
    }
}
