//! Error types for `McAddon`

use std::path::PathBuf;

use thiserror::Error;

/// The error type for `McAddon` operations.
///
/// Only fatal conditions end up here: the archive cannot be opened, a
/// precondition of a requested operation is unmet, or an explicit edit is
/// rejected. Per-file problems found while indexing, diffing or validating
/// are skipped or reported as [`crate::validate::Finding`]s instead.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    // ==================== IO Errors ====================
    /// IO error from file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ==================== Archive Errors ====================
    /// The bytes are not a readable ZIP archive.
    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// The requested entry does not exist in the archive.
    #[error("entry not found in archive: {0}")]
    EntryNotFound(String),

    /// The requested path is a directory marker, not a file.
    #[error("entry is a directory: {0}")]
    EntryIsDirectory(String),

    // ==================== Package Structure Errors ====================
    /// An archive does not meet the structural preconditions of an operation.
    #[error("invalid structure in \"{archive}\": {details}")]
    InvalidStructure {
        /// Name of the offending archive.
        archive: String,
        /// First structural problem found.
        details: String,
    },

    /// No manifest with a `data` module was found.
    #[error("could not find behavior pack in \"{0}\"")]
    BehaviorPackNotFound(String),

    // ==================== Content Errors ====================
    /// No item with the given identifier exists in the behavior pack.
    #[error("item not found: {0}")]
    ItemNotFound(String),

    /// An item cannot take food effects because it has no food component.
    #[error("item {0} has no minecraft:food component")]
    NotAFoodItem(String),

    /// A food effect definition is out of range.
    #[error("food effect {index}: {message}")]
    InvalidFoodEffect {
        /// One-based position of the effect in the request.
        index: usize,
        /// What is wrong with it.
        message: String,
    },

    /// Text submitted for a JSON file does not parse.
    #[error("cannot save {path}: invalid JSON - {message}")]
    InvalidJson {
        /// Archive path that was being edited.
        path: String,
        /// Parser message.
        message: String,
    },

    /// The texture to replace or remove does not exist.
    #[error("texture not found: {0}")]
    TextureNotFound(String),

    // ==================== Parsing Errors ====================
    /// JSON parsing or serialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// UTF-8 conversion error.
    #[error("UTF-8 conversion error: {0}")]
    Utf8Error(#[from] std::string::FromUtf8Error),

    /// Settings file could not be parsed.
    #[error("config error in {path}: {message}")]
    Config {
        /// Settings file path.
        path: PathBuf,
        /// Parser message.
        message: String,
    },

    // ==================== File System Errors ====================
    /// Directory traversal error.
    #[error("directory walk error: {0}")]
    WalkDirError(String),
}

/// Result type alias for `McAddon` operations.
pub type Result<T> = std::result::Result<T, Error>;
