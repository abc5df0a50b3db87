//! Settings for mcaddon.toml

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::validate::{DEFAULT_MIN_FORMAT_VERSION, DEFAULT_MISSING_NAME_PREVIEW, ValidationOptions};

/// Settings file looked up in the working directory
pub const LOCAL_SETTINGS_FILE: &str = "mcaddon.toml";

fn default_combined_suffix() -> String {
    "_combined".to_string()
}

fn default_edited_suffix() -> String {
    "_edited".to_string()
}

fn default_recipe_suffix() -> String {
    "_web".to_string()
}

fn default_food_suffix() -> String {
    "_modified".to_string()
}

fn default_min_format_version() -> String {
    DEFAULT_MIN_FORMAT_VERSION.to_string()
}

fn default_missing_name_preview() -> usize {
    DEFAULT_MISSING_NAME_PREVIEW
}

/// All settings (mcaddon.toml)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub output: OutputSettings,
    #[serde(default)]
    pub validation: ValidationSettings,
}

/// Output file naming
///
/// Each suffix is inserted before the `.mcaddon` extension of the input name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputSettings {
    #[serde(default = "default_combined_suffix")]
    pub combined_suffix: String,
    #[serde(default = "default_edited_suffix")]
    pub edited_suffix: String,
    #[serde(default = "default_recipe_suffix")]
    pub recipe_suffix: String,
    #[serde(default = "default_food_suffix")]
    pub food_suffix: String,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            combined_suffix: default_combined_suffix(),
            edited_suffix: default_edited_suffix(),
            recipe_suffix: default_recipe_suffix(),
            food_suffix: default_food_suffix(),
        }
    }
}

/// Validator thresholds
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationSettings {
    #[serde(default = "default_min_format_version")]
    pub min_format_version: String,
    #[serde(default = "default_missing_name_preview")]
    pub missing_name_preview: usize,
}

impl Default for ValidationSettings {
    fn default() -> Self {
        Self {
            min_format_version: default_min_format_version(),
            missing_name_preview: default_missing_name_preview(),
        }
    }
}

impl Settings {
    /// Parse settings from TOML text
    ///
    /// # Errors
    /// Returns [`Error::Config`] if the text is not valid TOML for these settings.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Self::parse(text, Path::new(LOCAL_SETTINGS_FILE))
    }

    /// Load settings from a file
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        Self::parse(&text, path)
    }

    /// Platform settings file (`<config dir>/mcaddon/config.toml`)
    #[must_use]
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("mcaddon").join("config.toml"))
    }

    /// Load the first settings file found, or defaults
    ///
    /// Looks for `mcaddon.toml` in the working directory, then the platform
    /// settings file. A file that exists but fails to parse is an error.
    ///
    /// # Errors
    /// Returns an error if a found settings file cannot be read or parsed.
    pub fn discover() -> Result<Self> {
        let candidates = std::iter::once(PathBuf::from(LOCAL_SETTINGS_FILE)).chain(Self::user_config_path());
        Self::discover_in(candidates)
    }

    fn discover_in(candidates: impl IntoIterator<Item = PathBuf>) -> Result<Self> {
        for path in candidates {
            if path.is_file() {
                tracing::debug!("Loading settings from {}", path.display());
                return Self::load(&path);
            }
        }
        Ok(Self::default())
    }

    /// Validator options from these settings
    #[must_use]
    pub fn validation_options(&self) -> ValidationOptions {
        ValidationOptions {
            min_format_version: self.validation.min_format_version.clone(),
            missing_name_preview: self.validation.missing_name_preview,
        }
    }

    fn parse(text: &str, path: &Path) -> Result<Self> {
        toml::from_str(text).map_err(|e| Error::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let settings = Settings::from_toml_str("").unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.output.combined_suffix, "_combined");
        assert_eq!(settings.output.food_suffix, "_modified");
        assert_eq!(settings.validation_options().min_format_version, "1.20.0");
        assert_eq!(settings.validation_options().missing_name_preview, 5);
    }

    #[test]
    fn test_partial_sections() {
        let settings = Settings::from_toml_str(
            "[output]\nrecipe_suffix = \"_recipes\"\n\n[validation]\nmissing_name_preview = 10\n",
        )
        .unwrap();
        assert_eq!(settings.output.recipe_suffix, "_recipes");
        assert_eq!(settings.output.edited_suffix, "_edited");
        assert_eq!(settings.validation.missing_name_preview, 10);
        assert_eq!(settings.validation.min_format_version, "1.20.0");
    }

    #[test]
    fn test_invalid_toml() {
        assert!(matches!(
            Settings::from_toml_str("[validation]\nmissing_name_preview = \"many\""),
            Err(Error::Config { .. })
        ));
    }

    #[test]
    fn test_load_and_discover() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mcaddon.toml");
        fs::write(&path, "[validation]\nmin_format_version = \"1.21.0\"\n").unwrap();

        let loaded = Settings::load(&path).unwrap();
        assert_eq!(loaded.validation.min_format_version, "1.21.0");

        let missing = dir.path().join("absent.toml");
        let found = Settings::discover_in([missing.clone(), path]).unwrap();
        assert_eq!(found, loaded);
        assert_eq!(Settings::discover_in([missing]).unwrap(), Settings::default());
    }
}
