//! Raw JSON file editing

use serde_json::Value;

use crate::archive::AddonArchive;
use crate::error::{Error, Result};

/// Replace the text of a JSON file, keeping it only if it parses
///
/// The text is stored as given, not reformatted. The file is created if it
/// does not exist yet.
///
/// # Errors
/// Returns [`Error::InvalidJson`] and leaves the archive untouched if `text`
/// is not valid JSON.
pub fn set_json_file(archive: &mut AddonArchive, path: &str, text: &str) -> Result<Value> {
    let parsed: Value = serde_json::from_str(text).map_err(|e| Error::InvalidJson {
        path: path.to_string(),
        message: e.to_string(),
    })?;
    archive.write_text(path, text);
    tracing::debug!("Saved {}", path);
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_text_is_saved_verbatim() {
        let mut addon = AddonArchive::new("j.mcaddon");
        addon.write_text("B/items/a.json", "{}");

        let text = "{ \"b\": 1,  \"a\": 2 }";
        let parsed = set_json_file(&mut addon, "B/items/a.json", text).unwrap();
        assert_eq!(parsed["a"], 2);
        assert_eq!(addon.read_text("B/items/a.json").unwrap(), text);
    }

    #[test]
    fn test_invalid_text_is_rejected() {
        let mut addon = AddonArchive::new("j.mcaddon");
        addon.write_text("B/items/a.json", "{}");

        let err = set_json_file(&mut addon, "B/items/a.json", "{\"a\":").unwrap_err();
        assert!(matches!(err, Error::InvalidJson { ref path, .. } if path == "B/items/a.json"));
        assert_eq!(addon.read_text("B/items/a.json").unwrap(), "{}");
    }
}
