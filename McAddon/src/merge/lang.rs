//! `.lang` localization files
//!
//! A `.lang` file is a list of `key=value` lines. Blank lines, `#` comments
//! and lines without `=` are dropped on parse; the rest are kept trimmed and
//! in file order.

use std::fmt;

use indexmap::IndexMap;

/// Ordered key to line map of a `.lang` file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LangFile {
    entries: IndexMap<String, String>,
}

impl LangFile {
    /// Create an empty file
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `.lang` text
    ///
    /// The key is everything before the first `=`; a later line with the same
    /// key replaces the earlier one in place.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let mut file = Self::new();
        for line in text.split('\n') {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            if let Some((key, _)) = trimmed.split_once('=') {
                file.entries.insert(key.to_string(), trimmed.to_string());
            }
        }
        file
    }

    /// Full `key=value` line for a key
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Value part of the line for a key
    #[must_use]
    pub fn value(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(|line| line.split_once('=')).map(|(_, v)| v)
    }

    /// Check if a key exists
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Keys in file order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Get number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Add or replace a `key=value` entry
    pub fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), format!("{key}={value}"));
    }

    /// Merge another file into this one; `other` wins on shared keys
    ///
    /// Returns the number of keys that were new.
    pub fn merge_from(&mut self, other: &LangFile) -> usize {
        let mut added = 0;
        for (key, line) in &other.entries {
            if self.entries.insert(key.clone(), line.clone()).is_none() {
                added += 1;
            }
        }
        added
    }
}

impl fmt::Display for LangFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.entries.values().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{line}")?;
        }
        Ok(())
    }
}

/// Merge two `.lang` texts, source entries overriding destination entries
#[must_use]
pub fn merge_lang(dest: &str, source: &str) -> String {
    let mut merged = LangFile::parse(dest);
    merged.merge_from(&LangFile::parse(source));
    merged.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_skips_comments_and_blank_lines() {
        let lang = LangFile::parse("## header\n\nitem.a.name=Apple\r\n  tile.b.name=Block  \nno equals here\n");
        assert_eq!(lang.len(), 2);
        assert_eq!(lang.get("item.a.name"), Some("item.a.name=Apple"));
        assert_eq!(lang.value("tile.b.name"), Some("Block"));
        assert!(!lang.contains_key("no equals here"));
    }

    #[test]
    fn test_merge_source_wins() {
        let dest = "item.a.name=Apple\nitem.b.name=Berry";
        let source = "item.b.name=Blueberry\nitem.c.name=Cherry";
        assert_eq!(
            merge_lang(dest, source),
            "item.a.name=Apple\nitem.b.name=Blueberry\nitem.c.name=Cherry"
        );
    }

    #[test]
    fn test_merge_from_counts_new_keys() {
        let mut dest = LangFile::parse("a=1");
        let added = dest.merge_from(&LangFile::parse("a=2\nb=3"));
        assert_eq!(added, 1);
        assert_eq!(dest.to_string(), "a=2\nb=3");
    }

    #[test]
    fn test_set_and_values_with_equals() {
        let mut lang = LangFile::new();
        lang.set("item.x.name", "a=b");
        assert_eq!(lang.value("item.x.name"), Some("a=b"));
        assert_eq!(lang.keys().collect::<Vec<_>>(), vec!["item.x.name"]);
    }
}
