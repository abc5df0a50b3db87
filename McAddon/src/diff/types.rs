//! Core types for package diffs

use std::fmt;

use serde::Serialize;
use serde_json::Value;

use crate::merge::canonical_json;
use crate::pack::JsonFile;

/// Type of change detected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ChangeType {
    /// Value was added
    Added,
    /// Value was removed
    Removed,
    /// Value was modified
    Modified,
}

impl fmt::Display for ChangeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Added => write!(f, "+"),
            Self::Removed => write!(f, "-"),
            Self::Modified => write!(f, "~"),
        }
    }
}

/// A change to one value inside a JSON document
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValueChange {
    /// JSON pointer (RFC 6901) to the value; empty for the document root
    pub pointer: String,
    /// Type of change
    pub change_type: ChangeType,
    /// Old value (for Modified/Removed)
    pub old: Option<Value>,
    /// New value (for Modified/Added)
    pub new: Option<Value>,
}

impl fmt::Display for ValueChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let show = |v: &Option<Value>| v.as_ref().map(Value::to_string).unwrap_or_default();
        let pointer = if self.pointer.is_empty() { "/" } else { &self.pointer };
        match self.change_type {
            ChangeType::Added => write!(f, "+ {pointer}: {}", show(&self.new)),
            ChangeType::Removed => write!(f, "- {pointer}: {}", show(&self.old)),
            ChangeType::Modified => {
                write!(f, "~ {pointer}: {} -> {}", show(&self.old), show(&self.new))
            }
        }
    }
}

/// A JSON file present in both packages with different content
#[derive(Debug, Clone)]
pub struct ModifiedFile {
    /// Archive path (same in both packages)
    pub path: String,
    /// File in the first package
    pub a: JsonFile,
    /// File in the second package
    pub b: JsonFile,
}

impl ModifiedFile {
    /// Value-level changes from `a` to `b`
    ///
    /// Objects are compared key by key, arrays element by element by index.
    #[must_use]
    pub fn changes(&self) -> Vec<ValueChange> {
        let mut changes = Vec::new();
        collect_changes(String::new(), &self.a.parsed, &self.b.parsed, &mut changes);
        changes
    }
}

/// Escape one pointer segment (`~` becomes `~0`, `/` becomes `~1`)
fn escape_segment(segment: &str) -> String {
    segment.replace('~', "~0").replace('/', "~1")
}

fn collect_changes(pointer: String, old: &Value, new: &Value, out: &mut Vec<ValueChange>) {
    if canonical_json(old) == canonical_json(new) {
        return;
    }

    match (old, new) {
        (Value::Object(old_map), Value::Object(new_map)) => {
            for (key, old_value) in old_map {
                let child = format!("{pointer}/{}", escape_segment(key));
                match new_map.get(key) {
                    Some(new_value) => collect_changes(child, old_value, new_value, out),
                    None => out.push(ValueChange {
                        pointer: child,
                        change_type: ChangeType::Removed,
                        old: Some(old_value.clone()),
                        new: None,
                    }),
                }
            }
            for (key, new_value) in new_map {
                if !old_map.contains_key(key) {
                    out.push(ValueChange {
                        pointer: format!("{pointer}/{}", escape_segment(key)),
                        change_type: ChangeType::Added,
                        old: None,
                        new: Some(new_value.clone()),
                    });
                }
            }
        }
        (Value::Array(old_items), Value::Array(new_items)) => {
            for i in 0..old_items.len().max(new_items.len()) {
                let child = format!("{pointer}/{i}");
                match (old_items.get(i), new_items.get(i)) {
                    (Some(o), Some(n)) => collect_changes(child, o, n, out),
                    (Some(o), None) => out.push(ValueChange {
                        pointer: child,
                        change_type: ChangeType::Removed,
                        old: Some(o.clone()),
                        new: None,
                    }),
                    (None, Some(n)) => out.push(ValueChange {
                        pointer: child,
                        change_type: ChangeType::Added,
                        old: None,
                        new: Some(n.clone()),
                    }),
                    (None, None) => {}
                }
            }
        }
        _ => out.push(ValueChange {
            pointer,
            change_type: ChangeType::Modified,
            old: Some(old.clone()),
            new: Some(new.clone()),
        }),
    }
}

/// Classification of every JSON file across two packages
#[derive(Debug, Clone, Default)]
pub struct PackageDiff {
    /// Name of the first package
    pub archive_a: String,
    /// Name of the second package
    pub archive_b: String,
    /// Files only in the first package, in its enumeration order
    pub only_in_a: Vec<JsonFile>,
    /// Files only in the second package, in its enumeration order
    pub only_in_b: Vec<JsonFile>,
    /// Files in both whose JSON differs, in the first package's order
    pub modified: Vec<ModifiedFile>,
}

impl PackageDiff {
    /// Whether the packages have no JSON differences
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.only_in_a.is_empty() && self.only_in_b.is_empty() && self.modified.is_empty()
    }

    /// Total number of differing files
    #[must_use]
    pub fn total(&self) -> usize {
        self.only_in_a.len() + self.only_in_b.len() + self.modified.len()
    }

    /// Get a summary of changes
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "{} only in {}, {} only in {}, {} modified",
            self.only_in_a.len(),
            self.archive_a,
            self.only_in_b.len(),
            self.archive_b,
            self.modified.len()
        )
    }
}

impl fmt::Display for PackageDiff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.summary())?;
        for file in &self.only_in_a {
            writeln!(f, "{} {}", ChangeType::Removed, file.path)?;
        }
        for file in &self.only_in_b {
            writeln!(f, "{} {}", ChangeType::Added, file.path)?;
        }
        for file in &self.modified {
            writeln!(f, "{} {}", ChangeType::Modified, file.path)?;
        }
        Ok(())
    }
}
