//! Semantic diff of two addon packages
//!
//! Every parsable `.json` file of both packages is classified as only in the
//! first, only in the second, or modified. Two files count as equal when
//! their canonical JSON forms match, so reformatting or reordering keys is
//! not a change. Files that fail to parse are left out on both sides.
//!
//! ```no_run
//! use mcaddon::archive::AddonArchive;
//! use mcaddon::diff::diff_archives;
//!
//! let old = AddonArchive::open("v1.mcaddon")?;
//! let new = AddonArchive::open("v2.mcaddon")?;
//! let diff = diff_archives(&old, &new);
//!
//! println!("{}", diff.summary());
//! for file in &diff.modified {
//!     for change in file.changes() {
//!         println!("{}: {}", file.path, change);
//!     }
//! }
//! # Ok::<(), mcaddon::Error>(())
//! ```

mod types;

use std::collections::{HashMap, HashSet};

use crate::archive::AddonArchive;
use crate::merge::canonical_json;
use crate::pack::{JsonFile, json_files};

pub use types::{ChangeType, ModifiedFile, PackageDiff, ValueChange};

/// Compare the JSON content of two packages
#[must_use]
pub fn diff_archives(a: &AddonArchive, b: &AddonArchive) -> PackageDiff {
    let files_a = json_files(a, None);
    let files_b = json_files(b, None);

    let index_b: HashMap<&str, &JsonFile> = files_b.iter().map(|f| (f.path.as_str(), f)).collect();
    let paths_a: HashSet<&str> = files_a.iter().map(|f| f.path.as_str()).collect();

    let mut diff = PackageDiff {
        archive_a: a.name().to_string(),
        archive_b: b.name().to_string(),
        ..PackageDiff::default()
    };

    for file in &files_a {
        match index_b.get(file.path.as_str()) {
            None => diff.only_in_a.push(file.clone()),
            Some(other) => {
                if canonical_json(&file.parsed) != canonical_json(&other.parsed) {
                    diff.modified.push(ModifiedFile {
                        path: file.path.clone(),
                        a: file.clone(),
                        b: (*other).clone(),
                    });
                }
            }
        }
    }

    diff.only_in_b = files_b
        .iter()
        .filter(|f| !paths_a.contains(f.path.as_str()))
        .cloned()
        .collect();

    tracing::info!("Diff {} vs {}: {}", diff.archive_a, diff.archive_b, diff.summary());
    diff
}
