//! CLI command for comparing two addons

use std::path::Path;

use serde_json::json;

use super::{OutputFormat, open_archive};
use crate::diff::diff_archives;

/// Compare the JSON content of two addons
pub fn execute(a: &Path, b: &Path, format: OutputFormat, changes: bool) -> anyhow::Result<()> {
    let archive_a = open_archive(a)?;
    let archive_b = open_archive(b)?;
    let result = diff_archives(&archive_a, &archive_b);

    if format == OutputFormat::Json {
        let paths = |files: &[crate::pack::JsonFile]| files.iter().map(|f| f.path.clone()).collect::<Vec<_>>();
        let output = json!({
            "a": result.archive_a,
            "b": result.archive_b,
            "identical": result.is_empty(),
            "only_in_a": paths(&result.only_in_a),
            "only_in_b": paths(&result.only_in_b),
            "modified": result.modified.iter().map(|m| {
                if changes {
                    json!({ "path": m.path, "changes": m.changes() })
                } else {
                    json!({ "path": m.path })
                }
            }).collect::<Vec<_>>(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    if result.is_empty() {
        println!("No JSON differences");
        return Ok(());
    }

    print!("{result}");
    if changes {
        for file in &result.modified {
            println!();
            println!("{}:", file.path);
            for change in file.changes() {
                println!("  {change}");
            }
        }
    }

    Ok(())
}
