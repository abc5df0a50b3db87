//! CLI command for combining two addons

use std::path::Path;
use std::time::Instant;

use super::{open_archive, output_path};
use crate::cli::progress::{DISK, print_done, print_progress, simple_spinner};
use crate::merge::combine_with_progress;
use crate::progress::AddonProgress;

/// Merge `source` into `destination` and save the result
pub fn execute(
    source: &Path,
    destination: &Path,
    output: Option<&Path>,
    suffix: &str,
    quiet: bool,
) -> anyhow::Result<()> {
    let start = Instant::now();
    let source_archive = open_archive(source)?;
    let dest_archive = open_archive(destination)?;

    let result = if quiet {
        combine_with_progress(&source_archive, &dest_archive, &|_: &AddonProgress| {})?
    } else {
        combine_with_progress(&source_archive, &dest_archive, &print_progress)?
    };

    let out = output_path(destination, &dest_archive, suffix, output);
    if quiet {
        result.archive.save(&out)?;
    } else {
        let spinner = simple_spinner(&format!("{DISK}Writing {}", out.display()));
        result.archive.save(&out)?;
        spinner.finish_and_clear();
    }

    println!("Behavior pack: {}", result.behavior);
    println!("Resource pack: {}", result.resources);
    println!("Saved {}", out.display());

    if !quiet {
        print_done(start.elapsed());
    }
    Ok(())
}
