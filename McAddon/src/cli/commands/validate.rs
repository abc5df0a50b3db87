//! CLI command for addon validation

use std::path::Path;
use std::time::Instant;

use console::style;

use super::{OutputFormat, open_archive};
use crate::cli::progress::{print_done, print_progress};
use crate::progress::AddonProgress;
use crate::validate::{
    ValidationOptions, ValidationReport, batch_validate, find_addon_files, validate_with_options,
};

/// Validate one addon or every addon below a folder
///
/// Exits with status 1 if any addon fails.
pub fn execute(path: &Path, format: OutputFormat, options: &ValidationOptions, quiet: bool) -> anyhow::Result<()> {
    let show_progress = !quiet && format == OutputFormat::Text;
    let noop = |_: &AddonProgress| {};
    let progress: &(dyn Fn(&AddonProgress) + Sync + Send) = if show_progress { &print_progress } else { &noop };
    let start = Instant::now();

    let passed = if path.is_dir() {
        let files = find_addon_files(path)?;
        if files.is_empty() {
            println!("No .mcaddon files found in: {}", path.display());
            return Ok(());
        }

        let result = batch_validate(&files, options, progress);
        match format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
            OutputFormat::Text => {
                for report in &result.reports {
                    print_report(report);
                }
                for (file, reason) in &result.unreadable {
                    println!("{} {}: {reason}", style("unreadable").red().bold(), file.display());
                }
                println!(
                    "\n{} of {} addon(s) passed",
                    result.passed_count(),
                    files.len()
                );
            }
        }
        result.all_passed()
    } else {
        let archive = open_archive(path)?;
        let report = validate_with_options(&archive, options, progress);
        match format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
            OutputFormat::Text => print_report(&report),
        }
        report.passed
    };

    if show_progress {
        print_done(start.elapsed());
    }

    if passed {
        Ok(())
    } else {
        std::process::exit(1);
    }
}

fn print_report(report: &ValidationReport) {
    println!();
    if report.passed {
        println!("{} {}", style("PASSED").green().bold(), report.summary());
    } else {
        println!("{} {}", style("FAILED").red().bold(), report.summary());
    }

    for finding in &report.errors {
        println!("  {} {finding}", style("error").red());
    }
    for finding in &report.warnings {
        println!("  {} {finding}", style("warning").yellow());
    }
}
