//! Thumbnails command - clear and rebuild a thumbnail folder

use super::progress::SpinnerProgress;
use crate::{
    PaintrError,
    config::PaintrConfig,
    scan::ScanOptions,
    thumbnail::{self, ThumbnailReport},
};
use colored::Colorize;
use std::path::Path;

type Result<T> = std::result::Result<T, PaintrError>;

/// Execute the thumbnails command
///
/// `source` and `output` default to the configured sketchbook root and
/// thumbnail folder.
///
/// # Errors
/// Returns an error if the source is missing or the output cannot be rebuilt
pub fn execute(config: &PaintrConfig, source: Option<&Path>, output: Option<&Path>, quiet: bool) -> Result<()> {
    let source = source.unwrap_or(&config.sketchbook_root);
    let output = output.unwrap_or(&config.thumbnail_dir);
    let options = config
        .excluded_dirs
        .iter()
        .fold(ScanOptions::new(), |options, name| options.exclude_dir(name.as_str()));

    let report = thumbnail::rebuild_thumbnails(source, output, &options, &mut SpinnerProgress::new(quiet))?;
    if !quiet {
        print_report(&report, output);
    }
    Ok(())
}

fn print_report(report: &ThumbnailReport, output: &Path) {
    println!(
        "Wrote {} thumbnail(s) and {} definition file(s) to {}",
        report.images.to_string().bold(),
        report.definition_files,
        output.display()
    );
    for (path, reason) in &report.failures {
        println!("  {} {}: {reason}", "skipped".yellow(), path.display());
    }
}
