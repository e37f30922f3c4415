//! Terminal progress for thumbnail rebuilds

use crate::thumbnail::ProgressReporter;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::time::Duration;

const TEMPLATE: &str = "{spinner:.green} {prefix} [{bar:30.cyan/blue}] {pos}/{len} {msg}";

/// Draws an `indicatif` bar per rebuilt folder, or nothing when quiet
pub struct SpinnerProgress {
    bar: Option<ProgressBar>,
    quiet: bool,
}

impl SpinnerProgress {
    #[must_use]
    pub const fn new(quiet: bool) -> Self {
        Self { bar: None, quiet }
    }
}

impl ProgressReporter for SpinnerProgress {
    fn start(&mut self, label: &str, total: usize) {
        if self.quiet {
            return;
        }
        let bar = ProgressBar::new(total as u64);
        bar.set_style(
            ProgressStyle::default_bar()
                .template(TEMPLATE)
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("#>-"),
        );
        bar.set_prefix(format!("Generating thumbnails of {label}"));
        bar.enable_steady_tick(Duration::from_millis(100));
        self.bar = Some(bar);
    }

    fn advance(&mut self, path: &Path) {
        if let Some(bar) = &self.bar {
            if let Some(name) = path.file_name() {
                bar.set_message(name.to_string_lossy().into_owned());
            }
            bar.inc(1);
        }
    }

    fn finish(&mut self) {
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }
    }
}
