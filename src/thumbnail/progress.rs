//! Progress reporting for long-running rebuilds

use std::path::Path;

/// Receives progress while a folder is being processed
///
/// Library code only calls these hooks; rendering is up to the frontend
/// (a terminal spinner in the CLI, nothing in tests).
pub trait ProgressReporter {
    /// Processing of `total` files is about to start
    fn start(&mut self, label: &str, total: usize);

    /// `path` is being processed
    fn advance(&mut self, path: &Path);

    /// All files were processed
    fn finish(&mut self);
}

/// Reporter that ignores all progress
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl ProgressReporter for NoProgress {
    fn start(&mut self, _label: &str, _total: usize) {}

    fn advance(&mut self, _path: &Path) {}

    fn finish(&mut self) {}
}
