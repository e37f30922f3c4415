//! Filesystem scanner
//!
//! Recursively enumerates the files and directories below a set of roots.
//! Excluded directory names are pruned *before* the walker descends into
//! them, so nothing inside an excluded directory is ever visited; excluded
//! file names are dropped wherever they appear.
//!
//! Entries are visited in file-name order within each directory, which
//! makes repeated scans of an unchanged tree return identical results.
//!
//! # Examples
//!
//! ```no_run
//! use paintr::scan::{self, ScanOptions};
//!
//! let options = ScanOptions::new().exclude_dir(".stfolder");
//! let result = scan::scan(&["/home/me/Drawing/Sketch Track"], &options)?;
//! println!("{} books, {} pages", result.dir_count, result.files.len());
//! # Ok::<(), paintr::scan::ScanError>(())
//! ```

pub mod error;

pub use error::ScanError;

use crate::FileRecord;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

/// Names of directories and files to leave out of a scan
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanOptions {
    /// Directory names whose whole subtree is skipped
    pub excluded_dirs: Vec<String>,
    /// File names that never appear in the results
    pub excluded_files: Vec<String>,
}

impl ScanOptions {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            excluded_dirs: Vec::new(),
            excluded_files: Vec::new(),
        }
    }

    /// Skip every directory with this name (and everything below it).
    #[must_use]
    pub fn exclude_dir<S: Into<String>>(mut self, name: S) -> Self {
        self.excluded_dirs.push(name.into());
        self
    }

    /// Skip every file with this name.
    #[must_use]
    pub fn exclude_file<S: Into<String>>(mut self, name: S) -> Self {
        self.excluded_files.push(name.into());
        self
    }

    /// Whether `entry` must be pruned. Roots are never pruned.
    fn is_excluded(&self, entry: &DirEntry) -> bool {
        if entry.depth() == 0 {
            return false;
        }
        let Some(name) = entry.file_name().to_str() else {
            return false;
        };
        let file_type = entry.file_type();
        if file_type.is_dir() {
            self.excluded_dirs.iter().any(|d| d == name)
        } else {
            self.excluded_files.iter().any(|f| f == name)
        }
    }
}

/// Outcome of a full scan
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanResult {
    /// Number of directories below the roots (roots themselves excluded)
    pub dir_count: usize,
    /// Every file found, in traversal order
    pub files: Vec<FileRecord>,
}

impl ScanResult {
    /// Paths of all scanned files
    #[must_use]
    pub fn paths(&self) -> Vec<PathBuf> {
        self.files.iter().map(|f| f.path.clone()).collect()
    }
}

/// Walk one root, handing every non-root entry that survives exclusion to `visit`.
fn walk<F>(root: &Path, options: &ScanOptions, mut visit: F) -> Result<(), ScanError>
where
    F: FnMut(&DirEntry),
{
    if !root.exists() {
        return Err(ScanError::RootNotFound(root.to_path_buf()));
    }
    if !root.is_dir() {
        return Err(ScanError::NotADirectory(root.to_path_buf()));
    }
    debug!(root = %root.display(), "scanning");

    let walker = WalkDir::new(root)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| !options.is_excluded(entry));

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) if is_dangling_link(&err) => {
                warn!(path = ?err.path(), "skipping dangling symlink");
                continue;
            }
            Err(err) => return Err(ScanError::from_walk(root, err)),
        };
        if entry.depth() == 0 {
            continue;
        }
        visit(&entry);
    }
    Ok(())
}

fn is_dangling_link(err: &walkdir::Error) -> bool {
    err.depth() > 0
        && err.loop_ancestor().is_none()
        && err
            .io_error()
            .is_some_and(|e| e.kind() == std::io::ErrorKind::NotFound)
}

/// Scan every root, collecting the directory count and the file list in one pass.
///
/// # Errors
///
/// * `ScanError::RootNotFound` / `ScanError::NotADirectory` for a bad root.
/// * `ScanError::Cycle` if symlinks loop back into an ancestor.
/// * `ScanError::Walk` for other traversal failures.
pub fn scan<P: AsRef<Path>>(roots: &[P], options: &ScanOptions) -> Result<ScanResult, ScanError> {
    let mut result = ScanResult::default();
    for root in roots {
        walk(root.as_ref(), options, |entry| {
            let file_type = entry.file_type();
            if file_type.is_dir() {
                result.dir_count += 1;
            } else if file_type.is_file() {
                result.files.push(FileRecord::from_path(entry.path()));
            }
        })?;
    }
    Ok(result)
}

/// All file paths below the roots.
///
/// # Errors
///
/// See [`scan`].
pub fn file_paths<P: AsRef<Path>>(roots: &[P], options: &ScanOptions) -> Result<Vec<PathBuf>, ScanError> {
    let mut paths = Vec::new();
    for root in roots {
        walk(root.as_ref(), options, |entry| {
            if entry.file_type().is_file() {
                paths.push(entry.path().to_path_buf());
            }
        })?;
    }
    Ok(paths)
}

/// Number of files below the roots.
///
/// # Errors
///
/// See [`scan`].
pub fn count_files<P: AsRef<Path>>(roots: &[P], options: &ScanOptions) -> Result<usize, ScanError> {
    let mut count = 0;
    for root in roots {
        walk(root.as_ref(), options, |entry| {
            if entry.file_type().is_file() {
                count += 1;
            }
        })?;
    }
    Ok(count)
}

/// Number of directories below the roots. Excluded file names have no effect here.
///
/// # Errors
///
/// See [`scan`].
pub fn count_dirs<P: AsRef<Path>>(roots: &[P], options: &ScanOptions) -> Result<usize, ScanError> {
    let mut count = 0;
    for root in roots {
        walk(root.as_ref(), options, |entry| {
            if entry.file_type().is_dir() {
                count += 1;
            }
        })?;
    }
    Ok(count)
}

/// The most recently modified entry directly inside `dir`.
///
/// Returns `Ok(None)` for an empty directory.
///
/// # Errors
///
/// Returns `ScanError::RootNotFound` if `dir` is missing, or `ScanError::Io`
/// if the directory or an entry's metadata cannot be read.
pub fn latest_file(dir: &Path) -> Result<Option<PathBuf>, ScanError> {
    if !dir.exists() {
        return Err(ScanError::RootNotFound(dir.to_path_buf()));
    }
    let mut latest: Option<(std::time::SystemTime, PathBuf)> = None;
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let modified = entry.metadata()?.modified()?;
        if latest.as_ref().is_none_or(|(newest, _)| modified > *newest) {
            latest = Some((modified, entry.path()));
        }
    }
    Ok(latest.map(|(_, path)| path))
}
