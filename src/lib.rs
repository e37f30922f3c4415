//! Paintr - tag-driven progress tracking for drawings
//!
//! Drawings are tagged through their filenames (`20240301 -- sketchbook figures.jpg`).
//! This library scans drawing folders, aggregates the tags listed in a
//! `.filetags` definition file into a [`index::TagIndex`], turns the counts
//! into levels on a square-root curve and renders a progress dashboard from
//! tiny thumbnails of the drawings.

use std::path::{Path, PathBuf};
use thiserror::Error;

pub mod cli;
pub mod commands;
pub mod completions;
pub mod config;
pub mod dashboard;
pub mod index;
pub mod level;
pub mod output;
pub mod scan;
pub mod tags;
pub mod thumbnail;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum PaintrError {
    /// Walking a drawing folder failed
    #[error("Scan error: {0}")]
    Scan(#[from] scan::ScanError),
    /// Building a tag index failed
    #[error("Index error: {0}")]
    Index(#[from] index::IndexError),
    /// Rebuilding thumbnails failed
    #[error("Thumbnail error: {0}")]
    Thumbnail(#[from] thumbnail::ThumbnailError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// JSON output failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// CSV output failed
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl PaintrError {
    /// Whether the error comes from a missing definition file or root folder
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        match self {
            Self::Scan(e) => e.is_not_found(),
            Self::Index(e) => e.is_not_found(),
            Self::Thumbnail(e) => e.is_not_found(),
            _ => false,
        }
    }
}

/// A scanned file: its full path and the filename tags are parsed from
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FileRecord {
    pub path: PathBuf,
    pub name: String,
}

impl FileRecord {
    /// Create a record, taking the name from the last path component
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self {
            path: path.to_path_buf(),
            name,
        }
    }
}
