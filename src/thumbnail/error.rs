//! Thumbnail error types

use crate::scan::ScanError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while generating thumbnails
#[derive(Debug, Error)]
pub enum ThumbnailError {
    /// Decoding, processing or encoding an image failed
    #[error("Image error in {}: {source}", path.display())]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Source path has no file name to name the thumbnail after
    #[error("No file name in path: {}", .0.display())]
    NoFileName(PathBuf),

    /// Walking the source folder failed
    #[error(transparent)]
    Scan(#[from] ScanError),

    /// Creating, clearing or copying into the output folder failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ThumbnailError {
    /// Whether the source folder is missing
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        match self {
            Self::Scan(err) => err.is_not_found(),
            _ => false,
        }
    }
}

/// Result type for thumbnail operations
pub type Result<T> = std::result::Result<T, ThumbnailError>;
