//! Scanner error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while walking the drawing folders
#[derive(Debug, Error)]
pub enum ScanError {
    /// A scan root does not exist
    #[error("Directory not found: {}", .0.display())]
    RootNotFound(PathBuf),

    /// A scan root exists but is not a directory
    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    /// Following symlinks led back into an ancestor directory
    #[error("Symlink cycle at {} (loops back to {})", path.display(), ancestor.display())]
    Cycle { path: PathBuf, ancestor: PathBuf },

    /// Any other traversal failure (permissions, vanished entries)
    #[error("Error while walking {}: {source}", root.display())]
    Walk {
        root: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    /// Represents an I/O error outside of the traversal itself
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ScanError {
    /// Whether this error means a root path was missing
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::RootNotFound(_))
    }

    pub(crate) fn from_walk(root: &std::path::Path, err: walkdir::Error) -> Self {
        if let Some(ancestor) = err.loop_ancestor() {
            return Self::Cycle {
                path: err.path().map(std::path::Path::to_path_buf).unwrap_or_default(),
                ancestor: ancestor.to_path_buf(),
            };
        }
        Self::Walk {
            root: root.to_path_buf(),
            source: err,
        }
    }
}
