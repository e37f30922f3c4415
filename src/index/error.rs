//! Aggregator error types

use crate::scan::ScanError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while building a tag index
#[derive(Debug, Error)]
pub enum IndexError {
    /// The tag definition source could not be opened
    #[error("Tag definitions not found: {}", .0.display())]
    DefinitionsNotFound(PathBuf),

    /// The definition source exists but could not be read
    #[error("Error while reading tag definitions {}: {source}", path.display())]
    Definitions {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Scanning the drawing folders failed
    #[error(transparent)]
    Scan(#[from] ScanError),
}

impl IndexError {
    /// Whether a definition source or scan root was missing
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        match self {
            Self::DefinitionsNotFound(_) => true,
            Self::Scan(err) => err.is_not_found(),
            Self::Definitions { .. } => false,
        }
    }

    pub(crate) fn from_io(path: &std::path::Path, err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            Self::DefinitionsNotFound(path.to_path_buf())
        } else {
            Self::Definitions {
                path: path.to_path_buf(),
                source: err,
            }
        }
    }
}
