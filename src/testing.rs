//! Testing utilities for paintr
//!
//! This module provides `DrawingTree`, a temporary drawing folder that
//! tests populate with tagged files, definition files and small images.
//!
//! Only available when compiled with `cfg(test)`.

use image::{ImageBuffer, Rgb};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory tree that is removed when dropped
///
/// # Examples
/// ```ignore
/// let tree = DrawingTree::new();
/// tree.file("book 1/20240301 -- sketch.jpg");
/// tree.write(".filetags", "sketch #sketchbook\n");
/// ```
pub struct DrawingTree {
    dir: TempDir,
}

impl DrawingTree {
    /// Create an empty tree
    ///
    /// # Panics
    /// Panics if the temporary directory cannot be created.
    #[must_use]
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temporary drawing tree"),
        }
    }

    /// Root of the tree
    #[must_use]
    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Create an empty directory (and its parents)
    ///
    /// # Panics
    /// Panics if the directory cannot be created.
    pub fn dir(&self, relative: &str) -> PathBuf {
        let path = self.root().join(relative);
        fs::create_dir_all(&path).expect("Failed to create test directory");
        path
    }

    /// Create a file with placeholder content
    pub fn file(&self, relative: &str) -> PathBuf {
        self.write(relative, "test content")
    }

    /// Create a file with the given content, creating parent directories
    ///
    /// # Panics
    /// Panics if the file cannot be written.
    pub fn write(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.root().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, content).expect("Failed to write test file");
        path
    }

    /// Create a real RGB image; the format follows the extension
    ///
    /// The left half is red and the right half blue so greyscale
    /// conversion is observable.
    ///
    /// # Panics
    /// Panics if the image cannot be encoded or written.
    pub fn image(&self, relative: &str, width: u32, height: u32) -> PathBuf {
        let path = self.root().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        let img = ImageBuffer::from_fn(width, height, |x, _| {
            if x < width / 2 {
                Rgb([200u8, 30, 30])
            } else {
                Rgb([30u8, 30, 200])
            }
        });
        img.save(&path).expect("Failed to write test image");
        path
    }
}

impl Default for DrawingTree {
    fn default() -> Self {
        Self::new()
    }
}
