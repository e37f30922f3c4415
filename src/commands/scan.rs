//! Scan command - directory and file totals below drawing folders

use crate::{
    PaintrError, output,
    scan::{self, ScanOptions},
};
use std::path::PathBuf;

/// What the scan command prints
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanMode {
    /// Directory and file totals
    Count,
    /// Every file found, then the totals
    List,
    /// The most recent entry of each root
    Latest,
}

/// Execute the scan command
///
/// # Errors
/// Returns an error if a root is missing or cannot be walked
pub fn execute(roots: &[PathBuf], options: &ScanOptions, mode: ScanMode, quiet: bool) -> Result<(), PaintrError> {
    match mode {
        ScanMode::Count => {
            let dirs = scan::count_dirs(roots, options)?;
            let files = scan::count_files(roots, options)?;
            println!("{}", output::scan_summary(dirs, files, quiet));
        }
        ScanMode::List => {
            let scanned = scan::scan(roots, options)?;
            for path in scanned.paths() {
                if quiet {
                    println!("{}", path.display());
                } else {
                    println!("  {}", output::colorize_path(&path));
                }
            }
            if !quiet {
                println!("{}", output::scan_summary(scanned.dir_count, scanned.files.len(), false));
            }
        }
        ScanMode::Latest => {
            for root in roots {
                match scan::latest_file(root)? {
                    Some(path) => println!("{}", path.display()),
                    None if !quiet => println!("{} is empty", root.display()),
                    None => {}
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::DrawingTree;

    #[test]
    fn test_missing_root() {
        let tree = DrawingTree::new();
        let missing = [tree.root().join("missing")];
        for mode in [ScanMode::Count, ScanMode::List, ScanMode::Latest] {
            let err = execute(&missing, &ScanOptions::new(), mode, true).unwrap_err();
            assert!(err.is_not_found());
        }
    }

    #[test]
    fn test_existing_root() {
        let tree = DrawingTree::new();
        tree.file("book 1/a -- ink.jpg");
        let roots = [tree.root().to_path_buf()];
        for mode in [ScanMode::Count, ScanMode::List, ScanMode::Latest] {
            assert!(execute(&roots, &ScanOptions::new(), mode, true).is_ok());
        }
    }
}
