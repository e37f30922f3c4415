//! Tag aggregation
//!
//! Combines a tag definition source with a scan of the drawing folders into a
//! [`TagIndex`]: for every defined tag, the filenames that carry it, plus the
//! number of directories scanned and the list of files that matched at least
//! one defined tag.
//!
//! `dir_count` counts every directory of the scan, whether or not the files
//! inside match a tag (a directory is a book or a session); `file_count` only
//! holds files that matched.
//!
//! # Examples
//!
//! ```no_run
//! use paintr::index::build_index;
//! use paintr::scan::ScanOptions;
//! use std::path::Path;
//!
//! let thumbs = Path::new("thumbnails");
//! let index = build_index(
//!     &thumbs.join(".filetags"),
//!     &[thumbs],
//!     Some(&["#sketchbook".to_string()][..]),
//!     &ScanOptions::new(),
//! )?;
//! println!("{} pages in {} books", index.file_count.len(), index.dir_count);
//! # Ok::<(), paintr::index::IndexError>(())
//! ```

pub mod error;

pub use error::IndexError;

use crate::scan::{self, ScanOptions, ScanResult};
use crate::tags::{TagDefinitions, TagSet, is_tagged};
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::path::Path;
use tracing::debug;

/// Key under which the directory total is reported
pub const DIR_COUNT_KEY: &str = "dir_count";
/// Key under which the matched files are reported
pub const FILE_COUNT_KEY: &str = "file_count";

/// Filenames carrying one tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagEntry {
    pub tag: String,
    pub files: Vec<String>,
}

impl TagEntry {
    #[must_use]
    pub const fn new(tag: String) -> Self {
        Self {
            tag,
            files: Vec::new(),
        }
    }
}

/// Tag → filenames, with directory and matched-file totals
///
/// Tags keep the order of the definition source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagIndex {
    /// Directories below the scanned roots
    pub dir_count: usize,
    /// Files carrying at least one indexed tag, in scan order
    pub file_count: Vec<String>,
    /// One entry per indexed tag
    pub tags: Vec<TagEntry>,
}

impl TagIndex {
    /// Filenames for `tag`, if the tag is indexed
    #[must_use]
    pub fn get(&self, tag: &str) -> Option<&[String]> {
        self.tags
            .iter()
            .find(|entry| entry.tag == tag)
            .map(|entry| entry.files.as_slice())
    }

    /// Indexed tag names in order
    pub fn tag_names(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(|entry| entry.tag.as_str())
    }

    /// Number of matched files, the experience fed to the level curve
    #[must_use]
    pub fn experience(&self) -> usize {
        self.file_count.len()
    }

    /// The last `n` matched files (fewer if there are not that many)
    #[must_use]
    pub fn recent(&self, n: usize) -> &[String] {
        let start = self.file_count.len().saturating_sub(n);
        &self.file_count[start..]
    }

    /// Collapse every filename list to its length
    #[must_use]
    pub fn tally(&self) -> TagTally {
        TagTally {
            dir_count: self.dir_count,
            file_count: self.file_count.len(),
            tags: self
                .tags
                .iter()
                .map(|entry| TagCount {
                    tag: entry.tag.clone(),
                    count: entry.files.len(),
                })
                .collect(),
        }
    }
}

impl Serialize for TagIndex {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.tags.len() + 2))?;
        map.serialize_entry(DIR_COUNT_KEY, &self.dir_count)?;
        map.serialize_entry(FILE_COUNT_KEY, &self.file_count)?;
        for entry in &self.tags {
            map.serialize_entry(&entry.tag, &entry.files)?;
        }
        map.end()
    }
}

/// Number of files carrying one tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagCount {
    pub tag: String,
    pub count: usize,
}

/// Counting form of a [`TagIndex`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagTally {
    pub dir_count: usize,
    pub file_count: usize,
    pub tags: Vec<TagCount>,
}

impl TagTally {
    #[must_use]
    pub fn get(&self, tag: &str) -> Option<usize> {
        self.tags.iter().find(|t| t.tag == tag).map(|t| t.count)
    }
}

impl Serialize for TagTally {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.tags.len() + 2))?;
        map.serialize_entry(DIR_COUNT_KEY, &self.dir_count)?;
        map.serialize_entry(FILE_COUNT_KEY, &self.file_count)?;
        for entry in &self.tags {
            map.serialize_entry(&entry.tag, &entry.count)?;
        }
        map.end()
    }
}

/// Build an index from already-loaded definitions and an existing scan.
///
/// Tags named like the reserved keys (`dir_count`, `file_count`) are skipped.
#[must_use]
pub fn aggregate<S: AsRef<str>>(
    definitions: &TagDefinitions,
    filter: Option<&[S]>,
    scanned: &ScanResult,
) -> TagIndex {
    let tags = definitions
        .select(filter)
        .into_iter()
        .filter(|tag| {
            let reserved = tag == DIR_COUNT_KEY || tag == FILE_COUNT_KEY;
            if reserved {
                debug!(tag = %tag, "ignoring definition of a reserved key");
            }
            !reserved
        })
        .map(TagEntry::new)
        .collect();

    let mut index = TagIndex {
        dir_count: scanned.dir_count,
        file_count: Vec::new(),
        tags,
    };

    for record in scanned.files.iter().filter(|r| is_tagged(&r.name)) {
        let file_tags = TagSet::parse(&record.name);
        let mut matched = false;
        for entry in &mut index.tags {
            if file_tags.contains(&entry.tag) {
                entry.files.push(record.name.clone());
                matched = true;
            }
        }
        if matched {
            index.file_count.push(record.name.clone());
        }
    }
    index
}

/// Load the definition source, scan `roots` and aggregate.
///
/// # Errors
///
/// * `IndexError::DefinitionsNotFound` if `definitions` cannot be opened.
/// * `IndexError::Scan` if a root is missing or the walk fails.
pub fn build_index<P: AsRef<Path>, S: AsRef<str>>(
    definitions: &Path,
    roots: &[P],
    filter: Option<&[S]>,
    options: &ScanOptions,
) -> Result<TagIndex, IndexError> {
    let defs = TagDefinitions::load(definitions).map_err(|e| IndexError::from_io(definitions, e))?;
    let scanned = scan::scan(roots, options)?;
    let index = aggregate(&defs, filter, &scanned);
    debug!(
        definitions = %definitions.display(),
        tags = index.tags.len(),
        matched = index.file_count.len(),
        dirs = index.dir_count,
        "built tag index"
    );
    Ok(index)
}

/// [`build_index`] followed by [`TagIndex::tally`].
///
/// # Errors
///
/// See [`build_index`].
pub fn build_tally<P: AsRef<Path>, S: AsRef<str>>(
    definitions: &Path,
    roots: &[P],
    filter: Option<&[S]>,
    options: &ScanOptions,
) -> Result<TagTally, IndexError> {
    build_index(definitions, roots, filter, options).map(|index| index.tally())
}
