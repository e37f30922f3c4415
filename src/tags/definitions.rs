//! Tag definition source (`.filetags`)
//!
//! One definition per line: a tag token followed by free text, typically a
//! `#category` label:
//!
//! ```text
//! sketchbook #sketchbook
//! figures #skill figure drawing
//! digital #digital
//! ```

use std::fs;
use std::io::{self, BufRead};
use std::path::Path;

/// One line of the definition source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagDefinition {
    /// Leading token of the line
    pub tag: String,
    /// The whole (trimmed) line, used for filter matching
    pub line: String,
}

/// All definitions, in file order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagDefinitions {
    definitions: Vec<TagDefinition>,
}

impl TagDefinitions {
    /// Parse definitions from text. Lines without a token are skipped.
    #[must_use]
    pub fn parse(source: &str) -> Self {
        Self {
            definitions: source.lines().filter_map(parse_line).collect(),
        }
    }

    /// Read definitions line by line from `reader`
    ///
    /// # Errors
    /// Returns any I/O error raised by the reader.
    pub fn from_reader<R: BufRead>(reader: R) -> io::Result<Self> {
        let mut definitions = Vec::new();
        for line in reader.lines() {
            if let Some(def) = parse_line(&line?) {
                definitions.push(def);
            }
        }
        Ok(Self { definitions })
    }

    /// Load definitions from a file
    ///
    /// # Errors
    /// Returns the I/O error from opening or reading `path`; a missing file
    /// yields `io::ErrorKind::NotFound`.
    pub fn load(path: &Path) -> io::Result<Self> {
        let file = fs::File::open(path)?;
        Self::from_reader(io::BufReader::new(file))
    }

    #[must_use]
    pub fn iter(&self) -> std::slice::Iter<'_, TagDefinition> {
        self.definitions.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Tags to index, in definition order without duplicates.
    ///
    /// With a filter, only tags whose definition line contains at least one
    /// of the filter substrings are kept.
    #[must_use]
    pub fn select<S: AsRef<str>>(&self, filter: Option<&[S]>) -> Vec<String> {
        let mut selected: Vec<String> = Vec::new();
        for def in &self.definitions {
            let keep = filter.is_none_or(|labels| {
                labels.iter().any(|label| def.line.contains(label.as_ref()))
            });
            if keep && !selected.contains(&def.tag) {
                selected.push(def.tag.clone());
            }
        }
        selected
    }
}

impl<'a> IntoIterator for &'a TagDefinitions {
    type Item = &'a TagDefinition;
    type IntoIter = std::slice::Iter<'a, TagDefinition>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn parse_line(line: &str) -> Option<TagDefinition> {
    let line = line.trim();
    let tag = line.split_whitespace().next()?;
    Some(TagDefinition {
        tag: tag.to_string(),
        line: line.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOURCE: &str = "sketchbook #sketchbook\n\
                          figures #skill figure drawing\n\
                          \n\
                          digital #digital\n\
                          perspective #skill #sketchbook\n";

    #[test]
    fn test_parse_skips_blank_lines() {
        let defs = TagDefinitions::parse(SOURCE);
        assert_eq!(defs.len(), 4);
        assert_eq!(defs.iter().next().map(|d| d.tag.as_str()), Some("sketchbook"));
    }

    #[test]
    fn test_select_without_filter_keeps_all() {
        let defs = TagDefinitions::parse(SOURCE);
        let none: Option<&[&str]> = None;
        assert_eq!(
            defs.select(none),
            vec!["sketchbook", "figures", "digital", "perspective"]
        );
    }

    #[test]
    fn test_select_matches_substrings_of_the_line() {
        let defs = TagDefinitions::parse(SOURCE);
        assert_eq!(defs.select(Some(&["#skill"][..])), vec!["figures", "perspective"]);
        assert_eq!(
            defs.select(Some(&["#digital", "#sketchbook"][..])),
            vec!["sketchbook", "digital", "perspective"]
        );
        // free text counts too
        assert_eq!(defs.select(Some(&["drawing"][..])), vec!["figures"]);
    }

    #[test]
    fn test_duplicate_definitions_keep_first_position() {
        let defs = TagDefinitions::parse("a #x\nb #x\na #y\n");
        let none: Option<&[&str]> = None;
        assert_eq!(defs.select(none), vec!["a", "b"]);
    }

    #[test]
    fn test_leading_whitespace_is_ignored() {
        let defs = TagDefinitions::parse("   ink\t#medium\n");
        assert_eq!(defs.iter().next().map(|d| d.tag.as_str()), Some("ink"));
    }

    #[test]
    fn test_load_missing_file() {
        let err = TagDefinitions::load(Path::new("/nonexistent/.filetags")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
