//! Filename tag parsing
//!
//! Drawings are named `<anything> -- <tag> <tag> ....<ext>`. Everything
//! between the first ` -- ` and the extension is the tag segment.

use serde::Serialize;

/// Separator between the free part of a filename and its tags
pub const TAG_SEPARATOR: &str = " -- ";

/// Ordered tags of a single filename
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TagSet(Vec<String>);

impl TagSet {
    /// Parse the tags of `file_name`. Empty if it has no tag segment.
    #[must_use]
    pub fn parse(file_name: &str) -> Self {
        let Some(segment) = tag_segment(file_name) else {
            return Self::default();
        };
        Self(
            segment
                .split(' ')
                .filter(|tag| !tag.is_empty())
                .map(String::from)
                .collect(),
        )
    }

    #[must_use]
    pub fn contains(&self, tag: &str) -> bool {
        self.0.iter().any(|t| t == tag)
    }

    /// Whether every tag in `required` is present, in any order
    #[must_use]
    pub fn contains_all<S: AsRef<str>>(&self, required: &[S]) -> bool {
        required.iter().all(|tag| self.contains(tag.as_ref()))
    }

    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

/// The raw tag segment of `file_name`, without extension.
///
/// Only the text between the first separator and the next one (if any) is
/// used, so `a -- b -- c.jpg` yields `b`.
#[must_use]
pub fn tag_segment(file_name: &str) -> Option<&str> {
    let (_, rest) = file_name.split_once(TAG_SEPARATOR)?;
    let segment = rest.split_once(TAG_SEPARATOR).map_or(rest, |(head, _)| head);
    Some(segment.rfind('.').map_or(segment, |dot| &segment[..dot]))
}

/// Whether `file_name` carries a tag segment at all
#[must_use]
pub fn is_tagged(file_name: &str) -> bool {
    file_name.contains(TAG_SEPARATOR)
}

/// Tags of `file_name` in filename order
#[must_use]
pub fn parse_tags(file_name: &str) -> Vec<String> {
    TagSet::parse(file_name).into_vec()
}

/// Whether `file_name` carries every tag in `required`
#[must_use]
pub fn has_tags<S: AsRef<str>>(file_name: &str, required: &[S]) -> bool {
    TagSet::parse(file_name).contains_all(required)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tags() {
        assert_eq!(
            parse_tags("2024-01-01 -- sketch portrait.jpg"),
            vec!["sketch", "portrait"]
        );
    }

    #[test]
    fn test_untagged_filename() {
        assert!(parse_tags("plain.jpg").is_empty());
        assert!(!is_tagged("plain.jpg"));
        assert!(TagSet::parse("a--b.jpg").is_empty());
    }

    #[test]
    fn test_has_tags() {
        assert!(has_tags("20240301 -- colour ink.jpg", &["colour"]));
        assert!(has_tags("20240301 -- colour ink.jpg", &["ink", "colour"]));
        assert!(!has_tags("20240301 -- ink.jpg", &["colour"]));
        assert!(!has_tags("plain.jpg", &["colour"]));
    }

    #[test]
    fn test_has_no_required_tags_is_vacuously_true() {
        let none: [&str; 0] = [];
        assert!(has_tags("plain.jpg", &none));
    }

    #[test]
    fn test_only_first_separator_counts() {
        assert_eq!(parse_tags("a -- b c -- d.jpg"), vec!["b", "c"]);
    }

    #[test]
    fn test_extension_is_stripped_at_last_dot() {
        assert_eq!(parse_tags("x -- v1.5 study.png"), vec!["v1.5", "study"]);
        assert_eq!(parse_tags("x -- study"), vec!["study"]);
    }

    #[test]
    fn test_consecutive_spaces_are_dropped() {
        assert_eq!(parse_tags("x -- a  b .jpg"), vec!["a", "b"]);
    }

    #[test]
    fn test_tag_segment() {
        assert_eq!(tag_segment("x -- a b.jpg"), Some("a b"));
        assert_eq!(tag_segment("x.jpg"), None);
    }
}
