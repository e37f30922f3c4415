//! Filename tags and their definitions

pub mod definitions;
pub mod parser;

pub use definitions::{TagDefinition, TagDefinitions};
pub use parser::{TAG_SEPARATOR, TagSet, has_tags, is_tagged, parse_tags, tag_segment};
