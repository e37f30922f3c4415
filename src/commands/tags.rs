//! Tags command - show the tags embedded in a filename

use crate::{
    FileRecord, PaintrError,
    tags::{TagSet, has_tags, tag_segment},
};
use colored::Colorize;
use std::path::Path;

type Result<T> = std::result::Result<T, PaintrError>;

/// Execute the tags command
///
/// # Errors
/// Returns `PaintrError::InvalidInput` if `require` names tags the filename lacks
pub fn execute(file_name: &str, require: &[String], quiet: bool) -> Result<()> {
    let record = FileRecord::from_path(Path::new(file_name));
    let tags = TagSet::parse(&record.name);

    if quiet {
        for tag in tags.as_slice() {
            println!("{tag}");
        }
    } else if tag_segment(&record.name).is_none() {
        println!("{} has no tags", record.name);
    } else if tags.is_empty() {
        println!("{} has an empty tag section", record.name);
    } else {
        println!("Tags of {}:", record.name.bold());
        for tag in tags.as_slice() {
            println!("  {tag}");
        }
    }

    check_required(&record.name, &tags, require)
}

fn check_required(name: &str, tags: &TagSet, require: &[String]) -> Result<()> {
    if require.is_empty() || has_tags(name, require) {
        return Ok(());
    }
    let missing: Vec<&str> = require
        .iter()
        .map(String::as_str)
        .filter(|tag| !tags.contains(tag))
        .collect();
    Err(PaintrError::InvalidInput(format!(
        "{name} is missing tag(s): {}",
        missing.join(", ")
    )))
}
