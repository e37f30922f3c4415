//! Stats command - tag index of a definition file over drawing folders

use crate::{
    PaintrError,
    cli::OutputFormat,
    index::{DIR_COUNT_KEY, FILE_COUNT_KEY, TagIndex, build_index},
    output,
    scan::ScanOptions,
};
use colored::Colorize;
use std::path::{Path, PathBuf};

type Result<T> = std::result::Result<T, PaintrError>;

/// Parameters for the stats command
#[derive(Debug, Clone)]
pub struct StatsParams {
    pub definitions: PathBuf,
    pub roots: Vec<PathBuf>,
    /// Substrings selecting definition lines; empty selects all
    pub filters: Vec<String>,
    pub options: ScanOptions,
    /// List filenames instead of counts
    pub files: bool,
    pub format: OutputFormat,
}

/// Execute the stats command
///
/// # Errors
/// Returns an error if the definition file or a root is missing, or output fails
pub fn execute(params: &StatsParams, quiet: bool) -> Result<()> {
    let filter = (!params.filters.is_empty()).then_some(params.filters.as_slice());
    let index = build_index(&params.definitions, &params.roots, filter, &params.options)?;

    match params.format {
        OutputFormat::Text => print!("{}", render_text(&index, &params.definitions, params.files, quiet)),
        OutputFormat::Json => println!("{}", render_json(&index, params.files)?),
        OutputFormat::Csv => print!("{}", render_csv(&index, params.files)?),
    }
    Ok(())
}

fn render_text(index: &TagIndex, definitions: &Path, files: bool, quiet: bool) -> String {
    let mut lines = Vec::new();
    if !quiet {
        lines.push(format!("Tags from {}:", definitions.display()).bold().to_string());
        lines.push(format!("  {DIR_COUNT_KEY}: {}", index.dir_count));
        lines.push(format!("  {FILE_COUNT_KEY}: {}", index.file_count.len()));
    }
    for entry in &index.tags {
        let line = if files {
            output::tag_with_files(&entry.tag, &entry.files, quiet)
        } else {
            output::tag_with_count(&entry.tag, entry.files.len(), quiet)
        };
        if !line.is_empty() {
            lines.push(line);
        }
    }
    if lines.is_empty() {
        return String::new();
    }
    lines.join("\n") + "\n"
}

fn render_json(index: &TagIndex, files: bool) -> Result<String> {
    let json = if files {
        serde_json::to_string_pretty(index)?
    } else {
        serde_json::to_string_pretty(&index.tally())?
    };
    Ok(json)
}

fn render_csv(index: &TagIndex, files: bool) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    if files {
        writer.write_record(["tag", "file"])?;
        for file in &index.file_count {
            writer.write_record([FILE_COUNT_KEY, file.as_str()])?;
        }
        for entry in &index.tags {
            for file in &entry.files {
                writer.write_record([entry.tag.as_str(), file.as_str()])?;
            }
        }
    } else {
        let tally = index.tally();
        writer.write_record(["tag", "count"])?;
        writer.write_record([DIR_COUNT_KEY, tally.dir_count.to_string().as_str()])?;
        writer.write_record([FILE_COUNT_KEY, tally.file_count.to_string().as_str()])?;
        for entry in &tally.tags {
            writer.write_record([entry.tag.as_str(), entry.count.to_string().as_str()])?;
        }
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| PaintrError::Io(e.into_error()))?;
    String::from_utf8(bytes).map_err(|e| PaintrError::InvalidInput(e.to_string()))
}
