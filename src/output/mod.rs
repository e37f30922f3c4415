//! Output formatting for CLI display
//!
//! Small formatting helpers shared by the commands: tag counts, scan totals
//! and level summaries.

use crate::level::LevelState;
use colored::Colorize;
use std::path::Path;

/// Format a tag with its file count
#[must_use]
pub fn tag_with_count(tag: &str, count: usize, quiet: bool) -> String {
    if quiet {
        format!("{tag}\t{count}")
    } else {
        format!("  {} ({count} file(s))", tag.bold())
    }
}

/// Format a tag followed by the files carrying it, one per line
#[must_use]
pub fn tag_with_files(tag: &str, files: &[String], quiet: bool) -> String {
    if quiet {
        return files
            .iter()
            .map(|file| format!("{tag}\t{file}"))
            .collect::<Vec<_>>()
            .join("\n");
    }
    let mut out = tag_with_count(tag, files.len(), false);
    for file in files {
        out.push_str("\n    ");
        out.push_str(file);
    }
    out
}

/// Format directory and file totals of a scan
#[must_use]
pub fn scan_summary(dir_count: usize, file_count: usize, quiet: bool) -> String {
    if quiet {
        format!("{dir_count}\t{file_count}")
    } else {
        format!(
            "{} directories, {} files",
            dir_count.to_string().bold(),
            file_count.to_string().bold()
        )
    }
}

/// Format a level with its bar and the experience still needed
#[must_use]
pub fn level_summary(state: &LevelState, bar_length: usize, quiet: bool) -> String {
    if quiet {
        return format!("{}\t{}\t{}\t{}", state.level, state.floor, state.ceiling, state.experience);
    }
    format!(
        "Lv{} {} {}/{} XP ({} to next level)",
        state.level.to_string().bold(),
        state.bar(bar_length).green(),
        state.experience,
        state.ceiling,
        state.remaining()
    )
}

/// Color a path based on existence (green if exists, red if missing)
#[must_use]
pub fn colorize_path(path: &Path) -> String {
    let formatted = path.display().to_string();
    if path.exists() {
        formatted.green().to_string()
    } else {
        formatted.red().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiet_output_is_tab_separated() {
        assert_eq!(tag_with_count("ink", 3, true), "ink\t3");
        assert_eq!(scan_summary(2, 7, true), "2\t7");
        assert_eq!(level_summary(&LevelState::new(15), 24, true), "2\t12\t36\t15");
        assert_eq!(
            tag_with_files("ink", &["a -- ink.jpg".into(), "b -- ink.jpg".into()], true),
            "ink\ta -- ink.jpg\nink\tb -- ink.jpg"
        );
    }

    #[test]
    fn test_plain_output() {
        colored::control::set_override(false);
        assert_eq!(tag_with_count("ink", 3, false), "  ink (3 file(s))");
        assert_eq!(
            tag_with_files("ink", &["a -- ink.jpg".into()], false),
            "  ink (1 file(s))\n    a -- ink.jpg"
        );
        assert!(level_summary(&LevelState::new(15), 24, false).starts_with("Lv2 ▰▰▰▱"));
        assert!(level_summary(&LevelState::new(15), 24, false).ends_with("15/36 XP (21 to next level)"));
    }
}
