//! Terminal and JSON rendering of [`DashboardData`]

use super::{DashboardData, Section, SectionProgress};
use crate::level::statistics_row;
use chrono::Local;
use colored::Colorize;
use serde::Serialize;
use std::fmt::Write;

const RULE: &str = "────────────────────────────────────────";

fn heading(out: &mut String, title: &str) {
    let _ = writeln!(out, "\n{}\n{}", title.bold().cyan(), RULE.dimmed());
}

fn metric(out: &mut String, label: &str, value: impl std::fmt::Display) {
    let _ = writeln!(out, "  {:<20}{}", format!("{label}:"), value.to_string().bold());
}

fn render_section(out: &mut String, section: &Section, bar_length: usize) {
    let progress = section.progress(bar_length);
    let level = &progress.level;

    heading(out, &format!("{} Progress", section.title));
    metric(out, "Current Level", format!("LVL {}", level.level));
    metric(out, "Experience", format!("{} XP", level.experience));
    metric(out, "Next Level", format!("{} XP needed", level.remaining()));
    let _ = writeln!(
        out,
        "  Progress to next level ({}/{bar_length}) {}",
        progress.filled,
        progress.bar.green()
    );
    for name in &progress.recent {
        let _ = writeln!(out, "    {}", name.dimmed());
    }
    if let Some(books) = section.books {
        metric(out, "Books Used", books);
    }
}

/// Render the whole dashboard for a terminal
#[must_use]
pub fn render_text(data: &DashboardData, bar_length: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", "Digital Painter Progress Tracker".bold().magenta());

    heading(&mut out, "Overview Statistics");
    metric(&mut out, "Total Artworks", data.total_artworks);
    metric(&mut out, "Sketchbook Pages", data.sketchbook.experience());
    metric(&mut out, "Digital Works", data.digital.experience());

    render_section(&mut out, &data.sketchbook, bar_length);
    render_section(&mut out, &data.digital, bar_length);

    heading(&mut out, "Skills");
    for (name, level) in data.skill_levels() {
        let _ = writeln!(out, "  {:<20}Lv{}", format!("{name}:"), level.level);
    }
    for entry in &data.skills.tags {
        let _ = writeln!(
            out,
            "{}",
            statistics_row(&entry.tag, Some(entry.files.len() as u64), true, bar_length)
        );
    }

    heading(&mut out, "Recent Artwork");
    if data.gallery.is_empty() {
        let _ = writeln!(out, "  {}", "No thumbnails yet.".dimmed());
    }
    for item in &data.gallery {
        let when = item.modified.with_timezone(&Local).format("%Y-%m-%d %H:%M");
        let _ = writeln!(out, "  {}  {}", when.to_string().dimmed(), item.name());
    }
    out
}

#[derive(Serialize)]
struct SectionView<'a> {
    #[serde(flatten)]
    section: &'a Section,
    progress: SectionProgress,
}

#[derive(Serialize)]
struct SkillView {
    name: &'static str,
    level: u64,
    experience: u64,
}

#[derive(Serialize)]
struct DashboardView<'a> {
    total_artworks: usize,
    sketchbook: SectionView<'a>,
    digital: SectionView<'a>,
    skill_levels: Vec<SkillView>,
    skills: crate::index::TagTally,
    gallery: &'a [super::GalleryItem],
}

/// Render the dashboard as pretty JSON, with levels and bars included
///
/// # Errors
///
/// Returns `serde_json::Error` if serialization fails.
pub fn render_json(data: &DashboardData, bar_length: usize) -> serde_json::Result<String> {
    let view = DashboardView {
        total_artworks: data.total_artworks,
        sketchbook: SectionView {
            section: &data.sketchbook,
            progress: data.sketchbook.progress(bar_length),
        },
        digital: SectionView {
            section: &data.digital,
            progress: data.digital.progress(bar_length),
        },
        skill_levels: data
            .skill_levels()
            .into_iter()
            .map(|(name, state)| SkillView {
                name,
                level: state.level,
                experience: state.experience,
            })
            .collect(),
        skills: data.skills.tally(),
        gallery: &data.gallery,
    };
    serde_json::to_string_pretty(&view)
}
