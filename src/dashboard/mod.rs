//! Dashboard data loading
//!
//! A load rebuilds the thumbnail folder from the sketchbook and digital
//! folders, then indexes the thumbnails three times: sketchbook pages,
//! digital paintings and skills. Sketchbook and digital art each become a
//! [`Section`] with its own level; skills are listed per tag.
//!
//! Loading is slow (every drawing is decoded), so [`DashboardCache`] keeps
//! the last result until it is refreshed explicitly.

pub mod render;

pub use render::{render_json, render_text};

use crate::config::PaintrConfig;
use crate::index::{TagIndex, build_index};
use crate::level::LevelState;
use crate::scan::{self, ScanOptions};
use crate::thumbnail::{self, DEFINITIONS_SUFFIX, ProgressReporter};
use crate::PaintrError;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::info;

/// Definitions filter selecting sketchbook tags
pub const SKETCHBOOK_FILTER: &str = "#sketchbook";
/// Definitions filter selecting digital painting tags
pub const DIGITAL_FILTER: &str = "#digital";
/// Definitions filter selecting skill tags
pub const SKILL_FILTER: &str = "#skill";
/// Sub-folder of the thumbnail folder the digital paintings are built into
pub const DIGITAL_DIR: &str = "digital";

/// Where to read drawings from and how to lay the dashboard out
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardSettings {
    pub sketchbook_root: PathBuf,
    pub digital_root: PathBuf,
    pub thumbnail_dir: PathBuf,
    pub excluded_dirs: Vec<String>,
    pub bar_length: usize,
    pub gallery_size: usize,
}

impl DashboardSettings {
    fn scan_options(&self) -> ScanOptions {
        self.excluded_dirs
            .iter()
            .fold(ScanOptions::new(), |options, name| options.exclude_dir(name.as_str()))
    }
}

impl From<&PaintrConfig> for DashboardSettings {
    fn from(config: &PaintrConfig) -> Self {
        Self {
            sketchbook_root: config.sketchbook_root.clone(),
            digital_root: config.digital_root.clone(),
            thumbnail_dir: config.thumbnail_dir.clone(),
            excluded_dirs: config.excluded_dirs.clone(),
            bar_length: config.bar_length,
            gallery_size: config.gallery_size,
        }
    }
}

/// One progress section of the dashboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub title: String,
    pub index: TagIndex,
    /// Sketchbooks used, for sections that count them
    pub books: Option<usize>,
}

impl Section {
    /// Matched files are the experience of the section
    #[must_use]
    pub fn experience(&self) -> u64 {
        self.index.experience() as u64
    }

    #[must_use]
    pub fn progress(&self, bar_length: usize) -> SectionProgress {
        let level = LevelState::new(self.experience());
        let filled = level.filled(bar_length);
        SectionProgress {
            level,
            filled,
            bar: level.bar(bar_length),
            recent: self.index.recent(filled).to_vec(),
        }
    }
}

/// Level and bar of a section, with the drawings that fill the bar
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionProgress {
    pub level: LevelState,
    pub filled: usize,
    pub bar: String,
    /// The last `filled` matched filenames
    pub recent: Vec<String>,
}

/// A thumbnail shown in the recent-artwork gallery
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GalleryItem {
    pub path: PathBuf,
    pub modified: DateTime<Utc>,
}

impl GalleryItem {
    #[must_use]
    pub fn name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

impl From<thumbnail::GalleryEntry> for GalleryItem {
    fn from(entry: thumbnail::GalleryEntry) -> Self {
        Self {
            path: entry.path,
            modified: entry.modified.into(),
        }
    }
}

/// Everything the dashboard shows
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardData {
    pub sketchbook: Section,
    pub digital: Section,
    /// Skill tags over all thumbnails; only the per-tag lists are meaningful
    pub skills: TagIndex,
    /// Thumbnails in the thumbnail folder after merging
    pub total_artworks: usize,
    /// Most recent thumbnails, oldest first
    pub gallery: Vec<GalleryItem>,
}

impl DashboardData {
    /// Levels of sketching, digital art and both combined
    #[must_use]
    pub fn skill_levels(&self) -> Vec<(&'static str, LevelState)> {
        let sketching = self.sketchbook.experience();
        let digital = self.digital.experience();
        vec![
            ("Sketching", LevelState::new(sketching)),
            ("Digital Art", LevelState::new(digital)),
            ("Overall Skills", LevelState::new(sketching + digital)),
        ]
    }
}

fn definitions_in(dir: &Path) -> PathBuf {
    dir.join(DEFINITIONS_SUFFIX)
}

/// Loads [`DashboardData`] from the configured folders
#[derive(Debug, Clone)]
pub struct Dashboard {
    settings: DashboardSettings,
}

impl Dashboard {
    #[must_use]
    pub const fn new(settings: DashboardSettings) -> Self {
        Self { settings }
    }

    #[must_use]
    pub const fn settings(&self) -> &DashboardSettings {
        &self.settings
    }

    /// Rebuild the thumbnails and index them.
    ///
    /// # Errors
    ///
    /// Returns `PaintrError` if a drawing folder is missing, a definition
    /// file is missing from the thumbnails, or the thumbnail folder cannot
    /// be rebuilt.
    pub fn load(&self, progress: &mut dyn ProgressReporter) -> Result<DashboardData, PaintrError> {
        let settings = &self.settings;
        let options = settings.scan_options();
        let thumbs = settings.thumbnail_dir.as_path();
        let digital_thumbs = thumbs.join(DIGITAL_DIR);

        info!("generating sketchbook thumbnails");
        thumbnail::rebuild_thumbnails(&settings.sketchbook_root, thumbs, &options, progress)?;
        info!("generating digital art thumbnails");
        thumbnail::rebuild_thumbnails(&settings.digital_root, &digital_thumbs, &options, progress)?;

        let sketch_index = build_index(&definitions_in(thumbs), &[thumbs], Some(&[SKETCHBOOK_FILTER][..]), &options)?;
        let books = scan::count_dirs(&[&settings.sketchbook_root], &options)?;
        let digital_index = build_index(
            &definitions_in(&digital_thumbs),
            &[&digital_thumbs],
            Some(&[DIGITAL_FILTER][..]),
            &options,
        )?;

        let merged = thumbnail::merge_thumbnails(&digital_thumbs, thumbs)?;
        info!(merged, "merged digital thumbnails");

        let skills = build_index(&definitions_in(thumbs), &[thumbs], Some(&[SKILL_FILTER][..]), &options)?;

        let entries = thumbnail::gallery(thumbs)?;
        let total_artworks = entries.len();
        let skip = total_artworks.saturating_sub(settings.gallery_size);
        let gallery = entries.into_iter().skip(skip).map(GalleryItem::from).collect();

        Ok(DashboardData {
            sketchbook: Section {
                title: "Sketchbook".to_string(),
                index: sketch_index,
                books: Some(books),
            },
            digital: Section {
                title: "Digital Art".to_string(),
                index: digital_index,
                books: None,
            },
            skills,
            total_artworks,
            gallery,
        })
    }
}

/// Keeps the last loaded [`DashboardData`] until refreshed
#[derive(Debug)]
pub struct DashboardCache {
    dashboard: Dashboard,
    data: Option<DashboardData>,
}

impl DashboardCache {
    #[must_use]
    pub const fn new(dashboard: Dashboard) -> Self {
        Self { dashboard, data: None }
    }

    #[must_use]
    pub const fn dashboard(&self) -> &Dashboard {
        &self.dashboard
    }

    #[must_use]
    pub const fn is_loaded(&self) -> bool {
        self.data.is_some()
    }

    /// The cached data, loading it on first use
    ///
    /// # Errors
    ///
    /// See [`Dashboard::load`]. A failed load leaves the cache empty.
    pub fn get(&mut self, progress: &mut dyn ProgressReporter) -> Result<&DashboardData, PaintrError> {
        if let Some(data) = self.data.take() {
            return Ok(self.data.insert(data));
        }
        let data = self.dashboard.load(progress)?;
        Ok(self.data.insert(data))
    }

    /// Drop the cached data; the next [`get`](Self::get) loads again
    pub fn invalidate(&mut self) {
        self.data = None;
    }

    /// Reload unconditionally
    ///
    /// # Errors
    ///
    /// See [`Dashboard::load`].
    pub fn refresh(&mut self, progress: &mut dyn ProgressReporter) -> Result<&DashboardData, PaintrError> {
        self.invalidate();
        self.get(progress)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::DrawingTree;
    use crate::thumbnail::NoProgress;

    fn art_tree() -> DrawingTree {
        let tree = DrawingTree::new();
        tree.write(
            "sketch/.filetags",
            "sketchbook #sketchbook\nfigures #skill\nperspective #skill\n",
        );
        tree.image("sketch/book 1/20240301 -- sketchbook figures.jpg", 60, 80);
        tree.image("sketch/book 1/20240302 -- sketchbook.jpg", 60, 80);
        tree.image("sketch/book 2/20240310 -- sketchbook perspective.png", 80, 60);
        tree.image("sketch/.stfolder/20240311 -- sketchbook.jpg", 60, 60);
        tree.write("digital/.filetags", "digital #digital\nfigures #skill\n");
        tree.image("digital/20240401 -- digital figures colour.png", 90, 90);
        tree
    }

    fn settings(tree: &DrawingTree) -> DashboardSettings {
        DashboardSettings {
            sketchbook_root: tree.root().join("sketch"),
            digital_root: tree.root().join("digital"),
            thumbnail_dir: tree.root().join("thumbs"),
            excluded_dirs: vec![".stfolder".to_string()],
            bar_length: 24,
            gallery_size: 64,
        }
    }

    #[test]
    fn test_load_builds_all_sections() {
        let tree = art_tree();
        let data = Dashboard::new(settings(&tree)).load(&mut NoProgress).unwrap();

        assert_eq!(data.sketchbook.experience(), 3);
        assert_eq!(data.sketchbook.books, Some(2));
        assert_eq!(data.digital.experience(), 1);
        assert_eq!(data.digital.books, None);
        assert_eq!(data.total_artworks, 4);
        assert_eq!(data.gallery.len(), 4);
        assert_eq!(data.skills.get("figures").map(<[String]>::len), Some(2));
        assert_eq!(data.skills.get("perspective").map(<[String]>::len), Some(1));
        assert!(!tree.root().join("thumbs/digital").exists());
    }

    #[test]
    fn test_gallery_is_limited() {
        let tree = art_tree();
        let mut settings = settings(&tree);
        settings.gallery_size = 2;
        let data = Dashboard::new(settings).load(&mut NoProgress).unwrap();

        assert_eq!(data.total_artworks, 4);
        assert_eq!(data.gallery.len(), 2);
    }

    #[test]
    fn test_skill_levels_sum_experience() {
        let tree = art_tree();
        let data = Dashboard::new(settings(&tree)).load(&mut NoProgress).unwrap();
        let levels = data.skill_levels();

        assert_eq!(levels[0].0, "Sketching");
        assert_eq!(levels[0].1.experience, 3);
        assert_eq!(levels[1].1.experience, 1);
        assert_eq!(levels[2].0, "Overall Skills");
        assert_eq!(levels[2].1.experience, 4);
    }

    #[test]
    fn test_section_progress_uses_recent_files() {
        let section = Section {
            title: "Sketchbook".into(),
            index: TagIndex {
                dir_count: 1,
                file_count: (0..15).map(|n| format!("{n:02} -- sketchbook.jpg")).collect(),
                tags: Vec::new(),
            },
            books: Some(1),
        };
        let progress = section.progress(24);

        assert_eq!(progress.level.level, 2);
        assert_eq!(progress.filled, progress.recent.len());
        assert_eq!(progress.bar.chars().count(), 24);
        assert_eq!(progress.recent.last().map(String::as_str), Some("14 -- sketchbook.jpg"));
    }

    #[test]
    fn test_missing_root_is_an_error() {
        let tree = art_tree();
        let mut settings = settings(&tree);
        settings.sketchbook_root = tree.root().join("missing");

        let err = Dashboard::new(settings).load(&mut NoProgress).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_cache_keeps_data_until_refreshed() {
        let tree = art_tree();
        let mut cache = DashboardCache::new(Dashboard::new(settings(&tree)));
        assert!(!cache.is_loaded());

        let first = cache.get(&mut NoProgress).unwrap().total_artworks;
        tree.image("sketch/book 2/20240312 -- sketchbook.jpg", 60, 60);
        assert_eq!(cache.get(&mut NoProgress).unwrap().total_artworks, first);

        let refreshed = cache.refresh(&mut NoProgress).unwrap();
        assert_eq!(refreshed.total_artworks, first + 1);
        assert_eq!(refreshed.sketchbook.experience(), 4);

        cache.invalidate();
        assert!(!cache.is_loaded());
    }
}
