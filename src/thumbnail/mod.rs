//! Thumbnail generation
//!
//! Every drawing gets a tiny preview: a centred square cut from the middle
//! of the page, greyscale unless the drawing is tagged `colour`, with the
//! contrast raised, shrunk to fit 12×12. Thumbnails are written flat into
//! one output folder, together with copies of any `.filetags` definition
//! files found, so the thumbnail folder can be indexed on its own.
//!
//! A rebuild always clears the output folder first; nothing from a
//! previous run survives.

pub mod error;
pub mod progress;

pub use error::{Result, ThumbnailError};
pub use progress::{NoProgress, ProgressReporter};

use crate::scan::{self, ScanOptions};
use crate::tags::has_tags;
use glob::{MatchOptions, Pattern};
use image::DynamicImage;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use tracing::{debug, info, warn};

/// Longest side of a thumbnail in pixels
pub const THUMBNAIL_SIZE: u32 = 12;
/// Side of the cropped square as a fraction of the shorter page side
pub const CROP_DIVISOR: u32 = 6;
/// Contrast multiplier applied after cropping
pub const CONTRAST_FACTOR: f32 = 1.5;
/// Drawings carrying this tag keep their colours
pub const COLOUR_TAG: &str = "colour";
/// Suffix of tag definition files copied alongside the thumbnails
pub const DEFINITIONS_SUFFIX: &str = ".filetags";
/// Extensions treated as drawings
pub const IMAGE_EXTENSIONS: [&str; 2] = ["jpg", "png"];

/// Whether `path` has one of the [`IMAGE_EXTENSIONS`]
#[must_use]
pub fn is_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| IMAGE_EXTENSIONS.iter().any(|known| ext.eq_ignore_ascii_case(known)))
}

fn is_definitions_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.ends_with(DEFINITIONS_SUFFIX))
}

fn is_jpeg(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("jpg") || ext.eq_ignore_ascii_case("jpeg"))
}

/// `image` scales contrast by `((100 + c) / 100)²`; this is the `c` for [`CONTRAST_FACTOR`].
fn contrast_adjustment() -> f32 {
    (CONTRAST_FACTOR.sqrt() - 1.0) * 100.0
}

/// Cut the centred square whose side is a sixth of the shorter side
fn crop_center_square(img: &DynamicImage) -> DynamicImage {
    let (width, height) = (img.width(), img.height());
    let side = (width.min(height) / CROP_DIVISOR).max(1);
    img.crop_imm((width - side) / 2, (height - side) / 2, side, side)
}

/// Create the thumbnail of one drawing inside `out_dir`, named like the source.
///
/// # Errors
///
/// * `ThumbnailError::NoFileName` if `source` has no file name.
/// * `ThumbnailError::Image` if the image cannot be read or written.
pub fn generate_thumbnail(source: &Path, out_dir: &Path) -> Result<PathBuf> {
    let name = source
        .file_name()
        .ok_or_else(|| ThumbnailError::NoFileName(source.to_path_buf()))?;
    let image_err = |source_err| ThumbnailError::Image {
        path: source.to_path_buf(),
        source: source_err,
    };

    let img = crop_center_square(&image::open(source).map_err(image_err)?);
    let keep_colour = name.to_str().is_some_and(|n| has_tags(n, &[COLOUR_TAG]));
    let img = if keep_colour { img } else { img.grayscale() };
    let mut img = img.adjust_contrast(contrast_adjustment());
    if img.width() > THUMBNAIL_SIZE || img.height() > THUMBNAIL_SIZE {
        img = img.thumbnail(THUMBNAIL_SIZE, THUMBNAIL_SIZE);
    }

    let output = out_dir.join(name);
    // JPEG has no alpha channel
    if is_jpeg(&output) && img.color().has_alpha() {
        img = if keep_colour {
            DynamicImage::ImageRgb8(img.to_rgb8())
        } else {
            DynamicImage::ImageLuma8(img.to_luma8())
        };
    }
    img.save(&output).map_err(image_err)?;
    Ok(output)
}

/// What a rebuild produced
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThumbnailReport {
    /// Thumbnails written
    pub images: usize,
    /// Definition files copied
    pub definition_files: usize,
    /// Drawings that could not be converted, with the reason
    pub failures: Vec<(PathBuf, String)>,
}

/// Canonical `out_dir`, if it exists and does not contain `source`
fn ensure_separate(source: &Path, out_dir: &Path) -> Result<Option<PathBuf>> {
    let source = source.canonicalize()?;
    let Ok(out) = out_dir.canonicalize() else {
        return Ok(None);
    };
    if source.starts_with(&out) {
        return Err(ThumbnailError::Io(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            format!(
                "Refusing to clear {}: it contains the source folder {}",
                out.display(),
                source.display()
            ),
        )));
    }
    Ok(Some(out))
}

/// Clear `out_dir` and fill it with thumbnails of every drawing below `source`.
///
/// Drawings that fail to decode are logged, recorded in the report and
/// skipped; they do not abort the rebuild.
///
/// # Errors
///
/// * `ThumbnailError::Scan` if `source` is missing or cannot be walked.
/// * `ThumbnailError::Io` if `out_dir` cannot be cleared or written, or if
///   it contains `source` (clearing it would delete the drawings).
pub fn rebuild_thumbnails(
    source: &Path,
    out_dir: &Path,
    options: &ScanOptions,
    progress: &mut dyn ProgressReporter,
) -> Result<ThumbnailReport> {
    let mut files = scan::file_paths(&[source], options)?;
    if let Some(out) = ensure_separate(source, out_dir)? {
        files.retain(|path| path.canonicalize().map_or(true, |path| !path.starts_with(&out)));
    }

    if out_dir.exists() {
        fs::remove_dir_all(out_dir)?;
    }
    fs::create_dir_all(out_dir)?;
    info!(source = %source.display(), output = %out_dir.display(), files = files.len(), "rebuilding thumbnails");

    let mut report = ThumbnailReport::default();
    progress.start(&source.display().to_string(), files.len());
    for path in &files {
        progress.advance(path);
        if is_image(path) {
            match generate_thumbnail(path, out_dir) {
                Ok(_) => report.images += 1,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "skipping drawing");
                    report.failures.push((path.clone(), e.to_string()));
                }
            }
        } else if is_definitions_file(path) {
            if let Some(name) = path.file_name() {
                fs::copy(path, out_dir.join(name))?;
                report.definition_files += 1;
            }
        }
    }
    progress.finish();

    debug!(?report, "thumbnails rebuilt");
    Ok(report)
}

/// Move every thumbnail below `from` into `into`, then delete `from`.
///
/// # Errors
///
/// Returns `ThumbnailError::Scan` or `ThumbnailError::Io` if walking,
/// copying or removing fails.
pub fn merge_thumbnails(from: &Path, into: &Path) -> Result<usize> {
    if !from.exists() {
        return Ok(0);
    }
    let mut merged = 0;
    for path in scan::file_paths(&[from], &ScanOptions::new())? {
        if !is_image(&path) {
            continue;
        }
        if let Some(name) = path.file_name() {
            fs::copy(&path, into.join(name))?;
            merged += 1;
        }
    }
    fs::remove_dir_all(from)?;
    Ok(merged)
}

/// A thumbnail and when it was written
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct GalleryEntry {
    pub modified: SystemTime,
    pub path: PathBuf,
}

/// Thumbnails directly inside `dir`, oldest first
///
/// # Errors
///
/// Returns `ThumbnailError::Io` if `dir` cannot be listed or a
/// modification time cannot be read.
pub fn gallery(dir: &Path) -> Result<Vec<GalleryEntry>> {
    let pattern = format!("{}/*.[jp][pn]g", Pattern::escape(&dir.to_string_lossy()));
    let options = MatchOptions {
        case_sensitive: false,
        ..MatchOptions::new()
    };
    let entries = glob::glob_with(&pattern, options).map_err(|e| {
        ThumbnailError::Io(std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()))
    })?;

    let mut dated = Vec::new();
    for entry in entries {
        let path = entry.map_err(glob::GlobError::into_error)?;
        let modified = fs::metadata(&path)?.modified()?;
        dated.push(GalleryEntry { modified, path });
    }
    dated.sort();
    Ok(dated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::DrawingTree;

    #[test]
    fn test_thumbnail_is_small_and_grey() {
        let tree = DrawingTree::new();
        let source = tree.image("book/20240301 -- sketch.png", 120, 90);
        let out = tree.dir("thumbs");

        let thumb = generate_thumbnail(&source, &out).unwrap();
        assert_eq!(thumb, out.join("20240301 -- sketch.png"));

        let img = image::open(&thumb).unwrap();
        assert!(img.width() <= THUMBNAIL_SIZE && img.height() <= THUMBNAIL_SIZE);
        let rgb = img.to_rgb8();
        assert!(rgb.pixels().all(|p| p[0] == p[1] && p[1] == p[2]));
    }

    #[test]
    fn test_colour_tag_keeps_colour() {
        let tree = DrawingTree::new();
        let source = tree.image("book/20240301 -- colour ink.png", 120, 120);
        let out = tree.dir("thumbs");

        let thumb = generate_thumbnail(&source, &out).unwrap();
        let rgb = image::open(&thumb).unwrap().to_rgb8();
        assert!(rgb.pixels().any(|p| p[0] != p[2]));
    }

    #[test]
    fn test_tiny_image_still_produces_thumbnail() {
        let tree = DrawingTree::new();
        let source = tree.image("a -- sketch.jpg", 3, 3);
        let out = tree.dir("thumbs");
        assert!(generate_thumbnail(&source, &out).unwrap().exists());
    }

    #[test]
    fn test_rebuild_clears_previous_output() {
        let tree = DrawingTree::new();
        tree.image("src/book 1/a -- sketch.png", 60, 60);
        tree.image("src/book 1/b -- ink.jpg", 60, 60);
        tree.write("src/.filetags", "sketch #sketchbook\n");
        tree.file("src/.stfolder/c -- sketch.png");
        tree.file("src/notes.txt");
        tree.file("thumbs/stale.png");

        let options = ScanOptions::new().exclude_dir(".stfolder");
        let out = tree.root().join("thumbs");
        let report = rebuild_thumbnails(&tree.root().join("src"), &out, &options, &mut NoProgress).unwrap();

        assert_eq!(report.images, 2);
        assert_eq!(report.definition_files, 1);
        assert!(report.failures.is_empty());
        assert!(!out.join("stale.png").exists());
        assert!(out.join(".filetags").exists());
        assert!(!out.join("notes.txt").exists());
        assert_eq!(gallery(&out).unwrap().len(), 2);
    }

    #[test]
    fn test_rebuild_is_repeatable() {
        let tree = DrawingTree::new();
        tree.image("src/a -- sketch.png", 60, 60);
        let out = tree.root().join("thumbs");

        rebuild_thumbnails(&tree.root().join("src"), &out, &ScanOptions::new(), &mut NoProgress).unwrap();
        rebuild_thumbnails(&tree.root().join("src"), &out, &ScanOptions::new(), &mut NoProgress).unwrap();
        assert_eq!(fs::read_dir(&out).unwrap().count(), 1);
    }

    #[test]
    fn test_undecodable_drawing_is_skipped() {
        let tree = DrawingTree::new();
        tree.image("src/a -- sketch.png", 60, 60);
        tree.file("src/broken -- sketch.jpg");
        let out = tree.root().join("thumbs");

        let report = rebuild_thumbnails(&tree.root().join("src"), &out, &ScanOptions::new(), &mut NoProgress).unwrap();
        assert_eq!(report.images, 1);
        assert_eq!(report.failures.len(), 1);
    }

    #[test]
    fn test_refuses_to_clear_folder_containing_source() {
        let tree = DrawingTree::new();
        tree.image("drawings/a -- sketch.png", 60, 60);

        let err = rebuild_thumbnails(
            &tree.root().join("drawings"),
            tree.root(),
            &ScanOptions::new(),
            &mut NoProgress,
        )
        .unwrap_err();
        assert!(matches!(err, ThumbnailError::Io(_)));
        assert!(tree.root().join("drawings/a -- sketch.png").exists());
    }

    #[test]
    fn test_output_inside_source_is_not_rebuilt_from_itself() {
        let tree = DrawingTree::new();
        tree.image("src/book/a -- sketch.png", 60, 60);
        tree.image("src/thumbs/old -- sketch.png", 60, 60);
        // same folder as src/thumbs, spelled differently
        let out = tree.root().join("src/book/../thumbs");

        let report = rebuild_thumbnails(&tree.root().join("src"), &out, &ScanOptions::new(), &mut NoProgress).unwrap();

        assert_eq!(report.images, 1);
        assert!(report.failures.is_empty());
        assert!(!tree.root().join("src/thumbs/old -- sketch.png").exists());
        assert!(tree.root().join("src/thumbs/a -- sketch.png").exists());
    }

    #[test]
    fn test_merge_thumbnails() {
        let tree = DrawingTree::new();
        let into = tree.dir("thumbs");
        tree.image("thumbs/digital/d -- digital.png", 12, 12);
        tree.write("thumbs/digital/.filetags", "digital #digital\n");

        let merged = merge_thumbnails(&into.join("digital"), &into).unwrap();
        assert_eq!(merged, 1);
        assert!(into.join("d -- digital.png").exists());
        assert!(!into.join("digital").exists());
        assert_eq!(merge_thumbnails(&into.join("digital"), &into).unwrap(), 0);
    }

    #[test]
    fn test_gallery_is_sorted_by_modification_time() {
        let tree = DrawingTree::new();
        let newer = tree.image("g/a -- sketch.png", 4, 4);
        let older = tree.image("g/b -- sketch.jpg", 4, 4);
        tree.file("g/readme.txt");
        let past = std::time::SystemTime::now() - std::time::Duration::from_secs(3600);
        fs::File::options().write(true).open(&older).unwrap().set_modified(past).unwrap();

        let paths: Vec<_> = gallery(&tree.root().join("g"))
            .unwrap()
            .into_iter()
            .map(|entry| entry.path)
            .collect();
        assert_eq!(paths, vec![older, newer]);
    }
}
