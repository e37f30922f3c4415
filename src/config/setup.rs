//! Interactive setup wizard for first-time configuration
//!
//! Asks where the drawings live and where thumbnails should go, then
//! writes the configuration file.

use super::PaintrConfig;
use config::ConfigError;
use dialoguer::{Input, theme::ColorfulTheme};
use std::path::{Path, PathBuf};

fn prompt_path(prompt: &str, default: &Path) -> Result<PathBuf, ConfigError> {
    let value: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .default(default.to_string_lossy().to_string())
        .interact_text()
        .map_err(|e| ConfigError::Message(format!("Failed to read input: {e}")))?;
    Ok(PathBuf::from(value))
}

/// Defaults with the three folders replaced
fn with_folders(sketchbook_root: PathBuf, digital_root: PathBuf, thumbnail_dir: PathBuf) -> PaintrConfig {
    PaintrConfig {
        sketchbook_root,
        digital_root,
        thumbnail_dir,
        quiet: false,
        ..PaintrConfig::default()
    }
}

/// Interactive first-time setup
///
/// Prompts for the sketchbook folder, the digital painting folder and the
/// thumbnail folder (each defaulting to the current value), then saves the
/// configuration to `path`.
///
/// # Errors
///
/// Returns `ConfigError` if user input cannot be read or the configuration
/// cannot be saved.
pub fn first_time_setup(path: &Path) -> Result<PaintrConfig, ConfigError> {
    println!("Welcome to paintr! Let's find your drawings.\n");

    let defaults = PaintrConfig::default();
    let config = with_folders(
        prompt_path("Sketchbook folder", &defaults.sketchbook_root)?,
        prompt_path("Digital painting folder", &defaults.digital_root)?,
        prompt_path("Thumbnail folder (cleared on every load)", &defaults.thumbnail_dir)?,
    );

    config.save_to(path)?;

    println!("\nConfiguration saved to {}", path.display());
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::testing::DrawingTree;

    #[test]
    fn test_answers_replace_only_the_folders() {
        let config = with_folders("/art/books".into(), "/art/png".into(), "/tmp/thumbs".into());

        assert_eq!(config.sketchbook_root, PathBuf::from("/art/books"));
        assert_eq!(config.digital_root, PathBuf::from("/art/png"));
        assert_eq!(config.thumbnail_dir, PathBuf::from("/tmp/thumbs"));
        let defaults = PaintrConfig::default();
        assert_eq!(config.excluded_dirs, defaults.excluded_dirs);
        assert_eq!(config.bar_length, defaults.bar_length);
        assert_eq!(config.gallery_size, defaults.gallery_size);
        assert!(!config.quiet);
    }

    #[test]
    fn test_answers_survive_a_save() {
        let tree = DrawingTree::new();
        let path = tree.root().join("config.toml");
        let config = with_folders("/art/books".into(), "/art/png".into(), "/tmp/thumbs".into());
        config.save_to(&path).unwrap();

        let saved: PaintrConfig = toml::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(saved, config);
    }
}
