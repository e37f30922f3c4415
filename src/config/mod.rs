//! Configuration module for paintr
//!
//! Manages where the drawings live and how the dashboard is laid out.
//! Configuration is stored in the user's config directory and can be
//! overridden per run with `PAINTR_*` environment variables, e.g.
//! `PAINTR_SKETCHBOOK_ROOT=~/scans paintr`.

mod setup;

pub use setup::first_time_setup;

use crate::level::DEFAULT_BAR_LENGTH;
use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Prefix of environment variable overrides
pub const ENV_PREFIX: &str = "PAINTR";

/// Keys accepted by [`PaintrConfig::set`] and [`PaintrConfig::get`]
pub const KEYS: [&str; 7] = [
    "sketchbook_root",
    "digital_root",
    "thumbnail_dir",
    "excluded_dirs",
    "bar_length",
    "gallery_size",
    "quiet",
];

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct PaintrConfig {
    /// Scanned sketchbook pages, one sub-directory per book
    pub sketchbook_root: PathBuf,

    /// Exported digital paintings
    pub digital_root: PathBuf,

    /// Where thumbnails are rebuilt on every load
    pub thumbnail_dir: PathBuf,

    /// Directory names skipped while scanning (sync-tool metadata and such)
    pub excluded_dirs: Vec<String>,

    /// Units in a progress bar
    pub bar_length: usize,

    /// Thumbnails shown in the recent-artwork gallery
    pub gallery_size: usize,

    /// Suppress informational output by default
    pub quiet: bool,
}

impl Default for PaintrConfig {
    fn default() -> Self {
        let home = dirs::home_dir().unwrap_or_default();
        let cache = dirs::cache_dir().unwrap_or_else(|| home.join(".cache"));
        Self {
            sketchbook_root: home.join("Drawing").join("Sketch Track"),
            digital_root: home.join("Drawing").join("Digital Drawing").join("PNG"),
            thumbnail_dir: cache.join("paintr").join("thumbnails"),
            excluded_dirs: vec![".stfolder".to_string()],
            bar_length: DEFAULT_BAR_LENGTH,
            gallery_size: 64,
            quiet: false,
        }
    }
}

impl PaintrConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine config directory".to_string()))?;

        Ok(config_dir.join("paintr").join("config.toml"))
    }

    /// Load configuration from the default location, creating it if missing
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be read, parsed, or created.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from `path`, writing the defaults there if it doesn't exist
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read, parsed, or created,
    /// or if an environment override has the wrong type.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            Self::default().save_to(path)?;
        }
        Self::load_layered(path, Self::environment())
    }

    /// Load configuration from `path`, running the interactive setup first if it doesn't exist
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if setup fails or the configuration cannot be loaded.
    pub fn load_or_setup(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            first_time_setup(path)?;
        }
        Self::load_from(path)
    }

    fn environment() -> Environment {
        Environment::with_prefix(ENV_PREFIX)
            .try_parsing(true)
            .list_separator(",")
            .with_list_parse_key("excluded_dirs")
    }

    fn load_layered(path: &Path, env: Environment) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml).required(false))
            .add_source(env)
            .build()?;

        settings.try_deserialize()
    }

    /// Save configuration to the default location
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the configuration cannot be written.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to `path`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config directory cannot be created, the configuration
    /// cannot be serialized to TOML, or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ConfigError::Message(format!("Failed to create config directory: {e}")))?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Render one value as text
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` for an unknown key.
    pub fn get(&self, key: &str) -> Result<String, ConfigError> {
        Ok(match key {
            "sketchbook_root" => self.sketchbook_root.display().to_string(),
            "digital_root" => self.digital_root.display().to_string(),
            "thumbnail_dir" => self.thumbnail_dir.display().to_string(),
            "excluded_dirs" => self.excluded_dirs.join(","),
            "bar_length" => self.bar_length.to_string(),
            "gallery_size" => self.gallery_size.to_string(),
            "quiet" => self.quiet.to_string(),
            _ => return Err(unknown_key(key)),
        })
    }

    /// Update one value from text (does not save)
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` for an unknown key and
    /// `ConfigError::Message` for a value of the wrong type.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        match key {
            "sketchbook_root" => self.sketchbook_root = PathBuf::from(value),
            "digital_root" => self.digital_root = PathBuf::from(value),
            "thumbnail_dir" => self.thumbnail_dir = PathBuf::from(value),
            "excluded_dirs" => {
                self.excluded_dirs = value
                    .split(',')
                    .map(str::trim)
                    .filter(|name| !name.is_empty())
                    .map(String::from)
                    .collect();
            }
            "bar_length" => self.bar_length = parse_value(key, value)?,
            "gallery_size" => self.gallery_size = parse_value(key, value)?,
            "quiet" => self.quiet = parse_value(key, value)?,
            _ => return Err(unknown_key(key)),
        }
        Ok(())
    }
}

fn unknown_key(key: &str) -> ConfigError {
    ConfigError::NotFound(format!(
        "Unknown configuration key: '{key}'. Available keys: {}",
        KEYS.join(", ")
    ))
}

fn parse_value<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value
        .parse()
        .map_err(|_| ConfigError::Message(format!("Invalid value for {key}: '{value}'")))
}
