//! Command-line interface definitions and parsing
//!
//! This module defines the complete CLI structure for paintr using the `clap` crate.
//!
//! # Commands
//!
//! - **dashboard**: Rebuild thumbnails and show the progress dashboard (default)
//! - **stats**: Build a tag index from a definition file and drawing folders
//! - **level**: Show the level reached with some experience
//! - **tags**: Show the tags of a filename
//! - **scan**: Count directories and files below drawing folders
//! - **thumbnails**: Rebuild a thumbnail folder
//! - **config**: Show or change the configuration
//! - **completions**: Generate shell completions
//!
//! # Examples
//!
//! ```
//! use paintr::cli::{Cli, Commands};
//! use clap::Parser;
//!
//! let cli = Cli::parse_from(["paintr", "level", "40"]);
//! assert!(matches!(cli.get_command(), Commands::Level { experience: 40, .. }));
//! ```

use crate::config::KEYS;
use crate::level::DEFAULT_BAR_LENGTH;
use crate::scan::ScanOptions;
use clap::builder::PossibleValuesParser;
use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;

/// Output format of machine-readable commands
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Aligned, coloured text
    #[default]
    Text,
    /// JSON object in definition order
    Json,
    /// One `tag,value` row per entry
    Csv,
}

/// Exclusion options shared by commands that walk folders
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanArgs {
    /// Directory name to skip, with everything below it (repeatable)
    #[arg(long = "exclude-dir", value_name = "NAME")]
    pub exclude_dirs: Vec<String>,

    /// File name to skip (repeatable)
    #[arg(long = "exclude-file", value_name = "NAME")]
    pub exclude_files: Vec<String>,
}

impl ScanArgs {
    #[must_use]
    pub fn to_options(&self) -> ScanOptions {
        let options = self
            .exclude_dirs
            .iter()
            .fold(ScanOptions::new(), |options, name| options.exclude_dir(name.as_str()));
        self.exclude_files
            .iter()
            .fold(options, |options, name| options.exclude_file(name.as_str()))
    }
}

/// Configuration management subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ConfigCommands {
    /// Show the effective configuration
    Show,

    /// Print the path of the configuration file
    Path,

    /// Interactive first-time setup
    Init,

    /// Set a configuration value
    Set {
        /// Configuration key=value (e.g., bar_length=30)
        #[arg(value_name = "KEY=VALUE")]
        setting: String,
    },

    /// Get a configuration value
    Get {
        /// Configuration key to retrieve (e.g., sketchbook_root)
        #[arg(value_name = "KEY", value_parser = PossibleValuesParser::new(KEYS))]
        key: String,
    },
}

/// Main CLI structure for parsing command-line arguments
#[derive(Parser, Debug)]
#[command(name = "paintr")]
#[command(about = "Track drawing progress through tagged filenames", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    /// Log more (-v info, -vv debug); `RUST_LOG` overrides
    #[arg(short = 'v', long = "verbose", global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Use this configuration file instead of the default one
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Rebuild thumbnails and show the progress dashboard (default)
    #[command(visible_alias = "d")]
    Dashboard {
        /// Print JSON instead of the terminal dashboard
        #[arg(long = "json", conflicts_with = "interactive")]
        json: bool,

        /// Keep the data loaded and offer to refresh after each render
        #[arg(short = 'i', long = "interactive")]
        interactive: bool,
    },

    /// Build a tag index from a definition file and drawing folders
    #[command(visible_alias = "s")]
    Stats {
        /// Tag definition file (`<tag> <description>` per line)
        #[arg(value_name = "DEFINITIONS")]
        definitions: PathBuf,

        /// Folders to scan
        #[arg(value_name = "ROOT", required = true)]
        roots: Vec<PathBuf>,

        /// Only index tags whose definition line contains this text (repeatable)
        #[arg(short = 'f', long = "filter", value_name = "TEXT")]
        filters: Vec<String>,

        #[command(flatten)]
        scan: ScanArgs,

        /// List the matching filenames instead of counting them
        #[arg(long = "files")]
        files: bool,

        /// Output format
        #[arg(long = "format", value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Show the level reached with some experience
    Level {
        /// Experience points (typically a number of drawings)
        #[arg(value_name = "XP")]
        experience: u64,

        /// Units in the progress bar
        #[arg(short = 'l', long = "length", default_value_t = DEFAULT_BAR_LENGTH)]
        length: usize,
    },

    /// Show the tags embedded in a filename
    Tags {
        /// Filename (or path) to parse
        #[arg(value_name = "FILENAME")]
        file_name: String,

        /// Check that the filename carries all of these tags
        #[arg(short = 'r', long = "require", value_name = "TAG", num_args = 1..)]
        require: Vec<String>,
    },

    /// Count directories and files below drawing folders
    Scan {
        /// Folders to scan
        #[arg(value_name = "ROOT", required = true)]
        roots: Vec<PathBuf>,

        #[command(flatten)]
        scan: ScanArgs,

        /// List the files found
        #[arg(short = 'l', long = "list", conflicts_with = "latest")]
        list: bool,

        /// Show the most recently modified entry directly inside each root
        #[arg(long = "latest")]
        latest: bool,
    },

    /// Clear a thumbnail folder and rebuild it from a drawing folder
    Thumbnails {
        /// Drawing folder (defaults to the configured sketchbook root)
        #[arg(long = "source", value_name = "DIR")]
        source: Option<PathBuf>,

        /// Thumbnail folder to rebuild (defaults to the configured thumbnail folder)
        #[arg(short = 'o', long = "output", value_name = "DIR")]
        output: Option<PathBuf>,
    },

    /// Show or change the configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl Cli {
    /// Parse command-line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the command, defaulting to Dashboard if none specified
    #[must_use]
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Dashboard {
            json: false,
            interactive: false,
        })
    }
}
