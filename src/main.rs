//! Paintr CLI application entry point
//!
//! This is the main executable for paintr. It tracks drawing progress from
//! tags embedded in filenames and renders a progress dashboard in the terminal.
//!
//! # Usage
//!
//! ```bash
//! # Rebuild thumbnails and show the dashboard (default command)
//! paintr
//! paintr dashboard --json
//!
//! # Tag index of a definition file over some folders
//! paintr stats ~/Drawing/.filetags ~/Drawing/Sketch\ Track --filter '#skill'
//!
//! # Level reached with 40 drawings
//! paintr level 40
//!
//! # Quiet mode (only output results)
//! paintr -q scan ~/Drawing --exclude-dir .stfolder
//! ```
//!
//! # Configuration
//!
//! On first run of the dashboard, paintr asks where the drawings live.
//! Configuration is stored in the user's config directory
//! (`~/.config/paintr/config.toml` on Linux) and `PAINTR_*` environment
//! variables override it.

use colored::Colorize;
use paintr::{
    PaintrError,
    cli::{Cli, Commands},
    commands::{self, ScanMode, StatsParams},
    config::PaintrConfig,
};
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::EnvFilter;

type Result<T> = std::result::Result<T, PaintrError>;

/// Send logs to stderr; `-v` raises paintr's level, `RUST_LOG` replaces the filter
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(format!("warn,paintr={level}")));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Load the configuration the command needs
///
/// The dashboard runs the setup wizard when no configuration exists yet;
/// every other command silently starts from the defaults.
fn load_config(cli: &Cli, command: &Commands, quiet: bool) -> Result<(PaintrConfig, std::path::PathBuf)> {
    let path = match &cli.config {
        Some(path) => path.clone(),
        None => PaintrConfig::config_path()?,
    };
    let config = if matches!(command, Commands::Dashboard { .. }) && !quiet {
        PaintrConfig::load_or_setup(&path)?
    } else {
        PaintrConfig::load_from(&path)?
    };
    Ok((config, path))
}

fn run(cli: &Cli) -> Result<()> {
    let command = cli.get_command();

    // commands that need no configuration
    match &command {
        Commands::Level { experience, length } => return commands::level(*experience, *length, cli.quiet),
        Commands::Tags { file_name, require } => return commands::tags(file_name, require, cli.quiet),
        Commands::Completions { shell } => {
            commands::completions(*shell);
            return Ok(());
        }
        Commands::Stats {
            definitions,
            roots,
            filters,
            scan,
            files,
            format,
        } => {
            let params = StatsParams {
                definitions: definitions.clone(),
                roots: roots.clone(),
                filters: filters.clone(),
                options: scan.to_options(),
                files: *files,
                format: *format,
            };
            return commands::stats(&params, cli.quiet);
        }
        Commands::Scan {
            roots,
            scan,
            list,
            latest,
        } => {
            let mode = if *latest {
                ScanMode::Latest
            } else if *list {
                ScanMode::List
            } else {
                ScanMode::Count
            };
            return commands::scan(roots, &scan.to_options(), mode, cli.quiet);
        }
        Commands::Dashboard { .. } | Commands::Thumbnails { .. } | Commands::Config { .. } => {}
    }

    let (config, path) = load_config(cli, &command, cli.quiet)?;
    let quiet = cli.quiet || config.quiet;

    match &command {
        Commands::Dashboard { json, interactive } => commands::dashboard(&config, *json, *interactive, quiet),
        Commands::Thumbnails { source, output } => {
            commands::thumbnails(&config, source.as_deref(), output.as_deref(), quiet)
        }
        Commands::Config { command } => commands::config(config, &path, command, quiet),
        _ => Ok(()),
    }
}

/// Main entry point for the paintr application
///
/// Parses command-line arguments, sets up logging and dispatches to the
/// appropriate command. Any error is logged and reported on one line.
fn main() -> ExitCode {
    let cli = Cli::parse_args();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = ?e, "command failed");
            eprintln!("{} {e}", "Error:".red().bold());
            ExitCode::FAILURE
        }
    }
}
