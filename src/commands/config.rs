//! Config command - show and change the configuration

use crate::{
    PaintrError,
    cli::ConfigCommands,
    config::{self, PaintrConfig},
};
use std::path::Path;

type Result<T> = std::result::Result<T, PaintrError>;

/// Execute a configuration subcommand against the file at `path`
///
/// # Errors
///
/// Returns `PaintrError` if the setting is malformed, the key is unknown,
/// the value has the wrong type, or the configuration cannot be saved.
pub fn execute(mut config: PaintrConfig, path: &Path, command: &ConfigCommands, quiet: bool) -> Result<()> {
    match command {
        ConfigCommands::Show => {
            let text = toml::to_string_pretty(&config)
                .map_err(|e| PaintrError::InvalidInput(format!("Failed to serialize config: {e}")))?;
            print!("{text}");
        }
        ConfigCommands::Path => println!("{}", path.display()),
        ConfigCommands::Init => {
            config::first_time_setup(path)?;
        }
        ConfigCommands::Set { setting } => {
            let (key, value) = parse_setting(setting)?;
            config.set(key, value)?;
            config.save_to(path)?;
            if !quiet {
                println!("Set {key} = {}", config.get(key)?);
            }
        }
        ConfigCommands::Get { key } => println!("{}", config.get(key)?),
    }
    Ok(())
}

fn parse_setting(setting: &str) -> Result<(&str, &str)> {
    setting
        .split_once('=')
        .map(|(key, value)| (key.trim(), value.trim()))
        .ok_or_else(|| PaintrError::InvalidInput("Invalid format. Use: paintr config set key=value".into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::DrawingTree;

    #[test]
    fn test_parse_setting() {
        assert_eq!(parse_setting("bar_length = 30").unwrap(), ("bar_length", "30"));
        assert_eq!(parse_setting("excluded_dirs=a,b=c").unwrap(), ("excluded_dirs", "a,b=c"));
        assert!(parse_setting("bar_length").is_err());
    }

    #[test]
    fn test_set_saves_to_file() {
        let tree = DrawingTree::new();
        let path = tree.root().join("config.toml");
        let command = ConfigCommands::Set {
            setting: "gallery_size=8".into(),
        };

        execute(PaintrConfig::default(), &path, &command, true).unwrap();
        let saved = std::fs::read_to_string(&path).unwrap();
        assert!(saved.contains("gallery_size = 8"));
    }

    #[test]
    fn test_set_rejects_bad_value() {
        let tree = DrawingTree::new();
        let path = tree.root().join("config.toml");
        let command = ConfigCommands::Set {
            setting: "quiet=maybe".into(),
        };

        assert!(matches!(
            execute(PaintrConfig::default(), &path, &command, true),
            Err(PaintrError::Config(_))
        ));
        assert!(!path.exists());
    }
}
