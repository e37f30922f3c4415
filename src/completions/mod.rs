//! Shell completion support for paintr
//!
//! Completions are static: subcommands, flags, value enums, paths and the
//! configuration keys accepted by `config get`.

use clap::Command;
use clap_complete::Shell;
use std::io::Write;

/// Generate static shell completions into `buf`
///
/// # Arguments
/// * `shell` - Target shell (bash, zsh, fish, powershell, elvish)
/// * `cmd` - The clap Command to generate completions for
pub fn generate_static<W: Write>(shell: Shell, cmd: &mut Command, buf: &mut W) {
    clap_complete::generate(shell, cmd, cmd.get_name().to_string(), buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Cli;
    use clap::CommandFactory;

    #[test]
    fn test_zsh_completions_list_commands_and_keys() {
        let mut buf = Vec::new();
        generate_static(Shell::Zsh, &mut Cli::command(), &mut buf);
        let script = String::from_utf8(buf).unwrap();

        assert!(script.contains("paintr"));
        assert!(script.contains("dashboard"));
        assert!(script.contains("thumbnails"));
        assert!(script.contains("sketchbook_root"));
    }
}
