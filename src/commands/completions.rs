//! Completions command - print a shell completion script

use crate::{cli::Cli, completions};
use clap::CommandFactory;
use clap_complete::Shell;
use std::io;

/// Execute the completions command
pub fn execute(shell: Shell) {
    completions::generate_static(shell, &mut Cli::command(), &mut io::stdout());
}
