//! Shell completion generation command.
//!
//! This module provides the `completions` command which generates shell completion
//! scripts for bash, zsh, fish, and PowerShell.

use crate::cli::Cli;
use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::{Args, CommandFactory};
use clap_complete::{generate, Shell};
use std::io;

/// Name of the installed binary.
const BIN_NAME: &str = "innkeep";

/// Generate shell completion scripts
#[derive(Args)]
pub struct CompletionsCommand {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

impl CompletionsCommand {
    /// Execute the completions command.
    pub fn execute(&self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut cmd = Cli::command();

        if !global.quiet {
            print_install_hint(self.shell);
        }

        generate(self.shell, &mut cmd, BIN_NAME, &mut io::stdout());

        Ok(())
    }
}

/// Install instructions go to stderr so stdout stays a valid script.
fn print_install_hint(shell: Shell) {
    eprintln!("# Generating {shell} completion script");
    match shell {
        Shell::Bash => {
            eprintln!("#   innkeep completions bash > ~/.local/share/bash-completion/completions/innkeep");
            eprintln!("# Or in ~/.bashrc:");
            eprintln!("#   eval \"$(innkeep completions bash)\"");
        }
        Shell::Zsh => {
            eprintln!("#   innkeep completions zsh > ~/.zsh/completions/_innkeep");
            eprintln!("# Make sure ~/.zsh/completions is in your $fpath");
        }
        Shell::Fish => {
            eprintln!("#   innkeep completions fish > ~/.config/fish/completions/innkeep.fish");
        }
        Shell::PowerShell => {
            eprintln!("#   innkeep completions powershell | Out-String | Invoke-Expression");
        }
        _ => {}
    }
    eprintln!();
}
