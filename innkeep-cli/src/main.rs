//! Main entry point for the innkeep CLI.
//!
//! Without a subcommand the interactive menu starts. The one-shot commands
//! are:
//! - `rooms`: show rooms and their availability
//! - `book`: reserve a room
//! - `list`: list active reservations
//! - `cancel`: cancel a reservation
//! - `completions`: generate shell completion scripts

use clap::Parser;
use innkeep_cli::cli::{Cli, Command};
use innkeep_cli::commands::MenuCommand;
use innkeep_cli::utils::GlobalOptions;

fn main() {
    let cli = Cli::parse();

    let _logger = innkeep::init_logger(cli.verbose, cli.quiet);

    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        data_dir: cli.data_dir,
        data_file: cli.data_file,
        no_autosave: cli.no_autosave,
    };

    let result = match cli.command.unwrap_or(Command::Menu(MenuCommand {})) {
        Command::Menu(cmd) => cmd.execute(&global),
        Command::Rooms(cmd) => cmd.execute(&global),
        Command::Book(cmd) => cmd.execute(&global),
        Command::List(cmd) => cmd.execute(&global),
        Command::Cancel(cmd) => cmd.execute(&global),
        Command::Completions(cmd) => cmd.execute(&global),
    };

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
