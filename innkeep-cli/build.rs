//! Build script for innkeep-cli.
//!
//! Generates the `innkeep.1` man page into OUT_DIR using clap_mangen.
//! Build scripts cannot depend on the crate being built, so the command
//! tree is described here again.

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Keep in sync with src/cli.rs.
fn build_cli() -> Command {
    Command::new("innkeep")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Book rooms in a small hotel")
        .long_about(
            "Terminal tool for booking rooms in a small hotel. Runs an interactive menu \
             when no subcommand is given.",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("data-dir")
                .long("data-dir")
                .help("Override the data directory location")
                .value_name("PATH")
                .global(true)
                .env("INNKEEP_DATA_DIR"),
        )
        .arg(
            Arg::new("data-file")
                .long("data-file")
                .help("Override the state file location")
                .value_name("PATH")
                .global(true),
        )
        .arg(
            Arg::new("no-autosave")
                .long("no-autosave")
                .help("Only save on exit or on demand in the interactive menu")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .subcommands(vec![
            Command::new("menu")
                .about("Run the interactive booking menu (default)")
                .long_about("Numbered menu to view rooms, book, list, cancel, search and save"),
            Command::new("rooms")
                .about("Show rooms and their availability")
                .long_about("List rooms, optionally only free ones or one category"),
            Command::new("book")
                .about("Reserve a room for a guest")
                .long_about("Book a room for a date range and print the reservation id"),
            Command::new("list")
                .about("List active reservations")
                .long_about("Display all active reservations in various formats"),
            Command::new("cancel")
                .about("Cancel a reservation")
                .long_about("Cancel a reservation by id and make its room available again"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() -> std::io::Result<()> {
    let out_dir = PathBuf::from(std::env::var_os("OUT_DIR").unwrap_or_default());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir)?;

    let mut buffer = Vec::new();
    Man::new(build_cli()).render(&mut buffer)?;
    fs::write(man_dir.join("innkeep.1"), buffer)?;

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
    Ok(())
}
