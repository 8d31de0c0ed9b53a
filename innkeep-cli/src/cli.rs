//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    BookCommand, CancelCommand, CompletionsCommand, ListCommand, MenuCommand, RoomsCommand,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Terminal tool for booking rooms in a small hotel.
#[derive(Parser)]
#[command(name = "innkeep")]
#[command(version, about = "Book rooms in a small hotel", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Override the data directory location
    #[arg(long, value_name = "PATH", global = true, env = "INNKEEP_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Override the state file location
    #[arg(long, value_name = "PATH", global = true)]
    pub data_file: Option<PathBuf>,

    /// Only save on exit or on demand in the interactive menu
    #[arg(long, global = true)]
    pub no_autosave: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Run the interactive booking menu (default)
    Menu(MenuCommand),

    /// Show rooms and their availability
    Rooms(RoomsCommand),

    /// Reserve a room for a guest
    Book(BookCommand),

    /// List active reservations
    List(ListCommand),

    /// Cancel a reservation
    Cancel(CancelCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
