//! CLI command implementations.
//!
//! - `menu`: interactive booking menu (the default)
//! - `rooms`: show rooms and their availability
//! - `book`: reserve a room in one shot
//! - `list`: list active reservations
//! - `cancel`: cancel a reservation
//! - `completions`: generate shell completion scripts

pub mod book;
pub mod cancel;
pub mod completions;
pub mod list;
pub mod menu;
pub mod rooms;

pub use book::BookCommand;
pub use cancel::CancelCommand;
pub use completions::CompletionsCommand;
pub use list::{ListCommand, OutputFormat};
pub use menu::{Menu, MenuChoice, MenuCommand};
pub use rooms::RoomsCommand;
