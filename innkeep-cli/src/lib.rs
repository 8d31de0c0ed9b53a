//! Library exports for innkeep-cli.
//!
//! The binary is a thin wrapper over these modules; keeping them in a
//! library lets integration tests and tooling reach the CLI definition.

pub mod cli;
pub mod commands;
pub mod display;
pub mod error;
pub mod utils;

pub use cli::Cli;
