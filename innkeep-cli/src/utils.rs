//! Utility functions for CLI operations.
//!
//! This module provides helpers shared across commands: settings
//! resolution, opening and saving the hotel state, and value formatting.

use crate::error::CliError;
use chrono::{DateTime, Utc};
use innkeep::{Config, ConfigBuilder, Hotel, Settings, StateFile};
use rust_decimal::Decimal;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Override the data directory location.
    pub data_dir: Option<PathBuf>,

    /// Override the state file location.
    pub data_file: Option<PathBuf>,

    /// Only save on exit or on demand in the interactive menu.
    pub no_autosave: bool,
}

/// Resolve settings from config file, environment and global flags.
///
/// Flags take precedence over environment variables, which take
/// precedence over `config.yaml`.
pub fn load_settings(global: &GlobalOptions) -> Result<Settings, CliError> {
    let mut builder = ConfigBuilder::new();
    if let Some(ref dir) = global.data_dir {
        builder = builder.with_data_dir(dir);
    }

    let overrides = Config {
        data_file: global.data_file.clone(),
        autosave: global.no_autosave.then_some(false),
        currency_symbol: None,
    };

    builder
        .with_config(overrides)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}

/// Open the hotel state described by `settings`.
///
/// A missing state file yields the default rooms. A file whose contents
/// cannot be decoded or break an invariant is moved aside (see
/// [`quarantine`]) and the default rooms are used, so that the session can
/// continue.
///
/// # Errors
///
/// A file that exists but cannot be read (permissions, I/O failure) is an
/// error: continuing with defaults would overwrite it on the next save.
pub fn open_hotel(settings: &Settings) -> Result<(StateFile, Hotel), CliError> {
    let file = StateFile::new(&settings.data_file);
    let hotel = match file.load_hotel() {
        Ok(Some(hotel)) => {
            log::info!(
                "loaded {} reservation(s) from {}",
                hotel.ledger().len(),
                file.path().display()
            );
            hotel
        }
        Ok(None) => {
            log::debug!("starting with the default rooms");
            Hotel::new()
        }
        Err(e) if e.is_damaged_state() => {
            log::warn!("{e}; continuing with the default rooms");
            quarantine(file.path());
            Hotel::new()
        }
        Err(e) => return Err(e.into()),
    };
    Ok((file, hotel))
}

/// Move a damaged state file to `<file>.corrupt`, or `<file>.corrupt.N`
/// with the first free `N` when earlier copies exist.
///
/// Returns the new location, or `None` if the file could not be moved.
pub fn quarantine(path: &Path) -> Option<PathBuf> {
    let target = (0u32..)
        .map(|n| {
            let mut name = OsString::from(path.as_os_str());
            name.push(".corrupt");
            if n > 0 {
                name.push(format!(".{n}"));
            }
            PathBuf::from(name)
        })
        .find(|candidate| !candidate.exists())?;

    match std::fs::rename(path, &target) {
        Ok(()) => {
            log::warn!("moved unreadable state file to {}", target.display());
            Some(target)
        }
        Err(e) => {
            log::warn!("could not move unreadable state file aside: {e}");
            None
        }
    }
}

/// Save the hotel state.
pub fn save_hotel(file: &StateFile, hotel: &Hotel) -> Result<(), CliError> {
    file.save_hotel(hotel).map_err(CliError::from)
}

/// Format an amount with the configured currency symbol.
pub fn format_money(symbol: &str, amount: Decimal) -> String {
    format!("{symbol}{amount:.2}")
}

/// Format a timestamp for display.
pub fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d %H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money() {
        assert_eq!(format_money("$", Decimal::new(30000, 2)), "$300.00");
        assert_eq!(format_money("€", Decimal::new(289, 0)), "€289.00");
    }

    #[test]
    fn test_format_timestamp() {
        let ts = DateTime::parse_from_rfc3339("2024-01-15T10:30:45Z")
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(format_timestamp(ts), "2024-01-15 10:30:45");
    }

    fn settings_in(dir: &Path) -> Settings {
        Settings {
            data_dir: dir.to_path_buf(),
            data_file: dir.join("hotel_data.json"),
            autosave: true,
            currency_symbol: "$".into(),
        }
    }

    #[test]
    fn test_open_hotel_quarantines_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let settings = settings_in(dir.path());
        std::fs::write(&settings.data_file, "not json").unwrap();

        let (_, hotel) = open_hotel(&settings).unwrap();
        assert!(hotel.ledger().is_empty());
        assert!(!settings.data_file.exists());
        assert!(dir.path().join("hotel_data.json.corrupt").exists());
    }

    #[test]
    fn test_second_quarantine_keeps_first_copy() {
        let dir = tempfile::tempdir().unwrap();
        let settings = settings_in(dir.path());

        std::fs::write(&settings.data_file, "first garbage").unwrap();
        open_hotel(&settings).unwrap();
        std::fs::write(&settings.data_file, "second garbage").unwrap();
        open_hotel(&settings).unwrap();

        let first = dir.path().join("hotel_data.json.corrupt");
        let second = dir.path().join("hotel_data.json.corrupt.1");
        assert_eq!(std::fs::read_to_string(first).unwrap(), "first garbage");
        assert_eq!(std::fs::read_to_string(second).unwrap(), "second garbage");
    }

    #[test]
    fn test_inconsistent_state_is_quarantined() {
        let dir = tempfile::tempdir().unwrap();
        let settings = settings_in(dir.path());
        let mut snapshot = Hotel::new().snapshot();
        snapshot.next_reservation_id = innkeep::ReservationId::new(0);
        StateFile::new(&settings.data_file).save(&snapshot).unwrap();

        let (_, hotel) = open_hotel(&settings).unwrap();
        assert_eq!(hotel.ledger().next_id().value(), 1);
        assert!(dir.path().join("hotel_data.json.corrupt").exists());
    }

    #[test]
    fn test_unreadable_state_is_left_alone() {
        let dir = tempfile::tempdir().unwrap();
        let settings = settings_in(dir.path());
        // A directory in place of the file fails to read without being damaged.
        std::fs::create_dir(&settings.data_file).unwrap();

        let err = open_hotel(&settings).unwrap_err();
        assert_eq!(err.exit_code(), 6);
        assert!(settings.data_file.is_dir());
        assert!(!dir.path().join("hotel_data.json.corrupt").exists());
    }
}
