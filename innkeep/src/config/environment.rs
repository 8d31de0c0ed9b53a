//! Environment variable overrides for configuration.
//!
//! Recognized variables:
//! - `INNKEEP_DATA_FILE`: state file path
//! - `INNKEEP_AUTOSAVE`: boolean
//! - `INNKEEP_CURRENCY_SYMBOL`: amount prefix

use crate::config::schema::Config;
use crate::error::{Error, Result};
use std::env;
use std::path::PathBuf;

/// Handles `INNKEEP_*` environment variable overrides.
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// # Errors
    ///
    /// Returns a validation error if a variable holds an invalid value.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(path) = env::var("INNKEEP_DATA_FILE") {
            if !path.trim().is_empty() {
                config.data_file = Some(PathBuf::from(path));
            }
        }

        if let Ok(val) = env::var("INNKEEP_AUTOSAVE") {
            config.autosave = Some(Self::parse_bool("INNKEEP_AUTOSAVE", &val)?);
        }

        if let Ok(symbol) = env::var("INNKEEP_CURRENCY_SYMBOL") {
            config.currency_symbol = Some(symbol);
        }

        Ok(())
    }

    fn parse_bool(field: &str, s: &str) -> Result<bool> {
        match s.trim().to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!(
                    "Invalid boolean value: '{s}' (expected true/false/1/0/yes/no/on/off)"
                ),
            }),
        }
    }
}
