//! Configuration schema definitions.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Settings that can appear in `config.yaml`.
///
/// Every field is optional; unset fields fall back to lower-precedence
/// sources and finally to built-in defaults.
///
/// # Examples
///
/// ```
/// use innkeep::config::Config;
///
/// let config: Config = serde_yaml::from_str("autosave: false\ncurrency_symbol: \"€\"\n").unwrap();
/// assert_eq!(config.autosave, Some(false));
/// assert_eq!(config.currency_symbol.as_deref(), Some("€"));
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Path of the JSON state file. Relative paths are resolved against the
    /// data directory.
    pub data_file: Option<PathBuf>,

    /// Save after every successful booking or cancellation.
    pub autosave: Option<bool>,

    /// Symbol printed in front of amounts.
    pub currency_symbol: Option<String>,
}

impl Config {
    /// Overlays `other` on top of `self`; fields set in `other` win.
    pub fn merge(&mut self, other: Config) {
        if other.data_file.is_some() {
            self.data_file = other.data_file;
        }
        if other.autosave.is_some() {
            self.autosave = other.autosave;
        }
        if other.currency_symbol.is_some() {
            self.currency_symbol = other.currency_symbol;
        }
    }
}
