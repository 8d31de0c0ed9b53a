//! Configuration system for innkeep.
//!
//! Settings are merged from several sources. Precedence, highest first:
//!
//! 1. Programmatic overrides (via [`ConfigBuilder::with_config`])
//! 2. Environment variables (`INNKEEP_*`)
//! 3. User config (`{data_dir}/config.yaml`)
//! 4. Built-in defaults
//!
//! The data directory itself defaults to `~/.innkeep` and can be overridden
//! with [`ConfigBuilder::with_data_dir`].
//!
//! # Examples
//!
//! ```
//! use innkeep::config::{Config, ConfigBuilder};
//! use std::path::Path;
//!
//! let settings = ConfigBuilder::new()
//!     .with_data_dir("/srv/innkeep")
//!     .skip_files()
//!     .skip_env()
//!     .with_config(Config {
//!         autosave: Some(false),
//!         ..Config::default()
//!     })
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(settings.data_file, Path::new("/srv/innkeep/hotel_data.json"));
//! assert!(!settings.autosave);
//! assert_eq!(settings.currency_symbol, "$");
//! ```

pub mod environment;
pub mod loader;
pub mod schema;

pub use environment::EnvironmentConfig;
pub use loader::ConfigLoader;
pub use schema::Config;

use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::store::DEFAULT_STATE_FILE;

/// Name of the default data directory under the home directory.
pub const DATA_DIR_NAME: &str = ".innkeep";

/// Default currency symbol.
pub const DEFAULT_CURRENCY_SYMBOL: &str = "$";

/// Returns the default data directory, `~/.innkeep`.
///
/// # Errors
///
/// Returns a validation error if the home directory cannot be determined.
pub fn default_data_dir() -> Result<PathBuf> {
    home::home_dir()
        .map(|home| home.join(DATA_DIR_NAME))
        .ok_or_else(|| Error::Validation {
            field: "data_dir".into(),
            message: "could not determine home directory".into(),
        })
}

/// Fully resolved settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Directory holding `config.yaml` and, by default, the state file.
    pub data_dir: PathBuf,
    /// Absolute or data-dir-relative-resolved path of the state file.
    pub data_file: PathBuf,
    /// Save after every successful mutation.
    pub autosave: bool,
    /// Symbol printed in front of amounts.
    pub currency_symbol: String,
}

/// Builder that merges configuration sources into [`Settings`].
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    data_dir: Option<PathBuf>,
    overrides: Option<Config>,
    skip_files: bool,
    skip_env: bool,
}

impl ConfigBuilder {
    /// Creates a builder that reads files and environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses `dir` instead of `~/.innkeep`.
    #[must_use]
    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = Some(dir.into());
        self
    }

    /// Applies programmatic overrides with the highest precedence.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.overrides = Some(config);
        self
    }

    /// Does not read `config.yaml`.
    #[must_use]
    pub const fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Ignores `INNKEEP_*` variables.
    #[must_use]
    pub const fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Merges all sources.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory is unknown (and no data dir
    /// was given), the config file is invalid, or an environment variable
    /// holds an invalid value.
    pub fn build(self) -> Result<Settings> {
        let data_dir = match self.data_dir {
            Some(dir) => dir,
            None => default_data_dir()?,
        };

        let mut config = Config::default();
        if !self.skip_files {
            if let Some(user) = ConfigLoader::load_user_config(&data_dir)? {
                config.merge(user);
            }
        }
        if !self.skip_env {
            EnvironmentConfig::apply_overrides(&mut config)?;
        }
        if let Some(overrides) = self.overrides {
            config.merge(overrides);
        }

        let data_file = match config.data_file {
            Some(path) if path.is_absolute() => path,
            Some(path) => data_dir.join(path),
            None => data_dir.join(DEFAULT_STATE_FILE),
        };

        Ok(Settings {
            data_dir,
            data_file,
            autosave: config.autosave.unwrap_or(true),
            currency_symbol: config
                .currency_symbol
                .unwrap_or_else(|| DEFAULT_CURRENCY_SYMBOL.to_string()),
        })
    }
}
