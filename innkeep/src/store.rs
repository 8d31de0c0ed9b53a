//! JSON state file.
//!
//! The hotel state lives in a single pretty-printed JSON document. A missing
//! file means "first run" and is not an error. Saves go through a temporary
//! file in the same directory that is then renamed over the target, so a
//! failed save never leaves a half-written document behind.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::hotel::{Hotel, Snapshot};

/// Default state file name inside the data directory.
pub const DEFAULT_STATE_FILE: &str = "hotel_data.json";

/// Handle on the on-disk hotel state.
///
/// # Examples
///
/// ```no_run
/// use innkeep::{Hotel, StateFile};
///
/// let file = StateFile::new("/tmp/innkeep/hotel_data.json");
/// let hotel = file.load_hotel().unwrap().unwrap_or_else(Hotel::new);
/// file.save_hotel(&hotel).unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateFile {
    path: PathBuf,
}

impl StateFile {
    /// Creates a handle for the given path. Nothing is touched on disk.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns `true` if the file exists.
    #[must_use]
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Reads the snapshot, or `None` if the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Persistence`] if the file exists but cannot be read
    /// or decoded.
    pub fn load(&self) -> Result<Option<Snapshot>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::debug!("no state file at {}, starting fresh", self.path.display());
                return Ok(None);
            }
            Err(e) => return Err(self.persistence_error(e)),
        };

        let snapshot: Snapshot =
            serde_json::from_str(&contents).map_err(|e| self.persistence_error(e.into()))?;
        log::debug!(
            "loaded {} room(s) and {} reservation(s) from {}",
            snapshot.rooms.len(),
            snapshot.reservations.len(),
            self.path.display()
        );
        Ok(Some(snapshot))
    }

    /// Reads and validates the hotel, or `None` if the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Persistence`] on read/decode failure and
    /// [`Error::CorruptState`] if the decoded state breaks an invariant.
    pub fn load_hotel(&self) -> Result<Option<Hotel>> {
        self.load()?.map(Hotel::from_snapshot).transpose()
    }

    /// Writes the snapshot atomically, creating the parent directory.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Persistence`] if any step fails; the previous file is
    /// left in place in that case.
    pub fn save(&self, snapshot: &Snapshot) -> Result<()> {
        self.write_atomic(snapshot)
            .map_err(|e| self.persistence_error(e))?;
        log::debug!("saved hotel state to {}", self.path.display());
        Ok(())
    }

    /// Writes the hotel state atomically.
    ///
    /// # Errors
    ///
    /// See [`StateFile::save`].
    pub fn save_hotel(&self, hotel: &Hotel) -> Result<()> {
        self.save(&hotel.snapshot())
    }

    fn write_atomic(&self, snapshot: &Snapshot) -> io::Result<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&dir)?;

        let mut tmp = tempfile::NamedTempFile::new_in(&dir)?;
        serde_json::to_writer_pretty(&mut tmp, snapshot)?;
        writeln!(tmp)?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).map_err(|e| e.error)?;
        Ok(())
    }

    fn persistence_error(&self, source: io::Error) -> Error {
        Error::Persistence {
            path: self.path.clone(),
            source,
        }
    }
}
