//! Error types for the innkeep library.
//!
//! Every fallible operation in the crate returns [`Result`], whose error side
//! is the [`Error`] enum below. Booking and cancellation failures are plain
//! values: the operation that produced them has left all state untouched.

use std::path::PathBuf;

use thiserror::Error;

use crate::reservation::ReservationId;
use crate::room::RoomNumber;

/// Result type alias for operations that may fail with an innkeep error.
///
/// # Examples
///
/// ```
/// use innkeep::{Error, Result};
///
/// fn example_operation() -> Result<u32> {
///     Ok(101)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the innkeep library.
#[derive(Debug, Error)]
pub enum Error {
    /// No room carries the requested number.
    #[error("room {number} not found")]
    RoomNotFound {
        /// The room number that was looked up.
        number: RoomNumber,
    },

    /// The room already holds a reservation.
    #[error("room {number} is already reserved")]
    RoomUnavailable {
        /// The room number that was requested.
        number: RoomNumber,
    },

    /// The guest details were rejected.
    #[error("invalid guest: {reason}")]
    InvalidGuest {
        /// Why the guest was rejected.
        reason: String,
    },

    /// The guest email is not a syntactically valid address.
    #[error("invalid email address '{email}'")]
    InvalidEmail {
        /// The rejected address.
        email: String,
    },

    /// The stay dates could not be parsed or are out of order.
    #[error("invalid date range: {reason}")]
    InvalidDateRange {
        /// Why the range was rejected.
        reason: String,
    },

    /// No reservation carries the requested identifier.
    #[error("reservation #{id} not found")]
    ReservationNotFound {
        /// The identifier that was looked up.
        id: ReservationId,
    },

    /// Reading or writing the state file failed.
    #[error("persistence error for {}: {source}", path.display())]
    Persistence {
        /// The state file involved.
        path: PathBuf,
        /// The underlying failure.
        #[source]
        source: std::io::Error,
    },

    /// Restored state violates a ledger or inventory invariant.
    #[error("corrupt hotel state: {details}")]
    CorruptState {
        /// Details about the violation.
        details: String,
    },

    /// A configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<crate::room::InvalidRoomNumberError> for Error {
    fn from(err: crate::room::InvalidRoomNumberError) -> Self {
        Self::Validation {
            field: "room number".into(),
            message: err.reason,
        }
    }
}

impl Error {
    /// Check if the error is an operator-facing rejection of a booking or
    /// cancellation, as opposed to an environmental failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use innkeep::{Error, RoomNumber};
    ///
    /// let number = RoomNumber::try_from(101).unwrap();
    /// assert!(Error::RoomUnavailable { number }.is_rejection());
    /// assert!(!Error::CorruptState { details: "x".into() }.is_rejection());
    /// ```
    #[must_use]
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            Self::RoomNotFound { .. }
                | Self::RoomUnavailable { .. }
                | Self::InvalidGuest { .. }
                | Self::InvalidEmail { .. }
                | Self::InvalidDateRange { .. }
                | Self::ReservationNotFound { .. }
        )
    }

    /// Check if a load failed because the state file's contents are bad,
    /// as opposed to the file being unreachable.
    ///
    /// Undecodable JSON, truncated or non-UTF-8 text and
    /// [`Error::CorruptState`] count as damaged; permission or other
    /// transport failures do not.
    ///
    /// # Examples
    ///
    /// ```
    /// use innkeep::Error;
    /// use std::io;
    ///
    /// let denied = Error::Persistence {
    ///     path: "hotel_data.json".into(),
    ///     source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
    /// };
    /// assert!(!denied.is_damaged_state());
    /// assert!(Error::CorruptState { details: "x".into() }.is_damaged_state());
    /// ```
    #[must_use]
    pub fn is_damaged_state(&self) -> bool {
        match self {
            Self::CorruptState { .. } => true,
            Self::Persistence { source, .. } => matches!(
                source.kind(),
                std::io::ErrorKind::InvalidData | std::io::ErrorKind::UnexpectedEof
            ),
            _ => false,
        }
    }
}
