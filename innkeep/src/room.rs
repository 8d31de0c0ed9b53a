//! Room types for the hotel inventory.
//!
//! This module provides the room number newtype, the fixed set of room
//! categories, and the [`Room`] record itself.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A valid room number (any positive integer).
///
/// # Examples
///
/// ```
/// use innkeep::RoomNumber;
///
/// let number = RoomNumber::try_from(101).unwrap();
/// assert_eq!(number.value(), 101);
///
/// assert!(RoomNumber::try_from(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct RoomNumber(u32);

impl RoomNumber {
    /// Returns the underlying room number.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for RoomNumber {
    type Error = InvalidRoomNumberError;

    fn try_from(value: u32) -> std::result::Result<Self, Self::Error> {
        if value == 0 {
            Err(InvalidRoomNumberError {
                input: value.to_string(),
                reason: "room number must be positive".into(),
            })
        } else {
            Ok(Self(value))
        }
    }
}

impl From<RoomNumber> for u32 {
    fn from(number: RoomNumber) -> Self {
        number.0
    }
}

impl FromStr for RoomNumber {
    type Err = InvalidRoomNumberError;

    /// Parses operator input such as `" 101 "`.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let trimmed = s.trim();
        let value: u32 = trimmed.parse().map_err(|_| InvalidRoomNumberError {
            input: trimmed.to_string(),
            reason: format!("'{trimmed}' is not a valid room number"),
        })?;
        Self::try_from(value)
    }
}

impl fmt::Display for RoomNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Error type for invalid room numbers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidRoomNumberError {
    /// The rejected input.
    pub input: String,
    /// The reason the number is invalid.
    pub reason: String,
}

impl fmt::Display for InvalidRoomNumberError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.reason)
    }
}

impl std::error::Error for InvalidRoomNumberError {}

/// The fixed set of room classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoomCategory {
    /// One guest.
    Single,
    /// Two guests.
    Double,
    /// Multi-room suite.
    Suite,
}

impl RoomCategory {
    /// All categories in display order.
    pub const ALL: [Self; 3] = [Self::Single, Self::Double, Self::Suite];

    /// Returns the display name of the category.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Single => "Single",
            Self::Double => "Double",
            Self::Suite => "Suite",
        }
    }
}

impl fmt::Display for RoomCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for RoomCategory {
    type Err = Error;

    /// Parses a category name, ignoring case and surrounding whitespace.
    ///
    /// # Examples
    ///
    /// ```
    /// use innkeep::RoomCategory;
    ///
    /// assert_eq!("suite".parse::<RoomCategory>().unwrap(), RoomCategory::Suite);
    /// assert_eq!(" DOUBLE ".parse::<RoomCategory>().unwrap(), RoomCategory::Double);
    /// assert!("penthouse".parse::<RoomCategory>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| Error::Validation {
                field: "category".into(),
                message: format!("unknown room category '{wanted}' (expected Single, Double or Suite)"),
            })
    }
}

/// A bookable room.
///
/// # Examples
///
/// ```
/// use innkeep::{Room, RoomCategory, RoomNumber};
/// use rust_decimal::Decimal;
///
/// let number = RoomNumber::try_from(101).unwrap();
/// let room = Room::new(number, RoomCategory::Single, Decimal::new(8000, 2)).unwrap();
/// assert_eq!(room.nightly_rate().to_string(), "80.00");
/// assert!(!room.is_reserved());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    number: RoomNumber,
    category: RoomCategory,
    nightly_rate: Decimal,
    reserved: bool,
}

impl Room {
    /// Creates an unreserved room.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the nightly rate is negative.
    pub fn new(number: RoomNumber, category: RoomCategory, nightly_rate: Decimal) -> Result<Self> {
        if nightly_rate < Decimal::ZERO {
            return Err(Error::Validation {
                field: "nightly_rate".into(),
                message: format!("rate {nightly_rate} for room {number} is negative"),
            });
        }
        Ok(Self {
            number,
            category,
            nightly_rate,
            reserved: false,
        })
    }

    /// Returns the room number.
    #[must_use]
    pub const fn number(&self) -> RoomNumber {
        self.number
    }

    /// Returns the room category.
    #[must_use]
    pub const fn category(&self) -> RoomCategory {
        self.category
    }

    /// Returns the flat per-night rate.
    #[must_use]
    pub const fn nightly_rate(&self) -> Decimal {
        self.nightly_rate
    }

    /// Returns whether the room currently holds a reservation.
    #[must_use]
    pub const fn is_reserved(&self) -> bool {
        self.reserved
    }

    pub(crate) fn set_reserved(&mut self, reserved: bool) {
        self.reserved = reserved;
    }
}
