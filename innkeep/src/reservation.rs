//! Reservation types for tracking room bookings.
//!
//! This module provides the reservation identifier, the validated guest and
//! stay-date types, and the [`Reservation`] record with a builder that runs
//! every guest and date check before a reservation can exist.

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::room::RoomNumber;

/// Calendar format accepted for check-in and check-out dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A unique, never-reused reservation identifier.
///
/// # Examples
///
/// ```
/// use innkeep::ReservationId;
///
/// let id = ReservationId::new(3);
/// assert_eq!(id.value(), 3);
/// assert_eq!(id.next().unwrap().value(), 4);
/// assert!(ReservationId::new(u64::MAX).next().is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReservationId(u64);

impl ReservationId {
    /// The identifier handed to the first booking of a fresh ledger.
    pub const FIRST: Self = Self(1);

    /// Wraps a raw identifier.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the underlying identifier.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Returns the identifier that follows this one, or `None` once the
    /// id space is exhausted.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self.0.checked_add(1) {
            Some(value) => Some(Self(value)),
            None => None,
        }
    }
}

impl fmt::Display for ReservationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::str::FromStr for ReservationId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim().trim_start_matches('#');
        trimmed
            .parse::<u64>()
            .ok()
            .filter(|v| *v > 0)
            .map(Self)
            .ok_or_else(|| Error::Validation {
                field: "reservation id".into(),
                message: format!("'{}' is not a valid reservation id", s.trim()),
            })
    }
}

/// Returns `true` if `email` looks like a deliverable mail address.
///
/// The check is syntactic only: exactly one `@`, a non-empty local part, no
/// whitespace, and a domain made of at least two non-empty dot-separated
/// labels of letters, digits and hyphens.
///
/// # Examples
///
/// ```
/// use innkeep::reservation::is_valid_email;
///
/// assert!(is_valid_email("ada@example.com"));
/// assert!(!is_valid_email("ada@localhost"));
/// assert!(!is_valid_email("ada example.com"));
/// ```
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    if email.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return false;
    }
    if local.starts_with('.') || local.ends_with('.') || local.contains("..") {
        return false;
    }
    let labels: Vec<&str> = domain.split('.').collect();
    labels.len() >= 2
        && labels.iter().all(|label| {
            !label.is_empty()
                && !label.starts_with('-')
                && !label.ends_with('-')
                && label.chars().all(|c| c.is_alphanumeric() || c == '-')
        })
}

/// The guest a reservation is held for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guest {
    name: String,
    email: String,
}

impl Guest {
    /// Validates and builds guest details.
    ///
    /// The name is trimmed of surrounding whitespace; the email is kept as
    /// given apart from trimming.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidGuest`] for an empty name and
    /// [`Error::InvalidEmail`] for a malformed address.
    pub fn new(name: &str, email: &str) -> Result<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::InvalidGuest {
                reason: "guest name must be non-empty".into(),
            });
        }
        let email = email.trim();
        if !is_valid_email(email) {
            return Err(Error::InvalidEmail {
                email: email.to_string(),
            });
        }
        Ok(Self {
            name: name.to_string(),
            email: email.to_string(),
        })
    }

    /// Returns the guest name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the guest email address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }
}

/// An ordered check-in / check-out pair.
///
/// # Examples
///
/// ```
/// use innkeep::StayDates;
///
/// let stay = StayDates::parse("2024-01-01", "2024-01-04").unwrap();
/// assert_eq!(stay.nights(), 3);
///
/// assert!(StayDates::parse("2024-01-04", "2024-01-04").is_err());
/// assert!(StayDates::parse("01/04/2024", "2024-01-05").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StayDates {
    check_in: NaiveDate,
    check_out: NaiveDate,
}

impl StayDates {
    /// Builds a stay from two dates.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDateRange`] unless `check_out` is strictly
    /// after `check_in`.
    pub fn new(check_in: NaiveDate, check_out: NaiveDate) -> Result<Self> {
        if check_out <= check_in {
            return Err(Error::InvalidDateRange {
                reason: format!(
                    "check-out {} must be after check-in {}",
                    check_out.format(DATE_FORMAT),
                    check_in.format(DATE_FORMAT)
                ),
            });
        }
        Ok(Self {
            check_in,
            check_out,
        })
    }

    /// Parses both dates in `YYYY-MM-DD` form and checks their order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDateRange`] if either date fails to parse or
    /// the dates are out of order.
    pub fn parse(check_in: &str, check_out: &str) -> Result<Self> {
        Self::new(parse_date(check_in)?, parse_date(check_out)?)
    }

    /// Returns the check-in date.
    #[must_use]
    pub const fn check_in(&self) -> NaiveDate {
        self.check_in
    }

    /// Returns the check-out date.
    #[must_use]
    pub const fn check_out(&self) -> NaiveDate {
        self.check_out
    }

    /// Number of whole nights between check-in and check-out.
    #[must_use]
    pub fn nights(&self) -> u32 {
        let days = (self.check_out - self.check_in).num_days();
        u32::try_from(days).unwrap_or(u32::MAX)
    }
}

/// Parses a single calendar date in `YYYY-MM-DD` form.
///
/// # Errors
///
/// Returns [`Error::InvalidDateRange`] if the text is not a valid date.
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    let trimmed = input.trim();
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT).map_err(|_| Error::InvalidDateRange {
        reason: format!("'{trimmed}' is not a date in YYYY-MM-DD format"),
    })
}

/// A room reservation.
///
/// Night counts are always derived from the stored dates.
///
/// # Examples
///
/// ```
/// use innkeep::{Reservation, ReservationId, RoomNumber, StayDates};
///
/// let room = RoomNumber::try_from(101).unwrap();
/// let reservation = Reservation::builder(ReservationId::new(1), room)
///     .guest("Ada Lovelace", "ada@example.com")
///     .stay(StayDates::parse("2024-01-01", "2024-01-03").unwrap())
///     .build()
///     .unwrap();
///
/// assert_eq!(reservation.nights(), 2);
/// assert_eq!(reservation.guest_name(), "Ada Lovelace");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    id: ReservationId,
    room_number: RoomNumber,
    guest_name: String,
    guest_email: String,
    check_in: NaiveDate,
    check_out: NaiveDate,
    created_at: DateTime<Utc>,
}

impl Reservation {
    /// Creates a new reservation builder.
    #[must_use]
    pub fn builder(id: ReservationId, room_number: RoomNumber) -> ReservationBuilder {
        ReservationBuilder {
            id,
            room_number,
            name: String::new(),
            email: String::new(),
            stay: None,
            created_at: None,
        }
    }

    /// Returns the reservation identifier.
    #[must_use]
    pub const fn id(&self) -> ReservationId {
        self.id
    }

    /// Returns the number of the reserved room.
    #[must_use]
    pub const fn room_number(&self) -> RoomNumber {
        self.room_number
    }

    /// Returns the guest name.
    #[must_use]
    pub fn guest_name(&self) -> &str {
        &self.guest_name
    }

    /// Returns the guest email address.
    #[must_use]
    pub fn guest_email(&self) -> &str {
        &self.guest_email
    }

    /// Returns the check-in date.
    #[must_use]
    pub const fn check_in(&self) -> NaiveDate {
        self.check_in
    }

    /// Returns the check-out date.
    #[must_use]
    pub const fn check_out(&self) -> NaiveDate {
        self.check_out
    }

    /// Returns the stay dates.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDateRange`] if a restored record carries
    /// out-of-order dates.
    pub fn stay(&self) -> Result<StayDates> {
        StayDates::new(self.check_in, self.check_out)
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Number of whole nights, recomputed from the stored dates.
    #[must_use]
    pub fn nights(&self) -> u32 {
        let days = (self.check_out - self.check_in).num_days();
        u32::try_from(days).unwrap_or(0)
    }
}

/// Builder for creating `Reservation` instances.
#[derive(Debug)]
pub struct ReservationBuilder {
    id: ReservationId,
    room_number: RoomNumber,
    name: String,
    email: String,
    stay: Option<StayDates>,
    created_at: Option<DateTime<Utc>>,
}

impl ReservationBuilder {
    /// Sets the guest name and email.
    #[must_use]
    pub fn guest(mut self, name: impl Into<String>, email: impl Into<String>) -> Self {
        self.name = name.into();
        self.email = email.into();
        self
    }

    /// Sets the stay dates.
    #[must_use]
    pub const fn stay(mut self, stay: StayDates) -> Self {
        self.stay = Some(stay);
        self
    }

    /// Sets the creation timestamp (defaults to now).
    #[must_use]
    pub const fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Builds the reservation.
    ///
    /// # Errors
    ///
    /// Returns:
    /// - [`Error::InvalidGuest`] if the name is empty after trimming
    /// - [`Error::InvalidEmail`] if the email is malformed
    /// - [`Error::InvalidDateRange`] if no stay dates were set
    pub fn build(self) -> Result<Reservation> {
        let guest = Guest::new(&self.name, &self.email)?;
        let stay = self.stay.ok_or_else(|| Error::InvalidDateRange {
            reason: "check-in and check-out dates are required".into(),
        })?;

        Ok(Reservation {
            id: self.id,
            room_number: self.room_number,
            guest_name: guest.name,
            guest_email: guest.email,
            check_in: stay.check_in,
            check_out: stay.check_out,
            created_at: self.created_at.unwrap_or_else(Utc::now),
        })
    }
}
