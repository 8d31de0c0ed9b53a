//! The reservation ledger.
//!
//! The [`Ledger`] owns the active reservations in booking order together
//! with the counter that hands out reservation identifiers. Booking and
//! cancellation take the [`Inventory`] by mutable reference and keep the
//! room flags in step with the ledger.
//!
//! Every check runs before the first mutation, so a rejected booking leaves
//! both the ledger and the inventory exactly as they were.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;

use crate::error::{Error, Result};
use crate::inventory::Inventory;
use crate::reservation::{Guest, Reservation, ReservationId, StayDates};
use crate::room::RoomNumber;

/// Operator input for a new booking.
///
/// Dates are kept as text so that parsing failures surface as
/// [`Error::InvalidDateRange`] from [`Ledger::book`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingRequest {
    /// The room to reserve.
    pub room_number: RoomNumber,
    /// Guest name (trimmed; must be non-empty).
    pub guest_name: String,
    /// Guest email address.
    pub guest_email: String,
    /// Check-in date, `YYYY-MM-DD`.
    pub check_in: String,
    /// Check-out date, `YYYY-MM-DD`.
    pub check_out: String,
}

impl BookingRequest {
    /// Convenience constructor.
    pub fn new(
        room_number: RoomNumber,
        guest_name: impl Into<String>,
        guest_email: impl Into<String>,
        check_in: impl Into<String>,
        check_out: impl Into<String>,
    ) -> Self {
        Self {
            room_number,
            guest_name: guest_name.into(),
            guest_email: guest_email.into(),
            check_in: check_in.into(),
            check_out: check_out.into(),
        }
    }

    /// Builds a request from already-parsed dates.
    pub fn with_dates(
        room_number: RoomNumber,
        guest_name: impl Into<String>,
        guest_email: impl Into<String>,
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> Self {
        Self::new(
            room_number,
            guest_name,
            guest_email,
            check_in.format(crate::reservation::DATE_FORMAT).to_string(),
            check_out.format(crate::reservation::DATE_FORMAT).to_string(),
        )
    }
}

/// A successful booking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Booking {
    /// The reservation that was recorded.
    pub reservation: Reservation,
    /// Whole nights in the stay.
    pub nights: u32,
    /// `nights × nightly rate`.
    pub total_cost: Decimal,
}

/// A successful cancellation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cancellation {
    /// The reservation that was removed.
    pub reservation: Reservation,
    /// `false` when the reserved room was no longer in the inventory.
    pub room_released: bool,
}

/// Ordered collection of active reservations plus the id counter.
///
/// # Examples
///
/// ```
/// use innkeep::{BookingRequest, Inventory, Ledger, RoomNumber};
///
/// let mut inventory = Inventory::with_default_rooms();
/// let mut ledger = Ledger::new();
/// let room = RoomNumber::try_from(102).unwrap();
///
/// let booking = ledger
///     .book(
///         &mut inventory,
///         BookingRequest::new(room, "Ada", "ada@example.com", "2024-01-01", "2024-01-04"),
///     )
///     .unwrap();
/// assert_eq!(booking.nights, 3);
/// assert_eq!(booking.total_cost.to_string(), "300.00");
///
/// ledger.cancel(&mut inventory, booking.reservation.id()).unwrap();
/// assert!(!inventory.find(room).unwrap().is_reserved());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ledger {
    reservations: Vec<Reservation>,
    next_id: ReservationId,
}

impl Ledger {
    /// Creates an empty ledger whose first booking receives id 1.
    #[must_use]
    pub fn new() -> Self {
        Self {
            reservations: Vec::new(),
            next_id: ReservationId::FIRST,
        }
    }

    /// Restores a ledger from persisted parts.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CorruptState`] if the counter or an id is zero, ids
    /// repeat, the counter is not above every id, a stay is out of order, a
    /// guest name or email would be rejected by [`Ledger::book`], or two
    /// reservations hold the same room.
    pub fn from_parts(reservations: Vec<Reservation>, next_id: ReservationId) -> Result<Self> {
        if next_id.value() == 0 {
            return Err(Error::CorruptState {
                details: "next reservation id must be positive".into(),
            });
        }
        for (idx, res) in reservations.iter().enumerate() {
            if res.id().value() == 0 {
                return Err(Error::CorruptState {
                    details: "reservation id 0 is not allowed".into(),
                });
            }
            if res.id() >= next_id {
                return Err(Error::CorruptState {
                    details: format!(
                        "reservation #{} is not below the next id #{next_id}",
                        res.id()
                    ),
                });
            }
            if res.stay().is_err() {
                return Err(Error::CorruptState {
                    details: format!("reservation #{} checks out before it checks in", res.id()),
                });
            }
            if let Err(e) = Guest::new(res.guest_name(), res.guest_email()) {
                return Err(Error::CorruptState {
                    details: format!("reservation #{}: {e}", res.id()),
                });
            }
            let earlier = &reservations[..idx];
            if earlier.iter().any(|r| r.id() == res.id()) {
                return Err(Error::CorruptState {
                    details: format!("reservation #{} appears more than once", res.id()),
                });
            }
            if earlier.iter().any(|r| r.room_number() == res.room_number()) {
                return Err(Error::CorruptState {
                    details: format!("room {} holds more than one reservation", res.room_number()),
                });
            }
        }
        Ok(Self {
            reservations,
            next_id,
        })
    }

    /// Books a room.
    ///
    /// Checks, in order: the room exists, the room is free, the guest name
    /// is non-empty, the email is well formed, both dates parse and
    /// check-out is after check-in. Only then is an id assigned, the room
    /// flagged and the reservation appended.
    ///
    /// # Errors
    ///
    /// [`Error::RoomNotFound`], [`Error::RoomUnavailable`],
    /// [`Error::InvalidGuest`], [`Error::InvalidEmail`] or
    /// [`Error::InvalidDateRange`]; [`Error::CorruptState`] if the id
    /// counter cannot advance. State is unchanged on error.
    pub fn book(&mut self, inventory: &mut Inventory, request: BookingRequest) -> Result<Booking> {
        self.book_at(inventory, request, Utc::now())
    }

    /// Same as [`Ledger::book`] with an explicit creation timestamp.
    ///
    /// # Errors
    ///
    /// See [`Ledger::book`].
    pub fn book_at(
        &mut self,
        inventory: &mut Inventory,
        request: BookingRequest,
        created_at: DateTime<Utc>,
    ) -> Result<Booking> {
        let room = inventory.find(request.room_number)?;
        if room.is_reserved() {
            return Err(Error::RoomUnavailable {
                number: request.room_number,
            });
        }
        let rate = room.nightly_rate();

        // Guest checks come before date parsing so errors follow prompt order.
        Guest::new(&request.guest_name, &request.guest_email)?;
        let stay = StayDates::parse(&request.check_in, &request.check_out)?;
        let following = self.next_id.next().ok_or_else(|| Error::CorruptState {
            details: format!("reservation id #{} is the last one available", self.next_id),
        })?;

        let reservation = Reservation::builder(self.next_id, request.room_number)
            .guest(request.guest_name, request.guest_email)
            .stay(stay)
            .created_at(created_at)
            .build()?;
        let nights = reservation.nights();
        let total_cost = rate * Decimal::from(nights);

        inventory.mark_reserved(request.room_number)?;
        self.next_id = following;
        self.reservations.push(reservation.clone());

        log::info!(
            "booked room {} as reservation #{} ({nights} night(s), {total_cost})",
            reservation.room_number(),
            reservation.id()
        );

        Ok(Booking {
            reservation,
            nights,
            total_cost,
        })
    }

    /// Cancels a reservation by id and frees its room.
    ///
    /// A reservation whose room is missing from the inventory is still
    /// removed; the outcome reports `room_released == false`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ReservationNotFound`] if no reservation has that id.
    pub fn cancel(&mut self, inventory: &mut Inventory, id: ReservationId) -> Result<Cancellation> {
        let idx = self
            .reservations
            .iter()
            .position(|r| r.id() == id)
            .ok_or(Error::ReservationNotFound { id })?;
        let reservation = self.reservations.remove(idx);

        let room_released = match inventory.mark_available(reservation.room_number()) {
            Ok(()) => true,
            Err(e) => {
                log::warn!("reservation #{id} cancelled but its room could not be freed: {e}");
                false
            }
        };

        log::info!("cancelled reservation #{id} for room {}", reservation.room_number());

        Ok(Cancellation {
            reservation,
            room_released,
        })
    }

    /// Returns the active reservations in booking order.
    pub fn list(&self) -> impl Iterator<Item = &Reservation> + Clone + '_ {
        self.reservations.iter()
    }

    /// Looks up a reservation by id.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ReservationNotFound`] if no reservation has that id.
    pub fn get(&self, id: ReservationId) -> Result<&Reservation> {
        self.reservations
            .iter()
            .find(|r| r.id() == id)
            .ok_or(Error::ReservationNotFound { id })
    }

    /// Returns the reservation holding a room, if any.
    #[must_use]
    pub fn find_by_room(&self, number: RoomNumber) -> Option<&Reservation> {
        self.reservations.iter().find(|r| r.room_number() == number)
    }

    /// Returns the id the next booking will receive.
    #[must_use]
    pub const fn next_id(&self) -> ReservationId {
        self.next_id
    }

    /// Number of active reservations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.reservations.len()
    }

    /// Returns `true` if there are no active reservations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.reservations.is_empty()
    }

    /// Returns the reservations as a slice, for snapshots.
    #[must_use]
    pub fn reservations(&self) -> &[Reservation] {
        &self.reservations
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod proptests;
