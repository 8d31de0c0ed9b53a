//! The hotel aggregate.
//!
//! [`Hotel`] owns one [`Inventory`] and one [`Ledger`] and is the single
//! entry point the CLI talks to. It also converts to and from the
//! persisted [`Snapshot`] form.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::inventory::Inventory;
use crate::ledger::{Booking, BookingRequest, Cancellation, Ledger};
use crate::reservation::{Reservation, ReservationId};
use crate::room::Room;

/// Persisted form of the whole hotel state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Every room with its reserved flag.
    pub rooms: Vec<Room>,
    /// Active reservations in booking order.
    pub reservations: Vec<Reservation>,
    /// The id the next booking will receive.
    pub next_reservation_id: ReservationId,
}

/// Rooms plus reservations, kept mutually consistent.
///
/// # Examples
///
/// ```
/// use innkeep::{BookingRequest, Hotel, RoomNumber};
///
/// let mut hotel = Hotel::new();
/// let room = RoomNumber::try_from(201).unwrap();
/// let booking = hotel
///     .book(BookingRequest::new(room, "Ada", "ada@example.com", "2024-06-01", "2024-06-03"))
///     .unwrap();
///
/// let restored = innkeep::Hotel::from_snapshot(hotel.snapshot()).unwrap();
/// assert_eq!(restored.ledger().get(booking.reservation.id()).unwrap().nights(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Hotel {
    inventory: Inventory,
    ledger: Ledger,
}

impl Hotel {
    /// Creates a hotel with the default rooms and an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a hotel from explicit parts.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CorruptState`] if the reserved flags disagree with
    /// the ledger.
    pub fn from_parts(inventory: Inventory, ledger: Ledger) -> Result<Self> {
        let hotel = Self { inventory, ledger };
        hotel.check_consistency()?;
        Ok(hotel)
    }

    /// Rebuilds a hotel from persisted state.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CorruptState`] if the snapshot breaks any room,
    /// ledger or cross-reference invariant.
    pub fn from_snapshot(snapshot: Snapshot) -> Result<Self> {
        let inventory = Inventory::from_rooms(snapshot.rooms)?;
        let ledger = Ledger::from_parts(snapshot.reservations, snapshot.next_reservation_id)?;
        Self::from_parts(inventory, ledger)
    }

    /// Captures the current state for persistence.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            rooms: self.inventory.rooms().to_vec(),
            reservations: self.ledger.reservations().to_vec(),
            next_reservation_id: self.ledger.next_id(),
        }
    }

    /// Verifies that each room is reserved iff exactly one reservation
    /// references it.
    ///
    /// Reservations whose room is missing from the inventory are tolerated
    /// and only logged.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CorruptState`] describing the first mismatch.
    pub fn check_consistency(&self) -> Result<()> {
        for room in self.inventory.list() {
            let holders = self
                .ledger
                .list()
                .filter(|r| r.room_number() == room.number())
                .count();
            match (room.is_reserved(), holders) {
                (true, 1) | (false, 0) => {}
                (reserved, n) => {
                    return Err(Error::CorruptState {
                        details: format!(
                            "room {} is {} but has {n} reservation(s)",
                            room.number(),
                            if reserved { "reserved" } else { "available" }
                        ),
                    });
                }
            }
        }
        for res in self.ledger.list() {
            if !self.inventory.contains(res.room_number()) {
                log::warn!(
                    "reservation #{} refers to room {} which is not in the inventory",
                    res.id(),
                    res.room_number()
                );
            }
        }
        Ok(())
    }

    /// Books a room. See [`Ledger::book`].
    ///
    /// # Errors
    ///
    /// See [`Ledger::book`].
    pub fn book(&mut self, request: BookingRequest) -> Result<Booking> {
        self.ledger.book(&mut self.inventory, request)
    }

    /// Cancels a reservation. See [`Ledger::cancel`].
    ///
    /// # Errors
    ///
    /// See [`Ledger::cancel`].
    pub fn cancel(&mut self, id: ReservationId) -> Result<Cancellation> {
        self.ledger.cancel(&mut self.inventory, id)
    }

    /// Returns the room inventory.
    #[must_use]
    pub const fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Returns the reservation ledger.
    #[must_use]
    pub const fn ledger(&self) -> &Ledger {
        &self.ledger
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::room::RoomNumber;

    fn book(hotel: &mut Hotel, room: u32) -> Booking {
        hotel
            .book(BookingRequest::new(
                RoomNumber::try_from(room).unwrap(),
                "Ada",
                "ada@example.com",
                "2024-01-01",
                "2024-01-04",
            ))
            .unwrap()
    }

    #[test]
    fn test_snapshot_round_trip() {
        let mut hotel = Hotel::new();
        book(&mut hotel, 101);
        let second = book(&mut hotel, 202);
        book(&mut hotel, 301);
        hotel.cancel(second.reservation.id()).unwrap();

        let snapshot = hotel.snapshot();
        assert_eq!(snapshot.next_reservation_id, ReservationId::new(4));
        assert_eq!(snapshot.reservations.len(), 2);

        let restored = Hotel::from_snapshot(snapshot.clone()).unwrap();
        assert_eq!(restored, hotel);
        assert_eq!(restored.snapshot(), snapshot);
    }

    #[test]
    fn test_from_snapshot_rejects_flag_mismatch() {
        let mut hotel = Hotel::new();
        book(&mut hotel, 101);
        let mut snapshot = hotel.snapshot();
        snapshot.reservations.clear();

        let err = Hotel::from_snapshot(snapshot).unwrap_err();
        assert!(matches!(err, Error::CorruptState { ref details } if details.contains("101")));
    }

    #[test]
    fn test_from_snapshot_rejects_orphan_flag() {
        let hotel = Hotel::new();
        let mut snapshot = hotel.snapshot();
        let mut inventory = Inventory::from_rooms(snapshot.rooms.clone()).unwrap();
        inventory
            .mark_reserved(RoomNumber::try_from(103).unwrap())
            .unwrap();
        snapshot.rooms = inventory.rooms().to_vec();

        assert!(Hotel::from_snapshot(snapshot).is_err());
    }

    #[test]
    fn test_consistency_holds_after_operations() {
        let mut hotel = Hotel::new();
        let first = book(&mut hotel, 102);
        book(&mut hotel, 201);
        hotel.cancel(first.reservation.id()).unwrap();
        book(&mut hotel, 102);
        assert!(hotel.check_consistency().is_ok());
    }

    #[test]
    fn test_from_snapshot_rejects_unusable_counter() {
        let mut snapshot = Hotel::new().snapshot();
        snapshot.next_reservation_id = ReservationId::new(0);
        assert!(matches!(
            Hotel::from_snapshot(snapshot),
            Err(Error::CorruptState { .. })
        ));
    }

    #[test]
    fn test_booking_at_last_id_is_refused() {
        let mut snapshot = Hotel::new().snapshot();
        snapshot.next_reservation_id = ReservationId::new(u64::MAX);
        let mut hotel = Hotel::from_snapshot(snapshot).unwrap();

        let result = hotel.book(BookingRequest::new(
            RoomNumber::try_from(101).unwrap(),
            "Ada",
            "ada@example.com",
            "2024-01-01",
            "2024-01-02",
        ));
        assert!(matches!(result, Err(Error::CorruptState { .. })));
        assert!(hotel.ledger().is_empty());
        assert!(!hotel.inventory().find(RoomNumber::try_from(101).unwrap()).unwrap().is_reserved());
    }
}
