//! The room inventory.
//!
//! [`Inventory`] owns every room and its reserved flag. The room count is
//! small and fixed, so lookups are linear scans over the stored list; all
//! mutation goes through the room number and touches the stored room, never
//! a copy.

use rust_decimal::Decimal;

use crate::error::{Error, Result};
use crate::room::{Room, RoomCategory, RoomNumber};

/// Label shown for a room number that is not in the inventory.
pub const UNKNOWN_CATEGORY: &str = "Unknown";

/// Seed list used on first run: (number, category, rate in cents).
const DEFAULT_ROOMS: [(u32, RoomCategory, i64); 6] = [
    (101, RoomCategory::Single, 8000),
    (102, RoomCategory::Double, 10000),
    (201, RoomCategory::Suite, 28000),
    (103, RoomCategory::Single, 9000),
    (202, RoomCategory::Double, 13000),
    (301, RoomCategory::Suite, 28900),
];

/// The set of rooms and their reservation status.
///
/// # Examples
///
/// ```
/// use innkeep::{Inventory, RoomNumber};
///
/// let mut inventory = Inventory::with_default_rooms();
/// assert_eq!(inventory.list().count(), 6);
///
/// let room = RoomNumber::try_from(101).unwrap();
/// inventory.mark_reserved(room).unwrap();
/// assert!(inventory.find(room).unwrap().is_reserved());
/// assert_eq!(inventory.available().count(), 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inventory {
    rooms: Vec<Room>,
}

impl Inventory {
    /// Creates the inventory with the built-in seed list of six rooms.
    #[must_use]
    pub fn with_default_rooms() -> Self {
        let rooms = DEFAULT_ROOMS
            .iter()
            .filter_map(|&(number, category, cents)| {
                let number = RoomNumber::try_from(number).ok()?;
                Room::new(number, category, Decimal::new(cents, 2)).ok()
            })
            .collect();
        Self { rooms }
    }

    /// Creates an inventory from restored rooms, keeping their order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CorruptState`] if two rooms share a number or a
    /// rate is negative.
    pub fn from_rooms(rooms: Vec<Room>) -> Result<Self> {
        for (idx, room) in rooms.iter().enumerate() {
            if rooms[..idx].iter().any(|r| r.number() == room.number()) {
                return Err(Error::CorruptState {
                    details: format!("room {} appears more than once", room.number()),
                });
            }
            if room.nightly_rate() < Decimal::ZERO {
                return Err(Error::CorruptState {
                    details: format!("room {} has a negative rate", room.number()),
                });
            }
        }
        Ok(Self { rooms })
    }

    /// Returns every room in inventory order.
    pub fn list(&self) -> impl Iterator<Item = &Room> + Clone + '_ {
        self.rooms.iter()
    }

    /// Returns the rooms that do not hold a reservation.
    pub fn available(&self) -> impl Iterator<Item = &Room> + Clone + '_ {
        self.rooms.iter().filter(|r| !r.is_reserved())
    }

    /// Returns the unreserved rooms of one category.
    pub fn available_in(&self, category: RoomCategory) -> impl Iterator<Item = &Room> + Clone + '_ {
        self.available().filter(move |r| r.category() == category)
    }

    /// Looks up a room by number.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RoomNotFound`] if no room carries that number.
    pub fn find(&self, number: RoomNumber) -> Result<&Room> {
        self.rooms
            .iter()
            .find(|r| r.number() == number)
            .ok_or(Error::RoomNotFound { number })
    }

    /// Returns `true` if a room with that number exists.
    #[must_use]
    pub fn contains(&self, number: RoomNumber) -> bool {
        self.find(number).is_ok()
    }

    /// Category name of a room, or [`UNKNOWN_CATEGORY`] if it is absent.
    #[must_use]
    pub fn category_label(&self, number: RoomNumber) -> &'static str {
        self.find(number)
            .map_or(UNKNOWN_CATEGORY, |r| r.category().as_str())
    }

    /// Flags a room as reserved. Setting an already-set flag is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RoomNotFound`] if no room carries that number.
    pub fn mark_reserved(&mut self, number: RoomNumber) -> Result<()> {
        self.set_reserved(number, true)
    }

    /// Flags a room as available. Clearing an already-clear flag is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RoomNotFound`] if no room carries that number.
    pub fn mark_available(&mut self, number: RoomNumber) -> Result<()> {
        self.set_reserved(number, false)
    }

    fn set_reserved(&mut self, number: RoomNumber, reserved: bool) -> Result<()> {
        let room = self
            .rooms
            .iter_mut()
            .find(|r| r.number() == number)
            .ok_or(Error::RoomNotFound { number })?;
        room.set_reserved(reserved);
        Ok(())
    }

    /// Returns the rooms as a slice, for snapshots.
    #[must_use]
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }
}

impl Default for Inventory {
    fn default() -> Self {
        Self::with_default_rooms()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn num(n: u32) -> RoomNumber {
        RoomNumber::try_from(n).unwrap()
    }

    #[test]
    fn test_default_rooms() {
        let inventory = Inventory::with_default_rooms();
        let numbers: Vec<u32> = inventory.list().map(|r| r.number().value()).collect();
        assert_eq!(numbers, vec![101, 102, 201, 103, 202, 301]);
        assert!(inventory.list().all(|r| !r.is_reserved()));

        let suite = inventory.find(num(301)).unwrap();
        assert_eq!(suite.category(), RoomCategory::Suite);
        assert_eq!(suite.nightly_rate(), Decimal::new(28900, 2));
    }

    #[test]
    fn test_list_is_restartable() {
        let inventory = Inventory::with_default_rooms();
        let rooms = inventory.list();
        assert_eq!(rooms.clone().count(), 6);
        assert_eq!(rooms.count(), 6);
    }

    #[test]
    fn test_find_unknown_room() {
        let inventory = Inventory::with_default_rooms();
        assert!(matches!(
            inventory.find(num(999)),
            Err(Error::RoomNotFound { number }) if number.value() == 999
        ));
        assert!(!inventory.contains(num(999)));
    }

    #[test]
    fn test_mark_reserved_mutates_stored_room() {
        let mut inventory = Inventory::with_default_rooms();
        inventory.mark_reserved(num(202)).unwrap();
        assert!(inventory.find(num(202)).unwrap().is_reserved());
        assert!(!inventory.find(num(102)).unwrap().is_reserved());
    }

    #[test]
    fn test_mark_flags_are_idempotent() {
        let mut inventory = Inventory::with_default_rooms();
        inventory.mark_reserved(num(101)).unwrap();
        inventory.mark_reserved(num(101)).unwrap();
        assert!(inventory.find(num(101)).unwrap().is_reserved());

        inventory.mark_available(num(101)).unwrap();
        inventory.mark_available(num(101)).unwrap();
        assert!(!inventory.find(num(101)).unwrap().is_reserved());
    }

    #[test]
    fn test_mark_unknown_room_fails() {
        let mut inventory = Inventory::with_default_rooms();
        assert!(inventory.mark_reserved(num(404)).is_err());
        assert!(inventory.mark_available(num(404)).is_err());
    }

    #[test]
    fn test_available_in_category() {
        let mut inventory = Inventory::with_default_rooms();
        inventory.mark_reserved(num(101)).unwrap();

        let singles: Vec<u32> = inventory
            .available_in(RoomCategory::Single)
            .map(|r| r.number().value())
            .collect();
        assert_eq!(singles, vec![103]);
        assert_eq!(inventory.available_in(RoomCategory::Suite).count(), 2);
    }

    #[test]
    fn test_category_label() {
        let inventory = Inventory::with_default_rooms();
        assert_eq!(inventory.category_label(num(102)), "Double");
        assert_eq!(inventory.category_label(num(999)), UNKNOWN_CATEGORY);
    }

    #[test]
    fn test_from_rooms_rejects_duplicates() {
        let room = Room::new(num(101), RoomCategory::Single, Decimal::new(8000, 2)).unwrap();
        let err = Inventory::from_rooms(vec![room.clone(), room]).unwrap_err();
        assert!(matches!(err, Error::CorruptState { .. }));
    }
}
