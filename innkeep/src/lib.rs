#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # innkeep
//!
//! A library for booking a small, fixed set of hotel rooms.
//!
//! ## Core Types
//!
//! - [`Inventory`], [`Room`] and [`RoomNumber`]: the rooms and their reserved flags
//! - [`Ledger`] and [`Reservation`]: active bookings and the id counter
//! - [`Hotel`]: owns both and keeps them consistent
//! - [`StateFile`]: JSON persistence
//! - [`Error`] and [`Result`]: error handling types
//! - [`Logger`] and [`LogLevel`]: logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use innkeep::{BookingRequest, Error, Hotel, RoomNumber};
//!
//! let mut hotel = Hotel::new();
//! let room = RoomNumber::try_from(102).unwrap();
//!
//! let booking = hotel
//!     .book(BookingRequest::new(room, "Ada", "ada@example.com", "2024-01-01", "2024-01-04"))
//!     .unwrap();
//! assert_eq!(booking.nights, 3);
//! assert_eq!(booking.total_cost.to_string(), "300.00");
//!
//! // The same room cannot be booked twice.
//! let again = hotel.book(BookingRequest::new(room, "Bob", "bob@example.com", "2024-02-01", "2024-02-02"));
//! assert!(matches!(again, Err(Error::RoomUnavailable { .. })));
//! ```

pub mod config;
pub mod error;
pub mod hotel;
pub mod inventory;
pub mod ledger;
pub mod logging;
pub mod reservation;
pub mod room;
pub mod store;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder, Settings};
pub use error::{Error, Result};
pub use hotel::{Hotel, Snapshot};
pub use inventory::Inventory;
pub use ledger::{Booking, BookingRequest, Cancellation, Ledger};
pub use logging::{init_logger, LogLevel, Logger};
pub use reservation::{Guest, Reservation, ReservationId, StayDates};
pub use room::{Room, RoomCategory, RoomNumber};
pub use store::StateFile;
