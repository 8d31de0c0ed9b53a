//! Common test utilities for integration tests.
//!
//! This module provides fixture builders for booking requests and a helper
//! for temporary state files.

use std::path::PathBuf;

use innkeep::{BookingRequest, RoomNumber, StateFile};

/// Creates a state file handle inside a fresh temporary directory.
///
/// The directory is returned alongside the handle and is removed when
/// dropped.
#[allow(dead_code)]
pub fn temp_state_file() -> (tempfile::TempDir, StateFile) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path: PathBuf = dir.path().join("hotel_data.json");
    (dir, StateFile::new(path))
}

/// Builder for booking requests with sensible defaults.
///
/// Defaults:
/// - room: 101
/// - guest: "Test Guest" <guest@example.com>
/// - stay: 2024-01-01 to 2024-01-02
#[allow(dead_code)]
pub struct BookingFixture {
    room: u32,
    name: String,
    email: String,
    check_in: String,
    check_out: String,
}

#[allow(dead_code)]
impl BookingFixture {
    /// Creates a new fixture builder with default values.
    pub fn new() -> Self {
        Self {
            room: 101,
            name: "Test Guest".to_string(),
            email: "guest@example.com".to_string(),
            check_in: "2024-01-01".to_string(),
            check_out: "2024-01-02".to_string(),
        }
    }

    /// Sets the room number.
    pub fn room(mut self, room: u32) -> Self {
        self.room = room;
        self
    }

    /// Sets the guest name.
    pub fn name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    /// Sets the guest email.
    pub fn email(mut self, email: &str) -> Self {
        self.email = email.to_string();
        self
    }

    /// Sets both stay dates.
    pub fn stay(mut self, check_in: &str, check_out: &str) -> Self {
        self.check_in = check_in.to_string();
        self.check_out = check_out.to_string();
        self
    }

    /// Builds the request.
    ///
    /// # Panics
    /// Panics if the room number is zero.
    pub fn build(self) -> BookingRequest {
        BookingRequest::new(
            RoomNumber::try_from(self.room).expect("room number must be positive"),
            self.name,
            self.email,
            self.check_in,
            self.check_out,
        )
    }
}

impl Default for BookingFixture {
    fn default() -> Self {
        Self::new()
    }
}
