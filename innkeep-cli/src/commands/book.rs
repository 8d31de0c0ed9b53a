//! Book command implementation.
//!
//! Books a room in one shot and prints the new reservation id to stdout.

use crate::display::write_booking;
use crate::error::CliError;
use crate::utils::{load_settings, open_hotel, save_hotel, GlobalOptions};
use clap::Args;
use innkeep::{BookingRequest, RoomNumber};

/// Reserve a room for a guest.
#[derive(Args)]
pub struct BookCommand {
    /// Room number
    #[arg(long, value_name = "NUMBER")]
    pub room: RoomNumber,

    /// Guest name
    #[arg(long, value_name = "NAME")]
    pub name: String,

    /// Guest email address
    #[arg(long, value_name = "EMAIL")]
    pub email: String,

    /// Check-in date
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub check_in: String,

    /// Check-out date (after check-in)
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub check_out: String,
}

impl BookCommand {
    /// Execute the book command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let settings = load_settings(global)?;
        let (file, mut hotel) = open_hotel(&settings)?;

        let request = BookingRequest::new(
            self.room,
            self.name,
            self.email,
            self.check_in,
            self.check_out,
        );
        let booking = hotel.book(request)?;
        save_hotel(&file, &hotel)?;

        println!("{}", booking.reservation.id());

        if !global.quiet {
            let category = hotel
                .inventory()
                .category_label(booking.reservation.room_number());
            let stderr = std::io::stderr();
            let mut handle = stderr.lock();
            write_booking(&mut handle, &booking, category, &settings.currency_symbol)?;
        }

        Ok(())
    }
}
