//! Cancel command implementation.

use crate::error::CliError;
use crate::utils::{load_settings, open_hotel, save_hotel, GlobalOptions};
use clap::Args;
use innkeep::ReservationId;

/// Cancel a reservation and free its room.
#[derive(Args)]
pub struct CancelCommand {
    /// Reservation id (as printed by `book` or `list`)
    #[arg(value_name = "ID")]
    pub id: ReservationId,
}

impl CancelCommand {
    /// Execute the cancel command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let settings = load_settings(global)?;
        let (file, mut hotel) = open_hotel(&settings)?;

        let cancellation = hotel.cancel(self.id)?;
        save_hotel(&file, &hotel)?;

        if !global.quiet {
            eprintln!("Reservation #{} cancelled successfully", self.id);
            if !cancellation.room_released {
                eprintln!(
                    "Warning: room {} is no longer in the inventory",
                    cancellation.reservation.room_number()
                );
            }
        }

        Ok(())
    }
}
