//! Interactive menu implementation.
//!
//! The menu is the default command. It reads one choice per line, runs the
//! matching action and always returns to the top-level menu; rejected
//! bookings and cancellations are reported and leave the hotel unchanged.

use crate::display::{write_booking, write_reservations, write_rooms};
use crate::error::CliError;
use crate::utils::{load_settings, open_hotel, GlobalOptions};
use clap::Args;
use innkeep::{BookingRequest, Hotel, ReservationId, RoomCategory, RoomNumber, StateFile};
use std::io::{self, BufRead, Write};

const BANNER: &str = "======================================================";
const MENU_RULE: &str = "--------------------------------------";

/// Run the interactive booking menu (the default)
#[derive(Args)]
pub struct MenuCommand {}

impl MenuCommand {
    /// Execute the menu command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let settings = load_settings(global)?;
        let (file, hotel) = open_hotel(&settings)?;

        let stdin = io::stdin();
        let stdout = io::stdout();
        let mut menu = Menu::new(hotel, file, stdin.lock(), stdout.lock())
            .with_autosave(settings.autosave)
            .with_currency_symbol(settings.currency_symbol);
        menu.run()
    }
}

/// One entry of the top-level menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// List unreserved rooms.
    ViewAvailable,
    /// Book a room.
    MakeReservation,
    /// List active reservations.
    ViewReservations,
    /// Cancel a reservation by id.
    CancelReservation,
    /// List unreserved rooms of one category.
    SearchByCategory,
    /// Write the state file now.
    Save,
    /// Save and leave.
    Exit,
}

impl MenuChoice {
    /// Maps the operator's input to a choice, or `None` if it is not 1-7.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::ViewAvailable),
            "2" => Some(Self::MakeReservation),
            "3" => Some(Self::ViewReservations),
            "4" => Some(Self::CancelReservation),
            "5" => Some(Self::SearchByCategory),
            "6" => Some(Self::Save),
            "7" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// What the loop does after an action.
enum Flow {
    Continue,
    /// Input ended in the middle of an action.
    EndOfInput,
}

/// The interactive session over any reader and writer.
pub struct Menu<R, W> {
    hotel: Hotel,
    file: StateFile,
    autosave: bool,
    currency_symbol: String,
    input: R,
    out: W,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    /// Creates a session with autosave on and `$` as currency symbol.
    pub fn new(hotel: Hotel, file: StateFile, input: R, out: W) -> Self {
        Self {
            hotel,
            file,
            autosave: true,
            currency_symbol: innkeep::config::DEFAULT_CURRENCY_SYMBOL.to_string(),
            input,
            out,
        }
    }

    /// Saves after every successful booking or cancellation when `true`.
    #[must_use]
    pub fn with_autosave(mut self, autosave: bool) -> Self {
        self.autosave = autosave;
        self
    }

    /// Sets the symbol printed in front of prices.
    #[must_use]
    pub fn with_currency_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.currency_symbol = symbol.into();
        self
    }

    /// The hotel as the session currently sees it.
    pub fn hotel(&self) -> &Hotel {
        &self.hotel
    }

    /// The output sink.
    pub fn output(&self) -> &W {
        &self.out
    }

    /// Runs until the operator exits or input ends, then saves.
    ///
    /// Only terminal I/O failures and the final save abort the loop.
    pub fn run(&mut self) -> Result<(), CliError> {
        writeln!(self.out, "{BANNER}")?;
        writeln!(self.out, "      Welcome to the Hotel Reservation System")?;
        writeln!(self.out, "{BANNER}")?;

        loop {
            self.print_menu()?;
            let Some(line) = self.prompt("Select an option (1-7): ")? else {
                break;
            };

            let flow = match MenuChoice::parse(&line) {
                Some(MenuChoice::Exit) => break,
                Some(choice) => self.dispatch(choice)?,
                None => {
                    writeln!(self.out, "Invalid option selected. Please select 1-7.")?;
                    Flow::Continue
                }
            };
            if let Flow::EndOfInput = flow {
                break;
            }
            writeln!(self.out)?;
        }

        let saved = self.file.save_hotel(&self.hotel);
        writeln!(self.out)?;
        match &saved {
            Ok(()) => log::info!("saved state to {}", self.file.path().display()),
            Err(e) => writeln!(self.out, "Error: changes could not be saved: {e}")?,
        }
        writeln!(self.out, "Thank you for using our system. Goodbye...")?;
        saved.map_err(CliError::from)
    }

    fn print_menu(&mut self) -> io::Result<()> {
        writeln!(self.out, "{MENU_RULE}")?;
        writeln!(self.out, "|      MAIN MENU                     |")?;
        writeln!(self.out, "{MENU_RULE}")?;
        writeln!(self.out, "1. View Available Rooms")?;
        writeln!(self.out, "2. Make Reservation")?;
        writeln!(self.out, "3. View Reservations")?;
        writeln!(self.out, "4. Cancel Reservation")?;
        writeln!(self.out, "5. Search Rooms by Category")?;
        writeln!(self.out, "6. Save")?;
        writeln!(self.out, "7. Exit")?;
        writeln!(self.out, "{MENU_RULE}")
    }

    fn dispatch(&mut self, choice: MenuChoice) -> io::Result<Flow> {
        match choice {
            MenuChoice::ViewAvailable => {
                writeln!(self.out, "Available Rooms:")?;
                write_rooms(
                    &mut self.out,
                    self.hotel.inventory().available(),
                    &self.currency_symbol,
                    "No rooms currently available.",
                )?;
                Ok(Flow::Continue)
            }
            MenuChoice::MakeReservation => self.make_reservation(),
            MenuChoice::ViewReservations => {
                write_reservations(&mut self.out, &self.hotel)?;
                Ok(Flow::Continue)
            }
            MenuChoice::CancelReservation => self.cancel_reservation(),
            MenuChoice::SearchByCategory => self.search_by_category(),
            MenuChoice::Save => {
                match self.file.save_hotel(&self.hotel) {
                    Ok(()) => writeln!(self.out, "Saved to {}", self.file.path().display())?,
                    Err(e) => writeln!(self.out, "Error: {e}")?,
                }
                Ok(Flow::Continue)
            }
            MenuChoice::Exit => Ok(Flow::Continue),
        }
    }

    fn make_reservation(&mut self) -> io::Result<Flow> {
        let Some(room_text) = self.prompt("Enter room number: ")? else {
            return Ok(Flow::EndOfInput);
        };
        let room = match room_text.parse::<RoomNumber>() {
            Ok(room) => room,
            Err(_) => {
                writeln!(self.out, "Invalid room number. Please enter a valid number.")?;
                return Ok(Flow::Continue);
            }
        };

        // Reject early so the operator is not asked for details in vain.
        match self.hotel.inventory().find(room) {
            Ok(r) if r.is_reserved() => {
                writeln!(self.out, "Error: room {room} is already reserved")?;
                return Ok(Flow::Continue);
            }
            Ok(_) => {}
            Err(e) => {
                writeln!(self.out, "Error: {e}")?;
                return Ok(Flow::Continue);
            }
        }

        let Some(name) = self.prompt("Enter guest name: ")? else {
            return Ok(Flow::EndOfInput);
        };
        let Some(email) = self.prompt("Enter guest email: ")? else {
            return Ok(Flow::EndOfInput);
        };
        let Some(check_in) = self.prompt("Enter check-in date (YYYY-MM-DD): ")? else {
            return Ok(Flow::EndOfInput);
        };
        let Some(check_out) = self.prompt("Enter check-out date (YYYY-MM-DD): ")? else {
            return Ok(Flow::EndOfInput);
        };

        let request = BookingRequest::new(room, name, email, check_in, check_out);
        match self.hotel.book(request) {
            Ok(booking) => {
                let category = self
                    .hotel
                    .inventory()
                    .category_label(booking.reservation.room_number());
                writeln!(self.out)?;
                write_booking(&mut self.out, &booking, category, &self.currency_symbol)?;
                self.autosave()?;
            }
            Err(e) => writeln!(self.out, "Error: {e}")?,
        }
        Ok(Flow::Continue)
    }

    fn cancel_reservation(&mut self) -> io::Result<Flow> {
        if self.hotel.ledger().is_empty() {
            writeln!(self.out, "No reservations to cancel.")?;
            return Ok(Flow::Continue);
        }

        let Some(id_text) = self.prompt("Enter reservation ID to cancel: ")? else {
            return Ok(Flow::EndOfInput);
        };
        let Ok(id) = id_text.parse::<ReservationId>() else {
            writeln!(self.out, "Invalid reservation ID.")?;
            return Ok(Flow::Continue);
        };

        match self.hotel.cancel(id) {
            Ok(cancellation) => {
                writeln!(self.out, "Reservation #{id} cancelled successfully.")?;
                if !cancellation.room_released {
                    writeln!(
                        self.out,
                        "Warning: room {} is no longer in the inventory",
                        cancellation.reservation.room_number()
                    )?;
                }
                self.autosave()?;
            }
            Err(e) => writeln!(self.out, "Error: {e}")?,
        }
        Ok(Flow::Continue)
    }

    fn search_by_category(&mut self) -> io::Result<Flow> {
        writeln!(self.out, "Room categories: Single, Double, Suite")?;
        let Some(text) = self.prompt("Enter room category: ")? else {
            return Ok(Flow::EndOfInput);
        };
        let category = match text.parse::<RoomCategory>() {
            Ok(category) => category,
            Err(e) => {
                writeln!(self.out, "Error: {e}")?;
                return Ok(Flow::Continue);
            }
        };

        writeln!(self.out, "Available {category} Rooms:")?;
        write_rooms(
            &mut self.out,
            self.hotel.inventory().available_in(category),
            &self.currency_symbol,
            &format!("No available {category} rooms found."),
        )?;
        Ok(Flow::Continue)
    }

    /// Saves if autosave is on. A failed save is reported, not fatal.
    fn autosave(&mut self) -> io::Result<()> {
        if !self.autosave {
            return Ok(());
        }
        if let Err(e) = self.file.save_hotel(&self.hotel) {
            log::warn!("autosave failed: {e}");
            writeln!(self.out, "Warning: changes not saved: {e}")?;
        }
        Ok(())
    }

    /// Prints `text` and reads one trimmed line; `None` at end of input.
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.out, "{text}")?;
        self.out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}
