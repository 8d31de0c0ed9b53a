//! Human-readable rendering of rooms, reservations and bookings.
//!
//! Shared by the interactive menu and the one-shot commands.

use crate::utils::format_money;
use innkeep::{Booking, Hotel, Room};
use std::io::{self, Write};

const RULE: &str = "--------------------------------------------------------------";

/// Write one line per room, or a notice when there are none.
pub fn write_rooms<'a, W: Write>(
    out: &mut W,
    rooms: impl IntoIterator<Item = &'a Room>,
    symbol: &str,
    empty_notice: &str,
) -> io::Result<()> {
    writeln!(out, "{RULE}")?;
    let mut any = false;
    for room in rooms {
        any = true;
        writeln!(
            out,
            "Room {} | Type: {:<8} | Price: {}/night{}",
            room.number(),
            room.category(),
            format_money(symbol, room.nightly_rate()),
            if room.is_reserved() { " | reserved" } else { "" }
        )?;
    }
    if !any {
        writeln!(out, "{empty_notice}")?;
    }
    writeln!(out, "{RULE}")
}

/// Write every active reservation with its room category and night count.
pub fn write_reservations<W: Write>(out: &mut W, hotel: &Hotel) -> io::Result<()> {
    if hotel.ledger().is_empty() {
        return writeln!(out, "No reservations found.");
    }

    writeln!(out, "{RULE}")?;
    for res in hotel.ledger().list() {
        writeln!(
            out,
            "ID: #{:<3} | Room: {:<3} ({:<8}) | Guest: {}",
            res.id(),
            res.room_number(),
            hotel.inventory().category_label(res.room_number()),
            res.guest_name()
        )?;
        writeln!(
            out,
            "         Email: {} | Stay: {} to {} ({} night(s))",
            res.guest_email(),
            res.check_in(),
            res.check_out(),
            res.nights()
        )?;
        writeln!(out, "{RULE}")?;
    }
    Ok(())
}

/// Write the confirmation for a successful booking.
pub fn write_booking<W: Write>(
    out: &mut W,
    booking: &Booking,
    category: &str,
    symbol: &str,
) -> io::Result<()> {
    let res = &booking.reservation;
    writeln!(out, "Reservation successful!")?;
    writeln!(out, "{RULE}")?;
    writeln!(out, "Reservation ID : #{}", res.id())?;
    writeln!(out, "Guest          : {} ({})", res.guest_name(), res.guest_email())?;
    writeln!(out, "Room           : {} ({category})", res.room_number())?;
    writeln!(out, "Check-in       : {}", res.check_in())?;
    writeln!(out, "Check-out      : {}", res.check_out())?;
    writeln!(out, "Duration       : {} night(s)", booking.nights)?;
    writeln!(out, "Total cost     : {}", format_money(symbol, booking.total_cost))?;
    writeln!(out, "{RULE}")
}
