//! Rooms command implementation.
//!
//! Shows the room inventory, optionally narrowed to free rooms and/or a
//! single category.

use super::list::{write_delimited, OutputFormat};
use crate::display::write_rooms;
use crate::error::CliError;
use crate::utils::{load_settings, open_hotel, GlobalOptions};
use clap::Args;
use innkeep::{Room, RoomCategory};
use std::io::Write;

const COLUMN_HEADERS: [&str; 4] = ["number", "category", "nightly_rate", "reserved"];

/// Show rooms and their availability.
#[derive(Args)]
pub struct RoomsCommand {
    /// Only show rooms without a reservation
    #[arg(long)]
    pub available: bool,

    /// Only show rooms of this category (single, double or suite)
    #[arg(long, value_name = "CATEGORY")]
    pub category: Option<String>,

    /// Output format
    #[arg(
        long,
        value_enum,
        default_value = "table",
        env = "INNKEEP_OUTPUT_FORMAT",
        ignore_case = true
    )]
    pub format: OutputFormat,
}

impl RoomsCommand {
    /// Execute the rooms command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let category = self
            .category
            .as_deref()
            .map(str::parse::<RoomCategory>)
            .transpose()
            .map_err(|e| CliError::InvalidArguments(e.to_string()))?;

        let settings = load_settings(global)?;
        let (_, hotel) = open_hotel(&settings)?;

        let rooms: Vec<&Room> = hotel
            .inventory()
            .list()
            .filter(|r| !self.available || !r.is_reserved())
            .filter(|r| category.map_or(true, |c| r.category() == c))
            .collect();

        match self.format {
            OutputFormat::Table => {
                let stdout = std::io::stdout();
                let mut handle = stdout.lock();
                write_rooms(
                    &mut handle,
                    rooms.iter().copied(),
                    &settings.currency_symbol,
                    "No rooms match.",
                )?;
            }
            OutputFormat::Json => {
                let stdout = std::io::stdout();
                let mut handle = stdout.lock();
                let json_data: Vec<serde_json::Value> = rooms
                    .iter()
                    .map(|r| {
                        serde_json::json!({
                            "number": r.number().value(),
                            "category": r.category().as_str(),
                            "nightly_rate": format!("{:.2}", r.nightly_rate()),
                            "reserved": r.is_reserved(),
                        })
                    })
                    .collect();
                serde_json::to_writer_pretty(&mut handle, &json_data).map_err(|e| {
                    CliError::Io(std::io::Error::new(std::io::ErrorKind::Other, e))
                })?;
                writeln!(handle)?;
            }
            OutputFormat::Csv => write_delimited(&COLUMN_HEADERS, records(&rooms), b',')?,
            OutputFormat::Tsv => write_delimited(&COLUMN_HEADERS, records(&rooms), b'\t')?,
        }

        Ok(())
    }
}

fn records(rooms: &[&Room]) -> Vec<Vec<String>> {
    rooms
        .iter()
        .map(|r| {
            vec![
                r.number().to_string(),
                r.category().to_string(),
                format!("{:.2}", r.nightly_rate()),
                r.is_reserved().to_string(),
            ]
        })
        .collect()
}
