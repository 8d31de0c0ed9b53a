//! List command implementation.
//!
//! This module implements the `list` command, which displays active
//! reservations in various formats (table, JSON, CSV, TSV).

use crate::display::write_reservations;
use crate::error::CliError;
use crate::utils::{format_timestamp, load_settings, open_hotel, GlobalOptions};
use clap::{Args, ValueEnum};
use innkeep::Hotel;
use std::io::Write;

/// Column headers for CSV/TSV output.
const COLUMN_HEADERS: [&str; 9] = [
    "id",
    "room",
    "category",
    "guest_name",
    "guest_email",
    "check_in",
    "check_out",
    "nights",
    "created_at",
];

/// List active reservations.
#[derive(Args)]
pub struct ListCommand {
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

/// Output format for listing commands.
#[derive(Clone, Copy, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable table
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
    /// TSV format (tab-separated values)
    Tsv,
}

impl ListCommand {
    /// Execute the list command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let settings = load_settings(global)?;
        let (_, hotel) = open_hotel(&settings)?;

        match self.format {
            OutputFormat::Table => {
                let stdout = std::io::stdout();
                let mut handle = stdout.lock();
                write_reservations(&mut handle, &hotel)?;
            }
            OutputFormat::Json => format_as_json(&hotel)?,
            OutputFormat::Csv => write_delimited(&COLUMN_HEADERS, records(&hotel), b',')?,
            OutputFormat::Tsv => write_delimited(&COLUMN_HEADERS, records(&hotel), b'\t')?,
        }

        Ok(())
    }
}

/// One row per reservation, in ledger order.
fn records(hotel: &Hotel) -> Vec<Vec<String>> {
    hotel
        .ledger()
        .list()
        .map(|r| {
            vec![
                r.id().to_string(),
                r.room_number().to_string(),
                hotel.inventory().category_label(r.room_number()).to_string(),
                r.guest_name().to_string(),
                r.guest_email().to_string(),
                r.check_in().to_string(),
                r.check_out().to_string(),
                r.nights().to_string(),
                format_timestamp(r.created_at()),
            ]
        })
        .collect()
}

/// Format reservations as JSON.
fn format_as_json(hotel: &Hotel) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    let json_data: Vec<serde_json::Value> = hotel
        .ledger()
        .list()
        .map(|r| {
            serde_json::json!({
                "id": r.id().value(),
                "room": r.room_number().value(),
                "category": hotel.inventory().category_label(r.room_number()),
                "guest_name": r.guest_name(),
                "guest_email": r.guest_email(),
                "check_in": r.check_in().to_string(),
                "check_out": r.check_out().to_string(),
                "nights": r.nights(),
                "created_at": r.created_at().to_rfc3339(),
            })
        })
        .collect();

    serde_json::to_writer_pretty(&mut handle, &json_data)
        .map_err(|e| CliError::Io(std::io::Error::new(std::io::ErrorKind::Other, e)))?;
    writeln!(handle)?;

    Ok(())
}

/// Convert csv::Error to CliError.
fn csv_error(e: csv::Error) -> CliError {
    CliError::Io(std::io::Error::new(std::io::ErrorKind::Other, e))
}

/// Write rows as delimited output (CSV or TSV) to stdout.
pub(crate) fn write_delimited(
    headers: &[&str],
    rows: Vec<Vec<String>>,
    delimiter: u8,
) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let handle = stdout.lock();
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(handle);

    writer.write_record(headers).map_err(csv_error)?;
    for row in rows {
        writer.write_record(&row).map_err(csv_error)?;
    }
    writer.flush()?;

    Ok(())
}
