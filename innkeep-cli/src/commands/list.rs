//! List command implementation.
//!
//! This module implements the `list` command, which displays bookings
//! in various formats (table, JSON, CSV, TSV).

use std::io::Write;

use clap::{Args, ValueEnum};
use innkeep::{Booking, Database};

use crate::error::CliError;
use crate::utils::{format_timestamp, open_database, GlobalOptions};

/// Column headers for CSV/TSV output.
const COLUMN_HEADERS: [&str; 9] = [
    "id",
    "room",
    "property",
    "traveler",
    "check_in",
    "check_out",
    "status",
    "total_price",
    "payment_due_at",
];

/// List bookings.
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

    /// Only bookings for this room
    #[arg(long, value_name = "ID")]
    pub room: Option<i64>,

    /// Only bookings in this status (e.g. WAITING_PAYMENT)
    #[arg(long, value_name = "STATUS")]
    pub status: Option<String>,
}

/// Output format for list command.
#[derive(Clone, Copy, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Tab-separated table format (human-readable)
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
        let db = open_database(global)?;

        let mut bookings = match self.room {
            Some(room_id) => Database::list_bookings_for_room(db.connection(), room_id)?,
            None => Database::list_bookings(db.connection())?,
        };

        if let Some(ref status) = self.status {
            let wanted = innkeep::BookingStatus::parse(status)
                .map_err(CliError::InvalidArguments)?;
            bookings.retain(|b| b.status() == wanted);
        }

        match self.format {
            OutputFormat::Table => format_as_table(&bookings)?,
            OutputFormat::Json => format_as_json(&bookings)?,
            OutputFormat::Csv => format_as_delimited(&bookings, b',')?,
            OutputFormat::Tsv => format_as_delimited(&bookings, b'\t')?,
        }

        Ok(())
    }
}

/// Format bookings as a human-readable table.
fn format_as_table(bookings: &[Booking]) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    let header_line = COLUMN_HEADERS
        .iter()
        .map(|s| s.to_uppercase())
        .collect::<Vec<_>>()
        .join("\t");
    writeln!(handle, "{header_line}")?;

    for booking in bookings {
        writeln!(
            handle,
            "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
            booking.id(),
            booking.room_id(),
            booking.property_id(),
            booking.traveler_id(),
            booking.stay().check_in(),
            booking.stay().check_out(),
            booking.status(),
            booking.total_price(),
            format_timestamp(booking.payment_due_at()),
        )?;
    }

    Ok(())
}

/// Format bookings as JSON.
fn format_as_json(bookings: &[Booking]) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    let json_data: Vec<serde_json::Value> = bookings.iter().map(booking_json).collect();

    serde_json::to_writer_pretty(&mut handle, &json_data)
        .map_err(|e| CliError::Io(std::io::Error::other(e)))?;
    writeln!(handle)?;

    Ok(())
}

/// The JSON projection of a booking used by `list` and `show`.
pub fn booking_json(booking: &Booking) -> serde_json::Value {
    serde_json::json!({
        "id": booking.id(),
        "room_id": booking.room_id(),
        "property_id": booking.property_id(),
        "traveler_id": booking.traveler_id(),
        "check_in": booking.stay().check_in().to_string(),
        "check_out": booking.stay().check_out().to_string(),
        "guest_count": booking.guest_count(),
        "total_price": booking.total_price().minor_units(),
        "currency": booking.currency(),
        "status": booking.status().as_str(),
        "payment_due_at": format_timestamp(booking.payment_due_at()),
        "created_at": format_timestamp(booking.created_at()),
        "reminder_sent_at": booking.reminder_sent_at().map(format_timestamp),
    })
}

/// Convert csv::Error to CliError.
fn csv_error(e: csv::Error) -> CliError {
    CliError::Io(std::io::Error::other(e))
}

/// Format bookings as delimited output (CSV or TSV).
fn format_as_delimited(bookings: &[Booking], delimiter: u8) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let handle = stdout.lock();
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(handle);

    writer.write_record(COLUMN_HEADERS).map_err(csv_error)?;

    for booking in bookings {
        writer
            .write_record(&[
                booking.id().to_string(),
                booking.room_id().to_string(),
                booking.property_id().to_string(),
                booking.traveler_id().to_string(),
                booking.stay().check_in().to_string(),
                booking.stay().check_out().to_string(),
                booking.status().to_string(),
                booking.total_price().to_string(),
                format_timestamp(booking.payment_due_at()),
            ])
            .map_err(csv_error)?;
    }

    writer.flush()?;

    Ok(())
}
