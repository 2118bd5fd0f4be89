//! Book command implementation.

use clap::Args;
use innkeep::workflow::{create_booking, CreateRequest};
use innkeep::StayRange;

use crate::error::CliError;
use crate::utils::{format_timestamp, load_configuration, open_database, parse_date, GlobalOptions};

/// Create a booking.
#[derive(Args)]
pub struct BookCommand {
    /// Acting traveler's identifier
    #[arg(long, value_name = "ID")]
    traveler: i64,

    /// The property the room belongs to
    #[arg(long, value_name = "ID")]
    property: i64,

    /// The room to book
    #[arg(long, value_name = "ID")]
    room: i64,

    /// Check-in date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    check_in: String,

    /// Check-out date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    check_out: String,

    /// Number of guests
    #[arg(long, value_name = "COUNT", default_value_t = 1)]
    guests: u32,
}

impl BookCommand {
    /// Execute the book command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let check_in = parse_date(&self.check_in)?;
        let check_out = parse_date(&self.check_out)?;
        let stay = StayRange::new(check_in, check_out).map_err(innkeep::Error::from)?;

        let config = load_configuration(global)?;
        let mut db = open_database(global)?;

        let booking = create_booking(
            &mut db,
            &config,
            &CreateRequest {
                traveler_id: self.traveler,
                property_id: self.property,
                room_id: self.room,
                stay,
                guest_count: self.guests,
            },
        )?;

        println!(
            "Created booking {} ({} for {} night(s), total {} {})",
            booking.id(),
            booking.stay(),
            booking.stay().nights(),
            booking.total_price(),
            booking.currency(),
        );
        println!(
            "Payment due by {}",
            format_timestamp(booking.payment_due_at())
        );
        Ok(())
    }
}
