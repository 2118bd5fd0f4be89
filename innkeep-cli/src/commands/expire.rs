//! Expire command implementation.
//!
//! Runs the payment-deadline sweep: every `WAITING_PAYMENT` booking
//! whose deadline has passed is cancelled, releasing its inventory.

use chrono::Utc;
use clap::Args;
use innkeep::workflow::expire_unpaid;

use crate::error::CliError;
use crate::utils::{format_timestamp, open_database, GlobalOptions};

/// Cancel bookings whose payment deadline has passed.
#[derive(Args)]
pub struct ExpireCommand {
    /// Preview what would be cancelled without changing anything
    #[arg(long)]
    dry_run: bool,
}

impl ExpireCommand {
    /// Execute the expire command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut db = open_database(global)?;
        let result = expire_unpaid(&mut db, Utc::now(), self.dry_run)?;

        if self.dry_run {
            println!("Would cancel {} booking(s):", result.cancelled_count);
        } else {
            println!("Cancelled {} booking(s):", result.cancelled_count);
        }
        for booking in &result.cancelled {
            println!(
                "  booking {} (payment was due {})",
                booking.id(),
                format_timestamp(booking.payment_due_at())
            );
        }
        Ok(())
    }
}
