//! Complete command implementation.

use clap::Args;
use innkeep::workflow::mark_completed;

use crate::error::CliError;
use crate::utils::{open_database, GlobalOptions};

/// Mark a stay completed after check-out.
#[derive(Args)]
pub struct CompleteCommand {
    /// Acting tenant's identifier
    #[arg(long, value_name = "ID")]
    tenant: i64,

    /// The booking to complete
    #[arg(long, value_name = "ID")]
    booking: i64,
}

impl CompleteCommand {
    /// Execute the complete command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut db = open_database(global)?;
        let booking = mark_completed(&mut db, self.tenant, self.booking)?;

        println!("Booking {} marked {}", booking.id(), booking.status());
        Ok(())
    }
}
