//! Remind command implementation.
//!
//! Sends a one-off check-in reminder without stamping the booking; the
//! scheduled sweep still sends its own.

use clap::Args;
use innkeep::workflow::send_reminder;
use innkeep::LogNotifier;

use crate::error::CliError;
use crate::utils::{open_database, GlobalOptions};

/// Send a one-off check-in reminder.
#[derive(Args)]
pub struct RemindCommand {
    /// Acting tenant's identifier
    #[arg(long, value_name = "ID")]
    tenant: i64,

    /// The booking to remind the traveler about
    #[arg(long, value_name = "ID")]
    booking: i64,
}

impl RemindCommand {
    /// Execute the remind command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut db = open_database(global)?;
        send_reminder(&mut db, &LogNotifier, self.tenant, self.booking)?;

        println!("Reminder sent for booking {}", self.booking);
        Ok(())
    }
}
