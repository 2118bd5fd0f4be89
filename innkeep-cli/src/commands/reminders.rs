//! Reminders command implementation.
//!
//! Runs the scheduled check-in reminder sweep.

use chrono::Utc;
use clap::Args;
use innkeep::workflow::send_checkin_reminders;
use innkeep::LogNotifier;

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, parse_date, GlobalOptions};

/// Send scheduled check-in reminders.
#[derive(Args)]
pub struct RemindersCommand {
    /// Treat this date as today (YYYY-MM-DD); defaults to the current date
    #[arg(long, value_name = "DATE")]
    today: Option<String>,

    /// Preview who would be reminded without sending or stamping
    #[arg(long)]
    dry_run: bool,
}

impl RemindersCommand {
    /// Execute the reminders command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let today = match self.today {
            Some(ref s) => parse_date(s)?,
            None => Utc::now().date_naive(),
        };

        let config = load_configuration(global)?;
        let mut db = open_database(global)?;
        let result =
            send_checkin_reminders(&mut db, &LogNotifier, &config, today, self.dry_run)?;

        if self.dry_run {
            println!("Would send {} reminder(s):", result.sent_count);
        } else {
            println!("Sent {} reminder(s):", result.sent_count);
        }
        for booking in &result.sent {
            println!(
                "  booking {} (check-in {})",
                booking.id(),
                booking.stay().check_in()
            );
        }
        Ok(())
    }
}
