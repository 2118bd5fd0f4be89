//! Block command implementation.
//!
//! Sets or clears a per-night availability override on a room.

use clap::Args;
use innkeep::AvailabilityOverride;

use crate::error::CliError;
use crate::utils::{open_database, parse_date, GlobalOptions};

/// Block (or unblock) a room for a calendar night.
#[derive(Args)]
pub struct BlockCommand {
    /// The room to override
    #[arg(long, value_name = "ID")]
    room: i64,

    /// The calendar night (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    date: String,

    /// Mark the night available instead of blocked
    #[arg(long)]
    unblock: bool,

    /// Override the unit count for this night
    #[arg(long, value_name = "COUNT")]
    units: Option<u32>,

    /// Free-form note (e.g. "renovation")
    #[arg(long, value_name = "TEXT")]
    note: Option<String>,
}

impl BlockCommand {
    /// Execute the block command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let date = parse_date(&self.date)?;
        let mut db = open_database(global)?;

        db.set_availability_override(&AvailabilityOverride {
            room_id: self.room,
            date,
            available: self.unblock,
            units_override: self.units,
            note: self.note,
        })?;

        if self.unblock {
            println!("Room {} unblocked for {date}", self.room);
        } else {
            println!("Room {} blocked for {date}", self.room);
        }
        Ok(())
    }
}
