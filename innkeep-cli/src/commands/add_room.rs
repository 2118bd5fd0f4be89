//! Add-room command implementation.

use clap::Args;
use innkeep::{Money, Room};

use crate::error::CliError;
use crate::utils::{open_database, GlobalOptions};

/// Add a room type to a property.
#[derive(Args)]
pub struct AddRoomCommand {
    /// The property the room belongs to
    #[arg(long, value_name = "ID")]
    property: i64,

    /// Number of simultaneous units of this room type
    #[arg(long, value_name = "COUNT", default_value_t = 1)]
    units: u32,

    /// Base nightly price in minor currency units
    #[arg(long, value_name = "AMOUNT")]
    base_price: i64,

    /// Maximum guests per unit
    #[arg(long, value_name = "COUNT", default_value_t = 2)]
    max_guests: u32,
}

impl AddRoomCommand {
    /// Execute the add-room command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let room = Room::new(
            0,
            self.property,
            self.units,
            Money::new(self.base_price),
            self.max_guests,
        )?;

        let mut db = open_database(global)?;
        let id = db.create_room(&room)?;

        println!(
            "Created room {id} in property {} ({} unit(s), {} per night)",
            self.property, self.units, self.base_price
        );
        Ok(())
    }
}
