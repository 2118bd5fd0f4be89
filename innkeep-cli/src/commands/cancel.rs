//! Cancel command implementation.
//!
//! Cancels a booking as either the traveler or the tenant; exactly one
//! actor must be named.

use clap::{ArgGroup, Args};
use innkeep::workflow::{cancel_by_tenant, cancel_by_traveler};

use crate::error::CliError;
use crate::utils::{open_database, GlobalOptions};

/// Cancel a booking.
#[derive(Args)]
#[command(group(ArgGroup::new("actor").required(true).args(["traveler", "tenant"])))]
pub struct CancelCommand {
    /// The booking to cancel
    #[arg(long, value_name = "ID")]
    booking: i64,

    /// Act as this traveler
    #[arg(long, value_name = "ID")]
    traveler: Option<i64>,

    /// Act as this tenant
    #[arg(long, value_name = "ID")]
    tenant: Option<i64>,
}

impl CancelCommand {
    /// Execute the cancel command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut db = open_database(global)?;

        let booking = if let Some(traveler_id) = self.traveler {
            cancel_by_traveler(&mut db, traveler_id, self.booking)?
        } else if let Some(tenant_id) = self.tenant {
            cancel_by_tenant(&mut db, tenant_id, self.booking)?
        } else {
            return Err(CliError::Library(innkeep::Error::Unauthenticated));
        };

        println!("Cancelled booking {}", booking.id());
        Ok(())
    }
}
