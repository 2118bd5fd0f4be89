//! Confirm command implementation.
//!
//! Approves or rejects a booking's payment proof on behalf of a tenant.

use clap::{ArgGroup, Args};
use innkeep::workflow::{confirm_payment, ConfirmAction};
use innkeep::LogNotifier;

use crate::error::CliError;
use crate::utils::{open_database, GlobalOptions};

/// Approve or reject a booking's payment proof.
#[derive(Args)]
#[command(group(ArgGroup::new("verdict").required(true).args(["approve", "reject"])))]
pub struct ConfirmCommand {
    /// Acting tenant's identifier
    #[arg(long, value_name = "ID")]
    tenant: i64,

    /// The booking whose proof is being judged
    #[arg(long, value_name = "ID")]
    booking: i64,

    /// Accept the payment
    #[arg(long)]
    approve: bool,

    /// Refuse the proof
    #[arg(long)]
    reject: bool,
}

impl ConfirmCommand {
    /// Execute the confirm command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let action = if self.approve {
            ConfirmAction::Approve
        } else {
            ConfirmAction::Reject
        };

        let mut db = open_database(global)?;
        let booking = confirm_payment(&mut db, &LogNotifier, self.tenant, self.booking, action)?;

        match action {
            ConfirmAction::Approve => {
                println!("Payment approved; booking {} is now {}", booking.id(), booking.status());
            }
            ConfirmAction::Reject => {
                println!(
                    "Payment rejected; booking {} is back in {}",
                    booking.id(),
                    booking.status()
                );
            }
        }
        Ok(())
    }
}
