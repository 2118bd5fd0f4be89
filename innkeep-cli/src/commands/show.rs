//! Show command implementation.
//!
//! Displays one booking in detail, including its payment proof if one
//! is attached.

use clap::Args;
use innkeep::{Database, Error};

use crate::commands::list::booking_json;
use crate::error::CliError;
use crate::utils::{format_timestamp, open_database, GlobalOptions};

/// Show a booking in detail.
#[derive(Args)]
pub struct ShowCommand {
    /// The booking to show
    #[arg(long, value_name = "ID")]
    booking: i64,
}

impl ShowCommand {
    /// Execute the show command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let db = open_database(global)?;

        let booking = Database::get_booking(db.connection(), self.booking)?
            .ok_or_else(|| Error::not_found(format!("booking {}", self.booking)))?;
        let proof = Database::get_payment_proof(db.connection(), self.booking)?;

        let mut value = booking_json(&booking);
        if let Some(proof) = proof {
            value["payment_proof"] = serde_json::json!({
                "file_ref": proof.file_ref,
                "mime_type": proof.mime_type,
                "original_filename": proof.original_filename,
                "uploaded_at": format_timestamp(proof.uploaded_at),
                "verified_at": proof.verified_at.map(format_timestamp),
            });
        }

        println!("{}", serde_json::to_string_pretty(&value).map_err(std::io::Error::other)?);
        Ok(())
    }
}
