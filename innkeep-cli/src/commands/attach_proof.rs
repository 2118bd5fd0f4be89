//! Attach-proof command implementation.

use clap::Args;
use innkeep::workflow::{attach_payment_proof, ProofUpload};

use crate::error::CliError;
use crate::utils::{open_database, GlobalOptions};

/// Attach a payment proof to a booking.
#[derive(Args)]
pub struct AttachProofCommand {
    /// Acting traveler's identifier
    #[arg(long, value_name = "ID")]
    traveler: i64,

    /// The booking to attach the proof to
    #[arg(long, value_name = "ID")]
    booking: i64,

    /// Storage reference for the uploaded file
    #[arg(long, value_name = "REF")]
    file_ref: String,

    /// MIME type of the upload
    #[arg(long, value_name = "TYPE", default_value = "image/jpeg")]
    mime_type: String,

    /// Original filename of the upload
    #[arg(long, value_name = "NAME")]
    filename: String,
}

impl AttachProofCommand {
    /// Execute the attach-proof command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut db = open_database(global)?;

        let booking = attach_payment_proof(
            &mut db,
            self.traveler,
            self.booking,
            &ProofUpload {
                file_ref: self.file_ref,
                mime_type: self.mime_type,
                original_filename: self.filename,
            },
        )?;

        println!(
            "Attached payment proof to booking {}; status is now {}",
            booking.id(),
            booking.status()
        );
        Ok(())
    }
}
