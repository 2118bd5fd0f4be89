//! Adjust command implementation.
//!
//! Adds a seasonal price adjustment to a room.

use clap::{Args, ValueEnum};
use innkeep::{AdjustmentKind, PriceAdjustment};

use crate::error::CliError;
use crate::utils::{open_database, parse_date, GlobalOptions};

/// Add a seasonal price adjustment to a room.
#[derive(Args)]
pub struct AdjustCommand {
    /// The room the adjustment applies to
    #[arg(long, value_name = "ID")]
    room: i64,

    /// First night covered, inclusive (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    from: String,

    /// Last night covered, inclusive (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    to: String,

    /// How the value is interpreted
    #[arg(long, value_enum)]
    kind: KindArg,

    /// Signed percentage or minor-unit amount
    #[arg(long, value_name = "VALUE", allow_hyphen_values = true)]
    value: i64,
}

/// Adjustment kind argument.
#[derive(Clone, Copy, ValueEnum)]
#[value(rename_all = "lowercase")]
enum KindArg {
    /// Percentage of the base nightly price
    Percentage,
    /// Flat minor-unit amount
    Nominal,
}

impl From<KindArg> for AdjustmentKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Percentage => Self::Percentage,
            KindArg::Nominal => Self::Nominal,
        }
    }
}

impl AdjustCommand {
    /// Execute the adjust command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let start_date = parse_date(&self.from)?;
        let end_date = parse_date(&self.to)?;
        if end_date < start_date {
            return Err(CliError::InvalidArguments(
                "--to must not be before --from".to_string(),
            ));
        }

        let mut db = open_database(global)?;
        let id = db.create_price_adjustment(&PriceAdjustment {
            id: 0,
            room_id: self.room,
            start_date,
            end_date,
            kind: self.kind.into(),
            value: self.value,
        })?;

        println!(
            "Created adjustment {id} on room {} ({start_date}..={end_date})",
            self.room
        );
        Ok(())
    }
}
