//! Add-property command implementation.

use clap::Args;
use innkeep::Property;

use crate::error::CliError;
use crate::utils::{open_database, GlobalOptions};

/// Register a property for a tenant.
#[derive(Args)]
pub struct AddPropertyCommand {
    /// Acting tenant's identifier
    #[arg(long, value_name = "ID")]
    tenant: i64,

    /// Display name for the property
    #[arg(long, value_name = "NAME")]
    name: String,

    /// ISO currency code for all of this property's prices
    #[arg(long, value_name = "CODE", default_value = "IDR")]
    currency: String,
}

impl AddPropertyCommand {
    /// Execute the add-property command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut db = open_database(global)?;

        let id = db.create_property(&Property {
            id: 0,
            tenant_id: self.tenant,
            name: self.name.clone(),
            currency: self.currency,
        })?;

        println!("Created property {id} ({})", self.name);
        Ok(())
    }
}
