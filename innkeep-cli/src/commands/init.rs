//! Init command implementation.
//!
//! This module implements the `init` command for explicitly initializing
//! the innkeep data directory and database.

use std::path::PathBuf;

use clap::Args;
use innkeep::database::DATABASE_FILE;
use innkeep::{default_data_dir, Database, DatabaseConfig};

use crate::error::CliError;
use crate::utils::GlobalOptions;

const DEFAULT_CONFIG: &str = "\
# innkeep configuration
payment_sla_minutes: 60
reminder_lead_days: 1
";

/// Initialize innkeep data directory and database.
#[derive(Args)]
pub struct InitCommand {
    /// Data directory to initialize
    #[arg(long, value_name = "PATH")]
    data_dir: Option<PathBuf>,

    /// Overwrite existing database
    #[arg(long)]
    overwrite: bool,

    /// Create default configuration file
    #[arg(long)]
    with_config: bool,
}

impl InitCommand {
    /// Execute the init command.
    ///
    /// The --data-dir flag here means where to create, not where to find.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        // Priority: command flag > global flag > default
        let data_dir = self
            .data_dir
            .or_else(|| global.data_dir.clone())
            .or_else(|| default_data_dir().ok())
            .ok_or_else(|| {
                CliError::Config(
                    "Could not determine data directory (home directory not found)".to_string(),
                )
            })?;

        let db_path = data_dir.join(DATABASE_FILE);
        if db_path.exists() {
            if self.overwrite {
                std::fs::remove_file(&db_path)?;
            } else {
                return Err(CliError::InvalidArguments(format!(
                    "database already exists (use --overwrite to replace): {}",
                    db_path.display()
                )));
            }
        }

        // Opening with auto_create runs the schema migration
        let _db = Database::open(DatabaseConfig::new(&db_path)).map_err(CliError::from)?;

        println!("Initialized innkeep in: {}", data_dir.display());
        if self.overwrite {
            println!("  - Recreated database");
        } else {
            println!("  - Created database");
        }

        if self.with_config {
            let config_path = data_dir.join("config.yaml");
            if config_path.exists() {
                println!("  - Configuration file already exists (not overwritten)");
            } else {
                std::fs::write(&config_path, DEFAULT_CONFIG)?;
                println!("  - Created default configuration file");
            }
        }

        Ok(())
    }
}
