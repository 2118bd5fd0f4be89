//! Utility functions for CLI operations.
//!
//! This module provides common helpers used across CLI commands:
//! configuration loading, database opening, and argument parsing.

use std::path::PathBuf;

use chrono::{DateTime, NaiveDate, Utc};
use innkeep::{Config, Database, DatabaseConfig};

use crate::error::CliError;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Override the data directory location.
    pub data_dir: Option<PathBuf>,

    /// Override the default busy timeout (in seconds).
    pub busy_timeout: Option<u32>,

    /// Disable automatic database initialization.
    pub disable_autoinit: bool,
}

/// Resolve the data directory from global options.
///
/// Priority: `--data-dir` flag, then `INNKEEP_DATA_DIR`, then `~/.innkeep`.
pub fn resolve_data_dir(global: &GlobalOptions) -> Result<PathBuf, CliError> {
    innkeep::resolve_data_dir(global.data_dir.as_deref())
        .map_err(|e| CliError::Config(e.to_string()))
}

/// Load engine configuration.
///
/// Reads `config.yaml` from the data directory (missing file means
/// defaults), then applies `INNKEEP_*` environment overrides.
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let path = resolve_data_dir(global)?.join("config.yaml");
    Config::load(path).map_err(|e| CliError::Config(e.to_string()))
}

/// Open the database, honoring the global options.
///
/// # Errors
///
/// Returns `NoDataDirectory` if the database doesn't exist and auto-init
/// is disabled.
pub fn open_database(global: &GlobalOptions) -> Result<Database, CliError> {
    let data_dir = resolve_data_dir(global)?;

    if global.disable_autoinit && !data_dir.join(innkeep::database::DATABASE_FILE).exists() {
        return Err(CliError::NoDataDirectory);
    }

    let mut db_config = DatabaseConfig::in_data_dir(data_dir);
    if let Some(timeout_seconds) = global.busy_timeout {
        db_config =
            db_config.with_busy_timeout(std::time::Duration::from_secs(timeout_seconds.into()));
    }

    Database::open(db_config).map_err(CliError::from)
}

/// Parse an ISO-8601 calendar date argument.
pub fn parse_date(s: &str) -> Result<NaiveDate, CliError> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| CliError::InvalidArguments(format!("'{s}' is not a date (expected YYYY-MM-DD)")))
}

/// Format a timestamp for display.
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.format("%Y-%m-%d %H:%M:%S").to_string()
}
