//! Database location and connection parameters.
//!
//! Every surface resolves the data directory the same way: an explicit
//! override first, then the `INNKEEP_DATA_DIR` environment variable,
//! then `~/.innkeep`. The directory holds the database file and the
//! engine's `config.yaml` side by side.

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{Error, Result};

/// File name of the `SQLite` database inside the data directory.
pub const DATABASE_FILE: &str = "innkeep.db";

const DEFAULT_BUSY_TIMEOUT: Duration = Duration::from_millis(5000);

/// Connection parameters for opening a database.
///
/// # Examples
///
/// ```
/// use innkeep::database::DatabaseConfig;
/// use std::time::Duration;
///
/// let config = DatabaseConfig::in_data_dir("/tmp/innkeep-data")
///     .with_busy_timeout(Duration::from_millis(10000));
/// assert!(config.path.ends_with("innkeep.db"));
/// ```
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Path to the database file.
    pub path: PathBuf,
    /// Busy timeout for database lock contention.
    pub busy_timeout: Duration,
    /// Whether to create the database (and its directory) if missing.
    pub auto_create: bool,
    /// Whether to open the database in read-only mode.
    pub read_only: bool,
}

impl DatabaseConfig {
    /// Creates a configuration pointing at an explicit database file.
    ///
    /// Defaults: 5000ms busy timeout, auto-create on, read-write.
    #[must_use]
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            busy_timeout: DEFAULT_BUSY_TIMEOUT,
            auto_create: true,
            read_only: false,
        }
    }

    /// Creates a configuration for the standard database file inside a
    /// data directory.
    #[must_use]
    pub fn in_data_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(dir.as_ref().join(DATABASE_FILE))
    }

    /// Sets the busy timeout.
    ///
    /// The busy timeout bounds how long a connection waits on a locked
    /// database before giving up.
    #[must_use]
    pub fn with_busy_timeout(mut self, timeout: Duration) -> Self {
        self.busy_timeout = timeout;
        self
    }

    /// Opens the database read-only.
    ///
    /// Read-only mode also disables auto-create.
    #[must_use]
    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self.auto_create = false;
        self
    }
}

/// Returns the default data directory, `~/.innkeep`.
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined.
pub fn default_data_dir() -> Result<PathBuf> {
    home::home_dir()
        .map(|home| home.join(".innkeep"))
        .ok_or_else(|| Error::validation("data_dir", "cannot determine home directory"))
}

/// Resolves the data directory.
///
/// Resolution order:
/// 1. The explicit override, if given (a `--data-dir` flag)
/// 2. The `INNKEEP_DATA_DIR` environment variable
/// 3. [`default_data_dir`]
///
/// # Errors
///
/// Returns an error only when resolution falls through to the default
/// and the home directory cannot be determined.
pub fn resolve_data_dir(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(dir) = explicit {
        return Ok(dir.to_path_buf());
    }
    if let Ok(dir) = std::env::var("INNKEEP_DATA_DIR") {
        return Ok(PathBuf::from(dir));
    }
    default_data_dir()
}

/// Resolves the full database path for the current environment.
///
/// # Errors
///
/// Returns an error if the data directory cannot be resolved.
pub fn resolve_database_path() -> Result<PathBuf> {
    Ok(resolve_data_dir(None)?.join(DATABASE_FILE))
}
