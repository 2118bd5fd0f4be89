//! Configuration for the booking engine.
//!
//! Configuration is merged from three sources with the following
//! precedence (highest to lowest):
//!
//! 1. Environment variables (`INNKEEP_*`)
//! 2. A YAML configuration file (`~/.innkeep/config.yaml` by default)
//! 3. Built-in defaults

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Engine configuration.
///
/// # Examples
///
/// ```
/// use innkeep::Config;
///
/// let config = Config::default();
/// assert_eq!(config.payment_sla_minutes, 60);
/// assert_eq!(config.reminder_lead_days, 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct Config {
    /// How long a traveler has to upload payment proof before the
    /// booking expires.
    pub payment_sla_minutes: u64,

    /// How many days before check-in the reminder scheduler fires.
    pub reminder_lead_days: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            payment_sla_minutes: 60,
            reminder_lead_days: 1,
        }
    }
}

impl Config {
    /// Loads configuration from a YAML file, if it exists, then applies
    /// environment overrides.
    ///
    /// A missing file is not an error; defaults are used.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed,
    /// or if an environment override carries a non-numeric value.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut config = if path.exists() {
            let contents = std::fs::read_to_string(path)?;
            serde_yaml::from_str(&contents)?
        } else {
            Self::default()
        };
        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Applies `INNKEEP_*` environment variable overrides.
    ///
    /// # Errors
    ///
    /// Returns a validation error if a set variable is not a positive
    /// integer.
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("INNKEEP_PAYMENT_SLA_MINUTES") {
            self.payment_sla_minutes = parse_env_u64("INNKEEP_PAYMENT_SLA_MINUTES", &val)?;
        }
        if let Ok(val) = std::env::var("INNKEEP_REMINDER_LEAD_DAYS") {
            self.reminder_lead_days = parse_env_u64("INNKEEP_REMINDER_LEAD_DAYS", &val)?;
        }
        Ok(())
    }

    /// The payment SLA as a chrono duration.
    #[must_use]
    pub fn payment_sla(&self) -> chrono::Duration {
        chrono::Duration::minutes(i64::try_from(self.payment_sla_minutes).unwrap_or(i64::MAX))
    }

    /// The reminder lead as a chrono duration.
    #[must_use]
    pub fn reminder_lead(&self) -> chrono::Duration {
        chrono::Duration::days(i64::try_from(self.reminder_lead_days).unwrap_or(i64::MAX))
    }
}

fn parse_env_u64(name: &str, val: &str) -> Result<u64> {
    val.parse().map_err(|_| Error::Validation {
        field: name.into(),
        message: "Must be a positive integer".into(),
    })
}
