//! Database layer for persistent storage of the catalog and bookings.
//!
//! This module provides a SQLite-based storage layer for properties,
//! rooms, availability overrides, price adjustments, bookings, and
//! payment proofs, including connection management, schema versioning,
//! and CRUD operations.
//!
//! # Examples
//!
//! ```no_run
//! use innkeep::database::{Database, DatabaseConfig};
//!
//! // Open a database
//! let config = DatabaseConfig::new("/tmp/innkeep.db");
//! let db = Database::open(config).unwrap();
//!
//! // List all bookings
//! let all = Database::list_bookings(db.connection()).unwrap();
//! for booking in all {
//!     println!("{:?}", booking);
//! }
//! ```

mod config;
mod connection;
pub mod migrations;
mod operations;
mod schema;

#[cfg(test)]
pub(crate) mod test_util;

// Re-export public API
pub use config::{
    default_data_dir, resolve_data_dir, resolve_database_path, DatabaseConfig, DATABASE_FILE,
};
pub use connection::Database;

// Re-export migration functions for advanced use cases
pub use migrations::{check_schema_compatibility, get_schema_version, initialize_schema};
