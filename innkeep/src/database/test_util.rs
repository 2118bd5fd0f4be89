//! Shared test utilities for database unit tests.
//!
//! This module provides helper functions used across multiple database test modules.

use tempfile::tempdir;

use crate::database::{Database, DatabaseConfig};
use crate::money::Money;
use crate::room::{Property, Room};

/// Creates a temporary test database that will be cleaned up automatically.
///
/// # Panics
///
/// Panics if the temporary directory or database cannot be created.
/// This is acceptable in test code where we want to fail fast.
#[must_use]
pub fn create_test_database() -> Database {
    let dir = tempdir().unwrap();
    let path = dir.path().join("test.db");
    let config = DatabaseConfig::new(path);
    let db = Database::open(config).unwrap();

    // Prevent the TempDir from being dropped immediately
    std::mem::forget(dir);

    db
}

/// Seeds a property with a single room, returning `(property_id, room_id)`.
///
/// # Panics
///
/// Panics if the inserts fail. This is acceptable in test code where we
/// want to fail fast.
pub fn seed_room(db: &mut Database, total_units: u32, base_price: i64) -> (i64, i64) {
    let property_id = db
        .create_property(&Property {
            id: 0,
            tenant_id: 1,
            name: "Test Property".into(),
            currency: "IDR".into(),
        })
        .unwrap();
    let room = Room::new(0, property_id, total_units, Money::new(base_price), 2).unwrap();
    let room_id = db.create_room(&room).unwrap();
    (property_id, room_id)
}
