//! Race condition tests for concurrent booking attempts.
//!
//! The availability check and the booking insert commit inside one
//! IMMEDIATE transaction, so two travelers racing for the last unit
//! must never both win. These tests open one connection per thread
//! against the same database file and hammer a small room.

use std::thread;
use std::time::Duration;

use chrono::NaiveDate;
use innkeep::workflow::{create_booking, CreateRequest};
use innkeep::{Config, Database, DatabaseConfig, Money, Property, Room, StayRange};

fn seed(db_path: &std::path::Path, units: u32) -> (i64, i64) {
    let mut db = Database::open(DatabaseConfig::new(db_path)).expect("Failed to open database");
    let property_id = db
        .create_property(&Property {
            id: 0,
            tenant_id: 1,
            name: "Beach House".into(),
            currency: "IDR".into(),
        })
        .unwrap();
    let room_id = db
        .create_room(&Room::new(0, property_id, units, Money::new(850_000), 2).unwrap())
        .unwrap();
    (property_id, room_id)
}

fn stay() -> StayRange {
    StayRange::new(
        NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
        NaiveDate::from_ymd_opt(2026, 9, 4).unwrap(),
    )
    .unwrap()
}

#[test]
fn test_concurrent_bookings_never_oversell() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("innkeep.db");
    let (property_id, room_id) = seed(&db_path, 2);

    // six travelers race for two units over the same dates
    let handles: Vec<_> = (0..6u32)
        .map(|i| {
            let db_path = db_path.clone();
            thread::spawn(move || {
                // stagger slightly to mix lock-acquisition order
                thread::sleep(Duration::from_millis(u64::from(i) * 3));

                let config = DatabaseConfig::new(&db_path)
                    .with_busy_timeout(Duration::from_millis(10_000));
                let mut db = Database::open(config).expect("Failed to open database");
                create_booking(
                    &mut db,
                    &Config::default(),
                    &CreateRequest {
                        traveler_id: 100 + i64::from(i),
                        property_id,
                        room_id,
                        stay: stay(),
                        guest_count: 1,
                    },
                )
            })
        })
        .collect();

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    let successes = results.iter().filter(|r| r.is_ok()).count();
    assert_eq!(successes, 2, "exactly one booking per unit must win");

    for result in &results {
        if let Err(e) = result {
            assert!(e.is_conflict(), "losers must see a conflict, got: {e}");
        }
    }

    // the database agrees with the in-process tally
    let db = Database::open(DatabaseConfig::new(&db_path)).unwrap();
    let active =
        Database::count_overlapping_active(db.connection(), room_id, stay()).unwrap();
    assert_eq!(active, 2);
}

#[test]
fn test_concurrent_bookings_on_disjoint_dates_all_succeed() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("innkeep.db");
    let (property_id, room_id) = seed(&db_path, 1);

    // four travelers book back-to-back weeks; nobody overlaps
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let db_path = db_path.clone();
            thread::spawn(move || {
                let check_in = NaiveDate::from_ymd_opt(2026, 9, 1).unwrap()
                    + chrono::Duration::days(i64::from(i) * 7);
                let config = DatabaseConfig::new(&db_path)
                    .with_busy_timeout(Duration::from_millis(10_000));
                let mut db = Database::open(config).expect("Failed to open database");
                create_booking(
                    &mut db,
                    &Config::default(),
                    &CreateRequest {
                        traveler_id: 100 + i64::from(i),
                        property_id,
                        room_id,
                        stay: StayRange::new(check_in, check_in + chrono::Duration::days(7))
                            .unwrap(),
                        guest_count: 1,
                    },
                )
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap().expect("disjoint booking failed");
    }

    let db = Database::open(DatabaseConfig::new(&db_path)).unwrap();
    let bookings = Database::list_bookings_for_room(db.connection(), room_id).unwrap();
    assert_eq!(bookings.len(), 4);
}
