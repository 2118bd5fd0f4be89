//! Integration tests for catalog management commands.
//!
//! Covers `init`, `add-property`, `add-room`, `block`, and `adjust`.

mod common;

use common::TestEnv;
use predicates::prelude::*;

#[test]
fn test_init_creates_database() {
    let env = TestEnv::new();
    assert!(!env.data_dir.exists());

    env.command_bare()
        .arg("init")
        .arg("--data-dir")
        .arg(&env.data_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Created database"));

    assert!(env.data_dir.join("innkeep.db").exists());
}

#[test]
fn test_init_refuses_existing_database_without_overwrite() {
    let env = TestEnv::new();
    env.command_bare()
        .arg("init")
        .arg("--data-dir")
        .arg(&env.data_dir)
        .assert()
        .success();

    env.command_bare()
        .arg("init")
        .arg("--data-dir")
        .arg(&env.data_dir)
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_init_with_config_writes_defaults() {
    let env = TestEnv::new();
    env.command_bare()
        .arg("init")
        .arg("--data-dir")
        .arg(&env.data_dir)
        .arg("--with-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("configuration file"));

    let config = std::fs::read_to_string(env.data_dir.join("config.yaml")).unwrap();
    assert!(config.contains("payment_sla_minutes"));
}

#[test]
fn test_add_property_and_room() {
    let env = TestEnv::new();
    let property = env.add_property(1, "Beach House");
    assert!(property > 0);

    let room = env.add_room(property, 2, 850_000);
    assert!(room > 0);
}

#[test]
fn test_add_room_rejects_zero_units() {
    let env = TestEnv::new();
    let property = env.add_property(1, "Beach House");

    env.command()
        .args([
            "add-room",
            "--property",
            &property.to_string(),
            "--units",
            "0",
            "--base-price",
            "850000",
        ])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("total_units"));
}

#[test]
fn test_block_prevents_booking() {
    let env = TestEnv::new();
    let property = env.add_property(1, "Beach House");
    let room = env.add_room(property, 5, 850_000);

    env.command()
        .args([
            "block",
            "--room",
            &room.to_string(),
            "--date",
            "2026-09-02",
            "--note",
            "renovation",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("blocked"));

    env.command()
        .args([
            "book",
            "--traveler",
            "9",
            "--property",
            &property.to_string(),
            "--room",
            &room.to_string(),
            "--check-in",
            "2026-09-01",
            "--check-out",
            "2026-09-04",
        ])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("not available"));
}

#[test]
fn test_block_rejects_malformed_date() {
    let env = TestEnv::new();
    let property = env.add_property(1, "Beach House");
    let room = env.add_room(property, 1, 850_000);

    env.command()
        .args(["block", "--room", &room.to_string(), "--date", "tomorrow"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("not a date"));
}

#[test]
fn test_adjust_changes_quoted_total() {
    let env = TestEnv::new();
    let property = env.add_property(1, "Beach House");
    let room = env.add_room(property, 1, 100_000);

    env.command()
        .args([
            "adjust",
            "--room",
            &room.to_string(),
            "--from",
            "2026-09-01",
            "--to",
            "2026-09-30",
            "--kind",
            "percentage",
            "--value",
            "15",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created adjustment"));

    let booking = env.book(9, property, room, "2026-09-01", "2026-09-02");
    let shown = env.show(booking);
    assert_eq!(shown["total_price"], 115_000);
}

#[test]
fn test_adjust_rejects_reversed_range() {
    let env = TestEnv::new();
    let property = env.add_property(1, "Beach House");
    let room = env.add_room(property, 1, 100_000);

    env.command()
        .args([
            "adjust",
            "--room",
            &room.to_string(),
            "--from",
            "2026-09-30",
            "--to",
            "2026-09-01",
            "--kind",
            "nominal",
            "--value",
            "-5000",
        ])
        .assert()
        .failure()
        .code(4);
}
