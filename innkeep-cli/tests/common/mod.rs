//! Common test utilities for CLI integration tests.
//!
//! Provides an isolated test environment (temporary data directory) and
//! helpers that drive the binary through the catalog and booking flows.

use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

/// Test environment with isolated data directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the innkeep data directory
    pub data_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join("innkeep-data");

        Self { temp_dir, data_dir }
    }

    /// Get a bare command builder without pre-configured flags.
    pub fn command_bare(&self) -> Command {
        Command::cargo_bin("innkeep").expect("Failed to find innkeep binary")
    }

    /// Get a command builder with the data directory pre-configured.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--data-dir").arg(&self.data_dir);
        cmd
    }

    /// Register a property and return its identifier.
    pub fn add_property(&self, tenant: i64, name: &str) -> i64 {
        let output = self
            .command()
            .args(["add-property", "--tenant", &tenant.to_string(), "--name", name])
            .output()
            .expect("Failed to run add-property");
        assert!(
            output.status.success(),
            "add-property failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        extract_id(&String::from_utf8_lossy(&output.stdout))
    }

    /// Add a room and return its identifier.
    pub fn add_room(&self, property: i64, units: u32, base_price: i64) -> i64 {
        let output = self
            .command()
            .args([
                "add-room",
                "--property",
                &property.to_string(),
                "--units",
                &units.to_string(),
                "--base-price",
                &base_price.to_string(),
            ])
            .output()
            .expect("Failed to run add-room");
        assert!(
            output.status.success(),
            "add-room failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        extract_id(&String::from_utf8_lossy(&output.stdout))
    }

    /// Book a room and return the booking identifier.
    pub fn book(
        &self,
        traveler: i64,
        property: i64,
        room: i64,
        check_in: &str,
        check_out: &str,
    ) -> i64 {
        let output = self
            .command()
            .args([
                "book",
                "--traveler",
                &traveler.to_string(),
                "--property",
                &property.to_string(),
                "--room",
                &room.to_string(),
                "--check-in",
                check_in,
                "--check-out",
                check_out,
            ])
            .output()
            .expect("Failed to run book");
        assert!(
            output.status.success(),
            "book failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        extract_id(&String::from_utf8_lossy(&output.stdout))
    }

    /// Attach a payment proof to a booking.
    pub fn attach_proof(&self, traveler: i64, booking: i64) {
        self.command()
            .args([
                "attach-proof",
                "--traveler",
                &traveler.to_string(),
                "--booking",
                &booking.to_string(),
                "--file-ref",
                "proofs/transfer.png",
                "--filename",
                "transfer.png",
            ])
            .assert()
            .success();
    }

    /// Approve a booking's payment proof.
    pub fn approve(&self, tenant: i64, booking: i64) {
        self.command()
            .args([
                "confirm",
                "--tenant",
                &tenant.to_string(),
                "--booking",
                &booking.to_string(),
                "--approve",
            ])
            .assert()
            .success();
    }

    /// Show a booking as parsed JSON.
    pub fn show(&self, booking: i64) -> serde_json::Value {
        let output = self
            .command()
            .args(["show", "--booking", &booking.to_string()])
            .output()
            .expect("Failed to run show");
        assert!(
            output.status.success(),
            "show failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        serde_json::from_slice(&output.stdout).expect("show output is not valid JSON")
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

/// Pull the created identifier out of a "Created <thing> <id> ..." line.
#[allow(dead_code)]
pub fn extract_id(stdout: &str) -> i64 {
    stdout
        .split_whitespace()
        .find_map(|word| word.parse::<i64>().ok())
        .expect("no identifier in command output")
}
