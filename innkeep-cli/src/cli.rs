//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands::{
    AddPropertyCommand, AddRoomCommand, AdjustCommand, AttachProofCommand, BlockCommand,
    BookCommand, CancelCommand, CompleteCommand, ConfirmCommand, ExpireCommand, InitCommand,
    ListCommand, RemindCommand, RemindersCommand, ShowCommand,
};

/// Command-line tool for the innkeep lodging booking engine.
#[derive(Parser)]
#[command(name = "innkeep")]
#[command(version, about = "Manage lodging bookings", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Override the data directory location
    #[arg(long, value_name = "PATH", global = true, env = "INNKEEP_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Override the default busy timeout (in seconds)
    #[arg(long, value_name = "SECONDS", global = true, env = "INNKEEP_BUSY_TIMEOUT")]
    pub busy_timeout: Option<u32>,

    /// Disable automatic database initialization
    #[arg(long, global = true, env = "INNKEEP_DISABLE_AUTOINIT")]
    pub disable_autoinit: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Initialize the database
    Init(InitCommand),

    /// Register a property for a tenant
    AddProperty(AddPropertyCommand),

    /// Add a room type to a property
    AddRoom(AddRoomCommand),

    /// Block (or unblock) a room for a calendar night
    Block(BlockCommand),

    /// Add a seasonal price adjustment to a room
    Adjust(AdjustCommand),

    /// Create a booking
    Book(BookCommand),

    /// Attach a payment proof to a booking
    AttachProof(AttachProofCommand),

    /// Approve or reject a booking's payment proof
    Confirm(ConfirmCommand),

    /// Cancel a booking
    Cancel(CancelCommand),

    /// Mark a stay completed after check-out
    Complete(CompleteCommand),

    /// Send a one-off check-in reminder
    Remind(RemindCommand),

    /// Cancel bookings whose payment deadline has passed
    Expire(ExpireCommand),

    /// Send scheduled check-in reminders
    Reminders(RemindersCommand),

    /// List bookings
    List(ListCommand),

    /// Show a booking in detail
    Show(ShowCommand),
}
