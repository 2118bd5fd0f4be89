//! Command implementations for the innkeep CLI.
//!
//! Each command lives in its own module and exposes a clap `Args`
//! struct with an `execute` method taking the global options.

mod add_property;
mod add_room;
mod adjust;
mod attach_proof;
mod block;
mod book;
mod cancel;
mod complete;
mod confirm;
mod expire;
mod init;
mod list;
mod remind;
mod reminders;
mod show;

pub use add_property::AddPropertyCommand;
pub use add_room::AddRoomCommand;
pub use adjust::AdjustCommand;
pub use attach_proof::AttachProofCommand;
pub use block::BlockCommand;
pub use book::BookCommand;
pub use cancel::CancelCommand;
pub use complete::CompleteCommand;
pub use confirm::ConfirmCommand;
pub use expire::ExpireCommand;
pub use init::InitCommand;
pub use list::ListCommand;
pub use remind::RemindCommand;
pub use reminders::RemindersCommand;
pub use show::ShowCommand;
