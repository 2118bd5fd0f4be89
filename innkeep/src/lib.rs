#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # innkeep
//!
//! A booking engine for short-term lodging.
//!
//! This library provides the core types and workflow for reserving rooms
//! across multi-tenant properties: availability checking, nightly
//! pricing with seasonal adjustments, a manual-payment booking
//! lifecycle, and the scheduled sweeps that expire unpaid bookings and
//! remind travelers before check-in.
//!
//! ## Core Types
//!
//! - [`Property`] and [`Room`]: the bookable catalog
//! - [`StayRange`]: validated half-open date ranges
//! - [`Money`]: fixed-point amounts in minor currency units
//! - [`Booking`] and [`BookingStatus`]: reservations and their lifecycle
//! - [`Error`] and [`Result`]: error handling types
//! - [`Logger`] and [`LogLevel`]: logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use chrono::NaiveDate;
//! use innkeep::{Money, StayRange};
//!
//! let check_in = NaiveDate::from_ymd_opt(2026, 9, 1).unwrap();
//! let check_out = NaiveDate::from_ymd_opt(2026, 9, 4).unwrap();
//! let stay = StayRange::new(check_in, check_out).unwrap();
//! assert_eq!(stay.nights(), 3);
//!
//! let nightly = Money::new(850_000);
//! assert_eq!(nightly.to_string(), "850000");
//! ```

pub mod availability;
pub mod booking;
pub mod config;
pub mod database;
pub mod error;
pub mod logging;
pub mod money;
pub mod notify;
pub mod pricing;
pub mod room;
pub mod status;
pub mod stay;
pub mod workflow;

// Re-export key types at crate root for convenience
pub use booking::{Booking, BookingBuilder, PaymentProof};
pub use config::Config;
pub use database::{
    default_data_dir, resolve_data_dir, resolve_database_path, Database, DatabaseConfig,
};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use money::Money;
pub use notify::{LogNotifier, Notifier, NotifyError, NotifyResult};
pub use room::{AdjustmentKind, AvailabilityOverride, PriceAdjustment, Property, Room};
pub use status::{BookingEvent, BookingStatus, TransitionError};
pub use stay::{InvalidStayError, StayRange};
pub use workflow::{
    attach_payment_proof, cancel_by_tenant, cancel_by_traveler, cancel_for_expiry,
    confirm_payment, create_booking, expire_unpaid, mark_completed, send_checkin_reminders,
    send_reminder, ConfirmAction, CreateRequest, ExpireResult, ProofUpload, ReminderResult,
};
