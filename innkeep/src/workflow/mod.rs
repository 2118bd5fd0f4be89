//! The reservation workflow.
//!
//! This module orchestrates the availability checker, pricing
//! calculator, and booking state machine into the operations callers
//! actually invoke: create, attach payment proof, confirm or reject
//! payment, cancel, complete, and the scheduled expiry/reminder sweeps.
//!
//! Every operation is one atomic unit of work: all guards are
//! re-evaluated against current state inside an IMMEDIATE transaction,
//! and either every effect commits or none does. Notifications fire
//! after commit and never affect the outcome.
//!
//! Authorization is deliberately coarse: a traveler may only touch
//! their own bookings, a tenant only bookings on their own properties,
//! and either failure surfaces as `NotFound` so callers cannot probe
//! for the existence of other people's bookings.

mod cancel;
mod complete;
mod create;
mod payment;
mod scheduler;

pub use cancel::{cancel_by_tenant, cancel_by_traveler, cancel_for_expiry};
pub use complete::mark_completed;
pub use create::{create_booking, CreateRequest};
pub use payment::{attach_payment_proof, confirm_payment, ConfirmAction, ProofUpload};
pub use scheduler::{
    expire_unpaid, send_checkin_reminders, send_reminder, ExpireResult, ReminderResult,
};

use rusqlite::Connection;

use crate::booking::Booking;
use crate::database::Database;
use crate::error::{Error, Result};

/// Checks that the actor is the traveler who owns the booking.
///
/// Fails as `NotFound` rather than a permission error.
fn authorize_traveler(booking: &Booking, traveler_id: i64) -> Result<()> {
    if booking.traveler_id() == traveler_id {
        Ok(())
    } else {
        Err(Error::not_found(format!("booking {}", booking.id())))
    }
}

/// Checks that the actor owns the property the booking sits on.
///
/// Fails as `NotFound` rather than a permission error.
fn authorize_tenant(conn: &Connection, booking: &Booking, tenant_id: i64) -> Result<()> {
    let property = Database::get_property(conn, booking.property_id())?
        .ok_or_else(|| Error::not_found(format!("booking {}", booking.id())))?;
    if property.tenant_id == tenant_id {
        Ok(())
    } else {
        Err(Error::not_found(format!("booking {}", booking.id())))
    }
}

/// Loads a booking or fails as `NotFound`.
fn load_booking(conn: &Connection, booking_id: i64) -> Result<Booking> {
    Database::get_booking(conn, booking_id)?
        .ok_or_else(|| Error::not_found(format!("booking {booking_id}")))
}
