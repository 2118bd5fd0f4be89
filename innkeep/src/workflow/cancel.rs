//! Booking cancellation.
//!
//! Cancellation is only legal from `WAITING_PAYMENT` with no proof
//! attached; a cancelled booking releases its inventory immediately
//! because the availability check only counts active bookings.

use rusqlite::Transaction;

use crate::booking::Booking;
use crate::database::Database;
use crate::error::Result;
use crate::status::BookingEvent;

/// The shared guard-and-update, run inside the caller's transaction.
fn cancel_in_tx(tx: &Transaction<'_>, booking: &Booking) -> Result<()> {
    let has_proof = Database::get_payment_proof(tx, booking.id())?.is_some();
    let next = booking.status().apply(BookingEvent::Cancel, has_proof)?;
    Database::update_booking_status(tx, booking.id(), next)?;
    Ok(())
}

/// Cancels a booking on behalf of the traveler who owns it.
///
/// # Errors
///
/// - `NotFound` if the booking does not exist or is not the traveler's
/// - `Conflict` if the booking is past `WAITING_PAYMENT` or has a proof
///   attached
pub fn cancel_by_traveler(db: &mut Database, traveler_id: i64, booking_id: i64) -> Result<Booking> {
    let tx = db.begin_transaction()?;
    let booking = super::load_booking(&tx, booking_id)?;
    super::authorize_traveler(&booking, traveler_id)?;
    cancel_in_tx(&tx, &booking)?;
    tx.commit()?;

    log::debug!("booking {booking_id} cancelled by traveler {traveler_id}");
    super::load_booking(db.connection(), booking_id)
}

/// Cancels a booking on behalf of the tenant whose property it is on.
///
/// # Errors
///
/// - `NotFound` if the booking does not exist or is not on the tenant's
///   property
/// - `Conflict` if the booking is past `WAITING_PAYMENT` or has a proof
///   attached
pub fn cancel_by_tenant(db: &mut Database, tenant_id: i64, booking_id: i64) -> Result<Booking> {
    let tx = db.begin_transaction()?;
    let booking = super::load_booking(&tx, booking_id)?;
    super::authorize_tenant(&tx, &booking, tenant_id)?;
    cancel_in_tx(&tx, &booking)?;
    tx.commit()?;

    log::debug!("booking {booking_id} cancelled by tenant {tenant_id}");
    super::load_booking(db.connection(), booking_id)
}

/// Cancels an unpaid booking on behalf of the expiry scheduler.
///
/// No actor check; the scheduler acts with system authority. The
/// lifecycle guard still applies, so a booking that advanced between
/// the overdue scan and this call is left untouched.
///
/// # Errors
///
/// - `NotFound` if the booking no longer exists
/// - `Conflict` if the booking is no longer cancellable
pub fn cancel_for_expiry(db: &mut Database, booking_id: i64) -> Result<Booking> {
    let tx = db.begin_transaction()?;
    let booking = super::load_booking(&tx, booking_id)?;
    cancel_in_tx(&tx, &booking)?;
    tx.commit()?;

    log::debug!("booking {booking_id} cancelled: payment deadline passed");
    super::load_booking(db.connection(), booking_id)
}
