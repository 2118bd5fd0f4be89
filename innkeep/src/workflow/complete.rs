//! Marking stays completed.

use crate::booking::Booking;
use crate::database::Database;
use crate::error::Result;
use crate::status::BookingEvent;

/// Marks a `PROCESSING` booking `COMPLETED` after check-out.
///
/// # Errors
///
/// - `NotFound` if the booking does not exist or is not on the tenant's
///   property
/// - `Conflict` if the booking is not in `PROCESSING`
pub fn mark_completed(db: &mut Database, tenant_id: i64, booking_id: i64) -> Result<Booking> {
    let tx = db.begin_transaction()?;
    let booking = super::load_booking(&tx, booking_id)?;
    super::authorize_tenant(&tx, &booking, tenant_id)?;

    let has_proof = Database::get_payment_proof(&tx, booking_id)?.is_some();
    let next = booking.status().apply(BookingEvent::Complete, has_proof)?;
    Database::update_booking_status(&tx, booking_id, next)?;
    tx.commit()?;

    log::debug!("booking {booking_id} marked completed");
    super::load_booking(db.connection(), booking_id)
}
