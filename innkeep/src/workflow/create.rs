//! Booking creation.

use chrono::Utc;

use crate::availability;
use crate::booking::Booking;
use crate::config::Config;
use crate::database::Database;
use crate::error::{Error, Result};
use crate::pricing;
use crate::stay::StayRange;

/// A request to create a booking.
#[derive(Debug, Clone)]
pub struct CreateRequest {
    /// The traveler creating the booking.
    pub traveler_id: i64,
    /// The property the traveler believes the room belongs to.
    pub property_id: i64,
    /// The room to book.
    pub room_id: i64,
    /// The requested stay.
    pub stay: StayRange,
    /// Number of guests.
    pub guest_count: u32,
}

/// Creates a booking in `WAITING_PAYMENT`.
///
/// Inside one IMMEDIATE transaction: loads the room, verifies it belongs
/// to the requested property, runs the availability check, prices the
/// stay, and inserts the booking with `payment_due_at = now + SLA`.
/// The check and the insert committing together is what makes
/// overselling impossible under concurrent requests.
///
/// # Errors
///
/// - `NotFound` if the room does not exist or belongs to a different
///   property
/// - `Validation` if the guest count is zero or exceeds the room's
///   capacity
/// - `Conflict` if the stay is inadmissible
pub fn create_booking(db: &mut Database, config: &Config, request: &CreateRequest) -> Result<Booking> {
    let tx = db.begin_transaction()?;

    let room = Database::get_room(&tx, request.room_id)?
        .ok_or_else(|| Error::not_found(format!("room {}", request.room_id)))?;
    if room.property_id != request.property_id {
        return Err(Error::not_found(format!("room {}", request.room_id)));
    }
    let property = Database::get_property(&tx, room.property_id)?
        .ok_or_else(|| Error::not_found(format!("property {}", room.property_id)))?;

    if request.guest_count == 0 {
        return Err(Error::validation(
            "guest_count",
            "a booking must have at least one guest",
        ));
    }
    if request.guest_count > room.max_guests {
        return Err(Error::validation(
            "guest_count",
            format!("room holds at most {} guests", room.max_guests),
        ));
    }

    availability::check_admissible(&tx, &room, request.stay)?;
    let total = pricing::quote(&tx, &room, request.stay)?;

    let now = Utc::now();
    let booking = Booking::builder(room.id, request.traveler_id, request.stay)
        .property_id(room.property_id)
        .guest_count(request.guest_count)
        .total_price(total)
        .currency(property.currency)
        .created_at(now)
        .payment_due_at(now + config.payment_sla())
        .build()?;

    let id = Database::insert_booking(&tx, &booking)?;
    tx.commit()?;

    log::debug!(
        "created booking {id} for room {} over {} at {total}",
        room.id,
        request.stay
    );

    // re-read rather than patching the id in, so callers always see
    // exactly what was persisted
    super::load_booking(db.connection(), id)
}
