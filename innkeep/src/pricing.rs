//! The pricing calculator.
//!
//! Computes the total price of a stay as the sum of nightly effective
//! prices. Each night starts from the room's base price; every
//! adjustment covering that night contributes a delta computed against
//! the base (adjustments never compound on each other's result), the
//! deltas are summed in, and the nightly price floors at zero. All
//! arithmetic is integer minor units.

use rusqlite::Connection;

use crate::database::Database;
use crate::error::{Error, Result};
use crate::money::Money;
use crate::room::{AdjustmentKind, PriceAdjustment, Room};
use crate::stay::StayRange;

/// Computes the effective price of a single night.
///
/// Adjustments apply in slice order; the database layer hands them over
/// in ascending identifier order, which is the documented deterministic
/// order. Because every delta is taken against the base price, the
/// order only matters for reproducibility, not the result.
///
/// Accumulation saturates at the `i64` bounds instead of overflowing;
/// a saturated nightly price is then caught by the stay total's checked
/// sum.
#[must_use]
pub fn nightly_price(
    base: Money,
    night: chrono::NaiveDate,
    adjustments: &[PriceAdjustment],
) -> Money {
    let mut price = base;
    for adjustment in adjustments.iter().filter(|a| a.applies_to(night)) {
        let delta = match adjustment.kind {
            AdjustmentKind::Percentage => base.percent_delta(adjustment.value),
            AdjustmentKind::Nominal => Money::new(adjustment.value),
        };
        price = price.saturating_add(delta);
    }
    price.floor_zero()
}

/// Computes the total price of a stay from already-loaded adjustments.
///
/// # Errors
///
/// Returns a validation error if the total overflows `i64`, which can
/// only happen with absurd adjustment values.
pub fn total_for_stay(room: &Room, stay: StayRange, adjustments: &[PriceAdjustment]) -> Result<Money> {
    let mut total = Money::ZERO;
    for night in stay.iter_nights() {
        let nightly = nightly_price(room.base_price, night, adjustments);
        total = total
            .checked_add(nightly)
            .ok_or_else(|| Error::validation("total_price", "total price overflows"))?;
    }
    Ok(total)
}

/// Computes the total price of a stay against current database state.
///
/// # Errors
///
/// Returns a database error if loading the adjustments fails, or a
/// validation error on overflow.
pub fn quote(conn: &Connection, room: &Room, stay: StayRange) -> Result<Money> {
    let adjustments = Database::list_adjustments_overlapping(conn, room.id, stay)?;
    total_for_stay(room, stay, &adjustments)
}
