//! The availability checker.
//!
//! Decides whether a stay is admissible for a room: no night may be
//! explicitly blocked, and the count of active bookings overlapping the
//! requested interval must stay below the room's unit count.
//!
//! The capacity rule is deliberately coarse: it compares the count of
//! bookings overlapping the interval as a whole against `total_units`,
//! not per-night occupancy. A set of pairwise-disjoint stays that each
//! overlap the request can therefore exhaust capacity early. Callers
//! depend on this exact behavior; do not tighten it to a night-by-night
//! count.

use chrono::NaiveDate;
use rusqlite::Connection;

use crate::database::Database;
use crate::error::{Error, Result};
use crate::room::{AvailabilityOverride, Room};
use crate::stay::StayRange;

/// Why a stay was refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inadmissible {
    /// A night in the range carries an `available = false` override.
    BlockedNight {
        /// The first blocked night found.
        date: NaiveDate,
    },
    /// The overlap count has reached the room's unit count.
    FullyBooked {
        /// Active bookings overlapping the requested range.
        active: u32,
        /// The room's capacity.
        total_units: u32,
    },
}

impl Inadmissible {
    /// The caller-facing reason string.
    #[must_use]
    pub fn reason(&self) -> String {
        match self {
            Self::BlockedNight { .. } => "not available on selected dates".to_string(),
            Self::FullyBooked { .. } => "fully booked".to_string(),
        }
    }
}

impl From<Inadmissible> for Error {
    fn from(inadmissible: Inadmissible) -> Self {
        Self::Conflict {
            details: inadmissible.reason(),
        }
    }
}

/// Decides admissibility from already-loaded state.
///
/// `overrides` are the room's per-date records for the nights of the
/// stay; `active_overlap` is the count of non-cancelled bookings whose
/// stay overlaps the requested one.
///
/// # Errors
///
/// Returns the first violated rule: a blocked night wins over a full
/// room, matching the order the checks are specified in.
pub fn evaluate(
    room: &Room,
    stay: StayRange,
    overrides: &[AvailabilityOverride],
    active_overlap: u32,
) -> std::result::Result<(), Inadmissible> {
    for night in stay.iter_nights() {
        let blocked = overrides
            .iter()
            .any(|o| o.date == night && !o.available);
        if blocked {
            return Err(Inadmissible::BlockedNight { date: night });
        }
    }

    if active_overlap >= room.total_units {
        return Err(Inadmissible::FullyBooked {
            active: active_overlap,
            total_units: room.total_units,
        });
    }

    Ok(())
}

/// Checks admissibility against current database state.
///
/// Run this inside the same IMMEDIATE transaction as the booking insert;
/// on its own connection the answer can be stale by the time a booking
/// is written.
///
/// # Errors
///
/// Returns `Conflict` if the stay is inadmissible, or a database error
/// if the lookups fail.
pub fn check_admissible(conn: &Connection, room: &Room, stay: StayRange) -> Result<()> {
    let overrides = Database::get_overrides_in_range(conn, room.id, stay)?;
    let active = Database::count_overlapping_active(conn, room.id, stay)?;
    evaluate(room, stay, &overrides, active).map_err(Error::from)
}
