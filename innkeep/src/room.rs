//! Catalog types: properties, rooms, availability overrides, and price
//! adjustments.
//!
//! The booking engine reads these; catalog management writes them. A room
//! is a bookable unit *type* within a property, with a finite count of
//! simultaneous units.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::money::Money;

/// A property owned by a tenant, grouping one or more rooms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    /// Property identifier.
    pub id: i64,
    /// The owning tenant's identifier.
    pub tenant_id: i64,
    /// Display name.
    pub name: String,
    /// ISO currency code all of this property's prices are quoted in.
    pub currency: String,
}

/// A bookable room type within a property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    /// Room identifier.
    pub id: i64,
    /// The owning property's identifier.
    pub property_id: i64,
    /// Number of simultaneous units of this room type. Always ≥ 1.
    pub total_units: u32,
    /// Base nightly price in minor units.
    pub base_price: Money,
    /// Maximum guests per unit.
    pub max_guests: u32,
}

impl Room {
    /// Creates a room, validating its capacity invariants.
    ///
    /// # Errors
    ///
    /// Returns an error if `total_units` or `max_guests` is zero.
    pub fn new(
        id: i64,
        property_id: i64,
        total_units: u32,
        base_price: Money,
        max_guests: u32,
    ) -> Result<Self, Error> {
        if total_units == 0 {
            return Err(Error::validation(
                "total_units",
                "a room must have at least one unit",
            ));
        }
        if max_guests == 0 {
            return Err(Error::validation(
                "max_guests",
                "a room must accommodate at least one guest",
            ));
        }
        Ok(Self {
            id,
            property_id,
            total_units,
            base_price,
            max_guests,
        })
    }
}

/// A per-date availability record for a room.
///
/// At most one override exists per (room, date). Absence means
/// "available, full unit count". An override with `available = false`
/// blocks the night entirely, regardless of capacity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityOverride {
    /// The room this override applies to.
    pub room_id: i64,
    /// The calendar night affected.
    pub date: NaiveDate,
    /// Whether the night can be booked at all.
    pub available: bool,
    /// Optional reduced unit count for the night.
    pub units_override: Option<u32>,
    /// Optional free-form note (maintenance, private event, ...).
    pub note: Option<String>,
}

/// The kind of a price adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AdjustmentKind {
    /// Adjusts by a percentage of the base price.
    Percentage,
    /// Adjusts by a fixed signed amount in minor units.
    Nominal,
}

impl AdjustmentKind {
    /// Returns the canonical storage string for this kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Percentage => "PERCENTAGE",
            Self::Nominal => "NOMINAL",
        }
    }

    /// Parses a kind from its storage string.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a known kind.
    pub fn parse(s: &str) -> Result<Self, String> {
        match s {
            "PERCENTAGE" => Ok(Self::Percentage),
            "NOMINAL" => Ok(Self::Nominal),
            _ => Err(format!("unknown adjustment kind: {s}")),
        }
    }
}

/// A date-bounded price adjustment attached to a room.
///
/// The `[start_date, end_date]` range is inclusive on both ends.
/// Adjustments are read-only to the engine; catalog management owns
/// their lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceAdjustment {
    /// Adjustment identifier; also the deterministic application order.
    pub id: i64,
    /// The room this adjustment applies to.
    pub room_id: i64,
    /// First night the adjustment covers (inclusive).
    pub start_date: NaiveDate,
    /// Last night the adjustment covers (inclusive).
    pub end_date: NaiveDate,
    /// Percentage or nominal.
    pub kind: AdjustmentKind,
    /// Signed value: percent points for `Percentage`, minor units for
    /// `Nominal`. Negative values are discounts.
    pub value: i64,
}

impl PriceAdjustment {
    /// Whether this adjustment covers the given night.
    #[must_use]
    pub fn applies_to(&self, night: NaiveDate) -> bool {
        self.start_date <= night && night <= self.end_date
    }
}
