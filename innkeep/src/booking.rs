//! Booking records and payment proofs.
//!
//! This module provides the booking aggregate: the stay a traveler holds
//! on a room, its lifecycle status, and the payment proof that (at most
//! once) accompanies it.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::status::BookingStatus;
use crate::stay::StayRange;

/// A traveler's hold on a room over a stay range.
///
/// Bookings are created in `WAITING_PAYMENT` and advance through the
/// lifecycle state machine; every non-cancelled booking counts against
/// its room's unit pool for its entire stay. The property identifier is
/// denormalized onto the booking so tenant authorization never needs a
/// join.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use innkeep::{Booking, Money, StayRange};
///
/// let stay = StayRange::new(
///     NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2026, 9, 4).unwrap(),
/// ).unwrap();
///
/// let booking = Booking::builder(7, 42, stay)
///     .property_id(3)
///     .guest_count(2)
///     .total_price(Money::new(2_550_000))
///     .currency("IDR")
///     .build()
///     .unwrap();
///
/// assert_eq!(booking.guest_count(), 2);
/// assert!(booking.status().is_active());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    id: i64,
    room_id: i64,
    property_id: i64,
    traveler_id: i64,
    stay: StayRange,
    guest_count: u32,
    total_price: Money,
    currency: String,
    status: BookingStatus,
    payment_due_at: DateTime<Utc>,
    created_at: DateTime<Utc>,
    reminder_sent_at: Option<DateTime<Utc>>,
}

impl Booking {
    /// Creates a new booking builder.
    ///
    /// `id` may be zero for a booking not yet persisted; the database
    /// assigns the real identifier on insert. Unless set explicitly,
    /// `payment_due_at` defaults to one hour after creation.
    #[must_use]
    pub fn builder(room_id: i64, traveler_id: i64, stay: StayRange) -> BookingBuilder {
        BookingBuilder {
            id: 0,
            room_id,
            property_id: 0,
            traveler_id,
            stay,
            guest_count: 1,
            total_price: Money::ZERO,
            currency: None,
            status: BookingStatus::WaitingPayment,
            payment_due_at: None,
            created_at: None,
            reminder_sent_at: None,
        }
    }

    /// Returns the booking identifier.
    #[must_use]
    pub const fn id(&self) -> i64 {
        self.id
    }

    /// Returns the booked room's identifier.
    #[must_use]
    pub const fn room_id(&self) -> i64 {
        self.room_id
    }

    /// Returns the identifier of the property the room belongs to.
    #[must_use]
    pub const fn property_id(&self) -> i64 {
        self.property_id
    }

    /// Returns the traveler's identifier.
    #[must_use]
    pub const fn traveler_id(&self) -> i64 {
        self.traveler_id
    }

    /// Returns the stay range.
    #[must_use]
    pub const fn stay(&self) -> StayRange {
        self.stay
    }

    /// Returns the number of guests.
    #[must_use]
    pub const fn guest_count(&self) -> u32 {
        self.guest_count
    }

    /// Returns the total price locked in at creation.
    #[must_use]
    pub const fn total_price(&self) -> Money {
        self.total_price
    }

    /// Returns the currency code the total is quoted in.
    #[must_use]
    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> BookingStatus {
        self.status
    }

    /// Returns the payment deadline.
    ///
    /// The expiry scheduler cancels `WAITING_PAYMENT` bookings past this
    /// timestamp.
    #[must_use]
    pub const fn payment_due_at(&self) -> DateTime<Utc> {
        self.payment_due_at
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns when a check-in reminder was sent, if one was.
    #[must_use]
    pub const fn reminder_sent_at(&self) -> Option<DateTime<Utc>> {
        self.reminder_sent_at
    }

    /// Checks if the booking has blown its payment deadline.
    ///
    /// Only meaningful for `WAITING_PAYMENT` bookings; the expiry
    /// scheduler cancels those that answer `true`.
    #[must_use]
    pub fn is_payment_overdue(&self, now: DateTime<Utc>) -> bool {
        self.status == BookingStatus::WaitingPayment && now > self.payment_due_at
    }
}

/// Builder for creating `Booking` instances.
#[derive(Debug)]
pub struct BookingBuilder {
    id: i64,
    room_id: i64,
    property_id: i64,
    traveler_id: i64,
    stay: StayRange,
    guest_count: u32,
    total_price: Money,
    currency: Option<String>,
    status: BookingStatus,
    payment_due_at: Option<DateTime<Utc>>,
    created_at: Option<DateTime<Utc>>,
    reminder_sent_at: Option<DateTime<Utc>>,
}

impl BookingBuilder {
    /// Sets the persisted identifier.
    #[must_use]
    pub const fn id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    /// Sets the owning property's identifier.
    #[must_use]
    pub const fn property_id(mut self, property_id: i64) -> Self {
        self.property_id = property_id;
        self
    }

    /// Sets the guest count.
    #[must_use]
    pub const fn guest_count(mut self, guest_count: u32) -> Self {
        self.guest_count = guest_count;
        self
    }

    /// Sets the locked-in total price.
    #[must_use]
    pub const fn total_price(mut self, total_price: Money) -> Self {
        self.total_price = total_price;
        self
    }

    /// Sets the currency code.
    #[must_use]
    pub fn currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = Some(currency.into());
        self
    }

    /// Sets the lifecycle status.
    #[must_use]
    pub const fn status(mut self, status: BookingStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the payment deadline.
    #[must_use]
    pub fn payment_due_at(mut self, at: DateTime<Utc>) -> Self {
        self.payment_due_at = Some(at);
        self
    }

    /// Sets the creation timestamp.
    #[must_use]
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Sets the reminder timestamp.
    #[must_use]
    pub fn reminder_sent_at(mut self, at: Option<DateTime<Utc>>) -> Self {
        self.reminder_sent_at = at;
        self
    }

    /// Builds the booking.
    ///
    /// # Errors
    ///
    /// Returns an error if the guest count is zero.
    pub fn build(self) -> crate::error::Result<Booking> {
        if self.guest_count == 0 {
            return Err(crate::error::Error::validation(
                "guest_count",
                "a booking must have at least one guest",
            ));
        }

        let created_at = self.created_at.unwrap_or_else(Utc::now);
        Ok(Booking {
            id: self.id,
            room_id: self.room_id,
            property_id: self.property_id,
            traveler_id: self.traveler_id,
            stay: self.stay,
            guest_count: self.guest_count,
            total_price: self.total_price,
            currency: self.currency.unwrap_or_else(|| "IDR".to_string()),
            status: self.status,
            payment_due_at: self
                .payment_due_at
                .unwrap_or(created_at + Duration::hours(1)),
            created_at,
            reminder_sent_at: self.reminder_sent_at,
        })
    }
}

/// A payment proof uploaded by a traveler.
///
/// At most one proof exists per booking; uploading it moves the booking
/// to `WAITING_CONFIRMATION`. A rejected proof is deleted so the
/// traveler can upload a corrected one; an approved proof gets its
/// `verified_at` stamped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentProof {
    /// The booking this proof belongs to.
    pub booking_id: i64,
    /// Opaque reference to the uploaded file (path, object key, ...).
    pub file_ref: String,
    /// MIME type reported by proof storage.
    pub mime_type: String,
    /// The filename the traveler uploaded under.
    pub original_filename: String,
    /// When the proof was uploaded.
    pub uploaded_at: DateTime<Utc>,
    /// When the tenant approved the proof; unset until approval.
    pub verified_at: Option<DateTime<Utc>>,
}
