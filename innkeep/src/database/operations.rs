//! Database CRUD operations for the catalog and bookings.
//!
//! This module implements all create, read, update, and delete operations
//! for properties, rooms, availability overrides, price adjustments,
//! bookings, and payment proofs.
//!
//! Most functions here are associated functions taking a `&Connection`,
//! so they compose inside a caller-owned transaction; the `&mut self`
//! wrappers open their own IMMEDIATE transaction for standalone use.

use chrono::{DateTime, NaiveDate, Utc};
use rusqlite::{params, Connection, OptionalExtension, TransactionBehavior};

use crate::booking::{Booking, PaymentProof};
use crate::error::Result;
use crate::money::Money;
use crate::room::{AdjustmentKind, AvailabilityOverride, PriceAdjustment, Property, Room};
use crate::status::BookingStatus;
use crate::stay::StayRange;

use super::connection::Database;
use super::schema::{DELETE_PROOF, INSERT_BOOKING, INSERT_PROOF};

/// Formats a date for database storage.
///
/// ISO-8601 text compares correctly as strings, which the overlap and
/// range queries rely on.
pub(super) fn date_to_text(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Parses a stored ISO-8601 date.
fn text_to_date(s: &str) -> rusqlite::Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))
}

/// Converts stored Unix epoch seconds to a UTC timestamp.
fn unix_secs_to_datetime(secs: i64) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::from_timestamp(secs, 0).ok_or_else(|| {
        rusqlite::Error::ToSqlConversionFailure(
            format!("timestamp out of range: {secs}").into(),
        )
    })
}

fn row_to_property(row: &rusqlite::Row<'_>) -> rusqlite::Result<Property> {
    Ok(Property {
        id: row.get(0)?,
        tenant_id: row.get(1)?,
        name: row.get(2)?,
        currency: row.get(3)?,
    })
}

fn row_to_room(row: &rusqlite::Row<'_>) -> rusqlite::Result<Room> {
    Ok(Room {
        id: row.get(0)?,
        property_id: row.get(1)?,
        total_units: row.get(2)?,
        base_price: Money::new(row.get(3)?),
        max_guests: row.get(4)?,
    })
}

fn row_to_override(row: &rusqlite::Row<'_>) -> rusqlite::Result<AvailabilityOverride> {
    let date_text: String = row.get(1)?;
    Ok(AvailabilityOverride {
        room_id: row.get(0)?,
        date: text_to_date(&date_text)?,
        available: row.get(2)?,
        units_override: row.get(3)?,
        note: row.get(4)?,
    })
}

fn row_to_adjustment(row: &rusqlite::Row<'_>) -> rusqlite::Result<PriceAdjustment> {
    let start_text: String = row.get(2)?;
    let end_text: String = row.get(3)?;
    let kind_text: String = row.get(4)?;
    Ok(PriceAdjustment {
        id: row.get(0)?,
        room_id: row.get(1)?,
        start_date: text_to_date(&start_text)?,
        end_date: text_to_date(&end_text)?,
        kind: AdjustmentKind::parse(&kind_text)
            .map_err(|e| rusqlite::Error::ToSqlConversionFailure(e.into()))?,
        value: row.get(5)?,
    })
}

/// Helper function to deserialize a booking from a database row.
///
/// Expects row fields in this order: id, `room_id`, `property_id`,
/// `traveler_id`, `check_in`, `check_out`, `guest_count`, `total_price`,
/// currency, status, `payment_due_at`, `created_at`, `reminder_sent_at`.
fn row_to_booking(row: &rusqlite::Row<'_>) -> rusqlite::Result<Booking> {
    let check_in_text: String = row.get(4)?;
    let check_out_text: String = row.get(5)?;
    let currency: String = row.get(8)?;
    let status_text: String = row.get(9)?;
    let due_secs: i64 = row.get(10)?;
    let created_secs: i64 = row.get(11)?;
    let reminder_secs: Option<i64> = row.get(12)?;

    let stay = StayRange::new(text_to_date(&check_in_text)?, text_to_date(&check_out_text)?)
        .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;
    let status = BookingStatus::parse(&status_text)
        .map_err(|e| rusqlite::Error::ToSqlConversionFailure(e.into()))?;
    let reminder_sent_at = reminder_secs.map(unix_secs_to_datetime).transpose()?;

    Booking::builder(row.get(1)?, row.get(3)?, stay)
        .id(row.get(0)?)
        .property_id(row.get(2)?)
        .guest_count(row.get(6)?)
        .total_price(Money::new(row.get(7)?))
        .currency(currency)
        .status(status)
        .payment_due_at(unix_secs_to_datetime(due_secs)?)
        .created_at(unix_secs_to_datetime(created_secs)?)
        .reminder_sent_at(reminder_sent_at)
        .build()
        .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))
}

// SQL statements for CRUD operations
const SELECT_BOOKING_COLUMNS: &str = r"
    SELECT id, room_id, property_id, traveler_id, check_in, check_out,
           guest_count, total_price, currency, status,
           payment_due_at, created_at, reminder_sent_at
    FROM bookings
";

const COUNT_OVERLAPPING_ACTIVE: &str = r"
    SELECT COUNT(*)
    FROM bookings
    WHERE room_id = ?
      AND status != 'CANCELLED'
      AND check_in < ?
      AND check_out > ?
";

const SELECT_OVERRIDES_IN_RANGE: &str = r"
    SELECT room_id, date, available, units_override, note
    FROM availability_overrides
    WHERE room_id = ? AND date >= ? AND date < ?
    ORDER BY date
";

const SELECT_ADJUSTMENTS_OVERLAPPING: &str = r"
    SELECT id, room_id, start_date, end_date, kind, value
    FROM price_adjustments
    WHERE room_id = ? AND start_date < ? AND end_date >= ?
    ORDER BY id
";

impl Database {
    /// Inserts a property, returning its assigned identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn insert_property(conn: &Connection, property: &Property) -> Result<i64> {
        conn.execute(
            "INSERT INTO properties (tenant_id, name, currency) VALUES (?, ?, ?)",
            params![property.tenant_id, property.name, property.currency],
        )?;
        Ok(conn.last_insert_rowid())
    }

    /// Retrieves a property by identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails (other than "not found").
    pub fn get_property(conn: &Connection, id: i64) -> Result<Option<Property>> {
        Ok(conn
            .query_row(
                "SELECT id, tenant_id, name, currency FROM properties WHERE id = ?",
                params![id],
                row_to_property,
            )
            .optional()?)
    }

    /// Lists all properties.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_properties(conn: &Connection) -> Result<Vec<Property>> {
        let mut stmt =
            conn.prepare("SELECT id, tenant_id, name, currency FROM properties ORDER BY id")?;
        let rows = stmt.query_map([], row_to_property)?;
        rows.collect::<rusqlite::Result<Vec<_>>>().map_err(Into::into)
    }

    /// Inserts a room, returning its assigned identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails (e.g. unknown property).
    pub fn insert_room(conn: &Connection, room: &Room) -> Result<i64> {
        conn.execute(
            "INSERT INTO rooms (property_id, total_units, base_price, max_guests)
             VALUES (?, ?, ?, ?)",
            params![
                room.property_id,
                room.total_units,
                room.base_price.minor_units(),
                room.max_guests
            ],
        )?;
        Ok(conn.last_insert_rowid())
    }

    /// Retrieves a room by identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails (other than "not found").
    pub fn get_room(conn: &Connection, id: i64) -> Result<Option<Room>> {
        Ok(conn
            .query_row(
                "SELECT id, property_id, total_units, base_price, max_guests
                 FROM rooms WHERE id = ?",
                params![id],
                row_to_room,
            )
            .optional()?)
    }

    /// Lists all rooms of a property.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_rooms(conn: &Connection, property_id: i64) -> Result<Vec<Room>> {
        let mut stmt = conn.prepare(
            "SELECT id, property_id, total_units, base_price, max_guests
             FROM rooms WHERE property_id = ? ORDER BY id",
        )?;
        let rows = stmt.query_map(params![property_id], row_to_room)?;
        rows.collect::<rusqlite::Result<Vec<_>>>().map_err(Into::into)
    }

    /// Inserts or replaces a per-date availability override.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn upsert_override(conn: &Connection, record: &AvailabilityOverride) -> Result<()> {
        conn.execute(
            "INSERT OR REPLACE INTO availability_overrides
             (room_id, date, available, units_override, note)
             VALUES (?, ?, ?, ?, ?)",
            params![
                record.room_id,
                date_to_text(record.date),
                record.available,
                record.units_override,
                record.note
            ],
        )?;
        Ok(())
    }

    /// Fetches a room's availability overrides for the nights of a stay.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_overrides_in_range(
        conn: &Connection,
        room_id: i64,
        stay: StayRange,
    ) -> Result<Vec<AvailabilityOverride>> {
        let mut stmt = conn.prepare(SELECT_OVERRIDES_IN_RANGE)?;
        let rows = stmt.query_map(
            params![
                room_id,
                date_to_text(stay.check_in()),
                date_to_text(stay.check_out())
            ],
            row_to_override,
        )?;
        rows.collect::<rusqlite::Result<Vec<_>>>().map_err(Into::into)
    }

    /// Inserts a price adjustment, returning its assigned identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn insert_adjustment(conn: &Connection, adjustment: &PriceAdjustment) -> Result<i64> {
        conn.execute(
            "INSERT INTO price_adjustments (room_id, start_date, end_date, kind, value)
             VALUES (?, ?, ?, ?, ?)",
            params![
                adjustment.room_id,
                date_to_text(adjustment.start_date),
                date_to_text(adjustment.end_date),
                adjustment.kind.as_str(),
                adjustment.value
            ],
        )?;
        Ok(conn.last_insert_rowid())
    }

    /// Fetches a room's price adjustments that touch any night of a stay,
    /// in ascending identifier order.
    ///
    /// The identifier order is the deterministic application order for
    /// adjustments covering the same night.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_adjustments_overlapping(
        conn: &Connection,
        room_id: i64,
        stay: StayRange,
    ) -> Result<Vec<PriceAdjustment>> {
        let mut stmt = conn.prepare(SELECT_ADJUSTMENTS_OVERLAPPING)?;
        let rows = stmt.query_map(
            params![
                room_id,
                date_to_text(stay.check_out()),
                date_to_text(stay.check_in())
            ],
            row_to_adjustment,
        )?;
        rows.collect::<rusqlite::Result<Vec<_>>>().map_err(Into::into)
    }

    /// Inserts a booking, returning its assigned identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn insert_booking(conn: &Connection, booking: &Booking) -> Result<i64> {
        conn.execute(
            INSERT_BOOKING,
            params![
                booking.room_id(),
                booking.property_id(),
                booking.traveler_id(),
                date_to_text(booking.stay().check_in()),
                date_to_text(booking.stay().check_out()),
                booking.guest_count(),
                booking.total_price().minor_units(),
                booking.currency(),
                booking.status().as_str(),
                booking.payment_due_at().timestamp(),
                booking.created_at().timestamp(),
                booking.reminder_sent_at().map(|t| t.timestamp()),
            ],
        )?;
        Ok(conn.last_insert_rowid())
    }

    /// Retrieves a booking by identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails (other than "not found").
    ///
    /// # Returns
    ///
    /// - `Ok(Some(booking))` if the booking exists
    /// - `Ok(None)` if the booking doesn't exist
    /// - `Err(_)` if a database error occurs
    pub fn get_booking(conn: &Connection, id: i64) -> Result<Option<Booking>> {
        let sql = format!("{SELECT_BOOKING_COLUMNS} WHERE id = ?");
        Ok(conn
            .query_row(&sql, params![id], row_to_booking)
            .optional()?)
    }

    /// Lists all bookings, ordered by identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_bookings(conn: &Connection) -> Result<Vec<Booking>> {
        let sql = format!("{SELECT_BOOKING_COLUMNS} ORDER BY id");
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt.query_map([], row_to_booking)?;
        rows.collect::<rusqlite::Result<Vec<_>>>().map_err(Into::into)
    }

    /// Lists a room's bookings, ordered by identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_bookings_for_room(conn: &Connection, room_id: i64) -> Result<Vec<Booking>> {
        let sql = format!("{SELECT_BOOKING_COLUMNS} WHERE room_id = ? ORDER BY id");
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt.query_map(params![room_id], row_to_booking)?;
        rows.collect::<rusqlite::Result<Vec<_>>>().map_err(Into::into)
    }

    /// Counts non-cancelled bookings of a room whose stay overlaps the
    /// given range.
    ///
    /// This is the capacity check: overlap uses open-interval semantics,
    /// so a stay checking out the day another checks in does not count.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn count_overlapping_active(
        conn: &Connection,
        room_id: i64,
        stay: StayRange,
    ) -> Result<u32> {
        Ok(conn.query_row(
            COUNT_OVERLAPPING_ACTIVE,
            params![
                room_id,
                date_to_text(stay.check_out()),
                date_to_text(stay.check_in())
            ],
            |row| row.get(0),
        )?)
    }

    /// Updates a booking's lifecycle status.
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails.
    pub fn update_booking_status(conn: &Connection, id: i64, status: BookingStatus) -> Result<()> {
        conn.execute(
            "UPDATE bookings SET status = ? WHERE id = ?",
            params![status.as_str(), id],
        )?;
        Ok(())
    }

    /// Stamps a booking's reminder timestamp.
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails.
    pub fn set_reminder_sent(conn: &Connection, id: i64, at: DateTime<Utc>) -> Result<()> {
        conn.execute(
            "UPDATE bookings SET reminder_sent_at = ? WHERE id = ?",
            params![at.timestamp(), id],
        )?;
        Ok(())
    }

    /// Lists `WAITING_PAYMENT` bookings whose payment deadline has passed.
    ///
    /// These are the candidates for automatic expiry.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_payment_overdue(conn: &Connection, now: DateTime<Utc>) -> Result<Vec<Booking>> {
        let sql = format!(
            "{SELECT_BOOKING_COLUMNS} WHERE status = 'WAITING_PAYMENT' AND payment_due_at < ? ORDER BY payment_due_at"
        );
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt.query_map(params![now.timestamp()], row_to_booking)?;
        rows.collect::<rusqlite::Result<Vec<_>>>().map_err(Into::into)
    }

    /// Lists `PROCESSING` bookings checking in on the given date that
    /// have not yet been sent a reminder.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_reminder_due(conn: &Connection, check_in: NaiveDate) -> Result<Vec<Booking>> {
        let sql = format!(
            "{SELECT_BOOKING_COLUMNS} WHERE status = 'PROCESSING' AND check_in = ? AND reminder_sent_at IS NULL ORDER BY id"
        );
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt.query_map(params![date_to_text(check_in)], row_to_booking)?;
        rows.collect::<rusqlite::Result<Vec<_>>>().map_err(Into::into)
    }

    /// Inserts a payment proof for a booking.
    ///
    /// The schema's primary key rejects a second proof for the same
    /// booking.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn insert_payment_proof(conn: &Connection, proof: &PaymentProof) -> Result<()> {
        conn.execute(
            INSERT_PROOF,
            params![
                proof.booking_id,
                proof.file_ref,
                proof.mime_type,
                proof.original_filename,
                proof.uploaded_at.timestamp(),
                proof.verified_at.map(|t| t.timestamp()),
            ],
        )?;
        Ok(())
    }

    /// Retrieves a booking's payment proof, if one exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails (other than "not found").
    pub fn get_payment_proof(conn: &Connection, booking_id: i64) -> Result<Option<PaymentProof>> {
        Ok(conn
            .query_row(
                "SELECT booking_id, file_ref, mime_type, original_filename, uploaded_at, verified_at
                 FROM payment_proofs WHERE booking_id = ?",
                params![booking_id],
                |row| {
                    let uploaded_secs: i64 = row.get(4)?;
                    let verified_secs: Option<i64> = row.get(5)?;
                    Ok(PaymentProof {
                        booking_id: row.get(0)?,
                        file_ref: row.get(1)?,
                        mime_type: row.get(2)?,
                        original_filename: row.get(3)?,
                        uploaded_at: unix_secs_to_datetime(uploaded_secs)?,
                        verified_at: verified_secs.map(unix_secs_to_datetime).transpose()?,
                    })
                },
            )
            .optional()?)
    }

    /// Stamps a payment proof's verification timestamp.
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails.
    pub fn set_proof_verified(conn: &Connection, booking_id: i64, at: DateTime<Utc>) -> Result<()> {
        conn.execute(
            "UPDATE payment_proofs SET verified_at = ? WHERE booking_id = ?",
            params![at.timestamp(), booking_id],
        )?;
        Ok(())
    }

    /// Deletes a booking's payment proof, returning whether one existed.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    pub fn delete_payment_proof(conn: &Connection, booking_id: i64) -> Result<bool> {
        let rows = conn.execute(DELETE_PROOF, params![booking_id])?;
        Ok(rows > 0)
    }

    /// Creates a property in its own IMMEDIATE transaction.
    ///
    /// # Errors
    ///
    /// Returns an error if the transaction cannot be started or committed,
    /// or the insert fails.
    pub fn create_property(&mut self, property: &Property) -> Result<i64> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;
        let id = Self::insert_property(&tx, property)?;
        tx.commit()?;
        Ok(id)
    }

    /// Creates a room in its own IMMEDIATE transaction.
    ///
    /// # Errors
    ///
    /// Returns an error if the transaction cannot be started or committed,
    /// or the insert fails.
    pub fn create_room(&mut self, room: &Room) -> Result<i64> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;
        let id = Self::insert_room(&tx, room)?;
        tx.commit()?;
        Ok(id)
    }

    /// Sets an availability override in its own IMMEDIATE transaction.
    ///
    /// # Errors
    ///
    /// Returns an error if the transaction cannot be started or committed,
    /// or the insert fails.
    pub fn set_availability_override(&mut self, record: &AvailabilityOverride) -> Result<()> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;
        Self::upsert_override(&tx, record)?;
        tx.commit()?;
        Ok(())
    }

    /// Creates a price adjustment in its own IMMEDIATE transaction.
    ///
    /// # Errors
    ///
    /// Returns an error if the transaction cannot be started or committed,
    /// or the insert fails.
    pub fn create_price_adjustment(&mut self, adjustment: &PriceAdjustment) -> Result<i64> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;
        let id = Self::insert_adjustment(&tx, adjustment)?;
        tx.commit()?;
        Ok(id)
    }
}
