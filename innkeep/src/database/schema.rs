//! Database schema definitions and SQL constants.
//!
//! This module contains all SQL table definitions, indices, and constants
//! related to the database schema for the innkeep booking engine.

/// Current schema version for the database.
///
/// This version is stored in the metadata table and is used to ensure
/// compatibility between the database and the application.
pub const CURRENT_SCHEMA_VERSION: i32 = 1;

/// SQL statement to create the metadata table.
///
/// The metadata table stores key-value pairs for database configuration
/// and versioning information.
pub const CREATE_METADATA_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS metadata (
        key TEXT PRIMARY KEY NOT NULL,
        value TEXT NOT NULL
    )";

/// SQL statement to create the properties table.
pub const CREATE_PROPERTIES_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS properties (
        id INTEGER PRIMARY KEY,
        tenant_id INTEGER NOT NULL,
        name TEXT NOT NULL,
        currency TEXT NOT NULL
    )";

/// SQL statement to create the rooms table.
///
/// A room is a bookable unit type; `total_units` is the number of
/// simultaneous units and is kept strictly positive by the domain layer.
/// Prices are integer minor units.
pub const CREATE_ROOMS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS rooms (
        id INTEGER PRIMARY KEY,
        property_id INTEGER NOT NULL REFERENCES properties(id),
        total_units INTEGER NOT NULL,
        base_price INTEGER NOT NULL,
        max_guests INTEGER NOT NULL
    )";

/// SQL statement to create the availability overrides table.
///
/// The (`room_id`, `date`) primary key guarantees at most one override
/// per room-night. Dates are ISO-8601 text, which sorts and compares
/// correctly as strings.
pub const CREATE_OVERRIDES_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS availability_overrides (
        room_id INTEGER NOT NULL REFERENCES rooms(id),
        date TEXT NOT NULL,
        available INTEGER NOT NULL,
        units_override INTEGER,
        note TEXT,
        PRIMARY KEY (room_id, date)
    )";

/// SQL statement to create the price adjustments table.
///
/// The rowid doubles as the deterministic application order for
/// adjustments that cover the same night.
pub const CREATE_ADJUSTMENTS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS price_adjustments (
        id INTEGER PRIMARY KEY,
        room_id INTEGER NOT NULL REFERENCES rooms(id),
        start_date TEXT NOT NULL,
        end_date TEXT NOT NULL,
        kind TEXT NOT NULL,
        value INTEGER NOT NULL
    )";

/// SQL statement to create the bookings table.
///
/// `check_in`/`check_out` are ISO-8601 text; timestamps are Unix epoch
/// seconds; `status` is the canonical status string. `property_id` is
/// denormalized from the room so tenant authorization is a single read.
pub const CREATE_BOOKINGS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS bookings (
        id INTEGER PRIMARY KEY,
        room_id INTEGER NOT NULL REFERENCES rooms(id),
        property_id INTEGER NOT NULL REFERENCES properties(id),
        traveler_id INTEGER NOT NULL,
        check_in TEXT NOT NULL,
        check_out TEXT NOT NULL,
        guest_count INTEGER NOT NULL,
        total_price INTEGER NOT NULL,
        currency TEXT NOT NULL,
        status TEXT NOT NULL,
        payment_due_at INTEGER NOT NULL,
        created_at INTEGER NOT NULL,
        reminder_sent_at INTEGER
    )";

/// SQL statement to create the payment proofs table.
///
/// `booking_id` is the primary key, so the one-proof-per-booking
/// invariant is enforced by the schema itself.
pub const CREATE_PROOFS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS payment_proofs (
        booking_id INTEGER PRIMARY KEY REFERENCES bookings(id),
        file_ref TEXT NOT NULL,
        mime_type TEXT NOT NULL,
        original_filename TEXT NOT NULL,
        uploaded_at INTEGER NOT NULL,
        verified_at INTEGER
    )";

/// SQL statement to create an index over a room's bookings by status.
///
/// This index speeds up the overlap count at the heart of every
/// availability check.
pub const CREATE_BOOKINGS_ROOM_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_bookings_room_status ON bookings(room_id, status)";

/// SQL statement to create an index for the expiry scheduler.
pub const CREATE_BOOKINGS_STATUS_DUE_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_bookings_status_due ON bookings(status, payment_due_at)";

/// SQL statement to create an index for the reminder scheduler.
pub const CREATE_BOOKINGS_CHECKIN_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_bookings_check_in ON bookings(check_in)";

/// SQL statement to create an index over a room's price adjustments.
pub const CREATE_ADJUSTMENTS_ROOM_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_adjustments_room ON price_adjustments(room_id)";

/// SQL statement to select the schema version from the metadata table.
pub const SELECT_SCHEMA_VERSION: &str = "SELECT value FROM metadata WHERE key = 'schema_version'";

/// SQL statement to insert or update the schema version in the metadata table.
pub const INSERT_SCHEMA_VERSION: &str =
    "INSERT OR REPLACE INTO metadata (key, value) VALUES ('schema_version', ?)";

/// SQL statement to insert a booking.
pub const INSERT_BOOKING: &str = r"
    INSERT INTO bookings
    (room_id, property_id, traveler_id, check_in, check_out, guest_count,
     total_price, currency, status, payment_due_at, created_at, reminder_sent_at)
    VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
";

/// SQL statement to insert a payment proof.
pub const INSERT_PROOF: &str = r"
    INSERT INTO payment_proofs
    (booking_id, file_ref, mime_type, original_filename, uploaded_at, verified_at)
    VALUES (?, ?, ?, ?, ?, ?)
";

/// SQL statement to delete a booking's payment proof.
pub const DELETE_PROOF: &str = "DELETE FROM payment_proofs WHERE booking_id = ?";
