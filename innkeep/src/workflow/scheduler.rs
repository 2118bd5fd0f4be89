//! Scheduled sweeps: payment expiry and check-in reminders.
//!
//! Both sweeps are driven externally (cron, a loop in a daemon, or a
//! CLI invocation) and are safe to run repeatedly. Each candidate is
//! handled in its own transaction with the lifecycle guard re-checked,
//! so a booking that advanced between the scan and the update is simply
//! skipped.

use chrono::{DateTime, NaiveDate, Utc};

use crate::booking::Booking;
use crate::config::Config;
use crate::database::Database;
use crate::error::Result;
use crate::notify::{self, Notifier};

/// The outcome of an expiry sweep.
#[derive(Debug, Default)]
pub struct ExpireResult {
    /// How many bookings were cancelled (or would be, under dry-run).
    pub cancelled_count: usize,
    /// The affected bookings, as read after the sweep.
    pub cancelled: Vec<Booking>,
}

/// The outcome of a reminder sweep.
#[derive(Debug, Default)]
pub struct ReminderResult {
    /// How many reminders were sent (or would be, under dry-run).
    pub sent_count: usize,
    /// The affected bookings.
    pub sent: Vec<Booking>,
}

/// Cancels every `WAITING_PAYMENT` booking whose payment deadline has
/// passed as of `now`.
///
/// With `dry_run` set, reports what would be cancelled without touching
/// anything. A booking that left `WAITING_PAYMENT` after the scan is
/// skipped, not an error.
///
/// # Errors
///
/// Returns an error only on database failure.
pub fn expire_unpaid(db: &mut Database, now: DateTime<Utc>, dry_run: bool) -> Result<ExpireResult> {
    let overdue = Database::list_payment_overdue(db.connection(), now)?;

    if dry_run {
        log::info!("expiry sweep (dry run): {} booking(s) overdue", overdue.len());
        return Ok(ExpireResult {
            cancelled_count: overdue.len(),
            cancelled: overdue,
        });
    }

    let mut result = ExpireResult::default();
    for booking in overdue {
        match super::cancel_for_expiry(db, booking.id()) {
            Ok(cancelled) => {
                result.cancelled_count += 1;
                result.cancelled.push(cancelled);
            }
            // raced into another state, or a concurrent sweep got there first
            Err(e) if e.is_conflict() || e.is_not_found() => {
                log::debug!("expiry sweep: skipping booking {}: {e}", booking.id());
            }
            Err(e) => return Err(e),
        }
    }

    log::info!("expiry sweep: cancelled {} booking(s)", result.cancelled_count);
    Ok(result)
}

/// Sends check-in reminders for `PROCESSING` bookings whose check-in is
/// exactly the configured lead away from `today`.
///
/// Each booking is stamped `reminder_sent_at` so repeated sweeps never
/// remind twice. The stamp is written even when delivery fails; the
/// notifier already had its one attempt.
///
/// # Errors
///
/// Returns an error only on database failure.
pub fn send_checkin_reminders(
    db: &mut Database,
    notifier: &dyn Notifier,
    config: &Config,
    today: NaiveDate,
    dry_run: bool,
) -> Result<ReminderResult> {
    let target = today + config.reminder_lead();
    let due = Database::list_reminder_due(db.connection(), target)?;

    if dry_run {
        log::info!(
            "reminder sweep (dry run): {} booking(s) check in on {target}",
            due.len()
        );
        return Ok(ReminderResult {
            sent_count: due.len(),
            sent: due,
        });
    }

    let mut result = ReminderResult::default();
    for booking in due {
        let tx = db.begin_transaction()?;
        let current = super::load_booking(&tx, booking.id())?;
        // re-check under the lock; approval could have been undone or
        // another sweep could have stamped it already
        if current.status() != crate::status::BookingStatus::Processing
            || current.reminder_sent_at().is_some()
        {
            drop(tx);
            continue;
        }
        Database::set_reminder_sent(&tx, current.id(), Utc::now())?;
        tx.commit()?;

        notify::dispatch("check-in reminder", &current, notifier.checkin_reminder(&current));
        result.sent_count += 1;
        result.sent.push(current);
    }

    log::info!("reminder sweep: sent {} reminder(s)", result.sent_count);
    Ok(result)
}

/// Sends a one-off check-in reminder at a tenant's request.
///
/// Does not stamp `reminder_sent_at`; the scheduled sweep still owes the
/// traveler its reminder.
///
/// # Errors
///
/// - `NotFound` if the booking does not exist or is not on the tenant's
///   property
/// - `Conflict` if the booking is not in `PROCESSING`
pub fn send_reminder(
    db: &mut Database,
    notifier: &dyn Notifier,
    tenant_id: i64,
    booking_id: i64,
) -> Result<()> {
    let tx = db.begin_transaction()?;
    let booking = super::load_booking(&tx, booking_id)?;
    super::authorize_tenant(&tx, &booking, tenant_id)?;
    if booking.status() != crate::status::BookingStatus::Processing {
        return Err(crate::error::Error::conflict(format!(
            "cannot remind a {} booking: payment has not been confirmed",
            booking.status()
        )));
    }
    drop(tx);

    notify::dispatch("check-in reminder", &booking, notifier.checkin_reminder(&booking));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::test_util::{create_test_database, seed_room};
    use crate::notify::test_util::RecordingNotifier;
    use crate::status::BookingStatus;
    use crate::stay::StayRange;
    use crate::workflow::payment::{attach_payment_proof, confirm_payment, ConfirmAction, ProofUpload};
    use crate::workflow::{create_booking, CreateRequest};
    use chrono::Duration;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn book(db: &mut Database, config: &Config, check_in: NaiveDate, nights: i64) -> Booking {
        let (property_id, room_id) = seed_room(db, 5, 850_000);
        book_in_room(db, config, property_id, room_id, check_in, nights)
    }

    fn book_in_room(
        db: &mut Database,
        config: &Config,
        property_id: i64,
        room_id: i64,
        check_in: NaiveDate,
        nights: i64,
    ) -> Booking {
        let stay = StayRange::new(check_in, check_in + Duration::days(nights)).unwrap();
        create_booking(
            db,
            config,
            &CreateRequest {
                traveler_id: 9,
                property_id,
                room_id,
                stay,
                guest_count: 2,
            },
        )
        .unwrap()
    }

    fn advance_to_processing(db: &mut Database, booking: &Booking) {
        attach_payment_proof(
            db,
            9,
            booking.id(),
            &ProofUpload {
                file_ref: "proofs/transfer.png".into(),
                mime_type: "image/png".into(),
                original_filename: "transfer.png".into(),
            },
        )
        .unwrap();
        confirm_payment(
            db,
            &RecordingNotifier::default(),
            1,
            booking.id(),
            ConfirmAction::Approve,
        )
        .unwrap();
    }

    #[test]
    fn test_expire_cancels_overdue_bookings() {
        let mut db = create_test_database();
        let config = Config {
            payment_sla_minutes: 0,
            ..Config::default()
        };
        let booking = book(&mut db, &config, date(2026, 9, 1), 3);

        let result = expire_unpaid(&mut db, Utc::now() + Duration::seconds(5), false).unwrap();
        assert_eq!(result.cancelled_count, 1);
        assert_eq!(result.cancelled[0].id(), booking.id());
        assert_eq!(result.cancelled[0].status(), BookingStatus::Cancelled);
    }

    #[test]
    fn test_expire_leaves_fresh_bookings_alone() {
        let mut db = create_test_database();
        let config = Config::default(); // one hour SLA
        book(&mut db, &config, date(2026, 9, 1), 3);

        let result = expire_unpaid(&mut db, Utc::now(), false).unwrap();
        assert_eq!(result.cancelled_count, 0);
    }

    #[test]
    fn test_expire_skips_bookings_that_advanced() {
        let mut db = create_test_database();
        let config = Config {
            payment_sla_minutes: 0,
            ..Config::default()
        };
        let booking = book(&mut db, &config, date(2026, 9, 1), 3);
        advance_to_processing(&mut db, &booking);

        let result = expire_unpaid(&mut db, Utc::now() + Duration::seconds(5), false).unwrap();
        assert_eq!(result.cancelled_count, 0);
        let stored = Database::get_booking(db.connection(), booking.id())
            .unwrap()
            .unwrap();
        assert_eq!(stored.status(), BookingStatus::Processing);
    }

    #[test]
    fn test_expire_dry_run_changes_nothing() {
        let mut db = create_test_database();
        let config = Config {
            payment_sla_minutes: 0,
            ..Config::default()
        };
        let booking = book(&mut db, &config, date(2026, 9, 1), 3);

        let result = expire_unpaid(&mut db, Utc::now() + Duration::seconds(5), true).unwrap();
        assert_eq!(result.cancelled_count, 1);
        let stored = Database::get_booking(db.connection(), booking.id())
            .unwrap()
            .unwrap();
        assert_eq!(stored.status(), BookingStatus::WaitingPayment);
    }

    #[test]
    fn test_reminders_sent_once() {
        let mut db = create_test_database();
        let config = Config::default();
        let booking = book(&mut db, &config, date(2026, 9, 2), 3);
        advance_to_processing(&mut db, &booking);
        let notifier = RecordingNotifier::default();

        let today = date(2026, 9, 1); // lead is one day
        let result = send_checkin_reminders(&mut db, &notifier, &config, today, false).unwrap();
        assert_eq!(result.sent_count, 1);

        // sweep again, nothing left to send
        let result = send_checkin_reminders(&mut db, &notifier, &config, today, false).unwrap();
        assert_eq!(result.sent_count, 0);
        assert_eq!(notifier.calls.borrow().len(), 1);
    }

    #[test]
    fn test_reminders_only_for_matching_checkin() {
        let mut db = create_test_database();
        let config = Config::default();
        let booking = book(&mut db, &config, date(2026, 9, 5), 3);
        advance_to_processing(&mut db, &booking);
        let notifier = RecordingNotifier::default();

        // check-in is four days out, lead is one
        let result =
            send_checkin_reminders(&mut db, &notifier, &config, date(2026, 9, 1), false).unwrap();
        assert_eq!(result.sent_count, 0);
    }

    #[test]
    fn test_reminders_skip_unpaid_bookings() {
        let mut db = create_test_database();
        let config = Config::default();
        book(&mut db, &config, date(2026, 9, 2), 3); // stays WAITING_PAYMENT
        let notifier = RecordingNotifier::default();

        let result =
            send_checkin_reminders(&mut db, &notifier, &config, date(2026, 9, 1), false).unwrap();
        assert_eq!(result.sent_count, 0);
    }

    #[test]
    fn test_reminder_dry_run_does_not_stamp() {
        let mut db = create_test_database();
        let config = Config::default();
        let booking = book(&mut db, &config, date(2026, 9, 2), 3);
        advance_to_processing(&mut db, &booking);
        let notifier = RecordingNotifier::default();

        let result =
            send_checkin_reminders(&mut db, &notifier, &config, date(2026, 9, 1), true).unwrap();
        assert_eq!(result.sent_count, 1);
        assert!(notifier.calls.borrow().is_empty());
        let stored = Database::get_booking(db.connection(), booking.id())
            .unwrap()
            .unwrap();
        assert!(stored.reminder_sent_at().is_none());
    }

    #[test]
    fn test_failed_delivery_still_stamps() {
        let mut db = create_test_database();
        let config = Config::default();
        let booking = book(&mut db, &config, date(2026, 9, 2), 3);
        advance_to_processing(&mut db, &booking);
        let notifier = RecordingNotifier {
            fail: true,
            ..Default::default()
        };

        let result =
            send_checkin_reminders(&mut db, &notifier, &config, date(2026, 9, 1), false).unwrap();
        assert_eq!(result.sent_count, 1);
        let stored = Database::get_booking(db.connection(), booking.id())
            .unwrap()
            .unwrap();
        assert!(stored.reminder_sent_at().is_some());
    }

    #[test]
    fn test_manual_reminder_does_not_stamp() {
        let mut db = create_test_database();
        let config = Config::default();
        let booking = book(&mut db, &config, date(2026, 9, 2), 3);
        advance_to_processing(&mut db, &booking);
        let notifier = RecordingNotifier::default();

        send_reminder(&mut db, &notifier, 1, booking.id()).unwrap();
        assert_eq!(notifier.calls.borrow().len(), 1);
        let stored = Database::get_booking(db.connection(), booking.id())
            .unwrap()
            .unwrap();
        assert!(stored.reminder_sent_at().is_none());
    }

    #[test]
    fn test_manual_reminder_requires_processing() {
        let mut db = create_test_database();
        let config = Config::default();
        let booking = book(&mut db, &config, date(2026, 9, 2), 3);
        let notifier = RecordingNotifier::default();

        let err = send_reminder(&mut db, &notifier, 1, booking.id()).unwrap_err();
        assert!(err.is_conflict());
        assert!(notifier.calls.borrow().is_empty());
    }
}
