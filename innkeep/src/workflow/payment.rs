//! Payment proof attachment and tenant confirmation.

use chrono::Utc;

use crate::booking::{Booking, PaymentProof};
use crate::database::Database;
use crate::error::Result;
use crate::notify::{self, Notifier};
use crate::status::BookingEvent;

/// Metadata of an uploaded payment proof, as handed over by proof
/// storage. The engine stores the reference, never the bytes.
#[derive(Debug, Clone)]
pub struct ProofUpload {
    /// Stable reference to the stored file.
    pub file_ref: String,
    /// MIME type of the upload.
    pub mime_type: String,
    /// The filename the traveler uploaded under.
    pub original_filename: String,
}

/// The tenant's verdict on a payment proof.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmAction {
    /// Accept the payment; booking moves to `PROCESSING`.
    Approve,
    /// Refuse the proof; it is deleted and the booking returns to
    /// `WAITING_PAYMENT` for a corrected upload.
    Reject,
}

/// Attaches a payment proof to a `WAITING_PAYMENT` booking.
///
/// Moves the booking to `WAITING_CONFIRMATION`. Status and
/// proof-absence are re-read inside the transaction, so a concurrent
/// upload or cancel cannot slip through.
///
/// # Errors
///
/// - `NotFound` if the booking does not exist or is not the traveler's
/// - `Conflict` if the booking is not awaiting payment or already has a
///   proof
pub fn attach_payment_proof(
    db: &mut Database,
    traveler_id: i64,
    booking_id: i64,
    upload: &ProofUpload,
) -> Result<Booking> {
    let tx = db.begin_transaction()?;

    let booking = super::load_booking(&tx, booking_id)?;
    super::authorize_traveler(&booking, traveler_id)?;

    let has_proof = Database::get_payment_proof(&tx, booking_id)?.is_some();
    let next = booking.status().apply(BookingEvent::AttachProof, has_proof)?;

    Database::insert_payment_proof(
        &tx,
        &PaymentProof {
            booking_id,
            file_ref: upload.file_ref.clone(),
            mime_type: upload.mime_type.clone(),
            original_filename: upload.original_filename.clone(),
            uploaded_at: Utc::now(),
            verified_at: None,
        },
    )?;
    Database::update_booking_status(&tx, booking_id, next)?;
    tx.commit()?;

    log::debug!("booking {booking_id}: proof attached, now {next}");
    super::load_booking(db.connection(), booking_id)
}

/// Approves or rejects a booking's payment proof.
///
/// Approval stamps the proof's `verified_at` and moves the booking to
/// `PROCESSING`; rejection deletes the proof and returns the booking to
/// `WAITING_PAYMENT`. Either way the traveler is notified after commit;
/// a failed notification is logged and swallowed.
///
/// # Errors
///
/// - `NotFound` if the booking does not exist or is not on the tenant's
///   property
/// - `Conflict` if the booking is not awaiting confirmation or has no
///   proof
pub fn confirm_payment(
    db: &mut Database,
    notifier: &dyn Notifier,
    tenant_id: i64,
    booking_id: i64,
    action: ConfirmAction,
) -> Result<Booking> {
    let tx = db.begin_transaction()?;

    let booking = super::load_booking(&tx, booking_id)?;
    super::authorize_tenant(&tx, &booking, tenant_id)?;

    let has_proof = Database::get_payment_proof(&tx, booking_id)?.is_some();
    let next = match action {
        ConfirmAction::Approve => {
            let next = booking.status().apply(BookingEvent::Approve, has_proof)?;
            Database::set_proof_verified(&tx, booking_id, Utc::now())?;
            next
        }
        ConfirmAction::Reject => {
            let next = booking.status().apply(BookingEvent::Reject, has_proof)?;
            Database::delete_payment_proof(&tx, booking_id)?;
            next
        }
    };
    Database::update_booking_status(&tx, booking_id, next)?;
    tx.commit()?;

    let updated = super::load_booking(db.connection(), booking_id)?;
    match action {
        ConfirmAction::Approve => {
            notify::dispatch("payment-confirmed", &updated, notifier.payment_confirmed(&updated));
        }
        ConfirmAction::Reject => {
            notify::dispatch("payment-rejected", &updated, notifier.payment_rejected(&updated));
        }
    }
    Ok(updated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::database::test_util::{create_test_database, seed_room};
    use crate::notify::test_util::RecordingNotifier;
    use crate::status::BookingStatus;
    use crate::stay::StayRange;
    use crate::workflow::{create_booking, CreateRequest};
    use chrono::NaiveDate;

    fn upload() -> ProofUpload {
        ProofUpload {
            file_ref: "proofs/transfer.png".into(),
            mime_type: "image/png".into(),
            original_filename: "transfer.png".into(),
        }
    }

    fn seed_booking(db: &mut Database) -> Booking {
        let (property_id, room_id) = seed_room(db, 1, 850_000);
        let stay = StayRange::new(
            NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
            NaiveDate::from_ymd_opt(2026, 9, 4).unwrap(),
        )
        .unwrap();
        create_booking(
            db,
            &Config::default(),
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

    #[test]
    fn test_attach_proof_moves_to_waiting_confirmation() {
        let mut db = create_test_database();
        let booking = seed_booking(&mut db);

        let updated = attach_payment_proof(&mut db, 9, booking.id(), &upload()).unwrap();
        assert_eq!(updated.status(), BookingStatus::WaitingConfirmation);

        let proof = Database::get_payment_proof(db.connection(), booking.id())
            .unwrap()
            .unwrap();
        assert_eq!(proof.original_filename, "transfer.png");
        assert!(proof.verified_at.is_none());
    }

    #[test]
    fn test_attach_proof_wrong_traveler_is_not_found() {
        let mut db = create_test_database();
        let booking = seed_booking(&mut db);

        let err = attach_payment_proof(&mut db, 77, booking.id(), &upload()).unwrap_err();
        assert!(err.is_not_found());
        // nothing changed
        let stored = Database::get_booking(db.connection(), booking.id())
            .unwrap()
            .unwrap();
        assert_eq!(stored.status(), BookingStatus::WaitingPayment);
    }

    #[test]
    fn test_attach_proof_twice_conflicts() {
        let mut db = create_test_database();
        let booking = seed_booking(&mut db);

        attach_payment_proof(&mut db, 9, booking.id(), &upload()).unwrap();
        let err = attach_payment_proof(&mut db, 9, booking.id(), &upload()).unwrap_err();
        assert!(err.is_conflict());
    }

    #[test]
    fn test_approve_stamps_proof_and_processes() {
        let mut db = create_test_database();
        let booking = seed_booking(&mut db);
        let notifier = RecordingNotifier::default();

        attach_payment_proof(&mut db, 9, booking.id(), &upload()).unwrap();
        let updated =
            confirm_payment(&mut db, &notifier, 1, booking.id(), ConfirmAction::Approve).unwrap();

        assert_eq!(updated.status(), BookingStatus::Processing);
        let proof = Database::get_payment_proof(db.connection(), booking.id())
            .unwrap()
            .unwrap();
        assert!(proof.verified_at.is_some());
        assert_eq!(*notifier.calls.borrow(), vec![("confirmed", booking.id())]);
    }

    #[test]
    fn test_reject_deletes_proof_and_allows_reupload() {
        let mut db = create_test_database();
        let booking = seed_booking(&mut db);
        let notifier = RecordingNotifier::default();

        attach_payment_proof(&mut db, 9, booking.id(), &upload()).unwrap();
        let updated =
            confirm_payment(&mut db, &notifier, 1, booking.id(), ConfirmAction::Reject).unwrap();

        assert_eq!(updated.status(), BookingStatus::WaitingPayment);
        assert!(Database::get_payment_proof(db.connection(), booking.id())
            .unwrap()
            .is_none());
        assert_eq!(*notifier.calls.borrow(), vec![("rejected", booking.id())]);

        // corrected proof goes through
        let reuploaded = attach_payment_proof(&mut db, 9, booking.id(), &upload()).unwrap();
        assert_eq!(reuploaded.status(), BookingStatus::WaitingConfirmation);
    }

    #[test]
    fn test_confirm_without_proof_conflicts() {
        let mut db = create_test_database();
        let booking = seed_booking(&mut db);
        let notifier = RecordingNotifier::default();

        let err = confirm_payment(&mut db, &notifier, 1, booking.id(), ConfirmAction::Approve)
            .unwrap_err();
        assert!(err.is_conflict());
        assert!(notifier.calls.borrow().is_empty());
    }

    #[test]
    fn test_confirm_wrong_tenant_is_not_found() {
        let mut db = create_test_database();
        let booking = seed_booking(&mut db);
        let notifier = RecordingNotifier::default();

        attach_payment_proof(&mut db, 9, booking.id(), &upload()).unwrap();
        let err = confirm_payment(&mut db, &notifier, 42, booking.id(), ConfirmAction::Approve)
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_notification_failure_does_not_fail_operation() {
        let mut db = create_test_database();
        let booking = seed_booking(&mut db);
        let notifier = RecordingNotifier {
            fail: true,
            ..Default::default()
        };

        attach_payment_proof(&mut db, 9, booking.id(), &upload()).unwrap();
        let updated =
            confirm_payment(&mut db, &notifier, 1, booking.id(), ConfirmAction::Approve).unwrap();
        // commit stands even though delivery failed
        assert_eq!(updated.status(), BookingStatus::Processing);
    }
}
