//! Notification dispatch.
//!
//! Notifications are fire-and-forget: the workflow calls them after its
//! transaction commits, logs any failure at warn level, and never
//! surfaces the failure to the caller. Delivery is best-effort by
//! contract.

use crate::booking::Booking;

/// The outcome of a single notification attempt.
pub type NotifyResult = std::result::Result<(), NotifyError>;

/// Error type for failed notification deliveries.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("notification failed: {0}")]
pub struct NotifyError(pub String);

/// A destination for booking lifecycle notifications.
///
/// Implementations talk to mail, push, or chat providers; the engine
/// only hands over the booking and the event.
pub trait Notifier {
    /// The tenant approved the traveler's payment.
    ///
    /// # Errors
    ///
    /// Returns an error if delivery fails; the caller logs and discards it.
    fn payment_confirmed(&self, booking: &Booking) -> NotifyResult;

    /// The tenant rejected the traveler's payment proof.
    ///
    /// # Errors
    ///
    /// Returns an error if delivery fails; the caller logs and discards it.
    fn payment_rejected(&self, booking: &Booking) -> NotifyResult;

    /// The traveler's check-in is imminent.
    ///
    /// # Errors
    ///
    /// Returns an error if delivery fails; the caller logs and discards it.
    fn checkin_reminder(&self, booking: &Booking) -> NotifyResult;
}

/// A notifier that logs deliveries and always succeeds.
///
/// The default wiring for the CLI; real deployments substitute their
/// own `Notifier`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn payment_confirmed(&self, booking: &Booking) -> NotifyResult {
        log::info!(
            "notify traveler {}: payment confirmed for booking {}",
            booking.traveler_id(),
            booking.id()
        );
        Ok(())
    }

    fn payment_rejected(&self, booking: &Booking) -> NotifyResult {
        log::info!(
            "notify traveler {}: payment rejected for booking {}",
            booking.traveler_id(),
            booking.id()
        );
        Ok(())
    }

    fn checkin_reminder(&self, booking: &Booking) -> NotifyResult {
        log::info!(
            "notify traveler {}: check-in {} for booking {}",
            booking.traveler_id(),
            booking.stay().check_in(),
            booking.id()
        );
        Ok(())
    }
}

/// Attempts a notification and swallows any failure.
///
/// Failures are logged at warn level; the triggering operation has
/// already committed and must not be affected.
pub(crate) fn dispatch(what: &str, booking: &Booking, result: NotifyResult) {
    if let Err(e) = result {
        log::warn!("{what} notification for booking {} failed: {e}", booking.id());
    }
}
