//! The booking lifecycle state machine.
//!
//! A booking moves `WAITING_PAYMENT → WAITING_CONFIRMATION → PROCESSING
//! → COMPLETED`; `CANCELLED` is terminal and reachable only from
//! `WAITING_PAYMENT`. Transitions are guarded by the presence (or
//! absence) of a payment proof, and an illegal transition is always a
//! reported error, never a silent no-op.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The lifecycle status of a booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BookingStatus {
    /// Created; traveler has not yet uploaded payment proof.
    WaitingPayment,
    /// Proof uploaded; waiting for the tenant to approve or reject.
    WaitingConfirmation,
    /// Payment approved; stay is upcoming or underway.
    Processing,
    /// Stay finished; reviews may now be written. Terminal.
    Completed,
    /// Cancelled before payment. Terminal; holds no inventory.
    Cancelled,
}

impl BookingStatus {
    /// Returns the canonical storage string for this status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::WaitingPayment => "WAITING_PAYMENT",
            Self::WaitingConfirmation => "WAITING_CONFIRMATION",
            Self::Processing => "PROCESSING",
            Self::Completed => "COMPLETED",
            Self::Cancelled => "CANCELLED",
        }
    }

    /// Parses a status from its storage string.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a known status.
    pub fn parse(s: &str) -> Result<Self, String> {
        match s {
            "WAITING_PAYMENT" => Ok(Self::WaitingPayment),
            "WAITING_CONFIRMATION" => Ok(Self::WaitingConfirmation),
            "PROCESSING" => Ok(Self::Processing),
            "COMPLETED" => Ok(Self::Completed),
            "CANCELLED" => Ok(Self::Cancelled),
            _ => Err(format!("unknown booking status: {s}")),
        }
    }

    /// Whether this status holds inventory.
    ///
    /// Every status except `Cancelled` counts against a room's unit pool.
    #[must_use]
    pub const fn is_active(self) -> bool {
        !matches!(self, Self::Cancelled)
    }

    /// Whether this status admits no further transitions.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }

    /// Applies an event to this status, enforcing the transition guards.
    ///
    /// `has_proof` is whether a payment proof currently exists for the
    /// booking; several guards depend on it.
    ///
    /// # Errors
    ///
    /// Returns a [`TransitionError`] naming the violated precondition if
    /// the event is not legal from this status.
    pub fn apply(self, event: BookingEvent, has_proof: bool) -> Result<Self, TransitionError> {
        let illegal = |reason: &str| {
            Err(TransitionError {
                from: self,
                event,
                reason: reason.to_string(),
            })
        };

        match event {
            BookingEvent::AttachProof => match self {
                Self::WaitingPayment if has_proof => {
                    illegal("a payment proof has already been uploaded")
                }
                Self::WaitingPayment => Ok(Self::WaitingConfirmation),
                _ => illegal("booking is not awaiting payment"),
            },
            BookingEvent::Cancel => match self {
                Self::WaitingPayment if has_proof => {
                    illegal("payment proof already uploaded; awaiting tenant confirmation")
                }
                Self::WaitingPayment => Ok(Self::Cancelled),
                _ => illegal("only bookings awaiting payment can be cancelled"),
            },
            BookingEvent::Approve => match self {
                Self::WaitingConfirmation if !has_proof => {
                    illegal("no payment proof to approve")
                }
                Self::WaitingConfirmation => Ok(Self::Processing),
                _ => illegal("booking is not awaiting confirmation"),
            },
            BookingEvent::Reject => match self {
                Self::WaitingConfirmation if !has_proof => {
                    illegal("no payment proof to reject")
                }
                Self::WaitingConfirmation => Ok(Self::WaitingPayment),
                _ => illegal("booking is not awaiting confirmation"),
            },
            BookingEvent::Complete => match self {
                Self::Processing => Ok(Self::Completed),
                _ => illegal("only processing bookings can be completed"),
            },
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An event that may advance the booking lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingEvent {
    /// Traveler uploads a payment proof.
    AttachProof,
    /// Traveler, tenant, or the expiry scheduler cancels the booking.
    Cancel,
    /// Tenant approves the payment proof.
    Approve,
    /// Tenant rejects the payment proof.
    Reject,
    /// Operator marks the stay completed after check-out.
    Complete,
}

impl fmt::Display for BookingEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::AttachProof => "attach-proof",
            Self::Cancel => "cancel",
            Self::Approve => "approve",
            Self::Reject => "reject",
            Self::Complete => "complete",
        };
        f.write_str(name)
    }
}

/// Error type for illegal lifecycle transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionError {
    /// The status the booking was in.
    pub from: BookingStatus,
    /// The event that was attempted.
    pub event: BookingEvent,
    /// The violated precondition.
    pub reason: String,
}

impl fmt::Display for TransitionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cannot {} a {} booking: {}",
            self.event, self.from, self.reason
        )
    }
}

impl std::error::Error for TransitionError {}
