//! Stay ranges: the date intervals bookings occupy.
//!
//! A stay covers the half-open interval `[check_in, check_out)` — the
//! night of check-out itself is not occupied. The night is the unit of
//! both availability and pricing.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A validated half-open date range for a stay.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use innkeep::StayRange;
///
/// let check_in = NaiveDate::from_ymd_opt(2026, 9, 1).unwrap();
/// let check_out = NaiveDate::from_ymd_opt(2026, 9, 4).unwrap();
/// let stay = StayRange::new(check_in, check_out).unwrap();
/// assert_eq!(stay.nights(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StayRange {
    check_in: NaiveDate,
    check_out: NaiveDate,
}

impl StayRange {
    /// Creates a stay range.
    ///
    /// # Errors
    ///
    /// Returns an error unless `check_in < check_out`, which also
    /// guarantees at least one night.
    pub fn new(check_in: NaiveDate, check_out: NaiveDate) -> Result<Self, InvalidStayError> {
        if check_in >= check_out {
            return Err(InvalidStayError {
                check_in,
                check_out,
                reason: "check-in must be before check-out".into(),
            });
        }
        Ok(Self {
            check_in,
            check_out,
        })
    }

    /// Returns the check-in date (first occupied night).
    #[must_use]
    pub const fn check_in(&self) -> NaiveDate {
        self.check_in
    }

    /// Returns the check-out date (first unoccupied night).
    #[must_use]
    pub const fn check_out(&self) -> NaiveDate {
        self.check_out
    }

    /// Returns the number of nights in the stay.
    #[must_use]
    pub fn nights(&self) -> u32 {
        u32::try_from((self.check_out - self.check_in).num_days()).unwrap_or(0)
    }

    /// Returns the last occupied night (the day before check-out).
    #[must_use]
    pub fn last_night(&self) -> NaiveDate {
        self.check_out.pred_opt().unwrap_or(self.check_in)
    }

    /// Iterates over every occupied night, check-out excluded.
    pub fn iter_nights(&self) -> impl Iterator<Item = NaiveDate> {
        self.check_in
            .iter_days()
            .take_while({
                let end = self.check_out;
                move |d| *d < end
            })
    }

    /// Open-interval overlap test: two stays overlap iff they share at
    /// least one night. A stay checking out the day another checks in
    /// does not overlap it.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.check_in < other.check_out && self.check_out > other.check_in
    }
}

impl fmt::Display for StayRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.check_in, self.check_out)
    }
}

/// Error type for non-chronological stay ranges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidStayError {
    /// The offending check-in date.
    pub check_in: NaiveDate,
    /// The offending check-out date.
    pub check_out: NaiveDate,
    /// The reason the range is invalid.
    pub reason: String,
}

impl fmt::Display for InvalidStayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid stay {}..{}: {}",
            self.check_in, self.check_out, self.reason
        )
    }
}

impl std::error::Error for InvalidStayError {}

impl From<InvalidStayError> for crate::error::Error {
    fn from(err: InvalidStayError) -> Self {
        Self::Validation {
            field: "stay".into(),
            message: err.to_string(),
        }
    }
}
