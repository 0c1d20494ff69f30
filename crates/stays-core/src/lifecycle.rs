// ── Booking lifecycle rules ──
//
// Validation and the status state machine. Rules run before any request
// is issued, so a rejected operation never touches remote state. Invalid
// input is rejected, never silently adjusted.

use chrono::NaiveDate;

use crate::error::CoreError;
use crate::model::{Booking, BookingStatus, EntityId};

/// A traveler's intent to reserve a hotel for a date range.
///
/// This is pre-validation input; `validate` is the gate between it and
/// the cost calculator.
#[derive(Debug, Clone)]
pub struct BookingRequest {
    pub hotel_id: EntityId,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub adult_count: u8,
    pub child_count: u8,
}

impl BookingRequest {
    /// Check the request against the booking rules.
    pub fn validate(&self) -> Result<(), CoreError> {
        validate_stay(self.check_in, self.check_out)?;
        if self.adult_count < 1 {
            return Err(CoreError::validation(
                "A booking requires at least one adult",
            ));
        }
        Ok(())
    }
}

/// Check-out must be strictly after check-in. A same-day or inverted
/// range is a rejection, not something we clamp.
pub fn validate_stay(check_in: NaiveDate, check_out: NaiveDate) -> Result<(), CoreError> {
    if check_out <= check_in {
        return Err(CoreError::validation(format!(
            "Check-out date ({check_out}) must be after check-in date ({check_in})"
        )));
    }
    Ok(())
}

/// Traveler-side cancellation rule: the only transition a traveler may
/// request is `* -> cancelled`, and cancelling an already-cancelled
/// booking is rejected rather than treated as a no-op.
pub fn traveler_cancel(booking: &Booking) -> Result<BookingStatus, CoreError> {
    if booking.status.is_cancelled() {
        return Err(CoreError::AlreadyCancelled {
            identifier: booking.id.short().to_string(),
        });
    }
    Ok(BookingStatus::Cancelled)
}

/// Administrator transition rule: any status to any status, including
/// resurrecting a cancelled booking. Identity transitions are allowed
/// and harmless.
#[allow(clippy::unnecessary_wraps)]
pub fn admin_transition(_from: BookingStatus, to: BookingStatus) -> Result<BookingStatus, CoreError> {
    Ok(to)
}
