// ── Booking domain types ──

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use super::entity_id::EntityId;

/// A reservation of a hotel for a date range by a traveler.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub id: EntityId,
    /// Referenced hotel. The admin aggregation tolerates this pointing
    /// at a hotel that no longer exists.
    pub hotel_id: EntityId,
    pub check_in: NaiveDate,
    /// Invariant: strictly later than `check_in`.
    pub check_out: NaiveDate,
    /// Invariant: at least 1.
    pub adult_count: u8,
    pub child_count: u8,
    /// Derived via the cost calculator and persisted with the record.
    pub total_cost: f64,
    pub status: BookingStatus,
    pub user_id: Option<EntityId>,
}

/// Booking state machine states.
///
/// Travelers may only move a booking to `Cancelled`; administrators may
/// move any status to any other. Deletion is a separate destructive
/// operation, not a transition.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
}

impl BookingStatus {
    pub fn is_cancelled(self) -> bool {
        matches!(self, Self::Cancelled)
    }

    /// Every reachable status, in admin display order.
    pub const ALL: [Self; 3] = [Self::Pending, Self::Confirmed, Self::Cancelled];
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn status_wire_form_is_lowercase() {
        assert_eq!(BookingStatus::Pending.to_string(), "pending");
        assert_eq!(BookingStatus::from_str("cancelled").unwrap(), BookingStatus::Cancelled);
    }

    #[test]
    fn status_serde_roundtrip() {
        let json = serde_json::to_string(&BookingStatus::Confirmed).unwrap();
        assert_eq!(json, "\"confirmed\"");
        let back: BookingStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(back, BookingStatus::Confirmed);
    }
}
