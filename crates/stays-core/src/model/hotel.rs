// ── Hotel domain types ──

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use super::entity_id::EntityId;

/// An inventory unit with nightly pricing and guest capacity.
///
/// Created and mutated only through admin inventory operations; booking
/// activity never changes a hotel record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hotel {
    pub id: EntityId,
    pub name: String,
    pub city: String,
    pub country: String,
    pub description: String,
    /// Categorical type from the admin form's fixed vocabulary
    /// ("Boutique", "Budget", "Beach Resort", ...).
    pub hotel_type: String,
    /// Nightly rate. Invariant: non-negative.
    pub price_per_night: f64,
    /// Invariant: 1 through 5.
    pub star_rating: u8,
    /// Maximum adults. Invariant: at least 1.
    pub adult_count: u8,
    pub child_count: u8,
    pub facilities: Vec<Facility>,
    /// Ordered image references issued by the external upload service.
    pub image_urls: Vec<String>,
}

/// Fixed facility vocabulary. Tags outside this set are dropped on
/// conversion from the wire format.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
pub enum Facility {
    #[strum(serialize = "Free WiFi")]
    FreeWifi,
    #[strum(serialize = "Parking")]
    Parking,
    #[strum(serialize = "Airport Shuttle")]
    AirportShuttle,
    #[strum(serialize = "Family Rooms")]
    FamilyRooms,
    #[strum(serialize = "Non-Smoking Rooms")]
    NonSmokingRooms,
    #[strum(serialize = "Outdoor Pool")]
    OutdoorPool,
    #[strum(serialize = "Spa")]
    Spa,
    #[strum(serialize = "Fitness Center")]
    FitnessCenter,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn facility_parses_display_form() {
        assert_eq!(Facility::from_str("Free WiFi").unwrap(), Facility::FreeWifi);
        assert_eq!(
            Facility::from_str("Non-Smoking Rooms").unwrap(),
            Facility::NonSmokingRooms
        );
    }

    #[test]
    fn facility_rejects_unknown_tag() {
        assert!(Facility::from_str("Helipad").is_err());
    }

    #[test]
    fn facility_display_roundtrips() {
        assert_eq!(Facility::AirportShuttle.to_string(), "Airport Shuttle");
    }
}
