// ── Wire to domain conversion ──
//
// stays-api mirrors the service's camelCase JSON exactly; the domain
// model is stricter. Conversions are lenient on vocabulary we do not
// control: unknown facility strings are dropped with a warning, and an
// unknown status string degrades to `Pending` rather than failing the
// whole collection.

use std::str::FromStr;
use tracing::warn;

use crate::model::{Booking, BookingStatus, EntityId, Facility, Hotel};

impl From<stays_api::types::HotelResponse> for Hotel {
    fn from(wire: stays_api::types::HotelResponse) -> Self {
        let facilities = wire
            .facilities
            .iter()
            .filter_map(|raw| match Facility::from_str(raw) {
                Ok(f) => Some(f),
                Err(_) => {
                    warn!(facility = %raw, hotel = %wire.id, "dropping unrecognized facility");
                    None
                }
            })
            .collect();

        Hotel {
            id: EntityId::from(wire.id),
            name: wire.name,
            city: wire.city,
            country: wire.country,
            description: wire.description,
            hotel_type: wire.hotel_type,
            price_per_night: wire.price_per_night,
            star_rating: wire.star_rating,
            adult_count: wire.adult_count,
            child_count: wire.child_count,
            facilities,
            image_urls: wire.image_urls,
        }
    }
}

impl From<stays_api::types::BookingResponse> for Booking {
    fn from(wire: stays_api::types::BookingResponse) -> Self {
        let status = BookingStatus::from_str(&wire.status).unwrap_or_else(|_| {
            warn!(status = %wire.status, booking = %wire.id, "unrecognized booking status");
            BookingStatus::Pending
        });

        Booking {
            id: EntityId::from(wire.id),
            hotel_id: EntityId::from(wire.hotel_id),
            check_in: wire.check_in,
            check_out: wire.check_out,
            adult_count: wire.adult_count,
            child_count: wire.child_count,
            total_cost: wire.total_cost,
            status,
            user_id: wire.user_id.map(EntityId::from),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wire_hotel(facilities: Vec<&str>) -> stays_api::types::HotelResponse {
        stays_api::types::HotelResponse {
            id: "h-1".into(),
            name: "Lotus".into(),
            city: "Paris".into(),
            country: "France".into(),
            description: String::new(),
            hotel_type: "Boutique".into(),
            price_per_night: 120.0,
            star_rating: 4,
            adult_count: 2,
            child_count: 0,
            facilities: facilities.into_iter().map(String::from).collect(),
            image_urls: Vec::new(),
        }
    }

    #[test]
    fn known_facilities_convert() {
        let hotel: Hotel = wire_hotel(vec!["Free WiFi", "Spa"]).into();
        assert_eq!(hotel.facilities, vec![Facility::FreeWifi, Facility::Spa]);
    }

    #[test]
    fn unknown_facilities_are_dropped_not_fatal() {
        let hotel: Hotel = wire_hotel(vec!["Free WiFi", "Heliport"]).into();
        assert_eq!(hotel.facilities, vec![Facility::FreeWifi]);
    }

    #[test]
    fn unknown_status_degrades_to_pending() {
        let wire = stays_api::types::BookingResponse {
            id: "b-1".into(),
            hotel_id: "h-1".into(),
            check_in: "2024-06-01".parse().expect("date"),
            check_out: "2024-06-03".parse().expect("date"),
            adult_count: 2,
            child_count: 0,
            total_cost: 240.0,
            status: "archived".into(),
            user_id: None,
        };
        let booking: Booking = wire.into();
        assert_eq!(booking.status, BookingStatus::Pending);
    }
}
