// Wire types for the booking service REST API.
//
// The service speaks camelCase JSON with MongoDB-style `_id` identifiers.
// These structs mirror the wire format exactly; `stays-core` converts them
// into the domain model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ── Hotels ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub city: String,
    pub country: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type", default)]
    pub hotel_type: String,
    pub price_per_night: f64,
    pub star_rating: u8,
    #[serde(default = "one")]
    pub adult_count: u8,
    #[serde(default)]
    pub child_count: u8,
    #[serde(default)]
    pub facilities: Vec<String>,
    #[serde(default)]
    pub image_urls: Vec<String>,
}

fn one() -> u8 {
    1
}

/// Payload for admin hotel create and update. Image URLs are issued by the
/// external upload service before this request is made.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelCreateUpdate {
    pub name: String,
    pub city: String,
    pub country: String,
    pub description: String,
    #[serde(rename = "type")]
    pub hotel_type: String,
    pub price_per_night: f64,
    pub star_rating: u8,
    pub adult_count: u8,
    pub child_count: u8,
    pub facilities: Vec<String>,
    pub image_urls: Vec<String>,
}

/// Optional search parameters for `GET /hotels/search`.
#[derive(Debug, Clone, Default)]
pub struct HotelSearchParams {
    pub name: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub star_rating: Option<String>,
}

impl HotelSearchParams {
    /// Flatten into query pairs, omitting unsupplied fields.
    pub(crate) fn as_query(&self) -> Vec<(&'static str, String)> {
        let mut q = Vec::new();
        if let Some(ref v) = self.name {
            q.push(("name", v.clone()));
        }
        if let Some(ref v) = self.city {
            q.push(("city", v.clone()));
        }
        if let Some(ref v) = self.country {
            q.push(("country", v.clone()));
        }
        if let Some(ref v) = self.star_rating {
            q.push(("starRating", v.clone()));
        }
        q
    }
}

// ── Bookings ────────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub hotel_id: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub adult_count: u8,
    pub child_count: u8,
    pub total_cost: f64,
    pub status: String,
    #[serde(default)]
    pub user_id: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingCreateRequest {
    pub hotel_id: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub adult_count: u8,
    pub child_count: u8,
    pub total_cost: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatusUpdateRequest {
    pub status: String,
}

// ── Session ─────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionInfo {
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}
