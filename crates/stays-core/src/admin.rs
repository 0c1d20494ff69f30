// ── Admin console ──
//
// Back-office surface: full booking and inventory visibility, status
// overrides, hotel create/update, and destructive deletes behind a
// two-step confirmation token. Holds local snapshots of both
// collections, fetched concurrently and refreshed after every mutation
// so the view never drifts from the service.

use std::collections::HashMap;

use stays_api::{ApiClient, types};
use tracing::{debug, info};

use crate::config::ServiceConfig;
use crate::error::CoreError;
use crate::lifecycle;
use crate::model::{Booking, BookingStatus, EntityId, Facility, Hotel};
use crate::session::SessionCache;

/// Display name used when a booking references a hotel that no longer
/// exists. A dangling reference must never hide the booking row.
pub const UNKNOWN_HOTEL: &str = "Unknown Hotel";

// ── Aggregation ─────────────────────────────────────────────────────

/// A booking row joined with its hotel's display name.
#[derive(Debug, Clone, serde::Serialize)]
pub struct BookingOverview {
    pub booking: Booking,
    pub hotel_name: String,
}

/// Join bookings against the hotel collection by hotel id. Bookings
/// whose hotel is missing keep their row under [`UNKNOWN_HOTEL`].
pub fn join_bookings(bookings: &[Booking], hotels: &[Hotel]) -> Vec<BookingOverview> {
    let names: HashMap<&str, &str> = hotels
        .iter()
        .map(|h| (h.id.as_str(), h.name.as_str()))
        .collect();

    bookings
        .iter()
        .map(|booking| BookingOverview {
            booking: booking.clone(),
            hotel_name: names
                .get(booking.hotel_id.as_str())
                .map_or(UNKNOWN_HOTEL, |n| *n)
                .to_owned(),
        })
        .collect()
}

// ── Inventory drafts ────────────────────────────────────────────────

/// Admin input for creating or updating a hotel record. Validated
/// before any request is issued.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct HotelDraft {
    pub name: String,
    pub city: String,
    pub country: String,
    #[serde(default)]
    pub description: String,
    pub hotel_type: String,
    pub price_per_night: f64,
    pub star_rating: u8,
    pub adult_count: u8,
    #[serde(default)]
    pub child_count: u8,
    #[serde(default)]
    pub facilities: Vec<Facility>,
    #[serde(default)]
    pub image_urls: Vec<String>,
}

impl HotelDraft {
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.name.trim().is_empty() {
            return Err(CoreError::validation("Hotel name must not be empty"));
        }
        if self.city.trim().is_empty() || self.country.trim().is_empty() {
            return Err(CoreError::validation("City and country are required"));
        }
        if self.price_per_night < 0.0 {
            return Err(CoreError::validation("Nightly price must not be negative"));
        }
        if !(1..=5).contains(&self.star_rating) {
            return Err(CoreError::validation(format!(
                "Star rating must be between 1 and 5, got {}",
                self.star_rating
            )));
        }
        if self.adult_count < 1 {
            return Err(CoreError::validation(
                "A hotel must accommodate at least one adult",
            ));
        }
        Ok(())
    }

    fn to_wire(&self) -> types::HotelCreateUpdate {
        types::HotelCreateUpdate {
            name: self.name.clone(),
            city: self.city.clone(),
            country: self.country.clone(),
            description: self.description.clone(),
            hotel_type: self.hotel_type.clone(),
            price_per_night: self.price_per_night,
            star_rating: self.star_rating,
            adult_count: self.adult_count,
            child_count: self.child_count,
            facilities: self.facilities.iter().map(ToString::to_string).collect(),
            image_urls: self.image_urls.clone(),
        }
    }
}

// ── Two-step deletion ───────────────────────────────────────────────

/// Confirmation token for a destructive operation. Issued by a
/// `request_delete_*` call, consumed by [`AdminConsole::execute_delete`].
/// Nothing is deleted until the token is passed back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingDelete {
    Hotel(EntityId),
    Booking(EntityId),
}

impl PendingDelete {
    /// Human-readable description for the confirmation prompt.
    pub fn describe(&self) -> String {
        match self {
            Self::Hotel(id) => format!("hotel {id}"),
            Self::Booking(id) => format!("booking {}", id.short()),
        }
    }
}

// ── Console ─────────────────────────────────────────────────────────

pub struct AdminConsole {
    client: ApiClient,
    session: SessionCache,
    hotels: Vec<Hotel>,
    bookings: Vec<Booking>,
}

impl AdminConsole {
    pub fn new(config: &ServiceConfig) -> Result<Self, CoreError> {
        let client = ApiClient::new(config.base_url.as_str(), &config.transport())?;
        Ok(Self::with_client(client))
    }

    /// Wrap a pre-built client (mock-server tests and the CLI, which
    /// shares one cookie jar across surfaces).
    pub fn with_client(client: ApiClient) -> Self {
        Self {
            client,
            session: SessionCache::new(),
            hotels: Vec::new(),
            bookings: Vec::new(),
        }
    }

    pub fn session(&self) -> &SessionCache {
        &self.session
    }

    pub fn hotels(&self) -> &[Hotel] {
        &self.hotels
    }

    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    /// Validate the admin session cookie.
    pub async fn verify_session(&self) -> Result<(), CoreError> {
        match self.client.check_admin_session().await {
            Ok(info) => {
                self.session
                    .mark_authenticated(info.user_id.map(EntityId::from), info.email)
                    .await;
                Ok(())
            }
            Err(e) => {
                if e.is_auth_expired() {
                    self.session.try_invalidate();
                }
                Err(e.into())
            }
        }
    }

    /// Fetch both collections concurrently and replace the snapshots.
    /// Either failure fails the refresh; the snapshots are only swapped
    /// on full success.
    pub async fn refresh(&mut self) -> Result<(), CoreError> {
        let (hotels, bookings) = tokio::join!(
            self.client.list_admin_hotels(),
            self.client.list_all_bookings(),
        );

        let hotels: Vec<Hotel> = hotels?.into_iter().map(Hotel::from).collect();
        let bookings: Vec<Booking> = bookings?.into_iter().map(Booking::from).collect();

        debug!(
            hotels = hotels.len(),
            bookings = bookings.len(),
            "admin snapshots refreshed"
        );
        self.hotels = hotels;
        self.bookings = bookings;
        Ok(())
    }

    /// Join the current booking snapshot with hotel names.
    pub fn overview(&self) -> Vec<BookingOverview> {
        join_bookings(&self.bookings, &self.hotels)
    }

    pub fn find_booking(&self, reference: &str) -> Result<&Booking, CoreError> {
        self.bookings
            .iter()
            .find(|b| b.id.as_str() == reference || b.id.short() == reference)
            .ok_or_else(|| CoreError::BookingNotFound {
                identifier: reference.to_owned(),
            })
    }

    pub fn find_hotel(&self, reference: &str) -> Result<&Hotel, CoreError> {
        self.hotels
            .iter()
            .find(|h| h.id.as_str() == reference || h.name == reference)
            .ok_or_else(|| CoreError::HotelNotFound {
                identifier: reference.to_owned(),
            })
    }

    // ── Mutations (each followed by a refresh) ──────────────────────

    /// Override a booking's status. Administrators may move any status
    /// to any other.
    pub async fn set_status(
        &mut self,
        booking_id: &EntityId,
        status: BookingStatus,
    ) -> Result<(), CoreError> {
        let current = self
            .bookings
            .iter()
            .find(|b| b.id == *booking_id)
            .map_or(BookingStatus::Pending, |b| b.status);
        let target = lifecycle::admin_transition(current, status)?;

        self.client
            .set_booking_status(booking_id.as_str(), &target.to_string())
            .await?;
        info!(booking = %booking_id.short(), %status, "booking status updated");
        self.refresh().await
    }

    pub async fn create_hotel(&mut self, draft: &HotelDraft) -> Result<EntityId, CoreError> {
        draft.validate()?;
        let created = self.client.create_hotel(&draft.to_wire()).await?;
        let id = EntityId::from(created.id);
        info!(hotel = %id, name = %draft.name, "hotel created");
        self.refresh().await?;
        Ok(id)
    }

    pub async fn update_hotel(
        &mut self,
        hotel_id: &EntityId,
        draft: &HotelDraft,
    ) -> Result<(), CoreError> {
        draft.validate()?;
        self.client
            .update_hotel(hotel_id.as_str(), &draft.to_wire())
            .await?;
        info!(hotel = %hotel_id, "hotel updated");
        self.refresh().await
    }

    // ── Destructive operations ──────────────────────────────────────

    /// First step of hotel deletion: verify the target exists in the
    /// snapshot and issue a confirmation token.
    pub fn request_delete_hotel(&self, reference: &str) -> Result<PendingDelete, CoreError> {
        let hotel = self.find_hotel(reference)?;
        Ok(PendingDelete::Hotel(hotel.id.clone()))
    }

    /// First step of booking deletion.
    pub fn request_delete_booking(&self, reference: &str) -> Result<PendingDelete, CoreError> {
        let booking = self.find_booking(reference)?;
        Ok(PendingDelete::Booking(booking.id.clone()))
    }

    /// Second step: actually delete, then refresh both snapshots.
    pub async fn execute_delete(&mut self, pending: PendingDelete) -> Result<(), CoreError> {
        match pending {
            PendingDelete::Hotel(id) => {
                self.client.delete_hotel(id.as_str()).await?;
                info!(hotel = %id, "hotel deleted");
            }
            PendingDelete::Booking(id) => {
                self.client.delete_booking(id.as_str()).await?;
                info!(booking = %id.short(), "booking deleted");
            }
        }
        self.refresh().await
    }
}
