// ── Traveler storefront ──
//
// Orchestrates the public surface: search, hotel detail, booking
// creation, the traveler's own bookings, and cancellation. Owns an API
// client (with its cookie jar) plus the session cache, and applies the
// decision engines before anything is sent to the service.

use secrecy::SecretString;
use stays_api::{ApiClient, types};
use tracing::{debug, info};

use crate::config::{AuthCredentials, ServiceConfig};
use crate::error::CoreError;
use crate::lifecycle::{self, BookingRequest};
use crate::model::{Booking, EntityId, Hotel, SearchCriteria};
use crate::pricing;
use crate::search;
use crate::session::SessionCache;

pub struct Storefront {
    client: ApiClient,
    session: SessionCache,
    config: ServiceConfig,
}

impl Storefront {
    /// Build a storefront from resolved service configuration. No
    /// network traffic happens here.
    pub fn new(config: ServiceConfig) -> Result<Self, CoreError> {
        let client = ApiClient::new(config.base_url.as_str(), &config.transport())?;
        Ok(Self {
            client,
            session: SessionCache::new(),
            config,
        })
    }

    /// Wrap a pre-built client (used by tests against a mock server).
    pub fn with_client(client: ApiClient, config: ServiceConfig) -> Self {
        Self {
            client,
            session: SessionCache::new(),
            config,
        }
    }

    pub fn session(&self) -> &SessionCache {
        &self.session
    }

    // ── Session ─────────────────────────────────────────────────────

    /// Log in with the configured credentials and validate the issued
    /// session cookie.
    pub async fn login(&self) -> Result<(), CoreError> {
        let AuthCredentials::Credentials { email, password } = &self.config.auth else {
            return Err(CoreError::Config {
                message: "No credentials configured; set an email and password first".into(),
            });
        };
        self.login_with(email, password).await
    }

    /// Log in with explicit credentials (interactive prompt path).
    pub async fn login_with(&self, email: &str, password: &SecretString) -> Result<(), CoreError> {
        self.client
            .login(email, password)
            .await
            .map_err(|e| self.track_auth(e))?;

        let info = self
            .client
            .check_session()
            .await
            .map_err(|e| self.track_auth(e))?;
        self.session
            .mark_authenticated(info.user_id.map(EntityId::from), info.email)
            .await;
        info!(email, "logged in");
        Ok(())
    }

    pub async fn logout(&self) -> Result<(), CoreError> {
        self.client.logout().await.map_err(CoreError::from)?;
        self.session.invalidate().await;
        Ok(())
    }

    /// Validate the current session cookie against the service.
    pub async fn verify_session(&self) -> Result<(), CoreError> {
        match self.client.check_session().await {
            Ok(info) => {
                self.session
                    .mark_authenticated(info.user_id.map(EntityId::from), info.email)
                    .await;
                Ok(())
            }
            Err(e) => Err(self.track_auth(e)),
        }
    }

    // ── Search and detail ───────────────────────────────────────────

    /// Search the inventory. Criteria are forwarded to the service and
    /// the inclusion policy is applied locally to the returned page, so
    /// results match the documented OR semantics regardless of how the
    /// service filters.
    pub async fn search(&self, criteria: &SearchCriteria) -> Result<Vec<Hotel>, CoreError> {
        let params = types::HotelSearchParams {
            name: criteria.name().map(String::from),
            city: criteria.city().map(String::from),
            country: criteria.country().map(String::from),
            star_rating: criteria.star_rating().map(String::from),
        };
        let listings: Vec<Hotel> = self
            .client
            .search_hotels(&params)
            .await
            .map_err(CoreError::from)?
            .into_iter()
            .map(Hotel::from)
            .collect();
        debug!(fetched = listings.len(), "search results fetched");
        Ok(search::filter_listings(listings, criteria))
    }

    pub async fn hotel(&self, hotel_id: &EntityId) -> Result<Hotel, CoreError> {
        match self.client.get_hotel(hotel_id.as_str()).await {
            Ok(wire) => Ok(wire.into()),
            Err(e) if e.is_not_found() => Err(CoreError::HotelNotFound {
                identifier: hotel_id.to_string(),
            }),
            Err(e) => Err(self.track_auth(e)),
        }
    }

    // ── Bookings ────────────────────────────────────────────────────

    /// Price a prospective stay without creating anything.
    pub async fn quote(&self, request: &BookingRequest) -> Result<f64, CoreError> {
        request.validate()?;
        let hotel = self.hotel(&request.hotel_id).await?;
        Ok(pricing::total_cost(
            request.check_in,
            request.check_out,
            hotel.price_per_night,
        ))
    }

    /// Validate, price, and create a booking. Validation failures are
    /// raised before any request is issued.
    pub async fn book(&self, request: &BookingRequest) -> Result<Booking, CoreError> {
        request.validate()?;

        let hotel = self.hotel(&request.hotel_id).await?;
        let total_cost =
            pricing::total_cost(request.check_in, request.check_out, hotel.price_per_night);

        let wire = self
            .client
            .create_booking(&types::BookingCreateRequest {
                hotel_id: request.hotel_id.to_string(),
                check_in: request.check_in,
                check_out: request.check_out,
                adult_count: request.adult_count,
                child_count: request.child_count,
                total_cost,
            })
            .await
            .map_err(|e| self.track_auth(e))?;

        let booking: Booking = wire.into();
        info!(booking = %booking.id.short(), hotel = %hotel.name, total_cost, "booking created");
        Ok(booking)
    }

    pub async fn my_bookings(&self) -> Result<Vec<Booking>, CoreError> {
        let wire = self
            .client
            .list_my_bookings()
            .await
            .map_err(|e| self.track_auth(e))?;
        Ok(wire.into_iter().map(Booking::from).collect())
    }

    /// Cancel one of the traveler's bookings. Rejected locally when the
    /// booking is already cancelled.
    pub async fn cancel(&self, booking: &Booking) -> Result<Booking, CoreError> {
        lifecycle::traveler_cancel(booking)?;

        let wire = self
            .client
            .cancel_booking(booking.id.as_str())
            .await
            .map_err(|e| self.track_auth(e))?;
        Ok(wire.into())
    }

    /// Find a booking of the current traveler by id prefix or full id.
    pub async fn find_booking(&self, reference: &str) -> Result<Booking, CoreError> {
        let bookings = self.my_bookings().await?;
        bookings
            .into_iter()
            .find(|b| b.id.as_str() == reference || b.id.short() == reference)
            .ok_or_else(|| CoreError::BookingNotFound {
                identifier: reference.to_owned(),
            })
    }

    // ── Error tracking ──────────────────────────────────────────────

    /// Translate an API error, dropping the cached session state when
    /// the service rejected our cookie.
    fn track_auth(&self, err: stays_api::Error) -> CoreError {
        if err.is_auth_expired() {
            self.session.try_invalidate();
        }
        CoreError::from(err)
    }
}
