// Hand-crafted async HTTP client for the booking service REST API.
//
// Session auth: the service issues an HTTP-only cookie on login, so the
// client always carries a cookie jar. Endpoints mirror the service's
// public and admin surfaces.

use reqwest::StatusCode;
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::Error;
use crate::transport::TransportConfig;
use crate::types;

// ── Error response shape from the service ───────────────────────────

#[derive(serde::Deserialize)]
struct ErrorResponse {
    #[serde(default)]
    message: Option<String>,
}

// ── Client ──────────────────────────────────────────────────────────

/// Async client for the Stays booking service.
///
/// Cookie-based session authentication, JSON REST endpoints. One instance
/// serves both the traveler and the admin surfaces; which operations
/// succeed depends on the session's role.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    // ── Constructors ────────────────────────────────────────────────

    /// Build a client with a fresh cookie jar from the given transport
    /// settings.
    pub fn new(base_url: &str, transport: &TransportConfig) -> Result<Self, Error> {
        let transport = transport.clone().with_cookie_jar();
        let http = transport.build_client()?;
        let base_url = Self::normalize_base_url(base_url)?;
        Ok(Self { http, base_url })
    }

    /// Wrap an existing `reqwest::Client` (caller manages cookies).
    pub fn from_reqwest(base_url: &str, http: reqwest::Client) -> Result<Self, Error> {
        let base_url = Self::normalize_base_url(base_url)?;
        Ok(Self { http, base_url })
    }

    /// Ensure the base URL ends with a trailing slash so joins behave.
    fn normalize_base_url(raw: &str) -> Result<Url, Error> {
        let mut url = Url::parse(raw)?;
        let path = url.path().trim_end_matches('/').to_owned();
        url.set_path(&format!("{path}/"));
        Ok(url)
    }

    /// Join a relative path (e.g. `"hotels/search"`) onto the base URL.
    fn url(&self, path: &str) -> Url {
        self.base_url
            .join(path)
            .expect("path should be valid relative URL")
    }

    // ── HTTP verbs ──────────────────────────────────────────────────

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        let url = self.url(path);
        debug!("GET {url}");

        let resp = self.http.get(url).send().await?;
        Self::handle_response(resp).await
    }

    async fn get_with_params<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T, Error> {
        let url = self.url(path);
        debug!("GET {url} params={params:?}");

        let resp = self.http.get(url).query(params).send().await?;
        Self::handle_response(resp).await
    }

    async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, Error> {
        let url = self.url(path);
        debug!("POST {url}");

        let resp = self.http.post(url).json(body).send().await?;
        Self::handle_response(resp).await
    }

    async fn post_no_response<B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(), Error> {
        let url = self.url(path);
        debug!("POST {url}");

        let resp = self.http.post(url).json(body).send().await?;
        Self::handle_empty(resp).await
    }

    async fn put<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, Error> {
        let url = self.url(path);
        debug!("PUT {url}");

        let resp = self.http.put(url).json(body).send().await?;
        Self::handle_response(resp).await
    }

    async fn delete(&self, path: &str) -> Result<(), Error> {
        let url = self.url(path);
        debug!("DELETE {url}");

        let resp = self.http.delete(url).send().await?;
        Self::handle_empty(resp).await
    }

    // ── Response handling ───────────────────────────────────────────

    async fn handle_response<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, Error> {
        let status = resp.status();
        if status.is_success() {
            let body = resp.text().await?;
            serde_json::from_str(&body).map_err(|e| {
                // Char-based truncation; the body is not guaranteed ASCII.
                let preview: String = body.chars().take(200).collect();
                Error::Deserialization {
                    message: format!("{e} (body preview: {preview:?})"),
                    body,
                }
            })
        } else {
            Err(Self::parse_error(status, resp).await)
        }
    }

    async fn handle_empty(resp: reqwest::Response) -> Result<(), Error> {
        let status = resp.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(Self::parse_error(status, resp).await)
        }
    }

    async fn parse_error(status: StatusCode, resp: reqwest::Response) -> Error {
        if status == StatusCode::UNAUTHORIZED {
            return Error::NotAuthenticated;
        }

        let raw = resp.text().await.unwrap_or_default();

        if let Ok(err) = serde_json::from_str::<ErrorResponse>(&raw) {
            Error::Api {
                status: status.as_u16(),
                message: err.message.unwrap_or_else(|| status.to_string()),
            }
        } else {
            Error::Api {
                status: status.as_u16(),
                message: if raw.is_empty() {
                    status.to_string()
                } else {
                    raw
                },
            }
        }
    }

    // ━━ Public API ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    // ── Hotels (public) ─────────────────────────────────────────────

    pub async fn search_hotels(
        &self,
        params: &types::HotelSearchParams,
    ) -> Result<Vec<types::HotelResponse>, Error> {
        self.get_with_params("hotels/search", &params.as_query())
            .await
    }

    pub async fn get_hotel(&self, hotel_id: &str) -> Result<types::HotelResponse, Error> {
        self.get(&format!("hotels/{hotel_id}")).await
    }

    // ── Bookings (traveler) ─────────────────────────────────────────

    pub async fn create_booking(
        &self,
        body: &types::BookingCreateRequest,
    ) -> Result<types::BookingResponse, Error> {
        self.post("bookings", body).await
    }

    pub async fn list_my_bookings(&self) -> Result<Vec<types::BookingResponse>, Error> {
        self.get("bookings/my-bookings").await
    }

    pub async fn cancel_booking(&self, booking_id: &str) -> Result<types::BookingResponse, Error> {
        self.put(&format!("bookings/{booking_id}/cancel"), &serde_json::json!({}))
            .await
    }

    // ── Bookings (admin) ────────────────────────────────────────────

    pub async fn list_all_bookings(&self) -> Result<Vec<types::BookingResponse>, Error> {
        self.get("bookings/admin/all").await
    }

    pub async fn set_booking_status(
        &self,
        booking_id: &str,
        status: &str,
    ) -> Result<types::BookingResponse, Error> {
        self.put(
            &format!("bookings/admin/{booking_id}/status"),
            &types::StatusUpdateRequest {
                status: status.to_owned(),
            },
        )
        .await
    }

    pub async fn delete_booking(&self, booking_id: &str) -> Result<(), Error> {
        self.delete(&format!("bookings/admin/{booking_id}")).await
    }

    // ── Hotels (admin) ──────────────────────────────────────────────

    pub async fn list_admin_hotels(&self) -> Result<Vec<types::HotelResponse>, Error> {
        self.get("admin/hotels").await
    }

    pub async fn create_hotel(
        &self,
        body: &types::HotelCreateUpdate,
    ) -> Result<types::HotelResponse, Error> {
        self.post("admin/hotels", body).await
    }

    pub async fn update_hotel(
        &self,
        hotel_id: &str,
        body: &types::HotelCreateUpdate,
    ) -> Result<types::HotelResponse, Error> {
        self.put(&format!("admin/hotels/{hotel_id}"), body).await
    }

    pub async fn delete_hotel(&self, hotel_id: &str) -> Result<(), Error> {
        self.delete(&format!("admin/hotels/{hotel_id}")).await
    }

    // ── Session ─────────────────────────────────────────────────────

    pub async fn login(&self, email: &str, password: &SecretString) -> Result<(), Error> {
        self.post_no_response(
            "auth/login",
            &types::LoginRequest {
                email: email.to_owned(),
                password: password.expose_secret().to_owned(),
            },
        )
        .await
    }

    pub async fn logout(&self) -> Result<(), Error> {
        self.post_no_response("auth/logout", &serde_json::json!({}))
            .await
    }

    /// Validate the traveler session. Returns `Err(NotAuthenticated)`
    /// when the cookie is missing or expired.
    pub async fn check_session(&self) -> Result<types::SessionInfo, Error> {
        self.post("auth/check", &serde_json::json!({})).await
    }

    /// Validate the admin session.
    pub async fn check_admin_session(&self) -> Result<types::SessionInfo, Error> {
        self.post("admin/check", &serde_json::json!({})).await
    }
}
