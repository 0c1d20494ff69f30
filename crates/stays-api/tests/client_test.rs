// Integration tests for `ApiClient` using wiremock.
#![allow(clippy::unwrap_used)]

use chrono::NaiveDate;
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use stays_api::types::{BookingCreateRequest, HotelSearchParams};
use stays_api::{ApiClient, Error};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, ApiClient) {
    let server = MockServer::start().await;
    let client = ApiClient::from_reqwest(&server.uri(), reqwest::Client::new()).unwrap();
    (server, client)
}

fn date(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

// ── Happy-path tests ────────────────────────────────────────────────

#[tokio::test]
async fn test_search_hotels_forwards_supplied_params_only() {
    let (server, client) = setup().await;

    let body = json!([
        {
            "_id": "66a1b2c3d4e5f60718293a4b",
            "name": "Lotus",
            "city": "Paris",
            "country": "France",
            "description": "Quiet boutique stay",
            "type": "Boutique",
            "pricePerNight": 120.0,
            "starRating": 4,
            "adultCount": 2,
            "childCount": 1,
            "facilities": ["Free WiFi", "Spa"],
            "imageUrls": ["https://img.example/lotus-1.jpg"]
        }
    ]);

    Mock::given(method("GET"))
        .and(path("/hotels/search"))
        .and(query_param("city", "Paris"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let params = HotelSearchParams {
        city: Some("Paris".into()),
        ..HotelSearchParams::default()
    };
    let hotels = client.search_hotels(&params).await.unwrap();

    assert_eq!(hotels.len(), 1);
    assert_eq!(hotels[0].id, "66a1b2c3d4e5f60718293a4b");
    assert_eq!(hotels[0].name, "Lotus");
    assert_eq!(hotels[0].hotel_type, "Boutique");
    assert_eq!(hotels[0].facilities, vec!["Free WiFi", "Spa"]);
}

#[tokio::test]
async fn test_get_hotel() {
    let (server, client) = setup().await;

    let body = json!({
        "_id": "abc123",
        "name": "Oak",
        "city": "Rome",
        "country": "Italy",
        "description": "",
        "type": "Budget",
        "pricePerNight": 75.5,
        "starRating": 3,
        "adultCount": 3,
        "childCount": 0,
        "facilities": [],
        "imageUrls": []
    });

    Mock::given(method("GET"))
        .and(path("/hotels/abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let hotel = client.get_hotel("abc123").await.unwrap();
    assert_eq!(hotel.city, "Rome");
    assert!((hotel.price_per_night - 75.5).abs() < f64::EPSILON);
    assert_eq!(hotel.star_rating, 3);
}

#[tokio::test]
async fn test_create_booking_sends_camel_case_payload() {
    let (server, client) = setup().await;

    let expected_body = json!({
        "hotelId": "abc123",
        "checkIn": "2024-03-10",
        "checkOut": "2024-03-13",
        "adultCount": 2,
        "childCount": 0,
        "totalCost": 360.0
    });

    let response = json!({
        "_id": "b-001",
        "hotelId": "abc123",
        "checkIn": "2024-03-10",
        "checkOut": "2024-03-13",
        "adultCount": 2,
        "childCount": 0,
        "totalCost": 360.0,
        "status": "pending",
        "userId": "u-9"
    });

    Mock::given(method("POST"))
        .and(path("/bookings"))
        .and(body_json(&expected_body))
        .respond_with(ResponseTemplate::new(201).set_body_json(&response))
        .mount(&server)
        .await;

    let req = BookingCreateRequest {
        hotel_id: "abc123".into(),
        check_in: date("2024-03-10"),
        check_out: date("2024-03-13"),
        adult_count: 2,
        child_count: 0,
        total_cost: 360.0,
    };
    let booking = client.create_booking(&req).await.unwrap();

    assert_eq!(booking.id, "b-001");
    assert_eq!(booking.status, "pending");
    assert_eq!(booking.check_out, date("2024-03-13"));
}

#[tokio::test]
async fn test_cancel_booking_returns_updated_record() {
    let (server, client) = setup().await;

    let response = json!({
        "_id": "b-001",
        "hotelId": "abc123",
        "checkIn": "2024-03-10",
        "checkOut": "2024-03-13",
        "adultCount": 2,
        "childCount": 0,
        "totalCost": 360.0,
        "status": "cancelled"
    });

    Mock::given(method("PUT"))
        .and(path("/bookings/b-001/cancel"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&response))
        .mount(&server)
        .await;

    let booking = client.cancel_booking("b-001").await.unwrap();
    assert_eq!(booking.status, "cancelled");
}

#[tokio::test]
async fn test_set_booking_status() {
    let (server, client) = setup().await;

    let response = json!({
        "_id": "b-002",
        "hotelId": "abc123",
        "checkIn": "2024-05-01",
        "checkOut": "2024-05-02",
        "adultCount": 1,
        "childCount": 0,
        "totalCost": 75.5,
        "status": "confirmed"
    });

    Mock::given(method("PUT"))
        .and(path("/bookings/admin/b-002/status"))
        .and(body_json(json!({ "status": "confirmed" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(&response))
        .mount(&server)
        .await;

    let booking = client.set_booking_status("b-002", "confirmed").await.unwrap();
    assert_eq!(booking.status, "confirmed");
}

#[tokio::test]
async fn test_delete_hotel_empty_response() {
    let (server, client) = setup().await;

    Mock::given(method("DELETE"))
        .and(path("/admin/hotels/abc123"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    client.delete_hotel("abc123").await.unwrap();
}

// ── Error classification ────────────────────────────────────────────

#[tokio::test]
async fn test_unauthorized_maps_to_not_authenticated() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/bookings/my-bookings"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let err = client.list_my_bookings().await.unwrap_err();
    assert!(matches!(err, Error::NotAuthenticated));
    assert!(err.is_auth_expired());
}

#[tokio::test]
async fn test_service_error_envelope_parsed() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/hotels/missing"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({ "message": "Hotel not found" })),
        )
        .mount(&server)
        .await;

    let err = client.get_hotel("missing").await.unwrap_err();
    match err {
        Error::Api { ref message, status } => {
            assert_eq!(status, 404);
            assert_eq!(message, "Hotel not found");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_malformed_body_reports_deserialization_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/hotels/abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = client.get_hotel("abc123").await.unwrap_err();
    assert!(matches!(err, Error::Deserialization { .. }));
}

#[tokio::test]
async fn test_multibyte_body_preview_reports_deserialization_error() {
    let (server, client) = setup().await;

    // 300 bytes of multi-byte characters; the preview must not split one.
    Mock::given(method("GET"))
        .and(path("/hotels/abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_string("€".repeat(100)))
        .mount(&server)
        .await;

    let err = client.get_hotel("abc123").await.unwrap_err();
    match err {
        Error::Deserialization { message, .. } => assert!(message.contains('€')),
        other => panic!("expected Deserialization error, got {other:?}"),
    }
}
