// Integration tests for the admin console and storefront against a
// mock booking service.
#![allow(clippy::unwrap_used)]

use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use stays_core::lifecycle::BookingRequest;
use stays_core::{
    AdminConsole, BookingStatus, CoreError, EntityId, SearchCriteria, ServiceConfig, Storefront,
    UNKNOWN_HOTEL,
};

// ── Helpers ─────────────────────────────────────────────────────────

fn api_client(server: &MockServer) -> stays_api::ApiClient {
    stays_api::ApiClient::from_reqwest(&server.uri(), reqwest::Client::new()).unwrap()
}

fn hotel_json(id: &str, name: &str, price: f64) -> serde_json::Value {
    json!({
        "_id": id,
        "name": name,
        "city": "Paris",
        "country": "France",
        "description": "",
        "type": "Boutique",
        "pricePerNight": price,
        "starRating": 4,
        "adultCount": 2,
        "childCount": 0,
        "facilities": ["Free WiFi"],
        "imageUrls": []
    })
}

fn booking_json(id: &str, hotel_id: &str, status: &str) -> serde_json::Value {
    json!({
        "_id": id,
        "hotelId": hotel_id,
        "checkIn": "2024-06-01",
        "checkOut": "2024-06-03",
        "adultCount": 2,
        "childCount": 0,
        "totalCost": 240.0,
        "status": status
    })
}

async fn mount_admin_collections(
    server: &MockServer,
    hotels: serde_json::Value,
    bookings: serde_json::Value,
) {
    Mock::given(method("GET"))
        .and(path("/admin/hotels"))
        .respond_with(ResponseTemplate::new(200).set_body_json(hotels))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/bookings/admin/all"))
        .respond_with(ResponseTemplate::new(200).set_body_json(bookings))
        .mount(server)
        .await;
}

// ── Admin console ───────────────────────────────────────────────────

#[tokio::test]
async fn overview_joins_hotel_names_and_keeps_dangling_rows() {
    let server = MockServer::start().await;
    mount_admin_collections(
        &server,
        json!([hotel_json("h-1", "Lotus", 120.0)]),
        json!([
            booking_json("b-1", "h-1", "pending"),
            booking_json("b-2", "h-deleted", "confirmed"),
        ]),
    )
    .await;

    let mut console = AdminConsole::with_client(api_client(&server));
    console.refresh().await.unwrap();

    let rows = console.overview();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].hotel_name, "Lotus");
    assert_eq!(rows[1].hotel_name, UNKNOWN_HOTEL);
    assert_eq!(rows[1].booking.status, BookingStatus::Confirmed);
}

#[tokio::test]
async fn set_status_refetches_both_collections() {
    let server = MockServer::start().await;
    mount_admin_collections(
        &server,
        json!([hotel_json("h-1", "Lotus", 120.0)]),
        json!([booking_json("b-1", "h-1", "pending")]),
    )
    .await;

    Mock::given(method("PUT"))
        .and(path("/bookings/admin/b-1/status"))
        .and(body_json(json!({ "status": "confirmed" })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(booking_json("b-1", "h-1", "confirmed")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let mut console = AdminConsole::with_client(api_client(&server));
    console.refresh().await.unwrap();

    console
        .set_status(&EntityId::from("b-1"), BookingStatus::Confirmed)
        .await
        .unwrap();

    // One refresh in setup, one after the mutation.
    let hotel_fetches = server
        .received_requests()
        .await
        .unwrap()
        .iter()
        .filter(|r| r.url.path() == "/admin/hotels")
        .count();
    assert_eq!(hotel_fetches, 2);
}

#[tokio::test]
async fn invalid_draft_sends_no_request() {
    let server = MockServer::start().await;
    // No POST mock mounted: any request would 404 and fail differently.
    mount_admin_collections(&server, json!([]), json!([])).await;

    let mut console = AdminConsole::with_client(api_client(&server));
    console.refresh().await.unwrap();

    let draft = stays_core::HotelDraft {
        name: "Lotus".into(),
        city: "Paris".into(),
        country: "France".into(),
        description: String::new(),
        hotel_type: "Boutique".into(),
        price_per_night: 120.0,
        star_rating: 9,
        adult_count: 2,
        child_count: 0,
        facilities: Vec::new(),
        image_urls: Vec::new(),
    };
    let err = console.create_hotel(&draft).await.unwrap_err();
    assert!(matches!(err, CoreError::Validation { .. }));

    let posts = server
        .received_requests()
        .await
        .unwrap()
        .iter()
        .filter(|r| r.method.as_str() == "POST")
        .count();
    assert_eq!(posts, 0);
}

#[tokio::test]
async fn delete_requires_a_token_and_then_refreshes() {
    let server = MockServer::start().await;
    mount_admin_collections(
        &server,
        json!([hotel_json("h-1", "Lotus", 120.0)]),
        json!([]),
    )
    .await;

    Mock::given(method("DELETE"))
        .and(path("/admin/hotels/h-1"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let mut console = AdminConsole::with_client(api_client(&server));
    console.refresh().await.unwrap();

    let pending = console.request_delete_hotel("Lotus").unwrap();
    assert_eq!(pending.describe(), "hotel h-1");

    // Nothing deleted until the token is passed back.
    let deletes_before = server
        .received_requests()
        .await
        .unwrap()
        .iter()
        .filter(|r| r.method.as_str() == "DELETE")
        .count();
    assert_eq!(deletes_before, 0);

    console.execute_delete(pending).await.unwrap();
}

// ── Storefront ──────────────────────────────────────────────────────

#[tokio::test]
async fn search_applies_inclusive_matching_to_results() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/hotels/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            hotel_json("h-1", "Lotus", 120.0),
            hotel_json("h-2", "Oak", 80.0),
        ])))
        .mount(&server)
        .await;

    let store = Storefront::with_client(api_client(&server), ServiceConfig::default());
    let criteria = SearchCriteria {
        name: Some("Lotus".into()),
        ..SearchCriteria::default()
    };
    let results = store.search(&criteria).await.unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].name, "Lotus");
}

#[tokio::test]
async fn book_prices_from_the_hotel_rate_and_posts() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/hotels/h-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(hotel_json("h-1", "Lotus", 100.0)))
        .mount(&server)
        .await;

    // Three nights at 100: the derived total rides along in the payload.
    Mock::given(method("POST"))
        .and(path("/bookings"))
        .and(body_json(json!({
            "hotelId": "h-1",
            "checkIn": "2024-01-01",
            "checkOut": "2024-01-04",
            "adultCount": 2,
            "childCount": 0,
            "totalCost": 300.0
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "_id": "b-9",
            "hotelId": "h-1",
            "checkIn": "2024-01-01",
            "checkOut": "2024-01-04",
            "adultCount": 2,
            "childCount": 0,
            "totalCost": 300.0,
            "status": "pending"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let store = Storefront::with_client(api_client(&server), ServiceConfig::default());
    let request = BookingRequest {
        hotel_id: EntityId::from("h-1"),
        check_in: "2024-01-01".parse().unwrap(),
        check_out: "2024-01-04".parse().unwrap(),
        adult_count: 2,
        child_count: 0,
    };
    let booking = store.book(&request).await.unwrap();
    assert_eq!(booking.status, BookingStatus::Pending);
    assert!((booking.total_cost - 300.0).abs() < 1e-9);
}

#[tokio::test]
async fn invalid_date_range_sends_no_request() {
    let server = MockServer::start().await;

    let store = Storefront::with_client(api_client(&server), ServiceConfig::default());
    let request = BookingRequest {
        hotel_id: EntityId::from("h-1"),
        check_in: "2024-01-04".parse().unwrap(),
        check_out: "2024-01-04".parse().unwrap(),
        adult_count: 2,
        child_count: 0,
    };
    let err = store.book(&request).await.unwrap_err();
    assert!(matches!(err, CoreError::Validation { .. }));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn cancelling_a_cancelled_booking_is_rejected_locally() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/bookings/my-bookings"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([booking_json("b-1", "h-1", "cancelled")])),
        )
        .mount(&server)
        .await;

    let store = Storefront::with_client(api_client(&server), ServiceConfig::default());
    let booking = store.find_booking("b-1").await.unwrap();
    let err = store.cancel(&booking).await.unwrap_err();
    assert!(matches!(err, CoreError::AlreadyCancelled { .. }));

    // The rejection happened before any PUT was issued.
    let puts = server
        .received_requests()
        .await
        .unwrap()
        .iter()
        .filter(|r| r.method.as_str() == "PUT")
        .count();
    assert_eq!(puts, 0);
}

#[tokio::test]
async fn missing_hotel_maps_to_hotel_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/hotels/nope"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({ "message": "Hotel not found" })))
        .mount(&server)
        .await;

    let store = Storefront::with_client(api_client(&server), ServiceConfig::default());
    let err = store.hotel(&EntityId::from("nope")).await.unwrap_err();
    assert!(matches!(err, CoreError::HotelNotFound { .. }));
}
