//! Integration tests for `SerpApiClient` using wiremock HTTP mocks.

use mapscout_core::types::Coordinate;
use mapscout_core::PlaceSearch;
use mapscout_serpapi::{IdKind, SerpApiClient, SerpApiError};
use wiremock::matchers::{method, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> SerpApiClient {
    SerpApiClient::with_base_url("test-key", 30, base_url)
        .expect("client construction should not fail")
}

#[tokio::test]
async fn resolve_by_place_id_reads_first_local_result() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "local_results": [
            {
                "title": "Tea se tandoor",
                "address": "12 MG Road, Bengaluru",
                "gps_coordinates": { "latitude": 12.97, "longitude": 77.59 },
                "rating": 4.4,
                "reviews": 1250,
                "data_id": "0x3bae193ae55bccef:0x9868969a476d8ec3"
            }
        ]
    });

    Mock::given(method("GET"))
        .and(query_param("engine", "google_maps"))
        .and(query_param("api_key", "test-key"))
        .and(query_param("place_id", "ChIJ-test"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let anchor = client
        .resolve_location("ChIJ-test", IdKind::PlaceId)
        .await
        .expect("should resolve anchor");

    assert_eq!(anchor.name, "Tea se tandoor");
    assert_eq!(anchor.address, "12 MG Road, Bengaluru");
    assert!((anchor.latitude - 12.97).abs() < f64::EPSILON);
    assert_eq!(anchor.rating, Some(4.4));
    assert_eq!(anchor.place_id.as_deref(), Some("ChIJ-test"));
    assert_eq!(
        anchor.data_id.as_deref(),
        Some("0x3bae193ae55bccef:0x9868969a476d8ec3")
    );
}

#[tokio::test]
async fn resolve_by_data_id_reads_place_info() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "place_info": {
            "title": "Tea se tandoor",
            "address": "12 MG Road, Bengaluru",
            "gps_coordinates": { "latitude": 12.97, "longitude": 77.59 },
            "rating": 4.4,
            "reviews": 1250,
            "place_id": "ChIJ-test"
        },
        "reviews": []
    });

    Mock::given(method("GET"))
        .and(query_param("engine", "google_maps_reviews"))
        .and(query_param("data_id", "0xabc:0xdef"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let anchor = client
        .resolve_location("0xabc:0xdef", IdKind::Auto)
        .await
        .expect("should resolve anchor via auto-detected data id");

    assert_eq!(anchor.name, "Tea se tandoor");
    assert_eq!(anchor.data_id.as_deref(), Some("0xabc:0xdef"));
    assert_eq!(anchor.place_id.as_deref(), Some("ChIJ-test"));
}

#[tokio::test]
async fn resolve_without_coordinates_is_not_found() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "local_results": [
            { "title": "Coordinate-less", "address": "Nowhere" }
        ]
    });

    Mock::given(method("GET"))
        .and(query_param("engine", "google_maps"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let result = client.resolve_location("ChIJ-test", IdKind::PlaceId).await;

    assert!(matches!(result, Err(SerpApiError::NotFound(_))));
}

#[tokio::test]
async fn resolve_with_empty_results_is_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let result = client.resolve_location("ChIJ-test", IdKind::PlaceId).await;

    assert!(matches!(result, Err(SerpApiError::NotFound(_))));
}

#[tokio::test]
async fn search_nearby_decodes_local_results() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "local_results": [
            {
                "title": "Corner Cafe",
                "address": "1 Brigade Road",
                "gps_coordinates": { "latitude": 12.98, "longitude": 77.60 },
                "rating": 4.1,
                "reviews": 312,
                "type": "Cafe",
                "phone": "+91 80 1234 5678"
            },
            {
                "title": "No Coordinates Bar",
                "address": "2 Brigade Road"
            }
        ]
    });

    Mock::given(method("GET"))
        .and(query_param("engine", "google_maps"))
        .and(query_param("type", "search"))
        .and(query_param("q", "cafe"))
        .and(query_param("ll", "@12.97,77.59,10km"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let hits = client
        .search_nearby(Coordinate::new(12.97, 77.59), "cafe", 10.0)
        .await
        .expect("should decode hits");

    assert_eq!(hits.len(), 2);
    assert_eq!(hits[0].name, "Corner Cafe");
    assert_eq!(hits[0].place_type.as_deref(), Some("Cafe"));
    assert!(hits[0].coordinate.is_some());
    // Missing coordinates do not fail decoding; the aggregator drops them later.
    assert!(hits[1].coordinate.is_none());
}

#[tokio::test]
async fn search_nearby_with_no_results_returns_empty_list() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let hits = client
        .search_nearby(Coordinate::new(0.0, 0.0), "cafe", 5.0)
        .await
        .expect("missing local_results should not be an error");

    assert!(hits.is_empty());
}

#[tokio::test]
async fn api_error_body_returns_err() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "error": "Invalid API key. Your API key should be here: https://serpapi.com/manage-api-key"
    });

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let result = client
        .search_nearby(Coordinate::new(0.0, 0.0), "cafe", 5.0)
        .await;

    let err = result.expect_err("API error body should fail the call");
    assert!(
        err.to_string().contains("Invalid API key"),
        "expected error message to surface, got: {err}"
    );
}

#[tokio::test]
async fn fetch_reviews_parses_reviews() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "place_info": {
            "title": "Tea se tandoor",
            "address": "12 MG Road, Bengaluru"
        },
        "reviews": [
            {
                "rating": 5.0,
                "date": "2 months ago",
                "user": { "name": "A. Reviewer" },
                "snippet": "Great chai and tandoori.",
                "details": { "food": "5", "service": "4" },
                "response": { "date": "1 month ago", "snippet": "Thank you!" }
            },
            {
                "rating": 3.0,
                "date": "a year ago",
                "user": { "name": "B. Reviewer" },
                "snippet": "Decent."
            }
        ]
    });

    Mock::given(method("GET"))
        .and(query_param("engine", "google_maps_reviews"))
        .and(query_param("data_id", "0xabc:0xdef"))
        .and(query_param("hl", "en"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let data = client
        .fetch_reviews("0xabc:0xdef", "en")
        .await
        .expect("should parse reviews");

    assert_eq!(data.reviews.len(), 2);
    assert_eq!(data.reviews[0].rating, Some(5.0));
    assert_eq!(
        data.reviews[0].user.as_ref().and_then(|u| u.name.as_deref()),
        Some("A. Reviewer")
    );
    assert!(data.reviews[0].response.is_some());
    assert!(data.reviews[1].response.is_none());
}

#[tokio::test]
async fn fetch_reviews_without_reviews_is_not_found() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "place_info": { "title": "Quiet Place" },
        "reviews": []
    });

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let result = client.fetch_reviews("0xabc:0xdef", "en").await;

    assert!(matches!(result, Err(SerpApiError::NotFound(_))));
}
