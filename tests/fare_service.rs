use std::time::Duration;

use chrono::NaiveDate;
use serde_json::json;
use taxi_fare_gw::api::fare_service::{Client, PredictError};
use taxi_fare_gw::model::{Coord, FareResult, TripRequest};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn trip() -> TripRequest {
    let pickup_at = NaiveDate::from_ymd_opt(2024, 1, 1)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap();
    TripRequest::new(Coord::new(40.7, -73.9), Coord::new(40.8, -74.0), pickup_at, 2).unwrap()
}

fn client(server: &MockServer) -> Client {
    Client::new(&format!("{}/predict", server.uri()), None).unwrap()
}

#[tokio::test]
async fn predict_sends_trip_parameters() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/predict"))
        .and(query_param("pickup_datetime", "2024-01-01 12:00:00"))
        .and(query_param("pickup_longitude", "-73.9"))
        .and(query_param("pickup_latitude", "40.7"))
        .and(query_param("dropoff_longitude", "-74.0"))
        .and(query_param("dropoff_latitude", "40.8"))
        .and(query_param("passenger_count", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "fare": 12.5 })))
        .expect(1)
        .mount(&server)
        .await;

    let result = client(&server).predict(&trip()).await.unwrap();

    assert_eq!(result, FareResult { fare: 12.5 });
}

#[tokio::test]
async fn predict_defaults_missing_fare_to_zero() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/predict"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let result = client(&server).predict(&trip()).await.unwrap();

    assert_eq!(result.fare, 0.0);
}

#[tokio::test]
async fn predict_surfaces_status_without_retrying() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/predict"))
        .respond_with(ResponseTemplate::new(503).set_body_json(json!({ "fare": 99.0 })))
        .expect(1)
        .mount(&server)
        .await;

    let err = client(&server).predict(&trip()).await.unwrap_err();

    assert!(matches!(err, PredictError::Api { status: 503 }));
    assert_eq!(err.to_string(), "API error (code: 503)");
}

#[tokio::test]
async fn predict_rejects_unreadable_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/predict"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = client(&server).predict(&trip()).await.unwrap_err();

    assert!(matches!(err, PredictError::Decode(_)));
}

#[tokio::test]
async fn predict_honours_configured_timeout() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/predict"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "fare": 12.5 }))
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&server)
        .await;

    let fare = Client::new(
        &format!("{}/predict", server.uri()),
        Some(Duration::from_millis(50)),
    )
    .unwrap();

    let err = fare.predict(&trip()).await.unwrap_err();

    assert!(matches!(err, PredictError::Request(_)));
}

#[test]
fn rejects_invalid_endpoint() {
    assert!(Client::new("not a url", None).is_err());
}
