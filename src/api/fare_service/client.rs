use std::time::Duration;

use anyhow::anyhow;
use reqwest::{StatusCode, Url};

use super::types::*;
use crate::model::{FareResult, TripRequest};

#[derive(Clone)]
pub struct Client {
    inner: reqwest::Client,
    endpoint: Url,
}

impl Client {
    pub fn new(endpoint: &str, timeout: Option<Duration>) -> anyhow::Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder
            .build()
            .map_err(|e| anyhow!("error building prediction client: {e}"))?;
        let endpoint = endpoint
            .parse()
            .map_err(|e| anyhow!("{} is not a valid url: {}", endpoint, e))?;

        Ok(Self {
            inner: client,
            endpoint,
        })
    }

    /// Single attempt, no retry. Any status other than 200 is an
    /// [`PredictError::Api`] and the body is not read.
    pub async fn predict(&self, trip: &TripRequest) -> Result<FareResult, PredictError> {
        let params = build_params(trip);
        log::debug!("requesting prediction for {}", trip.pickup_datetime());

        let response = self
            .inner
            .get(self.endpoint.clone())
            .query(&params)
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(PredictError::Api {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        Ok(parse_response(&body)?)
    }
}

/// Query parameters of the prediction endpoint, in the order it documents.
pub fn build_params(trip: &TripRequest) -> Vec<(&'static str, String)> {
    let pickup = trip.pickup();
    let dropoff = trip.dropoff();

    vec![
        ("pickup_datetime", trip.pickup_datetime()),
        ("pickup_longitude", degrees(pickup.lon)),
        ("pickup_latitude", degrees(pickup.lat)),
        ("dropoff_longitude", degrees(dropoff.lon)),
        ("dropoff_latitude", degrees(dropoff.lat)),
        ("passenger_count", trip.passenger_count().to_string()),
    ]
}

pub fn parse_response(body: &[u8]) -> Result<FareResult, serde_json::Error> {
    let response: PredictResponse = serde_json::from_slice(body)?;
    Ok(response.into())
}

// Debug keeps the trailing ".0" on whole degrees ("-74.0", not "-74").
fn degrees(value: f64) -> String {
    format!("{value:?}")
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::model::Coord;

    #[test]
    fn params_carry_the_six_trip_fields() {
        let pickup_at = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        let trip =
            TripRequest::new(Coord::new(40.7, -73.9), Coord::new(40.8, -74.0), pickup_at, 2).unwrap();

        let params = build_params(&trip);

        assert_eq!(
            params,
            vec![
                ("pickup_datetime", "2024-01-01 12:00:00".to_string()),
                ("pickup_longitude", "-73.9".to_string()),
                ("pickup_latitude", "40.7".to_string()),
                ("dropoff_longitude", "-74.0".to_string()),
                ("dropoff_latitude", "40.8".to_string()),
                ("passenger_count", "2".to_string()),
            ]
        );
    }

    #[test]
    fn parses_fare() {
        assert_eq!(parse_response(br#"{"fare": 12.5}"#).unwrap(), FareResult { fare: 12.5 });
        assert_eq!(parse_response(br#"{"fare": 7}"#).unwrap(), FareResult { fare: 7.0 });
    }

    #[test]
    fn missing_fare_is_zero() {
        assert_eq!(parse_response(b"{}").unwrap(), FareResult { fare: 0.0 });
        assert_eq!(
            parse_response(br#"{"currency": "USD"}"#).unwrap(),
            FareResult { fare: 0.0 }
        );
    }

    #[test]
    fn malformed_body_is_an_error() {
        assert!(parse_response(b"<html>").is_err());
        assert!(parse_response(br#"{"fare": "cheap"}"#).is_err());
    }
}
