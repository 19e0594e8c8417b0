pub mod endpoints;
pub mod router;
pub mod types;

use axum::response::{IntoResponse, Response};
use axum::Json;
use reqwest::StatusCode;

use crate::api::{fare_service, geo_service};
use crate::model::TripError;

#[derive(Clone)]
pub struct State {
    pub geo: geo_service::Client,
    pub fare: fare_service::Client,
}

impl State {
    pub fn new(geo: geo_service::Client, fare: fare_service::Client) -> Self {
        Self { geo, fare }
    }
}

impl axum::extract::FromRef<State> for geo_service::Client {
    fn from_ref(input: &State) -> Self {
        input.geo.clone()
    }
}

impl axum::extract::FromRef<State> for fare_service::Client {
    fn from_ref(input: &State) -> Self {
        input.fare.clone()
    }
}

impl IntoResponse for types::ErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self)).into_response()
    }
}

impl types::ErrorResponse {
    fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }
}

impl From<TripError> for types::ErrorResponse {
    fn from(value: TripError) -> Self {
        types::ErrorResponse::new(StatusCode::BAD_REQUEST, value.to_string())
    }
}

impl From<fare_service::PredictError> for types::ErrorResponse {
    fn from(value: fare_service::PredictError) -> Self {
        match value {
            fare_service::PredictError::Api { .. } => {
                types::ErrorResponse::new(StatusCode::BAD_GATEWAY, value.to_string())
            }
            other => types::ErrorResponse::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("error: {other}"),
            ),
        }
    }
}
