use chrono::{NaiveDate, NaiveTime};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct ReverseQuery {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Serialize, Deserialize)]
pub struct ReverseResponse {
    pub address: String,
    pub resolved: bool,
}

#[derive(Serialize, Deserialize)]
pub struct GeocodeQuery {
    #[serde(default)]
    pub q: String,
}

#[derive(Serialize, Deserialize)]
pub struct GeocodeResponse {
    pub lat: f64,
    pub lon: f64,
    pub address: String,
}

/// Every field is optional; gaps are filled with the current time, the
/// default Manhattan points and a single passenger.
#[derive(Serialize, Deserialize, Default)]
pub struct PredictQuery {
    pub date: Option<NaiveDate>,
    pub time: Option<NaiveTime>,
    pub pickup_latitude: Option<f64>,
    pub pickup_longitude: Option<f64>,
    pub dropoff_latitude: Option<f64>,
    pub dropoff_longitude: Option<f64>,
    pub passenger_count: Option<u8>,
}

#[derive(Serialize, Deserialize)]
pub struct PredictResponse {
    pub fare: f64,
    pub fare_display: String,
    pub comment: String,
    pub image: String,
    pub date: String,
    pub time: String,
    pub pickup_address: String,
    pub dropoff_address: String,
    pub passenger_count: u8,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ErrorResponse {
    #[serde(skip)]
    pub status: StatusCode,
    pub message: String,
}
