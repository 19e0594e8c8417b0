use axum::extract::{Json, Query, State};
use chrono::{Local, NaiveDateTime, NaiveTime, Timelike};
use reqwest::StatusCode;

use crate::api::{fare_service, geo_service};
use crate::comment::select_comment;
use crate::model::{Coord, TripRequest};

use super::types::*;

pub type Result<T> = std::result::Result<T, ErrorResponse>;

pub async fn reverse_geocode(
    State(geo): State<geo_service::Client>,
    Query(r): Query<ReverseQuery>,
) -> Json<ReverseResponse> {
    let resolution = geo.reverse_geocode(Coord::new(r.lat, r.lon)).await;

    Json(ReverseResponse {
        resolved: resolution.is_resolved(),
        address: resolution.into_inner(),
    })
}

pub async fn geocode(
    State(geo): State<geo_service::Client>,
    Query(r): Query<GeocodeQuery>,
) -> Result<Json<GeocodeResponse>> {
    if r.q.trim().is_empty() {
        return Err(ErrorResponse::new(
            StatusCode::BAD_REQUEST,
            "please enter an address",
        ));
    }

    let coord = geo.forward_geocode(&r.q).await.ok_or_else(|| {
        ErrorResponse::new(
            StatusCode::NOT_FOUND,
            "address not found, try being more specific",
        )
    })?;

    let address = geo.reverse_geocode(coord).await.into_inner();

    Ok(Json(GeocodeResponse {
        lat: coord.lat,
        lon: coord.lon,
        address,
    }))
}

pub async fn predict(
    State(geo): State<geo_service::Client>,
    State(fare): State<fare_service::Client>,
    Query(r): Query<PredictQuery>,
) -> Result<Json<PredictResponse>> {
    let trip = trip_from_query(&r, Local::now().naive_local())?;

    let result = fare.predict(&trip).await.inspect_err(|e| {
        log::warn!("prediction failed: {e}");
    })?;

    let choice = select_comment(result.fare, &mut rand::thread_rng());

    let pickup_address = geo.reverse_geocode(trip.pickup()).await.into_inner();
    let dropoff_address = geo.reverse_geocode(trip.dropoff()).await.into_inner();

    let pickup_at = trip.pickup_at();

    Ok(Json(PredictResponse {
        fare: result.fare,
        fare_display: result.display(),
        comment: choice.text.to_string(),
        image: choice.image.to_string(),
        date: pickup_at.format("%d/%m/%Y").to_string(),
        time: pickup_at.format("%H:%M").to_string(),
        pickup_address,
        dropoff_address,
        passenger_count: trip.passenger_count(),
    }))
}

fn trip_from_query(
    r: &PredictQuery,
    now: NaiveDateTime,
) -> std::result::Result<TripRequest, crate::model::TripError> {
    let default_time = NaiveTime::from_hms_opt(now.hour(), now.minute(), 0).unwrap_or(now.time());
    let pickup_at = r
        .date
        .unwrap_or(now.date())
        .and_time(r.time.unwrap_or(default_time));

    let pickup = Coord::new(
        r.pickup_latitude.unwrap_or(Coord::DEFAULT_PICKUP.lat),
        r.pickup_longitude.unwrap_or(Coord::DEFAULT_PICKUP.lon),
    );
    let dropoff = Coord::new(
        r.dropoff_latitude.unwrap_or(Coord::DEFAULT_DROPOFF.lat),
        r.dropoff_longitude.unwrap_or(Coord::DEFAULT_DROPOFF.lon),
    );

    TripRequest::new(pickup, dropoff, pickup_at, r.passenger_count.unwrap_or(1))
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_milli_opt(18, 42, 17, 250)
            .unwrap()
    }

    #[test]
    fn empty_query_uses_defaults() {
        let trip = trip_from_query(&PredictQuery::default(), now()).unwrap();

        assert_eq!(trip.pickup(), Coord::DEFAULT_PICKUP);
        assert_eq!(trip.dropoff(), Coord::DEFAULT_DROPOFF);
        assert_eq!(trip.passenger_count(), 1);
        assert_eq!(trip.pickup_datetime(), "2024-03-09 18:42:00");
    }

    #[test]
    fn explicit_fields_win() {
        let query = PredictQuery {
            date: NaiveDate::from_ymd_opt(2024, 1, 1),
            time: NaiveTime::from_hms_opt(12, 0, 0),
            pickup_latitude: Some(40.7),
            pickup_longitude: Some(-73.9),
            dropoff_latitude: Some(40.8),
            dropoff_longitude: Some(-74.0),
            passenger_count: Some(3),
        };

        let trip = trip_from_query(&query, now()).unwrap();

        assert_eq!(trip.pickup(), Coord::new(40.7, -73.9));
        assert_eq!(trip.dropoff(), Coord::new(40.8, -74.0));
        assert_eq!(trip.passenger_count(), 3);
        assert_eq!(trip.pickup_datetime(), "2024-01-01 12:00:00");
    }

    #[test]
    fn out_of_range_passengers_are_rejected() {
        let query = PredictQuery {
            passenger_count: Some(12),
            ..Default::default()
        };

        assert!(trip_from_query(&query, now()).is_err());
    }
}
