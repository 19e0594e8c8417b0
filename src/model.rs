use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

pub const MIN_PASSENGERS: u8 = 1;
pub const MAX_PASSENGERS: u8 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coord {
    pub lat: f64,
    pub lon: f64,
}

impl Coord {
    /// Reference Manhattan point used until a pickup is searched or edited.
    pub const DEFAULT_PICKUP: Coord = Coord {
        lat: 40.748817,
        lon: -73.985428,
    };

    pub const DEFAULT_DROPOFF: Coord = Coord {
        lat: 40.758817,
        lon: -73.975428,
    };

    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// `"lat, lon"` at four decimals, the last-resort display address.
    pub fn display(&self) -> String {
        format!("{:.4}, {:.4}", self.lat, self.lon)
    }

    /// Finite, latitude within [-90, 90] and longitude within [-180, 180].
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lon.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lon)
    }

    pub fn validate(&self) -> Result<(), TripError> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(TripError::Coordinate {
                lat: self.lat,
                lon: self.lon,
            })
        }
    }
}

/// Cache key for a coordinate, at the 1e-6 degree precision of the inputs.
/// Only meaningful for coordinates that pass [`Coord::is_valid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CoordKey(i64, i64);

impl From<Coord> for CoordKey {
    fn from(c: Coord) -> Self {
        const SCALE: f64 = 1e6;
        CoordKey((c.lat * SCALE).round() as i64, (c.lon * SCALE).round() as i64)
    }
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum TripError {
    #[error("passenger count must be between 1 and 8, got {0}")]
    PassengerCount(u8),

    #[error("invalid coordinate ({lat}, {lon})")]
    Coordinate { lat: f64, lon: f64 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct TripRequest {
    pickup: Coord,
    dropoff: Coord,
    pickup_at: NaiveDateTime,
    passenger_count: u8,
}

impl TripRequest {
    pub fn new(
        pickup: Coord,
        dropoff: Coord,
        pickup_at: NaiveDateTime,
        passenger_count: u8,
    ) -> Result<Self, TripError> {
        if !(MIN_PASSENGERS..=MAX_PASSENGERS).contains(&passenger_count) {
            return Err(TripError::PassengerCount(passenger_count));
        }

        pickup.validate()?;
        dropoff.validate()?;

        Ok(Self {
            pickup,
            dropoff,
            pickup_at,
            passenger_count,
        })
    }

    pub fn pickup(&self) -> Coord {
        self.pickup
    }

    pub fn dropoff(&self) -> Coord {
        self.dropoff
    }

    pub fn pickup_at(&self) -> NaiveDateTime {
        self.pickup_at
    }

    pub fn passenger_count(&self) -> u8 {
        self.passenger_count
    }

    /// `"<date> <time>"`, e.g. `"2024-01-01 12:00:00"`.
    pub fn pickup_datetime(&self) -> String {
        format!("{} {}", self.pickup_at.date(), self.pickup_at.time())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FareResult {
    pub fare: f64,
}

impl FareResult {
    pub fn display(&self) -> String {
        format!("${:.2}", self.fare)
    }
}
