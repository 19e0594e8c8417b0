use serde::{Deserialize, Serialize};

use crate::model::Coord;

#[derive(Serialize, Deserialize, Default, Debug)]
pub struct Address {
    pub house_number: Option<String>,
    pub road: Option<String>,
    pub neighbourhood: Option<String>,
    pub suburb: Option<String>,
    pub city: Option<String>,
    pub town: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ReverseResponse {
    #[serde(default)]
    pub address: Address,
    pub display_name: Option<String>,
}

/// Nominatim sends degrees as decimal strings; plain numbers are accepted too.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(untagged)]
pub enum Degrees {
    Number(f64),
    Text(String),
}

impl Degrees {
    pub fn value(&self) -> Option<f64> {
        match self {
            Degrees::Number(n) => Some(*n),
            Degrees::Text(s) => s.trim().parse().ok(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct SearchPlace {
    pub lat: Degrees,
    pub lon: Degrees,
}

impl SearchPlace {
    pub fn coord(&self) -> Option<Coord> {
        let lat = self.lat.value()?;
        let lon = self.lon.value()?;
        Some(Coord { lat, lon }).filter(Coord::is_valid)
    }
}

/// Outcome of a lookup that always yields something displayable.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution<T> {
    Resolved(T),
    Fallback(T),
}

impl<T> Resolution<T> {
    pub fn is_resolved(&self) -> bool {
        matches!(self, Resolution::Resolved(_))
    }

    pub fn value(&self) -> &T {
        match self {
            Resolution::Resolved(v) | Resolution::Fallback(v) => v,
        }
    }

    pub fn into_inner(self) -> T {
        match self {
            Resolution::Resolved(v) | Resolution::Fallback(v) => v,
        }
    }
}
