use std::time::Duration;

use anyhow::anyhow;
use reqwest::{StatusCode, Url};

use super::types::*;
use crate::cache::TtlCache;
use crate::model::{Coord, CoordKey};

#[derive(Clone)]
pub struct Client {
    inner: reqwest::Client,
    base: Url,
    addresses: TtlCache<CoordKey, Resolution<String>>,
    places: TtlCache<String, Option<Coord>>,
}

impl Client {
    pub fn new(
        base: &str,
        user_agent: &str,
        timeout: Duration,
        cache_ttl: Duration,
    ) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()
            .map_err(|e| anyhow!("error building geocoder client: {e}"))?;
        let base = with_trailing_slash(base)
            .parse()
            .map_err(|e| anyhow!("{} is not a valid url: {}", base, e))?;

        Ok(Self {
            inner: client,
            base,
            addresses: TtlCache::new(cache_ttl),
            places: TtlCache::new(cache_ttl),
        })
    }

    /// Human-readable address for `coord`. Every failure degrades to the
    /// formatted coordinate, so the result is always displayable.
    pub async fn reverse_geocode(&self, coord: Coord) -> Resolution<String> {
        if !coord.is_valid() {
            log::warn!("not reverse geocoding invalid coordinate {}", coord.display());
            return Resolution::Fallback(coord.display());
        }

        let key = CoordKey::from(coord);
        if let Some(cached) = self.addresses.get(&key) {
            return cached;
        }

        let resolution = match self.fetch_reverse(coord).await {
            Ok(response) => compose_address(&response, coord),
            Err(e) => {
                log::warn!("reverse geocode of {} failed: {e}", coord.display());
                Resolution::Fallback(coord.display())
            }
        };

        self.addresses.insert(key, resolution.clone());
        resolution
    }

    /// Coordinate of the first search hit, `None` when nothing usable came back.
    pub async fn forward_geocode(&self, address: &str) -> Option<Coord> {
        let query = address.trim();
        if query.is_empty() {
            return None;
        }

        if let Some(cached) = self.places.get(&query.to_string()) {
            return cached;
        }

        let coord = match self.fetch_search(query).await {
            Ok(places) => places.first().and_then(SearchPlace::coord),
            Err(e) => {
                log::warn!("forward geocode of {query:?} failed: {e}");
                None
            }
        };

        if coord.is_none() {
            log::info!("no coordinates found for {query:?}");
        }

        self.places.insert(query.to_string(), coord);
        coord
    }

    async fn fetch_reverse(&self, coord: Coord) -> anyhow::Result<ReverseResponse> {
        let url = self
            .base
            .join("reverse")
            .map_err(|e| anyhow!("error joining url: {e}"))?;

        log::debug!("reverse geocoding {}", coord.display());

        let response = self
            .inner
            .get(url)
            .query(&[
                ("lat", coord.lat.to_string()),
                ("lon", coord.lon.to_string()),
                ("format", "json".to_string()),
                ("addressdetails", "1".to_string()),
            ])
            .send()
            .await?;

        if response.status() != StatusCode::OK {
            return Err(anyhow!("geocoder returned {}", response.status()));
        }

        Ok(response.json().await?)
    }

    async fn fetch_search(&self, query: &str) -> anyhow::Result<Vec<SearchPlace>> {
        let url = self
            .base
            .join("search")
            .map_err(|e| anyhow!("error joining url: {e}"))?;

        log::debug!("forward geocoding {query:?}");

        let response = self
            .inner
            .get(url)
            .query(&[("q", query), ("format", "json"), ("limit", "1")])
            .send()
            .await?;

        if response.status() != StatusCode::OK {
            return Err(anyhow!("geocoder returned {}", response.status()));
        }

        Ok(response.json().await?)
    }
}

// Relative joins keep any path prefix of the base, e.g. `https://proxy/nominatim`.
fn with_trailing_slash(base: &str) -> String {
    if base.ends_with('/') {
        base.to_string()
    } else {
        format!("{base}/")
    }
}

/// Builds a short address from the most specific fields present:
/// street, then neighbourhood, then city, joined by `", "`.
pub fn compose_address(response: &ReverseResponse, coord: Coord) -> Resolution<String> {
    let a = &response.address;
    let mut parts = Vec::new();

    match (&a.house_number, &a.road) {
        (Some(number), Some(road)) => parts.push(format!("{number} {road}")),
        (None, Some(road)) => parts.push(road.clone()),
        _ => {}
    }

    if let Some(area) = a.neighbourhood.as_ref().or(a.suburb.as_ref()) {
        parts.push(area.clone());
    }

    if let Some(city) = a.city.as_ref().or(a.town.as_ref()) {
        parts.push(city.clone());
    }

    if !parts.is_empty() {
        return Resolution::Resolved(parts.join(", "));
    }

    match &response.display_name {
        Some(name) if !name.is_empty() => Resolution::Resolved(name.clone()),
        _ => Resolution::Fallback(coord.display()),
    }
}
