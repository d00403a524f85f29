use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::WorldClockError;

// API endpoint for the Google Geocoding service
const GEOCODE_ENDPOINT: &str = "https://maps.googleapis.com/maps/api/geocode/json";

/// A resolved place: the original query plus coordinates and a display
/// address. Lives only for the duration of one lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub query: String,
    pub latitude: f64,
    pub longitude: f64,
    pub address: String,
}

/// Resolves a free-text place name to coordinates.
///
/// Narrow contract so any backing service can be substituted; the bot only
/// ever calls this one method.
#[async_trait]
pub trait GeocodeProvider: Send + Sync {
    async fn geocode(&self, query: &str) -> Result<Location, WorldClockError>;
}

/// Geocoder backed by the Google Geocoding API.
pub struct GoogleGeocoder {
    client: reqwest::Client,
    api_key: String,
}

impl GoogleGeocoder {
    pub fn new(client: reqwest::Client, api_key: String) -> Self {
        Self { client, api_key }
    }
}

#[async_trait]
impl GeocodeProvider for GoogleGeocoder {
    async fn geocode(&self, query: &str) -> Result<Location, WorldClockError> {
        debug!("Geocoding '{}'", query);

        let response: GeocodeResponse = self.client
            .get(GEOCODE_ENDPOINT)
            .query(&[("address", query), ("key", self.api_key.as_str())])
            .send()
            .await?
            .json()
            .await?;

        if response.status != "OK" {
            warn!(
                "Geocoding '{}' failed with status {} ({})",
                query,
                response.status,
                response.error_message.as_deref().unwrap_or("no detail")
            );
            return Err(WorldClockError::Lookup(response.status));
        }

        // An "OK" response carries at least one result, but don't trust that.
        let first = response.results.into_iter().next()
            .ok_or_else(|| WorldClockError::Lookup("ZERO_RESULTS".to_string()))?;

        debug!("Geocoded '{}' to {}", query, first.formatted_address);
        Ok(Location {
            query: query.to_string(),
            latitude: first.geometry.location.lat,
            longitude: first.geometry.location.lng,
            address: first.formatted_address,
        })
    }
}

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    status: String,
    #[serde(default)]
    results: Vec<GeocodeResult>,
    #[serde(default)]
    error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeocodeResult {
    geometry: Geometry,
    formatted_address: String,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    location: LatLng,
}

#[derive(Debug, Deserialize)]
struct LatLng {
    lat: f64,
    lng: f64,
}
