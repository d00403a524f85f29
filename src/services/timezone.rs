use async_trait::async_trait;
use chrono::Utc;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::WorldClockError;

// API endpoint for the Google Time Zone service
const TIMEZONE_ENDPOINT: &str = "https://maps.googleapis.com/maps/api/timezone/json";

/// UTC offset information for a coordinate pair, in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimezoneInfo {
    pub raw_offset: i64,
    pub dst_offset: i64,
}

impl TimezoneInfo {
    /// The full offset to apply to a UTC instant right now.
    pub fn total_offset(&self) -> i64 {
        self.raw_offset + self.dst_offset
    }
}

/// Resolves coordinates to a UTC offset.
#[async_trait]
pub trait TimezoneProvider: Send + Sync {
    async fn resolve(&self, latitude: f64, longitude: f64) -> Result<TimezoneInfo, WorldClockError>;
}

/// Timezone lookups backed by the Google Time Zone API.
///
/// The current Unix timestamp is sent with every request so the upstream
/// service computes the DST offset for "now"; nothing is computed locally.
pub struct GoogleTimezone {
    client: reqwest::Client,
    api_key: String,
}

impl GoogleTimezone {
    pub fn new(client: reqwest::Client, api_key: String) -> Self {
        Self { client, api_key }
    }
}

#[async_trait]
impl TimezoneProvider for GoogleTimezone {
    async fn resolve(&self, latitude: f64, longitude: f64) -> Result<TimezoneInfo, WorldClockError> {
        debug!("Resolving timezone for ({}, {})", latitude, longitude);

        let location = format!("{},{}", latitude, longitude);
        let timestamp = Utc::now().timestamp().to_string();
        let response: TimezoneResponse = self.client
            .get(TIMEZONE_ENDPOINT)
            .query(&[
                ("location", location.as_str()),
                ("timestamp", timestamp.as_str()),
                ("key", self.api_key.as_str()),
            ])
            .send()
            .await?
            .json()
            .await?;

        if response.status != "OK" {
            warn!(
                "Timezone lookup for ({}, {}) failed with status {}",
                latitude, longitude, response.status
            );
            return Err(WorldClockError::Lookup(response.status));
        }

        Ok(TimezoneInfo {
            raw_offset: response.raw_offset,
            dst_offset: response.dst_offset,
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TimezoneResponse {
    status: String,
    #[serde(default)]
    raw_offset: i64,
    #[serde(default)]
    dst_offset: i64,
}
