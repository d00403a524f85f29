use chrono::{DateTime, Utc};
use futures::future;
use std::sync::Arc;
use tracing::warn;

use crate::error::WorldClockError;
use crate::services::directory::UserDirectory;
use crate::services::geocode::{GeocodeProvider, Location};
use crate::services::timezone::TimezoneProvider;
use crate::utils::datetime::format_offset;
use crate::utils::defaults::{self, DEFAULT_LOCATIONS};

/// The three time-query pipelines, composed over pluggable providers.
///
/// The user directory is a capability: deployments on platforms without
/// profile timezones construct the service with `None` and the "time for"
/// query reports that it isn't available.
pub struct WorldClockService {
    geocoder: Arc<dyn GeocodeProvider>,
    timezones: Arc<dyn TimezoneProvider>,
    directory: Option<Arc<dyn UserDirectory>>,
}

impl WorldClockService {
    pub fn new(
        geocoder: Arc<dyn GeocodeProvider>,
        timezones: Arc<dyn TimezoneProvider>,
        directory: Option<Arc<dyn UserDirectory>>,
    ) -> Self {
        Self { geocoder, timezones, directory }
    }

    /// Resolves free text to a location, short-circuiting to the default
    /// table on an exact label match so no geocoding call is made.
    pub async fn resolve_location(&self, query: &str) -> Result<Location, WorldClockError> {
        if let Some(entry) = defaults::find(query) {
            return Ok(Location {
                query: query.to_string(),
                latitude: entry.latitude,
                longitude: entry.longitude,
                address: entry.label.to_string(),
            });
        }
        self.geocoder.geocode(query).await
    }

    // Full pipeline for one place: resolve, look up the offset, format.
    // Returns the rendered clock and the display address.
    async fn clock_for(
        &self,
        query: &str,
        now: DateTime<Utc>,
    ) -> Result<(String, String), WorldClockError> {
        let location = self.resolve_location(query).await?;
        let tz = self.timezones.resolve(location.latitude, location.longitude).await?;
        Ok((format_offset(tz.total_offset(), now), location.address))
    }

    /// Current time in one free-text place, rendered as `HH:MM (<address>)`.
    pub async fn time_in(&self, place: &str, now: DateTime<Utc>) -> Result<String, WorldClockError> {
        let (clock, address) = self.clock_for(place, now).await?;
        Ok(format!("{clock} ({address})"))
    }

    /// Current time across the default city table, rendered as
    /// `<label>: HH:MM` entries joined by `", "` in table order.
    ///
    /// The per-city pipelines run concurrently and every outcome is kept:
    /// a failed city renders as `<label>: unavailable` instead of dropping
    /// the whole reply.
    pub async fn defaults_overview(&self, now: DateTime<Utc>) -> String {
        let lookups = DEFAULT_LOCATIONS.iter().map(|entry| self.clock_for(entry.label, now));
        let settled = future::join_all(lookups).await;

        DEFAULT_LOCATIONS.iter()
            .zip(settled)
            .map(|(entry, outcome)| match outcome {
                Ok((clock, _)) => format!("{}: {}", entry.label, clock),
                Err(e) => {
                    warn!("Default city lookup for {} failed: {}", entry.label, e);
                    format!("{}: unavailable", entry.label)
                }
            })
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Current time for a named chat user, from their profile offset.
    ///
    /// A leading `@` is stripped; the directory match is exact and
    /// case-sensitive. Profile offsets are already DST-adjusted by the
    /// platform, so no DST component is added.
    pub fn time_for(&self, name: &str, now: DateTime<Utc>) -> Result<String, WorldClockError> {
        let directory = self.directory.as_ref()
            .ok_or(WorldClockError::DirectoryUnavailable)?;

        let name = name.strip_prefix('@').unwrap_or(name);
        let profile = directory.find_by_name(name)
            .ok_or_else(|| WorldClockError::UserNotFound(name.to_string()))?;

        let offset = profile.utc_offset_seconds
            .ok_or_else(|| WorldClockError::TimezoneUnset(profile.display_name.clone()))?;

        let clock = format_offset(offset, now);
        Ok(match profile.tz_label {
            Some(label) => format!("{clock} ({label})"),
            None => clock,
        })
    }
}
