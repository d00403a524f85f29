/// User directory capability for profile timezone lookups
pub mod directory;
/// Geocoding provider contract and the Google-backed client
pub mod geocode;
/// HTTP health check endpoints
pub mod health;
/// Timezone provider contract and the Google-backed client
pub mod timezone;
/// The command pipelines composing the providers
pub mod worldclock;
