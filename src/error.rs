use thiserror::Error;

/// Failures a time query can run into.
///
/// Lookup and transport failures come from the geocoding/timezone
/// collaborators; the remaining variants belong to the "time for a user"
/// path. Every variant ends up rendered as a chat reply, never a crash.
#[derive(Debug, Error)]
pub enum WorldClockError {
    /// The upstream service answered with a non-success status. The message
    /// is the upstream status string verbatim.
    #[error("{0}")]
    Lookup(String),

    /// The request never produced a usable response (network, TLS, bad JSON).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// No user with that name in the directory.
    #[error("no user named {0}")]
    UserNotFound(String),

    /// The user exists but their profile has no numeric UTC offset.
    #[error("{0} has no timezone set")]
    TimezoneUnset(String),

    /// The deployment has no user directory to consult.
    #[error("user lookup is not available on this chat platform")]
    DirectoryUnavailable,
}
