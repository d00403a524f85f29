use chrono::{DateTime, Duration, Utc};

/// Renders the wall clock at a given UTC offset as zero-padded 24-hour
/// `HH:MM`.
///
/// Shifts the instant by `offset_seconds` and reads the shifted instant's
/// UTC clock fields as the local time. The offset is the full offset to
/// apply (raw + DST for service lookups, the raw profile offset for users).
pub fn format_offset(offset_seconds: i64, now: DateTime<Utc>) -> String {
    let shifted = now + Duration::seconds(offset_seconds);
    shifted.format("%H:%M").to_string()
}
