//! Relative-time and UTC timestamp formatting

use chrono::{DateTime, Utc};

use super::FormatError;

/// Format the age of `past` relative to `now` as a coarse label
///
/// Produces "Just now" under one minute, then "{N}m ago", "{N}h ago",
/// "{N}d ago" from whole elapsed minutes, hours, and days. A `past`
/// later than `now` is rejected rather than silently clamped.
pub fn relative_time(
    past: DateTime<Utc>,
    now: DateTime<Utc>,
) -> Result<String, FormatError> {
    let elapsed = now.signed_duration_since(past);
    if elapsed < chrono::Duration::zero() {
        return Err(FormatError::FutureTimestamp);
    }

    let minutes = elapsed.num_minutes();
    let label = if minutes < 1 {
        "Just now".to_string()
    } else if minutes < 60 {
        format!("{}m ago", minutes)
    } else if minutes < 1440 {
        format!("{}h ago", minutes / 60)
    } else {
        format!("{}d ago", minutes / 1440)
    };

    Ok(label)
}

/// Format the age of `past` relative to the current system time
pub fn relative_time_from_now(past: DateTime<Utc>) -> Result<String, FormatError> {
    relative_time(past, Utc::now())
}

/// Render a timestamp as "YYYY-MM-DD HH:MM:SS" UTC
pub fn format_utc_date(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%Y-%m-%d %H:%M:%S").to_string()
}
