// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for date/time formatting.

use chrono::{DateTime, SecondsFormat, Utc};

/// Format a UTC timestamp the way GPX `<time>` elements expect:
/// RFC3339 truncated to seconds with a `Z` suffix.
pub fn format_gpx_time(date: DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Secs, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_gpx_time() {
        let date = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        assert_eq!(format_gpx_time(date), "2024-01-02T03:04:05Z");
    }

    #[test]
    fn test_format_gpx_time_drops_subseconds() {
        let date = Utc.timestamp_opt(1_704_164_645, 987_654_321).unwrap();
        assert!(!format_gpx_time(date).contains('.'));
    }
}
