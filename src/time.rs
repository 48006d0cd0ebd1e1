//! Time formatting helpers: humanized durations and absolute timestamps.

use chrono::{DateTime, Datelike, Utc};

/// Default pattern for absolute timestamps shown in tooltips.
pub const DEFAULT_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M";

fn unit(count: i64, one: &str, many: &str) -> String {
    if count == 1 {
        one.to_string()
    } else {
        format!("{count} {many}")
    }
}

/// Humanized distance between two instants, without "ago"/"in" suffix.
///
/// Thresholds: under 45s "a few seconds", under 90s "a minute", under 45
/// minutes "N minutes", under 90 minutes "an hour", under 22 hours "N hours",
/// under 36 hours "a day", under 26 days "N days", under 46 days "a month",
/// under 11 months "N months", under 18 months "a year", then "N years".
pub fn relative_duration(value: DateTime<Utc>, reference: DateTime<Utc>) -> String {
    let millis = (value - reference).num_milliseconds().unsigned_abs() as f64;
    let seconds = (millis / 1000.0).round() as i64;
    if seconds <= 44 {
        return "a few seconds".to_string();
    }
    if seconds <= 89 {
        return "a minute".to_string();
    }

    let minutes = (millis / 60_000.0).round() as i64;
    if minutes <= 44 {
        return unit(minutes, "a minute", "minutes");
    }
    if minutes <= 89 {
        return "an hour".to_string();
    }

    let hours = (millis / 3_600_000.0).round() as i64;
    if hours <= 21 {
        return unit(hours, "an hour", "hours");
    }
    if hours <= 35 {
        return "a day".to_string();
    }

    let days_exact = millis / 86_400_000.0;
    let days = days_exact.round() as i64;
    if days <= 25 {
        return unit(days, "a day", "days");
    }
    if days <= 45 {
        return "a month".to_string();
    }

    let months = (days_exact / 30.436_875).round() as i64;
    if months <= 10 {
        return unit(months, "a month", "months");
    }
    if months <= 17 {
        return "a year".to_string();
    }

    let years = (days_exact / 365.2425).round() as i64;
    unit(years, "a year", "years")
}

/// Absolute timestamp with a strftime-style pattern.
pub fn format_datetime(value: DateTime<Utc>, pattern: &str) -> String {
    value.format(pattern).to_string()
}

/// English ordinal suffix for a day of month.
pub fn ordinal(n: u32) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}

/// "Account created 5th March 2025 at 14:03"
pub fn account_created(created_at: DateTime<Utc>) -> String {
    format!(
        "Account created {} {} at {}",
        ordinal(created_at.day()),
        created_at.format("%B %Y"),
        created_at.format("%H:%M"),
    )
}
