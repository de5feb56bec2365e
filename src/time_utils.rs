// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for date/time formatting and revenue bucketing.

use chrono::{DateTime, Datelike, Duration, NaiveDate, SecondsFormat, Utc};

/// Format a UTC timestamp as RFC3339 using a `Z` suffix.
pub fn format_utc_rfc3339(date: DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// First day of the calendar month containing `date`.
pub fn month_start(date: NaiveDate) -> NaiveDate {
    // day 1 always exists for a valid (year, month)
    date.with_day(1).unwrap_or(date)
}

/// Monday of the calendar week containing `date`.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}

/// Dashboard label for a month bucket, e.g. "March 2025".
pub fn month_label(month: NaiveDate) -> String {
    month.format("%B %Y").to_string()
}

/// Dashboard label for a Monday-start week bucket, e.g. "March - Week 2".
///
/// Weeks are attributed to the month their Monday falls in, numbered from the
/// first seven days of that month.
pub fn week_label(monday: NaiveDate) -> String {
    let week_of_month = (monday.day0() / 7) + 1;
    format!("{} - Week {}", monday.format("%B"), week_of_month)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_month_start() {
        assert_eq!(month_start(d(2025, 3, 17)), d(2025, 3, 1));
        assert_eq!(month_start(d(2025, 3, 1)), d(2025, 3, 1));
    }

    #[test]
    fn test_week_start_is_monday() {
        // 2025-03-12 is a Wednesday; its week starts Monday 2025-03-10
        assert_eq!(week_start(d(2025, 3, 12)), d(2025, 3, 10));
        // A Monday maps to itself
        assert_eq!(week_start(d(2025, 3, 10)), d(2025, 3, 10));
        // A Sunday belongs to the preceding Monday's week
        assert_eq!(week_start(d(2025, 3, 16)), d(2025, 3, 10));
        // Week spanning a month boundary keys on its Monday
        assert_eq!(week_start(d(2025, 4, 1)), d(2025, 3, 31));
    }

    #[test]
    fn test_month_label() {
        assert_eq!(month_label(d(2025, 3, 1)), "March 2025");
        assert_eq!(month_label(d(2024, 12, 1)), "December 2024");
    }

    #[test]
    fn test_week_label() {
        assert_eq!(week_label(d(2025, 3, 3)), "March - Week 1");
        assert_eq!(week_label(d(2025, 3, 10)), "March - Week 2");
        assert_eq!(week_label(d(2025, 3, 24)), "March - Week 4");
        // Monday in the old month owns a week that spills into the next
        assert_eq!(week_label(d(2025, 3, 31)), "March - Week 5");
    }

    #[test]
    fn test_labels_stable_for_identical_input() {
        let monday = week_start(d(2025, 3, 14));
        assert_eq!(week_label(monday), week_label(monday));
        assert_eq!(month_label(d(2025, 3, 1)), month_label(d(2025, 3, 1)));
    }
}
