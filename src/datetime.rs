//! Fractional day/time conversions.
//!
//! The host application stores schedule positions as a single `f64`:
//! the day of the year plus a fractional time-of-day term. These helpers
//! convert between chrono calendar types and that encoding, plus a couple
//! of display shorthands.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike, Weekday};

/// Encode a date and time as day-of-year plus fractional time-of-day.
///
/// The fraction is `hour / 60 + minute / 3600`; seconds are ignored. This
/// matches the host's historical encoding exactly, so keep the arithmetic
/// as-is even though the weights look like minute/second divisors.
pub fn day_fraction(date_time: NaiveDateTime) -> f64 {
    f64::from(date_time.ordinal())
        + f64::from(date_time.hour()) / 60.0
        + f64::from(date_time.minute()) / 3600.0
}

/// Encode a duration as fractional days plus the hour and minute terms.
///
/// Same weighting as [`day_fraction`], applied to the duration's hour and
/// minute components on top of its fractional total days.
#[allow(clippy::cast_precision_loss)]
pub fn duration_fraction(duration: Duration) -> f64 {
    let total_days = duration.num_milliseconds() as f64 / 86_400_000.0;
    let hours = (duration.num_hours() % 24) as f64;
    let minutes = (duration.num_minutes() % 60) as f64;
    total_days + hours / 60.0 + minutes / 3600.0
}

/// Convert minutes-since-midnight to a time of day.
///
/// Truncating: 90.9 minutes is 01:30. Returns `None` for negative input or
/// anything at or past 24 hours.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn time_from_minutes(minutes: f64) -> Option<NaiveTime> {
    if !minutes.is_finite() || minutes < 0.0 {
        return None;
    }
    NaiveTime::from_hms_opt((minutes / 60.0) as u32, (minutes % 60.0) as u32, 0)
}

/// English weekday name for a date.
pub fn weekday_name(date: NaiveDate) -> &'static str {
    match date.weekday() {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Format a time of day as 24-hour `HH:MM`.
pub fn hhmm(time: NaiveTime) -> String {
    time.format("%H:%M").to_string()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp, clippy::panic)]
mod tests {
    use super::*;

    fn dt(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, 0)
            .unwrap()
    }

    #[test]
    fn day_fraction_of_midnight_is_day_of_year() {
        assert_eq!(day_fraction(dt(2025, 1, 1, 0, 0)), 1.0);
        assert_eq!(day_fraction(dt(2025, 2, 1, 0, 0)), 32.0);
    }

    #[test]
    fn day_fraction_adds_hour_and_minute_terms() {
        // Day 1, 12:30 -> 1 + 12/60 + 30/3600
        let expected = 1.0 + 12.0 / 60.0 + 30.0 / 3600.0;
        assert_eq!(day_fraction(dt(2025, 1, 1, 12, 30)), expected);
    }

    #[test]
    fn day_fraction_ignores_seconds() {
        let with_seconds = NaiveDate::from_ymd_opt(2025, 1, 1)
            .unwrap()
            .and_hms_opt(6, 15, 59)
            .unwrap();
        assert_eq!(day_fraction(with_seconds), day_fraction(dt(2025, 1, 1, 6, 15)));
    }

    #[test]
    fn duration_fraction_of_whole_days() {
        assert_eq!(duration_fraction(Duration::days(2)), 2.0);
    }

    #[test]
    fn duration_fraction_adds_component_terms() {
        // 1 day 6h 30m: 1.2708333... total days + 6/60 + 30/3600
        let d = Duration::days(1) + Duration::hours(6) + Duration::minutes(30);
        let total_days = (24.0 + 6.5) / 24.0;
        let expected = total_days + 6.0 / 60.0 + 30.0 / 3600.0;
        assert!((duration_fraction(d) - expected).abs() < 1e-9);
    }

    #[test]
    fn minutes_convert_to_time_of_day() {
        assert_eq!(
            time_from_minutes(90.0),
            NaiveTime::from_hms_opt(1, 30, 0)
        );
        assert_eq!(time_from_minutes(0.0), NaiveTime::from_hms_opt(0, 0, 0));
        assert_eq!(
            time_from_minutes(1439.0),
            NaiveTime::from_hms_opt(23, 59, 0)
        );
    }

    #[test]
    fn out_of_range_minutes_yield_none() {
        assert_eq!(time_from_minutes(-1.0), None);
        assert_eq!(time_from_minutes(1440.0), None);
        assert_eq!(time_from_minutes(f64::NAN), None);
    }

    #[test]
    fn weekday_names() {
        let monday = NaiveDate::from_ymd_opt(2025, 1, 6).unwrap();
        assert_eq!(weekday_name(monday), "Monday");
        assert_eq!(weekday_name(monday + Duration::days(6)), "Sunday");
    }

    #[test]
    fn hhmm_is_zero_padded_24_hour() {
        assert_eq!(hhmm(NaiveTime::from_hms_opt(6, 5, 0).unwrap()), "06:05");
        assert_eq!(hhmm(NaiveTime::from_hms_opt(23, 59, 59).unwrap()), "23:59");
    }
}
