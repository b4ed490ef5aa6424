//! Availability window and the date parsing/formatting helpers around it.
//!
//! Flight data exists for departures between 2022-11-10 and 2022-11-30
//! inclusive. Form dates are `YYYY-MM-DD` strings taken to mean UTC
//! midnight; flight timestamps are ISO 8601, usually without an offset, and
//! are read as UTC wall-clock time.

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, TimeZone, Utc};

pub const MIN_YEAR: i32 = 2022;
pub const MIN_MONTH: u32 = 11;
pub const MIN_DAY: u32 = 10;
pub const MAX_YEAR: i32 = 2022;
pub const MAX_MONTH: u32 = 11;
pub const MAX_DAY: u32 = 30;

/// Rendered in place of a timestamp that cannot be parsed
pub const INVALID_DATE: &str = "Invalid Date";

const INPUT_FORMAT: &str = "%Y-%m-%d";

fn utc_midnight(date: NaiveDate) -> DateTime<Utc> {
    Utc.from_utc_datetime(&date.and_time(chrono::NaiveTime::MIN))
}

fn window_day(year: i32, month: u32, day: u32) -> NaiveDate {
    // The window constants are valid calendar days.
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN)
}

/// First selectable departure day, at UTC midnight
pub fn min_selectable_date() -> DateTime<Utc> {
    utc_midnight(window_day(MIN_YEAR, MIN_MONTH, MIN_DAY))
}

/// Last selectable departure day, at UTC midnight
pub fn max_selectable_date() -> DateTime<Utc> {
    utc_midnight(window_day(MAX_YEAR, MAX_MONTH, MAX_DAY))
}

/// True iff `min <= date < max + 1 day`, so every instant of the last day counts.
pub fn in_range(date: DateTime<Utc>) -> bool {
    date >= min_selectable_date() && date < max_selectable_date() + Duration::days(1)
}

/// `YYYY-MM-DD` from the UTC calendar fields of `date`
pub fn to_input_format(date: DateTime<Utc>) -> String {
    date.format(INPUT_FORMAT).to_string()
}

/// Parses a `YYYY-MM-DD` input string to UTC midnight of that day.
///
/// Returns `None` for anything that is not a real calendar day in that
/// exact shape.
pub fn from_input_format(input: &str) -> Option<DateTime<Utc>> {
    NaiveDate::parse_from_str(input, INPUT_FORMAT)
        .ok()
        .map(utc_midnight)
}

/// Offset-free timestamp with seconds, without seconds, or a bare date (midnight)
fn parse_naive(date_time: &str) -> Option<NaiveDateTime> {
    if let Ok(parsed) = date_time.parse::<NaiveDateTime>() {
        return Some(parsed);
    }
    if let Ok(parsed) = NaiveDateTime::parse_from_str(date_time, "%Y-%m-%dT%H:%M") {
        return Some(parsed);
    }
    NaiveDate::parse_from_str(date_time, INPUT_FORMAT)
        .ok()
        .map(|date| date.and_time(chrono::NaiveTime::MIN))
}

/// Wall-clock fields of a flight timestamp as written in the data
fn parse_wall_clock(date_time: &str) -> Option<NaiveDateTime> {
    if let Ok(with_offset) = DateTime::parse_from_rfc3339(date_time) {
        return Some(with_offset.naive_local());
    }
    parse_naive(date_time)
}

/// Parses a flight timestamp to an instant.
///
/// Timestamps with an offset are converted; timestamps without one are
/// taken as UTC.
pub fn parse_flight_instant(date_time: &str) -> Option<DateTime<Utc>> {
    if let Ok(with_offset) = DateTime::parse_from_rfc3339(date_time) {
        return Some(with_offset.with_timezone(&Utc));
    }
    parse_naive(date_time).map(|naive| Utc.from_utc_datetime(&naive))
}

/// `HH:MM`, 24-hour, e.g. "06:25"
pub fn format_time(date_time: &str) -> String {
    match parse_wall_clock(date_time) {
        Some(parsed) => parsed.format("%H:%M").to_string(),
        None => INVALID_DATE.to_string(),
    }
}

/// Long form date, e.g. "November 10, 2022"
pub fn format_date(date_time: &str) -> String {
    match parse_wall_clock(date_time) {
        Some(parsed) => parsed.format("%B %-d, %Y").to_string(),
        None => INVALID_DATE.to_string(),
    }
}

/// Same UTC calendar day
pub fn is_same_day(a: DateTime<Utc>, b: DateTime<Utc>) -> bool {
    a.date_naive() == b.date_naive()
}
