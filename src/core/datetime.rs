//! Date handling shared across the journal.
//!
//! Entries are keyed by a calendar-day *label* such as `Mon Oct 19 2026`.
//! Labels are compared as strings; they are only parsed back into dates
//! when ordering or measuring gaps matters.

use chrono::{DateTime, Datelike, Duration, Local, NaiveDate, NaiveTime, TimeZone, Weekday};

/// Format used for entry date labels.
pub const LABEL_FORMAT: &str = "%a %b %d %Y";

/// Milliseconds in one day.
pub const DAY_MILLIS: i64 = 24 * 60 * 60 * 1000;

/// Render a calendar day as an entry label.
#[must_use]
pub fn date_label(date: NaiveDate) -> String {
    date.format(LABEL_FORMAT).to_string()
}

/// The label for the calendar day containing `now`.
#[must_use]
pub fn today_label<Tz: TimeZone>(now: &DateTime<Tz>) -> String {
    date_label(now.date_naive())
}

/// The label for the calendar day 24 hours before `now`.
#[must_use]
pub fn yesterday_label<Tz: TimeZone>(now: &DateTime<Tz>) -> String {
    date_label((now.clone() - Duration::days(1)).date_naive())
}

/// Parse an entry label back into a calendar day.
///
/// ISO dates (`2026-10-19`) are accepted too, so entries imported from
/// other tools still sort. Returns `None` for anything else.
#[must_use]
pub fn parse_label(label: &str) -> Option<NaiveDate> {
    let label = label.trim();
    NaiveDate::parse_from_str(label, LABEL_FORMAT)
        .or_else(|_| NaiveDate::parse_from_str(label, "%Y-%m-%d"))
        .ok()
}

/// Epoch milliseconds for `now`.
#[must_use]
pub fn epoch_millis<Tz: TimeZone>(now: &DateTime<Tz>) -> i64 {
    now.timestamp_millis()
}

/// Local midnight at the start of `date`, as epoch milliseconds.
///
/// Falls back to UTC midnight when the local midnight does not exist
/// (DST gaps).
#[must_use]
pub fn local_midnight_millis(date: NaiveDate) -> i64 {
    let midnight = date.and_time(NaiveTime::MIN);
    Local
        .from_local_datetime(&midnight)
        .earliest()
        .map_or_else(|| midnight.and_utc().timestamp_millis(), |t| t.timestamp_millis())
}

/// Parse a natural language target date.
///
/// Supports patterns like:
/// - `today`, `tomorrow`
/// - `monday`, `next friday` (next occurrence)
/// - `next week`, `next month`
/// - `in 3 days`, `in 2 weeks`, `in 6 months`
/// - `dec 15`, `december 15`
/// - `2026-12-15` (ISO format), `12/15/2026`
///
/// Returns `None` if the input cannot be parsed.
#[must_use]
pub fn parse_target_date(input: &str, today: NaiveDate) -> Option<NaiveDate> {
    let input = input.trim().to_lowercase();

    match input.as_str() {
        "today" => return Some(today),
        "tomorrow" => return Some(today + Duration::days(1)),
        "next week" => return Some(today + Duration::days(7)),
        "next month" => return today.checked_add_months(chrono::Months::new(1)),
        _ => {},
    }

    parse_relative_offset(&input, today)
        .or_else(|| parse_weekday(&input, today))
        .or_else(|| parse_month_day(&input, today))
        .or_else(|| NaiveDate::parse_from_str(&input, "%Y-%m-%d").ok())
        .or_else(|| parse_us_date(&input, today))
}

/// Parse "in X days/weeks/months" patterns.
fn parse_relative_offset(input: &str, today: NaiveDate) -> Option<NaiveDate> {
    let parts: Vec<&str> = input.split_whitespace().collect();

    if parts.len() != 3 || parts[0] != "in" {
        return None;
    }

    let amount: u32 = parts[1].parse().ok()?;
    match parts[2].trim_end_matches('s') {
        "day" => Some(today + Duration::days(i64::from(amount))),
        "week" => Some(today + Duration::weeks(i64::from(amount))),
        "month" => today.checked_add_months(chrono::Months::new(amount)),
        _ => None,
    }
}

/// Parse weekday names.
fn parse_weekday(input: &str, today: NaiveDate) -> Option<NaiveDate> {
    let (is_next, day_str) = input
        .strip_prefix("next ")
        .map_or((false, input), |rest| (true, rest));

    let target_weekday = match day_str {
        "monday" | "mon" => Weekday::Mon,
        "tuesday" | "tue" | "tues" => Weekday::Tue,
        "wednesday" | "wed" => Weekday::Wed,
        "thursday" | "thu" | "thur" | "thurs" => Weekday::Thu,
        "friday" | "fri" => Weekday::Fri,
        "saturday" | "sat" => Weekday::Sat,
        "sunday" | "sun" => Weekday::Sun,
        _ => return None,
    };

    let mut days_until = (i64::from(target_weekday.num_days_from_sunday())
        - i64::from(today.weekday().num_days_from_sunday())
        + 7)
        % 7;

    if days_until == 0 || is_next {
        days_until += 7;
    }

    Some(today + Duration::days(days_until))
}

/// Parse month and day patterns, rolling into next year once passed.
fn parse_month_day(input: &str, today: NaiveDate) -> Option<NaiveDate> {
    let parts: Vec<&str> = input.split_whitespace().collect();

    if parts.len() != 2 {
        return None;
    }

    let month = parse_month_name(parts[0])?;
    let day: u32 = parts[1].parse().ok()?;

    let date = NaiveDate::from_ymd_opt(today.year(), month, day)?;
    if date < today {
        return NaiveDate::from_ymd_opt(today.year() + 1, month, day);
    }
    Some(date)
}

fn parse_month_name(input: &str) -> Option<u32> {
    match input {
        "jan" | "january" => Some(1),
        "feb" | "february" => Some(2),
        "mar" | "march" => Some(3),
        "apr" | "april" => Some(4),
        "may" => Some(5),
        "jun" | "june" => Some(6),
        "jul" | "july" => Some(7),
        "aug" | "august" => Some(8),
        "sep" | "sept" | "september" => Some(9),
        "oct" | "october" => Some(10),
        "nov" | "november" => Some(11),
        "dec" | "december" => Some(12),
        _ => None,
    }
}

/// Parse US date format (MM/DD or MM/DD/YYYY).
fn parse_us_date(input: &str, today: NaiveDate) -> Option<NaiveDate> {
    let parts: Vec<&str> = input.split('/').collect();

    match parts.as_slice() {
        [month, day] => {
            let month: u32 = month.parse().ok()?;
            let day: u32 = day.parse().ok()?;
            let date = NaiveDate::from_ymd_opt(today.year(), month, day)?;
            if date < today {
                return NaiveDate::from_ymd_opt(today.year() + 1, month, day);
            }
            Some(date)
        },
        [month, day, year] => {
            let month: u32 = month.parse().ok()?;
            let day: u32 = day.parse().ok()?;
            let year: i32 = year.parse().ok()?;
            let year = if year < 100 { 2000 + year } else { year };
            NaiveDate::from_ymd_opt(year, month, day)
        },
        _ => None,
    }
}
