//! Chapter date normalization.
//!
//! The site prints recent chapters as "Today", "Yesterday" or "N hours ago"
//! and older ones as "Jan 5, 2024". Everything is normalized to epoch
//! milliseconds at local midnight. `0` means "unknown", not 1970-01-01.

use chrono::{DateTime, Local, NaiveDate, TimeDelta, TimeZone};
use tracing::debug;

/// Absolute date format, e.g. "Jan 5, 2024". `%B` also accepts full month
/// names and three-letter abbreviations.
pub const ABSOLUTE_DATE_FORMAT: &str = "%B %d, %Y";

/// Sentinel returned when a date is missing or cannot be parsed.
pub const UNKNOWN_DATE: i64 = 0;

/// Normalize a chapter date against the current local time.
#[must_use]
pub fn parse_chapter_date(date: &str) -> i64 {
    parse_chapter_date_at(date, &Local::now())
}

/// Normalize a chapter date relative to `now`.
///
/// Checked in order:
/// 1. contains "Today" or " ago": midnight of `now`'s day
/// 2. contains "Yesterday": midnight of the day before
/// 3. otherwise [`ABSOLUTE_DATE_FORMAT`] in `now`'s time zone
///
/// Never fails; anything unparseable yields [`UNKNOWN_DATE`].
///
/// # Example
///
/// ```rust
/// use chrono::{TimeZone, Utc};
/// use mangafox_source::date::parse_chapter_date_at;
///
/// let now = Utc.with_ymd_and_hms(2024, 3, 10, 15, 42, 7).unwrap();
/// let midnight = Utc.with_ymd_and_hms(2024, 3, 10, 0, 0, 0).unwrap();
///
/// assert_eq!(parse_chapter_date_at("3 hours ago", &now), midnight.timestamp_millis());
/// assert_eq!(parse_chapter_date_at("not a date", &now), 0);
/// ```
#[must_use]
pub fn parse_chapter_date_at<Tz: TimeZone>(date: &str, now: &DateTime<Tz>) -> i64 {
    let date = date.trim();
    let tz = now.timezone();
    let today = now.date_naive();

    if date.contains("Today") || date.contains(" ago") {
        debug!(date, "relative date collapsed to day boundary");
        return midnight_millis(&tz, today);
    }

    if date.contains("Yesterday") {
        return today
            .pred_opt()
            .map_or(UNKNOWN_DATE, |day| midnight_millis(&tz, day));
    }

    match NaiveDate::parse_and_remainder(date, ABSOLUTE_DATE_FORMAT) {
        Ok((day, _)) => midnight_millis(&tz, day),
        Err(err) => {
            debug!(date, error = %err, "unparseable chapter date");
            UNKNOWN_DATE
        }
    }
}

/// Epoch milliseconds of the first instant of `day` in `tz`.
///
/// That is midnight, except where a DST gap swallows midnight: the day then
/// starts at the first local minute that exists. Ambiguous midnights take the
/// earlier instant.
fn midnight_millis<Tz: TimeZone>(tz: &Tz, day: NaiveDate) -> i64 {
    let Some(mut local) = day.and_hms_opt(0, 0, 0) else {
        return UNKNOWN_DATE;
    };
    while local.date() == day {
        if let Some(start) = tz.from_local_datetime(&local).earliest() {
            return start.timestamp_millis();
        }
        local += TimeDelta::minutes(1);
    }
    UNKNOWN_DATE
}
