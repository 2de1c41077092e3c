//! # Wall-clock and time-of-day helpers
//!
//! Everything that reads "now" goes through [`Clock`], so a request captures one
//! consistent reference time and tests can pin it. Slot times carry no seconds;
//! a reference time with seconds counts as already past its minute.

use chrono::{DateTime, NaiveTime, Timelike, Utc};
use chrono_tz::Tz;

/// Minutes in a day; a rounded time equal to this has rolled past midnight.
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// Source of the current time in the courses' operating timezone.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Tz>;
}

/// Reads the system clock and converts it into a fixed timezone.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    timezone: Tz,
}

impl SystemClock {
    pub fn new(timezone: Tz) -> Self {
        Self { timezone }
    }

    pub fn timezone(&self) -> Tz {
        self.timezone
    }
}

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Tz> {
        Utc::now().with_timezone(&self.timezone)
    }
}

/// Parses a 24-hour `HH:MM` time of day.
///
/// # Examples
///
/// ```
/// use teetalk_core::clock::parse_time;
///
/// assert!(parse_time("13:30").is_some());
/// assert!(parse_time("24:00").is_none());
/// assert!(parse_time("1:30 PM").is_none());
/// ```
pub fn parse_time(value: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(value.trim(), "%H:%M").ok()
}

/// Formats a time of day on a 12-hour clock, e.g. `1:30 PM` or `12:00 AM`.
///
/// # Examples
///
/// ```
/// use chrono::NaiveTime;
/// use teetalk_core::clock::format_12h;
///
/// let time = NaiveTime::from_hms_opt(13, 30, 0).unwrap();
/// assert_eq!(format_12h(time), "1:30 PM");
/// ```
pub fn format_12h(time: NaiveTime) -> String {
    let (is_pm, hour) = time.hour12();
    let period = if is_pm { "PM" } else { "AM" };
    format!("{}:{:02} {}", hour, time.minute(), period)
}

/// Formats a time of day as `HH:MM`.
pub fn format_24h(time: NaiveTime) -> String {
    time.format("%H:%M").to_string()
}

/// Minutes since midnight, truncated to the minute.
pub fn minutes_of_day(time: NaiveTime) -> u32 {
    time.hour() * 60 + time.minute()
}

/// Inverse of [`minutes_of_day`]; `None` for values at or past midnight.
pub fn time_from_minutes(minutes: u32) -> Option<NaiveTime> {
    if minutes >= MINUTES_PER_DAY {
        return None;
    }
    NaiveTime::from_hms_opt(minutes / 60, minutes % 60, 0)
}

/// Advances a time of day to the next multiple of `interval_minutes`.
///
/// A time exactly on a boundary is returned unchanged. Any seconds past the
/// minute push it to the next boundary. Returns `None` when the next boundary
/// is midnight of the following day, i.e. no slot is left today.
///
/// # Examples
///
/// ```
/// use chrono::NaiveTime;
/// use teetalk_core::clock::round_up_to_slot;
///
/// let now = NaiveTime::from_hms_opt(11, 21, 0).unwrap();
/// assert_eq!(round_up_to_slot(now, 10), NaiveTime::from_hms_opt(11, 30, 0));
/// ```
pub fn round_up_to_slot(time: NaiveTime, interval_minutes: u32) -> Option<NaiveTime> {
    let interval = interval_minutes.max(1);
    let mut minutes = minutes_of_day(time);
    if time.second() > 0 || time.nanosecond() > 0 {
        minutes += 1;
    }
    time_from_minutes(minutes.div_ceil(interval) * interval)
}

/// Serde adapter for `HH:MM` times of day.
pub mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub fn serialize<S>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&super::format_24h(*time))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        super::parse_time(&raw)
            .ok_or_else(|| D::Error::custom(format!("invalid time of day '{raw}', expected HH:MM")))
    }
}
