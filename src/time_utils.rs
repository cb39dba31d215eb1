use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Days, NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

pub const DEFAULT_GRID_START_HOUR: u32 = 8;

/// "HH:MM" 形式の時刻 (24時間制, 分単位)
///
/// Ordering matches the lexicographic ordering of the zero-padded string form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClockTime(NaiveTime);

impl ClockTime {
    pub fn from_hm(hour: u32, minute: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0).map(Self)
    }

    /// Truncates seconds.
    pub fn from_naive_time(time: NaiveTime) -> Self {
        Self(time.with_second(0).and_then(|t| t.with_nanosecond(0)).unwrap_or(time))
    }

    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    pub fn as_naive_time(&self) -> NaiveTime {
        self.0
    }

    pub fn minutes_from_midnight(&self) -> i64 {
        i64::from(self.hour()) * 60 + i64::from(self.minute())
    }
}

impl FromStr for ClockTime {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || AppError::InvalidTime(s.to_string());

        let (hour_str, minute_str) = s.split_once(':').ok_or_else(invalid)?;
        let is_two_digits = |part: &str| part.len() == 2 && part.bytes().all(|b| b.is_ascii_digit());
        if !is_two_digits(hour_str) || !is_two_digits(minute_str) {
            return Err(invalid());
        }

        let hour: u32 = hour_str.parse().map_err(|_| invalid())?;
        let minute: u32 = minute_str.parse().map_err(|_| invalid())?;
        if hour > 23 || minute > 59 {
            return Err(invalid());
        }

        Self::from_hm(hour, minute).ok_or_else(invalid)
    }
}

impl TryFrom<String> for ClockTime {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ClockTime> for String {
    fn from(value: ClockTime) -> Self {
        value.to_string()
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

/// Minutes elapsed since the grid's first row. Negative when `time` is earlier.
pub fn minutes_since_grid_start(time: ClockTime, grid_start_hour: u32) -> i64 {
    time.minutes_from_midnight() - i64::from(grid_start_hour) * 60
}

pub fn to_pixel_offset(minutes: i64, pixels_per_hour: f64) -> f64 {
    minutes as f64 / 60.0 * pixels_per_hour
}

/// "13:00" -> "1:00pm"
pub fn format_clock_12h(time: ClockTime) -> String {
    let hour = time.hour();
    let display_hour = match hour {
        0 => 12,
        1..=12 => hour,
        _ => hour - 12,
    };
    let suffix = if hour < 12 { "am" } else { "pm" };

    format!("{}:{:02}{}", display_hour, time.minute(), suffix)
}

/// `start <= time < end`
pub fn is_within(time: ClockTime, start: ClockTime, end: ClockTime) -> bool {
    start <= time && time < end
}

pub fn minutes_until(now: ClockTime, target: ClockTime, reference_date: NaiveDate) -> i64 {
    let now_at = reference_date.and_time(now.as_naive_time());
    let target_at = reference_date.and_time(target.as_naive_time());
    (target_at - now_at).num_minutes()
}

/// Monday of the ISO week. The earliest representable date maps to itself.
pub fn start_of_iso_week(date: NaiveDate) -> NaiveDate {
    date.checked_sub_days(Days::new(u64::from(date.weekday().num_days_from_monday())))
        .unwrap_or(date)
}
