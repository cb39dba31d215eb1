use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::time_utils::ClockTime;

/// Academic deadline or exam shown on the month calendar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub date: NaiveDate,
    pub title: String,
    pub time: ClockTime,
    pub color: String,
}
