use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::time_utils::ClockTime;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SlotCategory {
    Lecture,
    Tutorial,
    Lab,
    Seminar,
    OfficeHours,
}

/// One recurring weekly class meeting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub id: String,
    pub course_code: String,
    pub course_name: String,
    /// 1 = Monday .. 7 = Sunday
    pub day_of_week: u8,
    pub start_time: ClockTime,
    pub end_time: ClockTime,
    pub room: String,
    pub students: u32,
    pub category: SlotCategory,
    #[serde(default)]
    pub year_group: Option<String>,
    #[serde(default)]
    pub materials_uploaded: bool,
    #[serde(default)]
    pub has_upcoming_assignment: bool,
    #[serde(default)]
    pub new_questions: u32,
    pub color: String,
}

impl TimeSlot {
    pub fn validate(&self) -> Result<(), AppError> {
        if !(1..=7).contains(&self.day_of_week) {
            return Err(AppError::InvalidSlot {
                id: self.id.clone(),
                reason: format!("day_of_week {} is outside 1..=7", self.day_of_week),
            });
        }
        if self.start_time >= self.end_time {
            return Err(AppError::InvalidSlot {
                id: self.id.clone(),
                reason: format!(
                    "start {} is not before end {}",
                    self.start_time, self.end_time
                ),
            });
        }
        Ok(())
    }

    pub fn duration_minutes(&self) -> i64 {
        self.end_time.minutes_from_midnight() - self.start_time.minutes_from_midnight()
    }
}
