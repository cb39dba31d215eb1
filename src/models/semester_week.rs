use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SemesterWeek {
    pub number: u32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

