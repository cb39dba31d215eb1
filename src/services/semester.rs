use chrono::{Days, NaiveDate};

use crate::models::SemesterWeek;
use crate::time_utils::start_of_iso_week;

pub const SEMESTER_WEEK_COUNT: u32 = 15;
pub const MAX_SEMESTER_WEEKS: u32 = 53;

/// Week i starts on the Monday of `semester_start + i weeks`. A semester start that is
/// not a Monday is kept as-is, so week 1 may begin before it. The list stops early if
/// a week would end past the last representable date.
pub fn build_semester_weeks(semester_start: NaiveDate, week_count: u32) -> Vec<SemesterWeek> {
    (0..week_count)
        .map_while(|i| {
            let shifted = semester_start.checked_add_days(Days::new(u64::from(i) * 7))?;
            let start_date = start_of_iso_week(shifted);
            let end_date = start_date.checked_add_days(Days::new(4))?;
            Some(SemesterWeek {
                number: i + 1,
                start_date,
                end_date,
            })
        })
        .collect()
}

pub fn week_number_for_date(weeks: &[SemesterWeek], date: NaiveDate) -> Option<u32> {
    let monday = start_of_iso_week(date);
    weeks
        .iter()
        .find(|week| week.start_date == monday)
        .map(|week| week.number)
}

pub fn find_week(weeks: &[SemesterWeek], number: u32) -> Option<&SemesterWeek> {
    weeks.iter().find(|week| week.number == number)
}
