use std::sync::Arc;

use chrono::{Days, Duration, NaiveDate};
use tracing::{debug, warn};

use crate::error::AppError;
use crate::models::SemesterWeek;
use crate::services::clock::Clock;
use crate::services::semester::{find_week, week_number_for_date};
use crate::time_utils::start_of_iso_week;

/// 表示中の週を保持する
///
/// Navigation is not clamped to the semester: moving past week 1 or the last week is
/// allowed and simply yields no week number.
pub struct WeekNavigator {
    current_week_start: NaiveDate,
    semester_weeks: Vec<SemesterWeek>,
    clock: Arc<dyn Clock>,
}

impl WeekNavigator {
    pub fn new(semester_weeks: Vec<SemesterWeek>, clock: Arc<dyn Clock>) -> Self {
        let current_week_start = start_of_iso_week(clock.now().date());
        Self {
            current_week_start,
            semester_weeks,
            clock,
        }
    }

    pub fn current_week_start(&self) -> NaiveDate {
        self.current_week_start
    }

    pub fn semester_weeks(&self) -> &[SemesterWeek] {
        &self.semester_weeks
    }

    pub fn clock(&self) -> &Arc<dyn Clock> {
        &self.clock
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.now().date()
    }

    /// Stays put at the earliest representable week.
    pub fn go_to_previous_week(&mut self) {
        match self.current_week_start.checked_sub_signed(Duration::weeks(1)) {
            Some(start) => {
                self.current_week_start = start;
                debug!("navigated to previous week starting {}", start);
            }
            None => warn!("no week before {}", self.current_week_start),
        }
    }

    /// Stays put at the latest representable week.
    pub fn go_to_next_week(&mut self) {
        match self.current_week_start.checked_add_signed(Duration::weeks(1)) {
            Some(start) => {
                self.current_week_start = start;
                debug!("navigated to next week starting {}", start);
            }
            None => warn!("no week after {}", self.current_week_start),
        }
    }

    pub fn go_to_today(&mut self) {
        self.current_week_start = start_of_iso_week(self.today());
        debug!("navigated to current week starting {}", self.current_week_start);
    }

    pub fn select_week(&mut self, week: &SemesterWeek) {
        self.current_week_start = week.start_date;
        debug!("selected week {} starting {}", week.number, week.start_date);
    }

    pub fn select_week_number(&mut self, number: u32) -> Result<(), AppError> {
        let week = find_week(&self.semester_weeks, number)
            .cloned()
            .ok_or(AppError::NotFound)?;
        self.select_week(&week);
        Ok(())
    }

    pub fn is_current_week(&self) -> bool {
        self.current_week_start == start_of_iso_week(self.today())
    }

    pub fn current_week_number(&self) -> Option<u32> {
        week_number_for_date(&self.semester_weeks, self.current_week_start)
    }

    /// Monday to Friday of the displayed week, cut short at the last representable date.
    pub fn week_days(&self) -> Vec<NaiveDate> {
        (0..5)
            .map_while(|i| self.current_week_start.checked_add_days(Days::new(i)))
            .collect()
    }
}
