use chrono::{Datelike, NaiveDate};

use crate::error::AppError;
use crate::models::{CalendarDay, CalendarEvent, MonthGrid};

pub const MAX_EVENTS_PER_DAY: usize = 2;
pub const UPCOMING_EVENT_LIMIT: usize = 6;

const MONTH_NAMES: [&str; 12] = [
    "January", "February", "March", "April", "May", "June",
    "July", "August", "September", "October", "November", "December",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthCursor {
    year: i32,
    month: u32,
}

impl MonthCursor {
    pub fn new(year: i32, month: u32) -> Result<Self, AppError> {
        NaiveDate::from_ymd_opt(year, month, 1)
            .map(|_| Self { year, month })
            .ok_or_else(|| AppError::InvalidDate(format!("{}-{:02}", year, month)))
    }

    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn name(&self) -> &'static str {
        MONTH_NAMES[(self.month - 1) as usize]
    }

    pub fn previous(&self) -> Self {
        if self.month == 1 {
            Self { year: self.year - 1, month: 12 }
        } else {
            Self { year: self.year, month: self.month - 1 }
        }
    }

    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self { year: self.year + 1, month: 1 }
        } else {
            Self { year: self.year, month: self.month + 1 }
        }
    }

    pub fn first_day(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }

    pub fn days_in_month(&self) -> u32 {
        let next = self.next();
        match (self.first_day(), next.first_day()) {
            (Some(first), Some(next_first)) => (next_first - first).num_days() as u32,
            _ => 0,
        }
    }

    /// Empty cells before the 1st in a Sunday-first grid.
    pub fn leading_blanks(&self) -> u32 {
        self.first_day()
            .map(|first| first.weekday().num_days_from_sunday())
            .unwrap_or(0)
    }
}

fn by_date_and_time(a: &&CalendarEvent, b: &&CalendarEvent) -> std::cmp::Ordering {
    (a.date, a.time).cmp(&(b.date, b.time))
}

pub fn build_month_grid(cursor: MonthCursor, events: &[CalendarEvent], today: NaiveDate) -> MonthGrid {
    let days = (1..=cursor.days_in_month())
        .filter_map(|day| NaiveDate::from_ymd_opt(cursor.year, cursor.month, day))
        .map(|date| {
            let mut day_events: Vec<&CalendarEvent> =
                events.iter().filter(|event| event.date == date).collect();
            day_events.sort_by(by_date_and_time);

            let overflow = day_events.len().saturating_sub(MAX_EVENTS_PER_DAY);
            CalendarDay {
                date,
                day: date.day(),
                is_today: date == today,
                events: day_events
                    .into_iter()
                    .take(MAX_EVENTS_PER_DAY)
                    .cloned()
                    .collect(),
                overflow,
            }
        })
        .collect();

    MonthGrid {
        year: cursor.year,
        month: cursor.month,
        month_name: cursor.name().to_string(),
        leading_blanks: cursor.leading_blanks(),
        days,
    }
}

pub fn upcoming_events(events: &[CalendarEvent], today: NaiveDate, limit: usize) -> Vec<CalendarEvent> {
    let mut upcoming: Vec<&CalendarEvent> = events.iter().filter(|event| event.date >= today).collect();
    upcoming.sort_by(by_date_and_time);
    upcoming.into_iter().take(limit).cloned().collect()
}
