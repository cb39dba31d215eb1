use chrono::NaiveDate;
use serde::Serialize;

use crate::models::{CalendarEvent, TimeSlot};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotStatus {
    Upcoming,
    Live,
    Past,
}

/// A slot placed on the grid. `top` and `height` are pixels from the grid's first row.
#[derive(Debug, Clone, Serialize)]
pub struct PositionedSlot {
    #[serde(flatten)]
    pub slot: TimeSlot,
    pub top: f64,
    pub height: f64,
    pub duration_minutes: i64,
    pub start_label: String,
    pub end_label: String,
    pub status: Option<SlotStatus>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DayColumn {
    pub date: NaiveDate,
    pub day_of_week: u8,
    pub is_today: bool,
    pub slots: Vec<PositionedSlot>,
}

#[derive(Debug, Clone, Serialize)]
pub struct UpcomingSlot {
    #[serde(flatten)]
    pub slot: TimeSlot,
    pub minutes_until: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NowMarker {
    /// Index into `WeekView::days`.
    pub day_index: usize,
    pub top: f64,
    pub label: String,
}

/// Everything the grid renderer needs for one week.
#[derive(Debug, Clone, Serialize)]
pub struct WeekView {
    pub week_start: NaiveDate,
    pub week_days: Vec<NaiveDate>,
    pub week_number: Option<u32>,
    pub is_current_week: bool,
    pub hours: Vec<String>,
    pub grid_height: f64,
    pub days: Vec<DayColumn>,
    pub next_upcoming: Option<UpcomingSlot>,
    pub now_marker: Option<NowMarker>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub day: u32,
    pub is_today: bool,
    pub events: Vec<CalendarEvent>,
    /// Events not shown in the cell ("+N more").
    pub overflow: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    pub month_name: String,
    pub leading_blanks: u32,
    pub days: Vec<CalendarDay>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MonthView {
    #[serde(flatten)]
    pub grid: MonthGrid,
    pub upcoming: Vec<CalendarEvent>,
}
