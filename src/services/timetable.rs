use std::sync::Arc;

use chrono::Datelike;
use serde::Serialize;
use tracing::debug;

use crate::error::AppError;
use crate::models::{DayColumn, NowMarker, PositionedSlot, TimeSlot, UpcomingSlot, WeekView};
use crate::provider::ScheduleProvider;
use crate::services::schedule_query::{ScheduleFilter, classes_on_day, next_upcoming, slot_status};
use crate::services::week_navigation::WeekNavigator;
use crate::time_utils::{
    ClockTime, DEFAULT_GRID_START_HOUR, format_clock_12h, is_within, minutes_since_grid_start,
    minutes_until, to_pixel_offset,
};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GridConfig {
    pub start_hour: u32,
    /// Exclusive.
    pub end_hour: u32,
    pub pixels_per_hour: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            start_hour: DEFAULT_GRID_START_HOUR,
            end_hour: 18,
            pixels_per_hour: 80.0,
        }
    }
}

impl GridConfig {
    pub fn height(&self) -> f64 {
        f64::from(self.end_hour.saturating_sub(self.start_hour)) * self.pixels_per_hour
    }

    pub fn hour_labels(&self) -> Vec<String> {
        (self.start_hour..self.end_hour)
            .filter_map(|hour| ClockTime::from_hm(hour, 0))
            .map(format_clock_12h)
            .collect()
    }

    /// Rejects a grid that could not place any slot.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.start_hour >= self.end_hour || self.end_hour > 24 {
            return Err(AppError::Config(format!(
                "grid hours {}..{} are not a valid range",
                self.start_hour, self.end_hour
            )));
        }
        if !self.pixels_per_hour.is_finite() || self.pixels_per_hour <= 0.0 {
            return Err(AppError::Config(format!(
                "pixels per hour must be a positive number, got {}",
                self.pixels_per_hour
            )));
        }
        Ok(())
    }

    fn offset(&self, time: ClockTime) -> f64 {
        to_pixel_offset(
            minutes_since_grid_start(time, self.start_hour),
            self.pixels_per_hour,
        )
    }

    /// `(top, height)` clipped to the grid, or `None` when the slot lies outside it.
    pub fn position(&self, slot: &TimeSlot) -> Option<(f64, f64)> {
        let start = minutes_since_grid_start(slot.start_time, self.start_hour);
        let top = to_pixel_offset(start, self.pixels_per_hour).max(0.0);
        let bottom = to_pixel_offset(start + slot.duration_minutes(), self.pixels_per_hour)
            .min(self.height());
        if bottom <= top {
            return None;
        }
        Some((top, bottom - top))
    }

    fn contains(&self, time: ClockTime) -> bool {
        match (
            ClockTime::from_hm(self.start_hour, 0),
            ClockTime::from_hm(self.end_hour, 0),
        ) {
            (Some(start), Some(end)) => is_within(time, start, end),
            (Some(start), None) => time >= start,
            _ => false,
        }
    }
}

/// 週表示を組み立てる
pub struct TimetableService {
    provider: Arc<dyn ScheduleProvider>,
    grid: GridConfig,
}

impl TimetableService {
    pub fn new(provider: Arc<dyn ScheduleProvider>, grid: GridConfig) -> Self {
        Self { provider, grid }
    }

    pub fn render(&self, navigator: &WeekNavigator, filter: &ScheduleFilter) -> WeekView {
        let all_slots = self.provider.fetch_slots();
        let slots = filter.apply(&all_slots);

        let now_at = navigator.clock().now();
        let today = now_at.date();
        let now = ClockTime::from_naive_time(now_at.time());
        let week_days = navigator.week_days();

        let days: Vec<DayColumn> = week_days
            .iter()
            .map(|date| {
                let day_of_week = date.weekday().number_from_monday() as u8;
                let is_today = *date == today;
                let positioned = classes_on_day(slots.iter().copied(), day_of_week)
                    .into_iter()
                    .filter_map(|slot| {
                        let Some((top, height)) = self.grid.position(slot) else {
                            debug!("slot {} lies outside the grid hours", slot.id);
                            return None;
                        };
                        Some(PositionedSlot {
                            slot: slot.clone(),
                            top,
                            height,
                            duration_minutes: slot.duration_minutes(),
                            start_label: format_clock_12h(slot.start_time),
                            end_label: format_clock_12h(slot.end_time),
                            status: is_today.then(|| slot_status(slot, now)),
                        })
                    })
                    .collect();

                DayColumn {
                    date: *date,
                    day_of_week,
                    is_today,
                    slots: positioned,
                }
            })
            .collect();

        let todays_slots = classes_on_day(
            slots.iter().copied(),
            today.weekday().number_from_monday() as u8,
        );
        let next = next_upcoming(&todays_slots, now).map(|slot| UpcomingSlot {
            slot: slot.clone(),
            minutes_until: minutes_until(now, slot.start_time, today),
        });

        let is_current_week = navigator.is_current_week();
        let now_marker = if is_current_week && self.grid.contains(now) {
            week_days
                .iter()
                .position(|date| *date == today)
                .map(|day_index| NowMarker {
                    day_index,
                    top: self.grid.offset(now),
                    label: format_clock_12h(now),
                })
        } else {
            None
        };

        WeekView {
            week_start: navigator.current_week_start(),
            week_days: week_days.clone(),
            week_number: navigator.current_week_number(),
            is_current_week,
            hours: self.grid.hour_labels(),
            grid_height: self.grid.height(),
            days,
            next_upcoming: next,
            now_marker,
        }
    }
}

/// One renderer session: the navigation state plus the service that projects it.
pub struct TimetableSession {
    navigator: WeekNavigator,
    service: TimetableService,
}

impl TimetableSession {
    pub fn new(navigator: WeekNavigator, service: TimetableService) -> Self {
        Self { navigator, service }
    }

    pub fn navigator(&self) -> &WeekNavigator {
        &self.navigator
    }

    pub fn view(&self, filter: &ScheduleFilter) -> WeekView {
        self.service.render(&self.navigator, filter)
    }

    pub fn previous_week(&mut self, filter: &ScheduleFilter) -> WeekView {
        self.navigator.go_to_previous_week();
        self.view(filter)
    }

    pub fn next_week(&mut self, filter: &ScheduleFilter) -> WeekView {
        self.navigator.go_to_next_week();
        self.view(filter)
    }

    pub fn today(&mut self, filter: &ScheduleFilter) -> WeekView {
        self.navigator.go_to_today();
        self.view(filter)
    }

    pub fn select_week(&mut self, number: u32, filter: &ScheduleFilter) -> Result<WeekView, AppError> {
        self.navigator.select_week_number(number)?;
        Ok(self.view(filter))
    }
}
