pub mod sample;

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::AppError;
use crate::models::{CalendarEvent, TimeSlot};

/// Supplies the slot table and calendar events the timetable is built from.
pub trait ScheduleProvider: Send + Sync {
    fn fetch_slots(&self) -> Vec<TimeSlot>;
    fn fetch_events(&self) -> Vec<CalendarEvent>;
}

/// In-memory provider. Every slot is validated on construction.
#[derive(Debug, Clone)]
pub struct StaticScheduleProvider {
    slots: Vec<TimeSlot>,
    events: Vec<CalendarEvent>,
}

#[derive(serde::Deserialize)]
struct ScheduleDocument {
    slots: Vec<TimeSlot>,
    #[serde(default)]
    events: Vec<CalendarEvent>,
}

impl StaticScheduleProvider {
    pub fn new(slots: Vec<TimeSlot>, events: Vec<CalendarEvent>) -> Result<Self, AppError> {
        for slot in &slots {
            slot.validate()?;
        }
        info!("Loaded {} time slots and {} calendar events", slots.len(), events.len());
        Ok(Self { slots, events })
    }

    /// Bundled Fall 2024 table.
    pub fn sample() -> Result<Self, AppError> {
        Self::new(sample::sample_slots()?, sample::sample_events()?)
    }

    /// Parses `{"slots": [...], "events": [...]}`. Malformed times are rejected here.
    pub fn from_json(json: &str) -> Result<Self, AppError> {
        let document: ScheduleDocument = serde_json::from_str(json)?;
        Self::new(document.slots, document.events)
    }

    pub fn from_path(path: &Path) -> Result<Self, AppError> {
        info!("loading schedule from {}", path.display());
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}

impl ScheduleProvider for StaticScheduleProvider {
    fn fetch_slots(&self) -> Vec<TimeSlot> {
        self.slots.clone()
    }

    fn fetch_events(&self) -> Vec<CalendarEvent> {
        self.events.clone()
    }
}
