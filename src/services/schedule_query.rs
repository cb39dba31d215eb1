use serde::Deserialize;

use crate::models::{SlotCategory, SlotStatus, TimeSlot};
use crate::time_utils::{ClockTime, is_within};

/// Optional narrowing of the slot table. Unset fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ScheduleFilter {
    pub category: Option<SlotCategory>,
    pub year_group: Option<String>,
    pub course_code: Option<String>,
}

impl ScheduleFilter {
    pub fn matches(&self, slot: &TimeSlot) -> bool {
        if let Some(category) = self.category {
            if slot.category != category {
                return false;
            }
        }
        if let Some(year_group) = &self.year_group {
            if slot.year_group.as_deref() != Some(year_group.as_str()) {
                return false;
            }
        }
        if let Some(course_code) = &self.course_code {
            if !slot.course_code.eq_ignore_ascii_case(course_code) {
                return false;
            }
        }
        true
    }

    pub fn apply<'a>(&self, slots: &'a [TimeSlot]) -> Vec<&'a TimeSlot> {
        slots.iter().filter(|slot| self.matches(slot)).collect()
    }
}

/// Slots on `day_of_week` (1 = Monday), ascending by start time. Ties keep input order.
pub fn classes_on_day<'a, I>(slots: I, day_of_week: u8) -> Vec<&'a TimeSlot>
where
    I: IntoIterator<Item = &'a TimeSlot>,
{
    let mut day: Vec<&TimeSlot> = slots
        .into_iter()
        .filter(|slot| slot.day_of_week == day_of_week)
        .collect();
    day.sort_by_key(|slot| slot.start_time);
    day
}

/// First slot starting strictly after `now`. Expects `todays_slots` sorted by start time.
pub fn next_upcoming<'a>(todays_slots: &[&'a TimeSlot], now: ClockTime) -> Option<&'a TimeSlot> {
    todays_slots.iter().copied().find(|slot| slot.start_time > now)
}

pub fn is_live(slot: &TimeSlot, now: ClockTime) -> bool {
    is_within(now, slot.start_time, slot.end_time)
}

pub fn is_past(slot: &TimeSlot, now: ClockTime) -> bool {
    now >= slot.end_time
}

pub fn slot_status(slot: &TimeSlot, now: ClockTime) -> SlotStatus {
    if is_live(slot, now) {
        SlotStatus::Live
    } else if is_past(slot, now) {
        SlotStatus::Past
    } else {
        SlotStatus::Upcoming
    }
}
