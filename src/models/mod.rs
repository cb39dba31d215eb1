pub mod calendar_event;
pub mod semester_week;
pub mod time_slot;
pub mod view;

pub use calendar_event::CalendarEvent;
pub use semester_week::SemesterWeek;
pub use time_slot::{SlotCategory, TimeSlot};
pub use view::{
    CalendarDay, DayColumn, MonthGrid, MonthView, NowMarker, PositionedSlot, SlotStatus,
    UpcomingSlot, WeekView,
};
