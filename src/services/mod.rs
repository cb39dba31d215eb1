pub mod clock;
pub mod month_calendar;
pub mod schedule_query;
pub mod semester;
pub mod timetable;
pub mod week_navigation;

pub use clock::{Clock, FixedClock, SystemClock};
pub use month_calendar::MonthCursor;
pub use schedule_query::ScheduleFilter;
pub use timetable::{GridConfig, TimetableService, TimetableSession};
pub use week_navigation::WeekNavigator;
