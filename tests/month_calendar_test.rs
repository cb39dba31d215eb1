use chrono::NaiveDate;
use timetable::models::CalendarEvent;
use timetable::provider::sample::sample_events;
use timetable::services::MonthCursor;
use timetable::services::month_calendar::{
    MAX_EVENTS_PER_DAY, UPCOMING_EVENT_LIMIT, build_month_grid, upcoming_events,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn event(d: NaiveDate, title: &str, time: &str) -> CalendarEvent {
    CalendarEvent {
        date: d,
        title: title.to_string(),
        time: time.parse().unwrap(),
        color: "red".to_string(),
    }
}

#[test]
fn test_month_cursor_navigation_rolls_over_years() {
    let december = MonthCursor::new(2024, 12).unwrap();
    let january = december.next();
    assert_eq!((january.year(), january.month()), (2025, 1));
    assert_eq!(january.previous(), december);
    assert_eq!(january.name(), "January");
    assert!(MonthCursor::new(2024, 13).is_err());
    assert!(MonthCursor::new(2024, 0).is_err());
}

#[test]
fn test_days_in_month_and_leading_blanks() {
    let december = MonthCursor::new(2024, 12).unwrap();
    assert_eq!(december.days_in_month(), 31);
    // 2024-12-01 is a Sunday
    assert_eq!(december.leading_blanks(), 0);

    let february = MonthCursor::new(2024, 2).unwrap();
    assert_eq!(february.days_in_month(), 29);
    // 2024-02-01 is a Thursday
    assert_eq!(february.leading_blanks(), 4);

    assert_eq!(MonthCursor::new(2023, 2).unwrap().days_in_month(), 28);
}

#[test]
fn test_december_grid_with_sample_events() {
    let events = sample_events().unwrap();
    let grid = build_month_grid(MonthCursor::new(2024, 12).unwrap(), &events, date(2024, 12, 1));

    assert_eq!(grid.month_name, "December");
    assert_eq!(grid.days.len(), 31);
    assert!(grid.days[0].is_today);
    assert!(grid.days[1..].iter().all(|d| !d.is_today));

    let third = &grid.days[2];
    assert_eq!(third.day, 3);
    assert_eq!(third.events.len(), 1);
    assert_eq!(third.events[0].title, "Computer Science Assignment Due");
    assert_eq!(third.overflow, 0);

    let with_events: usize = grid.days.iter().map(|d| d.events.len()).sum();
    assert_eq!(with_events, events.len());
}

#[test]
fn test_busy_day_shows_two_events_and_overflow() {
    let day = date(2024, 12, 18);
    let events = vec![
        event(day, "Afternoon", "15:00"),
        event(day, "Morning", "09:00"),
        event(day, "Noon", "12:00"),
        event(day, "Evening", "19:00"),
    ];

    let grid = build_month_grid(MonthCursor::containing(day), &events, date(2024, 12, 1));
    let cell = &grid.days[17];

    assert_eq!(cell.events.len(), MAX_EVENTS_PER_DAY);
    assert_eq!(cell.events[0].title, "Morning");
    assert_eq!(cell.events[1].title, "Noon");
    assert_eq!(cell.overflow, 2);
}

#[test]
fn test_upcoming_events_skip_the_past() {
    let events = sample_events().unwrap();

    let upcoming = upcoming_events(&events, date(2024, 12, 10), UPCOMING_EVENT_LIMIT);
    let titles: Vec<&str> = upcoming.iter().map(|e| e.title.as_str()).collect();
    assert_eq!(
        titles,
        vec![
            "Physics Lab Report Due",
            "Literature Essay Submission",
            "Final Exam - Data Structures",
            "Final Exam - Calculus",
        ]
    );

    assert_eq!(upcoming_events(&events, date(2024, 11, 1), 3).len(), 3);
    assert!(upcoming_events(&events, date(2025, 1, 1), UPCOMING_EVENT_LIMIT).is_empty());
}
