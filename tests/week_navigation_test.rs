use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime};
use timetable::error::AppError;
use timetable::services::semester::{SEMESTER_WEEK_COUNT, build_semester_weeks};
use timetable::services::{FixedClock, WeekNavigator};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    date(y, m, d).and_hms_opt(h, min, 0).unwrap()
}

fn navigator_at(now: NaiveDateTime) -> WeekNavigator {
    let weeks = build_semester_weeks(date(2024, 8, 26), SEMESTER_WEEK_COUNT);
    WeekNavigator::new(weeks, Arc::new(FixedClock(now)))
}

#[test]
fn test_initial_state_is_the_week_of_today() {
    // Tuesday
    let nav = navigator_at(at(2024, 12, 3, 10, 15));

    assert_eq!(nav.current_week_start(), date(2024, 12, 2));
    assert!(nav.is_current_week());
    assert_eq!(nav.current_week_number(), Some(15));
    assert_eq!(
        nav.week_days(),
        vec![
            date(2024, 12, 2),
            date(2024, 12, 3),
            date(2024, 12, 4),
            date(2024, 12, 5),
            date(2024, 12, 6),
        ]
    );
}

#[test]
fn test_next_week_past_the_semester_is_not_clamped() {
    let mut nav = navigator_at(at(2024, 12, 3, 10, 15));

    nav.go_to_next_week();

    assert_eq!(nav.current_week_start(), date(2024, 12, 9));
    assert_eq!(nav.current_week_number(), None);
    assert!(!nav.is_current_week());
}

#[test]
fn test_previous_before_week_one() {
    let mut nav = navigator_at(at(2024, 8, 27, 9, 0));
    assert_eq!(nav.current_week_number(), Some(1));

    nav.go_to_previous_week();

    assert_eq!(nav.current_week_start(), date(2024, 8, 19));
    assert_eq!(nav.current_week_number(), None);
}

#[test]
fn test_go_to_today_returns_to_current_week() {
    let mut nav = navigator_at(at(2024, 10, 10, 12, 0));
    let start = nav.current_week_start();

    nav.go_to_next_week();
    nav.go_to_next_week();
    nav.go_to_previous_week();
    assert!(!nav.is_current_week());

    nav.go_to_today();
    assert_eq!(nav.current_week_start(), start);
    assert!(nav.is_current_week());
}

#[test]
fn test_select_week() {
    let mut nav = navigator_at(at(2024, 12, 3, 10, 15));

    let week = nav.semester_weeks()[2].clone();
    nav.select_week(&week);
    assert_eq!(nav.current_week_start(), date(2024, 9, 9));
    assert_eq!(nav.current_week_number(), Some(3));

    nav.select_week_number(1).unwrap();
    assert_eq!(nav.current_week_start(), date(2024, 8, 26));

    let err = nav.select_week_number(16).unwrap_err();
    assert!(matches!(err, AppError::NotFound));
    assert_eq!(nav.current_week_start(), date(2024, 8, 26));
}

#[test]
fn test_weekend_today_maps_to_preceding_monday() {
    // Sunday
    let nav = navigator_at(at(2024, 9, 1, 18, 0));
    assert_eq!(nav.current_week_start(), date(2024, 8, 26));
    assert_eq!(nav.current_week_number(), Some(1));
}

#[test]
fn test_navigation_stops_at_the_last_representable_week() {
    let mut nav = navigator_at(NaiveDate::MAX.and_hms_opt(10, 0, 0).unwrap());
    let start = nav.current_week_start();

    nav.go_to_next_week();
    assert_eq!(nav.current_week_start(), start);
    assert!(nav.week_days().iter().all(|d| *d <= NaiveDate::MAX));
    assert_eq!(nav.current_week_number(), None);

    nav.go_to_previous_week();
    nav.go_to_today();
    assert_eq!(nav.current_week_start(), start);
    assert!(nav.is_current_week());
}

#[test]
fn test_navigation_stops_at_the_first_representable_week() {
    let mut nav = navigator_at(NaiveDate::MIN.and_hms_opt(10, 0, 0).unwrap());
    let start = nav.current_week_start();

    nav.go_to_previous_week();
    assert_eq!(nav.current_week_start(), start);
    assert!(!nav.week_days().is_empty());
}
