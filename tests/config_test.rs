use std::collections::HashMap;

use chrono::NaiveDate;
use timetable::config::AppConfig;
use timetable::error::AppError;

fn config_with(vars: &[(&str, &str)]) -> Result<AppConfig, AppError> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    AppConfig::from_lookup(move |name| vars.get(name).cloned())
}

#[test]
fn test_defaults() {
    let config = config_with(&[]).unwrap();

    assert_eq!(config.bind_addr.port(), 3000);
    assert_eq!(config.semester_start, NaiveDate::from_ymd_opt(2024, 8, 26).unwrap());
    assert_eq!(config.semester_weeks, 15);
    assert_eq!(config.grid.start_hour, 8);
    assert_eq!(config.grid.end_hour, 18);
    assert_eq!(config.grid.pixels_per_hour, 80.0);
    assert!(config.fixed_now.is_none());
    assert!(config.slots_file.is_none());
}

#[test]
fn test_overrides() {
    let config = config_with(&[
        ("SEMESTER_START", "2025-01-13"),
        ("SEMESTER_WEEKS", "12"),
        ("PIXELS_PER_HOUR", "60.5"),
        ("TIMETABLE_NOW", "2025-02-04T09:30"),
    ])
    .unwrap();

    assert_eq!(config.semester_start, NaiveDate::from_ymd_opt(2025, 1, 13).unwrap());
    assert_eq!(config.semester_weeks, 12);
    assert_eq!(config.grid.pixels_per_hour, 60.5);
    assert_eq!(
        config.fixed_now,
        NaiveDate::from_ymd_opt(2025, 2, 4).unwrap().and_hms_opt(9, 30, 0)
    );
}

#[test]
fn test_pixels_per_hour_must_be_positive_and_finite() {
    for bad in ["0", "-80", "NaN", "inf", "-inf"] {
        let result = config_with(&[("PIXELS_PER_HOUR", bad)]);
        assert!(matches!(result, Err(AppError::Config(_))), "{} should be rejected", bad);
    }
    assert!(matches!(
        config_with(&[("PIXELS_PER_HOUR", "eighty")]),
        Err(AppError::Config(_))
    ));
}

#[test]
fn test_grid_hours_must_form_a_range() {
    assert!(matches!(
        config_with(&[("GRID_START_HOUR", "18"), ("GRID_END_HOUR", "8")]),
        Err(AppError::Config(_))
    ));
    assert!(matches!(
        config_with(&[("GRID_END_HOUR", "25")]),
        Err(AppError::Config(_))
    ));
    assert!(config_with(&[("GRID_START_HOUR", "0"), ("GRID_END_HOUR", "24")]).is_ok());
}

#[test]
fn test_semester_weeks_range() {
    for bad in ["0", "54", "4000000000"] {
        let result = config_with(&[("SEMESTER_WEEKS", bad)]);
        assert!(matches!(result, Err(AppError::Config(_))), "{} should be rejected", bad);
    }
    assert_eq!(config_with(&[("SEMESTER_WEEKS", "53")]).unwrap().semester_weeks, 53);
}

#[test]
fn test_invalid_fixed_now() {
    assert!(matches!(
        config_with(&[("TIMETABLE_NOW", "yesterday")]),
        Err(AppError::Config(_))
    ));
}
