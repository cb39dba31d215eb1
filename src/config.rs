use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime};

use crate::error::AppError;
use crate::provider::sample::SAMPLE_SEMESTER_START;
use crate::services::GridConfig;
use crate::services::semester::{MAX_SEMESTER_WEEKS, SEMESTER_WEEK_COUNT};

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub semester_start: NaiveDate,
    pub semester_weeks: u32,
    pub grid: GridConfig,
    /// Pins the clock to this instant when set.
    pub fixed_now: Option<NaiveDateTime>,
    pub slots_file: Option<PathBuf>,
}

fn parse_var<T, F>(lookup: &F, name: &str, default: T) -> Result<T, AppError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        Some(value) => value
            .parse()
            .map_err(|_| AppError::Config(format!("{} has an invalid value: {}", name, value))),
        None => Ok(default),
    }
}

impl AppConfig {
    pub fn new_from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the config from any variable source. Unset variables take their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_addr = parse_var(&lookup, "TIMETABLE_ADDR", SocketAddr::from(([127, 0, 0, 1], 3000)))?;

        let (year, month, day) = SAMPLE_SEMESTER_START;
        let default_start = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or_else(|| AppError::InvalidDate(format!("{}-{}-{}", year, month, day)))?;
        let semester_start = parse_var(&lookup, "SEMESTER_START", default_start)?;

        let semester_weeks = parse_var(&lookup, "SEMESTER_WEEKS", SEMESTER_WEEK_COUNT)?;
        if !(1..=MAX_SEMESTER_WEEKS).contains(&semester_weeks) {
            return Err(AppError::Config(format!(
                "SEMESTER_WEEKS must be between 1 and {}, got {}",
                MAX_SEMESTER_WEEKS, semester_weeks
            )));
        }

        let defaults = GridConfig::default();
        let grid = GridConfig {
            start_hour: parse_var(&lookup, "GRID_START_HOUR", defaults.start_hour)?,
            end_hour: parse_var(&lookup, "GRID_END_HOUR", defaults.end_hour)?,
            pixels_per_hour: parse_var(&lookup, "PIXELS_PER_HOUR", defaults.pixels_per_hour)?,
        };
        grid.validate()?;

        let fixed_now = match lookup("TIMETABLE_NOW") {
            Some(value) => Some(
                NaiveDateTime::parse_from_str(&value, "%Y-%m-%dT%H:%M")
                    .map_err(|_| AppError::Config(format!("TIMETABLE_NOW has an invalid value: {}", value)))?,
            ),
            None => None,
        };

        let slots_file = lookup("TIMETABLE_SLOTS_FILE").map(PathBuf::from);

        Ok(Self {
            bind_addr,
            semester_start,
            semester_weeks,
            grid,
            fixed_now,
            slots_file,
        })
    }
}
