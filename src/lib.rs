pub mod config;
pub mod error;
pub mod models;
pub mod provider;
pub mod routes;
pub mod services;
pub mod state;
pub mod time_utils;

use std::sync::{Arc, Mutex};

use crate::config::AppConfig;
use crate::provider::ScheduleProvider;
use crate::services::semester::build_semester_weeks;
use crate::services::{Clock, TimetableService, TimetableSession, WeekNavigator};
use crate::state::AppState;

pub fn build_state(
    config: &AppConfig,
    provider: Arc<dyn ScheduleProvider>,
    clock: Arc<dyn Clock>,
) -> AppState {
    let weeks = build_semester_weeks(config.semester_start, config.semester_weeks);
    let navigator = WeekNavigator::new(weeks, clock.clone());
    let service = TimetableService::new(provider.clone(), config.grid);

    AppState {
        session: Arc::new(Mutex::new(TimetableSession::new(navigator, service))),
        provider,
        clock,
    }
}
