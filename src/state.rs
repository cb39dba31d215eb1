use std::sync::{Arc, Mutex};

use crate::provider::ScheduleProvider;
use crate::services::{Clock, TimetableSession};

#[derive(Clone)]
pub struct AppState {
    pub session: Arc<Mutex<TimetableSession>>,
    pub provider: Arc<dyn ScheduleProvider>,
    pub clock: Arc<dyn Clock>,
}
