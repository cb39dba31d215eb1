use std::sync::MutexGuard;

use axum::Json;
use axum::extract::{Path, Query};
use axum::routing::post;
use axum::{Router, extract::State, http::StatusCode, routing::get};
use serde::Deserialize;

use crate::error::AppError;
use crate::models::{MonthView, SemesterWeek, WeekView};
use crate::services::month_calendar::{UPCOMING_EVENT_LIMIT, build_month_grid, upcoming_events};
use crate::services::{MonthCursor, ScheduleFilter, TimetableSession};
use crate::state::AppState;

#[derive(Deserialize)]
struct MonthQueryParams {
    year: Option<i32>,
    month: Option<u32>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/timetable", get(current_view))
        .route("/timetable/previous", post(previous_week))
        .route("/timetable/next", post(next_week))
        .route("/timetable/today", post(this_week))
        .route("/timetable/weeks/{number}", post(select_week))
        .route("/semester/weeks", get(list_weeks))
        .route("/calendar", get(month_view))
        .with_state(state)
}

fn lock_session(state: &AppState) -> Result<MutexGuard<'_, TimetableSession>, AppError> {
    state.session.lock().map_err(|_| {
        tracing::error!("timetable session lock is poisoned");
        AppError::InternalServerError
    })
}

async fn health() -> StatusCode {
    StatusCode::OK
}

async fn current_view(
    State(state): State<AppState>,
    Query(filter): Query<ScheduleFilter>,
) -> Result<Json<WeekView>, AppError> {
    let session = lock_session(&state)?;
    Ok(Json(session.view(&filter)))
}

async fn previous_week(
    State(state): State<AppState>,
    Query(filter): Query<ScheduleFilter>,
) -> Result<Json<WeekView>, AppError> {
    let mut session = lock_session(&state)?;
    Ok(Json(session.previous_week(&filter)))
}

async fn next_week(
    State(state): State<AppState>,
    Query(filter): Query<ScheduleFilter>,
) -> Result<Json<WeekView>, AppError> {
    let mut session = lock_session(&state)?;
    Ok(Json(session.next_week(&filter)))
}

async fn this_week(
    State(state): State<AppState>,
    Query(filter): Query<ScheduleFilter>,
) -> Result<Json<WeekView>, AppError> {
    let mut session = lock_session(&state)?;
    Ok(Json(session.today(&filter)))
}

async fn select_week(
    State(state): State<AppState>,
    Path(number): Path<u32>,
    Query(filter): Query<ScheduleFilter>,
) -> Result<Json<WeekView>, AppError> {
    let mut session = lock_session(&state)?;
    let view = session.select_week(number, &filter)?;
    Ok(Json(view))
}

async fn list_weeks(State(state): State<AppState>) -> Result<Json<Vec<SemesterWeek>>, AppError> {
    let session = lock_session(&state)?;
    Ok(Json(session.navigator().semester_weeks().to_vec()))
}

async fn month_view(
    State(state): State<AppState>,
    Query(params): Query<MonthQueryParams>,
) -> Result<Json<MonthView>, AppError> {
    let today = state.clock.now().date();
    let cursor = match (params.year, params.month) {
        (None, None) => MonthCursor::containing(today),
        (year, month) => {
            let current = MonthCursor::containing(today);
            MonthCursor::new(
                year.unwrap_or(current.year()),
                month.unwrap_or(current.month()),
            )?
        }
    };

    let events = state.provider.fetch_events();
    Ok(Json(MonthView {
        grid: build_month_grid(cursor, &events, today),
        upcoming: upcoming_events(&events, today, UPCOMING_EVENT_LIMIT),
    }))
}
