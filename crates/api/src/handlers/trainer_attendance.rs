//! Handlers for the trainer attendance ledger (`/trainer-attendance`).
//!
//! Mirrors the member ledger, except check-in adds one to the trainer's
//! lesson counter instead of spending one.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use gymdesk_core::attendance::{
    day_and_time, ensure_trainer_can_check_in, no_open_check_in, no_records_for, parse_day,
    parse_day_range,
};
use gymdesk_core::listing::resolve_page;
use gymdesk_core::types::DbId;
use gymdesk_db::models::attendance::{AttendanceListParams, DayRangeParams};
use gymdesk_db::models::trainer_attendance::{
    TrainerAttendance, TrainerAttendanceWithTrainer, SORTABLE_COLUMNS,
};
use gymdesk_db::repositories::{TrainerAttendanceRepo, TrainerRepo};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/v1/trainer-attendance/trainers/{id}/check-in
pub async fn check_in(
    State(state): State<AppState>,
    Path(trainer_id): Path<DbId>,
) -> AppResult<(StatusCode, Json<TrainerAttendance>)> {
    let (today, now) = day_and_time(Utc::now());
    let mut tx = state.pool.begin().await?;

    let trainer = TrainerRepo::lock_for_update(&mut *tx, trainer_id)
        .await?
        .ok_or(AppError::not_found("Trainer", trainer_id))?;
    let already = TrainerAttendanceRepo::exists_on(&mut *tx, trainer_id, today).await?;
    ensure_trainer_can_check_in(trainer.lesson, already)?;

    let lesson = TrainerRepo::record_lesson(&mut *tx, trainer_id).await?;
    let record = TrainerAttendanceRepo::open(&mut *tx, trainer_id, today, now).await?;
    tx.commit().await?;

    tracing::info!(
        trainer_id,
        attendance_id = record.id,
        lesson,
        "Trainer checked in"
    );
    Ok((StatusCode::CREATED, Json(record)))
}

/// POST /api/v1/trainer-attendance/trainers/{id}/check-out
pub async fn check_out(
    State(state): State<AppState>,
    Path(trainer_id): Path<DbId>,
) -> AppResult<Json<TrainerAttendance>> {
    let (today, now) = day_and_time(Utc::now());
    let mut tx = state.pool.begin().await?;

    TrainerRepo::lock_for_update(&mut *tx, trainer_id)
        .await?
        .ok_or(AppError::not_found("Trainer", trainer_id))?;
    let record = TrainerAttendanceRepo::close_open_on(&mut *tx, trainer_id, today, now)
        .await?
        .ok_or_else(no_open_check_in)?;
    tx.commit().await?;

    tracing::info!(trainer_id, attendance_id = record.id, "Trainer checked out");
    Ok(Json(record))
}

/// GET /api/v1/trainer-attendance/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<TrainerAttendance>> {
    let record = TrainerAttendanceRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("TrainerAttendance", id))?;
    Ok(Json(record))
}

/// GET /api/v1/trainer-attendance?limit=&page=&sort=&order=
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<AttendanceListParams>,
) -> AppResult<Json<Vec<TrainerAttendanceWithTrainer>>> {
    let page = resolve_page(
        params.limit,
        params.page,
        params.sort.as_deref(),
        params.order,
        SORTABLE_COLUMNS,
    )?;
    let records = TrainerAttendanceRepo::list_page(&state.pool, &page).await?;
    Ok(Json(records))
}

/// GET /api/v1/trainer-attendance/trainers/{id}
pub async fn list_by_trainer(
    State(state): State<AppState>,
    Path(trainer_id): Path<DbId>,
) -> AppResult<Json<Vec<TrainerAttendanceWithTrainer>>> {
    let records = TrainerAttendanceRepo::list_by_trainer(&state.pool, trainer_id).await?;
    Ok(Json(records))
}

/// GET /api/v1/trainer-attendance/date/{date}
pub async fn list_by_date(
    State(state): State<AppState>,
    Path(raw): Path<String>,
) -> AppResult<Json<Vec<TrainerAttendanceWithTrainer>>> {
    let day = parse_day(&raw)?;
    let records = TrainerAttendanceRepo::list_on(&state.pool, day).await?;
    if records.is_empty() {
        return Err(no_records_for(&format!("date {day}")).into());
    }
    Ok(Json(records))
}

/// GET /api/v1/trainer-attendance/range?start=&end=
pub async fn list_by_range(
    State(state): State<AppState>,
    Query(params): Query<DayRangeParams>,
) -> AppResult<Json<Vec<TrainerAttendanceWithTrainer>>> {
    let (start, end) = parse_day_range(&params.start, &params.end)?;
    let records = TrainerAttendanceRepo::list_between(&state.pool, start, end).await?;
    if records.is_empty() {
        return Err(no_records_for(&format!("range {start} to {end}")).into());
    }
    Ok(Json(records))
}
