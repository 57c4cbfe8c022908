//! Handlers for the member attendance ledger (`/attendance`).
//!
//! Check-in and check-out run in one transaction with the member row locked,
//! so two concurrent check-ins for the same member serialize on the lock and
//! the second one sees the first one's row.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use gymdesk_core::attendance::{
    day_and_time, ensure_member_can_check_in, no_open_check_in, no_records_for, parse_day,
    parse_day_range, SUBSCRIPTION_EXPIRED,
};
use gymdesk_core::error::CoreError;
use gymdesk_core::listing::resolve_page;
use gymdesk_core::types::DbId;
use gymdesk_db::models::attendance::{
    Attendance, AttendanceListParams, AttendanceWithMember, DayRangeParams, SORTABLE_COLUMNS,
};
use gymdesk_db::repositories::{AttendanceRepo, MemberRepo};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/v1/attendance/members/{id}/check-in
pub async fn check_in(
    State(state): State<AppState>,
    Path(member_id): Path<DbId>,
) -> AppResult<(StatusCode, Json<Attendance>)> {
    let (today, now) = day_and_time(Utc::now());
    let mut tx = state.pool.begin().await?;

    let member = MemberRepo::lock_for_update(&mut *tx, member_id)
        .await?
        .ok_or(AppError::not_found("Member", member_id))?;
    let already = AttendanceRepo::exists_on(&mut *tx, member_id, today).await?;
    ensure_member_can_check_in(member.lesson, already)?;

    let remaining = MemberRepo::spend_lesson(&mut *tx, member_id)
        .await?
        .ok_or_else(|| CoreError::Rejected(SUBSCRIPTION_EXPIRED.to_string()))?;
    let record = AttendanceRepo::open(&mut *tx, member_id, today, now).await?;
    tx.commit().await?;

    tracing::info!(
        member_id,
        attendance_id = record.id,
        lesson = remaining,
        "Member checked in"
    );
    Ok((StatusCode::CREATED, Json(record)))
}

/// POST /api/v1/attendance/members/{id}/check-out
pub async fn check_out(
    State(state): State<AppState>,
    Path(member_id): Path<DbId>,
) -> AppResult<Json<Attendance>> {
    let (today, now) = day_and_time(Utc::now());
    let mut tx = state.pool.begin().await?;

    MemberRepo::lock_for_update(&mut *tx, member_id)
        .await?
        .ok_or(AppError::not_found("Member", member_id))?;
    let record = AttendanceRepo::close_open_on(&mut *tx, member_id, today, now)
        .await?
        .ok_or_else(no_open_check_in)?;
    tx.commit().await?;

    tracing::info!(member_id, attendance_id = record.id, "Member checked out");
    Ok(Json(record))
}

/// GET /api/v1/attendance/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Attendance>> {
    let record = AttendanceRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Attendance", id))?;
    Ok(Json(record))
}

/// GET /api/v1/attendance?limit=&page=&sort=&order=
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<AttendanceListParams>,
) -> AppResult<Json<Vec<AttendanceWithMember>>> {
    let page = resolve_page(
        params.limit,
        params.page,
        params.sort.as_deref(),
        params.order,
        SORTABLE_COLUMNS,
    )?;
    let records = AttendanceRepo::list_page(&state.pool, &page).await?;
    Ok(Json(records))
}

/// GET /api/v1/attendance/members/{id}
pub async fn list_by_member(
    State(state): State<AppState>,
    Path(member_id): Path<DbId>,
) -> AppResult<Json<Vec<AttendanceWithMember>>> {
    let records = AttendanceRepo::list_by_member(&state.pool, member_id).await?;
    Ok(Json(records))
}

/// GET /api/v1/attendance/date/{date}
pub async fn list_by_date(
    State(state): State<AppState>,
    Path(raw): Path<String>,
) -> AppResult<Json<Vec<AttendanceWithMember>>> {
    let day = parse_day(&raw)?;
    let records = AttendanceRepo::list_on(&state.pool, day).await?;
    if records.is_empty() {
        return Err(no_records_for(&format!("date {day}")).into());
    }
    Ok(Json(records))
}

/// GET /api/v1/attendance/range?start=&end=
pub async fn list_by_range(
    State(state): State<AppState>,
    Query(params): Query<DayRangeParams>,
) -> AppResult<Json<Vec<AttendanceWithMember>>> {
    let (start, end) = parse_day_range(&params.start, &params.end)?;
    let records = AttendanceRepo::list_between(&state.pool, start, end).await?;
    if records.is_empty() {
        return Err(no_records_for(&format!("range {start} to {end}")).into());
    }
    Ok(Json(records))
}
