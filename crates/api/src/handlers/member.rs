//! Handlers for the `/members` resource, including membership renewal.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use gymdesk_core::error::CoreError;
use gymdesk_core::membership::{ensure_status_editable, renewal_grant, STATUS_ACTIVE};
use gymdesk_core::types::DbId;
use gymdesk_db::models::member::{
    CreateMember, Member, MemberFilter, RenewMembership, UpdateMember,
};
use gymdesk_db::repositories::{MemberRepo, MembershipPlanRepo};
use serde::Serialize;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Body of a successful renewal.
#[derive(Debug, Serialize)]
pub struct RenewalResponse {
    pub message: String,
    pub member: Member,
}

/// POST /api/v1/members
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateMember>,
) -> AppResult<(StatusCode, Json<Member>)> {
    input.validate().map_err(CoreError::from)?;
    let member = MemberRepo::create(&state.pool, &input).await?;
    tracing::info!(member_id = member.id, "Member created");
    Ok((StatusCode::CREATED, Json(member)))
}

/// GET /api/v1/members?status=
pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<MemberFilter>,
) -> AppResult<Json<Vec<Member>>> {
    let members = MemberRepo::list(&state.pool, filter.status.as_deref()).await?;
    Ok(Json(members))
}

/// GET /api/v1/members/active
pub async fn list_active(State(state): State<AppState>) -> AppResult<Json<Vec<Member>>> {
    let members = MemberRepo::list(&state.pool, Some(STATUS_ACTIVE)).await?;
    if members.is_empty() {
        return Err(CoreError::Missing("No active members found".to_string()).into());
    }
    Ok(Json(members))
}

/// GET /api/v1/members/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Member>> {
    let member = MemberRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Member", id))?;
    Ok(Json(member))
}

/// PUT /api/v1/members/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateMember>,
) -> AppResult<Json<Member>> {
    input.validate().map_err(CoreError::from)?;
    ensure_status_editable(input.status.as_deref())?;
    let member = MemberRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::not_found("Member", id))?;
    Ok(Json(member))
}

/// DELETE /api/v1/members/{id}
///
/// Attendance, payments, feedback and enrollments cascade.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if MemberRepo::delete(&state.pool, id).await? {
        tracing::info!(member_id = id, "Member deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("Member", id))
    }
}

/// PUT /api/v1/members/{id}/renewal
///
/// Resets the member's lesson credit to the plan's allotment and marks them
/// Active. Renewing twice with the same plan leaves the same state.
pub async fn renew(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<RenewMembership>,
) -> AppResult<Json<RenewalResponse>> {
    input.validate().map_err(CoreError::from)?;
    let mut tx = state.pool.begin().await?;

    MemberRepo::lock_for_update(&mut *tx, id)
        .await?
        .ok_or(AppError::not_found("Member", id))?;
    let plan_lesson =
        MembershipPlanRepo::find_lesson_allotment(&mut *tx, input.membership_plan_id).await?;
    let grant = renewal_grant(input.membership_plan_id, plan_lesson)?;
    let member = MemberRepo::renew(&mut *tx, id, &grant, &input)
        .await?
        .ok_or(AppError::not_found("Member", id))?;
    tx.commit().await?;

    tracing::info!(
        member_id = id,
        membership_plan_id = grant.membership_plan_id,
        lesson = grant.lesson,
        "Membership renewed"
    );
    Ok(Json(RenewalResponse {
        message: "Membership renewed successfully".to_string(),
        member,
    }))
}
