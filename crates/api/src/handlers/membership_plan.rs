//! Handlers for the `/membership-plans` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use gymdesk_core::error::CoreError;
use gymdesk_core::types::DbId;
use gymdesk_db::models::membership_plan::{
    CreateMembershipPlan, MembershipPlan, PlanWithMembers, UpdateMembershipPlan,
};
use gymdesk_db::repositories::{MemberRepo, MembershipPlanRepo};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/v1/membership-plans
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateMembershipPlan>,
) -> AppResult<(StatusCode, Json<MembershipPlan>)> {
    input.validate().map_err(CoreError::from)?;
    let plan = MembershipPlanRepo::create(&state.pool, &input).await?;
    tracing::info!(membership_plan_id = plan.id, lesson = plan.lesson, "Membership plan created");
    Ok((StatusCode::CREATED, Json(plan)))
}

/// GET /api/v1/membership-plans
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<MembershipPlan>>> {
    let plans = MembershipPlanRepo::list(&state.pool).await?;
    Ok(Json(plans))
}

/// GET /api/v1/membership-plans/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<PlanWithMembers>> {
    let plan = MembershipPlanRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("MembershipPlan", id))?;
    let members = MemberRepo::list_by_plan(&state.pool, id).await?;
    Ok(Json(PlanWithMembers { plan, members }))
}

/// PUT /api/v1/membership-plans/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateMembershipPlan>,
) -> AppResult<Json<MembershipPlan>> {
    input.validate().map_err(CoreError::from)?;
    let plan = MembershipPlanRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::not_found("MembershipPlan", id))?;
    Ok(Json(plan))
}

/// DELETE /api/v1/membership-plans/{id}
///
/// Subscribed members keep their row with no plan assigned.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if MembershipPlanRepo::delete(&state.pool, id).await? {
        tracing::info!(membership_plan_id = id, "Membership plan deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("MembershipPlan", id))
    }
}
