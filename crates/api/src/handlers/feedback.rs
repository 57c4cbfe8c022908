//! Handlers for the `/feedback` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use gymdesk_core::error::CoreError;
use gymdesk_core::types::DbId;
use gymdesk_db::models::feedback::{CreateFeedback, Feedback, FeedbackWithMember, UpdateFeedback};
use gymdesk_db::repositories::{FeedbackRepo, MemberRepo, TrainerRepo};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/v1/feedback
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateFeedback>,
) -> AppResult<(StatusCode, Json<Feedback>)> {
    input.validate().map_err(CoreError::from)?;
    MemberRepo::find_by_id(&state.pool, input.member_id)
        .await?
        .ok_or(AppError::not_found("Member", input.member_id))?;
    TrainerRepo::find_by_id(&state.pool, input.trainer_id)
        .await?
        .ok_or(AppError::not_found("Trainer", input.trainer_id))?;

    let feedback = FeedbackRepo::create(&state.pool, &input).await?;
    tracing::info!(
        feedback_id = feedback.id,
        member_id = feedback.member_id,
        trainer_id = feedback.trainer_id,
        rating = feedback.rating,
        "Feedback created"
    );
    Ok((StatusCode::CREATED, Json(feedback)))
}

/// GET /api/v1/feedback
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<FeedbackWithMember>>> {
    let feedback = FeedbackRepo::list(&state.pool).await?;
    Ok(Json(feedback))
}

/// GET /api/v1/feedback/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<FeedbackWithMember>> {
    let feedback = FeedbackRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Feedback", id))?;
    Ok(Json(feedback))
}

/// GET /api/v1/feedback/trainers/{trainer_id}
pub async fn list_by_trainer(
    State(state): State<AppState>,
    Path(trainer_id): Path<DbId>,
) -> AppResult<Json<Vec<FeedbackWithMember>>> {
    let feedback = FeedbackRepo::list_by_trainer(&state.pool, trainer_id).await?;
    Ok(Json(feedback))
}

/// GET /api/v1/feedback/members/{member_id}
pub async fn list_by_member(
    State(state): State<AppState>,
    Path(member_id): Path<DbId>,
) -> AppResult<Json<Vec<FeedbackWithMember>>> {
    let feedback = FeedbackRepo::list_by_member(&state.pool, member_id).await?;
    Ok(Json(feedback))
}

/// PUT /api/v1/feedback/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateFeedback>,
) -> AppResult<Json<Feedback>> {
    input.validate().map_err(CoreError::from)?;
    let feedback = FeedbackRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::not_found("Feedback", id))?;
    Ok(Json(feedback))
}

/// DELETE /api/v1/feedback/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if FeedbackRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("Feedback", id))
    }
}
