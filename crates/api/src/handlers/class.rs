//! Handlers for the `/classes` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use gymdesk_core::error::CoreError;
use gymdesk_core::types::DbId;
use gymdesk_db::models::class::{Class, ClassWithTrainer, CreateClass, UpdateClass};
use gymdesk_db::repositories::{ClassRepo, TrainerRepo};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/v1/classes
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateClass>,
) -> AppResult<(StatusCode, Json<Class>)> {
    input.validate().map_err(CoreError::from)?;
    TrainerRepo::find_by_id(&state.pool, input.trainer_id)
        .await?
        .ok_or(AppError::not_found("Trainer", input.trainer_id))?;
    let class = ClassRepo::create(&state.pool, &input).await?;
    tracing::info!(class_id = class.id, trainer_id = input.trainer_id, "Class created");
    Ok((StatusCode::CREATED, Json(class)))
}

/// GET /api/v1/classes
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Class>>> {
    let classes = ClassRepo::list(&state.pool).await?;
    Ok(Json(classes))
}

/// GET /api/v1/classes/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ClassWithTrainer>> {
    let class = ClassRepo::find_with_trainer(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Class", id))?;
    Ok(Json(class))
}

/// PUT /api/v1/classes/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateClass>,
) -> AppResult<Json<Class>> {
    input.validate().map_err(CoreError::from)?;
    let class = ClassRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::not_found("Class", id))?;
    Ok(Json(class))
}

/// DELETE /api/v1/classes/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if ClassRepo::delete(&state.pool, id).await? {
        tracing::info!(class_id = id, "Class deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("Class", id))
    }
}
