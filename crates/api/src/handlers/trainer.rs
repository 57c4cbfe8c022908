//! Handlers for the `/trainers` resource and trainer payroll.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use gymdesk_core::error::CoreError;
use gymdesk_core::salary::{compute_salary, ClassShare, SalaryReport};
use gymdesk_core::types::DbId;
use gymdesk_db::models::class::Class;
use gymdesk_db::models::trainer::{CreateTrainer, Trainer, UpdateTrainer};
use gymdesk_db::repositories::{ClassRepo, TrainerRepo};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/v1/trainers
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateTrainer>,
) -> AppResult<(StatusCode, Json<Trainer>)> {
    input.validate().map_err(CoreError::from)?;
    let trainer = TrainerRepo::create(&state.pool, &input).await?;
    tracing::info!(trainer_id = trainer.id, "Trainer created");
    Ok((StatusCode::CREATED, Json(trainer)))
}

/// GET /api/v1/trainers
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Trainer>>> {
    let trainers = TrainerRepo::list(&state.pool).await?;
    Ok(Json(trainers))
}

/// GET /api/v1/trainers/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Trainer>> {
    let trainer = TrainerRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Trainer", id))?;
    Ok(Json(trainer))
}

/// PUT /api/v1/trainers/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateTrainer>,
) -> AppResult<Json<Trainer>> {
    input.validate().map_err(CoreError::from)?;
    let trainer = TrainerRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::not_found("Trainer", id))?;
    Ok(Json(trainer))
}

/// DELETE /api/v1/trainers/{id}
///
/// Classes taught by the trainer are kept with no trainer assigned.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if TrainerRepo::delete(&state.pool, id).await? {
        tracing::info!(trainer_id = id, "Trainer deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("Trainer", id))
    }
}

/// GET /api/v1/trainers/{id}/classes
pub async fn list_classes(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<Class>>> {
    TrainerRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Trainer", id))?;
    let classes = ClassRepo::list_by_trainer(&state.pool, id).await?;
    if classes.is_empty() {
        return Err(CoreError::Missing(format!("No classes found for trainer {id}")).into());
    }
    Ok(Json(classes))
}

/// GET /api/v1/trainers/{id}/salary
pub async fn salary(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<SalaryReport>> {
    let trainer = TrainerRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Trainer", id))?;
    let shares: Vec<ClassShare> = ClassRepo::list_by_trainer(&state.pool, id)
        .await?
        .iter()
        .map(Class::share)
        .collect();

    let report = compute_salary(&shares, trainer.lesson, trainer.fixed_salary);
    tracing::debug!(
        trainer_id = id,
        classes = shares.len(),
        lesson = trainer.lesson,
        total = report.total_salary,
        "Computed trainer salary"
    );
    Ok(Json(report))
}
