//! Handlers for member↔class and member↔trainer relationships.
//!
//! Class enrollment keeps `classes.num_of_member` in step with the
//! `member_classes` rows, so both change inside one transaction with the
//! class row locked.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use gymdesk_core::enrollment::{count_after_leave, ensure_class_has_room};
use gymdesk_core::error::CoreError;
use gymdesk_core::types::DbId;
use gymdesk_db::models::class::Class;
use gymdesk_db::models::enrollment::{AssignTrainer, EnrollInClass};
use gymdesk_db::models::member::Member;
use gymdesk_db::models::trainer::Trainer;
use gymdesk_db::repositories::{
    ClassRepo, MemberClassRepo, MemberRepo, MemberTrainerRepo, TrainerRepo,
};

use crate::error::{AppError, AppResult};
use crate::response::MessageResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Classes
// ---------------------------------------------------------------------------

/// GET /api/v1/members/{id}/classes
pub async fn list_member_classes(
    State(state): State<AppState>,
    Path(member_id): Path<DbId>,
) -> AppResult<Json<Vec<Class>>> {
    MemberRepo::find_by_id(&state.pool, member_id)
        .await?
        .ok_or(AppError::not_found("Member", member_id))?;
    let classes = ClassRepo::list_by_member(&state.pool, member_id).await?;
    Ok(Json(classes))
}

/// GET /api/v1/classes/{id}/members
pub async fn list_class_members(
    State(state): State<AppState>,
    Path(class_id): Path<DbId>,
) -> AppResult<Json<Vec<Member>>> {
    ClassRepo::find_by_id(&state.pool, class_id)
        .await?
        .ok_or(AppError::not_found("Class", class_id))?;
    let members = MemberRepo::list_by_class(&state.pool, class_id).await?;
    Ok(Json(members))
}

/// POST /api/v1/members/{id}/classes
pub async fn enroll_in_class(
    State(state): State<AppState>,
    Path(member_id): Path<DbId>,
    Json(input): Json<EnrollInClass>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    let class_id = input.class_id;
    let mut tx = state.pool.begin().await?;

    MemberRepo::lock_for_update(&mut *tx, member_id)
        .await?
        .ok_or(AppError::not_found("Member", member_id))?;
    let class = ClassRepo::lock_for_update(&mut *tx, class_id)
        .await?
        .ok_or(AppError::not_found("Class", class_id))?;

    ensure_class_has_room(class.num_of_member, class.max_participants)?;
    if MemberClassRepo::exists(&mut *tx, member_id, class_id).await? {
        return Err(
            CoreError::Conflict("member is already enrolled in this class".to_string()).into(),
        );
    }

    let num_of_member = class.num_of_member + 1;
    ClassRepo::set_member_count(&mut *tx, class_id, num_of_member).await?;
    MemberClassRepo::create(&mut *tx, member_id, class_id).await?;
    tx.commit().await?;

    tracing::info!(member_id, class_id, num_of_member, "Member enrolled in class");
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Member enrolled in class successfully")),
    ))
}

/// DELETE /api/v1/members/{id}/classes/{class_id}
pub async fn leave_class(
    State(state): State<AppState>,
    Path((member_id, class_id)): Path<(DbId, DbId)>,
) -> AppResult<Json<MessageResponse>> {
    let mut tx = state.pool.begin().await?;

    let class = ClassRepo::lock_for_update(&mut *tx, class_id)
        .await?
        .ok_or(AppError::not_found("Class", class_id))?;
    if !MemberClassRepo::delete(&mut *tx, member_id, class_id).await? {
        return Err(
            CoreError::Missing("member is not enrolled in this class".to_string()).into(),
        );
    }

    let num_of_member = count_after_leave(class.num_of_member);
    ClassRepo::set_member_count(&mut *tx, class_id, num_of_member).await?;
    tx.commit().await?;

    tracing::info!(member_id, class_id, num_of_member, "Member left class");
    Ok(Json(MessageResponse::new("Member removed from class successfully")))
}

// ---------------------------------------------------------------------------
// Trainers
// ---------------------------------------------------------------------------

/// GET /api/v1/members/{id}/trainers
pub async fn list_member_trainers(
    State(state): State<AppState>,
    Path(member_id): Path<DbId>,
) -> AppResult<Json<Vec<Trainer>>> {
    MemberRepo::find_by_id(&state.pool, member_id)
        .await?
        .ok_or(AppError::not_found("Member", member_id))?;
    let trainers = TrainerRepo::list_by_member(&state.pool, member_id).await?;
    Ok(Json(trainers))
}

/// GET /api/v1/trainers/{id}/members
pub async fn list_trainer_members(
    State(state): State<AppState>,
    Path(trainer_id): Path<DbId>,
) -> AppResult<Json<Vec<Member>>> {
    TrainerRepo::find_by_id(&state.pool, trainer_id)
        .await?
        .ok_or(AppError::not_found("Trainer", trainer_id))?;
    let members = MemberRepo::list_by_trainer(&state.pool, trainer_id).await?;
    Ok(Json(members))
}

/// POST /api/v1/members/{id}/trainers
pub async fn assign_trainer(
    State(state): State<AppState>,
    Path(member_id): Path<DbId>,
    Json(input): Json<AssignTrainer>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    let trainer_id = input.trainer_id;
    MemberRepo::find_by_id(&state.pool, member_id)
        .await?
        .ok_or(AppError::not_found("Member", member_id))?;
    TrainerRepo::find_by_id(&state.pool, trainer_id)
        .await?
        .ok_or(AppError::not_found("Trainer", trainer_id))?;

    MemberTrainerRepo::create(&state.pool, member_id, trainer_id)
        .await?
        .ok_or_else(|| {
            CoreError::Conflict("trainer is already assigned to this member".to_string())
        })?;

    tracing::info!(member_id, trainer_id, "Trainer assigned to member");
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Trainer assigned to member successfully")),
    ))
}

/// DELETE /api/v1/members/{id}/trainers/{trainer_id}
pub async fn unassign_trainer(
    State(state): State<AppState>,
    Path((member_id, trainer_id)): Path<(DbId, DbId)>,
) -> AppResult<Json<MessageResponse>> {
    if !MemberTrainerRepo::delete(&state.pool, member_id, trainer_id).await? {
        return Err(
            CoreError::Missing("trainer is not assigned to this member".to_string()).into(),
        );
    }
    tracing::info!(member_id, trainer_id, "Trainer unassigned from member");
    Ok(Json(MessageResponse::new("Trainer removed from member successfully")))
}
