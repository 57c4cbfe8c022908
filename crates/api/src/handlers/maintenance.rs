//! Handlers for maintenance records.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use gymdesk_core::error::CoreError;
use gymdesk_core::types::DbId;
use gymdesk_db::models::maintenance::{CreateMaintenance, MaintenanceRecord, UpdateMaintenance};
use gymdesk_db::repositories::{EquipmentRepo, MaintenanceRepo};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/v1/equipment/{id}/maintenance
///
/// Records the maintenance and stamps the equipment's
/// `last_maintenance_date` in the same transaction.
pub async fn create(
    State(state): State<AppState>,
    Path(equipment_id): Path<DbId>,
    Json(input): Json<CreateMaintenance>,
) -> AppResult<(StatusCode, Json<MaintenanceRecord>)> {
    input.validate().map_err(CoreError::from)?;
    let performed_at = input.maintenance_date.unwrap_or_else(Utc::now);
    let mut tx = state.pool.begin().await?;

    if !EquipmentRepo::stamp_maintenance(&mut *tx, equipment_id, performed_at).await? {
        return Err(AppError::not_found("Equipment", equipment_id));
    }
    let record = MaintenanceRepo::create(
        &mut *tx,
        equipment_id,
        performed_at,
        &input.technician,
        input.notes.as_deref(),
    )
    .await?;
    tx.commit().await?;

    tracing::info!(
        equipment_id,
        maintenance_id = record.id,
        technician = %record.technician,
        "Maintenance recorded"
    );
    Ok((StatusCode::CREATED, Json(record)))
}

/// GET /api/v1/maintenance
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<MaintenanceRecord>>> {
    let records = MaintenanceRepo::list(&state.pool).await?;
    Ok(Json(records))
}

/// GET /api/v1/maintenance/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MaintenanceRecord>> {
    let record = MaintenanceRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("MaintenanceRecord", id))?;
    Ok(Json(record))
}

/// PUT /api/v1/maintenance/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateMaintenance>,
) -> AppResult<Json<MaintenanceRecord>> {
    input.validate().map_err(CoreError::from)?;
    let record = MaintenanceRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::not_found("MaintenanceRecord", id))?;
    Ok(Json(record))
}

/// DELETE /api/v1/maintenance/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if MaintenanceRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("MaintenanceRecord", id))
    }
}
