//! Handlers for the `/equipment` resource.
//!
//! Reads always include the maintenance history of each piece of equipment.

use std::collections::HashMap;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use gymdesk_core::error::CoreError;
use gymdesk_core::types::DbId;
use gymdesk_db::models::equipment::{
    CreateEquipment, Equipment, EquipmentWithMaintenance, UpdateEquipment,
};
use gymdesk_db::models::maintenance::MaintenanceRecord;
use gymdesk_db::repositories::{EquipmentRepo, MaintenanceRepo};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/v1/equipment
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateEquipment>,
) -> AppResult<(StatusCode, Json<Equipment>)> {
    input.validate().map_err(CoreError::from)?;
    let equipment = EquipmentRepo::create(&state.pool, &input).await?;
    tracing::info!(equipment_id = equipment.id, "Equipment created");
    Ok((StatusCode::CREATED, Json(equipment)))
}

/// GET /api/v1/equipment
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<EquipmentWithMaintenance>>> {
    let equipment = EquipmentRepo::list(&state.pool).await?;
    let ids: Vec<DbId> = equipment.iter().map(|e| e.id).collect();

    let mut by_equipment: HashMap<DbId, Vec<MaintenanceRecord>> = HashMap::new();
    for record in MaintenanceRepo::list_for_equipment(&state.pool, &ids).await? {
        by_equipment.entry(record.equipment_id).or_default().push(record);
    }

    let items = equipment
        .into_iter()
        .map(|equipment| {
            let maintenance = by_equipment.remove(&equipment.id).unwrap_or_default();
            EquipmentWithMaintenance {
                equipment,
                maintenance,
            }
        })
        .collect();
    Ok(Json(items))
}

/// GET /api/v1/equipment/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<EquipmentWithMaintenance>> {
    let equipment = EquipmentRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Equipment", id))?;
    let maintenance = MaintenanceRepo::list_for_equipment(&state.pool, &[id]).await?;
    Ok(Json(EquipmentWithMaintenance {
        equipment,
        maintenance,
    }))
}

/// PUT /api/v1/equipment/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateEquipment>,
) -> AppResult<Json<Equipment>> {
    input.validate().map_err(CoreError::from)?;
    let equipment = EquipmentRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::not_found("Equipment", id))?;
    Ok(Json(equipment))
}

/// DELETE /api/v1/equipment/{id}
///
/// Maintenance records cascade.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if EquipmentRepo::delete(&state.pool, id).await? {
        tracing::info!(equipment_id = id, "Equipment deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("Equipment", id))
    }
}
