//! Maintenance record model and DTOs.

use gymdesk_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `maintenance_records` table. Owned by its equipment.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MaintenanceRecord {
    pub id: DbId,
    pub equipment_id: DbId,
    pub maintenance_date: Timestamp,
    pub technician: String,
    pub notes: Option<String>,
}

/// DTO for creating a maintenance record. The equipment id comes from the path.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateMaintenance {
    /// Defaults to now if omitted.
    pub maintenance_date: Option<Timestamp>,
    #[validate(length(min = 1, max = 100))]
    pub technician: String,
    pub notes: Option<String>,
}

/// DTO for updating a maintenance record. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateMaintenance {
    pub maintenance_date: Option<Timestamp>,
    #[validate(length(min = 1, max = 100))]
    pub technician: Option<String>,
    pub notes: Option<String>,
}
