//! Equipment entity model and DTOs.

use gymdesk_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::maintenance::MaintenanceRecord;

/// A row from the `equipment` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Equipment {
    pub id: DbId,
    pub equipment_name: String,
    pub equipment_type: String,
    pub purchase_date: Timestamp,
    /// Stamped whenever a maintenance record is created.
    pub last_maintenance_date: Option<Timestamp>,
    pub status: String,
}

/// Equipment with its maintenance history.
#[derive(Debug, Clone, Serialize)]
pub struct EquipmentWithMaintenance {
    #[serde(flatten)]
    pub equipment: Equipment,
    pub maintenance: Vec<MaintenanceRecord>,
}

/// DTO for creating equipment.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateEquipment {
    #[validate(length(min = 1, max = 100))]
    pub equipment_name: String,
    #[validate(length(min = 1, max = 50))]
    pub equipment_type: String,
    pub purchase_date: Timestamp,
    pub last_maintenance_date: Option<Timestamp>,
    #[validate(length(min = 1, max = 20))]
    pub status: String,
}

/// DTO for updating equipment. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateEquipment {
    #[validate(length(min = 1, max = 100))]
    pub equipment_name: Option<String>,
    #[validate(length(min = 1, max = 50))]
    pub equipment_type: Option<String>,
    pub purchase_date: Option<Timestamp>,
    pub last_maintenance_date: Option<Timestamp>,
    #[validate(length(min = 1, max = 20))]
    pub status: Option<String>,
}
