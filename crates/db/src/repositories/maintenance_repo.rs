//! Repository for the `maintenance_records` table.

use gymdesk_core::types::{DbId, Timestamp};
use sqlx::{PgConnection, PgPool};

use crate::models::maintenance::{MaintenanceRecord, UpdateMaintenance};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, equipment_id, maintenance_date, technician, notes";

/// Provides CRUD operations for maintenance records.
pub struct MaintenanceRepo;

impl MaintenanceRepo {
    /// Insert a maintenance record inside a transaction.
    pub async fn create(
        conn: &mut PgConnection,
        equipment_id: DbId,
        maintenance_date: Timestamp,
        technician: &str,
        notes: Option<&str>,
    ) -> Result<MaintenanceRecord, sqlx::Error> {
        let query = format!(
            "INSERT INTO maintenance_records (equipment_id, maintenance_date, technician, notes)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MaintenanceRecord>(&query)
            .bind(equipment_id)
            .bind(maintenance_date)
            .bind(technician)
            .bind(notes)
            .fetch_one(conn)
            .await
    }

    /// Find a maintenance record by ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<MaintenanceRecord>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM maintenance_records WHERE id = $1");
        sqlx::query_as::<_, MaintenanceRecord>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all maintenance records, most recent first.
    pub async fn list(pool: &PgPool) -> Result<Vec<MaintenanceRecord>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM maintenance_records ORDER BY maintenance_date DESC, id DESC"
        );
        sqlx::query_as::<_, MaintenanceRecord>(&query)
            .fetch_all(pool)
            .await
    }

    /// List the maintenance records of several pieces of equipment at once.
    pub async fn list_for_equipment(
        pool: &PgPool,
        equipment_ids: &[DbId],
    ) -> Result<Vec<MaintenanceRecord>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM maintenance_records
             WHERE equipment_id = ANY($1)
             ORDER BY equipment_id, maintenance_date DESC, id DESC"
        );
        sqlx::query_as::<_, MaintenanceRecord>(&query)
            .bind(equipment_ids)
            .fetch_all(pool)
            .await
    }

    /// Update a maintenance record. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateMaintenance,
    ) -> Result<Option<MaintenanceRecord>, sqlx::Error> {
        let query = format!(
            "UPDATE maintenance_records SET
                maintenance_date = COALESCE($2, maintenance_date),
                technician = COALESCE($3, technician),
                notes = COALESCE($4, notes)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MaintenanceRecord>(&query)
            .bind(id)
            .bind(input.maintenance_date)
            .bind(&input.technician)
            .bind(&input.notes)
            .fetch_optional(pool)
            .await
    }

    /// Delete a maintenance record by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM maintenance_records WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
