//! Repository for the `equipment` table.

use gymdesk_core::types::{DbId, Timestamp};
use sqlx::{PgConnection, PgPool};

use crate::models::equipment::{CreateEquipment, Equipment, UpdateEquipment};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, equipment_name, equipment_type, purchase_date, last_maintenance_date, status";

/// Provides CRUD operations for equipment.
pub struct EquipmentRepo;

impl EquipmentRepo {
    /// Insert new equipment, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateEquipment) -> Result<Equipment, sqlx::Error> {
        let query = format!(
            "INSERT INTO equipment
                (equipment_name, equipment_type, purchase_date, last_maintenance_date, status)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Equipment>(&query)
            .bind(&input.equipment_name)
            .bind(&input.equipment_type)
            .bind(input.purchase_date)
            .bind(input.last_maintenance_date)
            .bind(&input.status)
            .fetch_one(pool)
            .await
    }

    /// Find equipment by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Equipment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM equipment WHERE id = $1");
        sqlx::query_as::<_, Equipment>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all equipment ordered by ID.
    pub async fn list(pool: &PgPool) -> Result<Vec<Equipment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM equipment ORDER BY id");
        sqlx::query_as::<_, Equipment>(&query).fetch_all(pool).await
    }

    /// Update equipment. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateEquipment,
    ) -> Result<Option<Equipment>, sqlx::Error> {
        let query = format!(
            "UPDATE equipment SET
                equipment_name = COALESCE($2, equipment_name),
                equipment_type = COALESCE($3, equipment_type),
                purchase_date = COALESCE($4, purchase_date),
                last_maintenance_date = COALESCE($5, last_maintenance_date),
                status = COALESCE($6, status)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Equipment>(&query)
            .bind(id)
            .bind(&input.equipment_name)
            .bind(&input.equipment_type)
            .bind(input.purchase_date)
            .bind(input.last_maintenance_date)
            .bind(&input.status)
            .fetch_optional(pool)
            .await
    }

    /// Delete equipment. Its maintenance records cascade.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM equipment WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Stamp the last maintenance date inside a transaction.
    ///
    /// Returns `false` if the equipment does not exist.
    pub async fn stamp_maintenance(
        conn: &mut PgConnection,
        id: DbId,
        at: Timestamp,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE equipment SET last_maintenance_date = $2 WHERE id = $1")
            .bind(id)
            .bind(at)
            .execute(conn)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
