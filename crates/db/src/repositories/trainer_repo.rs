//! Repository for the `trainers` table.

use gymdesk_core::types::DbId;
use sqlx::{PgConnection, PgPool};

use crate::models::trainer::{CreateTrainer, Trainer, UpdateTrainer};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, first_name, last_name, specialization, email, phone_number, hire_date, lesson, fixed_salary";

/// Provides CRUD and ledger operations for trainers.
pub struct TrainerRepo;

impl TrainerRepo {
    /// Insert a new trainer, returning the created row.
    ///
    /// `hire_date` defaults to now; the lesson counter always starts at 0.
    pub async fn create(pool: &PgPool, input: &CreateTrainer) -> Result<Trainer, sqlx::Error> {
        let query = format!(
            "INSERT INTO trainers
                (first_name, last_name, specialization, email, phone_number, hire_date, fixed_salary)
             VALUES ($1, $2, $3, $4, $5, COALESCE($6, NOW()), $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Trainer>(&query)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(&input.specialization)
            .bind(&input.email)
            .bind(&input.phone_number)
            .bind(input.hire_date)
            .bind(input.fixed_salary)
            .fetch_one(pool)
            .await
    }

    /// Find a trainer by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Trainer>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM trainers WHERE id = $1");
        sqlx::query_as::<_, Trainer>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all trainers ordered by ID.
    pub async fn list(pool: &PgPool) -> Result<Vec<Trainer>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM trainers ORDER BY id");
        sqlx::query_as::<_, Trainer>(&query).fetch_all(pool).await
    }

    /// List the trainers a member is assigned to.
    pub async fn list_by_member(
        pool: &PgPool,
        member_id: DbId,
    ) -> Result<Vec<Trainer>, sqlx::Error> {
        sqlx::query_as::<_, Trainer>(
            "SELECT t.id, t.first_name, t.last_name, t.specialization, t.email, t.phone_number,
                    t.hire_date, t.lesson, t.fixed_salary
             FROM trainers t
             JOIN member_trainers mt ON mt.trainer_id = t.id
             WHERE mt.member_id = $1
             ORDER BY t.id",
        )
        .bind(member_id)
        .fetch_all(pool)
        .await
    }

    /// Update a trainer. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTrainer,
    ) -> Result<Option<Trainer>, sqlx::Error> {
        let query = format!(
            "UPDATE trainers SET
                first_name = COALESCE($2, first_name),
                last_name = COALESCE($3, last_name),
                specialization = COALESCE($4, specialization),
                email = COALESCE($5, email),
                phone_number = COALESCE($6, phone_number),
                hire_date = COALESCE($7, hire_date),
                lesson = COALESCE($8, lesson),
                fixed_salary = COALESCE($9, fixed_salary)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Trainer>(&query)
            .bind(id)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(&input.specialization)
            .bind(&input.email)
            .bind(&input.phone_number)
            .bind(input.hire_date)
            .bind(input.lesson)
            .bind(input.fixed_salary)
            .fetch_optional(pool)
            .await
    }

    /// Delete a trainer. Attendance, feedback and member assignments cascade;
    /// their classes are kept with `trainer_id` cleared.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM trainers WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    // -----------------------------------------------------------------------
    // Transaction-scoped operations
    // -----------------------------------------------------------------------

    /// Load a trainer and hold a row lock until the surrounding transaction ends.
    pub async fn lock_for_update(
        conn: &mut PgConnection,
        id: DbId,
    ) -> Result<Option<Trainer>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM trainers WHERE id = $1 FOR UPDATE");
        sqlx::query_as::<_, Trainer>(&query)
            .bind(id)
            .fetch_optional(conn)
            .await
    }

    /// Count one more lesson taught. Returns the new counter value.
    pub async fn record_lesson(conn: &mut PgConnection, id: DbId) -> Result<i32, sqlx::Error> {
        sqlx::query_scalar::<_, i32>(
            "UPDATE trainers SET lesson = lesson + 1 WHERE id = $1 RETURNING lesson",
        )
        .bind(id)
        .fetch_one(conn)
        .await
    }
}
