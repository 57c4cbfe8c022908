//! Repository for the `classes` table.

use gymdesk_core::types::DbId;
use sqlx::{PgConnection, PgPool};

use crate::models::class::{Class, ClassWithTrainer, CreateClass, UpdateClass};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, trainer_id, class_name, class_description, class_date, duration, \
                       max_participants, num_of_member, price";

/// Same columns qualified with the `c` alias for join queries.
const JOINED_COLUMNS: &str = "c.id, c.trainer_id, c.class_name, c.class_description, \
                              c.class_date, c.duration, c.max_participants, c.num_of_member, \
                              c.price";

/// Provides CRUD and capacity operations for classes.
pub struct ClassRepo;

impl ClassRepo {
    /// Insert a new class with zero enrolled members.
    pub async fn create(pool: &PgPool, input: &CreateClass) -> Result<Class, sqlx::Error> {
        let query = format!(
            "INSERT INTO classes
                (trainer_id, class_name, class_description, class_date, duration,
                 max_participants, price)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Class>(&query)
            .bind(input.trainer_id)
            .bind(&input.class_name)
            .bind(&input.class_description)
            .bind(input.class_date)
            .bind(input.duration)
            .bind(input.max_participants)
            .bind(input.price)
            .fetch_one(pool)
            .await
    }

    /// Find a class by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Class>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM classes WHERE id = $1");
        sqlx::query_as::<_, Class>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a class together with its trainer's name.
    pub async fn find_with_trainer(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ClassWithTrainer>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS},
                    t.first_name AS trainer_first_name,
                    t.last_name AS trainer_last_name
             FROM classes c
             LEFT JOIN trainers t ON t.id = c.trainer_id
             WHERE c.id = $1"
        );
        sqlx::query_as::<_, ClassWithTrainer>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all classes ordered by ID.
    pub async fn list(pool: &PgPool) -> Result<Vec<Class>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM classes ORDER BY id");
        sqlx::query_as::<_, Class>(&query).fetch_all(pool).await
    }

    /// List the classes taught by a trainer.
    pub async fn list_by_trainer(
        pool: &PgPool,
        trainer_id: DbId,
    ) -> Result<Vec<Class>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM classes WHERE trainer_id = $1 ORDER BY id");
        sqlx::query_as::<_, Class>(&query)
            .bind(trainer_id)
            .fetch_all(pool)
            .await
    }

    /// List the classes a member is enrolled in.
    pub async fn list_by_member(pool: &PgPool, member_id: DbId) -> Result<Vec<Class>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS} FROM classes c
             JOIN member_classes mc ON mc.class_id = c.id
             WHERE mc.member_id = $1
             ORDER BY c.id"
        );
        sqlx::query_as::<_, Class>(&query)
            .bind(member_id)
            .fetch_all(pool)
            .await
    }

    /// Update a class. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateClass,
    ) -> Result<Option<Class>, sqlx::Error> {
        let query = format!(
            "UPDATE classes SET
                trainer_id = COALESCE($2, trainer_id),
                class_name = COALESCE($3, class_name),
                class_description = COALESCE($4, class_description),
                class_date = COALESCE($5, class_date),
                duration = COALESCE($6, duration),
                max_participants = COALESCE($7, max_participants),
                price = COALESCE($8, price)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Class>(&query)
            .bind(id)
            .bind(input.trainer_id)
            .bind(&input.class_name)
            .bind(&input.class_description)
            .bind(input.class_date)
            .bind(input.duration)
            .bind(input.max_participants)
            .bind(input.price)
            .fetch_optional(pool)
            .await
    }

    /// Delete a class. Enrollments cascade. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM classes WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    // -----------------------------------------------------------------------
    // Transaction-scoped operations
    // -----------------------------------------------------------------------

    /// Load a class and hold a row lock until the surrounding transaction ends.
    pub async fn lock_for_update(
        conn: &mut PgConnection,
        id: DbId,
    ) -> Result<Option<Class>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM classes WHERE id = $1 FOR UPDATE");
        sqlx::query_as::<_, Class>(&query)
            .bind(id)
            .fetch_optional(conn)
            .await
    }

    /// Overwrite the enrolled-member counter. Callers compute the new value
    /// from the locked row.
    pub async fn set_member_count(
        conn: &mut PgConnection,
        id: DbId,
        num_of_member: i32,
    ) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE classes SET num_of_member = $2 WHERE id = $1")
            .bind(id)
            .bind(num_of_member)
            .execute(conn)
            .await?;
        Ok(())
    }
}
