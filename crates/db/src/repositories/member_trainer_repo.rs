//! Repository for the `member_trainers` association table.

use gymdesk_core::types::DbId;
use sqlx::PgPool;

use crate::models::enrollment::MemberTrainer;

/// Association rows between members and trainers.
pub struct MemberTrainerRepo;

impl MemberTrainerRepo {
    /// Insert the association row.
    ///
    /// Returns `None` if the pair already exists.
    pub async fn create(
        pool: &PgPool,
        member_id: DbId,
        trainer_id: DbId,
    ) -> Result<Option<MemberTrainer>, sqlx::Error> {
        sqlx::query_as::<_, MemberTrainer>(
            "INSERT INTO member_trainers (member_id, trainer_id)
             VALUES ($1, $2)
             ON CONFLICT (member_id, trainer_id) DO NOTHING
             RETURNING member_id, trainer_id",
        )
        .bind(member_id)
        .bind(trainer_id)
        .fetch_optional(pool)
        .await
    }

    /// Remove the association row. Returns `true` if a row was removed.
    pub async fn delete(
        pool: &PgPool,
        member_id: DbId,
        trainer_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("DELETE FROM member_trainers WHERE member_id = $1 AND trainer_id = $2")
                .bind(member_id)
                .bind(trainer_id)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }
}
