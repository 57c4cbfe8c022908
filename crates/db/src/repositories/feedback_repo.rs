//! Repository for the `feedback` table.

use gymdesk_core::types::DbId;
use sqlx::PgPool;

use crate::models::feedback::{CreateFeedback, Feedback, FeedbackWithMember, UpdateFeedback};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, member_id, trainer_id, rating, comments, date";

/// Select clause for feedback joined with its author.
const JOINED_SELECT: &str = "SELECT f.id, f.member_id, f.trainer_id, f.rating, f.comments, f.date,
                                    m.first_name AS member_first_name,
                                    m.last_name AS member_last_name
                             FROM feedback f
                             JOIN members m ON m.id = f.member_id";

/// Provides CRUD operations for feedback.
pub struct FeedbackRepo;

impl FeedbackRepo {
    /// Insert feedback dated now.
    pub async fn create(pool: &PgPool, input: &CreateFeedback) -> Result<Feedback, sqlx::Error> {
        let query = format!(
            "INSERT INTO feedback (member_id, trainer_id, rating, comments)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Feedback>(&query)
            .bind(input.member_id)
            .bind(input.trainer_id)
            .bind(input.rating)
            .bind(&input.comments)
            .fetch_one(pool)
            .await
    }

    /// Find feedback by ID, with its author's name.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<FeedbackWithMember>, sqlx::Error> {
        let query = format!("{JOINED_SELECT} WHERE f.id = $1");
        sqlx::query_as::<_, FeedbackWithMember>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all feedback, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<FeedbackWithMember>, sqlx::Error> {
        let query = format!("{JOINED_SELECT} ORDER BY f.date DESC, f.id DESC");
        sqlx::query_as::<_, FeedbackWithMember>(&query)
            .fetch_all(pool)
            .await
    }

    /// List feedback about one trainer, newest first.
    pub async fn list_by_trainer(
        pool: &PgPool,
        trainer_id: DbId,
    ) -> Result<Vec<FeedbackWithMember>, sqlx::Error> {
        let query =
            format!("{JOINED_SELECT} WHERE f.trainer_id = $1 ORDER BY f.date DESC, f.id DESC");
        sqlx::query_as::<_, FeedbackWithMember>(&query)
            .bind(trainer_id)
            .fetch_all(pool)
            .await
    }

    /// List feedback written by one member, newest first.
    pub async fn list_by_member(
        pool: &PgPool,
        member_id: DbId,
    ) -> Result<Vec<FeedbackWithMember>, sqlx::Error> {
        let query =
            format!("{JOINED_SELECT} WHERE f.member_id = $1 ORDER BY f.date DESC, f.id DESC");
        sqlx::query_as::<_, FeedbackWithMember>(&query)
            .bind(member_id)
            .fetch_all(pool)
            .await
    }

    /// Update feedback. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateFeedback,
    ) -> Result<Option<Feedback>, sqlx::Error> {
        let query = format!(
            "UPDATE feedback SET
                rating = COALESCE($2, rating),
                comments = COALESCE($3, comments)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Feedback>(&query)
            .bind(id)
            .bind(input.rating)
            .bind(&input.comments)
            .fetch_optional(pool)
            .await
    }

    /// Delete feedback by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM feedback WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
