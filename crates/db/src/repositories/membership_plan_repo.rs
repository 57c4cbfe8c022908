//! Repository for the `membership_plans` table.

use gymdesk_core::types::DbId;
use sqlx::{PgConnection, PgPool};

use crate::models::membership_plan::{CreateMembershipPlan, MembershipPlan, UpdateMembershipPlan};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, plan_name, price, duration, lesson, description";

/// Provides CRUD operations for membership plans.
pub struct MembershipPlanRepo;

impl MembershipPlanRepo {
    /// Insert a new plan, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateMembershipPlan,
    ) -> Result<MembershipPlan, sqlx::Error> {
        let query = format!(
            "INSERT INTO membership_plans (plan_name, price, duration, lesson, description)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MembershipPlan>(&query)
            .bind(&input.plan_name)
            .bind(input.price)
            .bind(input.duration)
            .bind(input.lesson)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    /// Find a plan by ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<MembershipPlan>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM membership_plans WHERE id = $1");
        sqlx::query_as::<_, MembershipPlan>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Read a plan's lesson allotment inside a transaction.
    ///
    /// Takes a share lock so the plan cannot be deleted or re-priced while a
    /// renewal based on it is in flight.
    pub async fn find_lesson_allotment(
        conn: &mut PgConnection,
        id: DbId,
    ) -> Result<Option<i32>, sqlx::Error> {
        sqlx::query_scalar::<_, i32>("SELECT lesson FROM membership_plans WHERE id = $1 FOR SHARE")
            .bind(id)
            .fetch_optional(conn)
            .await
    }

    /// List all plans ordered by ID.
    pub async fn list(pool: &PgPool) -> Result<Vec<MembershipPlan>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM membership_plans ORDER BY id");
        sqlx::query_as::<_, MembershipPlan>(&query)
            .fetch_all(pool)
            .await
    }

    /// Update a plan. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateMembershipPlan,
    ) -> Result<Option<MembershipPlan>, sqlx::Error> {
        let query = format!(
            "UPDATE membership_plans SET
                plan_name = COALESCE($2, plan_name),
                price = COALESCE($3, price),
                duration = COALESCE($4, duration),
                lesson = COALESCE($5, lesson),
                description = COALESCE($6, description)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MembershipPlan>(&query)
            .bind(id)
            .bind(&input.plan_name)
            .bind(input.price)
            .bind(input.duration)
            .bind(input.lesson)
            .bind(&input.description)
            .fetch_optional(pool)
            .await
    }

    /// Delete a plan. Subscribed members keep their credit; their
    /// `membership_plan_id` is cleared.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM membership_plans WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
