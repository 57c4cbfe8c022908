//! Repository for the `members` table.

use gymdesk_core::membership::RenewalGrant;
use gymdesk_core::types::DbId;
use sqlx::{PgConnection, PgPool};

use crate::models::member::{CreateMember, Member, RenewMembership, UpdateMember};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, first_name, last_name, email, phone_number, date_of_birth, address, \
                       join_date, membership_plan_id, status, lesson";

/// Same columns qualified with the `m` alias for join queries.
const JOINED_COLUMNS: &str = "m.id, m.first_name, m.last_name, m.email, m.phone_number, \
                              m.date_of_birth, m.address, m.join_date, m.membership_plan_id, \
                              m.status, m.lesson";

/// Provides CRUD and ledger operations for members.
pub struct MemberRepo;

impl MemberRepo {
    /// Insert a new member, returning the created row.
    ///
    /// If `lesson` is `None` in the input, defaults to 0.
    pub async fn create(pool: &PgPool, input: &CreateMember) -> Result<Member, sqlx::Error> {
        let query = format!(
            "INSERT INTO members
                (first_name, last_name, email, phone_number, date_of_birth, address,
                 membership_plan_id, lesson)
             VALUES ($1, $2, $3, $4, $5, $6, $7, COALESCE($8, 0))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Member>(&query)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(&input.email)
            .bind(&input.phone_number)
            .bind(input.date_of_birth)
            .bind(&input.address)
            .bind(input.membership_plan_id)
            .bind(input.lesson)
            .fetch_one(pool)
            .await
    }

    /// Find a member by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Member>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM members WHERE id = $1");
        sqlx::query_as::<_, Member>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List members ordered by ID, optionally restricted to one status.
    pub async fn list(pool: &PgPool, status: Option<&str>) -> Result<Vec<Member>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM members
             WHERE ($1::TEXT IS NULL OR status = $1)
             ORDER BY id"
        );
        sqlx::query_as::<_, Member>(&query)
            .bind(status)
            .fetch_all(pool)
            .await
    }

    /// List members subscribed to a membership plan.
    pub async fn list_by_plan(pool: &PgPool, plan_id: DbId) -> Result<Vec<Member>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM members WHERE membership_plan_id = $1 ORDER BY id");
        sqlx::query_as::<_, Member>(&query)
            .bind(plan_id)
            .fetch_all(pool)
            .await
    }

    /// List members enrolled in a class.
    pub async fn list_by_class(pool: &PgPool, class_id: DbId) -> Result<Vec<Member>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS} FROM members m
             JOIN member_classes mc ON mc.member_id = m.id
             WHERE mc.class_id = $1
             ORDER BY m.id"
        );
        sqlx::query_as::<_, Member>(&query)
            .bind(class_id)
            .fetch_all(pool)
            .await
    }

    /// List members assigned to a trainer.
    pub async fn list_by_trainer(
        pool: &PgPool,
        trainer_id: DbId,
    ) -> Result<Vec<Member>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS} FROM members m
             JOIN member_trainers mt ON mt.member_id = m.id
             WHERE mt.trainer_id = $1
             ORDER BY m.id"
        );
        sqlx::query_as::<_, Member>(&query)
            .bind(trainer_id)
            .fetch_all(pool)
            .await
    }

    /// Update a member. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateMember,
    ) -> Result<Option<Member>, sqlx::Error> {
        let query = format!(
            "UPDATE members SET
                first_name = COALESCE($2, first_name),
                last_name = COALESCE($3, last_name),
                email = COALESCE($4, email),
                phone_number = COALESCE($5, phone_number),
                date_of_birth = COALESCE($6, date_of_birth),
                address = COALESCE($7, address),
                membership_plan_id = COALESCE($8, membership_plan_id),
                status = COALESCE($9, status),
                lesson = COALESCE($10, lesson)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Member>(&query)
            .bind(id)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(&input.email)
            .bind(&input.phone_number)
            .bind(input.date_of_birth)
            .bind(&input.address)
            .bind(input.membership_plan_id)
            .bind(&input.status)
            .bind(input.lesson)
            .fetch_optional(pool)
            .await
    }

    /// Delete a member. Attendance, feedback, payments and associations
    /// cascade. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM members WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    // -----------------------------------------------------------------------
    // Transaction-scoped operations
    // -----------------------------------------------------------------------

    /// Load a member and hold a row lock until the surrounding transaction ends.
    pub async fn lock_for_update(
        conn: &mut PgConnection,
        id: DbId,
    ) -> Result<Option<Member>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM members WHERE id = $1 FOR UPDATE");
        sqlx::query_as::<_, Member>(&query)
            .bind(id)
            .fetch_optional(conn)
            .await
    }

    /// Spend one lesson credit.
    ///
    /// The update is conditional on `lesson > 0`, so a concurrent writer can
    /// never drive the balance negative. Returns the new balance, or `None`
    /// if there was no credit to spend.
    pub async fn spend_lesson(
        conn: &mut PgConnection,
        id: DbId,
    ) -> Result<Option<i32>, sqlx::Error> {
        sqlx::query_scalar::<_, i32>(
            "UPDATE members SET lesson = lesson - 1
             WHERE id = $1 AND lesson > 0
             RETURNING lesson",
        )
        .bind(id)
        .fetch_optional(conn)
        .await
    }

    /// Apply a renewal grant plus any contact fields supplied with it.
    pub async fn renew(
        conn: &mut PgConnection,
        id: DbId,
        grant: &RenewalGrant,
        input: &RenewMembership,
    ) -> Result<Option<Member>, sqlx::Error> {
        let query = format!(
            "UPDATE members SET
                membership_plan_id = $2,
                lesson = $3,
                status = $4,
                first_name = COALESCE($5, first_name),
                last_name = COALESCE($6, last_name),
                email = COALESCE($7, email),
                phone_number = COALESCE($8, phone_number),
                address = COALESCE($9, address)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Member>(&query)
            .bind(id)
            .bind(grant.membership_plan_id)
            .bind(grant.lesson)
            .bind(grant.status)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(&input.email)
            .bind(&input.phone_number)
            .bind(&input.address)
            .fetch_optional(conn)
            .await
    }
}
