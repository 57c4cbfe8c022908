//! Repository for the `member_classes` association table.

use gymdesk_core::types::DbId;
use sqlx::PgConnection;

use crate::models::enrollment::MemberClass;

/// Association rows between members and classes.
///
/// Every method runs inside the caller's transaction so the class counter
/// and the association row change together.
pub struct MemberClassRepo;

impl MemberClassRepo {
    /// Whether the member is already enrolled in the class.
    pub async fn exists(
        conn: &mut PgConnection,
        member_id: DbId,
        class_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM member_classes WHERE member_id = $1 AND class_id = $2)",
        )
        .bind(member_id)
        .bind(class_id)
        .fetch_one(conn)
        .await
    }

    /// Insert the association row.
    pub async fn create(
        conn: &mut PgConnection,
        member_id: DbId,
        class_id: DbId,
    ) -> Result<MemberClass, sqlx::Error> {
        sqlx::query_as::<_, MemberClass>(
            "INSERT INTO member_classes (member_id, class_id)
             VALUES ($1, $2)
             RETURNING member_id, class_id",
        )
        .bind(member_id)
        .bind(class_id)
        .fetch_one(conn)
        .await
    }

    /// Remove the association row. Returns `true` if a row was removed.
    pub async fn delete(
        conn: &mut PgConnection,
        member_id: DbId,
        class_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("DELETE FROM member_classes WHERE member_id = $1 AND class_id = $2")
                .bind(member_id)
                .bind(class_id)
                .execute(conn)
                .await?;
        Ok(result.rows_affected() > 0)
    }
}
