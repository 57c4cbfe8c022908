//! Repository for the `attendance` table (member check-ins).

use gymdesk_core::listing::Page;
use gymdesk_core::types::{Day, DbId, TimeOfDay};
use sqlx::{PgConnection, PgPool};

use crate::models::attendance::{Attendance, AttendanceWithMember};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, member_id, check_in_time, check_out_time, date";

/// Select clause for attendance rows joined with their member.
const JOINED_SELECT: &str = "SELECT a.id, a.member_id, a.check_in_time, a.check_out_time, a.date,
                                    m.first_name AS member_first_name,
                                    m.last_name AS member_last_name
                             FROM attendance a
                             JOIN members m ON m.id = a.member_id";

/// Provides ledger writes and read-side listings for member attendance.
pub struct AttendanceRepo;

impl AttendanceRepo {
    // -----------------------------------------------------------------------
    // Transaction-scoped operations
    // -----------------------------------------------------------------------

    /// Whether the member already has a row for `day`, open or closed.
    pub async fn exists_on(
        conn: &mut PgConnection,
        member_id: DbId,
        day: Day,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM attendance WHERE member_id = $1 AND date = $2)",
        )
        .bind(member_id)
        .bind(day)
        .fetch_one(conn)
        .await
    }

    /// Insert an open check-in row.
    pub async fn open(
        conn: &mut PgConnection,
        member_id: DbId,
        day: Day,
        check_in_time: TimeOfDay,
    ) -> Result<Attendance, sqlx::Error> {
        let query = format!(
            "INSERT INTO attendance (member_id, check_in_time, check_out_time, date)
             VALUES ($1, $2, NULL, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Attendance>(&query)
            .bind(member_id)
            .bind(check_in_time)
            .bind(day)
            .fetch_one(conn)
            .await
    }

    /// Record the check-out time on the member's open row for `day`.
    ///
    /// Returns `None` if there is no open row for that day.
    pub async fn close_open_on(
        conn: &mut PgConnection,
        member_id: DbId,
        day: Day,
        check_out_time: TimeOfDay,
    ) -> Result<Option<Attendance>, sqlx::Error> {
        let query = format!(
            "UPDATE attendance SET check_out_time = $3
             WHERE member_id = $1 AND date = $2 AND check_out_time IS NULL
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Attendance>(&query)
            .bind(member_id)
            .bind(day)
            .bind(check_out_time)
            .fetch_optional(conn)
            .await
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    /// Find a single attendance row by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Attendance>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM attendance WHERE id = $1");
        sqlx::query_as::<_, Attendance>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List one page of attendance rows.
    pub async fn list_page(
        pool: &PgPool,
        page: &Page,
    ) -> Result<Vec<AttendanceWithMember>, sqlx::Error> {
        let query = format!(
            "{JOINED_SELECT}
             ORDER BY a.{} {}, a.id
             LIMIT $1 OFFSET $2",
            page.column,
            page.order.as_sql()
        );
        sqlx::query_as::<_, AttendanceWithMember>(&query)
            .bind(page.limit)
            .bind(page.offset)
            .fetch_all(pool)
            .await
    }

    /// List every attendance row of one member, most recent day first.
    pub async fn list_by_member(
        pool: &PgPool,
        member_id: DbId,
    ) -> Result<Vec<AttendanceWithMember>, sqlx::Error> {
        let query = format!(
            "{JOINED_SELECT}
             WHERE a.member_id = $1
             ORDER BY a.date DESC, a.id DESC"
        );
        sqlx::query_as::<_, AttendanceWithMember>(&query)
            .bind(member_id)
            .fetch_all(pool)
            .await
    }

    /// List attendance rows for a single day.
    pub async fn list_on(
        pool: &PgPool,
        day: Day,
    ) -> Result<Vec<AttendanceWithMember>, sqlx::Error> {
        let query = format!(
            "{JOINED_SELECT}
             WHERE a.date = $1
             ORDER BY a.check_in_time, a.id"
        );
        sqlx::query_as::<_, AttendanceWithMember>(&query)
            .bind(day)
            .fetch_all(pool)
            .await
    }

    /// Number of members checked in on `day` and not yet checked out.
    pub async fn count_open_on(pool: &PgPool, day: Day) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM attendance WHERE date = $1 AND check_out_time IS NULL",
        )
        .bind(day)
        .fetch_one(pool)
        .await
    }

    /// List attendance rows between two days, inclusive on both ends.
    pub async fn list_between(
        pool: &PgPool,
        start: Day,
        end: Day,
    ) -> Result<Vec<AttendanceWithMember>, sqlx::Error> {
        let query = format!(
            "{JOINED_SELECT}
             WHERE a.date BETWEEN $1 AND $2
             ORDER BY a.date, a.check_in_time, a.id"
        );
        sqlx::query_as::<_, AttendanceWithMember>(&query)
            .bind(start)
            .bind(end)
            .fetch_all(pool)
            .await
    }
}
