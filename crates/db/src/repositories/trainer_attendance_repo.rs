//! Repository for the `trainer_attendance` table (trainer check-ins).

use gymdesk_core::listing::Page;
use gymdesk_core::types::{Day, DbId, TimeOfDay};
use sqlx::{PgConnection, PgPool};

use crate::models::trainer_attendance::{TrainerAttendance, TrainerAttendanceWithTrainer};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, trainer_id, check_in_time, check_out_time, date";

/// Select clause for attendance rows joined with their trainer.
const JOINED_SELECT: &str = "SELECT a.id, a.trainer_id, a.check_in_time, a.check_out_time, a.date,
                                    t.first_name AS trainer_first_name,
                                    t.last_name AS trainer_last_name
                             FROM trainer_attendance a
                             JOIN trainers t ON t.id = a.trainer_id";

/// Provides ledger writes and read-side listings for trainer attendance.
pub struct TrainerAttendanceRepo;

impl TrainerAttendanceRepo {
    // -----------------------------------------------------------------------
    // Transaction-scoped operations
    // -----------------------------------------------------------------------

    /// Whether the trainer already has a row for `day`, open or closed.
    pub async fn exists_on(
        conn: &mut PgConnection,
        trainer_id: DbId,
        day: Day,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM trainer_attendance WHERE trainer_id = $1 AND date = $2)",
        )
        .bind(trainer_id)
        .bind(day)
        .fetch_one(conn)
        .await
    }

    /// Insert an open check-in row.
    pub async fn open(
        conn: &mut PgConnection,
        trainer_id: DbId,
        day: Day,
        check_in_time: TimeOfDay,
    ) -> Result<TrainerAttendance, sqlx::Error> {
        let query = format!(
            "INSERT INTO trainer_attendance (trainer_id, check_in_time, check_out_time, date)
             VALUES ($1, $2, NULL, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TrainerAttendance>(&query)
            .bind(trainer_id)
            .bind(check_in_time)
            .bind(day)
            .fetch_one(conn)
            .await
    }

    /// Record the check-out time on the trainer's open row for `day`.
    ///
    /// Returns `None` if there is no open row for that day.
    pub async fn close_open_on(
        conn: &mut PgConnection,
        trainer_id: DbId,
        day: Day,
        check_out_time: TimeOfDay,
    ) -> Result<Option<TrainerAttendance>, sqlx::Error> {
        let query = format!(
            "UPDATE trainer_attendance SET check_out_time = $3
             WHERE trainer_id = $1 AND date = $2 AND check_out_time IS NULL
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TrainerAttendance>(&query)
            .bind(trainer_id)
            .bind(day)
            .bind(check_out_time)
            .fetch_optional(conn)
            .await
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    /// Find a single attendance row by ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<TrainerAttendance>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM trainer_attendance WHERE id = $1");
        sqlx::query_as::<_, TrainerAttendance>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List one page of attendance rows.
    pub async fn list_page(
        pool: &PgPool,
        page: &Page,
    ) -> Result<Vec<TrainerAttendanceWithTrainer>, sqlx::Error> {
        let query = format!(
            "{JOINED_SELECT}
             ORDER BY a.{} {}, a.id
             LIMIT $1 OFFSET $2",
            page.column,
            page.order.as_sql()
        );
        sqlx::query_as::<_, TrainerAttendanceWithTrainer>(&query)
            .bind(page.limit)
            .bind(page.offset)
            .fetch_all(pool)
            .await
    }

    /// List every attendance row of one trainer, most recent day first.
    pub async fn list_by_trainer(
        pool: &PgPool,
        trainer_id: DbId,
    ) -> Result<Vec<TrainerAttendanceWithTrainer>, sqlx::Error> {
        let query = format!(
            "{JOINED_SELECT}
             WHERE a.trainer_id = $1
             ORDER BY a.date DESC, a.id DESC"
        );
        sqlx::query_as::<_, TrainerAttendanceWithTrainer>(&query)
            .bind(trainer_id)
            .fetch_all(pool)
            .await
    }

    /// List attendance rows for a single day.
    pub async fn list_on(
        pool: &PgPool,
        day: Day,
    ) -> Result<Vec<TrainerAttendanceWithTrainer>, sqlx::Error> {
        let query = format!(
            "{JOINED_SELECT}
             WHERE a.date = $1
             ORDER BY a.check_in_time, a.id"
        );
        sqlx::query_as::<_, TrainerAttendanceWithTrainer>(&query)
            .bind(day)
            .fetch_all(pool)
            .await
    }

    /// List attendance rows between two days, inclusive on both ends.
    pub async fn list_between(
        pool: &PgPool,
        start: Day,
        end: Day,
    ) -> Result<Vec<TrainerAttendanceWithTrainer>, sqlx::Error> {
        let query = format!(
            "{JOINED_SELECT}
             WHERE a.date BETWEEN $1 AND $2
             ORDER BY a.date, a.check_in_time, a.id"
        );
        sqlx::query_as::<_, TrainerAttendanceWithTrainer>(&query)
            .bind(start)
            .bind(end)
            .fetch_all(pool)
            .await
    }
}
