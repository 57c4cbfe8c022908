//! Trainer attendance model.

use gymdesk_core::types::{Day, DbId, TimeOfDay};
use serde::Serialize;
use sqlx::FromRow;

/// Columns a trainer attendance listing may be sorted by. The first is the default.
pub const SORTABLE_COLUMNS: &[&str] = &[
    "id",
    "date",
    "check_in_time",
    "check_out_time",
    "trainer_id",
];

/// A row from the `trainer_attendance` table. Created only by trainer check-in.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TrainerAttendance {
    pub id: DbId,
    pub trainer_id: DbId,
    pub check_in_time: TimeOfDay,
    pub check_out_time: Option<TimeOfDay>,
    pub date: Day,
}

/// A trainer attendance row joined with the trainer's name.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TrainerAttendanceWithTrainer {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub attendance: TrainerAttendance,
    pub trainer_first_name: String,
    pub trainer_last_name: String,
}
