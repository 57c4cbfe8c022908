//! Member attendance model and read-side DTOs.

use gymdesk_core::listing::SortOrder;
use gymdesk_core::types::{Day, DbId, TimeOfDay};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Columns a member attendance listing may be sorted by. The first is the default.
pub const SORTABLE_COLUMNS: &[&str] = &[
    "id",
    "date",
    "check_in_time",
    "check_out_time",
    "member_id",
];

/// A row from the `attendance` table. Created only by check-in.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Attendance {
    pub id: DbId,
    pub member_id: DbId,
    pub check_in_time: TimeOfDay,
    /// `None` while the check-in is open.
    pub check_out_time: Option<TimeOfDay>,
    pub date: Day,
}

/// An attendance row joined with the member's name for display.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AttendanceWithMember {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub attendance: Attendance,
    pub member_first_name: String,
    pub member_last_name: String,
}

/// Query parameters for paginated attendance listings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AttendanceListParams {
    pub limit: Option<i64>,
    pub page: Option<i64>,
    pub sort: Option<String>,
    pub order: Option<SortOrder>,
}

/// Query parameters for `GET .../range?start=&end=`.
#[derive(Debug, Clone, Deserialize)]
pub struct DayRangeParams {
    pub start: String,
    pub end: String,
}
