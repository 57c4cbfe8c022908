//! Member entity model and DTOs.

use chrono::NaiveDate;
use gymdesk_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A member row from the `members` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Member {
    pub id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub date_of_birth: Option<NaiveDate>,
    pub address: Option<String>,
    pub join_date: Timestamp,
    pub membership_plan_id: Option<DbId>,
    pub status: Option<String>,
    /// Remaining lesson credit. Decremented by check-in, reset by renewal.
    pub lesson: i32,
}

/// DTO for creating a new member.
///
/// `status` is deliberately absent: only renewal marks a member Active.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateMember {
    #[validate(length(min = 1, max = 50))]
    pub first_name: String,
    #[validate(length(min = 1, max = 50))]
    pub last_name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1, max = 15))]
    pub phone_number: String,
    pub date_of_birth: Option<NaiveDate>,
    #[validate(length(max = 255))]
    pub address: Option<String>,
    pub membership_plan_id: Option<DbId>,
    /// Defaults to 0 if omitted.
    #[validate(range(min = 0))]
    pub lesson: Option<i32>,
}

/// DTO for updating an existing member. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateMember {
    #[validate(length(min = 1, max = 50))]
    pub first_name: Option<String>,
    #[validate(length(min = 1, max = 50))]
    pub last_name: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    #[validate(length(min = 1, max = 15))]
    pub phone_number: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    #[validate(length(max = 255))]
    pub address: Option<String>,
    pub membership_plan_id: Option<DbId>,
    /// Any status except `Active`, which only renewal grants.
    #[validate(length(min = 1, max = 20))]
    pub status: Option<String>,
    #[validate(range(min = 0))]
    pub lesson: Option<i32>,
}

/// Body of `PUT /members/{id}/renewal`.
///
/// The plan decides `lesson`; contact fields supplied alongside are applied
/// in the same update.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RenewMembership {
    pub membership_plan_id: DbId,
    #[validate(length(min = 1, max = 50))]
    pub first_name: Option<String>,
    #[validate(length(min = 1, max = 50))]
    pub last_name: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    #[validate(length(min = 1, max = 15))]
    pub phone_number: Option<String>,
    #[validate(length(max = 255))]
    pub address: Option<String>,
}

/// Query parameters for `GET /members`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MemberFilter {
    pub status: Option<String>,
}
