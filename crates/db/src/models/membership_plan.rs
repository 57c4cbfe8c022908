//! Membership plan entity model and DTOs.

use gymdesk_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::member::Member;

/// A plan row from the `membership_plans` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MembershipPlan {
    pub id: DbId,
    pub plan_name: String,
    pub price: f64,
    /// Length of the plan in days.
    pub duration: i32,
    /// Lesson credit granted on purchase or renewal.
    pub lesson: i32,
    pub description: Option<String>,
}

/// A plan with the members currently subscribed to it.
#[derive(Debug, Clone, Serialize)]
pub struct PlanWithMembers {
    #[serde(flatten)]
    pub plan: MembershipPlan,
    pub members: Vec<Member>,
}

/// DTO for creating a new plan.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateMembershipPlan {
    #[validate(length(min = 1, max = 100))]
    pub plan_name: String,
    #[validate(range(min = 0.0))]
    pub price: f64,
    #[validate(range(min = 1))]
    pub duration: i32,
    #[validate(range(min = 0))]
    pub lesson: i32,
    #[validate(length(max = 255))]
    pub description: Option<String>,
}

/// DTO for updating an existing plan. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateMembershipPlan {
    #[validate(length(min = 1, max = 100))]
    pub plan_name: Option<String>,
    #[validate(range(min = 0.0))]
    pub price: Option<f64>,
    #[validate(range(min = 1))]
    pub duration: Option<i32>,
    #[validate(range(min = 0))]
    pub lesson: Option<i32>,
    #[validate(length(max = 255))]
    pub description: Option<String>,
}
