//! Feedback entity model and DTOs.

use gymdesk_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `feedback` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Feedback {
    pub id: DbId,
    pub member_id: DbId,
    pub trainer_id: DbId,
    pub rating: i32,
    pub comments: Option<String>,
    pub date: Timestamp,
}

/// Feedback joined with the author's name.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct FeedbackWithMember {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub feedback: Feedback,
    pub member_first_name: String,
    pub member_last_name: String,
}

/// DTO for creating feedback.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateFeedback {
    pub member_id: DbId,
    pub trainer_id: DbId,
    #[validate(range(min = 1, max = 5))]
    pub rating: i32,
    #[validate(length(max = 255))]
    pub comments: Option<String>,
}

/// DTO for updating feedback. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateFeedback {
    #[validate(range(min = 1, max = 5))]
    pub rating: Option<i32>,
    #[validate(length(max = 255))]
    pub comments: Option<String>,
}
