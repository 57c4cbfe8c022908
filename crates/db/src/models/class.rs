//! Class entity model and DTOs.

use gymdesk_core::salary::ClassShare;
use gymdesk_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A class row from the `classes` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Class {
    pub id: DbId,
    pub trainer_id: Option<DbId>,
    pub class_name: String,
    pub class_description: Option<String>,
    pub class_date: Option<Timestamp>,
    /// Length in minutes.
    pub duration: i32,
    pub max_participants: i32,
    /// Current enrollment, maintained by enroll/unenroll.
    pub num_of_member: i32,
    /// Per-member price.
    pub price: Option<i32>,
}

impl Class {
    pub fn share(&self) -> ClassShare {
        ClassShare {
            num_of_member: self.num_of_member,
            price: self.price,
        }
    }
}

/// A class joined with its trainer's name.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ClassWithTrainer {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub class: Class,
    pub trainer_first_name: Option<String>,
    pub trainer_last_name: Option<String>,
}

/// DTO for creating a new class. Enrollment always starts at zero.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateClass {
    pub trainer_id: DbId,
    #[validate(length(min = 1, max = 100))]
    pub class_name: String,
    #[validate(length(max = 255))]
    pub class_description: Option<String>,
    pub class_date: Timestamp,
    #[validate(range(min = 1))]
    pub duration: i32,
    #[validate(range(min = 1))]
    pub max_participants: i32,
    #[validate(range(min = 0))]
    pub price: Option<i32>,
}

/// DTO for updating an existing class. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateClass {
    pub trainer_id: Option<DbId>,
    #[validate(length(min = 1, max = 100))]
    pub class_name: Option<String>,
    #[validate(length(max = 255))]
    pub class_description: Option<String>,
    pub class_date: Option<Timestamp>,
    #[validate(range(min = 1))]
    pub duration: Option<i32>,
    #[validate(range(min = 1))]
    pub max_participants: Option<i32>,
    #[validate(range(min = 0))]
    pub price: Option<i32>,
}
