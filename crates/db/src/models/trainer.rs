//! Trainer entity model and DTOs.

use gymdesk_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A trainer row from the `trainers` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Trainer {
    pub id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub specialization: Option<String>,
    pub email: String,
    pub phone_number: String,
    pub hire_date: Timestamp,
    /// Sessions taught. Incremented by check-in and used as the payroll multiplier.
    pub lesson: i32,
    /// Fixed pay per lesson.
    pub fixed_salary: i32,
}

/// DTO for creating a new trainer.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateTrainer {
    #[validate(length(min = 1, max = 50))]
    pub first_name: String,
    #[validate(length(min = 1, max = 50))]
    pub last_name: String,
    #[validate(length(max = 100))]
    pub specialization: Option<String>,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1, max = 15))]
    pub phone_number: String,
    /// Defaults to now if omitted.
    pub hire_date: Option<Timestamp>,
    #[validate(range(min = 0))]
    pub fixed_salary: i32,
}

/// DTO for updating an existing trainer. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateTrainer {
    #[validate(length(min = 1, max = 50))]
    pub first_name: Option<String>,
    #[validate(length(min = 1, max = 50))]
    pub last_name: Option<String>,
    #[validate(length(max = 100))]
    pub specialization: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    #[validate(length(min = 1, max = 15))]
    pub phone_number: Option<String>,
    pub hire_date: Option<Timestamp>,
    #[validate(range(min = 0))]
    pub lesson: Option<i32>,
    #[validate(range(min = 0))]
    pub fixed_salary: Option<i32>,
}
