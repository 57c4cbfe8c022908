//! Payment entity model and DTOs.

use gymdesk_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `payments` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Payment {
    pub id: DbId,
    pub member_id: DbId,
    pub amount: f64,
    pub payment_date: Timestamp,
    pub payment_method: String,
    pub status: String,
}

/// DTO for recording a payment.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePayment {
    pub member_id: DbId,
    #[validate(range(min = 0.0))]
    pub amount: f64,
    #[validate(length(min = 1, max = 50))]
    pub payment_method: String,
    /// Defaults to `unpaid` if omitted.
    #[validate(length(min = 1, max = 10))]
    pub status: Option<String>,
}

/// DTO for changing a payment's status.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdatePaymentStatus {
    #[validate(length(min = 1, max = 10))]
    pub status: String,
}
