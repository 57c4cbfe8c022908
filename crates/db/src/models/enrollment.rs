//! Association rows for member↔class and member↔trainer.

use gymdesk_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from `member_classes`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRow, Serialize)]
pub struct MemberClass {
    pub member_id: DbId,
    pub class_id: DbId,
}

/// A row from `member_trainers`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRow, Serialize)]
pub struct MemberTrainer {
    pub member_id: DbId,
    pub trainer_id: DbId,
}

/// Body of `POST /members/{id}/classes`.
#[derive(Debug, Clone, Deserialize)]
pub struct EnrollInClass {
    pub class_id: DbId,
}

/// Body of `POST /members/{id}/trainers`.
#[derive(Debug, Clone, Deserialize)]
pub struct AssignTrainer {
    pub trainer_id: DbId,
}
