//! Shared response bodies for API handlers.

use serde::Serialize;

/// `{ "message": ... }` body returned by workflow endpoints that have no
/// resource to echo back (enroll, unenroll, assign, unassign).
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
