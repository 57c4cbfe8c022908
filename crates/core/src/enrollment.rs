//! Class capacity rules for member enrollment.

use crate::error::CoreError;

pub const CLASS_FULL: &str = "class is full";

/// Refuse enrollment once the class has reached `max_participants`.
pub fn ensure_class_has_room(num_of_member: i32, max_participants: i32) -> Result<(), CoreError> {
    if num_of_member >= max_participants {
        return Err(CoreError::Rejected(CLASS_FULL.to_string()));
    }
    Ok(())
}

/// Member count after one member leaves. Never drops below zero.
pub fn count_after_leave(num_of_member: i32) -> i32 {
    (num_of_member - 1).max(0)
}
