//! Membership lifecycle: what a renewal writes onto a member.

use crate::error::CoreError;
use crate::types::DbId;

/// Status written by renewal. Member creation never sets it.
pub const STATUS_ACTIVE: &str = "Active";

pub const PLAN_NOT_FOUND: &str = "membership plan not found";
pub const ACTIVE_ONLY_BY_RENEWAL: &str = "status Active is only granted by renewal";

/// The member columns a renewal overwrites.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenewalGrant {
    pub membership_plan_id: DbId,
    pub lesson: i32,
    pub status: &'static str,
}

/// Build the renewal grant for a plan lookup result.
///
/// A missing plan is a policy rejection rather than a 404: the member being
/// renewed exists, the request just named a plan that does not.
pub fn renewal_grant(plan_id: DbId, plan_lesson: Option<i32>) -> Result<RenewalGrant, CoreError> {
    let lesson = plan_lesson.ok_or_else(|| CoreError::Rejected(PLAN_NOT_FOUND.to_string()))?;
    Ok(RenewalGrant {
        membership_plan_id: plan_id,
        lesson,
        status: STATUS_ACTIVE,
    })
}

/// Refuse a direct status edit that would activate a member.
///
/// Other statuses (for example `Inactive`) may still be set by hand.
pub fn ensure_status_editable(status: Option<&str>) -> Result<(), CoreError> {
    match status {
        Some(s) if s.trim().eq_ignore_ascii_case(STATUS_ACTIVE) => {
            Err(CoreError::Rejected(ACTIVE_ONLY_BY_RENEWAL.to_string()))
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn grant_copies_plan_lessons_and_activates() {
        let grant = renewal_grant(3, Some(12)).unwrap();
        assert_eq!(
            grant,
            RenewalGrant {
                membership_plan_id: 3,
                lesson: 12,
                status: "Active",
            }
        );
    }

    #[test]
    fn grant_is_identical_for_repeated_renewals() {
        assert_eq!(renewal_grant(3, Some(8)).unwrap(), renewal_grant(3, Some(8)).unwrap());
    }

    #[test]
    fn direct_activation_is_rejected_in_any_case() {
        for status in ["Active", "active", " ACTIVE "] {
            assert_matches!(
                ensure_status_editable(Some(status)),
                Err(CoreError::Rejected(msg)) if msg == ACTIVE_ONLY_BY_RENEWAL
            );
        }
    }

    #[test]
    fn other_statuses_are_editable() {
        assert!(ensure_status_editable(Some("Inactive")).is_ok());
        assert!(ensure_status_editable(None).is_ok());
    }

    #[test]
    fn missing_plan_is_rejected() {
        assert_matches!(
            renewal_grant(99, None),
            Err(CoreError::Rejected(msg)) if msg == PLAN_NOT_FOUND
        );
    }
}
