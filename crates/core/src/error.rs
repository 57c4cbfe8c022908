use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    /// A lookup that is not keyed by a single id came up empty
    /// (e.g. "no open check-in for today").
    #[error("Not found: {0}")]
    Missing(String),

    /// A business rule refused the operation (no credit left, class full, ...).
    #[error("Rejected: {0}")]
    Rejected(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<validator::ValidationErrors> for CoreError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut fields: Vec<String> = errors
            .field_errors()
            .into_iter()
            .map(|(field, errs)| {
                let reasons: Vec<String> = errs
                    .iter()
                    .map(|e| {
                        e.message
                            .as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| e.code.to_string())
                    })
                    .collect();
                format!("{field}: {}", reasons.join(", "))
            })
            .collect();
        // HashMap iteration order is unstable; keep messages deterministic.
        fields.sort();
        CoreError::Validation(fields.join("; "))
    }
}

#[cfg(test)]
mod tests {
    use validator::Validate;

    use super::*;

    #[derive(Validate)]
    struct Rated {
        #[validate(range(min = 1, max = 5))]
        rating: i32,
        #[validate(length(min = 1, message = "must not be empty"))]
        name: String,
    }

    #[test]
    fn validation_errors_become_sorted_field_messages() {
        let input = Rated {
            rating: 9,
            name: String::new(),
        };
        let err: CoreError = input.validate().unwrap_err().into();
        match err {
            CoreError::Validation(msg) => {
                assert_eq!(msg, "name: must not be empty; rating: range");
            }
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn not_found_display_names_entity_and_id() {
        let err = CoreError::NotFound {
            entity: "Member",
            id: 7,
        };
        assert_eq!(err.to_string(), "Entity not found: Member with id 7");
    }
}
