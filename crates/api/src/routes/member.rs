//! Route definitions for the `/members` resource.
//!
//! Also nests renewal and the member's class and trainer relationships.

use axum::routing::{delete, get, put};
use axum::Router;

use crate::handlers::{enrollment, member};
use crate::state::AppState;

/// Routes mounted at `/members`.
///
/// ```text
/// GET    /                              -> list (?status=)
/// POST   /                              -> create
/// GET    /active                        -> list_active
/// GET    /{id}                          -> get_by_id
/// PUT    /{id}                          -> update
/// DELETE /{id}                          -> delete
/// PUT    /{id}/renewal                  -> renew
///
/// GET    /{id}/classes                  -> list_member_classes
/// POST   /{id}/classes                  -> enroll_in_class
/// DELETE /{id}/classes/{class_id}       -> leave_class
///
/// GET    /{id}/trainers                 -> list_member_trainers
/// POST   /{id}/trainers                 -> assign_trainer
/// DELETE /{id}/trainers/{trainer_id}    -> unassign_trainer
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(member::list).post(member::create))
        .route("/active", get(member::list_active))
        .route(
            "/{id}",
            get(member::get_by_id)
                .put(member::update)
                .delete(member::delete),
        )
        .route("/{id}/renewal", put(member::renew))
        .route(
            "/{id}/classes",
            get(enrollment::list_member_classes).post(enrollment::enroll_in_class),
        )
        .route("/{id}/classes/{class_id}", delete(enrollment::leave_class))
        .route(
            "/{id}/trainers",
            get(enrollment::list_member_trainers).post(enrollment::assign_trainer),
        )
        .route(
            "/{id}/trainers/{trainer_id}",
            delete(enrollment::unassign_trainer),
        )
}
