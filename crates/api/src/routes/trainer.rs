//! Route definitions for the `/trainers` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::{enrollment, trainer};
use crate::state::AppState;

/// Routes mounted at `/trainers`.
///
/// ```text
/// GET    /                              -> list
/// POST   /                              -> create
/// GET    /{id}                          -> get_by_id
/// PUT    /{id}                          -> update
/// DELETE /{id}                          -> delete
/// GET    /{id}/classes                  -> list_classes
/// GET    /{id}/members                  -> list_trainer_members
/// GET    /{id}/salary                   -> salary
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(trainer::list).post(trainer::create))
        .route(
            "/{id}",
            get(trainer::get_by_id)
                .put(trainer::update)
                .delete(trainer::delete),
        )
        .route("/{id}/classes", get(trainer::list_classes))
        .route("/{id}/members", get(enrollment::list_trainer_members))
        .route("/{id}/salary", get(trainer::salary))
}
