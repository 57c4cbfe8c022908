//! Route definitions for the `/feedback` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::feedback;
use crate::state::AppState;

/// Routes mounted at `/feedback`.
///
/// ```text
/// GET    /                              -> list
/// POST   /                              -> create
/// GET    /{id}                          -> get_by_id
/// PUT    /{id}                          -> update
/// DELETE /{id}                          -> delete
/// GET    /trainers/{trainer_id}         -> list_by_trainer
/// GET    /members/{member_id}           -> list_by_member
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(feedback::list).post(feedback::create))
        .route(
            "/{id}",
            get(feedback::get_by_id)
                .put(feedback::update)
                .delete(feedback::delete),
        )
        .route("/trainers/{trainer_id}", get(feedback::list_by_trainer))
        .route("/members/{member_id}", get(feedback::list_by_member))
}
