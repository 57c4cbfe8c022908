//! Route definitions for the `/membership-plans` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::membership_plan;
use crate::state::AppState;

/// Routes mounted at `/membership-plans`.
///
/// ```text
/// GET    /                              -> list
/// POST   /                              -> create
/// GET    /{id}                          -> get_by_id (with members)
/// PUT    /{id}                          -> update
/// DELETE /{id}                          -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(membership_plan::list).post(membership_plan::create))
        .route(
            "/{id}",
            get(membership_plan::get_by_id)
                .put(membership_plan::update)
                .delete(membership_plan::delete),
        )
}
