//! Route definitions for the `/payments` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::payment;
use crate::state::AppState;

/// Routes mounted at `/payments`.
///
/// ```text
/// GET    /                              -> list
/// POST   /                              -> create
/// GET    /{id}                          -> get_by_id
/// DELETE /{id}                          -> delete
/// PUT    /{id}/status                   -> update_status
/// GET    /members/{member_id}           -> list_by_member
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(payment::list).post(payment::create))
        .route("/{id}", get(payment::get_by_id).delete(payment::delete))
        .route("/{id}/status", put(payment::update_status))
        .route("/members/{member_id}", get(payment::list_by_member))
}
