//! Route definitions for the `/equipment` and `/maintenance` resources.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{equipment, maintenance};
use crate::state::AppState;

/// Routes mounted at `/equipment`.
///
/// ```text
/// GET    /                              -> list (with maintenance)
/// POST   /                              -> create
/// GET    /{id}                          -> get_by_id (with maintenance)
/// PUT    /{id}                          -> update
/// DELETE /{id}                          -> delete
/// POST   /{id}/maintenance              -> maintenance::create
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(equipment::list).post(equipment::create))
        .route(
            "/{id}",
            get(equipment::get_by_id)
                .put(equipment::update)
                .delete(equipment::delete),
        )
        .route("/{id}/maintenance", post(maintenance::create))
}

/// Routes mounted at `/maintenance`.
///
/// ```text
/// GET    /                              -> list
/// GET    /{id}                          -> get_by_id
/// PUT    /{id}                          -> update
/// DELETE /{id}                          -> delete
/// ```
pub fn maintenance_router() -> Router<AppState> {
    Router::new().route("/", get(maintenance::list)).route(
        "/{id}",
        get(maintenance::get_by_id)
            .put(maintenance::update)
            .delete(maintenance::delete),
    )
}
