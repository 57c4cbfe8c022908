//! Route definitions for the member attendance ledger.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::attendance;
use crate::state::AppState;

/// Routes mounted at `/attendance`.
///
/// ```text
/// GET    /                              -> list (?limit&page&sort&order)
/// GET    /{id}                          -> get_by_id
/// GET    /members/{id}                  -> list_by_member
/// POST   /members/{id}/check-in         -> check_in
/// POST   /members/{id}/check-out        -> check_out
/// GET    /date/{date}                   -> list_by_date
/// GET    /range                         -> list_by_range (?start&end)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(attendance::list))
        .route("/{id}", get(attendance::get_by_id))
        .route("/members/{id}", get(attendance::list_by_member))
        .route("/members/{id}/check-in", post(attendance::check_in))
        .route("/members/{id}/check-out", post(attendance::check_out))
        .route("/date/{date}", get(attendance::list_by_date))
        .route("/range", get(attendance::list_by_range))
}
