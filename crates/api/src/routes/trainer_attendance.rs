//! Route definitions for the trainer attendance ledger.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::trainer_attendance;
use crate::state::AppState;

/// Routes mounted at `/trainer-attendance`.
///
/// ```text
/// GET    /                              -> list (?limit&page&sort&order)
/// GET    /{id}                          -> get_by_id
/// GET    /trainers/{id}                 -> list_by_trainer
/// POST   /trainers/{id}/check-in        -> check_in
/// POST   /trainers/{id}/check-out       -> check_out
/// GET    /date/{date}                   -> list_by_date
/// GET    /range                         -> list_by_range (?start&end)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(trainer_attendance::list))
        .route("/{id}", get(trainer_attendance::get_by_id))
        .route("/trainers/{id}", get(trainer_attendance::list_by_trainer))
        .route("/trainers/{id}/check-in", post(trainer_attendance::check_in))
        .route("/trainers/{id}/check-out", post(trainer_attendance::check_out))
        .route("/date/{date}", get(trainer_attendance::list_by_date))
        .route("/range", get(trainer_attendance::list_by_range))
}
