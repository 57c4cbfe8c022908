pub mod attendance;
pub mod class;
pub mod equipment;
pub mod feedback;
pub mod health;
pub mod member;
pub mod membership_plan;
pub mod payment;
pub mod trainer;
pub mod trainer_attendance;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /members                                     CRUD, active, renewal
/// /members/{id}/classes                        enroll, list
/// /members/{id}/classes/{class_id}             unenroll
/// /members/{id}/trainers                       assign, list
/// /members/{id}/trainers/{trainer_id}          unassign
///
/// /trainers                                    CRUD
/// /trainers/{id}/classes                       classes taught
/// /trainers/{id}/members                       assigned members
/// /trainers/{id}/salary                        payroll
///
/// /classes                                     CRUD, members
/// /membership-plans                            CRUD (get includes members)
///
/// /attendance                                  member ledger
/// /trainer-attendance                          trainer ledger
///
/// /equipment                                   CRUD (reads include maintenance)
/// /equipment/{id}/maintenance                  record maintenance
/// /maintenance                                 list, get, update, delete
///
/// /feedback                                    CRUD, by trainer, by member
/// /payments                                    CRUD, by member, status
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/members", member::router())
        .nest("/trainers", trainer::router())
        .nest("/classes", class::router())
        .nest("/membership-plans", membership_plan::router())
        .nest("/attendance", attendance::router())
        .nest("/trainer-attendance", trainer_attendance::router())
        .nest("/equipment", equipment::router())
        .nest("/maintenance", equipment::maintenance_router())
        .nest("/feedback", feedback::router())
        .nest("/payments", payment::router())
}
