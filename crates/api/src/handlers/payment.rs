//! Handlers for the `/payments` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use gymdesk_core::error::CoreError;
use gymdesk_core::types::DbId;
use gymdesk_db::models::payment::{CreatePayment, Payment, UpdatePaymentStatus};
use gymdesk_db::repositories::{MemberRepo, PaymentRepo};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/v1/payments
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreatePayment>,
) -> AppResult<(StatusCode, Json<Payment>)> {
    input.validate().map_err(CoreError::from)?;
    MemberRepo::find_by_id(&state.pool, input.member_id)
        .await?
        .ok_or(AppError::not_found("Member", input.member_id))?;

    let payment = PaymentRepo::create(&state.pool, &input).await?;
    tracing::info!(
        payment_id = payment.id,
        member_id = payment.member_id,
        amount = payment.amount,
        status = %payment.status,
        "Payment recorded"
    );
    Ok((StatusCode::CREATED, Json(payment)))
}

/// GET /api/v1/payments
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Payment>>> {
    let payments = PaymentRepo::list(&state.pool).await?;
    Ok(Json(payments))
}

/// GET /api/v1/payments/members/{member_id}
pub async fn list_by_member(
    State(state): State<AppState>,
    Path(member_id): Path<DbId>,
) -> AppResult<Json<Vec<Payment>>> {
    let payments = PaymentRepo::list_by_member(&state.pool, member_id).await?;
    Ok(Json(payments))
}

/// GET /api/v1/payments/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Payment>> {
    let payment = PaymentRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Payment", id))?;
    Ok(Json(payment))
}

/// PUT /api/v1/payments/{id}/status
pub async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdatePaymentStatus>,
) -> AppResult<Json<Payment>> {
    input.validate().map_err(CoreError::from)?;
    let payment = PaymentRepo::update_status(&state.pool, id, &input.status)
        .await?
        .ok_or(AppError::not_found("Payment", id))?;
    tracing::info!(payment_id = id, status = %payment.status, "Payment status updated");
    Ok(Json(payment))
}

/// DELETE /api/v1/payments/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if PaymentRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("Payment", id))
    }
}
