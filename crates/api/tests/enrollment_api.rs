//! HTTP-level tests for class enrollment and trainer assignment.

mod common;

use axum::http::StatusCode;
use common::{body_json, create_class, create_member, create_trainer, delete, get, post_json};
use sqlx::PgPool;

async fn class_count(pool: &PgPool, class_id: i64) -> i64 {
    let response = get(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/classes/{class_id}"),
    )
    .await;
    body_json(response).await["num_of_member"].as_i64().unwrap()
}

async fn enroll(pool: &PgPool, member_id: i64, class_id: i64) -> axum::response::Response {
    post_json(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/members/{member_id}/classes"),
        serde_json::json!({ "class_id": class_id }),
    )
    .await
}

// ---------------------------------------------------------------------------
// Classes
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn enroll_increments_count_and_lists_both_ways(pool: PgPool) {
    let trainer_id = create_trainer(&pool, "t@example.com", 10).await;
    let class_id = create_class(&pool, trainer_id, 5, 10).await;
    let member_id = create_member(&pool, "m@example.com", 0).await;

    let response = enroll(&pool, member_id, class_id).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert!(body_json(response).await["message"].is_string());
    assert_eq!(class_count(&pool, class_id).await, 1);

    let response = get(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/members/{member_id}/classes"),
    )
    .await;
    assert_eq!(body_json(response).await[0]["id"], class_id);

    let response = get(
        common::build_test_app(pool),
        &format!("/api/v1/classes/{class_id}/members"),
    )
    .await;
    assert_eq!(body_json(response).await[0]["id"], member_id);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn enroll_in_full_class_is_rejected(pool: PgPool) {
    let trainer_id = create_trainer(&pool, "t@example.com", 10).await;
    let class_id = create_class(&pool, trainer_id, 1, 10).await;
    let first = create_member(&pool, "first@example.com", 0).await;
    let second = create_member(&pool, "second@example.com", 0).await;

    assert_eq!(
        enroll(&pool, first, class_id).await.status(),
        StatusCode::CREATED
    );

    let response = enroll(&pool, second, class_id).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "class is full");
    assert_eq!(class_count(&pool, class_id).await, 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn enrolling_twice_is_a_conflict(pool: PgPool) {
    let trainer_id = create_trainer(&pool, "t@example.com", 10).await;
    let class_id = create_class(&pool, trainer_id, 5, 10).await;
    let member_id = create_member(&pool, "m@example.com", 0).await;

    enroll(&pool, member_id, class_id).await;
    let response = enroll(&pool, member_id, class_id).await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(class_count(&pool, class_id).await, 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn enroll_in_unknown_class_returns_404(pool: PgPool) {
    let member_id = create_member(&pool, "m@example.com", 0).await;

    let response = enroll(&pool, member_id, 999999).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn leaving_decrements_count(pool: PgPool) {
    let trainer_id = create_trainer(&pool, "t@example.com", 10).await;
    let class_id = create_class(&pool, trainer_id, 5, 10).await;
    let member_id = create_member(&pool, "m@example.com", 0).await;
    enroll(&pool, member_id, class_id).await;

    let response = delete(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/members/{member_id}/classes/{class_id}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(class_count(&pool, class_id).await, 0);

    let response = delete(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/members/{member_id}/classes/{class_id}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(class_count(&pool, class_id).await, 0);
}

// ---------------------------------------------------------------------------
// Trainers
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn assign_and_unassign_trainer(pool: PgPool) {
    let trainer_id = create_trainer(&pool, "t@example.com", 10).await;
    let member_id = create_member(&pool, "m@example.com", 0).await;
    let uri = format!("/api/v1/members/{member_id}/trainers");
    let body = serde_json::json!({ "trainer_id": trainer_id });

    let response = post_json(common::build_test_app(pool.clone()), &uri, body.clone()).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = post_json(common::build_test_app(pool.clone()), &uri, body).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let response = get(common::build_test_app(pool.clone()), &uri).await;
    assert_eq!(body_json(response).await[0]["id"], trainer_id);

    let response = get(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/trainers/{trainer_id}/members"),
    )
    .await;
    assert_eq!(body_json(response).await[0]["id"], member_id);

    let response = delete(
        common::build_test_app(pool.clone()),
        &format!("{uri}/{trainer_id}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = delete(
        common::build_test_app(pool),
        &format!("{uri}/{trainer_id}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn assign_unknown_trainer_returns_404(pool: PgPool) {
    let member_id = create_member(&pool, "m@example.com", 0).await;

    let response = post_json(
        common::build_test_app(pool),
        &format!("/api/v1/members/{member_id}/trainers"),
        serde_json::json!({ "trainer_id": 999999 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn listings_for_unknown_owner_return_404(pool: PgPool) {
    for uri in [
        "/api/v1/members/999999/classes",
        "/api/v1/members/999999/trainers",
        "/api/v1/classes/999999/members",
        "/api/v1/trainers/999999/members",
    ] {
        let response = get(common::build_test_app(pool.clone()), uri).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{uri}");
    }
}
