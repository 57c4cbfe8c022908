//! HTTP-level tests for the trainer salary report.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, create_class, create_member, create_trainer, get, post, post_json, put_json,
};
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn salary_combines_class_share_and_fixed_rate(pool: PgPool) {
    let trainer_id = create_trainer(&pool, "pay@example.com", 50).await;
    let class_id = create_class(&pool, trainer_id, 20, 20).await;
    sqlx::query("UPDATE classes SET num_of_member = 10 WHERE id = $1")
        .bind(class_id)
        .execute(&pool)
        .await
        .unwrap();
    put_json(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/trainers/{trainer_id}"),
        serde_json::json!({ "lesson": 2 }),
    )
    .await;

    let response = get(
        common::build_test_app(pool),
        &format!("/api/v1/trainers/{trainer_id}/salary"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["salaryOfClasses"], 40.0);
    assert_eq!(json["fixedSalary"], 100.0);
    assert_eq!(json["totalSalary"], 140.0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn salary_without_classes_is_fixed_part_only(pool: PgPool) {
    let trainer_id = create_trainer(&pool, "solo@example.com", 30).await;
    post(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/trainer-attendance/trainers/{trainer_id}/check-in"),
    )
    .await;

    let response = get(
        common::build_test_app(pool),
        &format!("/api/v1/trainers/{trainer_id}/salary"),
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json["salaryOfClasses"], 0.0);
    assert_eq!(json["fixedSalary"], 30.0);
    assert_eq!(json["totalSalary"], 30.0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn salary_with_no_lessons_is_zero(pool: PgPool) {
    let trainer_id = create_trainer(&pool, "new@example.com", 80).await;
    let class_id = create_class(&pool, trainer_id, 5, 25).await;
    let member_id = create_member(&pool, "student@example.com", 0).await;
    post_json(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/members/{member_id}/classes"),
        serde_json::json!({ "class_id": class_id }),
    )
    .await;

    let response = get(
        common::build_test_app(pool),
        &format!("/api/v1/trainers/{trainer_id}/salary"),
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json["salaryOfClasses"], 0.0);
    assert_eq!(json["fixedSalary"], 0.0);
    assert_eq!(json["totalSalary"], 0.0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn salary_of_unknown_trainer_returns_404(pool: PgPool) {
    let response = get(
        common::build_test_app(pool),
        "/api/v1/trainers/999999/salary",
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
