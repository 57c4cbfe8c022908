//! HTTP-level tests for membership renewal and the active-member listing.

mod common;

use axum::http::StatusCode;
use common::{body_json, create_member, create_plan, get, put_json};
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn renewal_resets_lessons_and_activates(pool: PgPool) {
    let plan_id = create_plan(&pool, 12).await;
    let member_id = create_member(&pool, "lapsed@example.com", 0).await;

    let response = put_json(
        common::build_test_app(pool),
        &format!("/api/v1/members/{member_id}/renewal"),
        serde_json::json!({ "membership_plan_id": plan_id }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert!(json["message"].is_string());
    assert_eq!(json["member"]["lesson"], 12);
    assert_eq!(json["member"]["status"], "Active");
    assert_eq!(json["member"]["membership_plan_id"], plan_id);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn renewal_is_idempotent_for_the_same_plan(pool: PgPool) {
    let plan_id = create_plan(&pool, 8).await;
    let member_id = create_member(&pool, "twice@example.com", 3).await;
    let uri = format!("/api/v1/members/{member_id}/renewal");
    let body = serde_json::json!({ "membership_plan_id": plan_id });

    let first = put_json(common::build_test_app(pool.clone()), &uri, body.clone()).await;
    let first = body_json(first).await;
    let second = put_json(common::build_test_app(pool), &uri, body).await;
    let second = body_json(second).await;

    assert_eq!(first["member"], second["member"]);
    assert_eq!(second["member"]["lesson"], 8);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn renewal_applies_supplied_contact_fields(pool: PgPool) {
    let plan_id = create_plan(&pool, 4).await;
    let member_id = create_member(&pool, "moved@example.com", 0).await;

    let response = put_json(
        common::build_test_app(pool),
        &format!("/api/v1/members/{member_id}/renewal"),
        serde_json::json!({
            "membership_plan_id": plan_id,
            "address": "22 New Street",
        }),
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json["member"]["address"], "22 New Street");
    assert_eq!(json["member"]["first_name"], "Lin");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn renewal_with_unknown_plan_is_rejected(pool: PgPool) {
    let member_id = create_member(&pool, "noplan@example.com", 2).await;

    let response = put_json(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/members/{member_id}/renewal"),
        serde_json::json!({ "membership_plan_id": 999999 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "membership plan not found");

    // Nothing changed.
    let response = get(
        common::build_test_app(pool),
        &format!("/api/v1/members/{member_id}"),
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json["lesson"], 2);
    assert!(json["status"].is_null());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn renewal_of_unknown_member_returns_404(pool: PgPool) {
    let plan_id = create_plan(&pool, 4).await;

    let response = put_json(
        common::build_test_app(pool),
        "/api/v1/members/999999/renewal",
        serde_json::json!({ "membership_plan_id": plan_id }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn active_members_listing(pool: PgPool) {
    create_member(&pool, "inactive@example.com", 0).await;

    let response = get(common::build_test_app(pool.clone()), "/api/v1/members/active").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let plan_id = create_plan(&pool, 4).await;
    let member_id = create_member(&pool, "renewed@example.com", 0).await;
    put_json(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/members/{member_id}/renewal"),
        serde_json::json!({ "membership_plan_id": plan_id }),
    )
    .await;

    let response = get(common::build_test_app(pool.clone()), "/api/v1/members/active").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 1);
    assert_eq!(json[0]["id"], member_id);

    let response = get(common::build_test_app(pool), "/api/v1/members?status=Active").await;
    assert_eq!(body_json(response).await.as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn plan_detail_lists_subscribed_members(pool: PgPool) {
    let plan_id = create_plan(&pool, 6).await;
    let member_id = create_member(&pool, "sub@example.com", 0).await;
    put_json(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/members/{member_id}/renewal"),
        serde_json::json!({ "membership_plan_id": plan_id }),
    )
    .await;

    let response = get(
        common::build_test_app(pool),
        &format!("/api/v1/membership-plans/{plan_id}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["plan_name"], "Monthly");
    assert_eq!(json["members"][0]["id"], member_id);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn member_update_cannot_activate_directly(pool: PgPool) {
    let member_id = create_member(&pool, "shortcut@example.com", 0).await;
    let uri = format!("/api/v1/members/{member_id}");

    let response = put_json(
        common::build_test_app(pool.clone()),
        &uri,
        serde_json::json!({ "status": "Active" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "REJECTED");
    assert_eq!(json["error"], "status Active is only granted by renewal");

    let response = get(common::build_test_app(pool.clone()), &uri).await;
    assert!(body_json(response).await["status"].is_null());

    let response = put_json(
        common::build_test_app(pool),
        &uri,
        serde_json::json!({ "status": "Inactive" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["status"], "Inactive");
}
