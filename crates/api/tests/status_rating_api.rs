//! HTTP-level tests for the per-user watch status and rating endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, create_test_user, get_auth, mint_token, post_json_auth};
use sqlx::PgPool;

async fn seed_entry(pool: &PgPool, title: &str) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO entries (title, external_url) VALUES ($1, $2) RETURNING id",
    )
    .bind(title)
    .bind(format!("https://example.com/{title}"))
    .fetch_one(pool)
    .await
    .expect("entry seed should succeed")
}

async fn count(pool: &PgPool, table: &str) -> i64 {
    sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(pool)
        .await
        .expect("count should succeed")
}

// ---------------------------------------------------------------------------
// Watch status
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn set_status_then_change_keeps_single_row(pool: PgPool) {
    let user = create_test_user(&pool, "watcher", "user").await;
    let token = mint_token(user.id, "user");
    let entry = seed_entry(&pool, "tracked").await;

    for status in ["planned", "watching"] {
        let app = common::build_test_app(pool.clone());
        let response = post_json_auth(
            app,
            "/api/v1/user/status",
            &token,
            serde_json::json!({ "entry_id": entry, "status": status }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["success"], true);
    }

    assert_eq!(count(&pool, "user_entry_status").await, 1);

    let app = common::build_test_app(pool.clone());
    let response = get_auth(app, "/api/v1/user/status", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let items = json["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["status"], "watching");
    assert_eq!(items[0]["title"], "tracked");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn clearing_status_is_idempotent(pool: PgPool) {
    let user = create_test_user(&pool, "clearer", "user").await;
    let token = mint_token(user.id, "user");
    let entry = seed_entry(&pool, "ephemeral").await;

    let app = common::build_test_app(pool.clone());
    post_json_auth(
        app,
        "/api/v1/user/status",
        &token,
        serde_json::json!({ "entry_id": entry, "status": "dropped" }),
    )
    .await;

    // "none" clears, and clearing twice still reports success.
    for _ in 0..2 {
        let app = common::build_test_app(pool.clone());
        let response = post_json_auth(
            app,
            "/api/v1/user/status",
            &token,
            serde_json::json!({ "entry_id": entry, "status": "none" }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["success"], true);
    }

    assert_eq!(count(&pool, "user_entry_status").await, 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn invalid_status_value_returns_400(pool: PgPool) {
    let user = create_test_user(&pool, "typo", "user").await;
    let token = mint_token(user.id, "user");
    let entry = seed_entry(&pool, "typoed").await;

    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        "/api/v1/user/status",
        &token,
        serde_json::json!({ "entry_id": entry, "status": "binging" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(count(&pool, "user_entry_status").await, 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn status_list_filter_returns_only_matching_rows(pool: PgPool) {
    let user = create_test_user(&pool, "filterer", "user").await;
    let token = mint_token(user.id, "user");
    let watching = seed_entry(&pool, "live").await;
    let planned = seed_entry(&pool, "queued").await;

    for (entry, status) in [(watching, "watching"), (planned, "planned")] {
        let app = common::build_test_app(pool.clone());
        post_json_auth(
            app,
            "/api/v1/user/status",
            &token,
            serde_json::json!({ "entry_id": entry, "status": status }),
        )
        .await;
    }

    let app = common::build_test_app(pool.clone());
    let response = get_auth(app, "/api/v1/user/status?status=watching", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let items = json["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["entry_id"].as_i64(), Some(watching));
}

/// One user's list never leaks into another's.
#[sqlx::test(migrations = "../db/migrations")]
async fn status_list_is_scoped_to_caller(pool: PgPool) {
    let first = create_test_user(&pool, "first", "user").await;
    let second = create_test_user(&pool, "second", "user").await;
    let entry = seed_entry(&pool, "shared").await;

    let app = common::build_test_app(pool.clone());
    post_json_auth(
        app,
        "/api/v1/user/status",
        &mint_token(first.id, "user"),
        serde_json::json!({ "entry_id": entry, "status": "completed" }),
    )
    .await;

    let app = common::build_test_app(pool.clone());
    let response = get_auth(app, "/api/v1/user/status", &mint_token(second.id, "user")).await;
    let json = body_json(response).await;
    assert_eq!(json["items"].as_array().unwrap().len(), 0);
}

// ---------------------------------------------------------------------------
// Ratings
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn set_rating_then_change_keeps_single_row(pool: PgPool) {
    let user = create_test_user(&pool, "rater", "user").await;
    let token = mint_token(user.id, "user");
    let entry = seed_entry(&pool, "ratable").await;

    for value in [8, 5] {
        let app = common::build_test_app(pool.clone());
        let response = post_json_auth(
            app,
            "/api/v1/user/rating",
            &token,
            serde_json::json!({ "entry_id": entry, "value": value }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    assert_eq!(count(&pool, "ratings").await, 1);

    let app = common::build_test_app(pool.clone());
    let response = get_auth(app, &format!("/api/v1/user/rating?entry_id={entry}"), &token).await;
    let json = body_json(response).await;
    assert_eq!(json["value"], 5);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn out_of_range_rating_returns_400_and_writes_nothing(pool: PgPool) {
    let user = create_test_user(&pool, "overrater", "user").await;
    let token = mint_token(user.id, "user");
    let entry = seed_entry(&pool, "overrated").await;

    for value in [-1, 11] {
        let app = common::build_test_app(pool.clone());
        let response = post_json_auth(
            app,
            "/api/v1/user/rating",
            &token,
            serde_json::json!({ "entry_id": entry, "value": value }),
        )
        .await;
        assert_eq!(
            response.status(),
            StatusCode::BAD_REQUEST,
            "value {value} must be rejected"
        );
    }

    assert_eq!(count(&pool, "ratings").await, 0);

    // Boundary values are accepted.
    for value in [0, 10] {
        let app = common::build_test_app(pool.clone());
        let response = post_json_auth(
            app,
            "/api/v1/user/rating",
            &token,
            serde_json::json!({ "entry_id": entry, "value": value }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
    }
}

#[sqlx::test(migrations = "../db/migrations")]
async fn null_rating_removes_row_and_is_idempotent(pool: PgPool) {
    let user = create_test_user(&pool, "unrater", "user").await;
    let token = mint_token(user.id, "user");
    let entry = seed_entry(&pool, "unrated").await;

    let app = common::build_test_app(pool.clone());
    post_json_auth(
        app,
        "/api/v1/user/rating",
        &token,
        serde_json::json!({ "entry_id": entry, "value": 9 }),
    )
    .await;

    for _ in 0..2 {
        let app = common::build_test_app(pool.clone());
        let response = post_json_auth(
            app,
            "/api/v1/user/rating",
            &token,
            serde_json::json!({ "entry_id": entry, "value": null }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["success"], true);
    }

    assert_eq!(count(&pool, "ratings").await, 0);

    let app = common::build_test_app(pool.clone());
    let response = get_auth(app, &format!("/api/v1/user/rating?entry_id={entry}"), &token).await;
    let json = body_json(response).await;
    assert_eq!(json["value"], serde_json::Value::Null);
}
