//! HTTP-level integration tests for registration and login.

mod common;

use axum::http::StatusCode;
use common::{body_json, create_test_user, get_auth, post_json};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Registration
// ---------------------------------------------------------------------------

/// Registration creates an account with the default user role and never
/// echoes the password hash.
#[sqlx::test(migrations = "../db/migrations")]
async fn register_returns_201_with_user_role(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = serde_json::json!({
        "username": "newcomer",
        "email": "newcomer@test.com",
        "password": "sufficiently-long-pw"
    });
    let response = post_json(app, "/api/v1/auth/register", body).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["username"], "newcomer");
    assert_eq!(json["email"], "newcomer@test.com");
    assert_eq!(json["role"], "user");
    assert!(json["id"].is_number());
    assert!(json.get("password_hash").is_none());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn register_duplicate_email_returns_409(pool: PgPool) {
    create_test_user(&pool, "taken", "user").await;
    let app = common::build_test_app(pool);

    let body = serde_json::json!({
        "username": "other",
        "email": "taken@test.com",
        "password": "sufficiently-long-pw"
    });
    let response = post_json(app, "/api/v1/auth/register", body).await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert_eq!(json["code"], "CONFLICT");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn register_short_password_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = serde_json::json!({
        "username": "shorty",
        "email": "shorty@test.com",
        "password": "tiny"
    });
    let response = post_json(app, "/api/v1/auth/register", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Login
// ---------------------------------------------------------------------------

/// A successful login returns a token that works against the
/// authenticated surface.
#[sqlx::test(migrations = "../db/migrations")]
async fn login_returns_working_access_token(pool: PgPool) {
    let user = create_test_user(&pool, "loginuser", "user").await;

    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({
        "email": "loginuser@test.com",
        "password": "test_password_123!"
    });
    let response = post_json(app, "/api/v1/auth/login", body).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["access_token"].is_string());
    assert!(json["expires_in"].is_number());
    assert_eq!(json["user"]["id"], user.id);
    assert_eq!(json["user"]["role"], "user");

    let token = json["access_token"].as_str().unwrap();
    let app = common::build_test_app(pool.clone());
    let response = get_auth(app, "/api/v1/user/status", token).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn login_wrong_password_returns_401(pool: PgPool) {
    create_test_user(&pool, "wrongpw", "user").await;
    let app = common::build_test_app(pool);

    let body = serde_json::json!({
        "email": "wrongpw@test.com",
        "password": "incorrect_password"
    });
    let response = post_json(app, "/api/v1/auth/login", body).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// An unknown email gets the same response as a wrong password.
#[sqlx::test(migrations = "../db/migrations")]
async fn login_unknown_email_returns_401(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = serde_json::json!({
        "email": "ghost@test.com",
        "password": "whatever-long-enough"
    });
    let response = post_json(app, "/api/v1/auth/login", body).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Invalid email or password");
}
