mod common;

use common::TestApp;
use reqwest::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_health() {
    let app = TestApp::spawn().await;

    let response = app
        .get("/health")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["status"], "ok");
}

#[tokio::test]
async fn test_register_success() {
    let app = TestApp::spawn().await;

    let response = app
        .register("alice", "longpassword123", "alice@x.com")
        .await;

    assert_eq!(response.status(), StatusCode::CREATED);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status_code"], 201);
    assert_eq!(body["data"]["user_id"], 1);
}

#[tokio::test]
async fn test_register_duplicate_login() {
    let app = TestApp::spawn().await;

    app.register("alice", "longpassword123", "alice@x.com")
        .await;

    // Same login, different email
    let response = app
        .register("alice", "otherpassword1", "alice2@x.com")
        .await;

    assert_eq!(response.status(), StatusCode::CONFLICT);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert!(body["data"]["message"]
        .as_str()
        .unwrap()
        .contains("already exists"));
}

#[tokio::test]
async fn test_register_duplicate_email() {
    let app = TestApp::spawn().await;

    app.register("alice", "longpassword123", "alice@x.com")
        .await;

    let response = app
        .register("carol", "longpassword123", "alice@x.com")
        .await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_register_invalid_email() {
    let app = TestApp::spawn().await;

    let response = app
        .register("alice", "longpassword123", "not-an-email")
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert!(body["data"]["message"]
        .as_str()
        .unwrap()
        .to_lowercase()
        .contains("email"));
}

#[tokio::test]
async fn test_register_short_password() {
    let app = TestApp::spawn().await;

    let response = app.register("alice", "short", "alice@x.com").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert!(body["data"]["message"]
        .as_str()
        .unwrap()
        .contains("minimum 8 characters"));
}

#[tokio::test]
async fn test_register_forbidden_login_symbols() {
    let app = TestApp::spawn().await;

    for login in ["ali-ce", "ali_ce", "alice!", "a=b", "\"alice\""] {
        let response = app.register(login, "longpassword123", "alice@x.com").await;
        assert_eq!(
            response.status(),
            StatusCode::BAD_REQUEST,
            "login {:?} was accepted",
            login
        );
    }
}

#[tokio::test]
async fn test_register_missing_field() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/api/auth/register")
        .json(&json!({
            "login": "alice",
            "password": "longpassword123"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_login_success_and_session() {
    let app = TestApp::spawn().await;

    app.register("alice", "longpassword123", "alice@x.com")
        .await;

    let response = app.login("alice", "longpassword123").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    let token = body["data"]["token"].as_str().unwrap().to_string();
    assert_eq!(token.split('.').count(), 3);

    let response = app
        .get_authenticated("/api/auth/session", &token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["subject"], "alice");
    assert!(body["data"]["issued_at"].is_string());
    assert!(body["data"]["expires_at"].is_string());
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    let app = TestApp::spawn().await;

    app.register("alice", "longpassword123", "alice@x.com")
        .await;

    let wrong_password = app.login("alice", "wrong").await;
    let unknown_login = app.login("bob", "x").await;

    assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_login.status(), StatusCode::UNAUTHORIZED);

    let wrong_password_body: serde_json::Value = wrong_password.json().await.unwrap();
    let unknown_login_body: serde_json::Value = unknown_login.json().await.unwrap();
    assert_eq!(wrong_password_body, unknown_login_body);
    assert!(wrong_password_body["data"].get("token").is_none());
}

#[tokio::test]
async fn test_login_requires_fields() {
    let app = TestApp::spawn().await;

    let response = app.login("", "").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app
        .post("/api/auth/login")
        .json(&json!({ "login": "alice" }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_session_requires_bearer_token() {
    let app = TestApp::spawn().await;

    let response = app
        .get("/api/auth/session")
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = app
        .get("/api/auth/session")
        .header("Authorization", "Basic YWxpY2U6cGFzcw==")
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_session_rejects_forged_token() {
    let app = TestApp::spawn().await;

    app.register("alice", "longpassword123", "alice@x.com")
        .await;
    let body: serde_json::Value = app
        .login("alice", "longpassword123")
        .await
        .json()
        .await
        .unwrap();
    let token = body["data"]["token"].as_str().unwrap();

    // Truncating the signature invalidates it
    let forged = &token[..token.len() - 2];

    let response = app
        .get_authenticated("/api/auth/session", forged)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["data"]["message"], "Invalid or expired token");
}
