use client::{authorize, resolve_landing, GateDecision, Landing, MemoryStorage, SessionStore};
use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::{ClientError, Role, SignupRequest};

use crate::common;

fn login_payload(role: &str) -> serde_json::Value {
    json!({
        "access_token": "jwt-abc",
        "token_type": "bearer",
        "role": role,
        "user_id": 7,
        "full_name": "Priya Nair"
    })
}

#[tokio::test]
async fn test_login_sends_credentials() {
    let (server, api) = common::mock_api().await;
    common::mount_json(&server, "POST", "/users/login", 200, login_payload("Staff")).await;

    let auth = api.login("priya", "s3cret").await.unwrap();
    assert_eq!(auth.access_token, "jwt-abc");
    assert_eq!(auth.role, Role::Staff);
    assert_eq!(auth.user_id, 7);

    let requests = common::received(&server).await;
    assert_eq!(
        common::json_body(&requests[0]),
        json!({"username": "priya", "password": "s3cret"})
    );
    assert_eq!(common::bearer(&requests[0]), None);
}

#[tokio::test]
async fn test_staff_login_lands_on_staff_dashboard() {
    let (server, api) = common::mock_api().await;
    common::mount_json(&server, "POST", "/users/login", 200, login_payload("Staff")).await;

    let auth = api.login("priya", "pw").await.unwrap();
    let mut store = SessionStore::load(MemoryStorage::new());
    store.set_auth(&auth.access_token, auth.role, auth.user_id, &auth.full_name);

    let landing = resolve_landing(store.read());
    assert_eq!(landing, Landing::Staff);
    assert_eq!(authorize(store.read(), landing.required_roles()), GateDecision::Authorized);
    assert_eq!(
        authorize(store.read(), &[Role::Admin]),
        GateDecision::Forbidden {
            required: vec![Role::Admin]
        }
    );
}

#[tokio::test]
async fn test_admin_session_survives_reload_then_logout() {
    let (server, api) = common::mock_api().await;
    common::mount_json(&server, "POST", "/users/login", 200, login_payload("admin")).await;

    let auth = api.login("root", "pw").await.unwrap();
    let mut store = SessionStore::load(MemoryStorage::new());
    store.set_auth(&auth.access_token, auth.role, auth.user_id, &auth.full_name);

    let mut reloaded = SessionStore::load(store.into_storage());
    assert_eq!(reloaded.read().role, Some(Role::Admin));
    assert_eq!(resolve_landing(reloaded.read()), Landing::Admin);

    reloaded.logout();
    assert_eq!(resolve_landing(reloaded.read()), Landing::Login);
    assert_eq!(authorize(reloaded.read(), &[]), GateDecision::Unauthenticated);
    assert!(reloaded.storage().is_empty());
}

#[tokio::test]
async fn test_session_persists_to_disk() {
    let (server, api) = common::mock_api().await;
    common::mount_json(&server, "POST", "/users/login", 200, login_payload("Student")).await;
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("session.json");

    let auth = api.login("lee", "pw").await.unwrap();
    let mut store = SessionStore::load(client::FileStorage::open(&file));
    store.set_auth(&auth.access_token, auth.role, auth.user_id, &auth.full_name);

    let restored = SessionStore::load(client::FileStorage::open(&file));
    assert_eq!(restored.read().token.as_deref(), Some("jwt-abc"));
    assert_eq!(resolve_landing(restored.read()), Landing::Browse);
}

#[tokio::test]
async fn test_partial_login_response_is_rejected() {
    let (server, api) = common::mock_api().await;
    common::mount_json(
        &server,
        "POST",
        "/users/login",
        200,
        json!({"access_token": "jwt", "role": "Staff"}),
    )
    .await;

    let err = api.login("priya", "pw").await.unwrap_err();
    assert_eq!(
        err,
        ClientError::invalid_response("Invalid response from login API.")
    );
}

#[tokio::test]
async fn test_bad_credentials_surface_server_detail() {
    let (server, api) = common::mock_api().await;
    common::mount_json(
        &server,
        "POST",
        "/users/login",
        401,
        json!({"detail": "Incorrect username or password"}),
    )
    .await;

    let err = api.login("priya", "wrong").await.unwrap_err();
    assert_eq!(err.status_code(), Some(401));
    assert_eq!(err.user_message(), "Incorrect username or password");
}

#[tokio::test]
async fn test_signup_attaches_admin_token() {
    let (server, api) = common::mock_api().await;
    common::mount_json(&server, "POST", "/users/signup", 201, json!({"user_id": 9})).await;

    let request = SignupRequest {
        username: "sam".into(),
        password: "pw".into(),
        full_name: "Sam Ortiz".into(),
        email: "sam@uni.test".into(),
        phone_number: None,
        role: Role::Staff,
    };
    api.signup(&request, Some("admin-jwt")).await.unwrap();

    let requests = common::received(&server).await;
    assert_eq!(common::bearer(&requests[0]).as_deref(), Some("Bearer admin-jwt"));
    let body = common::json_body(&requests[0]);
    assert_eq!(body["role"], "Staff");
    assert!(body.get("phone_number").is_none());
}
