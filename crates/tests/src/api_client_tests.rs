use client::{ApiClient, HttpMethod};
use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::ClientError;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

use crate::common;

#[tokio::test]
async fn test_json_response_is_returned() {
    let (server, api) = common::mock_api().await;
    common::mount_json(&server, "GET", "/lending/overdue", 200, json!([{"request_id": 1}])).await;

    let value = api
        .call("/lending/overdue", HttpMethod::Get, None, None)
        .await
        .unwrap();
    assert_eq!(value, json!([{"request_id": 1}]));
}

#[tokio::test]
async fn test_no_content_yields_empty_object() {
    let (server, api) = common::mock_api().await;
    Mock::given(method("POST"))
        .and(path("/lending/return/4"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let value = api
        .call("/lending/return/4", HttpMethod::Post, None, Some("jwt"))
        .await
        .unwrap();
    assert_eq!(value, json!({}));
}

#[tokio::test]
async fn test_non_json_success_yields_empty_object() {
    let (server, api) = common::mock_api().await;
    common::mount_text(&server, "POST", "/users/signup", 201, "created").await;

    let value = api
        .call("/users/signup", HttpMethod::Post, Some(json!({})), None)
        .await
        .unwrap();
    assert_eq!(value, json!({}));
}

#[tokio::test]
async fn test_error_detail_string_becomes_message() {
    let (server, api) = common::mock_api().await;
    common::mount_json(
        &server,
        "POST",
        "/lending/request",
        400,
        json!({"detail": "Insufficient stock"}),
    )
    .await;

    let err = api
        .call("/lending/request", HttpMethod::Post, Some(json!({})), Some("jwt"))
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), Some(400));
    assert_eq!(err.user_message(), "Insufficient stock");
}

#[tokio::test]
async fn test_validation_details_are_joined() {
    let (server, api) = common::mock_api().await;
    common::mount_json(
        &server,
        "POST",
        "/users/signup",
        422,
        json!({"detail": [
            {"loc": ["body", "email"], "msg": "field required", "type": "value_error.missing"},
            {"loc": ["body", "role"], "msg": "invalid role", "type": "value_error"}
        ]}),
    )
    .await;

    let err = api
        .call("/users/signup", HttpMethod::Post, Some(json!({})), None)
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), Some(422));
    assert_eq!(err.user_message(), "field required; invalid role");
}

#[tokio::test]
async fn test_json_error_without_detail_names_status() {
    let (server, api) = common::mock_api().await;
    common::mount_json(&server, "GET", "/lending", 403, json!({"error": "nope"})).await;

    let err = api.call("/lending", HttpMethod::Get, None, None).await.unwrap_err();
    assert_eq!(err.user_message(), "API Error (403)");
}

#[tokio::test]
async fn test_non_json_error_carries_status() {
    let (server, api) = common::mock_api().await;
    common::mount_text(&server, "GET", "/equipment/", 500, "Internal Server Error").await;

    let err = api
        .call("/equipment/", HttpMethod::Get, None, None)
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), Some(500));
    assert!(err.user_message().contains("500"));
}

#[tokio::test]
async fn test_malformed_json_is_invalid_response() {
    let (server, api) = common::mock_api().await;
    Mock::given(method("GET"))
        .and(path("/lending/overdue"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw("{not json", "application/json"),
        )
        .mount(&server)
        .await;

    let err = api
        .call("/lending/overdue", HttpMethod::Get, None, None)
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::InvalidResponse { .. }));
    assert!(err.user_message().contains("Malformed JSON"));
}

#[tokio::test]
async fn test_bearer_header_only_with_token() {
    let (server, api) = common::mock_api().await;
    common::mount_json(&server, "GET", "/lending/overdue", 200, json!([])).await;

    api.call("/lending/overdue", HttpMethod::Get, None, Some("jwt-123"))
        .await
        .unwrap();
    api.call("/lending/overdue", HttpMethod::Get, None, None)
        .await
        .unwrap();

    let requests = common::received(&server).await;
    assert_eq!(requests.len(), 2);
    assert_eq!(common::bearer(&requests[0]).as_deref(), Some("Bearer jwt-123"));
    assert_eq!(common::bearer(&requests[1]), None);
}

#[tokio::test]
async fn test_request_body_and_content_type() {
    let (server, api) = common::mock_api().await;
    common::mount_json(&server, "POST", "/lending/reject/2", 200, json!({"message": "ok"})).await;

    api.call(
        "/lending/reject/2",
        HttpMethod::Post,
        Some(json!({"reason": "damaged"})),
        Some("jwt"),
    )
    .await
    .unwrap();

    let requests = common::received(&server).await;
    let content_type = requests[0]
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok());
    assert_eq!(content_type, Some("application/json"));
    assert_eq!(common::json_body(&requests[0]), json!({"reason": "damaged"}));
}

#[tokio::test]
async fn test_unreachable_server_is_transport_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let api = ApiClient::new(format!("http://{addr}"));
    let err = api
        .call("/lending/overdue", HttpMethod::Get, None, None)
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Transport { .. }));
    assert!(err.user_message().starts_with("Could not reach the server"));
}
