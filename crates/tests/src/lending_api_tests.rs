use client::api::{LENDING_FALLBACK_PATH, PENDING_REQUESTS_PATH};
use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::{ClientError, LendingRequestCreate, LendingStatus};

use crate::common;

fn request(id: i64, status: &str) -> serde_json::Value {
    json!({
        "request_id": id,
        "equipment_id": 10 + id,
        "requester_id": 3,
        "request_date": "2025-11-01",
        "expected_return_date": "2025-11-08",
        "quantity": 1,
        "status": status
    })
}

#[tokio::test]
async fn test_create_lending_request() {
    let (server, api) = common::mock_api().await;
    common::mount_json(&server, "POST", "/lending/request", 200, request(5, "Pending")).await;

    let body = LendingRequestCreate {
        equipment_id: 15,
        quantity: 2,
        expected_return_date: "2025-11-08".into(),
    };
    let created = api.create_lending_request(&body, Some("jwt")).await.unwrap();
    assert_eq!(created.request_id, 5);
    assert_eq!(created.status, LendingStatus::Pending);

    let requests = common::received(&server).await;
    assert_eq!(
        common::json_body(&requests[0]),
        json!({"equipment_id": 15, "quantity": 2, "expected_return_date": "2025-11-08"})
    );
}

#[tokio::test]
async fn test_pending_listing_is_filtered_to_active() {
    let (server, api) = common::mock_api().await;
    common::mount_json(
        &server,
        "GET",
        "/lending/requests",
        200,
        json!([
            request(1, "Pending"),
            request(2, "Returned"),
            request(3, "Issued"),
            request(4, "Rejected"),
            request(5, "Approved")
        ]),
    )
    .await;

    let active = api.list_active_requests(Some("jwt")).await.unwrap();
    let ids: Vec<i64> = active.iter().map(|r| r.request_id).collect();
    assert_eq!(ids, vec![1, 3, 5]);

    let requests = common::received(&server).await;
    assert_eq!(requests.len(), 1);
    let issued = format!("{}?{}", requests[0].url.path(), requests[0].url.query().unwrap_or(""));
    assert_eq!(issued, PENDING_REQUESTS_PATH);
}

#[tokio::test]
async fn test_pending_listing_falls_back_to_full_listing() {
    let (server, api) = common::mock_api().await;
    common::mount_json(&server, "GET", "/lending/requests", 404, json!({"detail": "Not Found"})).await;
    common::mount_json(
        &server,
        "GET",
        LENDING_FALLBACK_PATH,
        200,
        json!([request(1, "Returned"), request(2, "Approved"), request(3, "Overdue")]),
    )
    .await;

    let active = api.list_active_requests(Some("jwt")).await.unwrap();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].request_id, 2);

    let paths: Vec<String> = common::received(&server)
        .await
        .iter()
        .map(|r| r.url.path().to_string())
        .collect();
    assert_eq!(paths, vec!["/lending/requests", "/lending"]);
}

#[tokio::test]
async fn test_fallback_failure_is_reported() {
    let (server, api) = common::mock_api().await;
    common::mount_json(&server, "GET", "/lending/requests", 500, json!({"detail": "boom"})).await;
    common::mount_json(&server, "GET", "/lending", 403, json!({"detail": "Forbidden"})).await;

    let err = api.list_active_requests(Some("jwt")).await.unwrap_err();
    assert_eq!(err.status_code(), Some(403));
}

#[tokio::test]
async fn test_approve_reject_and_return_paths() {
    let (server, api) = common::mock_api().await;
    common::mount_json(&server, "POST", "/lending/approve/7", 200, json!({"message": "Approved"})).await;
    common::mount_json(&server, "POST", "/lending/reject/7", 200, json!({"message": "Rejected"})).await;
    common::mount_json(&server, "POST", "/lending/return/7", 200, json!({})).await;

    let approved = api.approve_request(7, Some("jwt")).await.unwrap();
    assert_eq!(approved.message.as_deref(), Some("Approved"));
    api.reject_request(7, "  missing parts ", Some("jwt")).await.unwrap();
    let returned = api.mark_returned(7, Some("jwt")).await.unwrap();
    assert_eq!(returned.message, None);

    let requests = common::received(&server).await;
    assert_eq!(common::json_body(&requests[1]), json!({"reason": "missing parts"}));
    assert!(requests
        .iter()
        .all(|r| common::bearer(r).as_deref() == Some("Bearer jwt")));
}

#[tokio::test]
async fn test_approve_conflict_is_api_error() {
    let (server, api) = common::mock_api().await;
    common::mount_json(
        &server,
        "POST",
        "/lending/approve/9",
        400,
        json!({"detail": "Request is not pending"}),
    )
    .await;

    let err = api.approve_request(9, Some("jwt")).await.unwrap_err();
    assert!(matches!(err, ClientError::Api(_)));
    assert_eq!(err.user_message(), "Request is not pending");
}

#[tokio::test]
async fn test_list_overdue() {
    let (server, api) = common::mock_api().await;
    common::mount_json(
        &server,
        "GET",
        "/lending/overdue",
        200,
        json!([{
            "request_id": 4,
            "borrower_name": "Kim",
            "requester_email": "kim@uni.test",
            "equipment_name": "Drone",
            "expected_return_date": "2025-10-30"
        }]),
    )
    .await;

    let overdue = api.list_overdue(Some("jwt")).await.unwrap();
    assert_eq!(overdue.len(), 1);
    assert_eq!(overdue[0].equipment_name, "Drone");
}
