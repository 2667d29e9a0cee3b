use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::{RepairLogCreate, RepairLogUpdate};

use crate::common;

#[tokio::test]
async fn test_top_requested_accepts_decimal_strings() {
    let (server, api) = common::mock_api().await;
    common::mount_json(
        &server,
        "GET",
        "/analytics/usage/top-requested",
        200,
        json!([
            {"equipment_name": "Camera", "total_units_borrowed": "12"},
            {"equipment_name": "Tripod", "total_units_borrowed": 4}
        ]),
    )
    .await;

    let top = api.top_requested(Some("jwt")).await.unwrap();
    assert_eq!(top[0].total_units_borrowed, 12.0);
    assert_eq!(top[1].total_units_borrowed, 4.0);
}

#[tokio::test]
async fn test_average_duration_allows_null() {
    let (server, api) = common::mock_api().await;
    common::mount_json(
        &server,
        "GET",
        "/analytics/usage/average-duration",
        200,
        json!([
            {"equipment_name": "Camera", "avg_loan_duration_days": "2.5000"},
            {"equipment_name": "Tripod", "avg_loan_duration_days": null}
        ]),
    )
    .await;

    let durations = api.average_duration(Some("jwt")).await.unwrap();
    assert_eq!(durations[0].days_label(), "2.5 days");
    assert_eq!(durations[1].days_label(), "N/A");
}

#[tokio::test]
async fn test_log_damage_then_complete_repair() {
    let (server, api) = common::mock_api().await;
    common::mount_json(
        &server,
        "POST",
        "/analytics/repair-log",
        200,
        json!({"log_id": 21, "equipment_id": 3, "damage_description": "cracked lens", "report_date": "2025-11-02"}),
    )
    .await;
    common::mount_json(
        &server,
        "PUT",
        "/analytics/repair-log/21",
        200,
        json!({"message": "Repair completed"}),
    )
    .await;

    let log = api
        .log_damage(
            &RepairLogCreate {
                equipment_id: 3,
                damage_description: "cracked lens".into(),
            },
            Some("jwt"),
        )
        .await
        .unwrap();
    assert_eq!(log.log_id, 21);
    assert_eq!(log.repair_cost, None);

    let done = api
        .complete_repair(
            log.log_id,
            &RepairLogUpdate {
                repair_cost: 45.5,
                repaired_by: "Tech Team".into(),
            },
            Some("jwt"),
        )
        .await
        .unwrap();
    assert_eq!(done.message.as_deref(), Some("Repair completed"));

    let requests = common::received(&server).await;
    assert_eq!(
        common::json_body(&requests[1]),
        json!({"repair_cost": 45.5, "repaired_by": "Tech Team"})
    );
}
