use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::EquipmentQuery;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

use crate::common;

#[tokio::test]
async fn test_list_equipment_without_filters() {
    let (server, api) = common::mock_api().await;
    common::mount_json(
        &server,
        "GET",
        "/equipment/",
        200,
        json!([
            {"equipment_id": 1, "name": "Camera", "category_id": 2, "total_quantity": 4, "available_quantity": 1},
            {"equipment_id": 2, "name": "Tripod", "category_id": null, "total_quantity": 2, "available_quantity": 0}
        ]),
    )
    .await;

    let items = api
        .list_equipment(&EquipmentQuery::default(), Some("jwt"))
        .await
        .unwrap();
    assert_eq!(items.len(), 2);
    assert!(items[0].is_available());
    assert_eq!(items[1].category_label(), "Category: General");

    let requests = common::received(&server).await;
    assert_eq!(requests[0].url.query(), None);
}

#[tokio::test]
async fn test_search_filters_are_encoded() {
    let (server, api) = common::mock_api().await;
    Mock::given(method("GET"))
        .and(path("/equipment/"))
        .and(query_param("search_term", "sound & light"))
        .and(query_param("category_id", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let query = EquipmentQuery::from_form("  sound & light ", "3");
    let items = api.list_equipment(&query, Some("jwt")).await.unwrap();
    assert!(items.is_empty());

    let requests = common::received(&server).await;
    assert_eq!(
        requests[0].url.query(),
        Some("search_term=sound%20%26%20light&category_id=3")
    );
}

#[tokio::test]
async fn test_list_categories() {
    let (server, api) = common::mock_api().await;
    common::mount_json(
        &server,
        "GET",
        "/equipment_category/",
        200,
        json!([{"category_id": 1, "category_name": "Laptops", "description": null}]),
    )
    .await;

    let categories = api.list_categories(Some("jwt")).await.unwrap();
    assert_eq!(categories[0].category_name, "Laptops");
    assert_eq!(categories[0].description, None);
}
