//! Wire-level tests for the REST provider against a mock backend: query
//! contract, auth headers, and error mapping.

use serde_json::json;
use uuid::Uuid;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use distboard::config::AppConfig;
use distboard::entities::OrderStatus;
use distboard::errors::DashboardError;
use distboard::provider::{DataProvider, RestProvider};

fn config(server: &MockServer, api_key: Option<&str>) -> AppConfig {
    AppConfig {
        provider_url: server.uri(),
        provider_api_key: api_key.map(str::to_string),
        retailer_id: None,
        warehouse_id: None,
        request_timeout_secs: 5,
        log_level: "info".to_string(),
        log_json: false,
    }
}

fn warehouse_row(id: Uuid, name: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": name,
        "location": "Kochi",
        "latitude": 9.93,
        "longitude": 76.27,
        "capacity": 10000,
        "coverage_radius_km": 50.0,
        "created_at": "2024-01-01T00:00:00Z"
    })
}

fn inventory_row(quantity: i64, threshold: i64) -> serde_json::Value {
    json!({
        "id": Uuid::new_v4(),
        "warehouse_id": Uuid::new_v4(),
        "product_id": Uuid::new_v4(),
        "quantity": quantity,
        "low_stock_threshold": threshold,
        "last_updated": "2024-01-09T08:00:00Z"
    })
}

#[tokio::test]
async fn warehouses_query_sorts_by_name() {
    let server = MockServer::start().await;
    let id = Uuid::new_v4();

    Mock::given(method("GET"))
        .and(path("/warehouses"))
        .and(query_param("select", "*"))
        .and(query_param("order", "name.asc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([warehouse_row(id, "Kochi Central")])))
        .expect(1)
        .mount(&server)
        .await;

    let provider = RestProvider::new(&config(&server, None)).unwrap();
    let rows = provider.warehouses().await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id, id);
    assert_eq!(rows[0].name, "Kochi Central");
}

#[tokio::test]
async fn api_key_goes_out_as_bearer_and_apikey() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/warehouses"))
        .and(header("authorization", "Bearer sekret"))
        .and(header("apikey", "sekret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let provider = RestProvider::new(&config(&server, Some("sekret"))).unwrap();
    let rows = provider.warehouses().await.unwrap();
    assert!(rows.is_empty());
}

#[tokio::test]
async fn categories_come_back_name_sorted() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/product_categories"))
        .and(query_param("order", "name.asc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": Uuid::new_v4(), "name": "Essentials"},
            {"id": Uuid::new_v4(), "name": "Grains"},
        ])))
        .mount(&server)
        .await;

    let provider = RestProvider::new(&config(&server, None)).unwrap();
    let categories = provider.categories().await.unwrap();
    assert_eq!(categories.len(), 2);
    assert_eq!(categories[0].name, "Essentials");
    assert!(categories[0].description.is_none());
}

#[tokio::test]
async fn fetch_by_id_uses_an_equality_filter() {
    let server = MockServer::start().await;
    let id = Uuid::new_v4();

    Mock::given(method("GET"))
        .and(path("/warehouses"))
        .and(query_param("id", format!("eq.{id}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([warehouse_row(id, "Kochi Central")])))
        .mount(&server)
        .await;

    let provider = RestProvider::new(&config(&server, None)).unwrap();
    let found = provider.warehouse(id).await.unwrap();
    assert_eq!(found.unwrap().id, id);
}

#[tokio::test]
async fn missing_row_is_none_not_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/warehouses"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let provider = RestProvider::new(&config(&server, None)).unwrap();
    assert!(provider.warehouse(Uuid::new_v4()).await.unwrap().is_none());
}

#[tokio::test]
async fn backend_failure_maps_to_a_provider_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/orders"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let provider = RestProvider::new(&config(&server, None)).unwrap();
    let err = provider.orders_all().await.unwrap_err();
    match err {
        DashboardError::Provider(message) => assert!(message.contains("503")),
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn malformed_body_maps_to_a_decode_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/warehouses"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": "not-a-uuid"}])))
        .mount(&server)
        .await;

    let provider = RestProvider::new(&config(&server, None)).unwrap();
    let err = provider.warehouses().await.unwrap_err();
    assert!(matches!(err, DashboardError::Decode(_)));
}

#[tokio::test]
async fn low_stock_filters_below_threshold_client_side() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/warehouse_inventory"))
        .and(query_param("order", "quantity.asc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            inventory_row(20, 100),
            inventory_row(100, 100),
            inventory_row(400, 100),
        ])))
        .mount(&server)
        .await;

    let provider = RestProvider::new(&config(&server, None)).unwrap();
    let rows = provider.inventory_low_stock().await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].quantity, 20);
}

#[tokio::test]
async fn orders_decode_embedded_joins_and_snake_case_statuses() {
    let server = MockServer::start().await;
    let retailer_id = Uuid::new_v4();
    let warehouse_id = Uuid::new_v4();

    Mock::given(method("GET"))
        .and(path("/orders"))
        .and(query_param("retailer_id", format!("eq.{retailer_id}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "id": Uuid::new_v4(),
            "order_number": "ORD-1002",
            "retailer_id": retailer_id,
            "warehouse_id": warehouse_id,
            "status": "out_for_delivery",
            "payment_method": "credit",
            "payment_status": "pending",
            "total_amount": 2500,
            "order_date": "2024-01-12T09:00:00Z",
            "warehouse": warehouse_row(warehouse_id, "Kochi Central"),
            "items": [{
                "id": Uuid::new_v4(),
                "order_id": Uuid::new_v4(),
                "product_id": Uuid::new_v4(),
                "quantity": 10,
                "unit_price": 250,
                "subtotal": 2500
            }]
        }])))
        .mount(&server)
        .await;

    let provider = RestProvider::new(&config(&server, None)).unwrap();
    let orders = provider.orders_by_retailer(retailer_id).await.unwrap();
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].status, OrderStatus::OutForDelivery);
    assert_eq!(orders[0].warehouse.as_ref().unwrap().name, "Kochi Central");
    assert_eq!(orders[0].items.len(), 1);
    assert!(orders[0].retailer.is_none());
}
