use std::sync::Arc;

use axum::http::StatusCode;
use axum_test::TestServer;
use chrono::NaiveDate;
use serde_json::json;
use sqlx::sqlite::SqlitePoolOptions;
use uuid::Uuid;

use sinkhole_registry::core::database::MIGRATOR;
use sinkhole_registry::features::sinkholes::dtos::SinkholeResponseDto;
use sinkhole_registry::features::sinkholes::{routes, SinkholeService};

async fn test_server() -> TestServer {
    // A single connection keeps the in-memory database alive and private to
    // this test.
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("failed to open in-memory database");

    MIGRATOR.run(&pool).await.expect("failed to run migrations");

    let service = Arc::new(SinkholeService::new(pool));
    TestServer::new(routes::routes(service)).expect("failed to build test server")
}

fn winter_park_payload() -> serde_json::Value {
    json!({
        "name": "Winter Park Sinkhole",
        "description": "Famous sinkhole in Winter Park, Florida.",
        "latitude": 28.5997,
        "longitude": -81.3392,
        "diameter": 107.0,
        "depth": 27.0,
        "risk_level": "medium",
        "geological_type": "Subsidence",
        "soil_type": "Sandy soil",
        "bedrock_type": "Limestone",
        "water_table_depth": 8.0,
        "discovery_date": "1981-05-08",
        "last_inspection": "2024-11-02",
        "is_active": false
    })
}

fn data(body: &serde_json::Value) -> SinkholeResponseDto {
    serde_json::from_value(body["data"].clone()).expect("response data should deserialize")
}

#[tokio::test]
async fn test_create_then_retrieve_round_trips() {
    let server = test_server().await;

    let res = server.post("/api/sinkholes").json(&winter_park_payload()).await;
    res.assert_status(StatusCode::CREATED);

    let created = data(&res.json::<serde_json::Value>());
    assert_eq!(created.created_at, created.updated_at);

    let res = server.get(&format!("/api/sinkholes/{}", created.id)).await;
    res.assert_status_ok();

    let fetched = data(&res.json::<serde_json::Value>());
    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.name, "Winter Park Sinkhole");
    assert_eq!(
        fetched.description.as_deref(),
        Some("Famous sinkhole in Winter Park, Florida.")
    );
    assert_eq!(fetched.latitude, 28.5997);
    assert_eq!(fetched.longitude, -81.3392);
    assert_eq!(fetched.diameter, Some(107.0));
    assert_eq!(fetched.depth, Some(27.0));
    assert_eq!(fetched.risk_level, "medium");
    assert_eq!(fetched.geological_type.as_deref(), Some("Subsidence"));
    assert_eq!(fetched.soil_type.as_deref(), Some("Sandy soil"));
    assert_eq!(fetched.bedrock_type.as_deref(), Some("Limestone"));
    assert_eq!(fetched.water_table_depth, Some(8.0));
    assert_eq!(
        fetched.discovery_date,
        Some(NaiveDate::from_ymd_opt(1981, 5, 8).unwrap())
    );
    assert_eq!(
        fetched.last_inspection,
        Some(NaiveDate::from_ymd_opt(2024, 11, 2).unwrap())
    );
    assert!(!fetched.is_active);
    assert_eq!(fetched.created_at, created.created_at);
}

#[tokio::test]
async fn test_create_applies_defaults() {
    let server = test_server().await;

    let res = server
        .post("/api/sinkholes")
        .json(&json!({
            "name": "Minimal",
            "latitude": 1.0,
            "longitude": 2.0
        }))
        .await;
    res.assert_status(StatusCode::CREATED);

    let created = data(&res.json::<serde_json::Value>());
    assert_eq!(created.risk_level, "low");
    assert!(created.is_active);
    assert_eq!(created.description, None);
    assert_eq!(created.diameter, None);
}

#[tokio::test]
async fn test_create_coerces_string_floats() {
    let server = test_server().await;

    let res = server
        .post("/api/sinkholes")
        .json(&json!({
            "name": "Coerced",
            "latitude": "28.5997",
            "longitude": "-81.3392",
            "depth": "12.5"
        }))
        .await;
    res.assert_status(StatusCode::CREATED);

    let created = data(&res.json::<serde_json::Value>());
    assert_eq!(created.latitude, 28.5997);
    assert_eq!(created.longitude, -81.3392);
    assert_eq!(created.depth, Some(12.5));
}

#[tokio::test]
async fn test_create_missing_required_fields_is_field_keyed() {
    let server = test_server().await;

    let res = server.post("/api/sinkholes").json(&json!({})).await;
    res.assert_status(StatusCode::BAD_REQUEST);

    let body = res.json::<serde_json::Value>();
    assert_eq!(body["success"], false);
    assert!(body["errors"]["name"].is_array());
    assert!(body["errors"]["latitude"].is_array());
    assert!(body["errors"]["longitude"].is_array());

    // Nothing was written
    let res = server.get("/api/sinkholes").await;
    let body = res.json::<serde_json::Value>();
    assert_eq!(body["meta"]["total"], 0);
}

#[tokio::test]
async fn test_create_rejects_unknown_risk_level() {
    let server = test_server().await;

    let res = server
        .post("/api/sinkholes")
        .json(&json!({
            "name": "Bad risk",
            "latitude": 1.0,
            "longitude": 2.0,
            "risk_level": "catastrophic"
        }))
        .await;
    res.assert_status(StatusCode::BAD_REQUEST);

    let body = res.json::<serde_json::Value>();
    assert!(body["errors"]["risk_level"].is_array());

    let res = server.get("/api/sinkholes").await;
    let body = res.json::<serde_json::Value>();
    assert_eq!(body["meta"]["total"], 0);
}

#[tokio::test]
async fn test_unknown_id_returns_not_found() {
    let server = test_server().await;
    let id = Uuid::new_v4();

    let res = server.get(&format!("/api/sinkholes/{}", id)).await;
    res.assert_status(StatusCode::NOT_FOUND);

    let res = server
        .patch(&format!("/api/sinkholes/{}", id))
        .json(&json!({ "name": "Renamed" }))
        .await;
    res.assert_status(StatusCode::NOT_FOUND);

    let res = server
        .put(&format!("/api/sinkholes/{}", id))
        .json(&winter_park_payload())
        .await;
    res.assert_status(StatusCode::NOT_FOUND);

    let res = server.delete(&format!("/api/sinkholes/{}", id)).await;
    res.assert_status(StatusCode::NOT_FOUND);

    let res = server.get("/api/sinkholes").await;
    let body = res.json::<serde_json::Value>();
    assert_eq!(body["meta"]["total"], 0);
}

#[tokio::test]
async fn test_partial_update_touches_only_given_fields() {
    let server = test_server().await;

    let res = server.post("/api/sinkholes").json(&winter_park_payload()).await;
    let created = data(&res.json::<serde_json::Value>());

    let res = server
        .patch(&format!("/api/sinkholes/{}", created.id))
        .json(&json!({ "risk_level": "critical" }))
        .await;
    res.assert_status_ok();

    let updated = data(&res.json::<serde_json::Value>());
    assert_eq!(updated.risk_level, "critical");
    assert_eq!(updated.name, "Winter Park Sinkhole");
    assert_eq!(updated.diameter, Some(107.0));
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at > updated.created_at);
}

#[tokio::test]
async fn test_update_rejects_unknown_risk_level() {
    let server = test_server().await;

    let res = server.post("/api/sinkholes").json(&winter_park_payload()).await;
    let created = data(&res.json::<serde_json::Value>());

    let res = server
        .patch(&format!("/api/sinkholes/{}", created.id))
        .json(&json!({ "risk_level": "none" }))
        .await;
    res.assert_status(StatusCode::BAD_REQUEST);

    // Record is unchanged
    let res = server.get(&format!("/api/sinkholes/{}", created.id)).await;
    let fetched = data(&res.json::<serde_json::Value>());
    assert_eq!(fetched.risk_level, "medium");
    assert_eq!(fetched.updated_at, created.updated_at);
}

#[tokio::test]
async fn test_replace_resets_unspecified_fields() {
    let server = test_server().await;

    let res = server.post("/api/sinkholes").json(&winter_park_payload()).await;
    let created = data(&res.json::<serde_json::Value>());

    let res = server
        .put(&format!("/api/sinkholes/{}", created.id))
        .json(&json!({
            "name": "Winter Park (resurveyed)",
            "latitude": 28.6,
            "longitude": -81.34
        }))
        .await;
    res.assert_status_ok();

    let replaced = data(&res.json::<serde_json::Value>());
    assert_eq!(replaced.id, created.id);
    assert_eq!(replaced.name, "Winter Park (resurveyed)");
    assert_eq!(replaced.description, None);
    assert_eq!(replaced.diameter, None);
    assert_eq!(replaced.risk_level, "low");
    assert!(replaced.is_active);
    assert_eq!(replaced.created_at, created.created_at);
    assert!(replaced.updated_at > created.updated_at);
}

#[tokio::test]
async fn test_delete_is_permanent_and_not_repeatable() {
    let server = test_server().await;

    let res = server.post("/api/sinkholes").json(&winter_park_payload()).await;
    let created = data(&res.json::<serde_json::Value>());

    let res = server.delete(&format!("/api/sinkholes/{}", created.id)).await;
    res.assert_status(StatusCode::NO_CONTENT);

    let res = server.get(&format!("/api/sinkholes/{}", created.id)).await;
    res.assert_status(StatusCode::NOT_FOUND);

    let res = server.delete(&format!("/api/sinkholes/{}", created.id)).await;
    res.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_orders_newest_first() {
    let server = test_server().await;

    for name in ["First", "Second", "Third"] {
        let res = server
            .post("/api/sinkholes")
            .json(&json!({
                "name": name,
                "latitude": 1.0,
                "longitude": 2.0
            }))
            .await;
        res.assert_status(StatusCode::CREATED);
    }

    let res = server.get("/api/sinkholes").await;
    res.assert_status_ok();

    let body = res.json::<serde_json::Value>();
    assert_eq!(body["meta"]["total"], 3);

    let names: Vec<String> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, ["Third", "Second", "First"]);
}
