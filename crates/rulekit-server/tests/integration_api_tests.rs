//! Integration tests for REST API endpoints
//!
//! Each test builds the real router over a fresh repository and drives it
//! end-to-end with `oneshot` requests.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use rulekit_server::api::create_router;
use rulekit_server::config::{RepositoryType, ServerConfig};
use rulekit_server::service::{init_service, RuleService};
use serde_json::{json, Value};
use std::sync::Arc;
use tempfile::TempDir;
use tower::ServiceExt;

fn memory_app() -> Router {
    create_router(Arc::new(RuleService::in_memory()))
}

fn file_system_app(dir: &TempDir) -> Router {
    let config = ServerConfig {
        repository: RepositoryType::FileSystem {
            path: dir.path().to_path_buf(),
        },
        ..Default::default()
    };
    create_router(Arc::new(init_service(&config).unwrap()))
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn create(app: &Router, id: &str, expression: &str) -> Value {
    let (status, json) = send(
        app,
        "POST",
        "/api/rules",
        Some(json!({ "id": id, "expression": expression })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    json
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = memory_app();
    let (status, json) = send(&app, "GET", "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");
    assert!(json["version"].is_string());
}

#[tokio::test]
async fn test_create_and_list_rules() {
    let app = memory_app();

    let json = create(&app, " adult ", "Age  >  18").await;
    assert_eq!(json["success"], true);
    assert_eq!(json["data"], json!({ "id": "adult", "expression": "age > 18" }));

    create(&app, "country", "country = 'US'").await;

    let (status, json) = send(&app, "GET", "/api/rule", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], true);
    assert_eq!(
        json["data"],
        json!([
            { "id": "adult", "expression": "age > 18" },
            { "id": "country", "expression": "country = 'us'" },
        ])
    );
}

#[tokio::test]
async fn test_create_rule_with_invalid_syntax() {
    let app = memory_app();

    let json = create(&app, "bad", "age >> 18").await;
    assert_eq!(json["success"], false);
    assert!(json["error"]
        .as_str()
        .unwrap()
        .starts_with("Invalid rule syntax"));
    assert!(json.get("data").is_none());

    let (_, json) = send(&app, "GET", "/api/rule", None).await;
    assert_eq!(json["data"], json!([]));
}

#[tokio::test]
async fn test_combine_then_evaluate() {
    let app = memory_app();
    create(&app, "adult", "age > 18").await;
    create(&app, "us", "country = 'US'").await;

    let (_, json) = send(
        &app,
        "POST",
        "/api/rules/combine",
        Some(json!({ "rule_ids": "us, adult" })),
    )
    .await;
    assert_eq!(json["success"], true);
    let combined = json["data"]["combined_expression"].as_str().unwrap().to_string();
    assert_eq!(combined, "age > 18 AND country = 'us'");

    let (_, json) = send(
        &app,
        "POST",
        "/api/rules/evaluate",
        Some(json!({ "expression": combined, "query_data": { "age": 20, "country": "US" } })),
    )
    .await;
    assert_eq!(json, json!({ "success": true, "data": true }));

    let (_, json) = send(
        &app,
        "POST",
        "/api/rules/evaluate",
        Some(json!({ "expression": combined, "query_data": { "age": 15, "country": "US" } })),
    )
    .await;
    assert_eq!(json, json!({ "success": true, "data": false }));
}

#[tokio::test]
async fn test_evaluate_by_rule_ids() {
    let app = memory_app();
    create(&app, "grouped", "(age > 18 OR veteran = 'true') AND country = 'US'").await;

    let (_, json) = send(
        &app,
        "POST",
        "/api/rules/evaluate",
        Some(json!({
            "rule_ids": ["grouped"],
            "query_data": { "age": 16, "veteran": "true", "country": "US" }
        })),
    )
    .await;
    assert_eq!(json["success"], true);
    assert_eq!(json["data"], true);
}

#[tokio::test]
async fn test_combine_unknown_rules() {
    let app = memory_app();

    let (status, json) = send(
        &app,
        "POST",
        "/api/rules/combine",
        Some(json!({ "rule_ids": "nope, missing" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], "No valid rules found");
}

#[tokio::test]
async fn test_evaluate_errors_use_envelope() {
    let app = memory_app();

    // Missing field
    let (status, json) = send(
        &app,
        "POST",
        "/api/rules/evaluate",
        Some(json!({ "expression": "age > 18", "query_data": {} })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], false);
    assert!(json["error"].as_str().unwrap().contains("age"));

    // Nothing to evaluate
    let (_, json) = send(
        &app,
        "POST",
        "/api/rules/evaluate",
        Some(json!({ "query_data": { "age": 20 } })),
    )
    .await;
    assert_eq!(json["success"], false);
    assert!(json["error"].as_str().unwrap().contains("expression"));

    // Unsupported query value
    let (_, json) = send(
        &app,
        "POST",
        "/api/rules/evaluate",
        Some(json!({ "expression": "vip = 'yes'", "query_data": { "vip": true } })),
    )
    .await;
    assert_eq!(json["success"], false);
    assert!(json["error"].as_str().unwrap().contains("vip"));
}

#[tokio::test]
async fn test_malformed_json_body() {
    let app = memory_app();

    let request = Request::builder()
        .method("POST")
        .uri("/api/rules")
        .header("content-type", "application/json")
        .body(Body::from("{ not json"))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(json["success"], false);
    assert!(json["error"].as_str().unwrap().contains("JSON syntax error"));

    // Missing content type
    let request = Request::builder()
        .method("POST")
        .uri("/api/rules/combine")
        .body(Body::from(r#"{"rule_ids":"a"}"#))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(json["success"], false);
    assert!(json["error"].as_str().unwrap().contains("Content-Type"));
}

#[tokio::test]
async fn test_clean_removes_rules() {
    let app = memory_app();
    create(&app, "a", "x > 1").await;
    create(&app, "b", "y > 1").await;

    let (status, json) = send(&app, "DELETE", "/api/rules/clean", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], true);
    assert!(json["data"].as_str().unwrap().contains("cleaned"));

    let (_, json) = send(&app, "GET", "/api/rule", None).await;
    assert_eq!(json["data"], json!([]));
}

#[tokio::test]
async fn test_file_system_backend_persists_rules_and_evaluations() {
    let dir = TempDir::new().unwrap();

    {
        let app = file_system_app(&dir);
        create(&app, "adult", "age > 18").await;

        let (_, json) = send(
            &app,
            "POST",
            "/api/rules/evaluate",
            Some(json!({ "rule_ids": ["adult"], "query_data": { "age": 30 } })),
        )
        .await;
        assert_eq!(json["data"], true);
    }

    // A new router over the same directory sees the stored rule
    let app = file_system_app(&dir);
    let (_, json) = send(&app, "GET", "/api/rule", None).await;
    assert_eq!(json["data"], json!([{ "id": "adult", "expression": "age > 18" }]));

    let log = std::fs::read_to_string(dir.path().join("evaluations.jsonl")).unwrap();
    let lines: Vec<Value> = log
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0]["result"], true);
    assert_eq!(lines[0]["expression"], "age > 18");
    assert_eq!(lines[0]["data"]["age"], 30);
}
