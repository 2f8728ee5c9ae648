//! Health and Metrics API Tests

use axum::http::StatusCode;

use cafe_finder::domain::Catalog;

use crate::common::TestApp;

#[tokio::test]
async fn test_health_check_returns_ok() {
    let response = TestApp::new().get("/health").await;

    assert_eq!(response.status, StatusCode::OK);

    let json: serde_json::Value = serde_json::from_str(&response.body).unwrap();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_liveness_probe() {
    let response = TestApp::new().get("/health/live").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, r#"{"status":"alive"}"#);
}

#[tokio::test]
async fn test_readiness_probe() {
    let response = TestApp::new().get("/health/ready").await;

    assert_eq!(response.status, StatusCode::OK);

    let json: serde_json::Value = serde_json::from_str(&response.body).unwrap();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["cities"], 2);
}

#[tokio::test]
async fn test_readiness_with_empty_catalog() {
    let response = TestApp::with_catalog(Catalog::default())
        .get("/health/ready")
        .await;

    assert_eq!(response.status, StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn test_metrics_count_lookups() {
    let app = TestApp::new();
    app.get("/cafe?city=moscow").await;
    app.get("/cafe?city=omsk").await;

    let response = app.get("/metrics").await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("cafe_finder_cafe_requests_total"));
    assert!(response.body.contains("outcome=\"unknown_city\""));
}

#[tokio::test]
async fn test_unknown_route() {
    let response = TestApp::default().get("/cafes").await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
