// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

//! End-to-end checks of the status service over real HTTP.

use drill_agent::app::{create_router, AppState, VERSION};
use drill_agent::services::config::ServiceConfig;
use std::net::SocketAddr;
use std::sync::Arc;

/// Serve the app on an ephemeral localhost port and return its address.
async fn spawn_test_service() -> SocketAddr {
    let config = ServiceConfig {
        port: 0,
        debug: false,
        environment: "test".to_string(),
        build_number: "ci-7".to_string(),
        git_commit: "deadbeef".to_string(),
        secret_key: "test-secret".to_string(),
    };
    let state = AppState {
        config: Arc::new(config),
    };
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

async fn get_json(addr: SocketAddr, path: &str) -> (reqwest::StatusCode, serde_json::Value) {
    let response = reqwest::get(format!("http://{}{}", addr, path))
        .await
        .unwrap();
    let status = response.status();
    let body = response.json::<serde_json::Value>().await.unwrap();
    (status, body)
}

#[tokio::test]
async fn test_info_has_the_expected_keys() {
    let addr = spawn_test_service().await;
    let (status, body) = get_json(addr, "/api/info").await;

    assert_eq!(status, reqwest::StatusCode::OK);
    for key in [
        "materia", "profesor", "alumno", "fecha", "version", "entorno", "status",
    ] {
        assert!(body.get(key).is_some(), "missing key: {}", key);
    }
    assert_eq!(body["status"], "running");
    assert_eq!(body["entorno"], "test");
}

#[tokio::test]
async fn test_health_reports_healthy_with_valid_timestamp() {
    let addr = spawn_test_service().await;
    let (status, body) = get_json(addr, "/api/health").await;

    assert_eq!(status, reqwest::StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["uptime"], "running");

    let timestamp = body["timestamp"].as_str().unwrap();
    assert!(chrono::DateTime::parse_from_rfc3339(timestamp).is_ok());
}

#[tokio::test]
async fn test_version_fields_are_non_empty() {
    let addr = spawn_test_service().await;
    let (status, body) = get_json(addr, "/api/version").await;

    assert_eq!(status, reqwest::StatusCode::OK);
    assert_eq!(body["version"], VERSION);
    assert_eq!(body["build"], "ci-7");
    assert_eq!(body["commit"], "deadbeef");
}

#[tokio::test]
async fn test_nonexistent_endpoint_returns_404() {
    let addr = spawn_test_service().await;
    let response = reqwest::get(format!("http://{}/api/nonexistent", addr))
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_index_page_is_html() {
    let addr = spawn_test_service().await;
    let response = reqwest::get(format!("http://{}/", addr)).await.unwrap();

    assert_eq!(response.status(), reqwest::StatusCode::OK);
    let content_type = response
        .headers()
        .get("content-type")
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(content_type.starts_with("text/html"));

    let page = response.text().await.unwrap();
    assert!(page.contains("DevOps Automation Tools"));
}
