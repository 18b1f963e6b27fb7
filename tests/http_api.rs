//! End-to-end tests against a live router bound to an ephemeral port.

use flowdoc::flowchart::{self, samples};
use flowdoc::routes;
use flowdoc::state::AppState;
use reqwest::StatusCode;
use serde_json::{Value, json};

const BODY_LIMIT: usize = 4096;

async fn spawn_server() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = routes::app(AppState::default(), BODY_LIMIT);
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn healthz_is_ok() {
    let base = spawn_server().await;
    let response = reqwest::get(format!("{base}/healthz")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn generate_round_trip() {
    let base = spawn_server().await;
    let response = reqwest::Client::new()
        .post(format!("{base}/api/generate-flowchart"))
        .json(&json!({ "documentation": samples::BASIC }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["mermaid_code"], json!(flowchart::generate(samples::BASIC)));
}

#[tokio::test]
async fn generate_rejects_missing_documentation() {
    let base = spawn_server().await;
    let response = reqwest::Client::new()
        .post(format!("{base}/api/generate-flowchart"))
        .json(&json!({ "doc": "STEP: A" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], json!("Documentation text is required"));
}

#[tokio::test]
async fn generate_rejects_malformed_json() {
    let base = spawn_server().await;
    let response = reqwest::Client::new()
        .post(format!("{base}/api/generate-flowchart"))
        .header("content-type", "application/json")
        .body("{ not json")
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn generate_rejects_oversized_body() {
    let base = spawn_server().await;
    let documentation = format!("STEP: {}", "x".repeat(BODY_LIMIT));
    let response = reqwest::Client::new()
        .post(format!("{base}/api/generate-flowchart"))
        .json(&json!({ "documentation": documentation }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn samples_endpoint_lists_documents() {
    let base = spawn_server().await;
    let body: Value = reqwest::get(format!("{base}/api/flowchart/samples"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let listed = body.as_array().unwrap();
    assert_eq!(listed.len(), samples::SAMPLES.len());
    assert_eq!(listed[0]["name"], json!("basic"));
    assert_eq!(listed[0]["documentation"], json!(samples::BASIC));
}
