//! HTTP surface tests over the full router with a scripted LLM client.

mod common;

use std::sync::Arc;

use axum_test::TestServer;
use common::mocks::MockLlmClient;
use serde_json::json;
use vega::chat::ChatSession;
use vega::{AppState, VegaConfig};

// ============= Test Helpers =============

/// Build a server over the real router, backed by the given mock client.
fn create_test_server(client: MockLlmClient) -> TestServer {
    let config = VegaConfig::default();
    let session = ChatSession::new(
        Arc::new(client),
        config.retrieval.top_k,
        config.llm.temperature,
    );
    let app = vega::api::create_router().with_state(AppState::new(config, session));
    TestServer::new(app).expect("Failed to create test server")
}

fn default_test_server() -> TestServer {
    create_test_server(MockLlmClient::new("Mock answer."))
}

// ============= Health and Docs Tests =============

#[tokio::test]
async fn test_health_check() {
    let server = default_test_server();

    let response = server.get("/health").await;
    response.assert_status_ok();
    response.assert_text("OK");
}

#[tokio::test]
async fn test_openapi_spec_is_served() {
    let server = default_test_server();

    let response = server.get("/api-docs/openapi.json").await;
    response.assert_status_ok();

    let body: serde_json::Value = response.json();
    assert!(body["openapi"].is_string());
    assert!(body["paths"]["/api/documents"].is_object());
    assert!(body["paths"]["/api/chat"].is_object());
}

// ============= Document Tests =============

#[tokio::test]
async fn test_list_documents_starts_empty() {
    let server = default_test_server();

    let response = server.get("/api/documents").await;
    response.assert_status_ok();

    let body: Vec<serde_json::Value> = response.json();
    assert!(body.is_empty());
}

#[tokio::test]
async fn test_add_document_returns_chunked_document() {
    let server = default_test_server();

    let response = server
        .post("/api/documents")
        .json(&json!({
            "title": "Budget",
            "content": "Revenue grew 10%.\n\nCosts fell 5%."
        }))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert!(body["id"].is_string());
    assert_eq!(body["title"], "Budget");

    let chunks = body["chunks"].as_array().unwrap();
    assert_eq!(chunks.len(), 2);
    assert_eq!(chunks[0]["text"], "Revenue grew 10%.");
    assert!(chunks[0]["id"].as_str().unwrap().ends_with("-chunk-0"));
    assert_eq!(chunks[0]["document_id"], body["id"]);

    let response = server.get("/api/documents").await;
    let listed: Vec<serde_json::Value> = response.json();
    assert_eq!(listed.len(), 1);
}

#[tokio::test]
async fn test_add_document_rejects_blank_title() {
    let server = default_test_server();

    let response = server
        .post("/api/documents")
        .json(&json!({ "title": "   ", "content": "Some content." }))
        .await;

    response.assert_status_bad_request();
    let body: serde_json::Value = response.json();
    assert!(body["error"].is_string());

    // Nothing was ingested.
    let listed: Vec<serde_json::Value> = server.get("/api/documents").await.json();
    assert!(listed.is_empty());
}

#[tokio::test]
async fn test_add_document_rejects_blank_content() {
    let server = default_test_server();

    let response = server
        .post("/api/documents")
        .json(&json!({ "title": "Budget", "content": "\n\n  \n" }))
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_add_document_missing_fields() {
    let server = default_test_server();

    // Axum returns 422 for deserialization errors (missing fields).
    let response = server
        .post("/api/documents")
        .json(&json!({ "title": "Budget" }))
        .await;

    response.assert_status_unprocessable_entity();
}

#[tokio::test]
async fn test_add_document_ignores_extra_fields() {
    let server = default_test_server();

    let response = server
        .post("/api/documents")
        .json(&json!({
            "title": "Budget",
            "content": "Revenue grew 10%.",
            "extra_field": "should be ignored"
        }))
        .await;

    response.assert_status_ok();
}

#[tokio::test]
async fn test_remove_document_reports_chunk_count() {
    let server = default_test_server();

    let created: serde_json::Value = server
        .post("/api/documents")
        .json(&json!({
            "title": "Budget",
            "content": "Revenue grew 10%.\n\nCosts fell 5%."
        }))
        .await
        .json();
    let id = created["id"].as_str().unwrap();

    let response = server.delete(&format!("/api/documents/{}", id)).await;
    response.assert_status_ok();

    let body: serde_json::Value = response.json();
    assert_eq!(body["id"], created["id"]);
    assert_eq!(body["chunks_removed"], 2);

    let listed: Vec<serde_json::Value> = server.get("/api/documents").await.json();
    assert!(listed.is_empty());
}

#[tokio::test]
async fn test_remove_unknown_document_is_not_found() {
    let server = default_test_server();

    let response = server.delete("/api/documents/does-not-exist").await;
    response.assert_status_not_found();

    let body: serde_json::Value = response.json();
    assert!(body["error"].is_string());
}

// ============= Chat Tests =============

#[tokio::test]
async fn test_chat_round_trip() {
    let server = default_test_server();

    server
        .post("/api/documents")
        .json(&json!({
            "title": "Budget",
            "content": "Revenue grew 10%.\n\nCosts fell 5%."
        }))
        .await
        .assert_status_ok();

    let response = server
        .post("/api/chat")
        .json(&json!({ "message": "What happened to revenue?" }))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();

    assert_eq!(body["user"]["role"], "user");
    assert_eq!(body["user"]["content"], "What happened to revenue?");

    let assistant = &body["assistant"];
    assert_eq!(assistant["role"], "assistant");
    assert_eq!(assistant["content"], "Mock answer.");
    assert_eq!(assistant["action"]["type"], "ANSWER");

    let sources = assistant["sources"].as_array().unwrap();
    assert_eq!(sources.len(), 1);
    assert_eq!(sources[0]["text"], "Revenue grew 10%.");
    assert_eq!(sources[0]["score"], 1);
}

#[tokio::test]
async fn test_chat_rejects_blank_message() {
    let server = default_test_server();

    let response = server
        .post("/api/chat")
        .json(&json!({ "message": "   " }))
        .await;

    response.assert_status_bad_request();

    // The rejected message never reached the transcript.
    let transcript: Vec<serde_json::Value> = server.get("/api/chat/transcript").await.json();
    assert!(transcript.is_empty());
}

#[tokio::test]
async fn test_transcript_accumulates_turn_pairs() {
    let server = default_test_server();

    for message in ["First question?", "Second question?"] {
        server
            .post("/api/chat")
            .json(&json!({ "message": message }))
            .await
            .assert_status_ok();
    }

    let transcript: Vec<serde_json::Value> = server.get("/api/chat/transcript").await.json();
    assert_eq!(transcript.len(), 4);
    assert_eq!(transcript[0]["role"], "user");
    assert_eq!(transcript[1]["role"], "assistant");
    assert_eq!(transcript[2]["role"], "user");
    assert_eq!(transcript[3]["role"], "assistant");
    assert_eq!(transcript[0]["content"], "First question?");
    assert_eq!(transcript[2]["content"], "Second question?");
}

#[tokio::test]
async fn test_chat_generation_failure_still_returns_turns() {
    let server = create_test_server(MockLlmClient::generate_failing());

    let response = server
        .post("/api/chat")
        .json(&json!({ "message": "What happened to revenue?" }))
        .await;

    // The failure is embedded in the assistant turn, not an HTTP error.
    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(
        body["assistant"]["content"],
        "Sorry, something went wrong while generating a response. Please try again."
    );
    assert!(body["assistant"]["action"].is_object());
    assert!(body["assistant"]["sources"].is_null());

    let transcript: Vec<serde_json::Value> = server.get("/api/chat/transcript").await.json();
    assert_eq!(transcript.len(), 2);
}
