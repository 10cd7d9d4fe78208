//! Chat query and transcript handlers.

use crate::{
    types::{AppError, ChatMessage, QueryOutcome, QueryRequest, Result},
    AppState,
};
use axum::{extract::State, Json};
use std::time::Instant;
use tracing::info;

/// Submit a query through the pipeline
///
/// Holds the session write lock for the whole turn, so retrieval observes
/// a stable index and document mutations never interleave mid-query.
#[utoipa::path(
    post,
    path = "/api/chat",
    request_body = QueryRequest,
    responses(
        (status = 200, description = "Both appended turns", body = QueryOutcome),
        (status = 400, description = "Empty message")
    ),
    tag = "chat"
)]
pub async fn submit_query(
    State(state): State<AppState>,
    Json(payload): Json<QueryRequest>,
) -> Result<Json<QueryOutcome>> {
    if payload.message.trim().is_empty() {
        return Err(AppError::InvalidInput(
            "Message cannot be empty".to_string(),
        ));
    }

    let started = Instant::now();
    let mut session = state.session.write().await;
    let outcome = session.submit_query(&payload.message).await;

    let action = outcome
        .assistant
        .action
        .as_ref()
        .map(|a| a.kind.as_str())
        .unwrap_or("none");
    info!(
        action,
        sources = outcome.assistant.sources.len(),
        duration_ms = started.elapsed().as_millis() as u64,
        "Query handled"
    );
    Ok(Json(outcome))
}

/// Get the full append-only transcript
#[utoipa::path(
    get,
    path = "/api/chat/transcript",
    responses(
        (status = 200, description = "All turns in order", body = Vec<ChatMessage>)
    ),
    tag = "chat"
)]
pub async fn transcript(State(state): State<AppState>) -> Json<Vec<ChatMessage>> {
    let session = state.session.read().await;
    Json(session.transcript().to_vec())
}
