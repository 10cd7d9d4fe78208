//! Document ingestion and lifecycle handlers.

use crate::{
    types::{AddDocumentRequest, AppError, Document, RemoveDocumentResponse, Result},
    AppState,
};
use axum::{
    extract::{Path, State},
    Json,
};
use tracing::info;

/// List all currently held documents
#[utoipa::path(
    get,
    path = "/api/documents",
    responses(
        (status = 200, description = "Documents listed", body = Vec<Document>)
    ),
    tag = "documents"
)]
pub async fn list_documents(State(state): State<AppState>) -> Json<Vec<Document>> {
    let session = state.session.read().await;
    Json(session.documents().to_vec())
}

/// Ingest a document: chunk it and add its chunks to the index
#[utoipa::path(
    post,
    path = "/api/documents",
    request_body = AddDocumentRequest,
    responses(
        (status = 200, description = "Document ingested", body = Document),
        (status = 400, description = "Empty title or content")
    ),
    tag = "documents"
)]
pub async fn add_document(
    State(state): State<AppState>,
    Json(payload): Json<AddDocumentRequest>,
) -> Result<Json<Document>> {
    let mut session = state.session.write().await;
    let document = session.add_document(&payload.title, &payload.content)?;

    info!(
        document_id = %document.id,
        title = %document.title,
        chunks = document.chunks.len(),
        "Document added via API"
    );
    Ok(Json(document))
}

/// Remove a document and every chunk it owns
#[utoipa::path(
    delete,
    path = "/api/documents/{id}",
    params(
        ("id" = String, Path, description = "Document id")
    ),
    responses(
        (status = 200, description = "Document removed", body = RemoveDocumentResponse),
        (status = 404, description = "Unknown document id")
    ),
    tag = "documents"
)]
pub async fn remove_document(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<RemoveDocumentResponse>> {
    let mut session = state.session.write().await;
    let document = session
        .remove_document(&id)
        .ok_or_else(|| AppError::NotFound(format!("No document with id {}", id)))?;

    Ok(Json(RemoveDocumentResponse {
        id: document.id,
        chunks_removed: document.chunks.len(),
    }))
}
