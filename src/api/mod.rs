//! HTTP API Handlers and Routes
//!
//! This module provides the REST API layer for V.E.G.A, built on the Axum
//! web framework.
//!
//! # Module Structure
//!
//! - [`api::handlers`](crate::api::handlers) - Request handlers for each endpoint
//! - [`api::routes`](crate::api::routes) - Route definitions and router configuration
//!
//! # API Endpoints
//!
//! ## Documents (`/api/documents`)
//! - `GET /api/documents` - List currently held documents
//! - `POST /api/documents` - Ingest a document (title + content)
//! - `DELETE /api/documents/{id}` - Remove a document and its chunks
//!
//! ## Chat (`/api/chat`)
//! - `POST /api/chat` - Submit a query, receive both appended turns
//! - `GET /api/chat/transcript` - Full append-only transcript
//!
//! ## System
//! - `GET /health` - Health check endpoint
//! - `GET /api-docs/openapi.json` - OpenAPI document
//!
//! There is no authentication: the server holds a single local session.

use utoipa::OpenApi;

/// Request and response handlers for all API endpoints.
pub mod handlers;
/// Router configuration and route definitions.
pub mod routes;

pub use routes::create_router;

/// Aggregated OpenAPI description of the REST surface.
#[derive(OpenApi)]
#[openapi(
    paths(
        routes::health,
        handlers::documents::list_documents,
        handlers::documents::add_document,
        handlers::documents::remove_document,
        handlers::chat::submit_query,
        handlers::chat::transcript,
    ),
    components(schemas(
        crate::types::Document,
        crate::types::Chunk,
        crate::types::ScoredChunk,
        crate::types::ActionKind,
        crate::types::Action,
        crate::types::MessageRole,
        crate::types::ChatMessage,
        crate::types::AddDocumentRequest,
        crate::types::RemoveDocumentResponse,
        crate::types::QueryRequest,
        crate::types::QueryOutcome,
    )),
    tags(
        (name = "system", description = "Health and diagnostics"),
        (name = "documents", description = "Document ingestion and lifecycle"),
        (name = "chat", description = "Query pipeline and transcript")
    )
)]
pub struct ApiDoc;
