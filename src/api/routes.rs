//! Router configuration and route definitions.

use crate::AppState;
use axum::{
    routing::{delete, get, post},
    Json, Router,
};
use utoipa::OpenApi;

/// Liveness probe
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Server is up", body = String)
    ),
    tag = "system"
)]
pub async fn health() -> &'static str {
    "OK"
}

/// Machine-readable description of the REST surface
async fn openapi_spec() -> Json<utoipa::openapi::OpenApi> {
    Json(crate::api::ApiDoc::openapi())
}

/// Build the application router. State is attached by the caller.
pub fn create_router() -> Router<AppState> {
    let api_routes = Router::new()
        .route(
            "/documents",
            get(crate::api::handlers::documents::list_documents)
                .post(crate::api::handlers::documents::add_document),
        )
        .route(
            "/documents/{id}",
            delete(crate::api::handlers::documents::remove_document),
        )
        .route("/chat", post(crate::api::handlers::chat::submit_query))
        .route(
            "/chat/transcript",
            get(crate::api::handlers::chat::transcript),
        );

    Router::new()
        .route("/health", get(health))
        .route("/api-docs/openapi.json", get(openapi_spec))
        .nest("/api", api_routes)
}
