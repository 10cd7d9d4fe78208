use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

// ============= Document Types =============

/// A titled body of text submitted for retrieval. Owns its chunks; removing
/// a document removes every chunk carrying its id from the index.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Document {
    pub id: String,
    pub title: String,
    pub content: String,
    pub chunks: Vec<Chunk>,
    pub created_at: DateTime<Utc>,
}

/// A paragraph-level passage, the unit of retrieval. `document_id` is a weak
/// back-reference used for lookup and cascade deletion, never ownership.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Chunk {
    pub id: String,
    pub document_id: String,
    pub text: String,
}

/// A chunk paired with its retrieval score. The score is transient per
/// query; it is never written back onto the stored chunk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ScoredChunk {
    #[serde(flatten)]
    pub chunk: Chunk,
    pub score: usize,
}

// ============= Action Types =============

/// Response mode inferred from the user's query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum ActionKind {
    Answer,
    Summarize,
    Categorize,
    Report,
}

impl ActionKind {
    pub const ALL: [ActionKind; 4] = [
        ActionKind::Answer,
        ActionKind::Summarize,
        ActionKind::Categorize,
        ActionKind::Report,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ActionKind::Answer => "ANSWER",
            ActionKind::Summarize => "SUMMARIZE",
            ActionKind::Categorize => "CATEGORIZE",
            ActionKind::Report => "REPORT",
        }
    }
}

impl std::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The classified intent for one query turn: which mode to respond in and
/// the model's justification. `parameters` is opaque and never validated.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Action {
    #[serde(rename = "type")]
    pub kind: ActionKind,
    pub reasoning: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<serde_json::Value>,
}

// ============= Chat Types =============

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    Assistant,
}

/// One turn of the transcript. Turns are append-only and never mutated
/// after creation.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ChatMessage {
    pub id: String,
    pub role: MessageRole,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<Action>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sources: Vec<ScoredChunk>,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            role: MessageRole::User,
            content: content.into(),
            action: None,
            sources: Vec::new(),
            timestamp: Utc::now(),
        }
    }

    pub fn assistant(
        content: impl Into<String>,
        action: Option<Action>,
        sources: Vec<ScoredChunk>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            role: MessageRole::Assistant,
            content: content.into(),
            action,
            sources,
            timestamp: Utc::now(),
        }
    }
}

// ============= API Request/Response Types =============

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AddDocumentRequest {
    pub title: String,
    pub content: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RemoveDocumentResponse {
    pub id: String,
    pub chunks_removed: usize,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct QueryRequest {
    pub message: String,
}

/// The two turns appended by one query: the echoed user turn and the
/// assistant turn carrying the action and ranked sources for audit display.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct QueryOutcome {
    pub user: ChatMessage,
    pub assistant: ChatMessage,
}

// ============= Error Types =============

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("LLM error: {0}")]
    LLM(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::LLM(msg) => (axum::http::StatusCode::INTERNAL_SERVER_ERROR, msg),
            AppError::NotFound(msg) => (axum::http::StatusCode::NOT_FOUND, msg),
            AppError::InvalidInput(msg) => (axum::http::StatusCode::BAD_REQUEST, msg),
            AppError::Internal(msg) => (axum::http::StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = serde_json::json!({
            "error": message
        });

        (status, axum::Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
