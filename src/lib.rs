//! # V.E.G.A - Versatile Engine for Grounded Answers
//!
//! A retrieval-augmented chat server: documents are chunked into
//! paragraph passages, queries are routed to a response mode by an LLM
//! intent classifier, the top-scoring passages are retrieved lexically,
//! and the final answer is generated with its sources attached.
//!
//! ## Overview
//!
//! V.E.G.A can be used in two ways:
//!
//! 1. **As a standalone server** - Run the `vega-server` binary
//! 2. **As a library** - Drive [`chat::ChatSession`] directly from your
//!    own Rust project
//!
//! ## Quick Start (Library Usage)
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use vega::chat::ChatSession;
//! use vega::llm::GeminiClient;
//! use vega::rag::DEFAULT_TOP_K;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Arc::new(GeminiClient::new(
//!         vega::llm::gemini::DEFAULT_BASE_URL,
//!         std::env::var("GEMINI_API_KEY")?,
//!         "gemini-2.0-flash",
//!         120,
//!     )?);
//!
//!     let mut session = ChatSession::new(client, DEFAULT_TOP_K, 0.7);
//!     session.add_document("Budget", "Revenue grew 10%.\n\nCosts fell 5%.")?;
//!
//!     let outcome = session.submit_query("What happened to revenue?").await;
//!     println!("{}", outcome.assistant.content);
//!     Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! - [`rag`] - Chunking, the chunk index, and lexical retrieval
//! - [`chat`] - Intent classification, orchestration, and session state
//! - [`llm`] - The injected LLM capability and its Gemini implementation
//! - [`api`] - REST handlers and routes
//! - [`types`] - Common types and error handling
//! - [`utils`] - TOML configuration
//!
//! ## Design
//!
//! The LLM backend is injected behind [`llm::LlmClient`], so the whole
//! pipeline runs deterministically under test with a scripted client.
//! Classification failures silently degrade to a default ANSWER action;
//! generation failures surface as a visible assistant-turn notice. State
//! lives in memory only.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

/// HTTP API handlers and routes.
pub mod api;
/// Intent classification, per-turn orchestration, and session state.
pub mod chat;
/// LLM client trait and provider implementations.
pub mod llm;
/// Chunking, indexing, and lexical retrieval.
pub mod rag;
/// Common types and error handling.
pub mod types;
/// Configuration loading.
pub mod utils;

// Re-export commonly used types
pub use chat::{ChatSession, IntentClassifier, Orchestrator};
pub use llm::{GeminiClient, IntentDecision, LlmClient};
pub use rag::{chunk, retrieve, ChunkIndex, DEFAULT_TOP_K};
pub use types::{AppError, Result};
pub use utils::{ConfigError, VegaConfig};

use std::sync::Arc;
use tokio::sync::RwLock;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Loaded configuration
    pub config: Arc<VegaConfig>,
    /// The chat session. The write lock serializes pipeline runs against
    /// document mutations, so retrieval always sees a stable index.
    pub session: Arc<RwLock<ChatSession>>,
}

impl AppState {
    /// Wrap a configuration and session for handler use.
    pub fn new(config: VegaConfig, session: ChatSession) -> Self {
        Self {
            config: Arc::new(config),
            session: Arc::new(RwLock::new(session)),
        }
    }
}
