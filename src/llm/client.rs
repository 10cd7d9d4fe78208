//! LLM client abstraction.
//!
//! All model providers implement [`LlmClient`], allowing the pipeline to
//! swap providers (or test doubles) without changing application code.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::types::{ActionKind, Result};

/// Generic LLM client trait for provider abstraction.
///
/// Both methods must fail cleanly (a distinguishable [`crate::types::AppError`])
/// on transport or parse problems; retry policy is the caller's concern and
/// no implementation retries internally.
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Classify a query into a response mode, constrained to a structured
    /// two-field result.
    async fn classify_intent(&self, instruction: &str, query: &str) -> Result<IntentDecision>;

    /// Generate free text for `prompt` under `system`, at the given
    /// sampling temperature.
    async fn generate(&self, system: &str, prompt: &str, temperature: f32) -> Result<String>;

    /// Get the model name/identifier.
    fn model_name(&self) -> &str;
}

/// The structured result of a classification call: which mode to respond
/// in, and the model's justification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntentDecision {
    #[serde(rename = "type")]
    pub kind: ActionKind,
    pub reasoning: String,
}
