//! Intent classification with a degrade-gracefully fallback.

use std::sync::Arc;

use crate::llm::LlmClient;
use crate::types::{Action, ActionKind};

/// Reasoning attached when classification degrades to the default action.
pub const FALLBACK_REASONING: &str = "Defaulting to basic answer.";

/// Fixed instruction describing the four modes and their trigger phrasing.
const CLASSIFIER_INSTRUCTION: &str = r#"You are an intent classifier for a document question-answering assistant.
Decide which response mode fits the user's query best:

- ANSWER: the default. Direct questions or requests wanting a concise, factual reply.
- SUMMARIZE: the user explicitly asks for a summary or a brief version ("summarize", "summary", "briefly").
- CATEGORIZE: the user wants items grouped or organized by theme ("group", "theme", "categorize").
- REPORT: the user asks for a detailed analysis, research report, or deep dive.

Reply with the chosen mode and a short justification."#;

/// Classifies queries into response modes via the injected LLM client.
///
/// Classification failures never block the pipeline: any transport or
/// parse problem is logged and downgraded to a default ANSWER action.
pub struct IntentClassifier {
    llm: Arc<dyn LlmClient>,
}

impl IntentClassifier {
    /// Creates a new classifier backed by the given LLM client.
    pub fn new(llm: Arc<dyn LlmClient>) -> Self {
        Self { llm }
    }

    /// Classify `query` into an [`Action`]. Infallible by policy.
    pub async fn classify(&self, query: &str) -> Action {
        match self
            .llm
            .classify_intent(CLASSIFIER_INSTRUCTION, query)
            .await
        {
            Ok(decision) => Action {
                kind: decision.kind,
                reasoning: decision.reasoning,
                parameters: None,
            },
            Err(e) => {
                tracing::debug!(
                    "Intent classification failed ({}), defaulting to ANSWER",
                    e
                );
                Action {
                    kind: ActionKind::Answer,
                    reasoning: FALLBACK_REASONING.to_string(),
                    parameters: None,
                }
            }
        }
    }
}
