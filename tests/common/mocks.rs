//! Mock implementations for testing.
//!
//! Provides a scripted LLM client so pipeline and API tests can run
//! without network access or a real Gemini key.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use vega::llm::{IntentDecision, LlmClient};
use vega::types::{ActionKind, AppError, Result};

/// One recorded call to [`MockLlmClient::generate`].
#[derive(Debug, Clone)]
pub struct GenerationCall {
    pub system: String,
    pub prompt: String,
    pub temperature: f32,
}

/// Mock LLM client with scripted classification and generation output.
///
/// The client records every generation call so tests can assert on the
/// exact prompt the pipeline assembled. Clones share the same call log.
#[derive(Clone)]
pub struct MockLlmClient {
    decision: IntentDecision,
    response: String,
    fail_classify: bool,
    fail_generate: bool,
    generation_calls: Arc<Mutex<Vec<GenerationCall>>>,
}

impl MockLlmClient {
    /// Create a mock that classifies every query as ANSWER and returns the
    /// given generation text.
    pub fn new(response: &str) -> Self {
        Self::with_decision(ActionKind::Answer, "Scripted decision.", response)
    }

    /// Create a mock with a fully scripted intent decision.
    pub fn with_decision(kind: ActionKind, reasoning: &str, response: &str) -> Self {
        Self {
            decision: IntentDecision {
                kind,
                reasoning: reasoning.to_string(),
            },
            response: response.to_string(),
            fail_classify: false,
            fail_generate: false,
            generation_calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Create a mock whose classification always errors. Generation still
    /// succeeds with the given text.
    pub fn classify_failing(response: &str) -> Self {
        Self {
            fail_classify: true,
            ..Self::new(response)
        }
    }

    /// Create a mock whose generation always errors.
    pub fn generate_failing() -> Self {
        Self {
            fail_generate: true,
            ..Self::new("")
        }
    }

    /// Every generation call recorded so far, oldest first.
    pub fn generation_calls(&self) -> Vec<GenerationCall> {
        self.generation_calls
            .lock()
            .expect("generation call log poisoned")
            .clone()
    }
}

#[async_trait]
impl LlmClient for MockLlmClient {
    async fn classify_intent(&self, _instruction: &str, _query: &str) -> Result<IntentDecision> {
        if self.fail_classify {
            return Err(AppError::LLM("Mock classification failure".to_string()));
        }
        Ok(self.decision.clone())
    }

    async fn generate(&self, system: &str, prompt: &str, temperature: f32) -> Result<String> {
        self.generation_calls
            .lock()
            .expect("generation call log poisoned")
            .push(GenerationCall {
                system: system.to_string(),
                prompt: prompt.to_string(),
                temperature,
            });
        if self.fail_generate {
            return Err(AppError::LLM("Mock LLM failure".to_string()));
        }
        Ok(self.response.clone())
    }

    fn model_name(&self) -> &str {
        "mock-model"
    }
}
