//! Google Gemini API client.
//!
//! Talks to the native Gemini API rather than an OpenAI-compatible shim.
//! Key differences worth knowing:
//! - Auth via `?key=API_KEY` query parameter (not header-based)
//! - System instruction is a top-level `system_instruction` field
//! - Structured output is requested through `generationConfig` with
//!   `responseMimeType` and a `responseSchema`

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};
use tracing::debug;

use crate::llm::client::{IntentDecision, LlmClient};
use crate::types::{ActionKind, AppError, Result};

/// The default Google Gemini API base URL.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Returned by [`LlmClient::generate`] when a successful response carries
/// no text parts.
pub const EMPTY_RESPONSE_FALLBACK: &str = "Sorry, I could not produce a response.";

const CONNECT_TIMEOUT_SECS: u64 = 10;

/// Google Gemini client implementing [`LlmClient`] over the
/// `generateContent` endpoint.
pub struct GeminiClient {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl GeminiClient {
    /// Create a client. `base_url` is overridable so tests can point at a
    /// local mock server; production callers pass [`DEFAULT_BASE_URL`].
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
        timeout_secs: u64,
    ) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            api_key: api_key.into(),
            model: model.into(),
        })
    }

    fn endpoint_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        )
    }

    /// Schema constraining classification output to exactly the two fields
    /// the pipeline consumes. Gemini's schema dialect uses uppercase type
    /// names.
    fn classification_schema() -> Value {
        json!({
            "type": "OBJECT",
            "properties": {
                "type": {
                    "type": "STRING",
                    "enum": ActionKind::ALL.iter().map(|kind| kind.as_str()).collect::<Vec<_>>(),
                },
                "reasoning": {
                    "type": "STRING"
                }
            },
            "required": ["type", "reasoning"]
        })
    }

    /// POST `body` to the generateContent endpoint and return the parsed
    /// response JSON. No retries; every failure maps to [`AppError::LLM`].
    async fn request(&self, body: &Value) -> Result<Value> {
        // The URL carries the API key, so log the model only.
        debug!(model = %self.model, "Sending Gemini request");

        let response = self
            .client
            .post(self.endpoint_url())
            .json(body)
            .send()
            .await
            .map_err(|e| AppError::LLM(format!("Request to Gemini API failed: {}", e)))?;

        let status = response.status();
        let body_text = response
            .text()
            .await
            .map_err(|e| AppError::LLM(format!("Failed to read Gemini response body: {}", e)))?;

        if !status.is_success() {
            return Err(AppError::LLM(format!(
                "HTTP {} from Gemini API: {}",
                status, body_text
            )));
        }

        serde_json::from_str(&body_text)
            .map_err(|e| AppError::LLM(format!("Invalid JSON in Gemini response: {}", e)))
    }

    /// Concatenated text parts of the first candidate, if any.
    fn extract_text(body: &Value) -> Option<String> {
        let parts = body["candidates"].get(0)?["content"]["parts"].as_array()?;
        let text: String = parts
            .iter()
            .filter_map(|part| part["text"].as_str())
            .collect();

        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

#[async_trait]
impl LlmClient for GeminiClient {
    async fn classify_intent(&self, instruction: &str, query: &str) -> Result<IntentDecision> {
        let body = json!({
            "contents": [{"role": "user", "parts": [{"text": query}]}],
            "system_instruction": {"parts": [{"text": instruction}]},
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": Self::classification_schema(),
            },
        });

        let response = self.request(&body).await?;
        let text = Self::extract_text(&response)
            .ok_or_else(|| AppError::LLM("Gemini classification returned no text".to_string()))?;

        serde_json::from_str(&text)
            .map_err(|e| AppError::LLM(format!("Malformed classification payload: {}", e)))
    }

    async fn generate(&self, system: &str, prompt: &str, temperature: f32) -> Result<String> {
        let body = json!({
            "contents": [{"role": "user", "parts": [{"text": prompt}]}],
            "system_instruction": {"parts": [{"text": system}]},
            "generationConfig": {
                "temperature": temperature,
            },
        });

        let response = self.request(&body).await?;
        Ok(Self::extract_text(&response).unwrap_or_else(|| EMPTY_RESPONSE_FALLBACK.to_string()))
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_url_carries_model_and_key() {
        let client = GeminiClient::new("http://localhost:9999", "test-key", "gemini-2.0-flash", 5)
            .unwrap();

        assert_eq!(
            client.endpoint_url(),
            "http://localhost:9999/models/gemini-2.0-flash:generateContent?key=test-key"
        );
    }

    #[test]
    fn test_classification_schema_pins_both_fields() {
        let schema = GeminiClient::classification_schema();

        assert_eq!(schema["type"], "OBJECT");
        assert_eq!(schema["required"], json!(["type", "reasoning"]));
        assert_eq!(
            schema["properties"]["type"]["enum"],
            json!(["ANSWER", "SUMMARIZE", "CATEGORIZE", "REPORT"])
        );
        assert_eq!(schema["properties"]["reasoning"]["type"], "STRING");
    }

    #[test]
    fn test_extract_text_joins_parts() {
        let body = json!({
            "candidates": [{
                "content": {
                    "parts": [{"text": "Hello "}, {"text": "world"}]
                }
            }]
        });

        assert_eq!(GeminiClient::extract_text(&body).as_deref(), Some("Hello world"));
    }

    #[test]
    fn test_extract_text_handles_missing_candidates() {
        assert_eq!(GeminiClient::extract_text(&json!({})), None);
        assert_eq!(
            GeminiClient::extract_text(&json!({"candidates": []})),
            None
        );
    }

    #[test]
    fn test_extract_text_treats_empty_parts_as_absent() {
        let body = json!({
            "candidates": [{"content": {"parts": []}}]
        });
        assert_eq!(GeminiClient::extract_text(&body), None);
    }
}
