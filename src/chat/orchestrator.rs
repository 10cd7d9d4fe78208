//! Per-turn sequencing: classify, retrieve, build context, generate.

use std::sync::Arc;

use tracing::{error, info};

use crate::chat::classifier::IntentClassifier;
use crate::llm::LlmClient;
use crate::rag::{retrieve, ChunkIndex};
use crate::types::{Action, ActionKind, ChatMessage, Document, ScoredChunk};

/// Assistant-turn content when generation fails. Generation failures are
/// surfaced to the user, unlike classification failures which degrade
/// silently.
pub const GENERATION_ERROR_NOTICE: &str =
    "Sorry, something went wrong while generating a response. Please try again.";

/// Context block used when retrieval finds nothing.
pub const NO_CONTEXT_PLACEHOLDER: &str = "No relevant documents were found for this query.";

/// Sequences one query turn: classification, retrieval, context assembly
/// and generation, returning a finished assistant turn.
pub struct Orchestrator {
    classifier: IntentClassifier,
    llm: Arc<dyn LlmClient>,
    top_k: usize,
    temperature: f32,
}

impl Orchestrator {
    /// Creates an orchestrator over the given LLM client.
    pub fn new(llm: Arc<dyn LlmClient>, top_k: usize, temperature: f32) -> Self {
        Self {
            classifier: IntentClassifier::new(llm.clone()),
            llm,
            top_k,
            temperature,
        }
    }

    /// Run the pipeline for `query` against the current documents and
    /// index. Never raises: a failed generation call yields an assistant
    /// turn carrying [`GENERATION_ERROR_NOTICE`]. No retries.
    pub async fn handle(
        &self,
        query: &str,
        documents: &[Document],
        index: &ChunkIndex,
    ) -> ChatMessage {
        let action = self.classifier.classify(query).await;
        let sources = retrieve(query, index, self.top_k);
        let context = build_context(&sources, documents);

        info!(
            action = %action.kind,
            sources = sources.len(),
            "Dispatching generation request"
        );

        let system = mode_instruction(action.kind);
        let prompt = build_prompt(&action, &context, query);

        match self.llm.generate(system, &prompt, self.temperature).await {
            Ok(text) => ChatMessage::assistant(text, Some(action), sources),
            Err(e) => {
                error!("Generation failed: {}", e);
                ChatMessage::assistant(GENERATION_ERROR_NOTICE, Some(action), Vec::new())
            }
        }
    }
}

/// One fixed instruction paragraph per mode, describing the expected shape
/// of the answer.
fn mode_instruction(kind: ActionKind) -> &'static str {
    match kind {
        ActionKind::Answer => {
            "You are a helpful assistant. Answer the user's question concisely and \
             factually, using only the provided context. If the context does not \
             contain the answer, say so plainly."
        }
        ActionKind::Summarize => {
            "You are a summarization assistant. Condense the provided context into \
             the key points relevant to the user's request, as short bullet points."
        }
        ActionKind::Categorize => {
            "You are an organization assistant. Group the information in the \
             provided context into clearly named themes and list the supporting \
             points under each theme."
        }
        ActionKind::Report => {
            "You are a research assistant. Produce a structured report with four \
             sections: Introduction, Key Findings, Analysis, and Conclusion. Ground \
             every claim in the provided context."
        }
    }
}

/// Render ranked chunks as a cited context block, one `[From <title>]:`
/// line per chunk joined by blank lines, in rank order.
fn build_context(sources: &[ScoredChunk], documents: &[Document]) -> String {
    if sources.is_empty() {
        return NO_CONTEXT_PLACEHOLDER.to_string();
    }

    sources
        .iter()
        .map(|scored| {
            let title = documents
                .iter()
                .find(|doc| doc.id == scored.chunk.document_id)
                .map(|doc| doc.title.as_str())
                .unwrap_or("Unknown");
            format!("[From {}]: {}", title, scored.chunk.text)
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn build_prompt(action: &Action, context: &str, query: &str) -> String {
    format!(
        "The query was classified as {} ({}).\n\nContext from the document collection:\n{}\n\nUser query: {}",
        action.kind, action.reasoning, context, query
    )
}
