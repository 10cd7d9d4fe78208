//! Session state: the document collection, its derived index, and the
//! append-only transcript.

use std::sync::Arc;

use tracing::info;

use crate::chat::orchestrator::Orchestrator;
use crate::llm::LlmClient;
use crate::rag::{chunker, ChunkIndex};
use crate::types::{AppError, ChatMessage, Document, QueryOutcome, Result};

/// One user's working state. Documents and index move in lockstep:
/// ingesting a document inserts its chunks, removing it deletes them.
///
/// The session is not internally synchronized; callers serialize access
/// (the server wraps it in a `tokio::sync::RwLock`).
pub struct ChatSession {
    documents: Vec<Document>,
    index: ChunkIndex,
    transcript: Vec<ChatMessage>,
    orchestrator: Orchestrator,
}

impl ChatSession {
    /// Creates an empty session whose pipeline runs on the given client.
    pub fn new(llm: Arc<dyn LlmClient>, top_k: usize, temperature: f32) -> Self {
        Self {
            documents: Vec::new(),
            index: ChunkIndex::new(),
            transcript: Vec::new(),
            orchestrator: Orchestrator::new(llm, top_k, temperature),
        }
    }

    /// Ingest a document. Empty or whitespace-only titles and content are
    /// rejected before chunking, so nothing is recorded on failure.
    pub fn add_document(&mut self, title: &str, content: &str) -> Result<Document> {
        if title.trim().is_empty() {
            return Err(AppError::InvalidInput(
                "Document title cannot be empty".to_string(),
            ));
        }
        if content.trim().is_empty() {
            return Err(AppError::InvalidInput(
                "Document content cannot be empty".to_string(),
            ));
        }

        let document = chunker::chunk(title, content);
        self.index.add(&document);
        self.documents.push(document.clone());

        info!(
            document_id = %document.id,
            chunks = document.chunks.len(),
            "Document ingested"
        );
        Ok(document)
    }

    /// Remove a document by id, cascading to its chunks in the index.
    /// Unknown ids remove nothing and return `None`.
    pub fn remove_document(&mut self, id: &str) -> Option<Document> {
        let position = self.documents.iter().position(|doc| doc.id == id)?;
        let document = self.documents.remove(position);
        let chunks_removed = self.index.remove(id);

        info!(document_id = %id, chunks_removed, "Document removed");
        Some(document)
    }

    /// Currently held documents, in ingestion order.
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    /// The append-only transcript.
    pub fn transcript(&self) -> &[ChatMessage] {
        &self.transcript
    }

    /// The current chunk index.
    pub fn index(&self) -> &ChunkIndex {
        &self.index
    }

    /// Run one query turn and append both resulting messages.
    ///
    /// Turns are pushed only after the pipeline resolves; dropping the
    /// future mid-flight leaves the transcript untouched.
    pub async fn submit_query(&mut self, query: &str) -> QueryOutcome {
        let user = ChatMessage::user(query);
        let assistant = self
            .orchestrator
            .handle(query, &self.documents, &self.index)
            .await;

        self.transcript.push(user.clone());
        self.transcript.push(assistant.clone());

        QueryOutcome { user, assistant }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::IntentDecision;

    struct NoopClient;

    #[async_trait::async_trait]
    impl LlmClient for NoopClient {
        async fn classify_intent(&self, _: &str, _: &str) -> Result<IntentDecision> {
            Err(AppError::LLM("unused".to_string()))
        }

        async fn generate(&self, _: &str, _: &str, _: f32) -> Result<String> {
            Err(AppError::LLM("unused".to_string()))
        }

        fn model_name(&self) -> &str {
            "noop"
        }
    }

    fn session() -> ChatSession {
        ChatSession::new(Arc::new(NoopClient), 3, 0.7)
    }

    #[test]
    fn test_add_document_indexes_its_chunks() {
        let mut session = session();
        let doc = session.add_document("Budget", "a\n\nb").unwrap();

        assert_eq!(session.documents().len(), 1);
        assert_eq!(session.index().len(), 2);
        assert_eq!(doc.chunks.len(), 2);
    }

    #[test]
    fn test_empty_title_is_rejected_without_state_changes() {
        let mut session = session();
        assert!(session.add_document("   ", "content").is_err());

        assert!(session.documents().is_empty());
        assert!(session.index().is_empty());
    }

    #[test]
    fn test_empty_content_is_rejected_without_state_changes() {
        let mut session = session();
        assert!(session.add_document("Title", "  \n ").is_err());

        assert!(session.documents().is_empty());
        assert!(session.index().is_empty());
    }

    #[test]
    fn test_remove_cascades_to_the_index() {
        let mut session = session();
        let first = session.add_document("First", "a\n\nb").unwrap();
        session.add_document("Second", "c").unwrap();

        let removed = session.remove_document(&first.id).unwrap();
        assert_eq!(removed.id, first.id);
        assert_eq!(session.documents().len(), 1);
        assert_eq!(session.index().len(), 1);
        assert!(session
            .index()
            .all()
            .iter()
            .all(|chunk| chunk.document_id != first.id));
    }

    #[test]
    fn test_remove_unknown_id_is_a_noop() {
        let mut session = session();
        session.add_document("Doc", "text").unwrap();

        assert!(session.remove_document("missing").is_none());
        assert_eq!(session.documents().len(), 1);
        assert_eq!(session.index().len(), 1);
    }
}
