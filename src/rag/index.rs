//! The searchable chunk collection.
//!
//! The index is a derived view over the currently held documents: adding a
//! document inserts its chunks, removing a document deletes every chunk
//! carrying its id. It owns no documents and can always be rebuilt from
//! the document collection.

use std::collections::HashSet;

use crate::types::{Chunk, Document};

/// Flat in-memory index of all chunks across all current documents.
///
/// Invariant: the contents are exactly the union of the chunks of the
/// documents added and not yet removed, in insertion order, with no
/// duplicates.
#[derive(Debug, Clone, Default)]
pub struct ChunkIndex {
    chunks: Vec<Chunk>,
    document_ids: HashSet<String>,
}

impl ChunkIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a document's chunks. Adding the same document id twice is a
    /// no-op, so chunks are never duplicated.
    pub fn add(&mut self, document: &Document) {
        if !self.document_ids.insert(document.id.clone()) {
            return;
        }
        self.chunks.extend(document.chunks.iter().cloned());
    }

    /// Remove every chunk belonging to `document_id` and return how many
    /// were dropped. Unknown ids remove nothing and are not an error.
    pub fn remove(&mut self, document_id: &str) -> usize {
        if !self.document_ids.remove(document_id) {
            return 0;
        }
        let before = self.chunks.len();
        self.chunks.retain(|chunk| chunk.document_id != document_id);
        before - self.chunks.len()
    }

    /// The full current chunk collection, in insertion order. Ranking is
    /// the retriever's job.
    pub fn all(&self) -> &[Chunk] {
        &self.chunks
    }

    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }
}
