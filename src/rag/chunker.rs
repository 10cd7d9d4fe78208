//! Paragraph-based document chunking.
//!
//! Documents are split on blank lines into trimmed paragraph chunks, the
//! unit everything downstream retrieves and cites. Chunking never fails:
//! content with no blank lines becomes a single chunk, and whitespace-only
//! content yields a valid document with zero chunks.

use chrono::Utc;
use uuid::Uuid;

use crate::types::{Chunk, Document};

/// Build a [`Document`] from a title and raw content.
///
/// Content is split on the blank-line separator `\n\n`, each piece is
/// trimmed, and empty pieces are dropped. Surviving chunks
/// get stable ordinal ids of the form `<document-id>-chunk-<index>`.
/// Inserting the result into the index is the caller's responsibility.
pub fn chunk(title: &str, content: &str) -> Document {
    let id = Uuid::new_v4().to_string();

    let chunks: Vec<Chunk> = content
        .split("\n\n")
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .enumerate()
        .map(|(index, text)| Chunk {
            id: format!("{}-chunk-{}", id, index),
            document_id: id.clone(),
            text: text.to_string(),
        })
        .collect();

    Document {
        id,
        title: title.to_string(),
        content: content.to_string(),
        chunks,
        created_at: Utc::now(),
    }
}
