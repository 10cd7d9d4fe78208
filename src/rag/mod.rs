//! Retrieval Pipeline
//!
//! This module provides the retrieval half of the pipeline: turning raw
//! documents into indexed passages and ranking those passages against a
//! query.
//!
//! # Module Structure
//!
//! - [`rag::chunker`](crate::rag::chunker) - Paragraph-based document chunking
//! - [`rag::index`](crate::rag::index) - The searchable chunk collection
//! - [`rag::retriever`](crate::rag::retriever) - Lexical scoring and ranking
//!
//! # Pipeline
//!
//! 1. **Ingestion** - Document text is split into trimmed paragraph chunks
//! 2. **Indexing** - Chunks are added to the flat index, keyed by document
//! 3. **Retrieval** - Query tokens are matched against chunk text and the
//!    top-scoring chunks are returned in rank order
//!
//! Retrieval here is lexical substring matching, not embedding search:
//! callers must not expect synonym or paraphrase matches.

pub mod chunker;
pub mod index;
pub mod retriever;

pub use chunker::chunk;
pub use index::ChunkIndex;
pub use retriever::{retrieve, DEFAULT_TOP_K};
