//! Lexical scoring and ranking of chunks against a query.
//!
//! Scoring is deterministic and purely local: a chunk's score is the
//! number of distinct query tokens that occur as substrings of its
//! lowercased text. Each token counts once per chunk no matter how often
//! it recurs, and no length normalization is applied.

use std::collections::HashSet;

use crate::rag::index::ChunkIndex;
use crate::types::ScoredChunk;

/// Default number of chunks returned per query.
pub const DEFAULT_TOP_K: usize = 3;

/// Query tokens shorter than this never influence scoring.
const MIN_TOKEN_LEN: usize = 3;

/// Tokenize a query: lowercase, split on runs of non-word characters,
/// drop tokens shorter than [`MIN_TOKEN_LEN`], deduplicate.
fn tokenize(query: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    query
        .to_lowercase()
        .split(|c: char| !c.is_alphanumeric() && c != '_')
        .filter(|token| token.chars().count() >= MIN_TOKEN_LEN)
        .filter(|token| seen.insert(token.to_string()))
        .map(String::from)
        .collect()
}

/// Rank the index's chunks against `query` and return at most `top_k` of
/// them, highest score first. Ties keep index insertion order.
///
/// A query with no usable tokens, or an empty index, yields an empty
/// result. This is substring matching: synonyms and paraphrases do not
/// match.
pub fn retrieve(query: &str, index: &ChunkIndex, top_k: usize) -> Vec<ScoredChunk> {
    let tokens = tokenize(query);
    if tokens.is_empty() {
        return Vec::new();
    }

    let mut results: Vec<ScoredChunk> = index
        .all()
        .iter()
        .filter_map(|chunk| {
            let haystack = chunk.text.to_lowercase();
            let score = tokens
                .iter()
                .filter(|token| haystack.contains(token.as_str()))
                .count();
            (score > 0).then(|| ScoredChunk {
                chunk: chunk.clone(),
                score,
            })
        })
        .collect();

    // Vec::sort_by is stable, so equal scores keep index order.
    results.sort_by(|a, b| b.score.cmp(&a.score));
    results.truncate(top_k);
    results
}
