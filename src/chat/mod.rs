//! Query Pipeline and Session State
//!
//! This module sequences one query turn end to end and holds the state it
//! runs against.
//!
//! # Module Structure
//!
//! - [`chat::classifier`](crate::chat::classifier) - LLM intent
//!   classification with a silent default on failure
//! - [`chat::orchestrator`](crate::chat::orchestrator) - classification,
//!   retrieval, context assembly and generation for one turn
//! - [`chat::session`](crate::chat::session) - documents, index and
//!   transcript kept in lockstep
//!
//! # One query turn
//!
//! 1. Classify the query into a response mode (falls back to ANSWER)
//! 2. Retrieve the top-scoring chunks from the index
//! 3. Render retrieved chunks into a cited context block
//! 4. Generate under the mode's system instruction
//! 5. Append the user turn and the assistant turn to the transcript
//!
//! The pipeline is strictly sequential and performs no retries. A failed
//! generation call ends that turn with a visible error notice; the next
//! query starts fresh.

/// Intent classification and its fallback policy.
pub mod classifier;
/// Per-turn sequencing of classification, retrieval and generation.
pub mod orchestrator;
/// Session state: documents, index and transcript.
pub mod session;

pub use classifier::IntentClassifier;
pub use orchestrator::Orchestrator;
pub use session::ChatSession;
