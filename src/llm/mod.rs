//! LLM Client Abstraction
//!
//! The pipeline never talks to a model provider directly. It goes through
//! the [`LlmClient`] trait, which exposes exactly the two calls the
//! pipeline makes:
//!
//! - [`LlmClient::classify_intent`] - schema-constrained intent
//!   classification returning a structured decision
//! - [`LlmClient::generate`] - free-text generation under a system
//!   instruction
//!
//! Injecting the client as a trait object keeps the pipeline deterministic
//! and testable: tests substitute a scripted implementation and never
//! touch the network.

/// Core LLM client trait and the structured classification decision.
pub mod client;
/// Google Gemini implementation of the client trait.
pub mod gemini;

pub use client::{IntentDecision, LlmClient};
pub use gemini::GeminiClient;
