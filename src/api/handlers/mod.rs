//! API request handlers.
//!
//! This module contains all HTTP request handlers organized by functionality.

/// Chat query and transcript handlers.
pub mod chat;
/// Document ingestion and lifecycle handlers.
pub mod documents;
