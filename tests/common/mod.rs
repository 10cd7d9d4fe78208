//! Shared support code for integration tests.

pub mod mocks;
