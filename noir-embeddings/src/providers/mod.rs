//! Embedding providers that run locally, with no network dependency.
//!
//! The production path injects a remote provider (see `noir-story`); the
//! providers here cover offline operation and tests.

mod tfidf;

pub use tfidf::TfIdfProvider;
