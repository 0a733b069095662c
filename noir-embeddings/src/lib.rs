//! # noir-embeddings
//!
//! The Embedding Cache: a durable `content_hash → vector` mapping that
//! minimizes calls to the embedding capability. Populated incrementally by
//! the idempotent [`EmbeddingCache::ensure`] pass, read by the retrieval
//! ranker through pure lookups.

mod cache;
mod ensure;
pub mod providers;

pub use cache::EmbeddingCache;
pub use ensure::EnsureReport;
