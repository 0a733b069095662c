//! # noir-retrieval
//!
//! The Retrieval Ranker: given a live query (free-text description +
//! target difficulty), scores every corpus record by cosine similarity
//! plus a soft difficulty bonus and returns the top-K formatted as
//! few-shot example blocks.
//!
//! Three tiers of decreasing quality, all caller-invisible:
//! 1. semantic ranking (embedding capability available),
//! 2. random sampling (capability absent, query embedding failed, or no
//!    similarity signal at all),
//! 3. the empty string (empty corpus).
//!
//! `RetrievalEngine::get_examples` is total — it always returns a string,
//! possibly empty, never an error.

pub mod engine;
pub mod fallback;
pub mod format;
pub mod ranking;
pub mod similarity;

pub use engine::RetrievalEngine;
pub use ranking::ScoredCandidate;
