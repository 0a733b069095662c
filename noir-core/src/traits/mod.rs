//! Capability traits for the external generative model.
//!
//! The model is a black box reached only through these traits; engines
//! take an explicit provider reference instead of sharing a process-wide
//! client.

mod embedding;
mod generation;

pub use embedding::EmbeddingProvider;
pub use generation::{GenerationRequest, TextGenerator};
