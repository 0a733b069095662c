//! # noir-story
//!
//! The game-facing glue around the generative model: mystery generation,
//! yes/no interrogation, hints, and hypothesis verification. All model
//! access goes through the `TextGenerator`/`EmbeddingProvider` traits —
//! nothing here holds a process-global client.

pub mod cleanup;
pub mod client;
pub mod engine;
pub mod hypothesis;
pub mod prompts;
pub mod qa;

pub use client::GeminiClient;
pub use engine::{Story, StoryEngine};
pub use hypothesis::{Closeness, HypothesisVerifier, Verification};
pub use qa::{Exchange, QaEngine, Verdict};
