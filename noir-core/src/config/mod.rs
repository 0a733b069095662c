//! Configuration for the noir backend.
//!
//! Every struct is `#[serde(default)]` so a partial TOML file (or none at
//! all) yields a fully usable configuration.

mod embedding_config;
mod generation_config;
mod retrieval_config;

pub use embedding_config::EmbeddingConfig;
pub use generation_config::GenerationConfig;
pub use retrieval_config::RetrievalConfig;

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Default values shared across config structs.
pub mod defaults {
    /// Soft additive bonus for an exact difficulty match during ranking.
    /// A tunable nudge on top of cosine similarity in [-1, 1], not a
    /// hard filter.
    pub const DIFFICULTY_BONUS: f32 = 0.05;

    /// Few-shot examples requested per generation prompt.
    pub const EXAMPLES_K: usize = 7;

    /// Corpus document path.
    pub const CORPUS_PATH: &str = "data/stories.json";

    /// Embedding cache database path.
    pub const CACHE_PATH: &str = "data/embeddings.db";

    /// Embedding model identifier.
    pub const EMBEDDING_MODEL: &str = "text-embedding-004";

    /// Generation model identifier.
    pub const GENERATION_MODEL: &str = "gemini-2.0-flash";

    /// Sampling temperature for story generation.
    pub const STORY_TEMPERATURE: f32 = 0.9;

    /// Output token cap for story generation.
    pub const STORY_MAX_TOKENS: u32 = 500;
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NoirConfig {
    pub retrieval: RetrievalConfig,
    pub embedding: EmbeddingConfig,
    pub generation: GenerationConfig,
}

impl NoirConfig {
    /// Load configuration from a TOML file.
    ///
    /// A missing file yields defaults with a warning; a malformed file is
    /// an error (a present-but-broken config should not be silently
    /// ignored).
    pub fn from_toml_file(path: &Path) -> crate::errors::NoirResult<Self> {
        if !path.exists() {
            warn!(path = %path.display(), "config file not found, using defaults");
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)?;
        let config = toml::from_str(&raw).map_err(|e| crate::errors::NoirError::Config {
            reason: format!("{}: {e}", path.display()),
        })?;
        Ok(config)
    }
}
