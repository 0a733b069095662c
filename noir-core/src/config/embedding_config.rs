use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::defaults;

/// Embedding cache configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbeddingConfig {
    /// Path of the embedding cache database.
    pub cache_path: PathBuf,
    /// Embedding model identifier sent to the provider.
    pub model: String,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            cache_path: PathBuf::from(defaults::CACHE_PATH),
            model: defaults::EMBEDDING_MODEL.to_string(),
        }
    }
}
