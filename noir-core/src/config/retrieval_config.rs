use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::defaults;

/// Retrieval ranker configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalConfig {
    /// Path of the corpus JSON document.
    pub corpus_path: PathBuf,
    /// Number of few-shot examples to retrieve per query.
    pub examples_k: usize,
    /// Additive score bonus for an exact difficulty match.
    pub difficulty_bonus: f32,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            corpus_path: PathBuf::from(defaults::CORPUS_PATH),
            examples_k: defaults::EXAMPLES_K,
            difficulty_bonus: defaults::DIFFICULTY_BONUS,
        }
    }
}
